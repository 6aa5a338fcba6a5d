//! # VGA Text Console
//!
//! The earliest output device the kernel has: the 80×25 color text buffer at
//! `0xB8000`. No heap, no interrupts, no locking; a single [`Console`] owns
//! its cursor and its [`TextBuffer`].
//!
//! * [`ScreenChar`] / [`ColorCode`] / [`Color`]: the 16-bit cell encoding
//! * [`TextBuffer`]: device seam, implemented by [`VgaTextBuffer`] (MMIO) and
//!   [`MemoryTextBuffer`] (plain array)
//! * [`Console`]: `clear`, `put_char`, `print`, `print_hex`, `print_dec`
//! * [`numfmt`]: allocation-free hexadecimal and decimal formatting
//!
//! ```rust
//! use kernel_console::{ColorCode, Console, MemoryTextBuffer};
//!
//! let mut console = Console::new(MemoryTextBuffer::<80, 25>::new());
//! console.clear(ColorCode::DEFAULT);
//! console.print("KASLR offset: ", ColorCode::DEFAULT);
//! console.print_hex(0x20_0000, ColorCode::DEFAULT);
//!
//! assert_eq!(&console.buffer().row_bytes(0)[..22], b"KASLR offset: 0x200000");
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod buffer;
mod color;
mod console;
pub mod numfmt;

pub use buffer::{MemoryTextBuffer, TextBuffer, VgaTextBuffer};
pub use color::{Color, ColorCode, ScreenChar};
pub use console::{Console, ConsoleWriter};
