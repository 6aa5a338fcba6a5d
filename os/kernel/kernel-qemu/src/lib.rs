//! # QEMU Debug Console Output
//!
//! Before the kernel has anything but the VGA text buffer, the only other
//! way to get text out is QEMU's debug console: every byte written to I/O
//! port `0x402` shows up on the host.
//!
//! ```bash
//! qemu-system-x86_64 -drive format=raw,file=disk.img -debugcon stdio
//! ```
//!
//! * [`QemuLogger`]: a [`log::Log`] backend, installed once from a `static`
//! * [`qemu_trace!`]: raw `format_args!` output, bypassing `log`
//!
//! Both write byte by byte with no buffering and no allocation. With the
//! `enabled` feature off, all output compiles to nothing.
//!
//! ```rust,no_run
//! use kernel_qemu::QemuLogger;
//! use log::{LevelFilter, info};
//!
//! static LOGGER: QemuLogger = QemuLogger::new(LevelFilter::Debug);
//!
//! LOGGER.install().expect("logger installed once");
//! info!("memory map decoded");
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod logger;

pub use logger::QemuLogger;

#[cfg(feature = "enabled")]
#[doc(hidden)]
pub mod qemu_fmt {
    use core::fmt::{self, Write};

    /// QEMU's `-debugcon` I/O port.
    const QEMU_DEBUG_PORT: u16 = 0x402;

    /// Write a single byte to the debug console.
    #[allow(clippy::inline_always)]
    #[inline(always)]
    pub fn dbg_putc(c: u8) {
        // SAFETY: only called from ring 0; 0x402 is QEMU's debug console.
        unsafe { outb(QEMU_DEBUG_PORT, c) }
    }

    #[cfg(target_arch = "x86_64")]
    #[allow(clippy::inline_always)]
    #[inline(always)]
    unsafe fn outb(port: u16, val: u8) {
        unsafe {
            core::arch::asm!(
                "out dx, al",
                in("dx") port,
                in("al") val,
                options(nomem, nostack, preserves_flags)
            );
        }
    }

    #[cfg(not(target_arch = "x86_64"))]
    #[inline(always)]
    #[allow(clippy::inline_always)]
    const unsafe fn outb(_port: u16, _val: u8) {}

    /// [`Write`] sink for the debug console.
    pub struct DebugConsole;

    impl Write for DebugConsole {
        #[inline]
        fn write_str(&mut self, s: &str) -> fmt::Result {
            s.bytes().for_each(dbg_putc);
            Ok(())
        }
    }

    #[doc(hidden)]
    #[inline]
    pub fn qemu_write(args: fmt::Arguments) {
        // Best effort; the sink itself never fails.
        let _ = fmt::write(&mut DebugConsole, args);
    }
}

#[cfg(not(feature = "enabled"))]
#[doc(hidden)]
pub mod qemu_fmt {
    use core::fmt;

    #[doc(hidden)]
    #[inline(always)]
    #[allow(clippy::inline_always)]
    pub const fn qemu_write(_: fmt::Arguments) {}
}

/// Write `format!`-style output straight to the QEMU debug console.
#[macro_export]
macro_rules! qemu_trace {
    ($($arg:tt)*) => {{
        $crate::qemu_fmt::qemu_write(core::format_args!($($arg)*));
    }};
}
