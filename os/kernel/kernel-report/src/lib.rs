//! # Boot Information Report
//!
//! Renders the bootloader's memory map and framebuffer description as text
//! on a [`Console`](kernel_console::Console), then halts. This is the first
//! thing the kernel does; there is no heap, no interrupts and no scheduler.
//!
//! * [`report_memory_map`]: one line per non-empty E820 region
//! * [`report_graphics_info`]: the VBE framebuffer descriptor, if any
//! * [`BootReport`]: sequences both, see [`Stage`]
//! * [`enter`]: decode raw bootloader pointers, report, [`Platform::halt`]
//!
//! Diagnostics are mirrored to the [`log`] facade.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod entry;
mod graphics;
mod memory_map;

pub use entry::{BootReport, Platform, Stage, enter};
pub use graphics::report_graphics_info;
pub use memory_map::{region_color, report_memory_map};
