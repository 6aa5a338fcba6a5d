//! # Kernel Entry Point
//!
//! Built for a bare-metal target (`target_os = "none"`), this is the kernel
//! image: `kernel_main` receives the bootloader's boot
//! and graphics information, prints them to the VGA text console, and halts.
//!
//! Built for a hosted target, it is a simulator that runs the same report
//! against an in-memory screen and prints the result to stdout.

#![cfg_attr(target_os = "none", no_std, no_main)]
#![allow(unsafe_code)]

#[cfg(target_os = "none")]
mod bare;

#[cfg(not(target_os = "none"))]
mod hosted;

#[cfg(not(target_os = "none"))]
fn main() {
    hosted::run();
}
