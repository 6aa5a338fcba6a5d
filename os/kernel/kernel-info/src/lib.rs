//! # Kernel Boot Interface
//!
//! This crate defines the binary contract between the bootloader and the
//! kernel's earliest diagnostic stage: the memory map and the optional
//! framebuffer description, plus the fixed device and layout constants the
//! stage relies on.
//!
//! ## Boot Information ([`boot`])
//! * **Kernel Entry Point**: [`KernelEntryFn`](boot::KernelEntryFn), C ABI,
//!   never returns
//! * **Memory Map**: E820 region list with a fixed capacity of 64 slots
//! * **Graphics**: VBE linear framebuffer descriptor, optional
//!
//! ## Layout ([`layout`])
//! * **VGA Text Console**: `0xB8000`, 80×25 cells
//! * **ABI Sizes**: compile-time checked against the packed structures
//!
//! ## Binary Layout
//!
//! All records are `#[repr(C, packed)]`, little-endian, with fields in
//! declared order and no padding:
//!
//! ```text
//! MemoryRegion  (24 bytes)   base:u64 length:u64 type:u32 acpi:u32
//! MemoryMap     (1546 bytes) entry_count:u16 entries:[MemoryRegion; 64] kaslr_offset:u64
//! BootInfo      (1546 bytes) memmap:MemoryMap
//! GraphicsInfo  (19 bytes)   enabled:u16 width:u16 height:u16 bpp:u8 framebuffer:u32
//!                            pitch:u16 red:(u8,u8) green:(u8,u8) blue:(u8,u8)
//! ```
//!
//! ## Trust Boundary
//!
//! The structures come from firmware and are decoded once, through
//! [`BootInfo::from_ptr`](boot::BootInfo::from_ptr) or
//! [`BootInfo::from_bytes`](boot::BootInfo::from_bytes). The region count is
//! clamped by [`MemoryMap::len`](boot::MemoryMap::len) so no consumer can
//! index beyond the fixed array, whatever `entry_count` claims.
//!
//! ```rust
//! use kernel_info::boot::{BootInfo, MemoryMap, MemoryRegion, RegionKind};
//!
//! let mut map = MemoryMap::from_regions(&[MemoryRegion::new(0x1000, 0x1000, 1)], 0);
//! map.entry_count = 1000;
//!
//! let bi = BootInfo { memmap: map };
//! assert_eq!(bi.memory_map().len(), 64);
//! assert_eq!(bi.memory_map().regions().next().map(MemoryRegion::kind), Some(RegionKind::Usable));
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

pub mod boot;
pub mod layout;

/// Error decoding the boot information handed over by the bootloader.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootInfoError {
    #[error("boot information pointer is null")]
    NullPointer,
    #[error("boot information truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
}
