//! # Memory and Device Layout

use crate::boot::{BootInfo, ColorChannel, GraphicsInfo, MemoryMap, MemoryRegion};
use core::mem::{offset_of, size_of};

/// Physical address of the VGA text-mode buffer.
///
/// The legacy color text buffer lives at `0xB8000` and is identity mapped
/// while this stage runs.
pub const VGA_TEXT_BUFFER: u64 = 0x000B_8000;

/// Number of character columns of the VGA text console.
pub const VGA_WIDTH: usize = 80;

/// Number of character rows of the VGA text console.
pub const VGA_HEIGHT: usize = 25;

/// Where the bootloader places the kernel image in *physical* memory.
///
/// # Kernel Build
/// This information is sourced in the kernel's `build.rs` to configure
/// the linker.
pub const PHYS_LOAD: u64 = 0x0010_0000; // 1 MiB

/// Fixed capacity of the memory region array in [`MemoryMap`].
pub const MAX_MEMORY_REGIONS: usize = 64;

/// Size of a single packed [`MemoryRegion`] in bytes.
pub const MEMORY_REGION_SIZE: usize = 24;

/// Size of the packed [`MemoryMap`] in bytes.
pub const MEMORY_MAP_SIZE: usize = 2 + MAX_MEMORY_REGIONS * MEMORY_REGION_SIZE + 8;

/// Size of the packed [`BootInfo`] in bytes.
pub const BOOT_INFO_SIZE: usize = MEMORY_MAP_SIZE;

/// Size of the packed [`GraphicsInfo`] in bytes.
pub const GRAPHICS_INFO_SIZE: usize = 19;

const _: () = {
    assert!(cfg!(target_endian = "little"));
    assert!(PHYS_LOAD.is_multiple_of(4096));
    assert!(VGA_TEXT_BUFFER.is_multiple_of(4096));

    assert!(size_of::<MemoryRegion>() == MEMORY_REGION_SIZE);
    assert!(size_of::<MemoryMap>() == MEMORY_MAP_SIZE);
    assert!(MEMORY_MAP_SIZE == 1546);
    assert!(size_of::<BootInfo>() == BOOT_INFO_SIZE);
    assert!(size_of::<ColorChannel>() == 2);
    assert!(size_of::<GraphicsInfo>() == GRAPHICS_INFO_SIZE);

    assert!(offset_of!(MemoryRegion, length) == 8);
    assert!(offset_of!(MemoryRegion, region_type) == 16);
    assert!(offset_of!(MemoryRegion, acpi) == 20);
    assert!(offset_of!(MemoryMap, entries) == 2);
    assert!(offset_of!(MemoryMap, kaslr_offset) == 2 + MAX_MEMORY_REGIONS * MEMORY_REGION_SIZE);

    assert!(offset_of!(GraphicsInfo, bpp) == 6);
    assert!(offset_of!(GraphicsInfo, framebuffer) == 7);
    assert!(offset_of!(GraphicsInfo, pitch) == 11);
    assert!(offset_of!(GraphicsInfo, red) == 13);
    assert!(offset_of!(GraphicsInfo, green) == 15);
    assert!(offset_of!(GraphicsInfo, blue) == 17);
};
