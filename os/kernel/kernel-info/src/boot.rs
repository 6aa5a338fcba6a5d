//! # Kernel Boot Information
//!
//! Packed, little-endian records produced by the bootloader. None of them is
//! ever mutated by the kernel. Fields of packed structures must be read by
//! value (copied out) rather than borrowed.

use crate::BootInfoError;
use crate::layout::{BOOT_INFO_SIZE, GRAPHICS_INFO_SIZE, MAX_MEMORY_REGIONS};

/// Kernel function pointer.
///
/// # ABI
/// The bootstrap code transfers control with the C calling convention,
/// passing a required [`BootInfo`] pointer and an optional (nullable)
/// [`GraphicsInfo`] pointer. The kernel never returns.
pub type KernelEntryFn = extern "C" fn(*const BootInfo, *const GraphicsInfo) -> !;

/// Information the kernel receives from the bootloader.
#[repr(C, packed)]
#[derive(Copy, Clone)]
pub struct BootInfo {
    /// E820-style memory map.
    pub memmap: MemoryMap,
}

impl BootInfo {
    /// Decode the boot information handed over by the bootloader.
    ///
    /// This is the only validity check performed on the boot information:
    /// a null pointer is rejected. The structure has an alignment of one and
    /// consists solely of integers, so any non-null pointer to
    /// [`BOOT_INFO_SIZE`] readable bytes is a valid `BootInfo`.
    ///
    /// # Errors
    /// Returns [`BootInfoError::NullPointer`] if `ptr` is null.
    ///
    /// # Safety
    /// If non-null, `ptr` must point to [`BOOT_INFO_SIZE`] bytes that stay
    /// readable and unmodified for `'a`.
    pub unsafe fn from_ptr<'a>(ptr: *const Self) -> Result<&'a Self, BootInfoError> {
        // SAFETY: caller guarantees readability; alignment is 1.
        unsafe { ptr.as_ref() }.ok_or(BootInfoError::NullPointer)
    }

    /// Decode the boot information from a raw byte image.
    ///
    /// # Errors
    /// Returns [`BootInfoError::Truncated`] if fewer than [`BOOT_INFO_SIZE`]
    /// bytes are provided.
    pub const fn from_bytes(bytes: &[u8]) -> Result<&Self, BootInfoError> {
        if bytes.len() < BOOT_INFO_SIZE {
            return Err(BootInfoError::Truncated {
                expected: BOOT_INFO_SIZE,
                actual: bytes.len(),
            });
        }

        // SAFETY: length checked above; `BootInfo` is `packed` (align 1)
        // and every bit pattern is a valid value.
        Ok(unsafe { &*bytes.as_ptr().cast::<Self>() })
    }

    /// The memory map.
    #[inline]
    #[must_use]
    pub const fn memory_map(&self) -> &MemoryMap {
        &self.memmap
    }
}

/// Fixed-capacity list of memory regions.
///
/// `entry_count` comes straight from firmware and is never trusted beyond
/// [`MAX_MEMORY_REGIONS`]; all accessors use the clamped [`len`](Self::len).
#[repr(C, packed)]
#[derive(Copy, Clone)]
pub struct MemoryMap {
    /// Number of valid entries as reported by the bootloader.
    pub entry_count: u16,
    /// Region slots; only the first [`len`](Self::len) are meaningful.
    pub entries: [MemoryRegion; MAX_MEMORY_REGIONS],
    /// Relocation delta applied to the kernel image.
    pub kaslr_offset: u64,
}

impl MemoryMap {
    /// An empty map with all slots unused.
    pub const EMPTY: Self = Self {
        entry_count: 0,
        entries: [MemoryRegion::UNUSED; MAX_MEMORY_REGIONS],
        kaslr_offset: 0,
    };

    /// Builds a map from a list of regions, keeping at most
    /// [`MAX_MEMORY_REGIONS`] of them.
    #[must_use]
    pub fn from_regions(regions: &[MemoryRegion], kaslr_offset: u64) -> Self {
        let mut map = Self::EMPTY;
        let count = regions.len().min(MAX_MEMORY_REGIONS);
        map.entries[..count].copy_from_slice(&regions[..count]);
        map.entry_count = u16::try_from(count).unwrap_or(u16::MAX);
        map.kaslr_offset = kaslr_offset;
        map
    }

    /// The entry count exactly as stored by the bootloader.
    #[inline]
    #[must_use]
    pub const fn raw_entry_count(&self) -> u16 {
        self.entry_count
    }

    /// Number of entries that may be inspected, `min(entry_count, 64)`.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        let count = self.entry_count as usize;
        if count > MAX_MEMORY_REGIONS {
            MAX_MEMORY_REGIONS
        } else {
            count
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the stored entry count exceeds the structural capacity.
    #[inline]
    #[must_use]
    pub const fn is_clamped(&self) -> bool {
        self.entry_count as usize > MAX_MEMORY_REGIONS
    }

    /// Returns the region at `index` if it is within [`len`](Self::len).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MemoryRegion> {
        self.as_slice().get(index)
    }

    /// The valid regions in stored order (unsorted, possibly overlapping).
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[MemoryRegion] {
        &self.entries[..self.len()]
    }

    /// Iterates the valid regions in stored order.
    #[inline]
    pub fn regions(&self) -> core::slice::Iter<'_, MemoryRegion> {
        self.as_slice().iter()
    }

    /// The relocation delta of the kernel image.
    #[inline]
    #[must_use]
    pub const fn kaslr_offset(&self) -> u64 {
        self.kaslr_offset
    }

    /// Sum of all usable region lengths, saturating at `u64::MAX`.
    ///
    /// Overlapping usable regions are counted twice.
    #[must_use]
    pub fn usable_bytes(&self) -> u64 {
        self.regions()
            .filter(|r| r.kind() == RegionKind::Usable)
            .fold(0u64, |acc, r| acc.saturating_add(r.length()))
    }
}

/// A single E820 memory region descriptor.
#[repr(C, packed)]
#[derive(Copy, Clone)]
pub struct MemoryRegion {
    /// Physical start address.
    pub base: u64,
    /// Length in bytes; zero marks an unused slot.
    pub length: u64,
    /// Raw classification code, see [`RegionKind`].
    pub region_type: u32,
    /// ACPI 3.0 extended attributes.
    pub acpi: u32,
}

impl MemoryRegion {
    /// An unused slot.
    pub const UNUSED: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(base: u64, length: u64, region_type: u32) -> Self {
        Self {
            base,
            length,
            region_type,
            acpi: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn base(&self) -> u64 {
        self.base
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> u64 {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn acpi(&self) -> u32 {
        self.acpi
    }

    /// Zero-length regions carry no meaning and are skipped when reporting.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Inclusive end address, `base + length - 1`.
    ///
    /// Returns `None` for empty regions. Wraps on overflow.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Option<u64> {
        if self.is_empty() {
            None
        } else {
            Some(self.base.wrapping_add(self.length - 1))
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> RegionKind {
        RegionKind::from_code(self.region_type)
    }
}

/// Classification of a memory region.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RegionKind {
    /// Type 1: RAM available to the OS.
    Usable,
    /// Type 2: reserved by firmware or hardware.
    Reserved,
    /// Type 3: ACPI tables, reclaimable once parsed.
    AcpiReclaimable,
    /// Type 4: ACPI non-volatile storage.
    AcpiNvs,
    /// Type 5: defective RAM.
    BadMemory,
    /// Any other code.
    Unknown(u32),
}

impl RegionKind {
    pub const USABLE: u32 = 1;
    pub const RESERVED: u32 = 2;
    pub const ACPI_RECLAIM: u32 = 3;
    pub const ACPI_NVS: u32 = 4;
    pub const BAD_MEMORY: u32 = 5;

    #[must_use]
    pub const fn from_code(code: u32) -> Self {
        match code {
            Self::USABLE => Self::Usable,
            Self::RESERVED => Self::Reserved,
            Self::ACPI_RECLAIM => Self::AcpiReclaimable,
            Self::ACPI_NVS => Self::AcpiNvs,
            Self::BAD_MEMORY => Self::BadMemory,
            other => Self::Unknown(other),
        }
    }

    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Usable => Self::USABLE,
            Self::Reserved => Self::RESERVED,
            Self::AcpiReclaimable => Self::ACPI_RECLAIM,
            Self::AcpiNvs => Self::ACPI_NVS,
            Self::BadMemory => Self::BAD_MEMORY,
            Self::Unknown(code) => code,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Usable => "Usable",
            Self::Reserved => "Reserved",
            Self::AcpiReclaimable => "ACPI Reclaim",
            Self::AcpiNvs => "ACPI NVS",
            Self::BadMemory => "Bad Memory",
            Self::Unknown(_) => "Unknown",
        }
    }
}

/// Linear framebuffer description from the VBE mode setup.
///
/// When `enabled == 0` every other field is meaningless; use
/// [`mode`](Self::mode) to only ever read them when valid.
#[repr(C, packed)]
#[derive(Copy, Clone)]
pub struct GraphicsInfo {
    /// 1 if a graphics mode was set, 0 otherwise.
    pub enabled: u16,
    /// Visible width in pixels.
    pub width: u16,
    /// Visible height in pixels.
    pub height: u16,
    /// Bits per pixel.
    pub bpp: u8,
    /// Physical address of the linear framebuffer (32-bit by layout).
    pub framebuffer: u32,
    /// Bytes per scanline.
    pub pitch: u16,
    pub red: ColorChannel,
    pub green: ColorChannel,
    pub blue: ColorChannel,
}

impl GraphicsInfo {
    /// A descriptor with graphics disabled.
    pub const DISABLED: Self = Self {
        enabled: 0,
        width: 0,
        height: 0,
        bpp: 0,
        framebuffer: 0,
        pitch: 0,
        red: ColorChannel::NONE,
        green: ColorChannel::NONE,
        blue: ColorChannel::NONE,
    };

    /// Decode the optional graphics information.
    ///
    /// A null pointer means no graphics mode was configured and is not an
    /// error.
    ///
    /// # Safety
    /// If non-null, `ptr` must point to [`GRAPHICS_INFO_SIZE`] bytes that
    /// stay readable and unmodified for `'a`.
    #[must_use]
    pub unsafe fn from_ptr<'a>(ptr: *const Self) -> Option<&'a Self> {
        // SAFETY: caller guarantees readability; alignment is 1.
        unsafe { ptr.as_ref() }
    }

    /// Decode the graphics information from a raw byte image.
    ///
    /// # Errors
    /// Returns [`BootInfoError::Truncated`] if fewer than
    /// [`GRAPHICS_INFO_SIZE`] bytes are provided.
    pub const fn from_bytes(bytes: &[u8]) -> Result<&Self, BootInfoError> {
        if bytes.len() < GRAPHICS_INFO_SIZE {
            return Err(BootInfoError::Truncated {
                expected: GRAPHICS_INFO_SIZE,
                actual: bytes.len(),
            });
        }

        // SAFETY: length checked above; packed (align 1), integers only.
        Ok(unsafe { &*bytes.as_ptr().cast::<Self>() })
    }

    /// The raw `enabled` flag.
    #[inline]
    #[must_use]
    pub const fn enabled_flag(&self) -> u16 {
        self.enabled
    }

    #[inline]
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled != 0
    }

    /// The framebuffer mode, available only if graphics is enabled.
    #[must_use]
    pub const fn mode(&self) -> Option<GraphicsMode> {
        if !self.is_enabled() {
            return None;
        }

        Some(GraphicsMode {
            width: self.width,
            height: self.height,
            bpp: self.bpp,
            framebuffer: self.framebuffer,
            pitch: self.pitch,
            red: self.red,
            green: self.green,
            blue: self.blue,
        })
    }
}

/// Decoded fields of an enabled [`GraphicsInfo`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GraphicsMode {
    pub width: u16,
    pub height: u16,
    pub bpp: u8,
    pub framebuffer: u32,
    pub pitch: u16,
    pub red: ColorChannel,
    pub green: ColorChannel,
    pub blue: ColorChannel,
}

/// Position of one color channel within a pixel.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ColorChannel {
    /// Size of the channel mask in bits.
    pub mask_size: u8,
    /// Bit position of the least significant bit of the channel.
    pub position: u8,
}

impl ColorChannel {
    pub const NONE: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(mask_size: u8, position: u8) -> Self {
        Self {
            mask_size,
            position,
        }
    }
}
