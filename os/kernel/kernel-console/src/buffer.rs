//! # Text buffer devices
//!
//! [`TextBuffer`] is the seam between the cursor logic in
//! [`Console`](crate::Console) and the memory the cells end up in: the
//! memory-mapped VGA buffer on hardware, or a plain array on the host.

use crate::ScreenChar;
use kernel_info::layout::{VGA_HEIGHT, VGA_TEXT_BUFFER, VGA_WIDTH};

/// A fixed-size grid of character cells.
pub trait TextBuffer {
    /// Number of columns.
    const WIDTH: usize;
    /// Number of rows.
    const HEIGHT: usize;

    /// Store `cell` at (`row`, `column`).
    ///
    /// Callers keep `row < HEIGHT` and `column < WIDTH`.
    fn write_cell(&mut self, row: usize, column: usize, cell: ScreenChar);
}

/// The memory-mapped VGA color text buffer.
pub struct VgaTextBuffer {
    base: *mut u16,
}

impl VgaTextBuffer {
    /// The buffer at its legacy physical address `0xB8000`.
    ///
    /// # Safety
    /// The VGA text buffer must be identity mapped, writable, and not be
    /// written through any other handle while this one is alive.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const unsafe fn legacy() -> Self {
        unsafe { Self::new(VGA_TEXT_BUFFER as usize as *mut u16) }
    }

    /// A buffer of [`VGA_WIDTH`] × [`VGA_HEIGHT`] cells starting at `base`.
    ///
    /// # Safety
    /// `base` must point to `VGA_WIDTH * VGA_HEIGHT` writable `u16` cells
    /// that no other handle writes to while this one is alive.
    #[must_use]
    pub const unsafe fn new(base: *mut u16) -> Self {
        Self { base }
    }
}

impl TextBuffer for VgaTextBuffer {
    const WIDTH: usize = VGA_WIDTH;
    const HEIGHT: usize = VGA_HEIGHT;

    #[inline]
    fn write_cell(&mut self, row: usize, column: usize, cell: ScreenChar) {
        if row >= Self::HEIGHT || column >= Self::WIDTH {
            return;
        }

        let index = row * Self::WIDTH + column;

        // SAFETY: index is within the grid the constructor vouched for.
        // Volatile, since the stores are observed by the display adapter.
        unsafe {
            self.base.add(index).write_volatile(cell.into_bits());
        }
    }
}

/// An in-memory grid, e.g. for host tests or rendering to another sink.
///
/// Writes outside the grid panic.
pub struct MemoryTextBuffer<const W: usize, const H: usize> {
    cells: [[ScreenChar; W]; H],
    writes: usize,
}

impl<const W: usize, const H: usize> MemoryTextBuffer<W, H> {
    /// A grid of zeroed cells.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[ScreenChar::new(); W]; H],
            writes: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn cell(&self, row: usize, column: usize) -> ScreenChar {
        self.cells[row][column]
    }

    /// The character codes of one row.
    #[must_use]
    pub fn row_bytes(&self, row: usize) -> [u8; W] {
        let mut out = [0u8; W];
        for (dst, cell) in out.iter_mut().zip(self.cells[row].iter()) {
            *dst = cell.ascii();
        }
        out
    }

    /// Total number of cell writes so far.
    #[inline]
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.writes
    }
}

impl<const W: usize, const H: usize> Default for MemoryTextBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> TextBuffer for MemoryTextBuffer<W, H> {
    const WIDTH: usize = W;
    const HEIGHT: usize = H;

    fn write_cell(&mut self, row: usize, column: usize, cell: ScreenChar) {
        assert!(
            row < H && column < W,
            "cell ({row}, {column}) outside {W}x{H} grid"
        );
        self.cells[row][column] = cell;
        self.writes += 1;
    }
}
