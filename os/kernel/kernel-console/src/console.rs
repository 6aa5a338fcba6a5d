//! # Cursor-managed text console

use crate::numfmt::{format_decimal, format_hex};
use crate::{ColorCode, ScreenChar, TextBuffer};
use core::fmt;

/// A text console writing into a [`TextBuffer`].
///
/// The console owns its cursor. Output wraps to the next row at the last
/// column, and from the last row back to row 0, overwriting what was there.
/// There is no scrolling.
pub struct Console<B: TextBuffer> {
    buffer: B,
    row: usize,
    column: usize,
}

impl<B: TextBuffer> Console<B> {
    /// Wraps `buffer` with the cursor at the top-left cell.
    ///
    /// The buffer contents are left as they are; call [`clear`](Self::clear)
    /// to blank the screen.
    #[must_use]
    pub const fn new(buffer: B) -> Self {
        Self {
            buffer,
            row: 0,
            column: 0,
        }
    }

    /// Current cursor position as `(row, column)`.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &B {
        &self.buffer
    }

    #[must_use]
    pub fn into_buffer(self) -> B {
        self.buffer
    }

    /// Fill every cell with a space in `color` and home the cursor.
    pub fn clear(&mut self, color: ColorCode) {
        let blank = ScreenChar::blank(color);
        for row in 0..B::HEIGHT {
            for column in 0..B::WIDTH {
                self.buffer.write_cell(row, column, blank);
            }
        }

        self.row = 0;
        self.column = 0;
    }

    /// Write one character at the cursor and advance.
    ///
    /// A newline moves to column 0 of the next row without writing a cell.
    pub fn put_char(&mut self, c: u8, color: ColorCode) {
        if c == b'\n' {
            self.new_line();
        } else {
            self.buffer
                .write_cell(self.row, self.column, ScreenChar::glyph(c, color));
            self.column += 1;
            if self.column >= B::WIDTH {
                self.new_line();
            }
        }
    }

    /// Write every byte of `text` through [`put_char`](Self::put_char).
    pub fn print(&mut self, text: &str, color: ColorCode) {
        for c in text.bytes() {
            self.put_char(c, color);
        }
    }

    /// Write `value` as `0x`-prefixed uppercase hexadecimal.
    pub fn print_hex(&mut self, value: u64, color: ColorCode) {
        self.print(format_hex(value).as_str(), color);
    }

    /// Write `value` in decimal.
    pub fn print_dec(&mut self, value: u64, color: ColorCode) {
        self.print(format_decimal(value).as_str(), color);
    }

    /// A [`fmt::Write`] adapter printing in `color`.
    pub const fn writer(&mut self, color: ColorCode) -> ConsoleWriter<'_, B> {
        ConsoleWriter {
            console: self,
            color,
        }
    }

    const fn new_line(&mut self) {
        self.column = 0;
        self.row += 1;
        if self.row >= B::HEIGHT {
            self.row = 0;
        }
    }
}

/// Formats into a [`Console`] in a fixed color.
pub struct ConsoleWriter<'a, B: TextBuffer> {
    console: &'a mut Console<B>,
    color: ColorCode,
}

impl<B: TextBuffer> fmt::Write for ConsoleWriter<'_, B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.console.print(s, self.color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryTextBuffer;
    use core::fmt::Write;

    const W: usize = 8;
    const H: usize = 4;

    fn console() -> Console<MemoryTextBuffer<W, H>> {
        let mut console = Console::new(MemoryTextBuffer::new());
        console.clear(ColorCode::DEFAULT);
        console
    }

    fn row(console: &Console<MemoryTextBuffer<W, H>>, row: usize) -> String {
        String::from_utf8_lossy(&console.buffer().row_bytes(row)).into_owned()
    }

    #[test]
    fn clear_blanks_every_cell_and_homes_cursor() {
        let mut console = Console::new(MemoryTextBuffer::<W, H>::new());
        console.print("abc\nde", ColorCode::RED);
        console.clear(ColorCode::CYAN);

        assert_eq!(console.cursor(), (0, 0));
        for r in 0..H {
            for c in 0..W {
                assert_eq!(console.buffer().cell(r, c), ScreenChar::blank(ColorCode::CYAN));
            }
        }
    }

    #[test]
    fn put_char_writes_glyph_and_color() {
        let mut console = console();
        console.put_char(b'K', ColorCode::GREEN);

        assert_eq!(console.buffer().cell(0, 0), ScreenChar::glyph(b'K', ColorCode::GREEN));
        assert_eq!(console.cursor(), (0, 1));
    }

    #[test]
    fn full_row_wraps_exactly_once() {
        let mut console = console();
        for _ in 0..W {
            console.put_char(b'x', ColorCode::DEFAULT);
        }

        assert_eq!(console.cursor(), (1, 0));
        assert_eq!(row(&console, 0), "xxxxxxxx");
        assert_eq!(row(&console, 1), "        ");
    }

    #[test]
    fn newline_moves_to_next_row_without_writing() {
        let mut console = console();
        console.print("ab", ColorCode::DEFAULT);
        let before = console.buffer().write_count();

        console.put_char(b'\n', ColorCode::DEFAULT);

        assert_eq!(console.cursor(), (1, 0));
        assert_eq!(console.buffer().write_count(), before);
        assert_eq!(row(&console, 0), "ab      ");
    }

    #[test]
    fn newline_on_last_row_wraps_to_top() {
        let mut console = console();
        console.print("\n\n\n", ColorCode::DEFAULT);
        assert_eq!(console.cursor(), (H - 1, 0));

        console.print("\nz", ColorCode::DEFAULT);
        assert_eq!(console.cursor(), (0, 1));
        assert_eq!(row(&console, 0), "z       ");
    }

    #[test]
    fn overflowing_the_grid_wraps_to_row_zero_in_bounds() {
        let mut console = Console::new(MemoryTextBuffer::<W, H>::new());
        for i in 0..(H + 1) * W {
            let glyph = if i < H * W { b'a' } else { b'b' };
            console.put_char(glyph, ColorCode::DEFAULT);
        }

        assert_eq!(console.buffer().write_count(), (H + 1) * W);
        assert_eq!(console.cursor(), (1, 0));
        assert_eq!(row(&console, 0), "bbbbbbbb");
        assert_eq!(row(&console, 1), "aaaaaaaa");
    }

    #[test]
    fn prints_numbers() {
        let mut console = console();
        console.print_hex(0, ColorCode::DEFAULT);
        console.put_char(b' ', ColorCode::DEFAULT);
        console.print_dec(0, ColorCode::DEFAULT);
        console.put_char(b'\n', ColorCode::DEFAULT);
        console.print_hex(0xBEEF, ColorCode::DEFAULT);
        console.put_char(b'\n', ColorCode::DEFAULT);
        console.print_dec(1_234_567, ColorCode::DEFAULT);

        assert_eq!(row(&console, 0), "0x0 0   ");
        assert_eq!(row(&console, 1), "0xBEEF  ");
        assert_eq!(row(&console, 2), "1234567 ");
    }

    #[test]
    fn writer_formats_into_console() {
        let mut console = console();
        write!(console.writer(ColorCode::RED), "{}-{}", 4, "ok").unwrap();

        assert_eq!(row(&console, 0), "4-ok    ");
        assert_eq!(console.buffer().cell(0, 0).color(), ColorCode::RED);
    }
}
