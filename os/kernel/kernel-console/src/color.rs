//! # VGA text attributes
//!
//! Each cell of the text buffer is a 16-bit value:
//!
//! ```text
//!  15    12 11     8 7              0
//! +--------+--------+----------------+
//! |   bg   |   fg   |   code point   |
//! +--------+--------+----------------+
//! ```

use bitfield_struct::bitfield;

/// The 16-entry VGA text palette.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Color {
    Black = 0x0,
    Blue = 0x1,
    Green = 0x2,
    Cyan = 0x3,
    Red = 0x4,
    Magenta = 0x5,
    Brown = 0x6,
    LightGray = 0x7,
    DarkGray = 0x8,
    LightBlue = 0x9,
    LightGreen = 0xA,
    LightCyan = 0xB,
    LightRed = 0xC,
    Pink = 0xD,
    Yellow = 0xE,
    White = 0xF,
}

impl Color {
    /// Decode a 4-bit palette index; higher bits are ignored.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0xF {
            0x0 => Self::Black,
            0x1 => Self::Blue,
            0x2 => Self::Green,
            0x3 => Self::Cyan,
            0x4 => Self::Red,
            0x5 => Self::Magenta,
            0x6 => Self::Brown,
            0x7 => Self::LightGray,
            0x8 => Self::DarkGray,
            0x9 => Self::LightBlue,
            0xA => Self::LightGreen,
            0xB => Self::LightCyan,
            0xC => Self::LightRed,
            0xD => Self::Pink,
            0xE => Self::Yellow,
            _ => Self::White,
        }
    }

    #[inline]
    #[must_use]
    pub const fn into_bits(self) -> u8 {
        self as u8
    }
}

/// Attribute byte: foreground in the low nibble, background in the high nibble.
#[bitfield(u8)]
#[derive(Eq, PartialEq)]
pub struct ColorCode {
    /// Glyph color (bits 0..3).
    #[bits(4)]
    pub foreground: Color,
    /// Cell color (bits 4..7).
    #[bits(4)]
    pub background: Color,
}

impl ColorCode {
    /// White on black, `0x0F`.
    pub const DEFAULT: Self = Self::on_black(Color::White);
    /// Light green on black, `0x0A`.
    pub const GREEN: Self = Self::on_black(Color::LightGreen);
    /// Light red on black, `0x0C`.
    pub const RED: Self = Self::on_black(Color::LightRed);
    /// Light cyan on black, `0x0B`.
    pub const CYAN: Self = Self::on_black(Color::LightCyan);

    #[inline]
    #[must_use]
    pub const fn new_with(foreground: Color, background: Color) -> Self {
        Self::new()
            .with_foreground(foreground)
            .with_background(background)
    }

    #[inline]
    #[must_use]
    pub const fn on_black(foreground: Color) -> Self {
        Self::new_with(foreground, Color::Black)
    }
}

/// A single character cell as stored in the text buffer.
#[bitfield(u16)]
#[derive(Eq, PartialEq)]
pub struct ScreenChar {
    /// Code page 437 character (bits 0..7).
    pub ascii: u8,
    /// Attribute (bits 8..15).
    #[bits(8)]
    pub color: ColorCode,
}

impl ScreenChar {
    /// A space in the given color, used to blank the screen.
    #[inline]
    #[must_use]
    pub const fn blank(color: ColorCode) -> Self {
        Self::glyph(b' ', color)
    }

    #[inline]
    #[must_use]
    pub const fn glyph(ascii: u8, color: ColorCode) -> Self {
        Self::new().with_ascii(ascii).with_color(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_nibbles() {
        assert_eq!(ColorCode::DEFAULT.into_bits(), 0x0F);
        assert_eq!(ColorCode::GREEN.into_bits(), 0x0A);
        assert_eq!(ColorCode::RED.into_bits(), 0x0C);
        assert_eq!(ColorCode::CYAN.into_bits(), 0x0B);
        assert_eq!(ColorCode::new_with(Color::Yellow, Color::Blue).into_bits(), 0x1E);
    }

    #[test]
    fn cell_encoding_puts_attribute_in_high_byte() {
        let cell = ScreenChar::glyph(b'A', ColorCode::DEFAULT);
        assert_eq!(cell.into_bits(), 0x0F41);
        assert_eq!(ScreenChar::blank(ColorCode::RED).into_bits(), 0x0C20);
    }

    #[test]
    fn palette_round_trips_through_nibble() {
        for bits in 0..16u8 {
            assert_eq!(Color::from_bits(bits).into_bits(), bits);
        }
    }
}
