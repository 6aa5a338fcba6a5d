//! # Allocation-free number formatting
//!
//! Hexadecimal output is `0x` followed by the minimal run of uppercase
//! digits (`0x0` for zero); decimal output is the minimal run of digits.
//! Both cover the full `u64` range.

use core::fmt;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Maximum length of a hexadecimal `u64`: `0x` plus 16 digits.
pub const HEX_CAPACITY: usize = 2 + 16;

/// Maximum length of a decimal `u64`: 20 digits.
pub const DECIMAL_CAPACITY: usize = 20;

/// Formatted number, right-aligned in a fixed buffer.
#[derive(Copy, Clone)]
pub struct NumberText<const N: usize> {
    buf: [u8; N],
    start: usize,
}

pub type HexText = NumberText<HEX_CAPACITY>;
pub type DecimalText = NumberText<DECIMAL_CAPACITY>;

impl<const N: usize> NumberText<N> {
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII digits and `0x` are ever stored.
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}

impl<const N: usize> fmt::Display for NumberText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for NumberText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

/// Format `value` as `0x`-prefixed uppercase hexadecimal without padding.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_hex(mut value: u64) -> HexText {
    let mut buf = [0u8; HEX_CAPACITY];
    let mut pos = HEX_CAPACITY;

    loop {
        pos -= 1;
        buf[pos] = HEX_DIGITS[(value & 0xF) as usize];
        value >>= 4;
        if value == 0 {
            break;
        }
    }

    pos -= 2;
    buf[pos] = b'0';
    buf[pos + 1] = b'x';

    NumberText { buf, start: pos }
}

/// Format `value` as decimal without padding.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_decimal(mut value: u64) -> DecimalText {
    let mut buf = [0u8; DECIMAL_CAPACITY];
    let mut pos = DECIMAL_CAPACITY;

    loop {
        pos -= 1;
        buf[pos] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }

    NumberText { buf, start: pos }
}
