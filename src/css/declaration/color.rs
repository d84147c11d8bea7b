use std::fmt;

/// An 8-bit RGBA color. Colors written in a stylesheet are always opaque.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }
}

/// Value of two hex digits, high nibble first. Signs and other characters
/// `u8::from_str_radix` would tolerate are rejected.
pub(crate) fn hex_pair_value(high: char, low: char) -> Option<u8> {
    let high = high.to_digit(16)?;
    let low = low.to_digit(16)?;

    Some((high * 16 + low) as u8)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;

        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }

        Ok(())
    }
}
