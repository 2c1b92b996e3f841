use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Straight-alpha sRGB color, one byte per channel.
///
/// Both the markup and SVG backends emit colors as hex literals and the raster
/// backend writes bytes, so no linear or premultiplied form is kept.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(src: &str) -> Result<Self, ColorParseError> {
        let hex = src
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(src.to_owned()))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(src.to_owned()));
        }

        // All characters were validated as ascii hex digits above, so each
        // slice below is in bounds and parses into a u8.
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        let nibble = |i: usize| {
            let v = u8::from_str_radix(&hex[i..i + 1], 16).unwrap_or(0);
            v << 4 | v
        };

        match hex.len() {
            3 => Ok(Self::rgb(nibble(0), nibble(1), nibble(2))),
            6 => Ok(Self::rgb(byte(0), byte(2), byte(4))),
            8 => Ok(Self::rgba(byte(0), byte(2), byte(4), byte(6))),
            n => Err(ColorParseError::InvalidLength(n)),
        }
    }

    /// Hex literal for markup output. Alpha is only written when not opaque.
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim())
    }
}

/// A malformed color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color literal must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color literal contains a non-hex digit: {0:?}")]
    InvalidDigit(String),
    #[error("color literal must be #rgb, #rrggbb or #rrggbbaa, got {0} digits")]
    InvalidLength(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Color::from_hex("#ffffff").unwrap(), Color::white());
        assert_eq!(Color::from_hex("#1a2B3c").unwrap(), Color::rgb(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn parses_short_and_alpha_forms() {
        assert_eq!(Color::from_hex("#f00").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hex("#00000080").unwrap(), Color::rgba(0, 0, 0, 0x80));
    }

    #[test]
    fn from_str_trims_whitespace() {
        assert_eq!(" #000000 ".parse::<Color>().unwrap(), Color::black());
    }

    #[test]
    fn rejects_malformed_literals() {
        assert_eq!(
            Color::from_hex("ffffff"),
            Err(ColorParseError::MissingHash("ffffff".into()))
        );
        assert_eq!(Color::from_hex("#ffff"), Err(ColorParseError::InvalidLength(4)));
        assert!(matches!(Color::from_hex("#xyz"), Err(ColorParseError::InvalidDigit(_))));
        // Multi-byte characters must not slip past the length check.
        assert!(matches!(Color::from_hex("#ééé"), Err(ColorParseError::InvalidDigit(_))));
    }

    #[test]
    fn hex_output_omits_opaque_alpha() {
        assert_eq!(Color::black().to_hex(), "#000000");
        assert_eq!(Color::rgba(255, 0, 16, 0x7f).to_hex(), "#ff00107f");
        assert_eq!(Color::white().to_string(), "#ffffff");
    }
}
