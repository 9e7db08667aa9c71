//! RGB color value used by every stage of the translator.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse exactly six hex digits, case-insensitive, without a `#` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use tint::Color;
    ///
    /// assert_eq!(Color::from_hex("FF8000").unwrap(), Color::new(255, 128, 0));
    /// assert!(Color::from_hex("FF800").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lowercase `rrggbb` digits, no prefix.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// The channels as a tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `rrggbb` or `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_hex(s.strip_prefix('#').unwrap_or(s))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_mixed_case() {
        assert_eq!(Color::from_hex("ff5733").unwrap(), Color::new(255, 87, 51));
        assert_eq!(Color::from_hex("FF5733").unwrap(), Color::new(255, 87, 51));
        assert_eq!(Color::from_hex("aBcDeF").unwrap(), Color::new(171, 205, 239));
    }

    #[test]
    fn parse_hex_rejects_bad_input() {
        assert!(Color::from_hex("ff573").is_err());
        assert!(Color::from_hex("ff57333").is_err());
        assert!(Color::from_hex("gg0000").is_err());
        assert!(Color::from_hex("").is_err());
        // Multi-byte input of the right byte length must not panic.
        assert!(Color::from_hex("§§§").is_err());
    }

    #[test]
    fn from_str_with_prefix() {
        assert_eq!("#000000".parse::<Color>().unwrap(), Color::new(0, 0, 0));
        assert_eq!("ffffff".parse::<Color>().unwrap(), Color::new(255, 255, 255));
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Color::new(255, 0, 171).to_string(), "#ff00ab");
        assert_eq!(Color::new(1, 2, 3).to_hex(), "010203");
    }
}
