//! 24-bit RGB colours as used by the widget palette and the exported document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Colour parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Colour must have 6 hex digits, got {0:?}")]
    Length(String),
    #[error("Invalid hex digit in colour {0:?}")]
    Digit(String),
}

/// An opaque 24-bit colour.
///
/// Parses from `#rrggbb`, `rrggbb` or `0xrrggbb` and serializes as `#rrggbb`,
/// the form colour inputs hand back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a colour from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    pub const fn white() -> Self {
        Self::from_u32(0xffffff)
    }

    pub const fn black() -> Self {
        Self::from_u32(0x000000)
    }

    /// Packed `0xRRGGBB` value.
    pub fn to_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// The `0xrrggbb` literal written into the exported document.
    pub fn to_hex_literal(self) -> String {
        format!("0x{:06x}", self.to_u32())
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_u32())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != 6 {
            return Err(ColorError::Length(s.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Digit(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|_| ColorError::Digit(s.to_string()))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hash_prefixed() {
        let color: Rgb = "#1a2b3c".parse().unwrap();
        assert_eq!(color, Rgb::new(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn test_parse_accepts_bare_and_0x() {
        assert_eq!("FFAA00".parse::<Rgb>().unwrap(), Rgb::from_u32(0xffaa00));
        assert_eq!("0x3b82f6".parse::<Rgb>().unwrap(), Rgb::from_u32(0x3b82f6));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "#fff".parse::<Rgb>(),
            Err(ColorError::Length("#fff".to_string()))
        );
        assert!(matches!("#gg0000".parse::<Rgb>(), Err(ColorError::Digit(_))));
        assert!("".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_hex_literal_is_lowercase_and_padded() {
        assert_eq!(Rgb::from_u32(0x0000ff).to_hex_literal(), "0x0000ff");
        assert_eq!("#ABCDEF".parse::<Rgb>().unwrap().to_hex_literal(), "0xabcdef");
    }

    #[test]
    fn test_serde_uses_hash_string() {
        let json = serde_json::to_string(&Rgb::from_u32(0x1d4ed8)).unwrap();
        assert_eq!(json, "\"#1d4ed8\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::from_u32(0x1d4ed8));
        assert!(serde_json::from_str::<Rgb>("\"blue\"").is_err());
    }
}
