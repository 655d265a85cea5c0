//! Hex color parsing for theme values.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ResumeError, Result};

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB` or `#RRGGBB`
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || ResumeError::InvalidColor {
            value: s.to_string(),
            field: None,
        };

        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Upper-case hex without the `#`, as OOXML attributes expect
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ResumeError;

    fn from_str(s: &str) -> Result<Self> {
        Rgb::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_with_and_without_prefix() {
        assert_eq!(Rgb::from_hex("#004080").unwrap(), Rgb::new(0x00, 0x40, 0x80));
        assert_eq!(Rgb::from_hex("004080").unwrap(), Rgb::new(0x00, 0x40, 0x80));
        assert_eq!(Rgb::from_hex("e07000").unwrap(), Rgb::new(0xE0, 0x70, 0x00));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        for bad in ["XYZ", "", "#", "#12345", "1234567", "GG0000", "##004080", "+1+2+3"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(ResumeError::InvalidColor { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_to_hex_and_display() {
        let c: Rgb = "#f8f9fa".parse().unwrap();
        assert_eq!(c.to_hex(), "F8F9FA");
        assert_eq!(c.to_string(), "#F8F9FA");
    }
}
