use std::fmt::{Display, Formatter};
use std::str::FromStr;

use image::Rgb;

use crate::error::{EncodingError, EncodingResult};

// Hex color
//------------------------------------------------------------------------------

/// An RGB color written as `#RRGGBB` or `#RGB`, the form a color picker hands back.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct HexColor(pub u8, pub u8, pub u8);

impl HexColor {
    pub const BLACK: Self = Self(0, 0, 0);
    pub const WHITE: Self = Self(255, 255, 255);

    pub fn parse(s: &str) -> EncodingResult<Self> {
        let invalid = || EncodingError::InvalidColor(s.to_string());

        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| invalid());
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        match hex.len() {
            3 => Ok(Self(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17)),
            6 => Ok(Self(byte(0)?, byte(2)?, byte(4)?)),
            _ => Err(invalid()),
        }
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.0, self.1, self.2])
    }
}

impl FromStr for HexColor {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}
