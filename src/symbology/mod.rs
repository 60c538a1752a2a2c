//! Linear symbology encoders.
//!
//! Every encoder turns the user's content into a row of modules (`true` = bar,
//! `false` = space, one module wide each) and the human readable text printed
//! under the bars. Length, character set and check digit rules are enforced
//! here and reported as [`EncodingError`]s.

mod code128;
mod code39;
mod ean;
mod itf;

pub use code128::Code128;
pub use code39::Code39;
pub use ean::{Ean13, Ean8, Isbn13, UpcA};
pub use itf::Itf;

use std::fmt::{Display, Formatter};
use std::iter;
use std::str::FromStr;

use crate::error::{EncodingError, EncodingResult};

// Encoded symbol
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub modules: Vec<bool>,
    pub text: String,
}

impl Encoded {
    pub fn width(&self) -> usize {
        self.modules.len()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        self.modules.iter().map(|&m| if m { '1' } else { '0' }).collect()
    }
}

pub trait SymbologyEncoder {
    fn encode(&self, data: &str) -> EncodingResult<Encoded>;
}

// Symbology
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Symbology {
    Code128,
    Code39,
    Ean13,
    Ean8,
    UpcA,
    Isbn13,
    Itf,
}

impl Symbology {
    pub const ALL: [Symbology; 7] =
        [Self::Code128, Self::Code39, Self::Ean13, Self::Ean8, Self::UpcA, Self::Isbn13, Self::Itf];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Code128 => "code128",
            Self::Code39 => "code39",
            Self::Ean13 => "ean13",
            Self::Ean8 => "ean8",
            Self::UpcA => "upca",
            Self::Isbn13 => "isbn13",
            Self::Itf => "itf",
        }
    }

    pub fn encoder(self) -> &'static dyn SymbologyEncoder {
        match self {
            Self::Code128 => &Code128,
            Self::Code39 => &Code39,
            Self::Ean13 => &Ean13,
            Self::Ean8 => &Ean8,
            Self::UpcA => &UpcA,
            Self::Isbn13 => &Isbn13,
            Self::Itf => &Itf,
        }
    }

    pub fn encode(self, data: &str) -> EncodingResult<Encoded> {
        self.encoder().encode(data)
    }
}

impl Display for Symbology {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbology {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|sym| sym.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| EncodingError::UnsupportedSymbology(s.to_string()))
    }
}

// Module helpers
//------------------------------------------------------------------------------

// Appends alternating bar/space runs, starting with a bar when `bar` is set
pub(crate) fn push_runs(out: &mut Vec<bool>, runs: impl IntoIterator<Item = u8>, mut bar: bool) {
    for w in runs {
        out.extend(iter::repeat(bar).take(w as usize));
        bar = !bar;
    }
}

// Appends the lowest `len` bits of `bits`, most significant first
pub(crate) fn push_bits(out: &mut Vec<bool>, bits: u32, len: usize) {
    out.extend((0..len).rev().map(|i| (bits >> i) & 1 == 1));
}

pub(crate) fn parse_digits(symbology: &'static str, data: &str) -> EncodingResult<Vec<u8>> {
    data.chars()
        .map(|ch| match ch.to_digit(10) {
            Some(d) => Ok(d as u8),
            None => Err(EncodingError::InvalidCharacter { symbology, ch }),
        })
        .collect()
}

#[cfg(test)]
mod symbology_tests {
    use test_case::test_case;

    use super::{push_bits, push_runs, Symbology};

    #[test_case("code128", Symbology::Code128)]
    #[test_case("CODE39", Symbology::Code39)]
    #[test_case(" ean13 ", Symbology::Ean13)]
    #[test_case("Ean8", Symbology::Ean8)]
    #[test_case("upca", Symbology::UpcA)]
    #[test_case("isbn13", Symbology::Isbn13)]
    #[test_case("itf", Symbology::Itf)]
    fn test_from_str(name: &str, exp: Symbology) {
        assert_eq!(name.parse::<Symbology>().unwrap(), exp);
    }

    #[test]
    fn test_from_str_unsupported() {
        let err = "pdf417".parse::<Symbology>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported barcode type \"pdf417\"");
    }

    #[test]
    fn test_name_round_trip() {
        for sym in Symbology::ALL {
            assert_eq!(sym.to_string().parse::<Symbology>().unwrap(), sym);
        }
    }

    #[test]
    fn test_push_runs() {
        let mut out = Vec::new();
        push_runs(&mut out, [2, 1, 3], true);
        assert_eq!(out, [true, true, false, true, true, true]);
    }

    #[test]
    fn test_push_bits() {
        let mut out = Vec::new();
        push_bits(&mut out, 0b0001101, 7);
        assert_eq!(out, [false, false, false, true, true, false, true]);
    }
}
