use super::{parse_digits, push_runs, Encoded, SymbologyEncoder};
use crate::error::{EncodingError, EncodingResult};

// Interleaved 2 of 5
//------------------------------------------------------------------------------

pub struct Itf;

// Five elements per digit, set bit = wide element
const PATTERNS: [u8; 10] =
    [0b00110, 0b10001, 0b01001, 0b11000, 0b00101, 0b10100, 0b01100, 0b00011, 0b10010, 0b01010];

const NARROW: u8 = 1;
const WIDE: u8 = 3;

const START: [u8; 4] = [NARROW, NARROW, NARROW, NARROW];
const STOP: [u8; 3] = [WIDE, NARROW, NARROW];

impl SymbologyEncoder for Itf {
    fn encode(&self, data: &str) -> EncodingResult<Encoded> {
        let mut digits = parse_digits("itf", data)?;
        if digits.is_empty() {
            return Err(EncodingError::InvalidLength {
                symbology: "itf",
                expected: "at least 1 digit",
                actual: 0,
            });
        }
        if digits.len() % 2 == 1 {
            digits.insert(0, 0);
        }

        let mut modules = Vec::new();
        push_runs(&mut modules, START, true);
        for pair in digits.chunks_exact(2) {
            let (bars, spaces) = (PATTERNS[pair[0] as usize], PATTERNS[pair[1] as usize]);
            let widths = (0..5).rev().flat_map(|i| [width(bars, i), width(spaces, i)]);
            push_runs(&mut modules, widths, true);
        }
        push_runs(&mut modules, STOP, true);

        let text = digits.iter().map(|&d| char::from(b'0' + d)).collect();
        Ok(Encoded { modules, text })
    }
}

fn width(pattern: u8, i: u8) -> u8 {
    if (pattern >> i) & 1 == 1 {
        WIDE
    } else {
        NARROW
    }
}
