use super::{push_runs, Encoded, SymbologyEncoder};
use crate::error::{EncodingError, EncodingResult};

// Code 39
//------------------------------------------------------------------------------

pub struct Code39;

// Position in this string is also the value used by the mod-43 check character
const CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";
const START_STOP: usize = 43;

// Nine elements per character, bar first, set bit = wide element
const PATTERNS: [u16; 44] = [
    0x034, 0x121, 0x061, 0x160, 0x031, 0x130, 0x070, 0x025, 0x124, 0x064, // 0-9
    0x109, 0x049, 0x148, 0x019, 0x118, 0x058, 0x00D, 0x10C, 0x04C, 0x01C, // A-J
    0x103, 0x043, 0x142, 0x013, 0x112, 0x052, 0x007, 0x106, 0x046, 0x016, // K-T
    0x181, 0x0C1, 0x1C0, 0x091, 0x190, 0x0D0, // U-Z
    0x085, 0x184, 0x0C4, 0x0A8, 0x0A2, 0x08A, 0x02A, // - . space $ / + %
    0x094, // *
];

const NARROW: u8 = 1;
const WIDE: u8 = 2;

impl SymbologyEncoder for Code39 {
    fn encode(&self, data: &str) -> EncodingResult<Encoded> {
        if data.is_empty() {
            return Err(EncodingError::InvalidLength {
                symbology: "code39",
                expected: "at least 1 character",
                actual: 0,
            });
        }

        let upper = data.to_ascii_uppercase();
        let mut values = upper
            .chars()
            .map(|ch| {
                CHARSET.find(ch).ok_or(EncodingError::InvalidCharacter { symbology: "code39", ch })
            })
            .collect::<EncodingResult<Vec<_>>>()?;

        let check = values.iter().sum::<usize>() % 43;
        values.push(check);

        let mut modules = Vec::with_capacity((values.len() + 2) * 13);
        push_char(&mut modules, START_STOP);
        for &v in &values {
            modules.push(false);
            push_char(&mut modules, v);
        }
        modules.push(false);
        push_char(&mut modules, START_STOP);

        let mut text = upper;
        text.push(char::from(CHARSET.as_bytes()[check]));
        Ok(Encoded { modules, text })
    }
}

fn push_char(out: &mut Vec<bool>, value: usize) {
    let pattern = PATTERNS[value];
    let widths = (0..9).rev().map(|i| if (pattern >> i) & 1 == 1 { WIDE } else { NARROW });
    push_runs(out, widths, true);
}
