use super::{push_runs, Encoded, SymbologyEncoder};
use crate::error::{EncodingError, EncodingResult};

// Code 128
//------------------------------------------------------------------------------

pub struct Code128;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum CodeSet {
    A,
    B,
    C,
}

impl CodeSet {
    const fn start(self) -> u8 {
        match self {
            Self::A => 103,
            Self::B => 104,
            Self::C => 105,
        }
    }

    // Symbol that switches into this set from another one
    const fn switch(self) -> u8 {
        match self {
            Self::A => 101,
            Self::B => 100,
            Self::C => 99,
        }
    }

    // Set A or B able to carry the character
    fn for_char(ch: u8) -> Self {
        if ch < 32 {
            Self::A
        } else {
            Self::B
        }
    }

    fn value(self, ch: u8) -> u8 {
        match (self, ch) {
            (Self::A, 0..=31) => ch + 64,
            (_, _) => ch - 32,
        }
    }

    fn accepts(self, ch: u8) -> bool {
        match self {
            Self::A => ch < 96,
            Self::B => (32..128).contains(&ch),
            Self::C => false,
        }
    }
}

// Bar/space widths of symbol values 0..=105
const PATTERNS: [[u8; 6]; 106] = [
    [2, 1, 2, 2, 2, 2], [2, 2, 2, 1, 2, 2], [2, 2, 2, 2, 2, 1], [1, 2, 1, 2, 2, 3], [1, 2, 1, 3, 2, 2],
    [1, 3, 1, 2, 2, 2], [1, 2, 2, 2, 1, 3], [1, 2, 2, 3, 1, 2], [1, 3, 2, 2, 1, 2], [2, 2, 1, 2, 1, 3],
    [2, 2, 1, 3, 1, 2], [2, 3, 1, 2, 1, 2], [1, 1, 2, 2, 3, 2], [1, 2, 2, 1, 3, 2], [1, 2, 2, 2, 3, 1],
    [1, 1, 3, 2, 2, 2], [1, 2, 3, 1, 2, 2], [1, 2, 3, 2, 2, 1], [2, 2, 3, 2, 1, 1], [2, 2, 1, 1, 3, 2],
    [2, 2, 1, 2, 3, 1], [2, 1, 3, 2, 1, 2], [2, 2, 3, 1, 1, 2], [3, 1, 2, 1, 3, 1], [3, 1, 1, 2, 2, 2],
    [3, 2, 1, 1, 2, 2], [3, 2, 1, 2, 2, 1], [3, 1, 2, 2, 1, 2], [3, 2, 2, 1, 1, 2], [3, 2, 2, 2, 1, 1],
    [2, 1, 2, 1, 2, 3], [2, 1, 2, 3, 2, 1], [2, 3, 2, 1, 2, 1], [1, 1, 1, 3, 2, 3], [1, 3, 1, 1, 2, 3],
    [1, 3, 1, 3, 2, 1], [1, 1, 2, 3, 1, 3], [1, 3, 2, 1, 1, 3], [1, 3, 2, 3, 1, 1], [2, 1, 1, 3, 1, 3],
    [2, 3, 1, 1, 1, 3], [2, 3, 1, 3, 1, 1], [1, 1, 2, 1, 3, 3], [1, 1, 2, 3, 3, 1], [1, 3, 2, 1, 3, 1],
    [1, 1, 3, 1, 2, 3], [1, 1, 3, 3, 2, 1], [1, 3, 3, 1, 2, 1], [3, 1, 3, 1, 2, 1], [2, 1, 1, 3, 3, 1],
    [2, 3, 1, 1, 3, 1], [2, 1, 3, 1, 1, 3], [2, 1, 3, 3, 1, 1], [2, 1, 3, 1, 3, 1], [3, 1, 1, 1, 2, 3],
    [3, 1, 1, 3, 2, 1], [3, 3, 1, 1, 2, 1], [3, 1, 2, 1, 1, 3], [3, 1, 2, 3, 1, 1], [3, 3, 2, 1, 1, 1],
    [3, 1, 4, 1, 1, 1], [2, 2, 1, 4, 1, 1], [4, 3, 1, 1, 1, 1], [1, 1, 1, 2, 2, 4], [1, 1, 1, 4, 2, 2],
    [1, 2, 1, 1, 2, 4], [1, 2, 1, 4, 2, 1], [1, 4, 1, 1, 2, 2], [1, 4, 1, 2, 2, 1], [1, 1, 2, 2, 1, 4],
    [1, 1, 2, 4, 1, 2], [1, 2, 2, 1, 1, 4], [1, 2, 2, 4, 1, 1], [1, 4, 2, 1, 1, 2], [1, 4, 2, 2, 1, 1],
    [2, 4, 1, 2, 1, 1], [2, 2, 1, 1, 1, 4], [4, 1, 3, 1, 1, 1], [2, 4, 1, 1, 1, 2], [1, 3, 4, 1, 1, 1],
    [1, 1, 1, 2, 4, 2], [1, 2, 1, 1, 4, 2], [1, 2, 1, 2, 4, 1], [1, 1, 4, 2, 1, 2], [1, 2, 4, 1, 1, 2],
    [1, 2, 4, 2, 1, 1], [4, 1, 1, 2, 1, 2], [4, 2, 1, 1, 1, 2], [4, 2, 1, 2, 1, 1], [2, 1, 2, 1, 4, 1],
    [2, 1, 4, 1, 2, 1], [4, 1, 2, 1, 2, 1], [1, 1, 1, 1, 4, 3], [1, 1, 1, 3, 4, 1], [1, 3, 1, 1, 4, 1],
    [1, 1, 4, 1, 1, 3], [1, 1, 4, 3, 1, 1], [4, 1, 1, 1, 1, 3], [4, 1, 1, 3, 1, 1], [1, 1, 3, 1, 4, 1],
    [1, 1, 4, 1, 3, 1], [3, 1, 1, 1, 4, 1], [4, 1, 1, 1, 3, 1], [2, 1, 1, 4, 1, 2], [2, 1, 1, 2, 1, 4],
    [2, 1, 1, 2, 3, 2],
];

const STOP: [u8; 7] = [2, 3, 3, 1, 1, 1, 2];

// Shortest digit run worth a switch to set C
const MIN_DIGIT_RUN: usize = 4;

impl SymbologyEncoder for Code128 {
    fn encode(&self, data: &str) -> EncodingResult<Encoded> {
        if data.is_empty() {
            return Err(EncodingError::InvalidLength {
                symbology: "code128",
                expected: "at least 1 character",
                actual: 0,
            });
        }
        if let Some(ch) = data.chars().find(|c| !c.is_ascii()) {
            return Err(EncodingError::InvalidCharacter { symbology: "code128", ch });
        }

        let symbols = to_symbols(data.as_bytes());
        let check = symbols
            .iter()
            .enumerate()
            .map(|(i, &v)| i.max(1) * v as usize)
            .sum::<usize>()
            % 103;

        let mut modules = Vec::with_capacity((symbols.len() + 1) * 11 + 13);
        for &v in symbols.iter().chain(std::iter::once(&(check as u8))) {
            push_runs(&mut modules, PATTERNS[v as usize], true);
        }
        push_runs(&mut modules, STOP, true);

        Ok(Encoded { modules, text: data.to_string() })
    }
}

fn digit_run(data: &[u8]) -> usize {
    data.iter().take_while(|b| b.is_ascii_digit()).count()
}

// Start symbol followed by data symbols, switching sets as the content demands
fn to_symbols(data: &[u8]) -> Vec<u8> {
    let mut symbols = Vec::with_capacity(data.len() + 2);

    let lead = digit_run(data);
    let mut set = if lead % 2 == 0 && (lead >= MIN_DIGIT_RUN || lead == data.len()) {
        CodeSet::C
    } else {
        CodeSet::for_char(data[0])
    };
    symbols.push(set.start());

    let mut i = 0;
    while i < data.len() {
        let run = digit_run(&data[i..]);

        if set == CodeSet::C {
            if run >= 2 {
                symbols.push((data[i] - b'0') * 10 + (data[i + 1] - b'0'));
                i += 2;
                continue;
            }
            set = CodeSet::for_char(data[i]);
            symbols.push(set.switch());
        }

        // Odd runs keep their first digit in the current set
        if run >= MIN_DIGIT_RUN && run % 2 == 0 {
            set = CodeSet::C;
            symbols.push(set.switch());
            continue;
        }

        let ch = data[i];
        if !set.accepts(ch) {
            set = CodeSet::for_char(ch);
            symbols.push(set.switch());
        }
        symbols.push(set.value(ch));
        i += 1;
    }

    symbols
}
