use super::{parse_digits, push_bits, Encoded, SymbologyEncoder};
use crate::error::{EncodingError, EncodingResult};

// EAN / UPC family
//------------------------------------------------------------------------------

pub struct Ean13;
pub struct Ean8;
pub struct UpcA;
pub struct Isbn13;

impl SymbologyEncoder for Ean13 {
    fn encode(&self, data: &str) -> EncodingResult<Encoded> {
        let digits = parse_digits("ean13", data)?;
        let digits = with_check_digit("ean13", digits, 12, "12 or 13 digits")?;
        Ok(Encoded { modules: ean13_modules(&digits), text: to_text(&digits) })
    }
}

impl SymbologyEncoder for Ean8 {
    fn encode(&self, data: &str) -> EncodingResult<Encoded> {
        let digits = parse_digits("ean8", data)?;
        let digits = with_check_digit("ean8", digits, 7, "7 or 8 digits")?;
        Ok(Encoded { modules: ean8_modules(&digits), text: to_text(&digits) })
    }
}

// UPC-A is an EAN-13 whose number system digit is 0
impl SymbologyEncoder for UpcA {
    fn encode(&self, data: &str) -> EncodingResult<Encoded> {
        let digits = parse_digits("upca", data)?;
        let digits = with_check_digit("upca", digits, 11, "11 or 12 digits")?;

        let mut ean = Vec::with_capacity(13);
        ean.push(0);
        ean.extend_from_slice(&digits);
        Ok(Encoded { modules: ean13_modules(&ean), text: to_text(&digits) })
    }
}

impl SymbologyEncoder for Isbn13 {
    fn encode(&self, data: &str) -> EncodingResult<Encoded> {
        let stripped: String = data.chars().filter(|&c| c != '-').collect();
        let digits = parse_digits("isbn13", &stripped)?;
        let digits = with_check_digit("isbn13", digits, 12, "12 or 13 digits")?;
        if !matches!(&digits[..3], [9, 7, 8] | [9, 7, 9]) {
            return Err(EncodingError::InvalidPrefix { symbology: "isbn13", expected: "978 or 979" });
        }
        Ok(Encoded { modules: ean13_modules(&digits), text: to_text(&digits) })
    }
}

// Check digit
//------------------------------------------------------------------------------

// GS1 mod-10: weights alternate 3, 1 starting from the rightmost payload digit
pub(crate) fn check_digit(payload: &[u8]) -> u8 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { 3 * d as u32 } else { d as u32 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

// Appends the check digit to a bare payload, or verifies it when already present
fn with_check_digit(
    symbology: &'static str,
    mut digits: Vec<u8>,
    payload_len: usize,
    expected: &'static str,
) -> EncodingResult<Vec<u8>> {
    let len = digits.len();
    if len == payload_len {
        digits.push(check_digit(&digits));
    } else if len == payload_len + 1 {
        let exp = check_digit(&digits[..payload_len]);
        let found = digits[payload_len];
        if exp != found {
            return Err(EncodingError::InvalidChecksum { symbology, expected: exp, found });
        }
    } else {
        return Err(EncodingError::InvalidLength { symbology, expected, actual: len });
    }
    Ok(digits)
}

fn to_text(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

// Module layout
//------------------------------------------------------------------------------

const START_GUARD: (u32, usize) = (0b101, 3);
const CENTER_GUARD: (u32, usize) = (0b01010, 5);
const END_GUARD: (u32, usize) = (0b101, 3);

// Left-hand odd parity set; R is its complement and G is R reversed
const L_CODES: [u32; 10] =
    [0b0001101, 0b0011001, 0b0010011, 0b0111101, 0b0100011, 0b0110001, 0b0101111, 0b0111011, 0b0110111, 0b0001011];

// Parity of digits 2..=7 selected by the leading digit, set bit = G code
const PARITY: [u32; 10] =
    [0b000000, 0b001011, 0b001101, 0b001110, 0b010011, 0b011001, 0b011100, 0b010101, 0b010110, 0b011010];

fn l_code(d: u8) -> u32 {
    L_CODES[d as usize]
}

fn r_code(d: u8) -> u32 {
    !L_CODES[d as usize] & 0x7f
}

fn g_code(d: u8) -> u32 {
    r_code(d).reverse_bits() >> 25
}

fn push_guard(out: &mut Vec<bool>, (bits, len): (u32, usize)) {
    push_bits(out, bits, len);
}

fn ean13_modules(digits: &[u8]) -> Vec<bool> {
    debug_assert!(digits.len() == 13, "EAN-13 needs 13 digits including the check digit");

    let parity = PARITY[digits[0] as usize];
    let mut out = Vec::with_capacity(95);
    push_guard(&mut out, START_GUARD);
    for (i, &d) in digits[1..7].iter().enumerate() {
        let even = (parity >> (5 - i)) & 1 == 1;
        push_bits(&mut out, if even { g_code(d) } else { l_code(d) }, 7);
    }
    push_guard(&mut out, CENTER_GUARD);
    for &d in &digits[7..] {
        push_bits(&mut out, r_code(d), 7);
    }
    push_guard(&mut out, END_GUARD);
    out
}

fn ean8_modules(digits: &[u8]) -> Vec<bool> {
    debug_assert!(digits.len() == 8, "EAN-8 needs 8 digits including the check digit");

    let mut out = Vec::with_capacity(67);
    push_guard(&mut out, START_GUARD);
    for &d in &digits[..4] {
        push_bits(&mut out, l_code(d), 7);
    }
    push_guard(&mut out, CENTER_GUARD);
    for &d in &digits[4..] {
        push_bits(&mut out, r_code(d), 7);
    }
    push_guard(&mut out, END_GUARD);
    out
}

#[cfg(test)]
mod ean_tests {
    use test_case::test_case;

    use super::{check_digit, g_code, r_code, Ean13, Ean8, Isbn13, UpcA};
    use crate::error::EncodingError;
    use crate::symbology::SymbologyEncoder;

    #[test_case("400638133393", 1)]
    #[test_case("590123412345", 7)]
    #[test_case("123456789012", 8)]
    #[test_case("1234567", 0)]
    #[test_case("9638507", 4)]
    #[test_case("03600029145", 2)]
    fn test_check_digit(payload: &str, exp: u8) {
        let digits: Vec<u8> = payload.bytes().map(|b| b - b'0').collect();
        assert_eq!(check_digit(&digits), exp);
    }

    #[test]
    fn test_code_sets() {
        assert_eq!(r_code(0), 0b1110010);
        assert_eq!(r_code(9), 0b1110100);
        assert_eq!(g_code(0), 0b0100111);
        assert_eq!(g_code(6), 0b0000101);
    }

    #[test]
    fn test_ean13() {
        let enc = Ean13.encode("400638133393").unwrap();
        assert_eq!(enc.text, "4006381333931");
        assert_eq!(enc.width(), 95);
        assert!(enc.to_debug_str().starts_with("101"));
        assert!(enc.to_debug_str().ends_with("101"));
        assert_eq!(&enc.to_debug_str()[45..50], "01010");
    }

    #[test_case(0, "LLLLLL")]
    #[test_case(1, "LLGLGG")]
    #[test_case(2, "LLGGLG")]
    #[test_case(3, "LLGGGL")]
    #[test_case(4, "LGLLGG")]
    #[test_case(5, "LGGLLG")]
    #[test_case(6, "LGGGLL")]
    #[test_case(7, "LGLGLG")]
    #[test_case(8, "LGLGGL")]
    #[test_case(9, "LGGLGL")]
    fn test_ean13_left_half_parity(lead: u8, exp: &str) {
        let data = format!("{lead}90123456789");
        let bits = Ean13.encode(&data).unwrap().to_debug_str();

        // L codes carry an odd number of dark modules, G codes an even number
        let parity: String = (0..6)
            .map(|i| &bits[3 + 7 * i..10 + 7 * i])
            .map(|code| if code.matches('1').count() % 2 == 1 { 'L' } else { 'G' })
            .collect();
        assert_eq!(parity, exp);
    }

    #[test_case(
        "5901234123457",
        "10100010110100111011001100100110111101001110101010110011011011001000010101110010011101000100101";
        "gs1 example"
    )]
    #[test_case(
        "6901234567892",
        "10100010110100111011001100110110111101010001101010100111010100001000100100100011101001101100101";
        "leading six"
    )]
    fn test_ean13_reference(data: &str, exp: &str) {
        assert_eq!(Ean13.encode(data).unwrap().to_debug_str(), exp);
    }

    #[test]
    fn test_ean8_reference() {
        let enc = Ean8.encode("96385074").unwrap();
        assert_eq!(enc.to_debug_str(), "1010001011010111101111010110111010101001110111001010001001011100101");
    }

    #[test]
    fn test_ean13_leading_zero_digit_half() {
        // Leading 0 uses odd parity for the whole left half
        let enc = Ean13.encode("012345678905").unwrap();
        assert_eq!(&enc.to_debug_str()[3..10], "0011001");
    }

    #[test]
    fn test_ean13_with_check_digit() {
        let enc = Ean13.encode("4006381333931").unwrap();
        assert_eq!(enc.text, "4006381333931");
    }

    #[test]
    fn test_ean13_wrong_check_digit() {
        let err = Ean13.encode("4006381333932").unwrap_err();
        assert!(matches!(err, EncodingError::InvalidChecksum { expected: 1, found: 2, .. }));
    }

    #[test_case("12"; "too short")]
    #[test_case("12345678901234"; "too long")]
    #[test_case(""; "empty")]
    fn test_ean13_invalid_length(data: &str) {
        let err = Ean13.encode(data).unwrap_err();
        assert!(matches!(err, EncodingError::InvalidLength { .. }), "{err}");
    }

    #[test]
    fn test_ean13_invalid_char() {
        let err = Ean13.encode("12345678901A").unwrap_err();
        assert!(matches!(err, EncodingError::InvalidCharacter { ch: 'A', .. }));
    }

    #[test]
    fn test_ean8() {
        let enc = Ean8.encode("9638507").unwrap();
        assert_eq!(enc.text, "96385074");
        assert_eq!(enc.width(), 67);
    }

    #[test]
    fn test_upca_matches_ean13() {
        let upc = UpcA.encode("03600029145").unwrap();
        let ean = Ean13.encode("003600029145").unwrap();
        assert_eq!(upc.text, "036000291452");
        assert_eq!(upc.modules, ean.modules);
    }

    #[test]
    fn test_upca_invalid_length() {
        assert!(UpcA.encode("0360002914").is_err());
        assert!(UpcA.encode("0360002914523").is_err());
    }

    #[test]
    fn test_isbn13() {
        let enc = Isbn13.encode("978-0-306-40615").unwrap();
        assert_eq!(enc.text, "9780306406157");
        assert_eq!(enc.modules, Ean13.encode("978030640615").unwrap().modules);
    }

    #[test]
    fn test_isbn13_prefix() {
        let err = Isbn13.encode("400638133393").unwrap_err();
        assert!(matches!(err, EncodingError::InvalidPrefix { .. }));
    }
}
