// ============================================================================
// Reference Encoder
// Integer -> canonical well-formed numeral
// ============================================================================

use super::resolver::resolve;
use super::validator::validate;
use crate::domain::{EncodeError, Symbol};

/// Largest value with a well-formed encoding ("RRRCRZCAZ")
pub const MAX_ENCODABLE: i64 = 3999;

/// Greedy encoding table: single symbols and permitted subtractive pairs,
/// descending by value.
const ENCODING_TABLE: [(u32, &[Symbol]); 13] = [
    (1000, &[Symbol::R]),
    (900, &[Symbol::C, Symbol::R]),
    (500, &[Symbol::D]),
    (400, &[Symbol::C, Symbol::D]),
    (100, &[Symbol::C]),
    (90, &[Symbol::Z, Symbol::C]),
    (50, &[Symbol::L]),
    (40, &[Symbol::Z, Symbol::L]),
    (10, &[Symbol::Z]),
    (9, &[Symbol::A, Symbol::Z]),
    (5, &[Symbol::B]),
    (4, &[Symbol::A, Symbol::B]),
    (1, &[Symbol::A]),
];

/// Encode `value` as its canonical numeral.
///
/// # Errors
/// Returns `OutOfRange` unless `1 <= value <= 3999`.
///
/// # Example
/// ```
/// use alien_numerals::engine::encode;
///
/// assert_eq!(encode(1994).unwrap(), "RCRZCAB");
/// assert_eq!(encode(58).unwrap(), "LBAAA");
/// ```
pub fn encode(value: i64) -> Result<String, EncodeError> {
    if !(1..=MAX_ENCODABLE).contains(&value) {
        return Err(EncodeError::OutOfRange { value });
    }

    let mut remaining = value as u32;
    let mut numeral = String::new();
    for (step, symbols) in ENCODING_TABLE {
        while remaining >= step {
            numeral.extend(symbols.iter().map(|s| s.as_char()));
            remaining -= step;
        }
    }
    Ok(numeral)
}

/// True iff `numeral` is valid and is exactly the canonical encoding of its value.
///
/// Some well-formed numerals are not canonical: `"AAB"` resolves to 5 and
/// `"ZZL"` to 50, but their canonical forms are `"B"` and `"L"`.
pub fn is_canonical(numeral: &str) -> bool {
    if validate(numeral).is_err() {
        return false;
    }
    match resolve(numeral).map(encode) {
        Ok(Ok(encoded)) => encoded == numeral,
        _ => false,
    }
}
