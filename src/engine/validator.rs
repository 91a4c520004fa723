// ============================================================================
// Grammar Validator
// Checks that a string is a well-formed numeral
// ============================================================================

use crate::domain::rules::MAX_SUCCESSORS;
use crate::domain::{Symbol, ValidationError, ValidationResult};
use arrayvec::ArrayVec;
use smallvec::SmallVec;

/// Check whether `numeral` is well formed.
///
/// Checks run in order and the first failure is returned:
/// 1. the input is non-empty
/// 2. every character is a known symbol
/// 3. no maximal run of a symbol exceeds its repetition limit
/// 4. every adjacent pair with a smaller symbol before a larger one is a
///    permitted subtractive pair
///
/// # Example
/// ```
/// use alien_numerals::engine::validate;
///
/// assert!(validate("RCRZCAB").is_ok());
/// assert_eq!(
///     validate("AAAA").unwrap_err().to_string(),
///     "excessive repetition of A, limit 3"
/// );
/// ```
pub fn validate(numeral: &str) -> ValidationResult {
    if numeral.is_empty() {
        return Err(ValidationError::Empty);
    }

    let symbols = parse_symbols(numeral)?;
    check_repetition(&symbols)?;
    check_subtraction(&symbols)
}

/// True iff [`validate`] accepts `numeral`.
#[inline]
pub fn is_valid(numeral: &str) -> bool {
    validate(numeral).is_ok()
}

fn parse_symbols(numeral: &str) -> Result<Vec<Symbol>, ValidationError> {
    let mut symbols = Vec::with_capacity(numeral.len());
    let mut unknown: SmallVec<[char; 4]> = SmallVec::new();

    for c in numeral.chars() {
        match Symbol::from_char(c) {
            Some(symbol) => symbols.push(symbol),
            None => {
                if !unknown.contains(&c) {
                    unknown.push(c);
                }
            },
        }
    }

    if unknown.is_empty() {
        Ok(symbols)
    } else {
        Err(ValidationError::UnknownSymbols(unknown))
    }
}

fn check_repetition(symbols: &[Symbol]) -> ValidationResult {
    let mut i = 0;
    while i < symbols.len() {
        let symbol = symbols[i];
        let run = symbols[i..].iter().take_while(|s| **s == symbol).count();
        let limit = symbol.repetition_limit();
        if run > limit {
            return Err(ValidationError::ExcessiveRepetition { symbol, limit });
        }
        i += run;
    }
    Ok(())
}

fn check_subtraction(symbols: &[Symbol]) -> ValidationResult {
    for pair in symbols.windows(2) {
        let (small, large) = (pair[0], pair[1]);
        if small.value() < large.value() && !small.may_precede(large) {
            return Err(ValidationError::IllegalSubtraction {
                small,
                large,
                permitted: permitted_list(small.permitted_successors()),
            });
        }
    }
    Ok(())
}

/// Successors beyond `MAX_SUCCESSORS` are dropped; `verify_tables` rejects such rules.
fn permitted_list(successors: &[Symbol]) -> ArrayVec<Symbol, MAX_SUCCESSORS> {
    successors.iter().copied().take(MAX_SUCCESSORS).collect()
}
