// ============================================================================
// Value Resolver
// Unchecked left-to-right summation with one-symbol lookahead
// ============================================================================

use crate::domain::{ResolveError, ResolveResult, Symbol};

/// Compute the integer value of a numeral without checking its grammar.
///
/// Each symbol is subtracted when the next symbol is larger and added
/// otherwise; the final symbol is always added. Single pass, no backtracking.
///
/// Malformed numerals still produce a number (`"AAAA"` resolves to 4,
/// `"AL"` to 49). Use [`to_integer_safe`](super::to_integer_safe) for
/// untrusted input.
///
/// # Errors
/// - `Empty` if `numeral` is empty
/// - `UnknownSymbol` at the first character outside the symbol set
///
/// # Example
/// ```
/// use alien_numerals::engine::resolve;
///
/// assert_eq!(resolve("LBAAA"), Ok(58));
/// assert_eq!(resolve("RCRZCAB"), Ok(1994));
/// ```
pub fn resolve(numeral: &str) -> ResolveResult<i64> {
    let mut symbols = numeral.chars().enumerate().map(|(position, c)| {
        Symbol::from_char(c).ok_or(ResolveError::UnknownSymbol {
            symbol: c,
            position,
        })
    });

    let mut current = match symbols.next() {
        Some(symbol) => symbol?,
        None => return Err(ResolveError::Empty),
    };

    let mut total: i64 = 0;
    for next in symbols {
        let next = next?;
        let value = i64::from(current.value());
        if current.value() < next.value() {
            total -= value;
        } else {
            total += value;
        }
        current = next;
    }

    Ok(total + i64::from(current.value()))
}
