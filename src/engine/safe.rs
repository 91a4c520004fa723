// ============================================================================
// Safe Conversion
// Validate, then resolve
// ============================================================================

use super::resolver::resolve;
use super::validator::validate;
use crate::domain::{ResolveError, ValidationError};
use smallvec::smallvec;

/// Convert a numeral to an integer, rejecting malformed input.
///
/// The validator runs first; its error is returned unchanged and the
/// resolver is never called on invalid input.
///
/// # Example
/// ```
/// use alien_numerals::engine::to_integer_safe;
///
/// assert_eq!(to_integer_safe("AB"), Ok(4));
/// assert_eq!(
///     to_integer_safe("AL").unwrap_err().to_string(),
///     "illegal pair AL: A may only precede B or Z"
/// );
/// ```
pub fn to_integer_safe(numeral: &str) -> Result<i64, ValidationError> {
    validate(numeral)?;

    // Fails only if the validator and resolver disagree on the symbol table,
    // which no input can trigger while both read `Symbol`
    resolve(numeral).map_err(|err| {
        tracing::error!(
            numeral,
            error = %err,
            "resolver rejected a numeral the validator accepted"
        );
        drift_to_validation_error(err)
    })
}

/// Map a resolver failure to the validation reason that should have caught it
fn drift_to_validation_error(err: ResolveError) -> ValidationError {
    match err {
        ResolveError::Empty => ValidationError::Empty,
        ResolveError::UnknownSymbol { symbol, .. } => {
            ValidationError::UnknownSymbols(smallvec![symbol])
        },
    }
}
