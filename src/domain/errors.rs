// ============================================================================
// Numeral Errors
// Error types for symbol lookup, resolution, validation and encoding
// ============================================================================

use super::rules::MAX_SUCCESSORS;
use super::symbol::Symbol;
use arrayvec::ArrayVec;
use smallvec::SmallVec;
use std::fmt;

/// A character outside the closed symbol set was looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownSymbolError {
    /// The offending character
    pub symbol: char,
}

impl fmt::Display for UnknownSymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown symbol {:?}", self.symbol)
    }
}

impl std::error::Error for UnknownSymbolError {}

/// Errors raised by the unchecked resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveError {
    /// Nothing to resolve
    Empty,
    /// Character at `position` (char index) is not a known symbol
    UnknownSymbol { symbol: char, position: usize },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Empty => write!(f, "cannot resolve an empty numeral"),
            ResolveError::UnknownSymbol { symbol, position } => {
                write!(f, "unknown symbol {:?} at position {}", symbol, position)
            },
        }
    }
}

impl std::error::Error for ResolveError {}

/// Result type alias for resolution
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Reason a string is not a well-formed numeral.
///
/// Only the first failing check is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was empty
    Empty,
    /// Characters outside the symbol set, deduplicated, in order of first appearance
    UnknownSymbols(SmallVec<[char; 4]>),
    /// A run of identical symbols exceeded the symbol's repetition limit
    ExcessiveRepetition { symbol: Symbol, limit: usize },
    /// A smaller symbol preceded a larger one it may not be subtracted from
    IllegalSubtraction {
        small: Symbol,
        large: Symbol,
        permitted: ArrayVec<Symbol, MAX_SUCCESSORS>,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "empty"),
            ValidationError::UnknownSymbols(symbols) => {
                write!(f, "unknown symbols: ")?;
                for (i, c) in symbols.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", c)?;
                }
                Ok(())
            },
            ValidationError::ExcessiveRepetition { symbol, limit } => {
                write!(f, "excessive repetition of {}, limit {}", symbol, limit)
            },
            ValidationError::IllegalSubtraction {
                small,
                large,
                permitted,
            } => {
                write!(f, "illegal pair {}{}: ", small, large)?;
                match permitted.split_last() {
                    None => write!(f, "{} may not precede a larger symbol", small),
                    Some((last, [])) => write!(f, "{} may only precede {}", small, last),
                    Some((last, rest)) => {
                        write!(f, "{} may only precede ", small)?;
                        for (i, s) in rest.iter().enumerate() {
                            if i > 0 {
                                write!(f, ", ")?;
                            }
                            write!(f, "{}", s)?;
                        }
                        write!(f, " or {}", last)
                    },
                }
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Outcome of grammar validation
pub type ValidationResult = Result<(), ValidationError>;

/// Errors from the reference encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodeError {
    /// Value has no well-formed encoding
    OutOfRange { value: i64 },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::OutOfRange { value } => write!(
                f,
                "value {} is outside the representable range 1..=3999",
                value
            ),
        }
    }
}

impl std::error::Error for EncodeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::Empty.to_string(), "empty");
        assert_eq!(
            ValidationError::UnknownSymbols(smallvec!['X', 'Y', 'Z']).to_string(),
            "unknown symbols: X, Y, Z"
        );
        assert_eq!(
            ValidationError::ExcessiveRepetition {
                symbol: Symbol::A,
                limit: 3
            }
            .to_string(),
            "excessive repetition of A, limit 3"
        );
    }

    #[test]
    fn test_illegal_subtraction_display() {
        let permitted: ArrayVec<Symbol, 2> = [Symbol::B, Symbol::Z].into();
        let err = ValidationError::IllegalSubtraction {
            small: Symbol::A,
            large: Symbol::L,
            permitted,
        };
        assert_eq!(err.to_string(), "illegal pair AL: A may only precede B or Z");

        let err = ValidationError::IllegalSubtraction {
            small: Symbol::B,
            large: Symbol::Z,
            permitted: ArrayVec::new(),
        };
        assert_eq!(
            err.to_string(),
            "illegal pair BZ: B may not precede a larger symbol"
        );

        let mut single = ArrayVec::<Symbol, 2>::new();
        single.push(Symbol::L);
        let err = ValidationError::IllegalSubtraction {
            small: Symbol::Z,
            large: Symbol::D,
            permitted: single,
        };
        assert_eq!(err.to_string(), "illegal pair ZD: Z may only precede L");
    }

    #[test]
    fn test_resolve_error_display() {
        assert_eq!(
            ResolveError::UnknownSymbol {
                symbol: 'X',
                position: 2
            }
            .to_string(),
            "unknown symbol 'X' at position 2"
        );
        assert_eq!(
            ResolveError::Empty.to_string(),
            "cannot resolve an empty numeral"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ResolveError::Empty, ResolveError::Empty);
        assert_ne!(
            ValidationError::Empty,
            ValidationError::UnknownSymbols(smallvec!['Q'])
        );
        assert_eq!(
            EncodeError::OutOfRange { value: 0 }.to_string(),
            "value 0 is outside the representable range 1..=3999"
        );
    }
}
