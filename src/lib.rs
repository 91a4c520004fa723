// ============================================================================
// Alien Numerals Library
// Numeral resolution and grammar validation over a fixed symbol table
// ============================================================================

//! # Alien Numerals
//!
//! Converts strings written in a Roman-numeral-like system into integers and
//! checks that they are well formed.
//!
//! ## Symbols
//!
//! `A=1, B=5, Z=10, L=50, C=100, D=500, R=1000`
//!
//! ## Entry Points
//!
//! - [`resolve`](engine::resolve) - **unchecked** left-to-right summation with
//!   one-symbol lookahead; produces a number for any string of known symbols
//! - [`validate`](engine::validate) - **grammar check**: repetition limits and
//!   subtractive-pair legality
//! - [`to_integer_safe`](engine::to_integer_safe) - validate, then resolve
//!   (the default for untrusted input)
//! - [`NumeralConverter`](engine::NumeralConverter) - configurable converter
//!   with input normalization and event reporting
//!
//! ## Example
//!
//! ```rust
//! use alien_numerals::prelude::*;
//! use std::sync::Arc;
//!
//! assert_eq!(resolve("LBAAA"), Ok(58));
//! assert_eq!(to_integer_safe("AB"), Ok(4));
//! assert!(validate("AAAA").is_err());
//!
//! let converter = NumeralConverterBuilder::interactive()
//!     .build(Arc::new(LoggingEventHandler))
//!     .unwrap();
//! assert_eq!(converter.convert(" rcrzcab "), Ok(1994));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        all_symbols, is_valid_symbol, value_of, ConversionMode, ConverterConfig, EncodeError,
        ResolveError, Symbol, SymbolTable, UnknownSymbolError, ValidationError, ValidationResult,
    };
    pub use crate::engine::{
        create_from_config, encode, is_canonical, is_valid, resolve, to_integer_safe, validate,
        ConversionError, NumeralConverter, NumeralConverterBuilder,
    };
    pub use crate::interfaces::{
        ConversionEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_end_to_end_scenarios() {
        assert_eq!(resolve("AAA"), Ok(3));
        assert_eq!(resolve("LBAAA"), Ok(58));
        assert_eq!(resolve("RCRZCAB"), Ok(1994));

        assert_eq!(
            validate("AAAA").unwrap_err().to_string(),
            "excessive repetition of A, limit 3"
        );
        assert_eq!(to_integer_safe("AB"), Ok(4));
        assert_eq!(
            to_integer_safe("AL").unwrap_err().to_string(),
            "illegal pair AL: A may only precede B or Z"
        );

        // Z is a symbol, only X and Y are reported
        assert_eq!(
            validate("XYZ").unwrap_err().to_string(),
            "unknown symbols: X, Y"
        );
        assert!(matches!(
            resolve("XYZ"),
            Err(ResolveError::UnknownSymbol { symbol: 'X', .. })
        ));
    }

    #[test]
    fn test_driver_loop_continues_after_errors() {
        let recorder = Arc::new(RecordingEventHandler::new());
        let converter = NumeralConverterBuilder::interactive()
            .build(recorder.clone())
            .unwrap();

        let inputs = ["aaa", "", "AAAA", "hello", "lbaaa", "al", "RCRZCAB"];
        let results: Vec<_> = inputs.iter().map(|i| converter.convert(i)).collect();

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 3);
        assert_eq!(results[6], Ok(1994));
        assert_eq!(recorder.events().len(), inputs.len());
    }

    #[test]
    fn test_shared_across_threads() {
        let converter = Arc::new(
            NumeralConverterBuilder::new()
                .build(Arc::new(NoOpEventHandler))
                .unwrap(),
        );

        let handles: Vec<_> = (1i64..=8)
            .map(|n| {
                let converter = Arc::clone(&converter);
                thread::spawn(move || {
                    let numeral = encode(n * 400).unwrap();
                    converter.convert(&numeral)
                })
            })
            .collect();

        for (n, handle) in (1i64..=8).zip(handles) {
            assert_eq!(handle.join().unwrap(), Ok(n * 400));
        }
    }
}
