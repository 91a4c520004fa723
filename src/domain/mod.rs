// ============================================================================
// Domain Models Module
// Symbol table, construction rules, configuration and error types
// ============================================================================

pub mod config;
pub mod errors;
pub mod rules;
pub mod symbol;

pub use config::{ConversionMode, ConverterConfig};
pub use errors::{
    EncodeError, ResolveError, ResolveResult, UnknownSymbolError, ValidationError,
    ValidationResult,
};
pub use rules::{verify_tables, MAX_SUCCESSORS, REPETITION_LIMITS, SUBTRACTION_RULES};
pub use symbol::{all_symbols, is_valid_symbol, value_of, Symbol, SymbolTable};
