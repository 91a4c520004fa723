// ============================================================================
// Numeral Engine Module
// Resolver, validator, safe conversion and the configurable converter
// ============================================================================

mod converter;
mod encoder;
pub mod factory;
mod resolver;
mod safe;
mod validator;

pub use converter::{ConversionError, NumeralConverter};
pub use encoder::{encode, is_canonical, MAX_ENCODABLE};
pub use factory::{create_from_config, NumeralConverterBuilder};
pub use resolver::resolve;
pub use safe::to_integer_safe;
pub use validator::{is_valid, validate};
