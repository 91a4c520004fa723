// ============================================================================
// Numeral Converter
// Configurable conversion with input normalization and event reporting
// ============================================================================

use super::resolver::resolve;
use super::safe::to_integer_safe;
use super::validator::validate;
use crate::domain::{
    ConversionMode, ConverterConfig, ResolveError, ValidationError, ValidationResult,
};
use crate::interfaces::{ConversionEvent, EventHandler};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

/// Why a [`NumeralConverter`] could not produce a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Strict mode: the input is not a well-formed numeral
    Invalid(ValidationError),
    /// Lenient mode: the input could not be resolved at all
    Unresolvable(ResolveError),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::Invalid(err) => write!(f, "{}", err),
            ConversionError::Unresolvable(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConversionError::Invalid(err) => Some(err),
            ConversionError::Unresolvable(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ConversionError {
    fn from(err: ValidationError) -> Self {
        ConversionError::Invalid(err)
    }
}

impl From<ResolveError> for ConversionError {
    fn from(err: ResolveError) -> Self {
        ConversionError::Unresolvable(err)
    }
}

/// Numeral converter for drivers (prompts, input fields, batch jobs)
///
/// Stateless apart from its configuration, so one instance can be shared
/// across threads.
pub struct NumeralConverter {
    /// Mode and input normalization
    config: ConverterConfig,

    /// Event handler for conversion outcomes
    event_handler: Arc<dyn EventHandler>,
}

impl NumeralConverter {
    /// Create a new converter
    pub fn new(config: ConverterConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// Convert raw input to an integer according to the configured mode
    pub fn convert(&self, input: &str) -> Result<i64, ConversionError> {
        let numeral = self.config.normalize(input);

        let result = match self.config.mode {
            ConversionMode::Strict => to_integer_safe(&numeral).map_err(ConversionError::from),
            ConversionMode::Lenient => resolve(&numeral).map_err(ConversionError::from),
        };

        let event = match &result {
            Ok(value) => ConversionEvent::Converted {
                input: numeral,
                value: *value,
                timestamp: Utc::now(),
            },
            Err(err) => ConversionEvent::Rejected {
                input: numeral,
                reason: err.to_string(),
                timestamp: Utc::now(),
            },
        };
        self.event_handler.on_event(event);

        result
    }

    /// Validate raw input after normalization, without converting it
    pub fn check(&self, input: &str) -> ValidationResult {
        validate(&self.config.normalize(input))
    }

    /// Get the converter configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }
}

impl fmt::Debug for NumeralConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumeralConverter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
