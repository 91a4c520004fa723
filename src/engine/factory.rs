// ============================================================================
// Converter Factory
// Creates numeral converters with proper configuration
// ============================================================================

use crate::domain::config::{ConversionMode, ConverterConfig};
use crate::domain::verify_tables;
use crate::engine::NumeralConverter;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a numeral converter from configuration
///
/// # Arguments
/// * `config` - Converter configuration
/// * `event_handler` - Event handler for conversion events
///
/// # Returns
/// * `Result<NumeralConverter, String>` - Configured converter, or the table
///   inconsistency that prevented building one
///
/// # Example
/// ```
/// use alien_numerals::prelude::*;
/// use alien_numerals::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let converter =
///     create_from_config(ConverterConfig::strict(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(converter.convert("AB"), Ok(4));
/// ```
pub fn create_from_config(
    config: ConverterConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<NumeralConverter, String> {
    verify_tables()?;

    tracing::debug!(?config, "creating numeral converter");

    Ok(NumeralConverter::new(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating numeral converters with fluent API
///
/// # Example
/// ```
/// use alien_numerals::prelude::*;
/// use alien_numerals::engine::factory::NumeralConverterBuilder;
/// use std::sync::Arc;
///
/// let converter = NumeralConverterBuilder::new()
///     .lenient()
///     .trim_whitespace(true)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(converter.convert(" AAAA "), Ok(4));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumeralConverterBuilder {
    config: ConverterConfig,
}

impl NumeralConverterBuilder {
    /// Create a new builder (strict mode, no normalization)
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Mode Configuration
    // ========================================================================

    /// Validate before resolving (default)
    pub fn strict(mut self) -> Self {
        self.config.mode = ConversionMode::Strict;
        self
    }

    /// Resolve without grammar checks
    pub fn lenient(mut self) -> Self {
        self.config.mode = ConversionMode::Lenient;
        self
    }

    // ========================================================================
    // Input Normalization
    // ========================================================================

    /// Strip surrounding whitespace from input
    pub fn trim_whitespace(mut self, trim: bool) -> Self {
        self.config.trim_whitespace = trim;
        self
    }

    /// Upper-case input
    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.config.uppercase = uppercase;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply interactive-prompt configuration
    pub fn interactive() -> Self {
        Self {
            config: ConverterConfig::interactive(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<NumeralConverter, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ConverterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;

    #[test]
    fn test_create_strict_converter() {
        let converter =
            create_from_config(ConverterConfig::strict(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(converter.config().mode, ConversionMode::Strict);
        assert!(converter.convert("AL").is_err());
    }

    #[test]
    fn test_create_lenient_converter() {
        let converter =
            create_from_config(ConverterConfig::lenient(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(converter.convert("AL"), Ok(49));
    }

    #[test]
    fn test_builder_pattern() {
        let builder = NumeralConverterBuilder::new()
            .lenient()
            .strict()
            .uppercase(true);

        assert_eq!(builder.get_config().mode, ConversionMode::Strict);
        assert!(builder.get_config().uppercase);

        let converter = builder.build(Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(converter.convert("zaz"), Ok(19));
    }

    #[test]
    fn test_preset_builder() {
        let converter = NumeralConverterBuilder::interactive()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        assert_eq!(converter.config(), &ConverterConfig::interactive());
        assert_eq!(converter.convert(" rcrzcab "), Ok(1994));
    }
}
