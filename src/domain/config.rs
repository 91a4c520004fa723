// ============================================================================
// Converter Configuration
// Conversion mode and input normalization settings
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Mode
// ============================================================================

/// How a converter turns input into an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionMode {
    /// Validate the grammar first, resolve only well-formed numerals
    #[default]
    Strict,

    /// Resolve directly without grammar checks
    /// Malformed numerals still produce a number (e.g. "AAAA" -> 4)
    Lenient,
}

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Configuration for a [`NumeralConverter`](crate::engine::NumeralConverter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Conversion mode
    pub mode: ConversionMode,

    /// Strip leading and trailing whitespace before conversion
    pub trim_whitespace: bool,

    /// Upper-case input before conversion (symbols are upper-case only)
    pub uppercase: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl ConverterConfig {
    /// Create a new configuration with no input normalization
    pub fn new(mode: ConversionMode) -> Self {
        Self {
            mode,
            trim_whitespace: false,
            uppercase: false,
        }
    }

    /// Builder method: Set conversion mode
    pub fn with_mode(mut self, mode: ConversionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder method: Enable or disable whitespace trimming
    pub fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    /// Builder method: Enable or disable upper-casing
    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    /// Apply the configured normalization to raw input
    pub fn normalize(&self, input: &str) -> String {
        let s = if self.trim_whitespace {
            input.trim()
        } else {
            input
        };

        if self.uppercase {
            s.to_uppercase()
        } else {
            s.to_string()
        }
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Strict conversion of exact input
    pub fn strict() -> Self {
        Self::new(ConversionMode::Strict)
    }

    /// Lenient conversion of exact input
    pub fn lenient() -> Self {
        Self::new(ConversionMode::Lenient)
    }

    /// Strict conversion of typed input
    /// - Surrounding whitespace ignored
    /// - Lower-case letters accepted
    pub fn interactive() -> Self {
        Self::strict().with_trim_whitespace(true).with_uppercase(true)
    }
}
