//! Theme error types

use lumen_core::ColorParseError;
use thiserror::Error;

/// Theme-related errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A derivation input was outside its allowed range
    #[error("`{name}` must be between {min} and {max}, not {value}")]
    InvalidArgument {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// A theme is missing a field every factory-built theme has
    #[error("theme invariant violated: {0}")]
    InvariantViolation(String),

    /// A configured color could not be parsed
    #[error(transparent)]
    Color(#[from] ColorParseError),

    /// The theme configuration is malformed
    #[error("invalid theme config: {0}")]
    Config(String),

    /// The theme configuration file could not be read
    #[error("failed to read theme config: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
