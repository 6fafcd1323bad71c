//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Unit system id not in the supported table
    #[error("Unsupported unit system: {0}")]
    UnsupportedUnitSystem(String),

    /// Language code not in the supported table
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A forecast report needs at least one daily entry
    #[error("Forecast contains no daily entries")]
    EmptyForecast,

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
