//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The forecast provider could not deliver a usable forecast
    ///
    /// Covers non-success responses, transport failures and malformed
    /// payloads alike.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::EmptyForecast.into();
        assert_eq!(err.to_string(), "Forecast contains no daily entries");
    }

    #[test]
    fn upstream_message_is_preserved() {
        let err = ApplicationError::Upstream("daily usage limit exceeded".into());
        assert_eq!(err.to_string(), "Upstream error: daily usage limit exceeded");
    }
}
