//! Logging infrastructure
//!
//! Installs a `tracing` subscriber with an `EnvFilter` and either text or
//! JSON output on stderr.

use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Logging initialization errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Subscriber installation failed (usually: one is already installed)
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Build the level filter, preferring `RUST_LOG` over the configured filter
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
}

/// Initialize global logging
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    match config.format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
    .map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(filter = %config.log_filter, format = %config.format, "Logging initialized");
    Ok(())
}
