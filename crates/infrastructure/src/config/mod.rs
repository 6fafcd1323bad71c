//! Application configuration
//!
//! Split into focused sub-modules:
//! - `weather`: forecast provider endpoint, key and display defaults
//! - `cache`: process-wide cache bounds
//! - `logging`: log filter and format
//!
//! Sources, lowest precedence first: built-in defaults, a TOML file
//! (`config.toml` in the working directory, or an explicit path), then
//! environment variables such as `SIGNAGE_WEATHER__WEATHER__API_KEY`.

mod cache;
mod logging;
mod weather;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use cache::CacheConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use weather::{GeoLocationConfig, WeatherAppConfig};

/// Prefix of environment variables that override file settings
pub const ENV_PREFIX: &str = "SIGNAGE_WEATHER";

/// Separator between the prefix and nested keys in environment variables
pub const ENV_SEPARATOR: &str = "__";

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Forecast provider settings
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (required to exist when
    /// given) or the optional default `config.toml`, then the environment
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., SIGNAGE_WEATHER__CACHE__MAX_ENTRIES)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            units = %config.weather.units,
            language = %config.weather.language,
            cache_ttl_secs = config.weather.cache_ttl_secs,
            "Configuration loaded"
        );
        Ok(config)
    }
}
