//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the in-memory
//! forecast cache, the DarkSky source and the caching decorator, plus
//! configuration loading and logging setup.

pub mod adapters;
pub mod cache;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use cache::{MokaCache, MokaCacheConfig, forecast_cache_key};
pub use config::{
    AppConfig, CacheConfig, GeoLocationConfig, LogFormat, LoggingConfig, WeatherAppConfig,
};
pub use integration_darksky::{ATTRIBUTION, supported_languages, units_available};
pub use telemetry::{TelemetryError, init_logging};
