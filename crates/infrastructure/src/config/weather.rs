//! Weather provider configuration.

use std::time::Duration;

use domain::{DomainError, ForecastRequest, GeoLocation, Language, UnitSystem};
use integration_darksky::DarkSkyConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Forecast provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// DarkSky API base URL
    #[serde(default = "integration_darksky::client::default_base_url")]
    pub base_url: String,

    /// DarkSky API key (sensitive - uses `SecretString`)
    #[serde(default = "empty_secret", skip_serializing)]
    pub api_key: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,

    /// How long a fetched forecast stays cached, in seconds (default: 4 hours)
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Unit system requested when a display doesn't choose one
    #[serde(default)]
    pub units: UnitSystem,

    /// Summary language code requested when a display doesn't choose one
    #[serde(default = "default_language")]
    pub language: String,

    /// Location used when none is given
    ///
    /// Configured as inline table: `{ latitude = 51.5074, longitude = -0.1278 }`
    #[serde(default)]
    pub default_location: Option<GeoLocationConfig>,
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .field("units", &self.units)
            .field("language", &self.language)
            .field("default_location", &self.default_location)
            .finish()
    }
}

/// Geographic location configuration (latitude/longitude pair)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoLocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl GeoLocationConfig {
    /// Convert to domain `GeoLocation` value object
    pub fn to_geo_location(&self) -> Result<GeoLocation, DomainError> {
        GeoLocation::new(self.latitude, self.longitude)
    }
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

const fn default_weather_timeout() -> u64 {
    30
}

const fn default_cache_ttl_secs() -> u64 {
    ForecastRequest::DEFAULT_CACHE_TTL.as_secs()
}

fn default_language() -> String {
    Language::ENGLISH.code().to_string()
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: integration_darksky::client::default_base_url(),
            api_key: empty_secret(),
            timeout_secs: default_weather_timeout(),
            cache_ttl_secs: default_cache_ttl_secs(),
            units: UnitSystem::default(),
            language: default_language(),
            default_location: None,
        }
    }
}

impl WeatherAppConfig {
    /// Whether an API key has been configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().trim().is_empty()
    }

    /// Convert to `integration_darksky`'s `DarkSkyConfig`
    #[must_use]
    pub fn to_darksky_config(&self) -> DarkSkyConfig {
        DarkSkyConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            ..DarkSkyConfig::with_api_key(self.api_key.clone())
        }
    }

    /// Build a validated request for `location` using the configured
    /// units, language and cache time-to-live
    pub fn forecast_request(&self, location: GeoLocation) -> Result<ForecastRequest, DomainError> {
        let language = Language::from_code(&self.language)?;
        ForecastRequest::new(location, self.units, language)
            .with_cache_ttl(Duration::from_secs(self.cache_ttl_secs))
    }
}
