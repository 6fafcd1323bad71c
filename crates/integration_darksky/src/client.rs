//! DarkSky HTTP client
//!
//! Builds canonical request URLs and fetches raw forecast payloads.

use std::time::Duration;

use domain::ForecastRequest;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, instrument};

use crate::models::ErrorBody;

/// Attribution the provider requires on every display
pub const ATTRIBUTION: &str = "Powered by DarkSky";

/// Stands in for the API key in canonical URLs
///
/// Canonical URLs are logged and hashed into cache keys, so they never carry
/// the real key; it is substituted only when the request is sent.
pub const API_KEY_PLACEHOLDER: &str = "[API_KEY]";

/// DarkSky client errors
#[derive(Debug, Error)]
pub enum DarkSkyError {
    /// HTTP client could not be built
    #[error("Client initialization failed: {0}")]
    Initialization(String),

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The API answered with a non-200 status
    #[error("DarkSky API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body was not JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// The JSON did not have the expected forecast shape
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

/// DarkSky client configuration
#[derive(Clone, Deserialize)]
pub struct DarkSkyConfig {
    /// API base URL (default: <https://api.darksky.net/forecast/>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    pub api_key: SecretString,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl std::fmt::Debug for DarkSkyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DarkSkyConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Default base URL of the forecast API
pub fn default_base_url() -> String {
    "https://api.darksky.net/forecast/".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("signage-weather/", env!("CARGO_PKG_VERSION")).to_string()
}

impl DarkSkyConfig {
    /// Configuration with default endpoint and timeout for the given key
    #[must_use]
    pub fn with_api_key(api_key: SecretString) -> Self {
        Self {
            base_url: default_base_url(),
            api_key,
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// DarkSky HTTP client
#[derive(Debug)]
pub struct DarkSkyClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl DarkSkyClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: DarkSkyConfig) -> Result<Self, DarkSkyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| DarkSkyError::Initialization(e.to_string()))?;

        let mut base_url = config.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }

    /// Canonical, key-free URL for a request
    ///
    /// Identical requests always produce identical URLs.
    #[must_use]
    pub fn request_url(&self, request: &ForecastRequest) -> String {
        format!(
            "{}{}/{}?exclude=minutely,hourly&units={}&lang={}",
            self.base_url,
            API_KEY_PLACEHOLDER,
            request.location().path_segment(),
            request.units().id(),
            request.language().code(),
        )
    }

    /// Fetch the raw JSON payload behind a canonical URL
    ///
    /// # Errors
    ///
    /// - `Transport` when no response arrives
    /// - `Api` on any status other than 200, with the message from the body
    /// - `Parse` when the body is not JSON
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch(&self, url: &str) -> Result<serde_json::Value, DarkSkyError> {
        debug!("Fetching forecast");

        let keyed = url.replacen(API_KEY_PLACEHOLDER, self.api_key.expose_secret(), 1);
        let response = self.client.get(&keyed).send().await.map_err(|e| {
            let e = e.without_url();
            error!(error = %e, "Forecast request failed");
            DarkSkyError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            let message = ErrorBody::message_from(&body);
            error!(status = status.as_u16(), message = %message, "DarkSky returned an error");
            return Err(DarkSkyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| DarkSkyError::Parse(e.without_url().to_string()))
    }
}
