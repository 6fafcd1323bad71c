//! Forecast source port
//!
//! The raw upstream provider: builds request URLs, fetches payloads and
//! turns them into reports. Knows nothing about caching.

use async_trait::async_trait;
use domain::{ForecastReport, ForecastRequest};

use crate::error::ApplicationError;

/// Port for an upstream forecast provider
#[async_trait]
pub trait ForecastSourcePort: Send + Sync {
    /// Canonical request URL for a query
    ///
    /// Must not contain credentials: the URL doubles as the cache identity,
    /// so rotating a key never changes it.
    fn request_url(&self, request: &ForecastRequest) -> String;

    /// Fetch the raw JSON payload for a URL produced by [`Self::request_url`]
    async fn fetch_payload(&self, request_url: &str)
    -> Result<serde_json::Value, ApplicationError>;

    /// Parse a raw payload into a report
    fn parse_payload(&self, payload: &serde_json::Value)
    -> Result<ForecastReport, ApplicationError>;

    /// Attribution text the provider requires on displays
    fn attribution(&self) -> &'static str;
}
