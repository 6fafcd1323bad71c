//! Forecast port
//!
//! What displays consume: a typed report per request, with caching handled
//! behind the port.

use async_trait::async_trait;
use domain::{ForecastReport, ForecastRequest};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for loading forecasts
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Load the report for a request, from cache or upstream
    async fn load(&self, request: &ForecastRequest) -> Result<ForecastReport, ApplicationError>;

    /// Attribution text the provider requires on displays
    fn attribution(&self) -> &'static str;
}
