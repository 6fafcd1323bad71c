//! Forecast service - per-display access to cached forecasts
//!
//! A [`ForecastSession`] is created for each display refresh. Its first
//! accessor call loads the report through the [`ForecastPort`]; every later
//! call is answered from the session without touching the port again.

use std::{fmt, sync::Arc};

use domain::{ForecastDay, ForecastReport, ForecastRequest};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::ForecastPort};

/// Entry point for displays that need weather data
pub struct ForecastService {
    port: Arc<dyn ForecastPort>,
}

impl fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastService")
            .field("attribution", &self.port.attribution())
            .finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a new forecast service
    pub fn new(port: Arc<dyn ForecastPort>) -> Self {
        Self { port }
    }

    /// Start a session for one request
    #[must_use]
    pub fn session(&self, request: ForecastRequest) -> ForecastSession {
        ForecastSession {
            port: Arc::clone(&self.port),
            request,
            report: None,
        }
    }

    /// Attribution text the provider requires on displays
    pub fn attribution(&self) -> &'static str {
        self.port.attribution()
    }
}

/// Lazily loaded, memoized forecast for one request
///
/// Not shared between tasks; accessors take `&mut self`.
pub struct ForecastSession {
    port: Arc<dyn ForecastPort>,
    request: ForecastRequest,
    report: Option<ForecastReport>,
}

impl fmt::Debug for ForecastSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastSession")
            .field("request", &self.request)
            .field("loaded", &self.report.is_some())
            .finish_non_exhaustive()
    }
}

impl ForecastSession {
    /// The request this session answers
    #[must_use]
    pub const fn request(&self) -> &ForecastRequest {
        &self.request
    }

    /// Whether the report has been loaded
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.report.is_some()
    }

    /// Load the report unless it is already held
    ///
    /// A failed load leaves the session unloaded, so the next call retries.
    #[instrument(skip(self), fields(location = %self.request.location(), loaded = self.report.is_some()))]
    pub async fn ensure_loaded(&mut self) -> Result<&ForecastReport, ApplicationError> {
        let report = match self.report.take() {
            Some(report) => report,
            None => {
                let report = self.port.load(&self.request).await?;
                debug!(
                    days = report.daily().len(),
                    timezone = report.timezone(),
                    "Forecast loaded"
                );
                report
            },
        };
        Ok(self.report.insert(report))
    }

    /// Current conditions, with today's high/low
    pub async fn current_day(&mut self) -> Result<&ForecastDay, ApplicationError> {
        Ok(self.ensure_loaded().await?.current())
    }

    /// Daily forecast in chronological order
    pub async fn forecast(&mut self) -> Result<&[ForecastDay], ApplicationError> {
        Ok(self.ensure_loaded().await?.daily())
    }

    /// IANA timezone of the requested location
    pub async fn timezone(&mut self) -> Result<&str, ApplicationError> {
        Ok(self.ensure_loaded().await?.timezone())
    }
}
