//! DarkSky adapter - Implements `ForecastSourcePort` using integration_darksky

use application::{error::ApplicationError, ports::ForecastSourcePort};
use async_trait::async_trait;
use domain::{ForecastReport, ForecastRequest};
use integration_darksky::{ATTRIBUTION, DarkSkyClient, DarkSkyConfig, DarkSkyError, parse_report};
use tracing::{debug, instrument};

/// Adapter for the DarkSky forecast API
pub struct DarkSkyAdapter {
    client: DarkSkyClient,
}

impl std::fmt::Debug for DarkSkyAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DarkSkyAdapter")
            .field("client", &"DarkSkyClient")
            .finish()
    }
}

impl DarkSkyAdapter {
    /// Create an adapter with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: DarkSkyConfig) -> Result<Self, ApplicationError> {
        let client = DarkSkyClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration errors to application errors
    fn map_error(err: DarkSkyError) -> ApplicationError {
        match err {
            DarkSkyError::Initialization(e) => ApplicationError::Configuration(e),
            DarkSkyError::Api { message, .. } => ApplicationError::Upstream(message),
            e @ (DarkSkyError::Transport(_)
            | DarkSkyError::Parse(_)
            | DarkSkyError::MalformedPayload(_)) => ApplicationError::Upstream(e.to_string()),
        }
    }
}

#[async_trait]
impl ForecastSourcePort for DarkSkyAdapter {
    fn request_url(&self, request: &ForecastRequest) -> String {
        self.client.request_url(request)
    }

    #[instrument(skip(self))]
    async fn fetch_payload(
        &self,
        request_url: &str,
    ) -> Result<serde_json::Value, ApplicationError> {
        let payload = self.client.fetch(request_url).await.map_err(Self::map_error)?;
        debug!("Retrieved forecast payload");
        Ok(payload)
    }

    fn parse_payload(
        &self,
        payload: &serde_json::Value,
    ) -> Result<ForecastReport, ApplicationError> {
        parse_report(payload).map_err(Self::map_error)
    }

    fn attribution(&self) -> &'static str {
        ATTRIBUTION
    }
}
