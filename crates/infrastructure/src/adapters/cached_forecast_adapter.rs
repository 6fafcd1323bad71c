//! Cached forecast adapter - Fetch-or-load in front of any `ForecastSourcePort`
//!
//! Raw payloads are cached under a key derived from the canonical request
//! URL. At most one upstream fetch per key is in flight: a miss takes the
//! key lock, re-checks the cache, and only then fetches.

use std::{sync::Arc, time::Duration};

use application::{
    error::ApplicationError,
    ports::{CachePort, CachePortExt, ForecastPort, ForecastSourcePort},
};
use async_trait::async_trait;
use domain::{ForecastReport, ForecastRequest};
use tracing::{debug, error, instrument, warn};

use crate::cache::forecast_cache_key;

/// Caching decorator for forecast sources
pub struct CachedForecastAdapter<S: ForecastSourcePort, C: CachePort> {
    /// The upstream provider
    source: S,
    /// Shared, process-wide payload cache
    cache: Arc<C>,
}

impl<S: ForecastSourcePort + std::fmt::Debug, C: CachePort> std::fmt::Debug
    for CachedForecastAdapter<S, C>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedForecastAdapter")
            .field("source", &self.source)
            .field("cache", &self.cache)
            .finish()
    }
}

impl<S: ForecastSourcePort, C: CachePort> CachedForecastAdapter<S, C> {
    /// Create a new cached forecast adapter
    pub const fn new(source: S, cache: Arc<C>) -> Self {
        Self { source, cache }
    }

    /// Get the underlying source
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Read a cached payload
    ///
    /// Entries that cannot be decoded are dropped and reported as a miss.
    async fn cached_payload(&self, key: &str) -> Option<serde_json::Value> {
        match self.cache.get::<serde_json::Value>(key).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, key = %key, "Discarding unreadable cache entry");
                if let Err(e) = self.cache.invalidate(key).await {
                    warn!(error = %e, key = %key, "Cache invalidate error");
                }
                None
            },
        }
    }

    async fn store_payload(&self, key: &str, payload: &serde_json::Value, ttl: Duration) {
        if let Err(e) = self.cache.set(key, payload, ttl).await {
            warn!(error = %e, key = %key, "Cache write error");
        } else {
            debug!(key = %key, ttl_secs = ttl.as_secs(), "Cached forecast payload");
        }
    }

    /// Fetch and parse under the key lock, storing only usable payloads
    async fn fetch_and_store(
        &self,
        url: &str,
        key: &str,
        ttl: Duration,
    ) -> Result<ForecastReport, ApplicationError> {
        let payload = self.source.fetch_payload(url).await.inspect_err(|e| {
            error!(error = %e, "Forecast fetch failed");
        })?;
        let report = self.source.parse_payload(&payload).inspect_err(|e| {
            error!(error = %e, "Forecast payload rejected");
        })?;

        self.store_payload(key, &payload, ttl).await;
        Ok(report)
    }
}

#[async_trait]
impl<S: ForecastSourcePort, C: CachePort> ForecastPort for CachedForecastAdapter<S, C> {
    #[instrument(
        skip(self, request),
        fields(location = %request.location(), units = %request.units(), cached = tracing::field::Empty)
    )]
    async fn load(&self, request: &ForecastRequest) -> Result<ForecastReport, ApplicationError> {
        let url = self.source.request_url(request);
        let key = forecast_cache_key(&url);
        debug!(url = %url, key = %key, "Loading forecast");

        if let Some(payload) = self.cached_payload(&key).await {
            tracing::Span::current().record("cached", true);
            return self.source.parse_payload(&payload);
        }

        let _lock = self.cache.lock(&key).await;

        if let Some(payload) = self.cached_payload(&key).await {
            tracing::Span::current().record("cached", true);
            debug!("Payload stored while waiting for key lock");
            return self.source.parse_payload(&payload);
        }

        tracing::Span::current().record("cached", false);
        self.fetch_and_store(&url, &key, request.cache_ttl()).await
    }

    fn attribution(&self) -> &'static str {
        self.source.attribution()
    }
}
