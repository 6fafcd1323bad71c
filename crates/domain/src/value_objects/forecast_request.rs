//! Forecast request value object
//!
//! Everything needed to ask the provider for one location's forecast.

use std::time::Duration;

use super::{GeoLocation, Language, UnitSystem};
use crate::errors::DomainError;

/// A forecast query for one display
///
/// Immutable once built; the cache time-to-live travels with the request so
/// different displays may tolerate different staleness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastRequest {
    location: GeoLocation,
    units: UnitSystem,
    language: Language,
    cache_ttl: Duration,
}

impl ForecastRequest {
    /// Default cache time-to-live (4 hours)
    pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(14_400);

    /// Create a request with the default cache time-to-live
    #[must_use]
    pub const fn new(location: GeoLocation, units: UnitSystem, language: Language) -> Self {
        Self {
            location,
            units,
            language,
            cache_ttl: Self::DEFAULT_CACHE_TTL,
        }
    }

    /// Replace the cache time-to-live
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` for a zero duration.
    pub fn with_cache_ttl(self, cache_ttl: Duration) -> Result<Self, DomainError> {
        if cache_ttl.is_zero() {
            return Err(DomainError::ValidationError(
                "cache time-to-live must be greater than zero".to_string(),
            ));
        }
        Ok(Self { cache_ttl, ..self })
    }

    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    #[must_use]
    pub const fn units(&self) -> UnitSystem {
        self.units
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }
}
