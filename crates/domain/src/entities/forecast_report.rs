//! Forecast report entity

use serde::Serialize;

use super::ForecastDay;
use crate::errors::DomainError;

/// Current conditions plus the daily forecast for one location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    timezone: String,
    current: ForecastDay,
    daily: Vec<ForecastDay>,
}

impl ForecastReport {
    /// Assemble a report
    ///
    /// The current snapshot carries no daily high/low of its own, so those
    /// fields are taken from the first daily entry.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyForecast` when `daily` is empty.
    pub fn new(
        timezone: impl Into<String>,
        mut current: ForecastDay,
        daily: Vec<ForecastDay>,
    ) -> Result<Self, DomainError> {
        let first = daily.first().ok_or(DomainError::EmptyForecast)?;
        current.take_high_low_from(first);

        Ok(Self {
            timezone: timezone.into(),
            current,
            daily,
        })
    }

    /// IANA timezone name of the location
    #[must_use]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    #[must_use]
    pub const fn current(&self) -> &ForecastDay {
        &self.current
    }

    /// Daily entries in chronological order
    #[must_use]
    pub fn daily(&self) -> &[ForecastDay] {
        &self.daily
    }
}
