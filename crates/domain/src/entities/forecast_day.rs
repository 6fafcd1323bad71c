//! Forecast day entity
//!
//! One day's weather (or the current moment's) as shown on a display.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{CompassDirection, UnitLabels};

/// A parsed weather snapshot
///
/// Rounded fields, the humidity percentage, the wind direction and the
/// mapped icon are derived when the snapshot is parsed and are never
/// recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    /// Unix timestamp (seconds) the snapshot refers to
    pub time: i64,
    pub summary: String,
    /// Upstream icon code
    pub icon: String,
    /// Local icon identifier mapped from `icon`
    pub wicon: &'static str,

    pub temperature: f64,
    pub temperature_round: f64,
    pub apparent_temperature: f64,
    pub apparent_temperature_round: f64,
    pub temperature_high: f64,
    pub temperature_max_round: f64,
    pub temperature_low: f64,
    pub temperature_min_round: f64,

    pub dew_point: Option<f64>,
    /// Relative humidity as a fraction (0.0 - 1.0)
    pub humidity: Option<f64>,
    /// Relative humidity as a percentage (0 - 100)
    pub humidity_percent: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
    /// Wind bearing in degrees
    pub wind_bearing: Option<f64>,
    pub wind_direction: Option<CompassDirection>,
    pub cloud_cover: Option<f64>,
    pub uv_index: Option<f64>,
    pub visibility: Option<f64>,
    pub ozone: Option<f64>,

    /// Unit labels in force when the values were parsed
    pub units: UnitLabels,
}

impl ForecastDay {
    /// Timestamp as a UTC datetime, if representable
    #[must_use]
    pub fn time_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }

    /// Copy the daily high/low (and their rounded forms) from another day
    pub(crate) fn take_high_low_from(&mut self, other: &Self) {
        self.temperature_high = other.temperature_high;
        self.temperature_max_round = other.temperature_max_round;
        self.temperature_low = other.temperature_low;
        self.temperature_min_round = other.temperature_min_round;
    }
}
