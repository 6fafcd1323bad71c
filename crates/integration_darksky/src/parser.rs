//! Payload parsing
//!
//! Turns a DarkSky JSON payload into a [`ForecastReport`].

use domain::{
    CompassDirection, DomainError, ForecastDay, ForecastReport, Language, UnitLabels, UnitSystem,
};
use serde::Deserialize;

use crate::{
    client::DarkSkyError,
    models::{ApiResponse, DataPoint},
};

/// Local icon used for any upstream code without a mapping
const UNMAPPED_ICON: &str = "wi-alien";

/// Upstream icon code → local icon identifier
const ICONS: [(&str, &str); 11] = [
    ("clear-day", "wi-day-sunny"),
    ("clear-night", "wi-night-clear"),
    ("rain", "wi-rain"),
    ("snow", "wi-snow"),
    ("sleet", "wi-hail"),
    ("wind", "wi-windy"),
    ("fog", "wi-fog"),
    ("cloudy", "wi-cloudy"),
    ("partly-cloudy-day", "wi-day-cloudy"),
    ("partly-cloudy-night", "wi-night-partly-cloudy"),
    ("unmapped", UNMAPPED_ICON),
];

/// Map an upstream icon code to the local icon set
#[must_use]
pub fn wicon_for(icon: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(code, _)| *code == icon)
        .map_or(UNMAPPED_ICON, |(_, wicon)| wicon)
}

/// Unit systems the provider accepts
#[must_use]
pub const fn units_available() -> [UnitSystem; 5] {
    UnitSystem::ALL
}

/// Languages the provider can write summaries in
#[must_use]
pub const fn supported_languages() -> &'static [Language] {
    Language::all()
}

fn average(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    Some(f64::midpoint(a?, b?))
}

/// Parse one data point
///
/// Missing point temperatures fall back to the high/low average; missing
/// highs and lows fall back to the resolved temperature.
pub(crate) fn parse_day(item: &DataPoint, units: UnitLabels) -> Result<ForecastDay, DarkSkyError> {
    let temperature = item
        .temperature
        .or_else(|| average(item.temperature_high, item.temperature_low))
        .ok_or_else(|| {
            DarkSkyError::MalformedPayload(format!(
                "no temperature or high/low for time {}",
                item.time
            ))
        })?;

    let apparent_temperature = item
        .apparent_temperature
        .or_else(|| average(item.apparent_temperature_high, item.apparent_temperature_low))
        .unwrap_or(temperature);

    let temperature_high = item.temperature_high.unwrap_or(temperature);
    let temperature_low = item.temperature_low.unwrap_or(temperature);
    let icon = item.icon.clone().unwrap_or_default();

    Ok(ForecastDay {
        time: item.time,
        summary: item.summary.clone().unwrap_or_default(),
        wicon: wicon_for(&icon),
        icon,
        temperature,
        temperature_round: temperature.round(),
        apparent_temperature,
        apparent_temperature_round: apparent_temperature.round(),
        temperature_high,
        temperature_max_round: temperature_high.round(),
        temperature_low,
        temperature_min_round: temperature_low.round(),
        dew_point: item.dew_point,
        humidity: item.humidity,
        humidity_percent: item.humidity.map(|h| h * 100.0),
        pressure: item.pressure,
        wind_speed: item.wind_speed,
        wind_bearing: item.wind_bearing,
        wind_direction: item.wind_bearing.and_then(CompassDirection::from_bearing),
        cloud_cover: item.cloud_cover,
        uv_index: item.uv_index,
        visibility: item.visibility,
        ozone: item.ozone,
        units,
    })
}

/// Parse a full forecast payload
///
/// # Errors
///
/// Returns `DarkSkyError::MalformedPayload` when the payload lacks a
/// timezone, current conditions, any daily entry, or a usable temperature.
pub fn parse_report(payload: &serde_json::Value) -> Result<ForecastReport, DarkSkyError> {
    let response = ApiResponse::deserialize(payload)
        .map_err(|e| DarkSkyError::MalformedPayload(e.to_string()))?;

    let units = response
        .flags
        .and_then(|flags| flags.units)
        .map_or(UnitLabels::EMPTY, |id| UnitLabels::for_reported(&id));

    let timezone = response
        .timezone
        .ok_or_else(|| DarkSkyError::MalformedPayload("missing timezone".to_string()))?;
    let currently = response
        .currently
        .ok_or_else(|| DarkSkyError::MalformedPayload("missing current conditions".to_string()))?;

    let current = parse_day(&currently, units)?;
    let daily = response
        .daily
        .map(|block| block.data)
        .unwrap_or_default()
        .iter()
        .map(|item| parse_day(item, units))
        .collect::<Result<Vec<_>, _>>()?;

    ForecastReport::new(timezone, current, daily)
        .map_err(|e: DomainError| DarkSkyError::MalformedPayload(e.to_string()))
}
