//! DarkSky wire models
//!
//! Every field is optional on the wire; the parser decides which absences
//! are tolerable.

use serde::Deserialize;

/// Top-level forecast response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub flags: Option<Flags>,
    #[serde(default)]
    pub currently: Option<DataPoint>,
    #[serde(default)]
    pub daily: Option<DataBlock>,
}

/// Response metadata
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Flags {
    /// Unit system the values are reported in
    #[serde(default)]
    pub units: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DataBlock {
    #[serde(default)]
    pub data: Vec<DataPoint>,
}

/// One point in time (current conditions or one day)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DataPoint {
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,

    pub temperature: Option<f64>,
    pub temperature_high: Option<f64>,
    pub temperature_low: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub apparent_temperature_high: Option<f64>,
    pub apparent_temperature_low: Option<f64>,

    pub dew_point: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_bearing: Option<f64>,
    pub cloud_cover: Option<f64>,
    pub uv_index: Option<f64>,
    pub visibility: Option<f64>,
    pub ozone: Option<f64>,
}

/// Error body returned with non-200 responses
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<ErrorItem>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorItem {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Fallback when the body carries no usable message
    pub const UNKNOWN: &'static str = "Unknown Error";

    /// Extract the most specific message from a raw response body
    pub fn message_from(body: &str) -> String {
        let parsed: Self = serde_json::from_str(body).unwrap_or_default();
        parsed
            .errors
            .into_iter()
            .next()
            .and_then(|item| item.message)
            .or(parsed.error)
            .unwrap_or_else(|| Self::UNKNOWN.to_string())
    }
}
