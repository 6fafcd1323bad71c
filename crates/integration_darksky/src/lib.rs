//! DarkSky forecast integration
//!
//! Client for the DarkSky forecast API plus the rules that turn its JSON
//! payload into domain [`ForecastReport`](domain::ForecastReport)s.

pub mod client;
mod models;
mod parser;

pub use client::{API_KEY_PLACEHOLDER, ATTRIBUTION, DarkSkyClient, DarkSkyConfig, DarkSkyError};
pub use parser::{parse_report, supported_languages, units_available, wicon_for};
