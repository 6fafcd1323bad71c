//! Adapters - Implementations of application ports

mod cached_forecast_adapter;
mod darksky_adapter;

pub use cached_forecast_adapter::CachedForecastAdapter;
pub use darksky_adapter::DarkSkyAdapter;
