//! Domain entities - Objects with identity and lifecycle

mod forecast_day;
mod forecast_report;

pub use forecast_day::ForecastDay;
pub use forecast_report::ForecastReport;
