//! Value Objects - Immutable, identity-less domain primitives

mod compass_direction;
mod forecast_request;
mod geo_location;
mod language;
mod unit_system;

pub use compass_direction::CompassDirection;
pub use forecast_request::ForecastRequest;
pub use geo_location::GeoLocation;
pub use language::Language;
pub use unit_system::{UnitLabels, UnitSystem};
