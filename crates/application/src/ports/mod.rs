//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod cache_port;
mod forecast_port;
mod forecast_source_port;

pub use cache_port::{CacheLock, CachePort, CachePortExt, CacheStats};
#[cfg(test)]
pub use forecast_port::MockForecastPort;
pub use forecast_port::ForecastPort;
pub use forecast_source_port::ForecastSourcePort;
