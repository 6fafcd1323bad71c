//! Application layer - Use cases and orchestration
//!
//! Contains the port definitions the infrastructure adapters implement and
//! the forecast service displays talk to.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
