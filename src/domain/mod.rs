//! Domain layer: levels, context fields, and the logger port.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{LoggingError, LoggingResult};
