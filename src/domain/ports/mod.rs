//! Ports (interfaces) for the logging facade
//!
//! Engines are plugged in as adapters implementing these traits.

pub mod logger;

pub use logger::{Logger, FATAL_EXIT_CODE};
