//! Infrastructure layer module
//!
//! Adapters implementing the domain ports plus their configuration:
//! - `tracing` engine adapter and subscriber installation
//! - Secret scrubbing
//! - Configuration loading
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
