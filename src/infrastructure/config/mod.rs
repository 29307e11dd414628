//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading
//! - Environment variable overrides

pub mod loader;

pub use loader::{ConfigLoader, CONFIG_FILE, ENV_PREFIX};
