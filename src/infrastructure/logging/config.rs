//! Logging configuration.

use serde::{Deserialize, Serialize};

pub use crate::domain::models::LogFormat;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Verbosity count (0 = info, 1 = debug, 2+ = trace)
    #[serde(default)]
    pub verbosity: u8,

    /// Output format (json, pretty)
    #[serde(default)]
    pub format: LogFormat,

    /// Colourise human readable output
    #[serde(default = "default_true")]
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            format: LogFormat::default(),
            ansi: true,
        }
    }
}

const fn default_true() -> bool {
    true
}
