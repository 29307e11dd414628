//! Output format selection.

use serde::{Deserialize, Serialize};

/// Output format of the logging engine
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Human readable text
    #[default]
    Pretty,
}

impl LogFormat {
    /// Format selected by the `--json-logs` switch
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}
