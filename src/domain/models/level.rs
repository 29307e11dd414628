//! Log levels and the verbosity mapping.

use std::fmt;
use std::str::FromStr;

/// Log level enumeration for leveled logging
///
/// Levels are ordered from most verbose (Trace) to most severe (Fatal).
/// This ordering allows filtering and comparison operations.
///
/// # Examples
///
/// ```
/// use logshim::domain::models::Level;
///
/// assert!(Level::Error > Level::Info);
/// assert!(Level::Trace < Level::Debug);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Most verbose level - detailed trace information
    Trace,
    /// Debug information useful during development
    Debug,
    /// Informational messages about normal operations
    Info,
    /// Warning messages for potentially problematic situations
    Warn,
    /// Error messages for failure conditions
    Error,
    /// Unrecoverable condition; the process terminates after emission
    Fatal,
}

impl Level {
    /// Returns the string representation of the log level
    ///
    /// # Examples
    ///
    /// ```
    /// use logshim::domain::models::Level;
    ///
    /// assert_eq!(Level::Info.as_str(), "INFO");
    /// assert_eq!(Level::Fatal.as_str(), "FATAL");
    /// ```
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Least severe level that is emitted at the given verbosity count.
    ///
    /// `0` keeps the default info channel, each `-v` unlocks one more
    /// verbose channel, and anything past trace saturates.
    ///
    /// ```
    /// use logshim::domain::models::Level;
    ///
    /// assert_eq!(Level::threshold(0), Level::Info);
    /// assert_eq!(Level::threshold(1), Level::Debug);
    /// assert_eq!(Level::threshold(7), Level::Trace);
    /// ```
    pub const fn threshold(verbosity: u8) -> Self {
        match verbosity {
            0 => Self::Info,
            1 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Whether this level is emitted at the given verbosity count.
    pub fn is_enabled_at(self, verbosity: u8) -> bool {
        self >= Self::threshold(verbosity)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown level name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error, fatal")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
