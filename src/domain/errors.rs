//! Errors raised while installing or configuring the logging engine.
//!
//! Emitting a log line never fails from the caller's point of view; only
//! setup steps return these.

use thiserror::Error;

/// Errors from engine installation and configuration
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Another global subscriber was installed first
    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),

    /// A filter directive failed to parse
    #[error("Invalid filter directive: {0}")]
    InvalidDirective(#[from] tracing_subscriber::filter::ParseError),

    /// The output layer could not be swapped
    #[error("Failed to switch log format: {0}")]
    FormatReload(#[from] tracing_subscriber::reload::Error),

    /// Configuration could not be loaded or extracted
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),
}

/// Result alias for setup operations
pub type LoggingResult<T> = Result<T, LoggingError>;
