//! [`Logger`] adapter over `tracing`.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use super::config::LogConfig;
use super::subscriber::{dispatcher_is_set, stderr_fallback, SubscriberHandle};
use crate::domain::models::{Fields, Level, LogFormat};
use crate::domain::ports::Logger;
use crate::domain::LoggingResult;

/// Target of every event emitted through the facade
pub const TARGET: &str = "logshim::facade";

/// State shared by a root logger and everything derived from it
#[derive(Debug)]
struct Shared {
    verbosity: AtomicU8,
    subscriber: Option<SubscriberHandle>,
}

/// [`Logger`] adapter emitting `tracing` events.
///
/// Without an attached subscriber handle the events go to whatever
/// `tracing` dispatcher is current, falling back to plain stderr output
/// when there is none, and [`Logger::set_format`] has no effect.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    shared: Arc<Shared>,
    context: Fields,
}

impl TracingLogger {
    /// Detached logger at default verbosity
    pub fn new() -> Self {
        Self::with_verbosity(0)
    }

    /// Detached logger at the given verbosity
    pub fn with_verbosity(verbosity: u8) -> Self {
        Self {
            shared: Arc::new(Shared {
                verbosity: AtomicU8::new(verbosity),
                subscriber: None,
            }),
            context: Fields::new(),
        }
    }

    /// Install the global subscriber and return a logger attached to it
    ///
    /// # Errors
    /// Returns an error if a global subscriber is already installed
    pub fn install(config: &LogConfig) -> LoggingResult<Self> {
        let handle = SubscriberHandle::try_init(config)?;
        Ok(Self {
            shared: Arc::new(Shared {
                verbosity: AtomicU8::new(config.verbosity),
                subscriber: Some(handle),
            }),
            context: Fields::new(),
        })
    }

    /// Context attached to every event of this logger
    pub const fn context(&self) -> &Fields {
        &self.context
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.is_enabled(level) {
            return;
        }
        if self.shared.subscriber.is_none() && !dispatcher_is_set() {
            tracing::dispatcher::with_default(stderr_fallback(), || {
                emit(level, &self.context, args);
            });
        } else {
            emit(level, &self.context, args);
        }
    }

    fn set_log_level(&self, verbosity: u8) {
        self.shared.verbosity.store(verbosity, Ordering::Relaxed);
    }

    fn verbosity(&self) -> u8 {
        self.shared.verbosity.load(Ordering::Relaxed)
    }

    fn with_values(&self, fields: Fields) -> Arc<dyn Logger> {
        Arc::new(Self {
            shared: Arc::clone(&self.shared),
            context: self.context.extend_from(&fields),
        })
    }

    fn set_format(&self, format: LogFormat) {
        let Some(handle) = &self.shared.subscriber else {
            tracing::debug!(format = ?format, "no subscriber attached, format unchanged");
            return;
        };
        if let Err(err) = handle.set_format(format) {
            tracing::warn!(error = %err, "failed to switch log format");
        }
    }
}

fn emit(level: Level, context: &Fields, args: fmt::Arguments<'_>) {
    macro_rules! event_at {
        ($lvl:expr $(, $field:ident = $value:expr)*) => {
            if context.is_empty() {
                tracing::event!(target: TARGET, $lvl, $($field = $value,)* "{}", args)
            } else {
                tracing::event!(target: TARGET, $lvl, $($field = $value,)* context = %context, "{}", args)
            }
        };
    }

    match level {
        Level::Trace => event_at!(tracing::Level::TRACE),
        Level::Debug => event_at!(tracing::Level::DEBUG),
        Level::Info => event_at!(tracing::Level::INFO),
        Level::Warn => event_at!(tracing::Level::WARN),
        Level::Error => event_at!(tracing::Level::ERROR),
        Level::Fatal => event_at!(tracing::Level::ERROR, fatal = true),
    }
}
