//! In-memory [`Logger`] adapter for assertions on emitted messages.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::models::{Fields, Level, LogFormat};
use crate::domain::ports::Logger;

/// A message recorded by [`CaptureLogger`]
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Level the message was emitted at
    pub level: Level,
    /// Fully formatted message
    pub message: String,
    /// Context of the logger that emitted it
    pub fields: Fields,
}

#[derive(Debug, Default)]
struct Sink {
    verbosity: AtomicU8,
    format: Mutex<LogFormat>,
    records: Mutex<Vec<Record>>,
}

/// Logger that records every enabled message instead of writing it.
///
/// Loggers derived with [`Logger::with_values`] record into the same
/// buffer and share verbosity with their parent.
#[derive(Debug, Clone, Default)]
pub struct CaptureLogger {
    sink: Arc<Sink>,
    context: Fields,
}

impl CaptureLogger {
    /// Empty capture at default verbosity
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn records(&self) -> Vec<Record> {
        lock(&self.sink.records).clone()
    }

    /// Recorded messages without level or context
    pub fn messages(&self) -> Vec<String> {
        lock(&self.sink.records)
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }

    /// Last format selected through [`Logger::set_format`]
    pub fn format(&self) -> LogFormat {
        *lock(&self.sink.format)
    }

    /// Drop all recorded messages
    pub fn clear(&self) {
        lock(&self.sink.records).clear();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Logger for CaptureLogger {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.is_enabled(level) {
            return;
        }
        lock(&self.sink.records).push(Record {
            level,
            message: args.to_string(),
            fields: self.context.clone(),
        });
    }

    fn set_log_level(&self, verbosity: u8) {
        self.sink.verbosity.store(verbosity, Ordering::Relaxed);
    }

    fn verbosity(&self) -> u8 {
        self.sink.verbosity.load(Ordering::Relaxed)
    }

    fn with_values(&self, fields: Fields) -> Arc<dyn Logger> {
        Arc::new(Self {
            sink: Arc::clone(&self.sink),
            context: self.context.extend_from(&fields),
        })
    }

    fn set_format(&self, format: LogFormat) {
        *lock(&self.sink.format) = format;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Value;
    use crate::kv;

    #[test]
    fn test_records_enabled_levels_only() {
        let logger = CaptureLogger::new();
        logger.debug(format_args!("dropped"));
        logger.info(format_args!("kept {}", 1));
        logger.error(format_args!("kept {}", 2));

        let records = logger.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, Level::Info);
        assert_eq!(records[1].message, "kept 2");
    }

    #[test]
    fn test_derived_logger_shares_buffer() {
        let logger = CaptureLogger::new();
        let derived = logger.with_values(kv! { "request" => "abc" });
        derived.warn(format_args!("from child"));
        logger.warn(format_args!("from parent"));

        let records = logger.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fields.get("request"), Some(&Value::Str("abc".to_string())));
        assert!(records[1].fields.is_empty());
    }

    #[test]
    fn test_format_and_clear() {
        let logger = CaptureLogger::new();
        assert_eq!(logger.format(), LogFormat::Pretty);
        logger.set_format(LogFormat::Json);
        assert_eq!(logger.format(), LogFormat::Json);

        logger.info(format_args!("x"));
        logger.clear();
        assert!(logger.messages().is_empty());
    }
}
