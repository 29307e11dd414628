//! The logger port.

use std::fmt;
use std::sync::Arc;

use crate::domain::models::{Fields, Level, LogFormat};

/// Exit status used when a fatal message terminates the process
pub const FATAL_EXIT_CODE: i32 = 1;

/// Port trait for leveled logging engines
///
/// This trait is the capability set the facade delegates to. Adapters wrap
/// a concrete engine:
/// - `tracing` with a `tracing-subscriber` formatter (the default)
/// - in-memory capture for assertions in tests
///
/// # Verbosity
///
/// Verbosity is a small count (`0` = default). Each increment unlocks one
/// more verbose channel; see [`Level::threshold`]. Warn, error and fatal
/// are emitted at every verbosity.
///
/// # Derived loggers
///
/// [`Logger::with_values`] returns a new logger carrying extra context. The
/// original is left untouched, and the derived logger follows the
/// verbosity of the logger it was derived from.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` since the active logger is shared
/// by the whole process.
///
/// # Examples
///
/// ```
/// use logshim::domain::ports::Logger;
/// use logshim::kv;
///
/// fn process_task(logger: &dyn Logger, task_id: u64) {
///     logger.info(format_args!("Starting task {task_id}"));
///
///     let scoped = logger.with_values(kv! { "task_id" => task_id });
///     scoped.debug(format_args!("Validating task inputs"));
///
///     if logger.is_trace_enabled() {
///         logger.trace(format_args!("inputs: {:?}", expensive_dump()));
///     }
/// }
/// # fn expensive_dump() -> Vec<u8> { vec![] }
/// ```
pub trait Logger: Send + Sync {
    /// Emit a formatted message at `level`.
    ///
    /// Implementations drop the message when `level` is not enabled. A
    /// `Level::Fatal` message is emitted but does not terminate; use
    /// [`Logger::fatal`] for that.
    fn log(&self, level: Level, args: fmt::Arguments<'_>);

    /// Set the verbosity count
    fn set_log_level(&self, verbosity: u8);

    /// Current verbosity count
    fn verbosity(&self) -> u8;

    /// Whether a message at `level` would be emitted
    fn is_enabled(&self, level: Level) -> bool {
        level.is_enabled_at(self.verbosity())
    }

    /// Derive a logger that attaches `fields` to every message it emits
    fn with_values(&self, fields: Fields) -> Arc<dyn Logger>;

    /// Select the output format.
    ///
    /// Engines without format control ignore this.
    fn set_format(&self, _format: LogFormat) {}

    /// Whether trace messages would be emitted
    fn is_trace_enabled(&self) -> bool {
        self.is_enabled(Level::Trace)
    }

    /// Whether debug messages would be emitted
    fn is_debug_enabled(&self) -> bool {
        self.is_enabled(Level::Debug)
    }

    /// Log a trace-level message
    fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, args);
    }

    /// Log a debug-level message
    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    /// Log an info-level message
    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    /// Log a warning-level message
    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    /// Log an error-level message
    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    /// Log a fatal message and terminate the process.
    ///
    /// Control never returns to the caller.
    fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        self.log(Level::Fatal, args);
        std::process::exit(FATAL_EXIT_CODE)
    }
}
