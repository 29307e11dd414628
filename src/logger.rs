//! Process-wide logging facade.
//!
//! Free functions forward to a single active [`Logger`]. The active logger
//! is created on first use as a detached [`TracingLogger`] and can be
//! replaced with [`init`] or [`set_logger`].
//!
//! Replacing the logger and applying verbosity flags are configuration
//! steps. Do them once at startup, before logging from several threads.

use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::domain::models::{Fields, Level};
use crate::domain::ports::{Logger, FATAL_EXIT_CODE};
use crate::domain::LoggingResult;
use crate::infrastructure::logging::{strip_secrets, LogConfig, TracingLogger};

static ACTIVE: OnceLock<RwLock<Arc<dyn Logger>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<dyn Logger>> {
    ACTIVE.get_or_init(|| RwLock::new(Arc::new(TracingLogger::new())))
}

/// The lock is released before the caller emits anything.
fn active() -> Arc<dyn Logger> {
    Arc::clone(&slot().read().unwrap_or_else(PoisonError::into_inner))
}

/// Install the `tracing` subscriber described by `config` and make a
/// logger attached to it the active logger.
///
/// # Errors
/// Returns an error if a global `tracing` subscriber is already installed;
/// the active logger is left unchanged in that case.
pub fn init(config: &LogConfig) -> LoggingResult<()> {
    let logger = TracingLogger::install(config)?;
    set_logger(Arc::new(logger));
    Ok(())
}

/// Replace the active logger
pub fn set_logger(logger: Arc<dyn Logger>) {
    *slot().write().unwrap_or_else(PoisonError::into_inner) = logger;
}

/// The active logger, for callers that need it as a value
pub fn standard_logger() -> Arc<dyn Logger> {
    active()
}

/// Derive a logger from the active one that attaches `fields` to every
/// message. The active logger itself is not changed.
pub fn with_values(fields: Fields) -> Arc<dyn Logger> {
    active().with_values(fields)
}

/// Whether trace messages would currently be emitted
pub fn is_trace_enabled() -> bool {
    active().is_trace_enabled()
}

/// Whether debug messages would currently be emitted
pub fn is_debug_enabled() -> bool {
    active().is_debug_enabled()
}

/// Log a trace-level message through the active logger
pub fn tracef(args: fmt::Arguments<'_>) {
    active().trace(args);
}

/// Log a debug-level message through the active logger
pub fn debugf(args: fmt::Arguments<'_>) {
    active().debug(args);
}

/// Log an info-level message through the active logger
pub fn infof(args: fmt::Arguments<'_>) {
    active().info(args);
}

/// Log a warning-level message through the active logger
pub fn warnf(args: fmt::Arguments<'_>) {
    active().warn(args);
}

/// Log an error-level message through the active logger
pub fn errorf(args: fmt::Arguments<'_>) {
    active().error(args);
}

/// Emit a fatal message and terminate the process.
///
/// The process exits even if the active logger's engine returns from the
/// fatal emission.
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    active().log(Level::Fatal, args);
    std::process::exit(FATAL_EXIT_CODE)
}

/// Like [`tracef`], but masks values of secret-like keys first.
///
/// The scrubbed text is emitted as a literal message; it is never used as
/// a format string. See [`strip_secrets`] for what is masked.
pub fn secretf(args: fmt::Arguments<'_>) {
    let logger = active();
    if !logger.is_trace_enabled() {
        return;
    }
    let scrubbed = strip_secrets(&args.to_string());
    logger.trace(format_args!("{scrubbed}"));
}

/// Like [`tracef`], but pretty prints `value` after `msg`.
pub fn prettyf(msg: &str, value: &impl fmt::Debug) {
    let logger = active();
    if logger.is_trace_enabled() {
        logger.trace(format_args!("{msg} {value:#?}"));
    }
}
