//! Logshim - process-wide logging facade
//!
//! A single active logger reached through leveled free functions, with
//! structured key/value context, verbosity taken from command-line flags,
//! and a secret-scrubbing trace channel.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): levels, context fields, and the `Logger` port
//! - **Infrastructure Layer** (`infrastructure`): engine adapters, scrubbing, configuration
//! - **Facade** (`logger`): the active logger and the free functions over it
//! - **CLI Layer** (`cli`): logging flags and the `logshim` binary
//!
//! # Example
//!
//! ```
//! use logshim::{infof, kv, secretf, Logger};
//!
//! infof!("starting with {} workers", 4);
//!
//! let scoped = logshim::with_values(kv! { "job" => "sync" });
//! scoped.info(format_args!("job scheduled"));
//!
//! secretf!("config:\n{}", "user: admin\npassword: hunter2");
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod logger;
mod macros;

// Re-export commonly used types for convenience
pub use domain::models::{Field, Fields, Level, LogFormat, Value};
pub use domain::ports::Logger;
pub use domain::{LoggingError, LoggingResult};
pub use infrastructure::config::ConfigLoader;
pub use infrastructure::logging::{strip_secrets, CaptureLogger, LogConfig, TracingLogger};
pub use logger::{
    debugf, errorf, fatalf, infof, init, is_debug_enabled, is_trace_enabled, prettyf, secretf,
    set_logger, standard_logger, tracef, warnf, with_values,
};
