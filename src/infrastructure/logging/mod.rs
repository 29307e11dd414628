//! Logging infrastructure
//!
//! Engine adapters and helpers behind the [`Logger`](crate::domain::ports::Logger) port:
//! - `tracing` adapter with a reloadable JSON / text subscriber
//! - In-memory capture adapter
//! - Secret scrubbing for the secret-aware trace channel
pub mod capture;
pub mod config;
pub mod secret_scrubbing;
pub mod subscriber;
pub mod tracing_logger;

pub use capture::{CaptureLogger, Record};
pub use config::{LogConfig, LogFormat};
pub use secret_scrubbing::{is_secret_key, strip_secrets};
pub use subscriber::SubscriberHandle;
pub use tracing_logger::{TracingLogger, TARGET};
