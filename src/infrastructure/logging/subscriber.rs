//! Installation of the global `tracing` subscriber.

use std::io::{self, IsTerminal};
use std::sync::OnceLock;

use tracing::Dispatch;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, EnvFilter, Layer, Registry};

use super::config::{LogConfig, LogFormat};
use super::tracing_logger::TARGET;
use crate::domain::LoggingResult;

type FmtLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Handle to the installed global `tracing` subscriber.
///
/// The output layer sits behind a reload layer so the format can be
/// switched after installation, e.g. once `--json-logs` has been parsed.
pub struct SubscriberHandle {
    output: reload::Handle<FmtLayer, Registry>,
    ansi: bool,
}

impl SubscriberHandle {
    /// Install the global subscriber for the given configuration
    ///
    /// Events from the facade target always pass the filter, since the
    /// facade gates them by verbosity before they reach `tracing`. Everything
    /// else follows `RUST_LOG`, defaulting to `info`.
    ///
    /// # Errors
    /// Returns an error if a global subscriber is already installed
    pub fn try_init(config: &LogConfig) -> LoggingResult<Self> {
        let facade: Directive = format!("{TARGET}=trace").parse()?;
        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy()
            .add_directive(facade);

        let (output_layer, output) = reload::Layer::new(output_layer(config.format, config.ansi));

        tracing_subscriber::registry()
            .with(output_layer)
            .with(env_filter)
            .try_init()?;

        tracing::debug!(
            verbosity = config.verbosity,
            format = ?config.format,
            "logger initialized"
        );

        Ok(Self {
            output,
            ansi: config.ansi,
        })
    }

    /// Replace the output layer with one writing `format`
    pub fn set_format(&self, format: LogFormat) -> LoggingResult<()> {
        self.output.reload(output_layer(format, self.ansi))?;
        tracing::debug!(format = ?format, "log format switched");
        Ok(())
    }
}

impl std::fmt::Debug for SubscriberHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberHandle")
            .field("ansi", &self.ansi)
            .finish_non_exhaustive()
    }
}

/// Build the stderr formatting layer for `format`
fn output_layer(format: LogFormat, ansi: bool) -> FmtLayer {
    match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
            .with_current_span(false)
            .with_span_list(false)
            .with_target(true)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(ansi)
            .with_target(true)
            .boxed(),
    }
}

/// Dispatcher used by loggers that run before any subscriber is installed.
///
/// Writes human-readable events to stderr at every level; the facade has
/// already gated them by verbosity.
pub fn stderr_fallback() -> &'static Dispatch {
    static FALLBACK: OnceLock<Dispatch> = OnceLock::new();
    FALLBACK.get_or_init(|| {
        Dispatch::new(
            tracing_subscriber::fmt()
                .with_writer(io::stderr)
                .with_max_level(tracing::Level::TRACE)
                .with_ansi(io::stderr().is_terminal())
                .with_target(true)
                .finish(),
        )
    })
}

/// Whether some subscriber, global or scoped, is current on this thread
pub fn dispatcher_is_set() -> bool {
    tracing::dispatcher::get_default(|dispatch| {
        !dispatch.is::<tracing::subscriber::NoSubscriber>()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_dispatcher_outside_scoped_subscriber() {
        assert!(!dispatcher_is_set());
    }

    #[test]
    fn test_scoped_subscriber_counts_as_set() {
        let subscriber = tracing_subscriber::fmt().with_writer(io::sink).finish();
        tracing::subscriber::with_default(subscriber, || assert!(dispatcher_is_set()));
    }

    #[test]
    fn test_stderr_fallback_is_built_once() {
        assert!(std::ptr::eq(stderr_fallback(), stderr_fallback()));
        tracing::dispatcher::with_default(stderr_fallback(), || assert!(dispatcher_is_set()));
    }
}
