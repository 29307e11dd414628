//! Logging flags shared by every command line that embeds the facade.
//!
//! `-v` / `--loglevel` is a counting flag (`-vvv` = 3) and `--json-logs`
//! switches the engine to JSON output. Use [`LogArgs`] with
//! `#[command(flatten)]` in derive-based CLIs, or [`bind_flags`] and
//! [`parse_flags`] with a builder `Command`.

use clap::{ArgAction, ArgMatches, Args, Command};

use crate::domain::models::LogFormat;
use crate::domain::ports::Logger;
use crate::infrastructure::logging::LogConfig;
use crate::logger;

/// Id and long name of the verbosity flag
pub const LOGLEVEL_FLAG: &str = "loglevel";

/// Id and long name of the JSON output flag
pub const JSON_LOGS_FLAG: &str = "json-logs";

/// Logging options for a command line
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct LogArgs {
    /// Increase logging level
    #[arg(id = LOGLEVEL_FLAG, short = 'v', long = LOGLEVEL_FLAG, action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Print logs in json format to stderr
    #[arg(id = JSON_LOGS_FLAG, long = JSON_LOGS_FLAG, global = true)]
    pub json_logs: bool,
}

impl LogArgs {
    /// Read the flags leniently: anything missing or unreadable counts as unset
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            verbosity: verbosity_from(matches),
            json_logs: matches
                .try_get_one::<bool>(JSON_LOGS_FLAG)
                .ok()
                .flatten()
                .copied()
                .unwrap_or(false),
        }
    }

    /// Output format selected by these flags
    pub const fn format(&self) -> LogFormat {
        LogFormat::from_json_flag(self.json_logs)
    }

    /// Apply to the active logger
    pub fn apply(&self) {
        self.apply_to(logger::standard_logger().as_ref());
    }

    /// Apply to `logger`: set its verbosity, and switch it to JSON output
    /// when `--json-logs` was given.
    pub fn apply_to(&self, logger: &dyn Logger) {
        logger.set_log_level(self.verbosity);
        if self.json_logs {
            logger.set_format(LogFormat::Json);
        }
    }

    /// Layer these flags over a loaded configuration.
    ///
    /// Flags only ever raise verbosity or select JSON; they never undo
    /// what the configuration asked for.
    pub fn merge_into(&self, config: &mut LogConfig) {
        config.verbosity = config.verbosity.max(self.verbosity);
        if self.json_logs {
            config.format = LogFormat::Json;
        }
    }
}

/// Register the logging flags on `cmd`.
///
/// This only declares the flags; nothing changes until [`parse_flags`] runs.
pub fn bind_flags(cmd: Command) -> Command {
    LogArgs::augment_args(cmd)
}

/// Apply parsed logging flags to the active logger.
///
/// A missing or unreadable verbosity flag counts as verbosity 0.
pub fn parse_flags(matches: &ArgMatches) {
    LogArgs::from_matches(matches).apply();
}

/// Verbosity count from parsed flags, 0 when the flag is missing or unreadable
pub fn verbosity_from(matches: &ArgMatches) -> u8 {
    matches
        .try_get_one::<u8>(LOGLEVEL_FLAG)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::logging::CaptureLogger;

    fn parse(args: &[&str]) -> ArgMatches {
        bind_flags(Command::new("app"))
            .try_get_matches_from(args)
            .expect("flags should parse")
    }

    #[test]
    fn test_repeated_flag_counts() {
        assert_eq!(verbosity_from(&parse(&["app", "-v", "-v", "-v"])), 3);
        assert_eq!(verbosity_from(&parse(&["app", "-vv"])), 2);
        assert_eq!(verbosity_from(&parse(&["app", "--loglevel", "-v"])), 2);
        assert_eq!(verbosity_from(&parse(&["app"])), 0);
    }

    #[test]
    fn test_json_flag() {
        let args = LogArgs::from_matches(&parse(&["app", "--json-logs", "-v"]));
        assert_eq!(
            args,
            LogArgs {
                verbosity: 1,
                json_logs: true
            }
        );
        assert_eq!(args.format(), LogFormat::Json);
        assert!(!LogArgs::from_matches(&parse(&["app"])).json_logs);
    }

    #[test]
    fn test_unbound_flags_default_to_zero() {
        let matches = Command::new("app")
            .try_get_matches_from(["app"])
            .expect("empty command should parse");

        assert_eq!(verbosity_from(&matches), 0);
        assert_eq!(LogArgs::from_matches(&matches), LogArgs::default());
    }

    #[test]
    fn test_wrong_type_lookup_is_lenient() {
        let matches = Command::new("app")
            .arg(clap::Arg::new(LOGLEVEL_FLAG).long(LOGLEVEL_FLAG))
            .try_get_matches_from(["app", "--loglevel", "high"])
            .expect("string flag should parse");

        assert_eq!(verbosity_from(&matches), 0);
    }

    #[test]
    fn test_apply_to_sets_verbosity_and_format() {
        let logger = CaptureLogger::new();
        LogArgs::from_matches(&parse(&["app", "-vv", "--json-logs"])).apply_to(&logger);

        assert_eq!(logger.verbosity(), 2);
        assert!(logger.is_trace_enabled());
        assert_eq!(logger.format(), LogFormat::Json);
    }

    #[test]
    fn test_apply_to_without_json_keeps_format() {
        let logger = CaptureLogger::new();
        LogArgs::from_matches(&parse(&["app", "-v"])).apply_to(&logger);

        assert!(logger.is_debug_enabled());
        assert!(!logger.is_trace_enabled());
        assert_eq!(logger.format(), LogFormat::Pretty);
    }

    #[test]
    fn test_merge_into_config() {
        let mut config = LogConfig {
            verbosity: 2,
            ..LogConfig::default()
        };
        LogArgs {
            verbosity: 1,
            json_logs: true,
        }
        .merge_into(&mut config);

        assert_eq!(config.verbosity, 2);
        assert_eq!(config.format, LogFormat::Json);
    }
}
