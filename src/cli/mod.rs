//! Command-line surface: logging flags and the `logshim` binary commands.

pub mod commands;
pub mod flags;
pub mod types;

pub use flags::{bind_flags, parse_flags, verbosity_from, LogArgs, JSON_LOGS_FLAG, LOGLEVEL_FLAG};
pub use types::{Cli, Commands};

/// Report a command error and exit with a failure status
pub fn handle_error(err: &anyhow::Error) -> ! {
    eprintln!("Error: {err:#}");
    std::process::exit(1)
}
