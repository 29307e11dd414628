//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use super::commands::emit::EmitArgs;
use super::commands::scrub::ScrubArgs;
use super::flags::LogArgs;

/// Top-level command line of the `logshim` binary
#[derive(Parser, Debug)]
#[command(name = "logshim")]
#[command(about = "Logshim - logging facade with secret scrubbing", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Logging flags, accepted before or after the command
    #[command(flatten)]
    pub log: LogArgs,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a file (or stdin) with secret values masked
    Scrub(ScrubArgs),

    /// Emit a message through the active logger
    Emit(EmitArgs),
}
