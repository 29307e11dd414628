//! Logshim CLI entry point.

use std::io::IsTerminal;

use anyhow::Context;
use clap::Parser;

use logshim::cli::commands::{emit, scrub};
use logshim::cli::{Cli, Commands};
use logshim::ConfigLoader;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        logshim::cli::handle_error(&err);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ConfigLoader::load().context("Failed to load logging configuration")?;
    cli.log.merge_into(&mut config);
    config.ansi &= std::io::stderr().is_terminal();
    logshim::init(&config).context("Failed to initialize logging")?;

    match cli.command {
        Commands::Scrub(args) => scrub::execute(&args),
        Commands::Emit(args) => emit::execute(args),
    }
}
