//! Implementation of the `logshim scrub` command.

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use crate::infrastructure::logging::strip_secrets;

/// Arguments of `logshim scrub`
#[derive(Args, Debug)]
pub struct ScrubArgs {
    /// File to scrub (reads stdin when omitted)
    pub path: Option<PathBuf>,
}

/// Write the input to stdout with secret values masked
///
/// # Errors
/// Returns an error if the input cannot be read or stdout cannot be written
pub fn execute(args: &ScrubArgs) -> Result<()> {
    let text = match &args.path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    crate::debugf!("scrubbing {} bytes", text.len());

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(strip_secrets(&text).as_bytes())
        .context("Failed to write scrubbed text")?;
    Ok(())
}
