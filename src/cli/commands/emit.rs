//! Implementation of the `logshim emit` command.

use anyhow::{anyhow, Result};
use clap::Args;

use crate::domain::models::{Fields, Level};
use crate::logger;

/// Arguments of `logshim emit`
#[derive(Args, Debug)]
pub struct EmitArgs {
    /// Level to emit at
    #[arg(short, long, default_value = "info", conflicts_with = "secret")]
    pub level: Level,

    /// Mask secret values and emit at trace level
    #[arg(long)]
    pub secret: bool,

    /// Context field as key=value (repeatable)
    #[arg(short, long = "field", value_parser = parse_field, conflicts_with = "secret")]
    pub fields: Vec<(String, String)>,

    /// Message text, emitted literally
    pub message: String,
}

fn parse_field(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected key=value, got '{raw}'"))?;
    if key.is_empty() {
        return Err(anyhow!("field key cannot be empty"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Emit the message at the requested level, or scrubbed at trace with `--secret`
///
/// # Errors
/// Currently infallible
pub fn execute(args: EmitArgs) -> Result<()> {
    if args.secret {
        logger::secretf(format_args!("{}", args.message));
        return Ok(());
    }

    let target = if args.fields.is_empty() {
        logger::standard_logger()
    } else {
        let fields: Fields = args
            .fields
            .into_iter()
            .fold(Fields::new(), |fields, (k, v)| fields.with(k, v));
        logger::with_values(fields)
    };

    match args.level {
        Level::Fatal => target.fatal(format_args!("{}", args.message)),
        level => target.log(level, format_args!("{}", args.message)),
    }
    Ok(())
}
