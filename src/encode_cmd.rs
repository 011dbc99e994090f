//! Encode command: dates to tokens.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::EncodeArgs;
use crate::config::CdsConfig;
use crate::convert;

/// Encode each date and print `date<TAB>token` lines.
pub fn run(args: EncodeArgs, config: &CdsConfig) -> Result<()> {
    let codec = convert::build_codec(config)?;
    info!(n_dates = args.dates.len(), "encoding dates");

    let mut out = io::stdout().lock();
    for date in args.dates {
        let token = codec
            .encode(date)
            .with_context(|| format!("failed to encode {date}"))?;
        writeln!(out, "{date}\t{token}")?;
    }
    Ok(())
}
