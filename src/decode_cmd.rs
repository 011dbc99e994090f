//! Decode command: tokens to dates.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::DecodeArgs;
use crate::config::CdsConfig;
use crate::convert;

/// Decode each token and print `token<TAB>date` lines.
pub fn run(args: DecodeArgs, config: &CdsConfig) -> Result<()> {
    let codec = convert::build_codec(config)?;
    info!(n_tokens = args.tokens.len(), "decoding tokens");

    let mut out = io::stdout().lock();
    for token in &args.tokens {
        let date = codec
            .decode(token)
            .with_context(|| format!("failed to decode {token:?}"))?;
        writeln!(out, "{token}\t{date}")?;
    }
    Ok(())
}
