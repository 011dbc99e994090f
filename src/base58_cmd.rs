//! Raw base58 integer commands.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::{B58DecodeArgs, B58EncodeArgs};
use crate::config::CdsConfig;
use crate::convert;

/// Encode each integer with the configured alphabet.
pub fn encode(args: B58EncodeArgs, config: &CdsConfig) -> Result<()> {
    let alphabet = convert::build_alphabet(&config.format)?;
    let mut out = io::stdout().lock();
    for value in args.values {
        let encoded = alphabet
            .encode(value.clone())
            .with_context(|| format!("failed to encode {value}"))?;
        writeln!(out, "{value}\t{encoded}")?;
    }
    Ok(())
}

/// Decode each string with the configured alphabet.
pub fn decode(args: B58DecodeArgs, config: &CdsConfig) -> Result<()> {
    let alphabet = convert::build_alphabet(&config.format)?;
    let mut out = io::stdout().lock();
    for s in &args.strings {
        let value = alphabet
            .decode(s)
            .with_context(|| format!("failed to decode {s:?}"))?;
        writeln!(out, "{s}\t{value}")?;
    }
    Ok(())
}
