//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use cds_base58::Alphabet;
use cds_datecode::{DateCodec, FormatConfig};

use crate::config::{CdsConfig, FormatToml};

/// Parses the configured alphabet, falling back to Bitcoin when unset.
pub fn build_alphabet(format: &FormatToml) -> Result<Alphabet> {
    match format.alphabet.as_deref() {
        Some(digits) => Alphabet::new(digits).context("invalid [format].alphabet"),
        None => Ok(Alphabet::BITCOIN),
    }
}

/// Builds a [`FormatConfig`] from the TOML format table.
pub fn build_format_config(format: &FormatToml) -> Result<FormatConfig> {
    let epoch: NaiveDate = format
        .epoch
        .parse()
        .with_context(|| format!("invalid [format].epoch: {:?}", format.epoch))?;
    Ok(FormatConfig::new()
        .with_epoch(epoch)
        .with_alphabet(build_alphabet(format)?)
        .with_prefix(format.prefix)
        .with_width(format.width))
}

/// Builds a validated [`DateCodec`] from the full configuration.
pub fn build_codec(config: &CdsConfig) -> Result<DateCodec> {
    let format = build_format_config(&config.format)?;
    DateCodec::new(format).context("invalid [format] table")
}
