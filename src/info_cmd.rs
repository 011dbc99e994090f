//! Info command: describe the active token format.

use std::io::{self, Write};

use anyhow::Result;

use cds_datecode::FORMAT_VERSION;

use crate::config::CdsConfig;
use crate::convert;

/// Print the format constants and the encodable date range.
pub fn run(config: &CdsConfig) -> Result<()> {
    let codec = convert::build_codec(config)?;
    let format = codec.config();

    let mut out = io::stdout().lock();
    writeln!(out, "version:    {FORMAT_VERSION}")?;
    writeln!(out, "epoch:      {}", format.epoch())?;
    writeln!(out, "prefix:     {}", format.prefix())?;
    writeln!(out, "width:      {}", format.width())?;
    writeln!(out, "alphabet:   {}", format.alphabet())?;
    writeln!(out, "token len:  {}", codec.token_len())?;
    writeln!(out, "max offset: {}", codec.max_offset())?;
    writeln!(out, "min date:   {}", codec.min_date())?;
    writeln!(out, "max date:   {}", codec.max_date())?;
    Ok(())
}
