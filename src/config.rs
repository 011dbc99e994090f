use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level CLI configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CdsConfig {
    /// Token format settings.
    #[serde(default)]
    pub format: FormatToml,
}

/// Token format overrides. Every key is optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatToml {
    #[serde(default = "default_epoch")]
    pub epoch: String,
    #[serde(default = "default_prefix")]
    pub prefix: char,
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default)]
    pub alphabet: Option<String>,
}

impl Default for FormatToml {
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            prefix: default_prefix(),
            width: default_width(),
            alphabet: None,
        }
    }
}

fn default_epoch() -> String {
    cds_datecode::default_epoch().to_string()
}
fn default_prefix() -> char {
    cds_datecode::DEFAULT_PREFIX
}
fn default_width() -> usize {
    cds_datecode::DEFAULT_WIDTH
}

/// Loads the config file at `path`, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<CdsConfig> {
    let Some(path) = path else {
        return Ok(CdsConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
