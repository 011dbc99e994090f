use std::path::PathBuf;

use cds_base58::BigInt;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Compact date stamps.
#[derive(Parser)]
#[command(
    name = "cds",
    version,
    about = "Encode calendar dates as compact base58 tokens"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML file overriding the token format.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Encode dates as tokens.
    Encode(EncodeArgs),
    /// Decode tokens back to dates.
    Decode(DecodeArgs),
    /// Encode non-negative integers in base58.
    B58Encode(B58EncodeArgs),
    /// Decode base58 strings to integers.
    B58Decode(B58DecodeArgs),
    /// Show the active token format and its date range.
    Info,
}

/// Arguments for the `encode` subcommand.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Dates in `YYYY-MM-DD` form.
    #[arg(required = true)]
    pub dates: Vec<NaiveDate>,
}

/// Arguments for the `decode` subcommand.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Tokens to decode.
    #[arg(required = true)]
    pub tokens: Vec<String>,
}

/// Arguments for the `b58-encode` subcommand.
#[derive(clap::Args)]
pub struct B58EncodeArgs {
    /// Decimal integers of any size.
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<BigInt>,
}

/// Arguments for the `b58-decode` subcommand.
#[derive(clap::Args)]
pub struct B58DecodeArgs {
    /// Base58 strings to decode.
    #[arg(required = true)]
    pub strings: Vec<String>,
}
