mod base58_cmd;
mod cli;
mod config;
mod convert;
mod decode_cmd;
mod encode_cmd;
mod info_cmd;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Encode(args) => encode_cmd::run(args, &config),
        Command::Decode(args) => decode_cmd::run(args, &config),
        Command::B58Encode(args) => base58_cmd::encode(args, &config),
        Command::B58Decode(args) => base58_cmd::decode(args, &config),
        Command::Info => info_cmd::run(&config),
    }
}
