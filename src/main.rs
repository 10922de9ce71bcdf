mod aggregate_cmd;
mod cli;
mod config;
mod extremes_cmd;
mod logging;
mod spi_cmd;
mod trend_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::IndraConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = IndraConfig::load(&cli.config)?;
    match cli.command {
        Command::Aggregate(args) => aggregate_cmd::run(args, &config),
        Command::Trend(args) => trend_cmd::run(args, &config),
        Command::Spi(args) => spi_cmd::run(args, &config),
        Command::Extremes(args) => extremes_cmd::run(args, &config),
    }
}
