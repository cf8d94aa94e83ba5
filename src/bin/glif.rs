//! Glif CLI Binary
//!
//! Command-line interface for running Glifs.

use anyhow::Context;
use clap::Parser;
use glif::logging::{init_logging, LoggingConfig};
use glif::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    init_logging(Some(&logging_config(cli))).context("Failed to initialize logging")?;

    let context = CliContext::new(cli.settings.clone()).context("Failed to load settings")?;
    let output = context.execute(&cli.command)?;
    println!("{}", output);
    Ok(())
}

fn logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig {
        level: "warn".to_string(),
        ..LoggingConfig::default()
    };
    if let Some(level) = &cli.log_level {
        config.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.format = format.clone();
    }
    if let Some(output) = &cli.log_output {
        config.output = output.clone();
    }
    if cli.log_file.is_some() {
        config.file = cli.log_file.clone();
    }
    config
}
