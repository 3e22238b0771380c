//! Budget Trainer CLI
//!
//! Main entry point for the budget variance trainer.

mod cli;
mod commands;
mod input;
mod report;

use anyhow::Context as _;
use clap::Parser;
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use budget_trainer_shared::AppConfig;

use crate::cli::Cli;
use crate::commands::Context;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    // RUST_LOG wins, then --verbose, then the configured filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("budget_trainer_core=debug,budget_trainer_cli=debug")
        } else {
            EnvFilter::new(&config.logging.filter)
        }
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ctx = Context {
        currency: config.report.currency,
        format: cli.format.unwrap_or(config.report.format),
    };

    match commands::run(&cli.command, ctx) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            eprintln!("error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
