//! fitcalc - health and fitness calculators on the command line
//!
//! Results are printed to stdout as JSON; logs go to stderr.
//!
//! Exit codes:
//! - 0: success
//! - 1: bad arguments, unreadable input or configuration
//! - 2: an input failed validation

use anyhow::{Context, Result};
use clap::Parser;
use fitness_calculators_cli::config::LoggingConfig;
use fitness_calculators_cli::{execute, AppConfig, Cli, CliError};
use std::io;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            eprintln!("error: {:#}", err);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .map_err(CliError::from)
    .context("failed to load configuration")?;

    if cli.compact {
        config.output.pretty = false;
    }

    init_tracing(&config.logging, cli.verbose);
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        command = cli.command.name(),
        "starting fitcalc"
    );

    let output = execute(&cli.command, &config, io::stdin().lock())?;
    Ok(output)
}

/// Initialize tracing/logging on stderr so stdout stays pure JSON
fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directives(verbose).into());

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if logging.json {
        // JSON logging for log aggregation
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(io::stderr))
            .init();
    }
}
