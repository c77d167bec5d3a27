//! Common test utilities for integration tests
//!
//! Commands run in-process through the library entry point.

#![allow(dead_code)]

use clap::Parser;
use fitness_calculators_cli::{execute, AppConfig, Cli, CliResult};
use serde_json::Value;

/// Compact output so assertions can match on single lines
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.output.pretty = false;
    config
}

/// Run `fitcalc <args>` with the given config and stdin
pub fn run_with(config: &AppConfig, args: &[&str], stdin: &str) -> CliResult<String> {
    let cli = Cli::try_parse_from(std::iter::once("fitcalc").chain(args.iter().copied()))
        .expect("Failed to parse test arguments");
    execute(&cli.command, config, stdin.as_bytes())
}

pub fn run(args: &[&str]) -> CliResult<String> {
    run_with(&test_config(), args, "")
}

/// Run and parse stdout as JSON
pub fn run_json(args: &[&str]) -> Value {
    let output = run(args).expect("Command failed");
    serde_json::from_str(&output).expect("Output is not JSON")
}
