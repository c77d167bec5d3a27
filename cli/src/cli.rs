//! Command line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fitcalc - health and fitness calculators
#[derive(Parser, Debug)]
#[command(name = "fitcalc")]
#[command(version)]
#[command(about = "Health and fitness calculators (BMI, BMR, TDEE, macros, ...)", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config/$RUST_ENV.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug logging for the CLI and the engine
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Single-line JSON output
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a calculator and print the result as JSON
    Calc {
        /// Calculator id (see `fitcalc list`)
        id: String,

        /// Inputs such as weight=70 height=175 gender=male
        #[arg(value_name = "KEY=VALUE")]
        inputs: Vec<String>,

        /// Read inputs from a JSON object (use - for stdin)
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
    },

    /// List every calculator by group
    List,

    /// Show a calculator's fields and default inputs
    Describe {
        /// Calculator id
        id: String,
    },

    /// Print the effective configuration as TOML
    Config,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Calc { .. } => "calc",
            Command::List => "list",
            Command::Describe { .. } => "describe",
            Command::Config => "config",
        }
    }
}
