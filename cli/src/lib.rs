//! fitcalc command line tool
//!
//! Library half of the binary: argument definitions, layered
//! configuration, error handling and the subcommand handlers. Kept as a
//! library so integration tests drive commands without spawning processes.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command};
pub use commands::execute;
pub use config::AppConfig;
pub use error::{CliError, CliResult};
