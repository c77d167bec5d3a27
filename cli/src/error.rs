//! Command line error handling
//!
//! Validation failures are the user's to fix and exit with status 2;
//! everything else (bad arguments, unreadable files, malformed JSON,
//! broken configuration) exits with status 1.

use fitness_calculators_engine::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// Message is shown exactly as the engine renders it
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to render configuration: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    pub const VALIDATION_EXIT_CODE: u8 = 2;

    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Validation(_) => Self::VALIDATION_EXIT_CODE,
            _ => 1,
        }
    }
}

/// Result type alias for command handlers
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_calculators_engine::ValidationErrorKind;

    #[test]
    fn test_validation_error_exit_code() {
        let error = CliError::from(ValidationError::new("Weight", ValidationErrorKind::NotANumber));
        assert_eq!(error.exit_code(), 2);
        assert_eq!(error.to_string(), "Weight must be a valid number");
    }

    #[test]
    fn test_other_errors_exit_code() {
        let error = CliError::Input("expected KEY=VALUE".to_string());
        assert_eq!(error.exit_code(), 1);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(CliError::from(json_err).exit_code(), 1);
    }
}
