//! Error types for the calculation engine
//!
//! Every calculator fails with exactly one error type, [`ValidationError`].
//! Its `Display` output is the message shown to the end user.

use std::fmt;
use thiserror::Error;

/// What was wrong with a rejected input
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationErrorKind {
    /// Missing, non-numeric, NaN or infinite
    NotANumber,
    /// Zero or negative
    NotPositive,
    /// Outside the inclusive `[min, max]` range
    OutOfRange { min: f64, max: f64 },
    /// Not one of the accepted enum values
    InvalidChoice { allowed: &'static [&'static str] },
    /// Calculator id that the catalog does not know
    UnknownCalculator(String),
    /// Calculator listed in the catalog without a calculation behind it
    ComingSoon(String),
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::NotANumber => write!(f, "must be a valid number"),
            ValidationErrorKind::NotPositive => write!(f, "must be greater than 0"),
            ValidationErrorKind::OutOfRange { min, max } => {
                write!(f, "must be between {} and {}", min, max)
            }
            ValidationErrorKind::InvalidChoice { allowed } => {
                let quoted: Vec<String> = allowed.iter().map(|a| format!("\"{}\"", a)).collect();
                match quoted.as_slice() {
                    [a, b] => write!(f, "must be {} or {}", a, b),
                    _ => write!(f, "must be one of {}", quoted.join(", ")),
                }
            }
            ValidationErrorKind::UnknownCalculator(id) => {
                write!(f, "\"{}\" is not a known calculator", id)
            }
            ValidationErrorKind::ComingSoon(id) => write!(f, "\"{}\" is coming soon", id),
        }
    }
}

/// Validation error with field context
///
/// Rendered as `"{field} {constraint}"`, e.g. `Weight must be between 20 and 500`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field} {kind}")]
pub struct ValidationError {
    /// User-facing field label ("Weight", "Body fat percentage", ...)
    pub field: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(field: &str, kind: ValidationErrorKind) -> Self {
        Self {
            field: field.to_string(),
            kind,
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, ValidationError>;
