//! Input validation functions
//!
//! Every calculator runs its inputs through these guards before any formula
//! is evaluated. Checks short-circuit: the first violation is returned.

use crate::errors::{CalcResult, ValidationError, ValidationErrorKind};
use crate::profile::Gender;
use tracing::debug;

/// Inclusive range accepted for a numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Validate `value` against this range, see [`require_range`]
    pub fn check(&self, value: f64, field: &str) -> CalcResult<f64> {
        require_range(value, self.min, self.max, field)
    }
}

/// Body weight in kg
pub const BODY_WEIGHT_KG: FieldRange = FieldRange::new(20.0, 500.0);
/// Height in cm (covers infants to tallest recorded humans)
pub const HEIGHT_CM: FieldRange = FieldRange::new(50.0, 300.0);
/// Age in years
pub const AGE_YEARS: FieldRange = FieldRange::new(1.0, 120.0);
/// Known body fat percentage
pub const BODY_FAT_PERCENT: FieldRange = FieldRange::new(1.0, 70.0);
/// Weight lifted in kg
pub const LIFT_WEIGHT_KG: FieldRange = FieldRange::new(1.0, 1000.0);
/// Repetitions performed
pub const REPS: FieldRange = FieldRange::new(1.0, 30.0);

fn reject<T>(field: &str, kind: ValidationErrorKind) -> CalcResult<T> {
    debug!(field, reason = %kind, "input rejected");
    Err(ValidationError::new(field, kind))
}

/// Require a finite number strictly greater than zero
pub fn require_positive_finite(value: f64, field: &str) -> CalcResult<f64> {
    if !value.is_finite() {
        return reject(field, ValidationErrorKind::NotANumber);
    }
    if value <= 0.0 {
        return reject(field, ValidationErrorKind::NotPositive);
    }
    Ok(value)
}

/// Require a positive finite number within `[min, max]`
pub fn require_range(value: f64, min: f64, max: f64, field: &str) -> CalcResult<f64> {
    require_positive_finite(value, field)?;
    if value < min || value > max {
        return reject(field, ValidationErrorKind::OutOfRange { min, max });
    }
    Ok(value)
}

/// Require exactly `"male"` or `"female"`
pub fn require_gender(value: &str) -> CalcResult<Gender> {
    value.parse().map_err(|err: ValidationError| {
        debug!(field = %err.field, value, "input rejected");
        err
    })
}

/// Require a finite percentage within `[0, 100]`
///
/// Zero is allowed, unlike the measurement guards: a split may drop a macro.
pub fn require_percentage(value: f64, field: &str) -> CalcResult<f64> {
    if !value.is_finite() {
        return reject(field, ValidationErrorKind::NotANumber);
    }
    if !(0.0..=100.0).contains(&value) {
        return reject(field, ValidationErrorKind::OutOfRange { min: 0.0, max: 100.0 });
    }
    Ok(value)
}
