//! Ideal body weight (Devine, Robinson, Miller, Hamwi)
//!
//! Each formula is `base + per_inch × inches over 5 ft`, with heights below
//! 5 ft treated as exactly 5 ft.

use super::bmi::{healthy_weight_range, HealthyRange};
use crate::errors::CalcResult;
use crate::profile::Gender;
use crate::rounding::round_to_tenth;
use crate::validation::HEIGHT_CM;
use serde::{Deserialize, Serialize};
use tracing::debug;

const CM_PER_INCH: f64 = 2.54;
const FIVE_FEET_INCHES: f64 = 60.0;

/// `(base kg, kg per inch)` for men and women
#[derive(Debug, Clone, Copy, PartialEq)]
struct IdealWeightFormula {
    male: (f64, f64),
    female: (f64, f64),
}

impl IdealWeightFormula {
    fn apply(&self, inches_over_5ft: f64, gender: Gender) -> f64 {
        let (base, per_inch) = match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        };
        base + per_inch * inches_over_5ft
    }
}

const DEVINE: IdealWeightFormula = IdealWeightFormula { male: (50.0, 2.3), female: (45.5, 2.3) };
const ROBINSON: IdealWeightFormula = IdealWeightFormula { male: (52.0, 1.9), female: (49.0, 1.7) };
const MILLER: IdealWeightFormula = IdealWeightFormula { male: (56.2, 1.41), female: (53.1, 1.36) };
const HAMWI: IdealWeightFormula = IdealWeightFormula { male: (48.0, 2.7), female: (45.5, 2.2) };

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightInput {
    pub height_cm: f64,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightResult {
    pub devine: f64,
    pub robinson: f64,
    pub miller: f64,
    pub hamwi: f64,
    /// Healthy BMI weight range for this height
    pub bmi_range: HealthyRange,
}

/// Inches above 5 ft, never negative
pub fn inches_over_five_feet(height_cm: f64) -> f64 {
    (height_cm / CM_PER_INCH - FIVE_FEET_INCHES).max(0.0)
}

/// Calculate ideal body weight using multiple formulas
pub fn calculate_ideal_weight(input: &IdealWeightInput) -> CalcResult<IdealWeightResult> {
    HEIGHT_CM.check(input.height_cm, "Height")?;

    let inches = inches_over_five_feet(input.height_cm);
    let result = IdealWeightResult {
        devine: round_to_tenth(DEVINE.apply(inches, input.gender)),
        robinson: round_to_tenth(ROBINSON.apply(inches, input.gender)),
        miller: round_to_tenth(MILLER.apply(inches, input.gender)),
        hamwi: round_to_tenth(HAMWI.apply(inches, input.gender)),
        bmi_range: healthy_weight_range(input.height_cm),
    };

    debug!(devine = result.devine, gender = %input.gender, "ideal weight calculated");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ideal_weight_male() {
        // 182.88 cm = 72 in, 12 in over 5 ft
        let result = calculate_ideal_weight(&IdealWeightInput {
            height_cm: 182.88,
            gender: Gender::Male,
        })
        .unwrap();
        assert_eq!(result.devine, 77.6);
        assert_eq!(result.robinson, 74.8);
        assert_eq!(result.miller, 73.1);
        assert_eq!(result.hamwi, 80.4);
    }

    #[test]
    fn test_ideal_weight_female() {
        // 165.1 cm = 65 in, 5 in over 5 ft
        let result = calculate_ideal_weight(&IdealWeightInput {
            height_cm: 165.1,
            gender: Gender::Female,
        })
        .unwrap();
        assert_eq!(result.devine, 57.0);
        assert_eq!(result.robinson, 57.5);
        assert_eq!(result.miller, 59.9);
        assert_eq!(result.hamwi, 56.5);
    }

    #[test]
    fn test_short_heights_use_base_values() {
        let result = calculate_ideal_weight(&IdealWeightInput {
            height_cm: 140.0,
            gender: Gender::Female,
        })
        .unwrap();
        assert_eq!(result.devine, 45.5);
        assert_eq!(result.robinson, 49.0);
        assert_eq!(result.miller, 53.1);
        assert_eq!(result.hamwi, 45.5);
    }

    #[test]
    fn test_bmi_range_matches_bmi_calculator() {
        let result = calculate_ideal_weight(&IdealWeightInput {
            height_cm: 175.0,
            gender: Gender::Male,
        })
        .unwrap();
        assert_eq!(result.bmi_range, healthy_weight_range(175.0));
        assert_eq!(result.bmi_range, HealthyRange { min: 56.7, max: 76.3 });
    }

    #[test]
    fn test_invalid_height() {
        let err = calculate_ideal_weight(&IdealWeightInput {
            height_cm: 30.0,
            gender: Gender::Male,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Height must be between 50 and 300");
    }
}
