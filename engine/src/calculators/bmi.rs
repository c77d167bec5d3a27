//! Body Mass Index
//!
//! Formula: BMI = weight(kg) / height(m)²

use crate::errors::CalcResult;
use crate::rounding::round_to_tenth;
use crate::validation::{BODY_WEIGHT_KG, HEIGHT_CM};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Lower BMI bound of the healthy weight range
pub const HEALTHY_BMI_MIN: f64 = 18.5;
/// Upper BMI bound of the healthy weight range
pub const HEALTHY_BMI_MAX: f64 = 24.9;

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// One row of the BMI category table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiBand {
    pub category: BmiCategory,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// BMI categories, read top to bottom. A value belongs to the first band
/// whose `max` it is strictly below; the last band has no upper bound.
pub const BMI_BANDS: [BmiBand; 4] = [
    BmiBand { category: BmiCategory::Underweight, min: None, max: Some(18.5) },
    BmiBand { category: BmiCategory::Normal, min: Some(18.5), max: Some(24.9) },
    BmiBand { category: BmiCategory::Overweight, min: Some(25.0), max: Some(29.9) },
    BmiBand { category: BmiCategory::Obese, min: Some(30.0), max: None },
];

impl BmiCategory {
    /// Published `(min, max)` bounds for this category
    pub fn range(&self) -> (Option<f64>, Option<f64>) {
        BMI_BANDS
            .iter()
            .find(|band| band.category == *self)
            .map(|band| (band.min, band.max))
            .unwrap_or((None, None))
    }

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weight range in kg that keeps BMI within the healthy bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthyRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// BMI calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI value, one decimal
    pub bmi: f64,
    pub category: BmiCategory,
    /// Healthy weight range in kg for this height
    pub healthy_range: HealthyRange,
}

/// Raw BMI, no validation or rounding
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify an unrounded BMI value
///
/// Comparisons are strict, so 24.9 itself is already overweight and
/// values in `[29.9, 30)` are obese.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    BMI_BANDS
        .iter()
        .find(|band| band.max.is_some_and(|max| bmi < max))
        .map(|band| band.category)
        .unwrap_or(BmiCategory::Obese)
}

/// Healthy weight range for a height, rounded to one decimal
pub fn healthy_weight_range(height_cm: f64) -> HealthyRange {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    HealthyRange {
        min: round_to_tenth(HEALTHY_BMI_MIN * height_m_sq),
        max: round_to_tenth(HEALTHY_BMI_MAX * height_m_sq),
    }
}

/// Calculate BMI, its category and the healthy weight range
pub fn calculate_bmi(input: &BmiInput) -> CalcResult<BmiResult> {
    BODY_WEIGHT_KG.check(input.weight_kg, "Weight")?;
    HEIGHT_CM.check(input.height_cm, "Height")?;

    let bmi = body_mass_index(input.weight_kg, input.height_cm);
    let result = BmiResult {
        bmi: round_to_tenth(bmi),
        category: classify_bmi(bmi),
        healthy_range: healthy_weight_range(input.height_cm),
    };

    debug!(bmi = result.bmi, category = %result.category, "BMI calculated");
    Ok(result)
}
