//! Body fat percentage (Deurenberg)
//!
//! BF% = 1.20 × BMI + 0.23 × Age - 10.8 × sex - 5.4
//! where sex = 1 for male, 0 for female

use super::bmi::{calculate_bmi, BmiInput};
use crate::errors::CalcResult;
use crate::profile::Gender;
use crate::rounding::round_to_tenth;
use crate::validation::AGE_YEARS;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Sanity bounds for the empirical formula
pub const MIN_BODY_FAT_PERCENT: f64 = 3.0;
pub const MAX_BODY_FAT_PERCENT: f64 = 60.0;

/// Body fat category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    Essential,
    Athletes,
    Fitness,
    Average,
    Obese,
}

impl BodyFatCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BodyFatCategory::Essential => "Essential Fat",
            BodyFatCategory::Athletes => "Athletes",
            BodyFatCategory::Fitness => "Fitness",
            BodyFatCategory::Average => "Average",
            BodyFatCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BodyFatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper bound (exclusive) of a body fat category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyFatBand {
    pub max: f64,
    pub category: BodyFatCategory,
}

const MALE_BANDS: [BodyFatBand; 5] = [
    BodyFatBand { max: 6.0, category: BodyFatCategory::Essential },
    BodyFatBand { max: 14.0, category: BodyFatCategory::Athletes },
    BodyFatBand { max: 18.0, category: BodyFatCategory::Fitness },
    BodyFatBand { max: 25.0, category: BodyFatCategory::Average },
    BodyFatBand { max: 100.0, category: BodyFatCategory::Obese },
];

const FEMALE_BANDS: [BodyFatBand; 5] = [
    BodyFatBand { max: 14.0, category: BodyFatCategory::Essential },
    BodyFatBand { max: 21.0, category: BodyFatCategory::Athletes },
    BodyFatBand { max: 25.0, category: BodyFatCategory::Fitness },
    BodyFatBand { max: 32.0, category: BodyFatCategory::Average },
    BodyFatBand { max: 100.0, category: BodyFatCategory::Obese },
];

/// Category bands for a gender, lowest first
pub fn body_fat_bands(gender: Gender) -> &'static [BodyFatBand] {
    match gender {
        Gender::Male => &MALE_BANDS,
        Gender::Female => &FEMALE_BANDS,
    }
}

/// Classify body fat percentage; the first band it is strictly below wins
pub fn classify_body_fat(body_fat_percent: f64, gender: Gender) -> BodyFatCategory {
    body_fat_bands(gender)
        .iter()
        .find(|band| body_fat_percent < band.max)
        .map(|band| band.category)
        .unwrap_or(BodyFatCategory::Obese)
}

/// Deurenberg estimate clamped to [`MIN_BODY_FAT_PERCENT`, `MAX_BODY_FAT_PERCENT`]
pub fn deurenberg(bmi: f64, age_years: f64, gender: Gender) -> f64 {
    let sex_factor = match gender {
        Gender::Male => 1.0,
        Gender::Female => 0.0,
    };
    let bf = 1.2 * bmi + 0.23 * age_years - 10.8 * sex_factor - 5.4;
    bf.clamp(MIN_BODY_FAT_PERCENT, MAX_BODY_FAT_PERCENT)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyFatInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyFatResult {
    pub percentage: f64,
    pub category: BodyFatCategory,
    pub fat_mass_kg: f64,
    pub lean_mass_kg: f64,
}

/// Estimate body fat from BMI, age and gender
///
/// Uses the BMI as reported by [`calculate_bmi`], i.e. already rounded to
/// one decimal.
pub fn calculate_body_fat(input: &BodyFatInput) -> CalcResult<BodyFatResult> {
    AGE_YEARS.check(input.age_years, "Age")?;
    let bmi = calculate_bmi(&BmiInput {
        weight_kg: input.weight_kg,
        height_cm: input.height_cm,
    })?;

    let percentage = deurenberg(bmi.bmi, input.age_years, input.gender);
    let fat_mass = percentage / 100.0 * input.weight_kg;
    let lean_mass = input.weight_kg - fat_mass;

    let result = BodyFatResult {
        percentage: round_to_tenth(percentage),
        category: classify_body_fat(percentage, input.gender),
        fat_mass_kg: round_to_tenth(fat_mass),
        lean_mass_kg: round_to_tenth(lean_mass),
    };

    debug!(percentage = result.percentage, category = %result.category, "body fat calculated");
    Ok(result)
}
