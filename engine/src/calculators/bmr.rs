//! Basal Metabolic Rate (Mifflin-St Jeor)
//!
//! Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
//! Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161

use crate::errors::CalcResult;
use crate::profile::{ActivityLevel, Gender};
use crate::rounding::round_to_int;
use crate::validation::{AGE_YEARS, BODY_WEIGHT_KG, HEIGHT_CM};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    pub gender: Gender,
}

/// TDEE in kcal/day at every activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdeeByActivity {
    pub sedentary: i64,
    pub light: i64,
    pub moderate: i64,
    pub active: i64,
    pub athlete: i64,
}

impl TdeeByActivity {
    /// Scale an unrounded BMR by every multiplier
    pub fn from_bmr(bmr: f64) -> Self {
        let at = |level: ActivityLevel| round_to_int(bmr * level.multiplier());
        Self {
            sedentary: at(ActivityLevel::Sedentary),
            light: at(ActivityLevel::Light),
            moderate: at(ActivityLevel::Moderate),
            active: at(ActivityLevel::Active),
            athlete: at(ActivityLevel::Athlete),
        }
    }

    pub fn get(&self, level: ActivityLevel) -> i64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::Athlete => self.athlete,
        }
    }

    /// `(level, kcal)` pairs, least to most active
    pub fn iter(&self) -> impl Iterator<Item = (ActivityLevel, i64)> + '_ {
        ActivityLevel::ALL.into_iter().map(move |level| (level, self.get(level)))
    }
}

/// BMR calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrResult {
    /// kcal/day, nearest integer
    pub bmr: i64,
    pub tdee: TdeeByActivity,
}

/// Raw Mifflin-St Jeor BMR, no validation or rounding
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age_years: f64, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Validate the measurements in the order the BMR form reports them
pub fn validate_measurements(weight_kg: f64, height_cm: f64, age_years: f64) -> CalcResult<()> {
    BODY_WEIGHT_KG.check(weight_kg, "Weight")?;
    HEIGHT_CM.check(height_cm, "Height")?;
    AGE_YEARS.check(age_years, "Age")?;
    Ok(())
}

/// Calculate BMR and the TDEE for every activity level
pub fn calculate_bmr(input: &BmrInput) -> CalcResult<BmrResult> {
    validate_measurements(input.weight_kg, input.height_cm, input.age_years)?;

    let bmr = mifflin_st_jeor(input.weight_kg, input.height_cm, input.age_years, input.gender);
    let result = BmrResult {
        bmr: round_to_int(bmr),
        tdee: TdeeByActivity::from_bmr(bmr),
    };

    debug!(bmr = result.bmr, gender = %input.gender, "BMR calculated");
    Ok(result)
}
