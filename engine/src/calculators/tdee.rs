//! Total Daily Energy Expenditure
//!
//! TDEE = BMR × Activity Multiplier, with a balanced macro split on top.

use super::bmr::{calculate_bmr, BmrInput};
use super::macros::{split_calories, MacroSplit, BALANCED_SPLIT};
use crate::errors::CalcResult;
use crate::profile::{ActivityLevel, Gender};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TdeeInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}

impl TdeeInput {
    pub fn bmr_input(&self) -> BmrInput {
        BmrInput {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            age_years: self.age_years,
            gender: self.gender,
        }
    }
}

/// TDEE calculation result with breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TdeeResult {
    pub bmr: i64,
    pub tdee: i64,
    pub activity_level: ActivityLevel,
    /// 30/40/30 split of `tdee`
    pub macros: MacroSplit,
}

/// Calculate TDEE for one activity level
pub fn calculate_tdee(input: &TdeeInput) -> CalcResult<TdeeResult> {
    let bmr = calculate_bmr(&input.bmr_input())?;
    let tdee = bmr.tdee.get(input.activity_level);

    let result = TdeeResult {
        bmr: bmr.bmr,
        tdee,
        activity_level: input.activity_level,
        macros: split_calories(tdee as f64, &BALANCED_SPLIT),
    };

    debug!(tdee, activity_level = %input.activity_level, "TDEE calculated");
    Ok(result)
}
