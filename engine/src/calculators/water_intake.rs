//! Daily water intake
//!
//! - Baseline: weight(kg) × 33 ml (average of 30-35 ml)
//! - Exercise: 0-1000 ml depending on activity level
//! - Hot climate: +750 ml
//! - High protein diet: +375 ml (average of 250-500)
//! - Pregnancy: +300 ml
//! - Breastfeeding: +700 ml
//!
//! Adjustments are independent and simply add up.

use crate::errors::CalcResult;
use crate::profile::{ActivityLevel, Climate};
use crate::rounding::{round_to_int, round_to_tenth};
use crate::validation::BODY_WEIGHT_KG;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const BASELINE_ML_PER_KG: f64 = 33.0;
pub const HOT_CLIMATE_ML: i64 = 750;
pub const HIGH_PROTEIN_ML: i64 = 375;
pub const PREGNANCY_ML: i64 = 300;
pub const BREASTFEEDING_ML: i64 = 700;
pub const GLASS_ML: f64 = 250.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterIntakeInput {
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub climate: Climate,
    #[serde(default)]
    pub high_protein: bool,
    #[serde(default)]
    pub pregnant: bool,
    #[serde(default)]
    pub breastfeeding: bool,
}

/// Extra ml per factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationAdjustments {
    pub exercise: i64,
    pub climate: i64,
    pub high_protein: i64,
    pub pregnancy: i64,
    pub breastfeeding: i64,
}

impl HydrationAdjustments {
    pub fn total(&self) -> i64 {
        self.exercise + self.climate + self.high_protein + self.pregnancy + self.breastfeeding
    }
}

/// Qualitative reading of the daily total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrationLevel {
    /// Under 2 L
    BelowRecommended,
    /// 2-3 L
    Good,
    /// Over 3 L up to 4 L
    Excellent,
    /// Over 4 L
    VeryHigh,
}

impl HydrationLevel {
    pub fn from_liters(liters: f64) -> Self {
        if liters < 2.0 {
            HydrationLevel::BelowRecommended
        } else if liters <= 3.0 {
            HydrationLevel::Good
        } else if liters <= 4.0 {
            HydrationLevel::Excellent
        } else {
            HydrationLevel::VeryHigh
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            HydrationLevel::BelowRecommended => "Below recommended - increase water intake",
            HydrationLevel::Good => "Good hydration level",
            HydrationLevel::Excellent => "Excellent hydration for active lifestyle",
            HydrationLevel::VeryHigh => "Very high - ensure this matches your activity level",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterIntakeResult {
    /// ml
    pub baseline: i64,
    pub adjustments: HydrationAdjustments,
    /// ml
    pub total: i64,
    /// 250 ml glasses, rounded up
    pub glasses: i64,
    pub liters: f64,
    pub level: HydrationLevel,
    pub recommendation: String,
}

/// Calculate recommended daily water intake
pub fn calculate_water_intake(input: &WaterIntakeInput) -> CalcResult<WaterIntakeResult> {
    BODY_WEIGHT_KG.check(input.weight_kg, "Weight")?;

    let baseline = input.weight_kg * BASELINE_ML_PER_KG;
    let flag = |on: bool, ml: i64| if on { ml } else { 0 };
    let adjustments = HydrationAdjustments {
        exercise: input.activity_level.hydration_bonus_ml(),
        climate: flag(input.climate == Climate::Hot, HOT_CLIMATE_ML),
        high_protein: flag(input.high_protein, HIGH_PROTEIN_ML),
        pregnancy: flag(input.pregnant, PREGNANCY_ML),
        breastfeeding: flag(input.breastfeeding, BREASTFEEDING_ML),
    };

    let total = baseline + adjustments.total() as f64;
    let liters = round_to_tenth(total / 1000.0);
    let level = HydrationLevel::from_liters(liters);

    let result = WaterIntakeResult {
        baseline: round_to_int(baseline),
        adjustments,
        total: round_to_int(total),
        glasses: (total / GLASS_ML).ceil() as i64,
        liters,
        level,
        recommendation: level.recommendation().to_string(),
    };

    debug!(total_ml = result.total, level = ?result.level, "water intake calculated");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn input(weight_kg: f64, activity_level: ActivityLevel) -> WaterIntakeInput {
        WaterIntakeInput {
            weight_kg,
            activity_level,
            climate: Climate::Normal,
            high_protein: false,
            pregnant: false,
            breastfeeding: false,
        }
    }

    #[test]
    fn test_sedentary_baseline() {
        let result = calculate_water_intake(&input(70.0, ActivityLevel::Sedentary)).unwrap();
        assert_eq!(
            result,
            WaterIntakeResult {
                baseline: 2310,
                adjustments: HydrationAdjustments {
                    exercise: 0,
                    climate: 0,
                    high_protein: 0,
                    pregnancy: 0,
                    breastfeeding: 0,
                },
                total: 2310,
                glasses: 10,
                liters: 2.3,
                level: HydrationLevel::Good,
                recommendation: "Good hydration level".to_string(),
            }
        );
    }

    #[test]
    fn test_all_adjustments_stack() {
        let result = calculate_water_intake(&WaterIntakeInput {
            weight_kg: 60.0,
            activity_level: ActivityLevel::Athlete,
            climate: Climate::Hot,
            high_protein: true,
            pregnant: true,
            breastfeeding: true,
        })
        .unwrap();
        // 1980 + 1000 + 750 + 375 + 300 + 700
        assert_eq!(result.baseline, 1980);
        assert_eq!(result.adjustments.total(), 3125);
        assert_eq!(result.total, 5105);
        assert_eq!(result.glasses, 21);
        assert_eq!(result.liters, 5.1);
        assert_eq!(result.level, HydrationLevel::VeryHigh);
    }

    #[rstest]
    #[case(1.9, HydrationLevel::BelowRecommended)]
    #[case(2.0, HydrationLevel::Good)]
    #[case(3.0, HydrationLevel::Good)]
    #[case(3.1, HydrationLevel::Excellent)]
    #[case(4.0, HydrationLevel::Excellent)]
    #[case(4.1, HydrationLevel::VeryHigh)]
    fn test_recommendation_thresholds(#[case] liters: f64, #[case] expected: HydrationLevel) {
        assert_eq!(HydrationLevel::from_liters(liters), expected);
    }

    #[test]
    fn test_low_intake_message() {
        let result = calculate_water_intake(&input(50.0, ActivityLevel::Sedentary)).unwrap();
        // 1650 ml
        assert_eq!(result.liters, 1.7);
        assert_eq!(result.recommendation, "Below recommended - increase water intake");
    }

    #[test]
    fn test_invalid_weight() {
        let err = calculate_water_intake(&input(600.0, ActivityLevel::Light)).unwrap_err();
        assert_eq!(err.to_string(), "Weight must be between 20 and 500");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: More active = more water needed
        #[test]
        fn prop_activity_increases_water(weight in 20.0f64..=500.0) {
            let totals: Vec<i64> = ActivityLevel::ALL
                .into_iter()
                .map(|level| calculate_water_intake(&input(weight, level)).unwrap().total)
                .collect();
            prop_assert!(totals.windows(2).all(|w| w[1] > w[0]));
        }

        /// Property: glasses cover the total
        #[test]
        fn prop_glasses_cover_total(weight in 20.0f64..=500.0) {
            let result = calculate_water_intake(&input(weight, ActivityLevel::Moderate)).unwrap();
            prop_assert!(result.glasses as f64 * GLASS_ML >= weight * 33.0 + 500.0);
        }
    }
}
