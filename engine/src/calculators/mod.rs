//! Health and fitness calculators
//!
//! Every calculator has the same shape: validate the input, apply the
//! formula, round, and return a fresh result record. TDEE builds on BMR and
//! body fat builds on BMI by calling their public entry points.

pub mod bmi;
pub mod bmr;
pub mod body_fat;
pub mod ideal_weight;
pub mod lean_body_mass;
pub mod macros;
pub mod one_rep_max;
pub mod tdee;
pub mod water_intake;

pub use bmi::{
    calculate_bmi, classify_bmi, healthy_weight_range, BmiBand, BmiCategory, BmiInput, BmiResult,
    HealthyRange, BMI_BANDS,
};
pub use bmr::{calculate_bmr, BmrInput, BmrResult, TdeeByActivity};
pub use body_fat::{
    body_fat_bands, calculate_body_fat, classify_body_fat, BodyFatBand, BodyFatCategory,
    BodyFatInput, BodyFatResult,
};
pub use ideal_weight::{calculate_ideal_weight, IdealWeightInput, IdealWeightResult};
pub use lean_body_mass::{calculate_lean_body_mass, LeanBodyMassInput, LeanBodyMassResult};
pub use macros::{
    calculate_macros, split_calories, Goal, MacroAmount, MacroInput, MacroPercentages,
    MacroResult, MacroSplit, BALANCED_SPLIT,
};
pub use one_rep_max::{
    calculate_one_rep_max, OneRepMaxInput, OneRepMaxResult, RepPercentage, REP_PERCENTAGES,
};
pub use tdee::{calculate_tdee, TdeeInput, TdeeResult};
pub use water_intake::{
    calculate_water_intake, HydrationAdjustments, HydrationLevel, WaterIntakeInput,
    WaterIntakeResult,
};
