//! Lean body mass: Boer, Hume, and from a known body fat percentage

use crate::errors::CalcResult;
use crate::profile::Gender;
use crate::rounding::round_to_tenth;
use crate::validation::{BODY_FAT_PERCENT, BODY_WEIGHT_KG, HEIGHT_CM};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Linear estimate `weight × w + height × h + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
struct LinearCoefficients {
    weight: f64,
    height: f64,
    intercept: f64,
}

impl LinearCoefficients {
    fn apply(&self, weight_kg: f64, height_cm: f64) -> f64 {
        self.weight * weight_kg + self.height * height_cm + self.intercept
    }
}

// Boer (1984)
const BOER_MALE: LinearCoefficients = LinearCoefficients { weight: 0.407, height: 0.267, intercept: -19.2 };
const BOER_FEMALE: LinearCoefficients = LinearCoefficients { weight: 0.252, height: 0.473, intercept: -48.3 };
// Hume (1966)
const HUME_MALE: LinearCoefficients = LinearCoefficients { weight: 0.3281, height: 0.33929, intercept: -29.5336 };
const HUME_FEMALE: LinearCoefficients = LinearCoefficients { weight: 0.29569, height: 0.41813, intercept: -43.2933 };

pub fn boer(weight_kg: f64, height_cm: f64, gender: Gender) -> f64 {
    match gender {
        Gender::Male => BOER_MALE.apply(weight_kg, height_cm),
        Gender::Female => BOER_FEMALE.apply(weight_kg, height_cm),
    }
}

pub fn hume(weight_kg: f64, height_cm: f64, gender: Gender) -> f64 {
    match gender {
        Gender::Male => HUME_MALE.apply(weight_kg, height_cm),
        Gender::Female => HUME_FEMALE.apply(weight_kg, height_cm),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeanBodyMassInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
    #[serde(default)]
    pub body_fat_percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeanBodyMassResult {
    pub boer: f64,
    pub hume: f64,
    /// Only when a body fat percentage was supplied
    pub from_body_fat: Option<f64>,
    /// Mean of the estimates actually computed (two or three)
    pub average: f64,
    pub fat_mass_kg: f64,
}

/// Calculate lean body mass with every applicable formula
pub fn calculate_lean_body_mass(input: &LeanBodyMassInput) -> CalcResult<LeanBodyMassResult> {
    BODY_WEIGHT_KG.check(input.weight_kg, "Weight")?;
    HEIGHT_CM.check(input.height_cm, "Height")?;
    if let Some(bf) = input.body_fat_percentage {
        BODY_FAT_PERCENT.check(bf, "Body fat percentage")?;
    }

    let boer = boer(input.weight_kg, input.height_cm, input.gender);
    let hume = hume(input.weight_kg, input.height_cm, input.gender);
    let from_body_fat = input
        .body_fat_percentage
        .map(|bf| input.weight_kg * (1.0 - bf / 100.0));

    let mut estimates = vec![boer, hume];
    estimates.extend(from_body_fat);
    let average = estimates.iter().sum::<f64>() / estimates.len() as f64;

    let result = LeanBodyMassResult {
        boer: round_to_tenth(boer),
        hume: round_to_tenth(hume),
        from_body_fat: from_body_fat.map(round_to_tenth),
        average: round_to_tenth(average),
        fat_mass_kg: round_to_tenth(input.weight_kg - average),
    };

    debug!(average = result.average, estimates = estimates.len(), "lean body mass calculated");
    Ok(result)
}
