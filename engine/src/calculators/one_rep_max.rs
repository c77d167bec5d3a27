//! One-rep-max estimation
//!
//! Four estimators averaged together. They are calibrated for roughly
//! 1-15 reps; up to 30 reps is accepted but increasingly unreliable.
//! Brzycki is singular at 37 reps, which the 30-rep ceiling keeps out of reach.

use crate::errors::CalcResult;
use crate::rounding::round_to_int;
use crate::validation::{LIFT_WEIGHT_KG, REPS};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// `(reps, percentage of 1RM)` reference curve
pub const REP_PERCENTAGES: [(u32, u32); 10] = [
    (1, 100),
    (2, 95),
    (3, 93),
    (4, 90),
    (5, 87),
    (6, 85),
    (8, 80),
    (10, 75),
    (12, 70),
    (15, 65),
];

/// 1RM = weight × (1 + reps/30)
pub fn epley(weight: f64, reps: f64) -> f64 {
    weight * (1.0 + reps / 30.0)
}

/// 1RM = weight × 36 / (37 - reps)
pub fn brzycki(weight: f64, reps: f64) -> f64 {
    weight * (36.0 / (37.0 - reps))
}

/// 1RM = weight × reps^0.10
pub fn lombardi(weight: f64, reps: f64) -> f64 {
    weight * reps.powf(0.1)
}

/// 1RM = weight × (1 + 0.025 × reps)
pub fn oconner(weight: f64, reps: f64) -> f64 {
    weight * (1.0 + 0.025 * reps)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxInput {
    /// Weight lifted in kg
    pub weight_kg: f64,
    pub reps: f64,
}

/// Working weight for a rep count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepPercentage {
    pub reps: u32,
    pub weight: i64,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxResult {
    pub epley: i64,
    pub brzycki: i64,
    pub lombardi: i64,
    pub oconner: i64,
    pub average: i64,
    pub percentages: Vec<RepPercentage>,
}

/// Estimate 1RM and the working-weight table
pub fn calculate_one_rep_max(input: &OneRepMaxInput) -> CalcResult<OneRepMaxResult> {
    LIFT_WEIGHT_KG.check(input.weight_kg, "Weight")?;
    REPS.check(input.reps, "Reps")?;

    let (weight, reps) = (input.weight_kg, input.reps);
    let estimates = [
        epley(weight, reps),
        brzycki(weight, reps),
        lombardi(weight, reps),
        oconner(weight, reps),
    ];
    let average = estimates.iter().sum::<f64>() / estimates.len() as f64;

    // Table is scaled from the unrounded average
    let percentages = REP_PERCENTAGES
        .iter()
        .map(|&(reps, percentage)| RepPercentage {
            reps,
            weight: round_to_int(average * percentage as f64 / 100.0),
            percentage,
        })
        .collect();

    let result = OneRepMaxResult {
        epley: round_to_int(estimates[0]),
        brzycki: round_to_int(estimates[1]),
        lombardi: round_to_int(estimates[2]),
        oconner: round_to_int(estimates[3]),
        average: round_to_int(average),
        percentages,
    };

    debug!(average = result.average, reps, "one rep max calculated");
    Ok(result)
}
