//! Macronutrient split calculations
//!
//! Two layers: [`split_calories`] turns a calorie figure and a percentage
//! split into grams, and [`calculate_macros`] picks the calorie target and
//! split for a goal.

use crate::errors::{CalcResult, ValidationError, ValidationErrorKind};
use crate::rounding::round_to_int;
use crate::validation::{require_percentage, require_positive_finite};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Share of calories per macro, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroPercentages {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroPercentages {
    pub const fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self { protein, carbs, fat }
    }

    /// Validate each component on its own; the sum is not checked
    pub fn validate(&self) -> CalcResult<()> {
        require_percentage(self.protein, "Protein percentage")?;
        require_percentage(self.carbs, "Carbs percentage")?;
        require_percentage(self.fat, "Fat percentage")?;
        Ok(())
    }
}

/// 30% protein, 40% carbs, 30% fat
pub const BALANCED_SPLIT: MacroPercentages = MacroPercentages::new(30.0, 40.0, 30.0);

/// Grams, calories and share of one macro
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroAmount {
    pub grams: i64,
    pub calories: i64,
    pub percentage: f64,
}

impl MacroAmount {
    fn from_share(total_calories: f64, percentage: f64, kcal_per_gram: f64) -> Self {
        let calories = total_calories * (percentage / 100.0);
        Self {
            grams: round_to_int(calories / kcal_per_gram),
            calories: round_to_int(calories),
            percentage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: MacroAmount,
    pub carbs: MacroAmount,
    pub fat: MacroAmount,
}

/// Break a calorie figure down by macro
pub fn split_calories(calories: f64, split: &MacroPercentages) -> MacroSplit {
    MacroSplit {
        protein: MacroAmount::from_share(calories, split.protein, PROTEIN_KCAL_PER_GRAM),
        carbs: MacroAmount::from_share(calories, split.carbs, CARBS_KCAL_PER_GRAM),
        fat: MacroAmount::from_share(calories, split.fat, FAT_KCAL_PER_GRAM),
    }
}

// ============================================================================
// Goals
// ============================================================================

/// Nutrition goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    #[default]
    Maintain,
    Lose,
    Gain,
    Custom,
}

impl Goal {
    pub const ALL: [Goal; 4] = [Goal::Maintain, Goal::Lose, Goal::Gain, Goal::Custom];
    pub const NAMES: &'static [&'static str] = &["maintain", "lose", "gain", "custom"];

    /// kcal added to TDEE for this goal
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Goal::Maintain | Goal::Custom => 0.0,
            Goal::Lose => -500.0,
            Goal::Gain => 300.0,
        }
    }

    /// Split used when the caller supplies none
    pub fn default_split(&self) -> MacroPercentages {
        match self {
            Goal::Maintain | Goal::Custom => BALANCED_SPLIT,
            // Higher protein for satiety
            Goal::Lose => MacroPercentages::new(40.0, 30.0, 30.0),
            // Higher carbs for energy
            Goal::Gain => MacroPercentages::new(30.0, 45.0, 25.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Maintain => "maintain",
            Goal::Lose => "lose",
            Goal::Gain => "gain",
            Goal::Custom => "custom",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Goal::ALL
            .into_iter()
            .find(|goal| goal.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(
                    "Goal",
                    ValidationErrorKind::InvalidChoice { allowed: Self::NAMES },
                )
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroInput {
    /// Maintenance calories, kcal/day
    pub tdee: f64,
    pub goal: Goal,
    /// Overrides the goal's split when present
    #[serde(default)]
    pub custom_split: Option<MacroPercentages>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroResult {
    /// Target calories after the goal adjustment
    pub calories: i64,
    pub goal: Goal,
    pub macros: MacroSplit,
}

/// Calculate the calorie target and macro breakdown for a goal
pub fn calculate_macros(input: &MacroInput) -> CalcResult<MacroResult> {
    require_positive_finite(input.tdee, "TDEE")?;
    if let Some(split) = &input.custom_split {
        split.validate()?;
    }

    let target = input.tdee + input.goal.calorie_adjustment();
    let split = input.custom_split.unwrap_or_else(|| input.goal.default_split());
    let result = MacroResult {
        calories: round_to_int(target),
        goal: input.goal,
        macros: split_calories(target, &split),
    };

    debug!(calories = result.calories, goal = %input.goal, "macros calculated");
    Ok(result)
}
