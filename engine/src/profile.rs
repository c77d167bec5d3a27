//! Profile enums shared across calculators
//!
//! Each enum parses from its exact lowercase wire name and rejects anything
//! else with a [`ValidationError`] naming the accepted values.

use crate::errors::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Gender
// ============================================================================

/// Gender used by the physiological formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
    pub const NAMES: &'static [&'static str] = &["male", "female"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ValidationError::new(
                "Gender",
                ValidationErrorKind::InvalidChoice { allowed: Self::NAMES },
            )),
        }
    }
}

// ============================================================================
// Activity Level
// ============================================================================

/// Activity level for TDEE and hydration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise, physical job
    Athlete,
}

impl ActivityLevel {
    /// Every level, least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::Athlete,
    ];

    pub const NAMES: &'static [&'static str] =
        &["sedentary", "light", "moderate", "active", "athlete"];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::Athlete => 1.9,
        }
    }

    /// Extra daily water in ml for exercise at this level
    pub fn hydration_bonus_ml(&self) -> i64 {
        match self {
            ActivityLevel::Sedentary => 0,
            ActivityLevel::Light => 250,
            ActivityLevel::Moderate => 500,
            ActivityLevel::Active => 750,
            ActivityLevel::Athlete => 1000,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::Athlete => "Very hard exercise or physical job",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::Athlete => "athlete",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(
                    "Activity level",
                    ValidationErrorKind::InvalidChoice { allowed: Self::NAMES },
                )
            })
    }
}

// ============================================================================
// Climate
// ============================================================================

/// Climate the person lives or trains in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    #[default]
    Normal,
    Hot,
}

impl Climate {
    pub const NAMES: &'static [&'static str] = &["normal", "hot"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Climate::Normal => "normal",
            Climate::Hot => "hot",
        }
    }
}

impl fmt::Display for Climate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Climate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Climate::Normal),
            "hot" => Ok(Climate::Hot),
            _ => Err(ValidationError::new(
                "Climate",
                ValidationErrorKind::InvalidChoice { allowed: Self::NAMES },
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_gender_parsing_is_exact() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);

        let err = "other".parse::<Gender>().unwrap_err();
        assert_eq!(err.field, "Gender");
        assert_eq!(err.to_string(), "Gender must be \"male\" or \"female\"");

        assert!("Male".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[rstest]
    #[case(ActivityLevel::Sedentary, 1.2, 0)]
    #[case(ActivityLevel::Light, 1.375, 250)]
    #[case(ActivityLevel::Moderate, 1.55, 500)]
    #[case(ActivityLevel::Active, 1.725, 750)]
    #[case(ActivityLevel::Athlete, 1.9, 1000)]
    fn test_activity_tables(
        #[case] level: ActivityLevel,
        #[case] multiplier: f64,
        #[case] bonus_ml: i64,
    ) {
        assert_eq!(level.multiplier(), multiplier);
        assert_eq!(level.hydration_bonus_ml(), bonus_ml);
        assert_eq!(level.as_str().parse::<ActivityLevel>().unwrap(), level);
    }

    #[test]
    fn test_activity_level_rejects_unknown() {
        let err = "lightly_active".parse::<ActivityLevel>().unwrap_err();
        assert_eq!(err.field, "Activity level");
        assert!(err.to_string().contains("\"athlete\""));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&ActivityLevel::Athlete).unwrap(), "\"athlete\"");
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        assert_eq!(serde_json::from_str::<Climate>("\"hot\"").unwrap(), Climate::Hot);
    }
}
