//! Calculator catalog
//!
//! Static descriptors for every calculator the application lists, grouped
//! the way the home page shows them. Field descriptors carry the same
//! ranges the calculators validate against, so a form built from them
//! only produces values the engine accepts.

use crate::dispatch::{InputValue, RawInputs};
use crate::errors::{CalcResult, ValidationError, ValidationErrorKind};
use crate::validation::{
    FieldRange, AGE_YEARS, BODY_FAT_PERCENT, BODY_WEIGHT_KG, HEIGHT_CM, LIFT_WEIGHT_KG, REPS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calculators backed by a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorId {
    Bmi,
    Bmr,
    Tdee,
    BodyFat,
    LeanBodyMass,
    IdealWeight,
    Macros,
    OneRepMax,
    WaterIntake,
}

impl CalculatorId {
    pub const ALL: [CalculatorId; 9] = [
        CalculatorId::Bmi,
        CalculatorId::Bmr,
        CalculatorId::Tdee,
        CalculatorId::BodyFat,
        CalculatorId::LeanBodyMass,
        CalculatorId::IdealWeight,
        CalculatorId::Macros,
        CalculatorId::OneRepMax,
        CalculatorId::WaterIntake,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorId::Bmi => "bmi",
            CalculatorId::Bmr => "bmr",
            CalculatorId::Tdee => "tdee",
            CalculatorId::BodyFat => "body-fat",
            CalculatorId::LeanBodyMass => "lean-body-mass",
            CalculatorId::IdealWeight => "ideal-weight",
            CalculatorId::Macros => "macros",
            CalculatorId::OneRepMax => "one-rep-max",
            CalculatorId::WaterIntake => "water-intake",
        }
    }
}

impl fmt::Display for CalculatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Field descriptors
// ============================================================================

/// How a form should collect a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Number,
    Gender,
    Activity,
    Climate,
    Goal,
    Toggle,
}

/// Initial value of a field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldDefault {
    Number(f64),
    Choice(&'static str),
    Flag(bool),
}

impl From<FieldDefault> for InputValue {
    fn from(value: FieldDefault) -> Self {
        match value {
            FieldDefault::Number(n) => InputValue::Number(n),
            FieldDefault::Choice(s) => InputValue::Text(s.to_string()),
            FieldDefault::Flag(b) => InputValue::Flag(b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Key in [`RawInputs`]
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub default: Option<FieldDefault>,
    pub unit: Option<&'static str>,
    pub required: bool,
}

impl FieldSpec {
    const fn number(
        key: &'static str,
        label: &'static str,
        range: FieldRange,
        step: f64,
        default: f64,
        unit: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Number,
            min: Some(range.min),
            max: Some(range.max),
            step: Some(step),
            default: Some(FieldDefault::Number(default)),
            unit: Some(unit),
            required: true,
        }
    }

    const fn optional_percent(key: &'static str, label: &'static str, range: FieldRange) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Number,
            min: Some(range.min),
            max: Some(range.max),
            step: Some(0.5),
            default: None,
            unit: Some("%"),
            required: false,
        }
    }

    const fn choice(key: &'static str, label: &'static str, kind: FieldKind, default: &'static str) -> Self {
        Self {
            key,
            label,
            kind,
            min: None,
            max: None,
            step: None,
            default: Some(FieldDefault::Choice(default)),
            unit: None,
            required: true,
        }
    }

    const fn toggle(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Toggle,
            min: None,
            max: None,
            step: None,
            default: Some(FieldDefault::Flag(false)),
            unit: None,
            required: false,
        }
    }
}

const PERCENT: FieldRange = FieldRange::new(0.0, 100.0);

const WEIGHT: FieldSpec = FieldSpec::number("weight", "Weight", BODY_WEIGHT_KG, 0.5, 70.0, "kg");
const HEIGHT: FieldSpec = FieldSpec::number("height", "Height", HEIGHT_CM, 1.0, 175.0, "cm");
const AGE: FieldSpec = FieldSpec::number("age", "Age", AGE_YEARS, 1.0, 30.0, "years");
const GENDER: FieldSpec = FieldSpec::choice("gender", "Gender", FieldKind::Gender, "male");
const ACTIVITY: FieldSpec =
    FieldSpec::choice("activity_level", "Activity Level", FieldKind::Activity, "moderate");
const BODY_FAT: FieldSpec =
    FieldSpec::optional_percent("body_fat_percentage", "Body Fat", BODY_FAT_PERCENT);
const TDEE: FieldSpec = FieldSpec {
    key: "tdee",
    label: "Daily Calories (TDEE)",
    kind: FieldKind::Number,
    min: None,
    max: None,
    step: Some(10.0),
    default: Some(FieldDefault::Number(2000.0)),
    unit: Some("kcal"),
    required: true,
};
const GOAL: FieldSpec = FieldSpec::choice("goal", "Goal", FieldKind::Goal, "maintain");
const PROTEIN: FieldSpec = FieldSpec::optional_percent("protein", "Protein", PERCENT);
const CARBS: FieldSpec = FieldSpec::optional_percent("carbs", "Carbs", PERCENT);
const FAT: FieldSpec = FieldSpec::optional_percent("fat", "Fat", PERCENT);
const LIFT_WEIGHT: FieldSpec =
    FieldSpec::number("weight", "Weight Lifted", LIFT_WEIGHT_KG, 2.5, 100.0, "kg");
const REP_COUNT: FieldSpec = FieldSpec::number("reps", "Reps", REPS, 1.0, 5.0, "reps");
const WATER_ACTIVITY: FieldSpec =
    FieldSpec::choice("activity_level", "Activity Level", FieldKind::Activity, "sedentary");
const CLIMATE: FieldSpec = FieldSpec::choice("climate", "Climate", FieldKind::Climate, "normal");
const HIGH_PROTEIN: FieldSpec = FieldSpec::toggle("high_protein", "High Protein Diet");
const PREGNANT: FieldSpec = FieldSpec::toggle("pregnant", "Pregnant");
const BREASTFEEDING: FieldSpec = FieldSpec::toggle("breastfeeding", "Breastfeeding");

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatorDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    /// Calculation run for this entry; `None` while coming soon
    pub calculator: Option<CalculatorId>,
    pub coming_soon: bool,
    pub inputs: &'static [FieldSpec],
}

impl CalculatorDescriptor {
    const fn live(
        id: &'static str,
        name: &'static str,
        full_name: &'static str,
        description: &'static str,
        calculator: CalculatorId,
        inputs: &'static [FieldSpec],
    ) -> Self {
        Self {
            id,
            name,
            full_name,
            path: "",
            description,
            calculator: Some(calculator),
            coming_soon: false,
            inputs,
        }
    }

    const fn coming_soon(
        id: &'static str,
        name: &'static str,
        full_name: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            full_name,
            path: "",
            description,
            calculator: None,
            coming_soon: true,
            inputs: &[],
        }
    }

    const fn at(mut self, path: &'static str) -> Self {
        self.path = path;
        self
    }

    /// Field descriptor by raw input key
    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.inputs.iter().find(|field| field.key == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatorGroup {
    pub id: &'static str,
    pub name: &'static str,
    pub calculators: &'static [CalculatorDescriptor],
}

static CATALOG: &[CalculatorGroup] = &[
    CalculatorGroup {
        id: "body",
        name: "BODY",
        calculators: &[
            CalculatorDescriptor::live(
                "bmi",
                "BMI",
                "Body Mass Index",
                "Assess if you're at a healthy weight for your height",
                CalculatorId::Bmi,
                &[WEIGHT, HEIGHT],
            )
            .at("/bmi"),
            CalculatorDescriptor::live(
                "body-fat",
                "BF%",
                "Body Fat Percentage",
                "Estimate your body fat percentage",
                CalculatorId::BodyFat,
                &[WEIGHT, HEIGHT, AGE, GENDER],
            )
            .at("/body-fat"),
            CalculatorDescriptor::live(
                "ideal-weight",
                "IDEAL",
                "Ideal Body Weight",
                "Find your ideal weight range",
                CalculatorId::IdealWeight,
                &[HEIGHT, GENDER],
            )
            .at("/ideal-weight"),
            CalculatorDescriptor::live(
                "lean-body-mass",
                "LBM",
                "Lean Body Mass",
                "Calculate your lean muscle mass",
                CalculatorId::LeanBodyMass,
                &[WEIGHT, HEIGHT, GENDER, BODY_FAT],
            )
            .at("/lean-body-mass"),
        ],
    },
    CalculatorGroup {
        id: "energy",
        name: "ENERGY",
        calculators: &[
            CalculatorDescriptor::live(
                "bmr",
                "BMR",
                "Basal Metabolic Rate",
                "Calculate calories burned at rest",
                CalculatorId::Bmr,
                &[WEIGHT, HEIGHT, AGE, GENDER],
            )
            .at("/bmr"),
            CalculatorDescriptor::live(
                "tdee",
                "TDEE",
                "Total Daily Energy",
                "Total calories burned daily",
                CalculatorId::Tdee,
                &[WEIGHT, HEIGHT, AGE, GENDER, ACTIVITY],
            )
            .at("/tdee"),
            CalculatorDescriptor::live(
                "calories",
                "CAL",
                "Calorie Calculator",
                "Daily calorie needs for your goals",
                CalculatorId::Macros,
                &[TDEE, GOAL],
            )
            .at("/calories"),
            CalculatorDescriptor::live(
                "macros",
                "MACRO",
                "Macro Calculator",
                "Protein, carbs & fat split",
                CalculatorId::Macros,
                &[TDEE, GOAL, PROTEIN, CARBS, FAT],
            )
            .at("/macros"),
        ],
    },
    CalculatorGroup {
        id: "wellness",
        name: "WELLNESS",
        calculators: &[CalculatorDescriptor::live(
            "water-intake",
            "H2O",
            "Water Intake",
            "Daily hydration needs",
            CalculatorId::WaterIntake,
            &[WEIGHT, WATER_ACTIVITY, CLIMATE, HIGH_PROTEIN, PREGNANT, BREASTFEEDING],
        )
        .at("/water-intake")],
    },
    CalculatorGroup {
        id: "strength",
        name: "STRENGTH",
        calculators: &[CalculatorDescriptor::live(
            "one-rep-max",
            "1RM",
            "One Rep Max",
            "Calculate your maximum lift",
            CalculatorId::OneRepMax,
            &[LIFT_WEIGHT, REP_COUNT],
        )
        .at("/one-rep-max")],
    },
    CalculatorGroup {
        id: "coming-soon",
        name: "SOON",
        calculators: &[
            CalculatorDescriptor::coming_soon(
                "protein",
                "PROT",
                "Protein Calculator",
                "Calculate optimal protein intake for your goals",
            )
            .at("/protein"),
            CalculatorDescriptor::coming_soon(
                "calories-burned",
                "BURN",
                "Calories Burned",
                "Calculate calories burned by activity (MET-based)",
            )
            .at("/calories-burned"),
            CalculatorDescriptor::coming_soon(
                "heart-rate-zones",
                "HR",
                "Heart Rate Zones",
                "Find your training heart rate zones",
            )
            .at("/heart-rate-zones"),
            CalculatorDescriptor::coming_soon(
                "pace-calculator",
                "PACE",
                "Pace Calculator",
                "Convert pace, speed & race predictions",
            )
            .at("/pace-calculator"),
            CalculatorDescriptor::coming_soon(
                "waist-hip-ratio",
                "WHR",
                "Waist-to-Hip Ratio",
                "Assess cardiovascular health risk",
            )
            .at("/waist-hip-ratio"),
            CalculatorDescriptor::coming_soon(
                "sleep-calculator",
                "SLEEP",
                "Sleep Calculator",
                "Optimal sleep duration by age",
            )
            .at("/sleep-calculator"),
        ],
    },
];

/// Every group in display order
pub fn catalog() -> &'static [CalculatorGroup] {
    CATALOG
}

/// Every descriptor, flattened in display order
pub fn calculators() -> impl Iterator<Item = &'static CalculatorDescriptor> {
    CATALOG.iter().flat_map(|group| group.calculators.iter())
}

pub fn find_calculator(id: &str) -> Option<&'static CalculatorDescriptor> {
    calculators().find(|descriptor| descriptor.id == id)
}

/// Map a catalog id to the calculation behind it
pub fn resolve_calculator(id: &str) -> CalcResult<CalculatorId> {
    let descriptor = find_calculator(id).ok_or_else(|| {
        ValidationError::new(
            "Calculator",
            ValidationErrorKind::UnknownCalculator(id.to_string()),
        )
    })?;
    descriptor.calculator.ok_or_else(|| {
        ValidationError::new("Calculator", ValidationErrorKind::ComingSoon(id.to_string()))
    })
}

/// Raw inputs pre-filled from field defaults; optional fields stay absent
pub fn default_inputs(id: &str) -> Option<RawInputs> {
    find_calculator(id).map(|descriptor| {
        descriptor
            .inputs
            .iter()
            .filter_map(|field| field.default.map(|d| (field.key.to_string(), InputValue::from(d))))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: Vec<&str> = calculators().map(|c| c.id).collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn test_every_calculation_is_listed() {
        for id in CalculatorId::ALL {
            assert!(
                calculators().any(|c| c.calculator == Some(id)),
                "{} missing from catalog",
                id
            );
            // Canonical id resolves to itself
            assert_eq!(resolve_calculator(id.as_str()), Ok(id));
        }
    }

    #[test]
    fn test_coming_soon_flag_matches_calculation() {
        for descriptor in calculators() {
            assert_eq!(descriptor.coming_soon, descriptor.calculator.is_none());
            assert_eq!(descriptor.path, format!("/{}", descriptor.id));
        }
    }

    #[rstest]
    #[case("calories", CalculatorId::Macros)]
    #[case("body-fat", CalculatorId::BodyFat)]
    #[case("water-intake", CalculatorId::WaterIntake)]
    fn test_resolve(#[case] id: &str, #[case] expected: CalculatorId) {
        assert_eq!(resolve_calculator(id), Ok(expected));
    }

    #[test]
    fn test_resolve_failures() {
        let err = resolve_calculator("protein").unwrap_err();
        assert_eq!(err.to_string(), "Calculator \"protein\" is coming soon");

        let err = resolve_calculator("bogus").unwrap_err();
        assert_eq!(err.to_string(), "Calculator \"bogus\" is not a known calculator");
    }

    #[test]
    fn test_field_ranges_follow_validation() {
        let bmi = find_calculator("bmi").unwrap();
        let weight = bmi.field("weight").unwrap();
        assert_eq!((weight.min, weight.max), (Some(20.0), Some(500.0)));

        let one_rep_max = find_calculator("one-rep-max").unwrap();
        let reps = one_rep_max.field("reps").unwrap();
        assert_eq!((reps.min, reps.max), (Some(1.0), Some(30.0)));
    }

    #[test]
    fn test_default_inputs() {
        let inputs = default_inputs("lean-body-mass").unwrap();
        assert_eq!(inputs.get("weight"), Some(&InputValue::Number(70.0)));
        assert_eq!(inputs.get("gender"), Some(&InputValue::Text("male".to_string())));
        assert!(!inputs.contains_key("body_fat_percentage"));

        let water = default_inputs("water-intake").unwrap();
        assert_eq!(water.get("pregnant"), Some(&InputValue::Flag(false)));

        assert!(default_inputs("nope").is_none());
        assert_eq!(default_inputs("sleep-calculator").map(|i| i.len()), Some(0));
    }

    #[test]
    fn test_catalog_serializes() {
        let json = serde_json::to_value(catalog()).unwrap();
        assert_eq!(json[0]["id"], "body");
        assert_eq!(json[0]["calculators"][0]["calculator"], "bmi");
        assert_eq!(json[0]["calculators"][0]["inputs"][0]["default"], 70.0);
    }
}
