//! Raw-input dispatch
//!
//! Front ends hand over loosely typed key/value inputs (form fields, JSON
//! bodies, command line pairs). This module turns them into typed calculator
//! inputs and runs the calculation named by a catalog id.
//!
//! Field checks run in the same order the calculators use, so the first
//! error reported for a given bad input never depends on the front end.
//! Body fat checks age then gender before the BMI measurements, and lean
//! body mass checks gender before the optional body fat percentage.

use crate::calculators::{
    bmr, calculate_bmi, calculate_bmr, calculate_body_fat, calculate_ideal_weight,
    calculate_lean_body_mass, calculate_macros, calculate_one_rep_max, calculate_tdee,
    calculate_water_intake, BmiInput, BmiResult, BmrInput, BmrResult, BodyFatInput,
    BodyFatResult, Goal, IdealWeightInput, IdealWeightResult, LeanBodyMassInput,
    LeanBodyMassResult, MacroInput, MacroPercentages, MacroResult, OneRepMaxInput,
    OneRepMaxResult, TdeeInput, TdeeResult, WaterIntakeInput, WaterIntakeResult,
};
use crate::catalog::{resolve_calculator, CalculatorId};
use crate::errors::{CalcResult, ValidationError};
use crate::profile::{ActivityLevel, Climate, Gender};
use crate::validation::{
    require_gender, require_positive_finite, AGE_YEARS, BODY_FAT_PERCENT, BODY_WEIGHT_KG,
    HEIGHT_CM,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::debug;

// ============================================================================
// Raw inputs
// ============================================================================

/// A single loosely typed input value
///
/// JSON `null` reads as [`InputValue::Null`], which counts as not provided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Number(f64),
    Flag(bool),
    Text(String),
    Null,
}

impl InputValue {
    /// Interpret a command line value: number, then `true`/`false`, then text
    pub fn from_arg(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(n) = trimmed.parse::<f64>() {
            return InputValue::Number(n);
        }
        match trimmed {
            "true" => InputValue::Flag(true),
            "false" => InputValue::Flag(false),
            _ => InputValue::Text(raw.to_string()),
        }
    }

    /// Numeric reading; NaN when the value is not a number
    pub fn as_number(&self) -> f64 {
        match self {
            InputValue::Number(n) => *n,
            InputValue::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
            InputValue::Flag(_) | InputValue::Null => f64::NAN,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            InputValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Checkbox reading
    pub fn is_set(&self) -> bool {
        match self {
            InputValue::Flag(b) => *b,
            InputValue::Number(n) => *n != 0.0,
            InputValue::Text(s) => s.trim() == "true",
            InputValue::Null => false,
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            InputValue::Null => true,
            InputValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        InputValue::Number(value)
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        InputValue::Flag(value)
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::Text(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        InputValue::Text(value)
    }
}

/// Inputs keyed by field key (`weight`, `height`, `gender`, ...)
pub type RawInputs = BTreeMap<String, InputValue>;

fn number(inputs: &RawInputs, key: &str) -> f64 {
    inputs.get(key).map_or(f64::NAN, InputValue::as_number)
}

/// Absent and blank values both mean "not provided"
fn optional_number(inputs: &RawInputs, key: &str) -> Option<f64> {
    inputs
        .get(key)
        .filter(|value| !value.is_blank())
        .map(InputValue::as_number)
}

fn flag(inputs: &RawInputs, key: &str) -> bool {
    inputs.get(key).is_some_and(InputValue::is_set)
}

fn text<'a>(inputs: &'a RawInputs, key: &str) -> &'a str {
    inputs.get(key).and_then(InputValue::as_text).unwrap_or("")
}

fn choice<T>(inputs: &RawInputs, key: &str) -> CalcResult<T>
where
    T: FromStr<Err = ValidationError>,
{
    text(inputs, key).trim().parse()
}

fn gender(inputs: &RawInputs) -> CalcResult<Gender> {
    require_gender(text(inputs, "gender").trim())
}

// ============================================================================
// Typed inputs
// ============================================================================

/// Build a [`BmiInput`]; the calculator does its own checks
pub fn bmi_input(inputs: &RawInputs) -> CalcResult<BmiInput> {
    Ok(BmiInput {
        weight_kg: number(inputs, "weight"),
        height_cm: number(inputs, "height"),
    })
}

pub fn bmr_input(inputs: &RawInputs) -> CalcResult<BmrInput> {
    let (weight_kg, height_cm, age_years) = (
        number(inputs, "weight"),
        number(inputs, "height"),
        number(inputs, "age"),
    );
    bmr::validate_measurements(weight_kg, height_cm, age_years)?;
    Ok(BmrInput {
        weight_kg,
        height_cm,
        age_years,
        gender: gender(inputs)?,
    })
}

pub fn tdee_input(inputs: &RawInputs) -> CalcResult<TdeeInput> {
    let bmr = bmr_input(inputs)?;
    Ok(TdeeInput {
        weight_kg: bmr.weight_kg,
        height_cm: bmr.height_cm,
        age_years: bmr.age_years,
        gender: bmr.gender,
        activity_level: choice::<ActivityLevel>(inputs, "activity_level")?,
    })
}

pub fn body_fat_input(inputs: &RawInputs) -> CalcResult<BodyFatInput> {
    let (weight_kg, height_cm, age_years) = (
        number(inputs, "weight"),
        number(inputs, "height"),
        number(inputs, "age"),
    );
    AGE_YEARS.check(age_years, "Age")?;
    let gender = gender(inputs)?;
    BODY_WEIGHT_KG.check(weight_kg, "Weight")?;
    HEIGHT_CM.check(height_cm, "Height")?;
    Ok(BodyFatInput {
        weight_kg,
        height_cm,
        age_years,
        gender,
    })
}

pub fn lean_body_mass_input(inputs: &RawInputs) -> CalcResult<LeanBodyMassInput> {
    let (weight_kg, height_cm) = (number(inputs, "weight"), number(inputs, "height"));
    let body_fat_percentage = optional_number(inputs, "body_fat_percentage");
    BODY_WEIGHT_KG.check(weight_kg, "Weight")?;
    HEIGHT_CM.check(height_cm, "Height")?;
    let gender = gender(inputs)?;
    if let Some(bf) = body_fat_percentage {
        BODY_FAT_PERCENT.check(bf, "Body fat percentage")?;
    }
    Ok(LeanBodyMassInput {
        weight_kg,
        height_cm,
        gender,
        body_fat_percentage,
    })
}

pub fn ideal_weight_input(inputs: &RawInputs) -> CalcResult<IdealWeightInput> {
    let height_cm = number(inputs, "height");
    HEIGHT_CM.check(height_cm, "Height")?;
    Ok(IdealWeightInput {
        height_cm,
        gender: gender(inputs)?,
    })
}

/// Build a [`MacroInput`]
///
/// Supplying any of `protein`, `carbs`, `fat` switches to a custom split,
/// and then all three are required.
pub fn macro_input(inputs: &RawInputs) -> CalcResult<MacroInput> {
    let tdee = number(inputs, "tdee");
    require_positive_finite(tdee, "TDEE")?;

    let keys = ["protein", "carbs", "fat"];
    let custom_split = if keys.iter().any(|key| optional_number(inputs, key).is_some()) {
        let split = MacroPercentages::new(
            number(inputs, "protein"),
            number(inputs, "carbs"),
            number(inputs, "fat"),
        );
        split.validate()?;
        Some(split)
    } else {
        None
    };

    Ok(MacroInput {
        tdee,
        goal: choice::<Goal>(inputs, "goal")?,
        custom_split,
    })
}

pub fn one_rep_max_input(inputs: &RawInputs) -> CalcResult<OneRepMaxInput> {
    Ok(OneRepMaxInput {
        weight_kg: number(inputs, "weight"),
        reps: number(inputs, "reps"),
    })
}

pub fn water_intake_input(inputs: &RawInputs) -> CalcResult<WaterIntakeInput> {
    let weight_kg = number(inputs, "weight");
    BODY_WEIGHT_KG.check(weight_kg, "Weight")?;
    Ok(WaterIntakeInput {
        weight_kg,
        activity_level: choice::<ActivityLevel>(inputs, "activity_level")?,
        climate: choice::<Climate>(inputs, "climate")?,
        high_protein: flag(inputs, "high_protein"),
        pregnant: flag(inputs, "pregnant"),
        breastfeeding: flag(inputs, "breastfeeding"),
    })
}

// ============================================================================
// Dispatch
// ============================================================================

/// Result of any calculator, tagged with the calculation that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", content = "result", rename_all = "kebab-case")]
pub enum CalculationOutput {
    Bmi(BmiResult),
    Bmr(BmrResult),
    Tdee(TdeeResult),
    BodyFat(BodyFatResult),
    LeanBodyMass(LeanBodyMassResult),
    IdealWeight(IdealWeightResult),
    Macros(MacroResult),
    OneRepMax(OneRepMaxResult),
    WaterIntake(WaterIntakeResult),
}

impl CalculationOutput {
    pub fn calculator(&self) -> CalculatorId {
        match self {
            CalculationOutput::Bmi(_) => CalculatorId::Bmi,
            CalculationOutput::Bmr(_) => CalculatorId::Bmr,
            CalculationOutput::Tdee(_) => CalculatorId::Tdee,
            CalculationOutput::BodyFat(_) => CalculatorId::BodyFat,
            CalculationOutput::LeanBodyMass(_) => CalculatorId::LeanBodyMass,
            CalculationOutput::IdealWeight(_) => CalculatorId::IdealWeight,
            CalculationOutput::Macros(_) => CalculatorId::Macros,
            CalculationOutput::OneRepMax(_) => CalculatorId::OneRepMax,
            CalculationOutput::WaterIntake(_) => CalculatorId::WaterIntake,
        }
    }
}

/// Run a typed calculation from raw inputs
pub fn run(calculator: CalculatorId, inputs: &RawInputs) -> CalcResult<CalculationOutput> {
    let output = match calculator {
        CalculatorId::Bmi => CalculationOutput::Bmi(calculate_bmi(&bmi_input(inputs)?)?),
        CalculatorId::Bmr => CalculationOutput::Bmr(calculate_bmr(&bmr_input(inputs)?)?),
        CalculatorId::Tdee => CalculationOutput::Tdee(calculate_tdee(&tdee_input(inputs)?)?),
        CalculatorId::BodyFat => {
            CalculationOutput::BodyFat(calculate_body_fat(&body_fat_input(inputs)?)?)
        }
        CalculatorId::LeanBodyMass => CalculationOutput::LeanBodyMass(calculate_lean_body_mass(
            &lean_body_mass_input(inputs)?,
        )?),
        CalculatorId::IdealWeight => {
            CalculationOutput::IdealWeight(calculate_ideal_weight(&ideal_weight_input(inputs)?)?)
        }
        CalculatorId::Macros => CalculationOutput::Macros(calculate_macros(&macro_input(inputs)?)?),
        CalculatorId::OneRepMax => {
            CalculationOutput::OneRepMax(calculate_one_rep_max(&one_rep_max_input(inputs)?)?)
        }
        CalculatorId::WaterIntake => {
            CalculationOutput::WaterIntake(calculate_water_intake(&water_intake_input(inputs)?)?)
        }
    };
    Ok(output)
}

/// Run the calculator behind a catalog id (`"calories"` runs macros)
pub fn calculate(id: &str, inputs: &RawInputs) -> CalcResult<CalculationOutput> {
    let calculator = resolve_calculator(id)?;
    debug!(id, %calculator, fields = inputs.len(), "dispatching calculation");
    run(calculator, inputs)
}

/// JSON request body: `{"calculator": "bmi", "inputs": {"weight": 70, ...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub calculator: String,
    #[serde(default)]
    pub inputs: RawInputs,
}

impl CalculationRequest {
    pub fn new(calculator: impl Into<String>, inputs: RawInputs) -> Self {
        Self {
            calculator: calculator.into(),
            inputs,
        }
    }

    pub fn run(&self) -> CalcResult<CalculationOutput> {
        calculate(&self.calculator, &self.inputs)
    }
}

pub fn parse_request(json: &str) -> Result<CalculationRequest, serde_json::Error> {
    serde_json::from_str(json)
}
