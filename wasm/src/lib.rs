//! Fitness Calculators WASM Module
//!
//! WebAssembly bindings so the browser runs the exact same calculations as
//! the command line tool. Everything crosses the boundary as JSON strings;
//! failures come back as the user-facing validation message.

use fitness_calculators_engine::{
    calculate_bmi, calculate_bmr, calculate_one_rep_max, catalog, default_inputs,
    parse_request, BmiInput, BmrInput, Gender, OneRepMaxInput, ValidationError,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn message(err: ValidationError) -> String {
    err.user_message()
}

/// Run a calculation from a JSON request
///
/// Request: `{"calculator": "bmi", "inputs": {"weight": 70, "height": 175}}`
/// Response: `{"calculator": "bmi", "result": {...}}`
#[wasm_bindgen]
pub fn calculate(request_json: &str) -> Result<String, String> {
    let request = parse_request(request_json).map_err(|e| format!("Invalid request: {}", e))?;
    let output = request.run().map_err(message)?;
    to_json(&output)
}

/// Calculator groups with their field descriptors
#[wasm_bindgen]
pub fn catalog_json() -> Result<String, String> {
    to_json(&catalog())
}

/// Initial form values for a calculator
#[wasm_bindgen]
pub fn default_inputs_json(id: &str) -> Result<String, String> {
    let inputs = default_inputs(id).ok_or_else(|| format!("Unknown calculator: {}", id))?;
    to_json(&inputs)
}

/// BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<String, String> {
    let result = calculate_bmi(&BmiInput { weight_kg, height_cm }).map_err(message)?;
    to_json(&result)
}

/// BMR (Mifflin-St Jeor) with the TDEE table
#[wasm_bindgen]
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: f64, gender: &str) -> Result<String, String> {
    let gender: Gender = gender.parse().map_err(message)?;
    let result = calculate_bmr(&BmrInput {
        weight_kg,
        height_cm,
        age_years,
        gender,
    })
    .map_err(message)?;
    to_json(&result)
}

/// One-rep max from a submaximal set
#[wasm_bindgen]
pub fn one_rep_max(weight_kg: f64, reps: f64) -> Result<String, String> {
    let result = calculate_one_rep_max(&OneRepMaxInput { weight_kg, reps }).map_err(message)?;
    to_json(&result)
}
