//! Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use fitness_calculators_wasm::{calculate, one_rep_max};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn calculate_runs_in_browser() {
    let json = calculate(r#"{"calculator": "ideal-weight", "inputs": {"height": 180, "gender": "female"}}"#)
        .unwrap();
    assert!(json.contains("\"calculator\":\"ideal-weight\""));
}

#[wasm_bindgen_test]
fn validation_message_crosses_boundary() {
    assert_eq!(one_rep_max(0.0, 5.0).unwrap_err(), "Weight must be greater than 0");
}
