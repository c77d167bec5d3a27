//! Fitness Calculators Engine
//!
//! Pure, deterministic health and fitness calculations (BMI, BMR, TDEE,
//! body fat, lean body mass, ideal weight, macros, one-rep max and water
//! intake) shared by the command line tool and the WASM module.
//!
//! Every calculator validates its input and returns either a result record
//! or a [`ValidationError`] whose message can be shown to the user as is.

pub mod calculators;
pub mod catalog;
pub mod dispatch;
pub mod errors;
pub mod profile;
pub mod rounding;
pub mod validation;

// Re-export commonly used items
pub use calculators::*;
pub use catalog::{
    calculators as catalog_entries, catalog, default_inputs, find_calculator,
    resolve_calculator, CalculatorDescriptor, CalculatorGroup, CalculatorId, FieldDefault,
    FieldKind, FieldSpec,
};
pub use dispatch::{
    calculate, parse_request, CalculationOutput, CalculationRequest, InputValue, RawInputs,
};
pub use errors::*;
pub use profile::{ActivityLevel, Climate, Gender};
