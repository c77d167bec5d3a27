//! Subcommand handlers
//!
//! Each handler returns the text to print on stdout, so the whole command
//! surface can be driven in-process.

use crate::cli::Command;
use crate::config::{AppConfig, InputDefaults};
use crate::error::{CliError, CliResult};
use fitness_calculators_engine::{
    calculate, catalog, default_inputs, find_calculator, CalculatorDescriptor, InputValue,
    RawInputs, ValidationError, ValidationErrorKind,
};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Run a parsed subcommand; `stdin` backs `--json -`
pub fn execute<R: Read>(command: &Command, config: &AppConfig, stdin: R) -> CliResult<String> {
    debug!(command = command.name(), "executing command");
    match command {
        Command::Calc { id, inputs, json } => {
            let json_inputs = json
                .as_deref()
                .map(|path| read_json_inputs(path, stdin))
                .transpose()?;
            let pairs = inputs
                .iter()
                .map(|pair| parse_pair(pair))
                .collect::<CliResult<Vec<_>>>()?;
            run_calc(config, id, json_inputs, pairs)
        }
        Command::List => render(&catalog(), config.output.pretty),
        Command::Describe { id } => run_describe(config, id),
        Command::Config => Ok(toml::to_string_pretty(config)?),
    }
}

/// Split `KEY=VALUE`, interpreting the value as number, flag or text
pub fn parse_pair(pair: &str) -> CliResult<(String, InputValue)> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| CliError::Input(format!("expected KEY=VALUE, got \"{}\"", pair)))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::Input(format!("missing key in \"{}\"", pair)));
    }
    Ok((key.to_string(), InputValue::from_arg(value)))
}

/// Read a JSON object of inputs from a file, or from `stdin` for `-`
pub fn read_json_inputs<R: Read>(path: &Path, mut stdin: R) -> CliResult<RawInputs> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        stdin.read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&text)?)
}

/// Merge inputs: configured defaults < JSON object < command line pairs
///
/// Defaults only fill fields the calculator actually has.
pub fn build_inputs(
    descriptor: Option<&CalculatorDescriptor>,
    defaults: &InputDefaults,
    json: Option<RawInputs>,
    pairs: Vec<(String, InputValue)>,
) -> RawInputs {
    let mut inputs = RawInputs::new();
    if let Some(descriptor) = descriptor {
        for (key, value) in defaults.entries() {
            if descriptor.field(key).is_some() {
                inputs.insert(key.to_string(), value.into());
            }
        }
    }
    inputs.extend(json.unwrap_or_default());
    inputs.extend(pairs);
    inputs
}

fn run_calc(
    config: &AppConfig,
    id: &str,
    json: Option<RawInputs>,
    pairs: Vec<(String, InputValue)>,
) -> CliResult<String> {
    let descriptor = find_calculator(id);
    let inputs = build_inputs(descriptor, &config.defaults, json, pairs);

    if let Some(descriptor) = descriptor {
        for key in inputs.keys().filter(|key| descriptor.field(key).is_none()) {
            warn!(calculator = id, key = %key, "ignoring unknown input");
        }
    }

    let output = calculate(id, &inputs)?;
    debug!(calculator = %output.calculator(), "calculation complete");
    render(&output, config.output.pretty)
}

#[derive(Serialize)]
struct Description<'a> {
    #[serde(flatten)]
    descriptor: &'a CalculatorDescriptor,
    default_inputs: RawInputs,
}

fn run_describe(config: &AppConfig, id: &str) -> CliResult<String> {
    let descriptor = find_calculator(id).ok_or_else(|| {
        ValidationError::new("Calculator", ValidationErrorKind::UnknownCalculator(id.to_string()))
    })?;
    let description = Description {
        descriptor,
        default_inputs: default_inputs(id).unwrap_or_default(),
    };
    render(&description, config.output.pretty)
}

fn render<T: Serialize>(value: &T, pretty: bool) -> CliResult<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("weight=70", "weight", InputValue::Number(70.0))]
    #[case("gender=female", "gender", InputValue::Text("female".to_string()))]
    #[case("pregnant=true", "pregnant", InputValue::Flag(true))]
    #[case(" age = 30", "age", InputValue::Number(30.0))]
    fn test_parse_pair(#[case] raw: &str, #[case] key: &str, #[case] value: InputValue) {
        assert_eq!(parse_pair(raw).unwrap(), (key.to_string(), value));
    }

    #[rstest]
    #[case("weight")]
    #[case("=70")]
    fn test_parse_pair_rejects(#[case] raw: &str) {
        let err = parse_pair(raw).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_build_inputs_precedence() {
        let defaults = InputDefaults {
            gender: Some("female".to_string()),
            goal: Some("lose".to_string()),
            ..InputDefaults::default()
        };
        let json: RawInputs = [("weight".to_string(), InputValue::Number(60.0))]
            .into_iter()
            .collect();
        let pairs = vec![("weight".to_string(), InputValue::Number(65.0))];

        let inputs = build_inputs(find_calculator("bmr"), &defaults, Some(json), pairs);
        assert_eq!(inputs.get("weight"), Some(&InputValue::Number(65.0)));
        assert_eq!(inputs.get("gender"), Some(&InputValue::Text("female".to_string())));
        // BMR has no goal field
        assert!(!inputs.contains_key("goal"));
    }

    #[test]
    fn test_read_json_from_stdin() {
        let inputs = read_json_inputs(Path::new("-"), r#"{"weight": 70, "gender": "male"}"#.as_bytes())
            .unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs["weight"], InputValue::Number(70.0));
    }
}
