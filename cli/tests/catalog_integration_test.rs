//! Integration tests for the list, describe and config commands

mod common;

use common::{run, run_json, test_config};
use fitness_calculators_cli::{execute, Command};

#[test]
fn test_list_groups() {
    let output = run_json(&["list"]);
    let groups = output.as_array().unwrap();

    let ids: Vec<&str> = groups.iter().map(|g| g["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["body", "energy", "wellness", "strength", "coming-soon"]);

    let soon = groups[4]["calculators"].as_array().unwrap();
    assert!(soon.iter().all(|c| c["coming_soon"] == true));
}

#[test]
fn test_describe_includes_default_inputs() {
    let output = run_json(&["describe", "body-fat"]);

    assert_eq!(output["id"], "body-fat");
    assert_eq!(output["full_name"], "Body Fat Percentage");
    assert_eq!(output["inputs"].as_array().map(Vec::len), Some(4));
    assert_eq!(output["default_inputs"]["age"], 30.0);
    assert_eq!(output["default_inputs"]["gender"], "male");
}

#[test]
fn test_describe_coming_soon() {
    let output = run_json(&["describe", "heart-rate-zones"]);

    assert_eq!(output["coming_soon"], true);
    assert!(output["calculator"].is_null());
}

#[test]
fn test_describe_unknown_exits_2() {
    let err = run(&["describe", "nope"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_config_prints_toml() {
    let output = execute(&Command::Config, &test_config(), std::io::empty()).unwrap();

    assert!(output.contains("[output]"));
    assert!(output.contains("pretty = false"));
    assert!(output.contains("level = \"info\""));
}
