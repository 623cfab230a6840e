//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with a seeded simulation and a temporary
//! config file, then verify outputs.

use std::path::Path;
use std::process::Command;

const BASELINE: &str = r#"{
    "light": {"1": 3.0, "2": 4.0, "3": 2.0, "4": 60.0},
    "sound": {"1": 30.0, "2": 31.0, "3": 29.0, "4": 30.0},
    "temperature": {"1": 19.0, "2": 19.5, "3": 20.0, "4": 19.5},
    "movement": {"1": 10.0, "2": 80.0, "3": 12.0, "4": 9.0}
}"#;

/// Run the CLI with an isolated config file and return (code, stdout, stderr).
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[simulation]\nnights = 40\nseed = 42\n").expect("write config");
    run_cli_with_config(&config, args)
}

fn run_cli_with_config(config: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_sleepsim"))
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_simulate_shows_three_nights() {
    let (code, stdout, _) = run_cli(&["simulate"]);
    assert_eq!(code, 0, "simulate failed");
    assert!(stdout.contains("Simulated 40 nights."));
    assert!(stdout.contains("Sleep analysis for night 3"));
    assert!(!stdout.contains("Sleep analysis for night 4"));
}

#[test]
fn test_simulate_json_is_deterministic() {
    let (code, first, _) = run_cli(&["simulate", "--json", "--show", "2"]);
    assert_eq!(code, 0);
    let (_, second, _) = run_cli(&["simulate", "--json", "--show", "2"]);
    assert_eq!(first, second);

    let parsed: serde_json::Value = serde_json::from_str(&first).unwrap();
    let overviews = parsed.as_array().unwrap();
    assert_eq!(overviews.len(), 2);
    assert_eq!(overviews[0]["night_id"], 1);
}

#[test]
fn test_enough_sleep_json() {
    let (code, stdout, _) = run_cli(&["enough-sleep", "--target-hours", "8", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["target_hours"], 8);
    assert_eq!(parsed["last_week"]["nights_counted"], 7);
    assert_eq!(parsed["last_month"]["nights_counted"], 30);
}

#[test]
fn test_enough_sleep_rejects_out_of_range_target() {
    let (code, _, _) = run_cli(&["enough-sleep", "--target-hours", "25"]);
    assert_ne!(code, 0);
    let (code, _, _) = run_cli(&["enough-sleep", "--target-hours", "0"]);
    assert_ne!(code, 0);
}

#[test]
fn test_quality_multiple_nights() {
    let (code, stdout, _) = run_cli(&["quality", "--night", "1", "--night", "40"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Sleep environment on night 1"));
    assert!(stdout.contains("Sleep environment on night 40"));
    assert!(stdout.contains("Analyzing temperature levels"));
    assert!(!stdout.contains("Analyzing movement levels"));
}

#[test]
fn test_quality_unknown_night_fails() {
    let (code, _, stderr) = run_cli(&["quality", "--night", "41"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Night 41 not found"));

    let (code, _, _) = run_cli(&["quality", "--night", "0"]);
    assert_eq!(code, 1);
}

#[test]
fn test_analyze_requires_baseline() {
    let (code, _, stderr) = run_cli(&["analyze"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("--baseline"));
}

#[test]
fn test_analyze_with_baseline() {
    let dir = tempfile::tempdir().unwrap();
    let baseline = dir.path().join("baseline.json");
    std::fs::write(&baseline, BASELINE).unwrap();

    let path = baseline.to_str().unwrap();
    let (code, stdout, _) = run_cli(&["--baseline", path, "analyze", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["light"]["max"], 60.0);
    assert_eq!(parsed["light"]["max_minute"], 4);
    assert_eq!(parsed["light"]["is_out_of_range"], true);
    assert!(parsed.get("movement").is_some());
}

#[test]
fn test_analyze_metric_filter() {
    let dir = tempfile::tempdir().unwrap();
    let baseline = dir.path().join("baseline.json");
    std::fs::write(&baseline, BASELINE).unwrap();
    let path = baseline.to_str().unwrap();

    let (code, stdout, _) = run_cli(&[
        "--baseline", path, "analyze", "--metric", "light", "--metric", "temp", "--json",
    ]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let keys: Vec<_> = parsed.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["light", "temperature"]);

    let (code, _, stderr) = run_cli(&["--baseline", path, "analyze", "--metric", "humidity"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("unknown metric 'humidity'"));
}

#[test]
fn test_config_show_reflects_file() {
    let (code, stdout, _) = run_cli(&["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("nights = 40"));
    assert!(stdout.contains("seed = 42"));
}

#[test]
fn test_zero_nights_config_fails_before_prompting() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[simulation]\nnights = 0\n").unwrap();

    let (code, stdout, stderr) = run_cli_with_config(&config, &["interactive"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("simulation.nights must be at least 1"));
    assert!(!stdout.contains("What is your name?"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli_with_config(&dir.path().join("nope.toml"), &["simulate"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("cannot read config"));
}
