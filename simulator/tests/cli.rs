//! Integration tests for the crashsim binary.

use std::path::Path;
use std::process::Command;

fn crashsim(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_crashsim"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to run crashsim binary");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (output.status.success(), stdout, stderr)
}

fn write_data(dir: &Path, body: &str) -> String {
    let path = dir.join("multipliers.csv");
    std::fs::write(&path, body).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_run_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path(), "Round,Multiplier\n1,3.0\n2,1.5\n3,2.5\n");

    let (success, stdout, stderr) = crashsim(&["run", "--data", &data, "--json"]);
    assert!(success, "run should succeed. stderr: {}", stderr);

    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");
    assert_eq!(parsed["final_balance"], 1_020.0);
    assert_eq!(parsed["summary"]["rounds"], 3);
    assert_eq!(parsed["summary"]["stop_reason"], "exhausted");
    assert_eq!(parsed["balance_series"].as_array().unwrap().len(), 3);
}

#[test]
fn test_run_text_report_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path(), "Multiplier\n1.2\n1.2\n1.2\n5.0\n");
    let export = dir.path().join("ledger.csv");

    let (success, stdout, stderr) = crashsim(&[
        "run",
        "--data",
        &data,
        "--export",
        export.to_str().unwrap(),
    ]);
    assert!(success, "run should succeed. stderr: {}", stderr);
    assert!(stdout.contains("Final Balance: $930.00"), "stdout: {}", stdout);

    let ledger = std::fs::read_to_string(&export).unwrap();
    let lines: Vec<_> = ledger.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[4], "4,0,2,5,,0,930,Skipped due to loss streak");
}

#[test]
fn test_run_rejects_missing_column() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(dir.path(), "Round,Crash\n1,2.0\n");

    let (success, _, stderr) = crashsim(&["run", "--data", &data]);
    assert!(!success);
    assert!(stderr.contains("Multiplier"), "stderr: {}", stderr);
}

#[test]
fn test_run_rejects_invalid_config() {
    let (success, _, stderr) = crashsim(&["run", "--base-bet=-5"]);
    assert!(!success);
    assert!(stderr.contains("base_bet"), "stderr: {}", stderr);
}

#[test]
fn test_generate_then_sweep() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("synthetic.csv");
    let data = data.to_str().unwrap();

    let (success, _, stderr) = crashsim(&[
        "generate",
        "--synthetic-count",
        "200",
        "--seed",
        "3",
        "--output",
        data,
    ]);
    assert!(success, "generate should succeed. stderr: {}", stderr);
    let written = std::fs::read_to_string(data).unwrap();
    assert!(written.starts_with("Round,Multiplier\n"));
    assert_eq!(written.lines().count(), 201);

    let (success, stdout, stderr) = crashsim(&[
        "sweep",
        "--data",
        data,
        "--cashout-targets",
        "1.5,2,3",
        "--json",
    ]);
    assert!(success, "sweep should succeed. stderr: {}", stderr);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");
    let results = parsed.as_array().unwrap();
    assert_eq!(results.len(), 6);
    assert_eq!(results[0]["config"]["cashout_target"], 1.5);
    assert_eq!(results[0]["config"]["strategy"], "martingale");
    assert_eq!(results[1]["config"]["strategy"], "anti-martingale");
}
