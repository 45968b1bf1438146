//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated HOME so config writes land
//! in a temporary directory.

use std::io::Write;
use std::process::{Command, Stdio};

const REQUEST: &str = r#"{
    "events": [
        {"name": "Standup", "startTime": "2020-06-25T09:30:00Z", "endTime": "2020-06-25T10:00:00Z"},
        {"name": "Lunch", "startTime": "2020-06-25T11:30:00Z", "endTime": "2020-06-25T12:00:00Z"},
        {"name": "Offsite", "startTime": "2020-06-25T13:00:00Z", "endTime": "2020-06-25T17:00:00Z"}
    ],
    "tasks": [
        {"name": "Task A", "description": "Write report", "duration": 120, "taskPriority": 1},
        {"name": "Task B", "duration": 20, "taskPriority": 3}
    ],
    "startTime": "2020-06-25T09:00:00Z",
    "endTime": "2020-06-25T17:00:00Z",
    "algorithmType": "LONGEST_TASK_FIRST"
}"#;

/// Run the CLI with `stdin` piped in and return (stdout, stderr, exit code).
fn run_cli(home: &std::path::Path, args: &[&str], stdin: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_slotfill"))
        .args(args)
        .env("HOME", home)
        .env_remove("SLOTFILL_ENV")
        .env_remove("SLOTFILL_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    // The child may exit on a usage error before reading stdin.
    let _ = child.stdin.take().expect("stdin is piped").write_all(stdin.as_bytes());

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);
    (stdout, stderr, code)
}

#[test]
fn test_schedule_from_stdin() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) = run_cli(home.path(), &["schedule"], REQUEST);
    assert_eq!(code, 0, "schedule failed: {stderr}");

    let response: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let names: Vec<&str> = response
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Task A (Part 1)", "Task A (Part 2)", "Task B"]);
    assert_eq!(response[2]["startTime"], "2020-06-25T12:00:00Z");
    assert_eq!(response[2]["description"], serde_json::Value::Null);
}

#[test]
fn test_schedule_from_file_with_algorithm_override() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("request.json");
    std::fs::write(&input, REQUEST).unwrap();

    let (stdout, stderr, code) = run_cli(
        home.path(),
        &["schedule", "--input", input.to_str().unwrap(), "--algorithm", "shortest-task-first", "--backing", "linked"],
        "",
    );
    assert_eq!(code, 0, "schedule failed: {stderr}");

    let response: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let placed = response.as_array().unwrap();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0]["name"], "Task B");
    assert_eq!(placed[0]["startTime"], "2020-06-25T09:00:00Z");
}

#[test]
fn test_schedule_highest_priority_first_is_empty() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["schedule", "-a", "HIGHEST_PRIORITY_FIRST"], REQUEST);
    assert_eq!(code, 0);
    assert_eq!(serde_json::from_str::<serde_json::Value>(&stdout).unwrap(), serde_json::json!([]));
}

#[test]
fn test_schedule_unknown_algorithm_fails() {
    let home = tempfile::tempdir().unwrap();
    let request = REQUEST.replace("LONGEST_TASK_FIRST", "RANDOM");
    let (_, stderr, code) = run_cli(home.path(), &["schedule"], &request);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("RANDOM"));
}

#[test]
fn test_schedule_malformed_json_fails() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["schedule"], "{not json");
    assert_eq!(code, 1);
    assert!(stderr.starts_with("error:"));
}

#[test]
fn test_free_lists_ranges() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["free"], REQUEST);
    assert_eq!(code, 0);
    assert!(stdout.contains("2020-06-25T09:00:00Z - 2020-06-25T09:30:00Z"));
    assert!(stdout.contains("Total: 180 min"));
}

#[test]
fn test_free_json() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["free", "--json"], REQUEST);
    assert_eq!(code, 0);
    let ranges: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(ranges.as_array().unwrap().len(), 3);
    assert_eq!(ranges[1]["start"], "2020-06-25T10:00:00Z");
    assert_eq!(ranges[1]["end"], "2020-06-25T11:30:00Z");
}

#[test]
fn test_queue_orders_by_strategy() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["queue", "--strategy", "HIGHEST_PRIORITY_FIRST", "--json"], REQUEST);
    assert_eq!(code, 0);
    let tasks: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(tasks[0]["name"], "Task B");
    assert_eq!(tasks[1]["name"], "Task A");

    let (stdout, _, code) = run_cli(home.path(), &["queue", "-s", "SHORTEST_TASK_FIRST"], REQUEST);
    assert_eq!(code, 0);
    let first = stdout.lines().next().unwrap();
    assert!(first.contains("Task B"), "first line: {first}");
}

#[test]
fn test_config_set_get_reset() {
    let home = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "scheduler.default_algorithm"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "SHORTEST_TASK_FIRST");

    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "scheduler.interval_backing", "linked"], "");
    assert_eq!(code, 0, "set failed: {stderr}");
    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "scheduler.interval_backing"], "");
    assert_eq!(stdout.trim(), "linked");
    assert!(home.path().join(".config/slotfill/config.toml").exists());

    let (stdout, _, code) = run_cli(home.path(), &["config", "list"], "");
    assert_eq!(code, 0);
    let listed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(listed["scheduler"]["interval_backing"], "linked");

    let (_, _, code) = run_cli(home.path(), &["config", "reset"], "");
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "scheduler.interval_backing"], "");
    assert_eq!(stdout.trim(), "array");
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "scheduler.colour", "red"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("scheduler.colour"));

    let (_, _, code) = run_cli(home.path(), &["config", "get", "nope"], "");
    assert_eq!(code, 1);
}

#[test]
fn test_default_algorithm_from_config() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["config", "set", "scheduler.default_algorithm", "LONGEST_TASK_FIRST"], "");
    assert_eq!(code, 0);

    let request = REQUEST.replace(r#""algorithmType": "LONGEST_TASK_FIRST""#, r#""algorithmType": null"#);
    let (stdout, _, code) = run_cli(home.path(), &["schedule"], &request);
    assert_eq!(code, 0);
    let response: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(response[0]["name"], "Task A (Part 1)");
}

#[test]
fn test_schedule_compact_overrides_pretty_config() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["schedule", "--compact"], REQUEST);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim_end().lines().count(), 1);
    let response: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(response.as_array().unwrap().len(), 3);

    let (stdout, _, code) = run_cli(home.path(), &["schedule"], REQUEST);
    assert_eq!(code, 0);
    assert!(stdout.trim_end().lines().count() > 1);

    let (_, _, code) = run_cli(home.path(), &["schedule", "--compact", "--pretty"], REQUEST);
    assert_eq!(code, 2);
}

#[test]
fn test_free_accepts_backing() {
    let home = tempfile::tempdir().unwrap();
    let (array, _, code) = run_cli(home.path(), &["free", "--json", "--backing", "array"], REQUEST);
    assert_eq!(code, 0);
    let (linked, _, code) = run_cli(home.path(), &["free", "--json", "--backing", "linked"], REQUEST);
    assert_eq!(code, 0);
    assert_eq!(array, linked);

    let (_, _, code) = run_cli(home.path(), &["free", "--backing", "tree"], REQUEST);
    assert_eq!(code, 2);
}
