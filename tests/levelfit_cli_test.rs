// ABOUTME: Integration tests for the levelfit-cli binary
// ABOUTME: Runs real commands against temporary progression documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for the levelfit-cli binary.
//!
//! stdout carries command results only; logs go to stderr.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::Path;
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

const CLI_BINARY: &str = env!("CARGO_BIN_EXE_levelfit-cli");

/// Run the CLI with a clean configuration environment
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(CLI_BINARY)
        .args(args)
        .env_remove("LEVELFIT_BASE_XP")
        .env_remove("LEVELFIT_MULTIPLIER")
        .env_remove("LEVELFIT_MAX_LEVEL")
        .env_remove("LEVELFIT_DIFFICULTY_CURVE")
        .env("RUST_LOG", "warn")
        .env("LOG_FORMAT", "compact")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn write_state(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("progress.json");
    fs::write(&path, content).unwrap();
    path_str(&path)
}

fn path_str(path: &Path) -> String {
    path.to_str().unwrap().to_owned()
}

#[test]
fn test_cli_help_lists_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0);
    for command in ["thresholds", "exercise-xp", "workout", "preset", "progress"] {
        assert!(stdout.contains(command), "help should mention {command}");
    }
}

#[test]
fn test_thresholds_table() {
    let (exit_code, stdout, _stderr) = run_cli(&["thresholds", "--levels", "3"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("exponential"));
    assert!(stdout.contains("900"));
    assert!(stdout.contains("1620"));
}

#[test]
fn test_exercise_xp_prints_award() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "exercise-xp",
        "--type",
        "strength",
        "--intensity",
        "8",
        "--weight",
        "80",
        "--reps",
        "10",
        "--sets",
        "3",
    ]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "77");
}

#[test]
fn test_workout_from_fresh_state() {
    let (exit_code, stdout, stderr) =
        run_cli(&["workout", "--add", "chest=77", "--add", "triceps=60"]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let document: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(document["level"], 1);
    assert_eq!(document["xp"], 41);
    assert_eq!(document["muscleStats"]["chest"]["xp"], 77);
    assert_eq!(document["muscleStats"]["triceps"]["xp"], 60);
    assert!(document["updatedAt"].is_string());
}

#[test]
fn test_workout_reads_state_file_without_modifying_it() {
    let dir = TempDir::new().unwrap();
    let stored = r#"{"level": 1, "xp": 880, "muscleStats": {"legs": {"level": 1, "xp": 850}}}"#;
    let state = write_state(&dir, stored);

    let (exit_code, stdout, stderr) = run_cli(&["workout", "--state", &state, "--add", "legs=100"]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let document: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(document["muscleStats"]["legs"]["level"], 2);
    assert_eq!(document["muscleStats"]["legs"]["xp"], 50);
    assert_eq!(document["level"], 2);
    assert_eq!(document["xp"], 10);

    assert_eq!(fs::read_to_string(dir.path().join("progress.json")).unwrap(), stored);
}

#[test]
fn test_workout_rejects_negative_amount() {
    let (exit_code, stdout, _stderr) = run_cli(&["workout", "--add", "chest=-5"]);

    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn test_workout_repeated_muscle_keeps_last_amount() {
    let (exit_code, stdout, stderr) =
        run_cli(&["workout", "--add", "chest=10", "--add", "legs=20", "--add", "chest=77.9"]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let document: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(document["muscleStats"]["chest"]["xp"], 77);
    assert_eq!(document["muscleStats"]["legs"]["xp"], 20);
    assert_eq!(document["xp"], 29);
}

#[test]
fn test_workout_rejects_state_above_level_cap() {
    let dir = TempDir::new().unwrap();
    let state = write_state(&dir, r#"{"level": 51, "xp": 0}"#);

    let (exit_code, stdout, stderr) = run_cli(&["workout", "--state", &state, "--add", "chest=5"]);

    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("at most 50"), "{stderr}");
}

#[test]
fn test_workout_rejects_unknown_muscle() {
    let (exit_code, _stdout, stderr) = run_cli(&["workout", "--add", "wings=5"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("wings"));
}

#[test]
fn test_preset_applied_repeatedly() {
    let (exit_code, stdout, stderr) = run_cli(&["preset", "chest-triceps", "--times", "2"]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let document: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(document["muscleStats"]["chest"]["xp"], 208);
    assert_eq!(document["muscleStats"]["triceps"]["xp"], 208);
    assert_eq!(document["xp"], 124);
}

#[test]
fn test_progress_json_output() {
    let dir = TempDir::new().unwrap();
    let state = write_state(&dir, r#"{"level": 1, "xp": 450}"#);

    let (exit_code, stdout, stderr) = run_cli(&["progress", "--state", &state, "--json"]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let progress: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(progress["overall"]["xp_to_next_level"], 450);
    assert_eq!(progress["overall"]["progress_percentage"], 50.0);
    assert_eq!(progress["muscles"].as_array().unwrap().len(), 7);
    assert_eq!(progress["muscles"][0]["rank"], "beginner");
}

#[test]
fn test_progress_rejects_invalid_document() {
    let dir = TempDir::new().unwrap();
    let state = write_state(&dir, r#"{"level": 0}"#);

    let (exit_code, _stdout, _stderr) = run_cli(&["progress", "--state", &state]);

    assert_ne!(exit_code, 0);
}

#[test]
fn test_reset_prints_initial_document() {
    let (exit_code, stdout, _stderr) = run_cli(&["reset"]);

    assert_eq!(exit_code, 0);
    let document: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(document["level"], 1);
    assert_eq!(document["xp"], 0);
    assert_eq!(document["muscleStats"]["core"]["nextLevelXp"], 900);
}
