//! Corruption recovery tests for the forge binary.
//!
//! These tests verify the system fails open to default progress when the
//! persisted state is corrupted, truncated, or from an unknown schema
//! version, without surfacing an error to the user.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("forge"))
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_corrupted_progress_file_falls_back_to_defaults() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    fs::write(data_dir.join("progress.json"), "{ invalid json }}}}").unwrap();

    cli()
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Current streak: 0 days"));
}

#[test]
fn test_truncated_progress_file_falls_back_to_defaults() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    fs::write(data_dir.join("progress.json"), "{\"version\":1,\"progr").unwrap();

    cli()
        .arg("list")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("WEEK 1 SCHEDULE"));
}

#[test]
fn test_unknown_schema_version_falls_back_to_defaults() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    let future = r#"{"version":99,"progress":{"current_week":5,"completed_days":[],"completed_exercises":{},"streak":12,"last_workout_date":null}}"#;
    fs::write(data_dir.join("progress.json"), future).unwrap();

    cli()
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 1 in progress"))
        .stdout(predicate::str::contains("Current streak: 0 days"));
}

#[test]
fn test_overfull_day_record_falls_back_to_defaults() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    // Parses fine, but records more completions for day_1 than it schedules
    let overfull = r#"{"version":1,"progress":{"current_week":1,"completed_days":[],"completed_exercises":{"day_1":["a","b","c","d","e"]},"streak":3,"last_workout_date":null}}"#;
    fs::write(data_dir.join("progress.json"), overfull).unwrap();

    cli()
        .arg("stats")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Streak:          0 days"))
        .stdout(predicate::str::contains("Total completed: 0 exercises"));
}

#[test]
fn test_recovery_then_normal_operation() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    fs::write(data_dir.join("progress.json"), "not even json").unwrap();

    // Training after corruption starts from a clean slate and rewrites the file
    cli()
        .arg("start")
        .arg("day_1")
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--auto-complete")
        .assert()
        .success()
        .stdout(predicate::str::contains("DAY COMPLETE"));

    let contents = fs::read_to_string(data_dir.join("progress.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["version"], 1);
    assert_eq!(json["progress"]["completed_days"][0], "day_1");
}
