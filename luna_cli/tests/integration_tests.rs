//! Integration tests for the luna binary.
//!
//! These tests drive the interactive menu through scripted stdin and verify:
//! - Cycle recording with symptom advisories
//! - Prediction output and seeding
//! - Irregularity warnings
//! - Input validation and recovery

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a scratch directory for config files
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("luna"))
}

/// Write a config file so tests never pick up the developer's own
fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    path
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal menstrual cycle log"));
}

#[test]
fn test_quit_immediately() {
    let dir = setup_test_dir();
    let config = write_config(&dir, "");

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Add period cycle"))
        .stdout(predicate::str::contains("5. Quit"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn test_track_subcommand_runs_the_session() {
    let dir = setup_test_dir();
    let config = write_config(&dir, "");

    cli()
        .arg("--config")
        .arg(&config)
        .arg("track")
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter your choice:"));
}

#[test]
fn test_add_cycle_and_show_log() {
    let dir = setup_test_dir();
    let config = write_config(&dir, "");

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\n01-01-2024\n29-01-2024\ncramps\n3\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cycle recorded (28 days). Average cycle length is now 28 days.",
        ))
        .stdout(predicate::str::contains("----- Health Reminders -----"))
        .stdout(predicate::str::contains(
            "Tip: Try heat therapy or light exercise to relieve cramps.",
        ))
        .stdout(predicate::str::contains("Start Date"))
        .stdout(predicate::str::contains("01-01-2024"))
        .stdout(predicate::str::contains("29-01-2024"));
}

#[test]
fn test_add_without_symptoms_shows_no_reminders() {
    let dir = setup_test_dir();
    let config = write_config(&dir, "");

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\n01-01-2024\n29-01-2024\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cycle recorded (28 days)"))
        .stdout(predicate::str::contains("Health Reminders").not());
}

#[test]
fn test_symptom_list_splits_on_commas() {
    let dir = setup_test_dir();
    let config = write_config(&dir, "");

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\n01-01-2024\n29-01-2024\ncramps, nausea\n3\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Tip: Try heat therapy or light exercise to relieve cramps.",
        ))
        .stdout(predicate::str::contains(
            "Tip: Ginger tea may help soothe nausea.",
        ))
        .stdout(predicate::str::contains("cramps, nausea"));
}

#[test]
fn test_malformed_date_reprompts() {
    let dir = setup_test_dir();
    let config = write_config(&dir, "");

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\nnot-a-date\n01-01-2024\n29-01-2024\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("expected dd-mm-yyyy"))
        .stdout(predicate::str::contains("Cycle recorded (28 days)"));
}

#[test]
fn test_reversed_range_is_rejected() {
    let dir = setup_test_dir();
    let config = write_config(&dir, "");

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\n10-01-2024\n05-01-2024\n\n3\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cycle not recorded:"))
        .stdout(predicate::str::contains("precedes"))
        .stdout(predicate::str::contains("No cycles recorded yet."));
}

#[test]
fn test_predict_without_data() {
    let dir = setup_test_dir();
    let config = write_config(&dir, "");

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No period data available to predict future periods.",
        ));
}

#[test]
fn test_predict_after_adding_a_cycle() {
    let dir = setup_test_dir();
    let config = write_config(&dir, "");

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\n01-01-2024\n29-01-2024\n\n2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("----- Predicted Future Periods -----"))
        .stdout(predicate::str::contains("Predicted Period 1:"))
        .stdout(predicate::str::contains("Predicted Period 2:"))
        .stdout(predicate::str::contains("Ovulation Date:"))
        .stdout(predicate::str::contains("Fertile Window:"));
}

#[test]
fn test_seeded_predictions_are_reproducible() {
    let dir = setup_test_dir();
    let config = write_config(&dir, "");

    let run = || {
        cli()
            .arg("--config")
            .arg(&config)
            .arg("--seed")
            .arg("42")
            .write_stdin("1\n01-01-2024\n29-01-2024\n\n2\n2\n5\n")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}

#[test]
fn test_irregular_gap_triggers_warning() {
    let dir = setup_test_dir();
    let config = write_config(&dir, "");

    // Two 28-day cycles keep the average at 28; the 40-day start gap
    // deviates by 12 and is flagged.
    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\n01-01-2024\n29-01-2024\n\n1\n10-02-2024\n09-03-2024\n\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: Cycle from 01-01-2024 to 10-02-2024 is irregular (40 day gap).",
        ))
        .stdout(predicate::str::contains(
            "Consider tracking your symptoms or consulting a healthcare professional.",
        ));
}

#[test]
fn test_regular_cycles_pass_the_check() {
    let dir = setup_test_dir();
    let config = write_config(&dir, "");

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\n01-01-2024\n29-01-2024\n\n1\n29-01-2024\n26-02-2024\n\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No irregular cycles detected."))
        .stdout(predicate::str::contains("Warning:").not());
}

#[test]
fn test_irregularity_check_needs_two_cycles() {
    let dir = setup_test_dir();
    let config = write_config(&dir, "");

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Not enough data to check for irregular cycles.",
        ));
}

#[test]
fn test_unrecognized_menu_choice() {
    let dir = setup_test_dir();
    let config = write_config(&dir, "");

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("9\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unrecognized choice: 9"));
}

#[test]
fn test_session_ends_cleanly_on_eof() {
    let dir = setup_test_dir();
    let config = write_config(&dir, "");

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye."));
}
