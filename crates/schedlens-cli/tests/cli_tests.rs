//! Integration tests for the `schedlens` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the dates, analyze,
//! and check subcommands through the actual binary, including stdin/file
//! input, exit codes, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the schedules.json fixture.
fn fixture_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/schedules.json")
}

/// Helper: read the schedules.json fixture as a string.
fn fixture_json() -> String {
    std::fs::read_to_string(fixture_path()).expect("schedules.json fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// Dates subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn dates_from_file_lists_conflicted_dates_sorted() {
    Command::cargo_bin("schedlens")
        .unwrap()
        .args(["dates", "-i", fixture_path()])
        .assert()
        .success()
        .stdout("2025-12-15\n2025-12-19\n2025-12-21\n");
}

#[test]
fn dates_from_stdin() {
    Command::cargo_bin("schedlens")
        .unwrap()
        .arg("dates")
        .write_stdin(fixture_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-12-19"));
}

#[test]
fn dates_omits_clean_dates() {
    Command::cargo_bin("schedlens")
        .unwrap()
        .args(["dates", "-i", fixture_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-12-20").not())
        .stdout(predicate::str::contains("2025-12-29").not());
}

#[test]
fn dates_empty_collection_prints_nothing() {
    Command::cargo_bin("schedlens")
        .unwrap()
        .arg("dates")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("");
}

// ─────────────────────────────────────────────────────────────────────────────
// Analyze subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn analyze_reports_overlaps_with_formatted_times() {
    // 2025-12-15: Team meeting 10:00-12:00 overlaps Doctor appointment
    // 11:30-13:00 on 11:30-12:00 (30 min).
    Command::cargo_bin("schedlens")
        .unwrap()
        .args(["analyze", "-i", fixture_path(), "--date", "2025-12-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis for 2025-12-15"))
        .stdout(predicate::str::contains("Schedules: 5"))
        .stdout(predicate::str::contains("Team meeting  10:00 ~ 12:00"))
        .stdout(predicate::str::contains("overlap 11:30 ~ 12:00 (30 min)"));
}

#[test]
fn analyze_marks_conflicted_schedules_only() {
    // Workout (18:24-19:00) touches nothing on 2025-12-15.
    Command::cargo_bin("schedlens")
        .unwrap()
        .args(["analyze", "-i", fixture_path(), "--date", "2025-12-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[!] Team meeting"))
        .stdout(predicate::str::contains("[!] Workout").not())
        .stdout(predicate::str::contains("Workout  18:24 ~ 19:00"));
}

#[test]
fn analyze_renders_past_day_boundary_minutes_unwrapped() {
    // Project work ends at minute 1377 = 22:57.
    Command::cargo_bin("schedlens")
        .unwrap()
        .args(["analyze", "-i", fixture_path(), "--date", "2025-12-19"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project work  14:25 ~ 22:57"));
}

#[test]
fn analyze_clean_date_reports_no_overlaps() {
    Command::cargo_bin("schedlens")
        .unwrap()
        .args(["analyze", "-i", fixture_path(), "--date", "2025-12-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schedules: 1"))
        .stdout(predicate::str::contains("No overlapping schedules"));
}

#[test]
fn analyze_unknown_date_reports_empty() {
    Command::cargo_bin("schedlens")
        .unwrap()
        .args(["analyze", "-i", fixture_path(), "--date", "2026-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schedules: 0"))
        .stdout(predicate::str::contains("No schedules on this date"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_exits_nonzero_when_conflicts_exist() {
    Command::cargo_bin("schedlens")
        .unwrap()
        .args(["check", "-i", fixture_path()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("conflicts found"));
}

#[test]
fn check_clean_date_exits_zero() {
    Command::cargo_bin("schedlens")
        .unwrap()
        .args(["check", "-i", fixture_path(), "--date", "2025-12-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no conflicts"));
}

#[test]
fn check_conflicted_date_exits_one() {
    Command::cargo_bin("schedlens")
        .unwrap()
        .args(["check", "-i", fixture_path(), "--date", "2025-12-21"])
        .assert()
        .failure()
        .code(1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn invalid_json_fails_with_context() {
    Command::cargo_bin("schedlens")
        .unwrap()
        .arg("dates")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse schedule JSON"));
}

#[test]
fn missing_input_file_fails_with_path() {
    Command::cargo_bin("schedlens")
        .unwrap()
        .args(["dates", "-i", "/nonexistent/schedules.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/schedules.json"));
}
