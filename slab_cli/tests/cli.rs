//! Integration tests for the slab_cli binary
//!
//! These tests run the CLI end-to-end using assert_cmd.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn slab_cli() -> Command {
    Command::cargo_bin("slab_cli").unwrap()
}

fn request_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", json).unwrap();
    file
}

#[test]
fn analyze_file_prints_report_and_json() {
    let file = request_file(r#"{ "M_u": 6.0, "V_u": 4.0, "M_s": 4.0 }"#);
    slab_cli()
        .args(["analyze", "--input"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ONE-WAY SLAB DESIGN RESULTS"))
        .stdout(predicate::str::contains("RESULT: PASS"))
        .stdout(predicate::str::contains("\"phiMn\""));
}

#[test]
fn analyze_stdin_json_only() {
    let output = slab_cli()
        .args(["analyze", "--json"])
        .write_stdin("{}")
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["gamma_er"], "UndefinedRatio");
    assert_eq!(value["cracked"], false);
}

#[test]
fn analyze_reports_failing_check() {
    let file = request_file(r#"{ "M_u": 20.0 }"#);
    slab_cli()
        .args(["analyze", "--input"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[FAIL]"))
        .stdout(predicate::str::contains("RESULT: FAIL"));
}

#[test]
fn unknown_bar_size_exits_with_error_json() {
    slab_cli()
        .args(["analyze", "--json"])
        .write_stdin(r##"{ "size": "#14" }"##)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown bar size"))
        .stderr(predicate::str::contains("\"type\": \"UnknownBarSize\""));
}

#[test]
fn missing_input_file_fails() {
    slab_cli()
        .args(["analyze", "--input", "/nonexistent/request.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File error"));
}

#[test]
fn criteria_file_changes_checks() {
    // Raising the ductility limit past the section's strain fails the check
    let criteria = request_file(r#"{ "tension_controlled_strain": 0.05 }"#);
    let output = slab_cli()
        .args(["analyze", "--json", "--criteria"])
        .arg(criteria.path())
        .write_stdin(r#"{ "M_u": 6.0 }"#)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["ductility"], false);
}

#[test]
fn defaults_round_trip_through_analyze() {
    let output = slab_cli().arg("defaults").output().unwrap();
    assert!(output.status.success());
    let defaults = String::from_utf8(output.stdout).unwrap();
    assert!(defaults.contains("\"A615, Grade 60\""));

    slab_cli()
        .args(["analyze", "--json"])
        .write_stdin(defaults)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"steel_area_per_ft\": 0.31"));
}

#[test]
fn bars_and_grades_listings() {
    slab_cli()
        .arg("bars")
        .assert()
        .success()
        .stdout(predicate::str::contains("#11"));
    slab_cli()
        .arg("grades")
        .assert()
        .success()
        .stdout(predicate::str::contains("A1035, Grade 100"));
}

#[test]
fn interactive_accepts_defaults() {
    slab_cli()
        .arg("interactive")
        .write_stdin("\n\n\n\n\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULT: PASS"));
}
