#![cfg(unix)]

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn stopwatch() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stopwatch"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn coarse_short_output() {
    stopwatch()
        .args(["run", "--coarse", "--", "true"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+s \(\d{2}:\d{2}:\d{2}\)\n$").unwrap());
}

#[test]
fn human_mode() {
    stopwatch()
        .args(["run", "--coarse", "--mode", "human", "--", "true"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^0 hours 0 minutes \d+ seconds\n$").unwrap());
}

#[test]
fn custom_hms_template() {
    stopwatch()
        .args(["run", "--coarse", "--mode", "hms", "--hms", "%dh%dm%ds", "--", "true"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^0h0m\d+s\n$").unwrap());
}

#[test]
fn child_arguments_pass_through() {
    stopwatch()
        .args(["run", "--coarse", "--", "echo", "-n", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("hello"));
}

#[test]
fn child_exit_code_is_forwarded() {
    stopwatch()
        .args(["run", "--", "sh", "-c", "exit 3"])
        .assert()
        .code(3);
}

#[test]
fn unknown_mode_fails() {
    stopwatch()
        .args(["run", "--mode", "bogus", "--", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format: bogus"));
}

#[test]
fn missing_program_fails() {
    stopwatch()
        .args(["run", "--", "definitely-not-a-real-program-xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("io error"));
}

#[test]
fn json_report() {
    let output = stopwatch()
        .args(["run", "--json", "--", "true"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&output).expect("json report");
    assert_eq!(report["running"], false);
    assert!(report["seconds"].as_f64().expect("seconds") >= 0.0);
    assert_eq!(report["hours"], 0);
    assert!(report["short"].as_str().expect("short").contains('('));
}

#[test]
fn options_file_with_legacy_format_warns() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"hires": false, "string": "hms", "format": "%d|%d|%d"}}"#).expect("write options");

    stopwatch()
        .args(["run", "--options"])
        .arg(file.path())
        .args(["--", "true"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^0\|0\|\d+\n$").unwrap())
        .stderr(predicate::str::contains("`format` is deprecated"));
}

#[test]
fn invalid_options_file_fails() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"colour": "red"}}"#).expect("write options");

    stopwatch()
        .args(["run", "--options"])
        .arg(file.path())
        .args(["--", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid timer options"));
}
