use assert_cmd::Command;
use predicates::prelude::*;

fn stopwatch() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stopwatch"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn format_fractional_seconds() {
    stopwatch()
        .args(["format", "3723.5"])
        .assert()
        .success()
        .stdout("01:02:03.500000\n");
}

#[test]
fn format_whole_seconds() {
    stopwatch()
        .args(["format", "5"])
        .assert()
        .success()
        .stdout("00:00:05\n");
}

#[test]
fn format_rejects_negative_seconds() {
    stopwatch()
        .args(["format", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn split_prints_components() {
    stopwatch()
        .args(["split", "3723.5"])
        .assert()
        .success()
        .stdout("1 2 3.5\n");
}

#[test]
fn split_trims_subtraction_residue() {
    stopwatch()
        .args(["split", "3723.7"])
        .assert()
        .success()
        .stdout("1 2 3.7\n");
    stopwatch()
        .args(["split", "65.3"])
        .assert()
        .success()
        .stdout("0 1 5.3\n");
}

#[test]
fn spec_prints_requested_template() {
    stopwatch()
        .args(["spec", "--fractional", "true"])
        .assert()
        .success()
        .stdout("%02d:%02d:%09.6f\n");
    stopwatch()
        .args(["spec", "--fractional", "false"])
        .assert()
        .success()
        .stdout("%02d:%02d:%02d\n");
}

#[test]
fn spec_rejects_non_boolean() {
    stopwatch()
        .args(["spec", "--fractional", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--fractional expects true or false"));
}

#[test]
fn no_arguments_prints_help() {
    stopwatch()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
