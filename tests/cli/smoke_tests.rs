use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{DataSet, WORLD_2000};

fn cmd(data: &DataSet) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_country_stats"));
    cmd.current_dir(data.root()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_country_stats"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("country_stats"))
        .stdout(predicate::str::contains("--emission-year"));
}

#[test]
fn default_files_produce_table_report() {
    let data = DataSet::new();
    cmd(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Highest(2000)"))
        .stdout(predicate::str::contains("Lowest (2000)"))
        .stdout(predicate::str::contains(format!("World population in 2000: {WORLD_2000}")))
        .stdout(predicate::str::contains("List of countries sorted by area"))
        .stderr(predicate::str::contains("invalid country code: XXX"));
}

#[test]
fn quiet_suppresses_warnings() {
    let data = DataSet::new();
    cmd(&data).arg("-q").assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn missing_input_file_fails() {
    let data = DataSet::new();
    cmd(&data)
        .args(["--countries", "missing.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("missing.csv"));
}

#[test]
fn zero_top_is_rejected() {
    let data = DataSet::new();
    cmd(&data)
        .args(["--top", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--top"));
}

#[test]
fn codes_and_no_codes_conflict() {
    let data = DataSet::new();
    cmd(&data).args(["--codes", "codes.txt", "--no-codes"]).assert().failure();
}

#[test]
fn output_flag_writes_file() {
    let data = DataSet::new();
    let out = data.path("report.json");
    cmd(&data)
        .args(["--format", "json", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("\"world_population\""));
}
