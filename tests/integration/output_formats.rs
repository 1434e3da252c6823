// tests/integration/output_formats.rs
use std::fs;

use clap::Parser;
use country_stats::{app, cli::Args, config::Config};
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{DataSet, WORLD_2000};

fn run_to_file(data: &DataSet, format: &str, file_name: &str) -> String {
    let output = data.path(file_name);
    let argv = vec![
        "country_stats".to_string(),
        "--codes".to_string(),
        data.path("codes.txt").display().to_string(),
        "--countries".to_string(),
        data.path("countries.csv").display().to_string(),
        "--details".to_string(),
        data.path("country_info.csv").display().to_string(),
        "--format".to_string(),
        format.to_string(),
        "--output".to_string(),
        output.display().to_string(),
    ];
    app::run(&Config::from_args(Args::parse_from(argv)).unwrap()).unwrap();
    fs::read_to_string(output).unwrap()
}

#[test]
fn json_output_includes_load_summary_and_report() {
    let data = DataSet::new();
    let text = run_to_file(&data, "json", "report.json");
    let value: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["version"], country_stats::VERSION);
    assert!(value["generated_at"].is_string());
    assert_eq!(value["load"]["countries_loaded"], 4);
    assert_eq!(value["load"]["invalid_codes"][0], "XXX");
    assert_eq!(value["load"]["malformed_lines"], 1);
    assert_eq!(value["load"]["orphan_rows"], 1);
    assert_eq!(value["report"]["world_population"][0]["total"], WORLD_2000);
    assert_eq!(value["report"]["extremes"][0]["country"]["name"], "United States");
}

#[test]
fn yaml_output_round_trips() {
    let data = DataSet::new();
    let text = run_to_file(&data, "yaml", "report.yaml");
    let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();

    assert_eq!(value["report"]["country_count"], serde_yaml::Value::from(4));
    assert_eq!(value["report"]["ranking"]["spec"]["key"], serde_yaml::Value::from("area"));
}

#[test]
fn table_output_follows_report_layout() {
    let data = DataSet::new();
    let text = run_to_file(&data, "table", "report.txt");

    let highest = text.find("Highest(2000)").unwrap();
    let lowest = text.find("Lowest (2000)").unwrap();
    let population = text.find("World population in 2000:").unwrap();
    let ranking = text.find("List of countries sorted by area").unwrap();
    assert!(highest < lowest && lowest < population && population < ranking);
    assert!(text.contains("skipped: 1 malformed lines, 1 invalid codes, 0 duplicate codes"));
}
