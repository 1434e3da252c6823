// tests/integration/end_to_end.rs
use clap::Parser;
use country_stats::{app, cli::Args, config::Config};
use country_stats_domain::options::{RankKey, RankSpec};

#[path = "../common/mod.rs"]
mod common;
use common::{DataSet, WORLD_2000, WORLD_2020};

fn config_for(data: &DataSet, extra: &[&str]) -> Config {
    let codes = data.path("codes.txt");
    let countries = data.path("countries.csv");
    let details = data.path("country_info.csv");
    let mut argv = vec![
        "country_stats".to_string(),
        "--countries".to_string(),
        countries.display().to_string(),
        "--details".to_string(),
        details.display().to_string(),
    ];
    if !extra.contains(&"--no-codes") {
        argv.push("--codes".to_string());
        argv.push(codes.display().to_string());
    }
    argv.extend(extra.iter().map(ToString::to_string));
    Config::from_args(Args::parse_from(argv)).unwrap()
}

fn codes(rows: &[country_stats_usecase::CountryRow]) -> Vec<&str> {
    rows.iter().map(|r| r.code.as_str()).collect()
}

#[test]
fn reference_data_report() {
    let data = DataSet::new();
    let report = app::build_report(&config_for(&data, &[])).unwrap();

    assert_eq!(report.country_count, 4);

    let extremes: Vec<_> = report
        .extremes
        .iter()
        .map(|r| (r.year.value(), r.country.as_ref().map(|c| c.code.as_str())))
        .collect();
    assert_eq!(extremes, vec![(2000, Some("USA")), (2020, Some("CHN")), (2000, Some("ISL")), (2020, Some("ISL"))]);

    let totals: Vec<_> = report.world_population.iter().map(|r| r.total.value()).collect();
    assert_eq!(totals, vec![WORLD_2000, WORLD_2020]);

    assert_eq!(codes(&report.ranking.countries), vec!["ISL", "FRA", "CHN", "USA"]);
}

#[test]
fn without_code_list_unknown_codes_are_kept() {
    let data = DataSet::new();
    let report = app::build_report(&config_for(&data, &["--no-codes"])).unwrap();

    assert_eq!(report.country_count, 5);
    assert_eq!(report.ranking.countries[0].code.as_str(), "XXX");
    assert_eq!(report.world_population[0].total.value(), WORLD_2000 + 1);
}

#[test]
fn rank_and_top_flags_shape_ranking() {
    let data = DataSet::new();
    let report = app::build_report(&config_for(&data, &["--rank", "name:desc", "--top", "2"])).unwrap();

    assert_eq!(report.ranking.spec, RankSpec::descending(RankKey::Name));
    assert_eq!(codes(&report.ranking.countries), vec!["USA", "ISL"]);
}

#[test]
fn year_range_drops_rows_outside_it() {
    let data = DataSet::new();
    let report = app::build_report(&config_for(&data, &["--years", "2010..=2030"])).unwrap();

    assert_eq!(report.world_population[0].total.value(), 0);
    assert!(report.extremes.iter().filter(|r| r.year.value() == 2000).all(|r| r.country.is_none()));
    assert_eq!(report.world_population[1].total.value(), WORLD_2020);
}

#[test]
fn header_rows_are_skipped_when_requested() {
    let data = DataSet::with_contents(
        common::CODES,
        &format!("code,name,area\n{}", common::COUNTRIES),
        &format!("code,year,emission,population\n{}", common::DETAILS),
    );
    let report = app::build_report(&config_for(&data, &["--headers"])).unwrap();
    assert_eq!(report.country_count, 4);
}
