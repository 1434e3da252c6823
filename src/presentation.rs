// src/presentation.rs
//! Rendering of a finished report as a text table, JSON or YAML.

use std::io::Write;

use chrono::{DateTime, Local};
use country_stats_domain::options::{RankKey, SortOrder};
use country_stats_usecase::{CountryRow, ExtremeRow, LoadSummary, Report};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Everything a renderer needs for one run.
pub struct ReportView<'a> {
    pub summary: &'a LoadSummary,
    pub report: &'a Report,
    pub generated_at: DateTime<Local>,
}

#[derive(Serialize)]
struct Envelope<'a> {
    version: &'static str,
    generated_at: String,
    load: &'a LoadSummary,
    report: &'a Report,
}

impl<'a> From<&ReportView<'a>> for Envelope<'a> {
    fn from(view: &ReportView<'a>) -> Self {
        Self {
            version: crate::VERSION,
            generated_at: view.generated_at.to_rfc3339(),
            load: view.summary,
            report: view.report,
        }
    }
}

/// Emit `view` in `format`.
pub fn render(format: OutputFormat, view: &ReportView<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => output_table(view, out),
        OutputFormat::Json => output_json(view, out),
        OutputFormat::Yaml => output_yaml(view, out),
    }
}

fn output_json(view: &ReportView<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &Envelope::from(view))?;
    writeln!(out)?;
    Ok(())
}

fn output_yaml(view: &ReportView<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    let yaml_str = serde_yaml::to_string(&Envelope::from(view))?;
    write!(out, "{yaml_str}")?;
    Ok(())
}

fn output_table(view: &ReportView<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    let report = view.report;
    writeln!(
        out,
        "country_stats v{} ({} countries, generated {})",
        crate::VERSION,
        report.country_count,
        view.generated_at.format("%Y-%m-%d %H:%M:%S")
    )?;
    write_load_notes(view.summary, out)?;

    if !report.extremes.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "{:<15}\t{:<10}\t{:<32}\t{:<10}\t{}",
            "Extreme", "Code", "Name", "Area(sq.ft)", "Emissions(tons)"
        )?;
        for row in &report.extremes {
            write_extreme_row(row, out)?;
        }
    }

    if !report.world_population.is_empty() {
        writeln!(out)?;
        for row in &report.world_population {
            writeln!(out, "World population in {}: {}", row.year, row.total)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", ranking_title(report.ranking.spec.key, report.ranking.spec.order))?;
    for country in &report.ranking.countries {
        writeln!(out, "{}", country_columns(country))?;
    }
    Ok(())
}

fn write_load_notes(summary: &LoadSummary, out: &mut impl Write) -> anyhow::Result<()> {
    let skipped = summary.malformed_lines + summary.invalid_codes.len() + summary.duplicate_codes.len();
    if skipped > 0 {
        writeln!(
            out,
            "skipped: {} malformed lines, {} invalid codes, {} duplicate codes",
            summary.malformed_lines,
            summary.invalid_codes.len(),
            summary.duplicate_codes.len()
        )?;
    }
    if !summary.incomplete_countries.is_empty() {
        writeln!(out, "incomplete data: {}", summary.incomplete_countries.join(", "))?;
    }
    Ok(())
}

fn write_extreme_row(row: &ExtremeRow, out: &mut impl Write) -> anyhow::Result<()> {
    let label = format!("{:<7}({})", row.extreme, row.year);
    match (&row.country, row.emission) {
        (Some(country), Some(emission)) => {
            writeln!(out, "{label:<15}\t{}\t{emission:.2}", country_columns(country))?;
        }
        _ => writeln!(out, "{label:<15}\tno emission data")?,
    }
    Ok(())
}

fn country_columns(country: &CountryRow) -> String {
    format!("{:<10}\t{:<32}\t{:<10.2}", country.code, country.name, country.area)
}

fn ranking_title(key: RankKey, order: SortOrder) -> String {
    let key = match key {
        RankKey::Area => "area",
        RankKey::Name => "name",
        RankKey::Code => "code",
    };
    match order {
        SortOrder::Ascending => format!("List of countries sorted by {key}"),
        SortOrder::Descending => format!("List of countries sorted by {key} (descending)"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use country_stats_domain::options::{Extreme, RankSpec};
    use country_stats_shared_kernel::{Area, CountryCode, Emission, PopulationCount, Year};
    use country_stats_usecase::{PopulationRow, RankingDto};

    use super::*;

    fn row(code: &str, name: &str, area: f64) -> CountryRow {
        CountryRow { code: CountryCode::from(code), name: name.to_string(), area: Area::new(area) }
    }

    fn sample_report() -> Report {
        Report {
            country_count: 2,
            extremes: vec![
                ExtremeRow {
                    extreme: Extreme::Max,
                    year: Year::new(2000),
                    country: Some(row("USA", "United States", 9_833_520.0)),
                    emission: Some(Emission::new(5_775_807.0)),
                },
                ExtremeRow { extreme: Extreme::Min, year: Year::new(1990), country: None, emission: None },
            ],
            world_population: vec![PopulationRow { year: Year::new(2000), total: PopulationCount::new(2_480) }],
            ranking: RankingDto {
                spec: RankSpec::default(),
                partitions: 1,
                countries: vec![row("ISL", "Iceland", 103_000.0), row("USA", "United States", 9_833_520.0)],
            },
        }
    }

    fn render_to_string(format: OutputFormat, summary: &LoadSummary, report: &Report) -> String {
        let view = ReportView {
            summary,
            report,
            generated_at: Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single().unwrap(),
        };
        let mut buf = Vec::new();
        render(format, &view, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn table_lists_extremes_population_and_ranking() {
        let text = render_to_string(OutputFormat::Table, &LoadSummary::default(), &sample_report());

        assert!(text.contains("Extreme        \tCode      \tName"));
        assert!(text.contains("Highest(2000)  \tUSA       \tUnited States"));
        assert!(text.contains("9833520.00"));
        assert!(text.contains("5775807.00"));
        assert!(text.contains("Lowest (1990)  \tno emission data"));
        assert!(text.contains("World population in 2000: 2480"));
        assert!(text.contains("List of countries sorted by area\n"));
        assert!(!text.contains("skipped:"));

        let iceland = text.find("ISL").unwrap();
        let usa_rank = text.rfind("USA").unwrap();
        assert!(iceland < usa_rank);
    }

    #[test]
    fn table_mentions_skipped_input() {
        let summary = LoadSummary {
            malformed_lines: 2,
            invalid_codes: vec!["XXX".into()],
            incomplete_countries: vec!["ISL".into()],
            ..LoadSummary::default()
        };
        let text = render_to_string(OutputFormat::Table, &summary, &sample_report());
        assert!(text.contains("skipped: 2 malformed lines, 1 invalid codes, 0 duplicate codes"));
        assert!(text.contains("incomplete data: ISL"));
    }

    #[test]
    fn descending_ranking_title() {
        assert_eq!(
            ranking_title(RankKey::Name, SortOrder::Descending),
            "List of countries sorted by name (descending)"
        );
    }

    #[test]
    fn json_envelope_carries_version_and_report() {
        let report = sample_report();
        let text = render_to_string(OutputFormat::Json, &LoadSummary::default(), &report);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["version"], crate::VERSION);
        assert_eq!(value["report"]["country_count"], 2);
        assert_eq!(value["report"]["extremes"][0]["extreme"], "max");
        assert_eq!(value["report"]["world_population"][0]["total"], 2480);
        assert!(value["report"]["extremes"][1]["country"].is_null());

        let parsed: Report = serde_json::from_value(value["report"].clone()).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn yaml_output_is_parseable() {
        let text = render_to_string(OutputFormat::Yaml, &LoadSummary::default(), &sample_report());
        let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(value["report"]["ranking"]["countries"][0]["code"], serde_yaml::Value::from("ISL"));
    }
}
