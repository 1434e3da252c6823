// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use chrono::Local;
use country_stats_infra::{CodeList, CsvCountrySource, CsvDetailSource, persistence::FileWriter};
use country_stats_ports::validation::{AcceptAll, CodeValidator};
use country_stats_usecase::{BuildReport, LoadDirectory, LoadOutput, Report};
use log::info;

use crate::{
    config::Config,
    presentation::{self, ReportView},
};

/// Loads the inputs named by `config`, builds the report and writes it out.
pub fn run(config: &Config) -> Result<()> {
    let LoadOutput { directory, summary } = load(config)?;
    let report = BuildReport::new(&directory).run(&config.request).context("failed to build report")?;

    let view = ReportView { summary: &summary, report: &report, generated_at: Local::now() };
    emit(config, &view)
}

fn load(config: &Config) -> Result<LoadOutput> {
    let validator: Box<dyn CodeValidator> = match &config.inputs.codes {
        Some(path) => Box::new(CodeList::load(path).context("failed to read country codes")?),
        None => Box::new(AcceptAll),
    };
    let countries = CsvCountrySource::new(&config.inputs.countries).with_headers(config.has_headers);
    let details = CsvDetailSource::new(&config.inputs.details).with_headers(config.has_headers);

    LoadDirectory::new(validator.as_ref(), &countries, &details)
        .with_year_range(config.year_range)
        .run()
        .context("failed to load country data")
}

fn emit(config: &Config, view: &ReportView<'_>) -> Result<()> {
    let mut buf = Vec::new();
    presentation::render(config.format, view, &mut buf).context("failed to render report")?;

    match &config.output {
        Some(path) => {
            FileWriter::write_all(path, &buf)?;
            info!("report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&buf)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Convenience for callers that only need the report.
pub fn build_report(config: &Config) -> Result<Report> {
    let LoadOutput { directory, .. } = load(config)?;
    Ok(BuildReport::new(&directory).run(&config.request)?)
}
