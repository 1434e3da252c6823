// crates/usecase/src/load.rs
use country_stats_domain::{
    model::{Country, CountryDirectory},
    options::YearRange,
};
use country_stats_ports::{
    records::{CountrySource, DetailRecordDto, DetailSource},
    validation::CodeValidator,
};
use country_stats_shared_kernel::{CountryStatsError, ErrorContext, Result};
use log::{debug, info, warn};

use crate::dto::LoadSummary;

/// Directory built from the sources plus what was skipped along the way.
#[derive(Debug, Clone)]
pub struct LoadOutput {
    pub directory: CountryDirectory,
    pub summary: LoadSummary,
}

/// Builds a [`CountryDirectory`] from the country list and the detail rows.
///
/// Countries with codes the validator rejects are skipped, as are repeated
/// codes. Detail rows are appended to their country in source order, so the
/// detail source must list each country's years in ascending order.
pub struct LoadDirectory<'a> {
    validator: &'a dyn CodeValidator,
    countries: &'a dyn CountrySource,
    details: &'a dyn DetailSource,
    years: Option<YearRange>,
}

impl<'a> LoadDirectory<'a> {
    pub fn new(
        validator: &'a dyn CodeValidator,
        countries: &'a dyn CountrySource,
        details: &'a dyn DetailSource,
    ) -> Self {
        Self { validator, countries, details, years: None }
    }

    /// Restricts accepted detail rows to `years`.
    pub fn with_year_range(mut self, years: Option<YearRange>) -> Self {
        self.years = years;
        self
    }

    pub fn run(&self) -> Result<LoadOutput> {
        let mut summary = LoadSummary::default();
        let mut directory = self.load_countries(&mut summary)?;
        self.load_details(&mut directory, &mut summary)?;

        if let Some(range) = self.years {
            summary.incomplete_countries = directory
                .values()
                .filter(|c| c.population().len() < range.year_count())
                .map(|c| c.code().as_str().to_string())
                .collect();
            if !summary.incomplete_countries.is_empty() {
                warn!(
                    "{} countries have fewer than {} detail rows for {range}",
                    summary.incomplete_countries.len(),
                    range.year_count()
                );
            }
        }

        summary.countries_loaded = directory.len();
        info!(
            "loaded {} countries, {} detail rows ({} malformed lines, {} invalid codes, {} orphan rows)",
            summary.countries_loaded,
            summary.detail_rows,
            summary.malformed_lines,
            summary.invalid_codes.len(),
            summary.orphan_rows
        );
        Ok(LoadOutput { directory, summary })
    }

    fn load_countries(&self, summary: &mut LoadSummary) -> Result<CountryDirectory> {
        let batch = self.countries.read_countries().context("reading country list")?;
        for skipped in &batch.skipped {
            warn!("skipping country line {}: {} ({})", skipped.line, skipped.content, skipped.reason);
        }
        summary.malformed_lines += batch.skipped.len();

        let mut directory = CountryDirectory::new();
        for record in batch.records {
            if !self.validator.is_valid_code(record.code.as_str()) {
                warn!("invalid country code: {}", record.code);
                summary.invalid_codes.push(record.code.into_string());
                continue;
            }
            let code = record.code.as_str().to_string();
            if let Err(err) = directory.insert(Country::new(record.code, record.name, record.area)) {
                warn!("{}", CountryStatsError::from(err));
                summary.duplicate_codes.push(code);
            }
        }
        Ok(directory)
    }

    fn load_details(&self, directory: &mut CountryDirectory, summary: &mut LoadSummary) -> Result<()> {
        let batch = self.details.read_details().context("reading country details")?;
        for skipped in &batch.skipped {
            warn!("skipping detail line {}: {} ({})", skipped.line, skipped.content, skipped.reason);
        }
        summary.malformed_lines += batch.skipped.len();

        for record in batch.records {
            if self.years.is_some_and(|range| !range.contains(record.year)) {
                debug!("detail row for {} outside year range: {}", record.code, record.year);
                summary.out_of_range_rows += 1;
                continue;
            }
            let Some(country) = directory.get_mut(record.code.as_str()) else {
                debug!("detail row for unknown country {}", record.code);
                summary.orphan_rows += 1;
                continue;
            };
            if append_detail(country, &record, summary) {
                summary.detail_rows += 1;
            }
        }
        Ok(())
    }
}

/// Returns `false` when the row repeats a year and was dropped; the first
/// row for a year wins.
fn append_detail(country: &mut Country, record: &DetailRecordDto, summary: &mut LoadSummary) -> bool {
    if country.population().contains_year(record.year) {
        warn!("duplicate detail year {} for {}; keeping the first row", record.year, country.code());
        summary.duplicate_year_rows += 1;
        return false;
    }

    let unordered = country.population().last_year().is_some_and(|last| last > record.year);
    if unordered && !summary.unordered_countries.iter().any(|c| c == country.code().as_str()) {
        warn!(
            "population years for {} are not ascending ({} after {:?}); lookups may miss",
            country.code(),
            record.year,
            country.population().last_year()
        );
        summary.unordered_countries.push(country.code().as_str().to_string());
    }

    country.add_population(record.year, record.population);
    country.add_emission(record.year, record.emission);
    true
}
