// crates/usecase/src/report.rs
use country_stats_domain::{
    analytics::{extreme_emission, rank_countries, world_population},
    model::CountryDirectory,
    options::Extreme,
};
use country_stats_shared_kernel::{ErrorContext, Result};
use log::debug;

use crate::dto::{CountryRow, ExtremeRow, PopulationRow, RankingDto, Report, ReportRequest};

/// Runs the report queries against a loaded directory. The directory is
/// only read.
pub struct BuildReport<'a> {
    directory: &'a CountryDirectory,
}

impl<'a> BuildReport<'a> {
    pub fn new(directory: &'a CountryDirectory) -> Self {
        Self { directory }
    }

    pub fn run(&self, request: &ReportRequest) -> Result<Report> {
        let extremes = self.extremes(request);
        let world_population = request
            .population_years
            .iter()
            .map(|&year| PopulationRow { year, total: world_population(self.directory, year) })
            .collect();
        let ranking = self.ranking(request)?;

        Ok(Report {
            country_count: self.directory.len(),
            extremes,
            world_population,
            ranking,
        })
    }

    /// Highest for every requested year first, then lowest.
    fn extremes(&self, request: &ReportRequest) -> Vec<ExtremeRow> {
        [Extreme::Max, Extreme::Min]
            .into_iter()
            .flat_map(|extreme| {
                request.emission_years.iter().map(move |&year| {
                    let country = extreme_emission(self.directory, year, extreme);
                    ExtremeRow {
                        extreme,
                        year,
                        emission: country.and_then(|c| c.emission_at(year)),
                        country: country.map(CountryRow::from),
                    }
                })
            })
            .collect()
    }

    fn ranking(&self, request: &ReportRequest) -> Result<RankingDto> {
        let mut countries = self.directory.to_vec();
        let report = rank_countries(&mut countries, request.rank).context("ranking countries")?;
        debug!("ranked {} countries in {} partitions", countries.len(), report.partitions());

        if let Some(top) = request.top {
            countries.truncate(top);
        }
        Ok(RankingDto {
            spec: request.rank,
            partitions: report.partitions(),
            countries: countries.iter().map(CountryRow::from).collect(),
        })
    }
}
