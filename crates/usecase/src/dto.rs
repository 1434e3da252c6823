// crates/usecase/src/dto.rs
use country_stats_domain::{
    model::Country,
    options::{Extreme, RankSpec},
};
use country_stats_shared_kernel::{Area, CountryCode, Emission, PopulationCount, Year};
use serde::{Deserialize, Serialize};

/// Counters describing what happened while loading the input files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub countries_loaded: usize,
    /// Codes rejected because they are not on the reference list.
    pub invalid_codes: Vec<String>,
    pub duplicate_codes: Vec<String>,
    /// Lines that could not be parsed, across both input files.
    pub malformed_lines: usize,
    pub detail_rows: usize,
    /// Detail rows whose code matched no loaded country.
    pub orphan_rows: usize,
    pub out_of_range_rows: usize,
    /// Detail rows repeating a year already loaded for their country.
    pub duplicate_year_rows: usize,
    /// Countries whose population years arrived out of ascending order.
    pub unordered_countries: Vec<String>,
    /// Countries with fewer detail rows than the configured year range covers.
    pub incomplete_countries: Vec<String>,
}

/// What the report should contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub emission_years: Vec<Year>,
    pub population_years: Vec<Year>,
    pub rank: RankSpec,
    /// Keep only the first N ranked countries.
    pub top: Option<usize>,
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self {
            emission_years: vec![Year::new(2000), Year::new(2020)],
            population_years: vec![Year::new(2000), Year::new(2020)],
            rank: RankSpec::default(),
            top: None,
        }
    }
}

/// Identity columns of a country as shown in report rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRow {
    pub code: CountryCode,
    pub name: String,
    pub area: Area,
}

impl From<&Country> for CountryRow {
    fn from(country: &Country) -> Self {
        Self {
            code: country.code().clone(),
            name: country.name().to_string(),
            area: country.area(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremeRow {
    pub extreme: Extreme,
    pub year: Year,
    /// `None` when no country has emission data for `year`.
    pub country: Option<CountryRow>,
    pub emission: Option<Emission>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationRow {
    pub year: Year,
    pub total: PopulationCount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingDto {
    pub spec: RankSpec,
    /// Partition passes the ranking sort needed.
    pub partitions: usize,
    pub countries: Vec<CountryRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub country_count: usize,
    pub extremes: Vec<ExtremeRow>,
    pub world_population: Vec<PopulationRow>,
    pub ranking: RankingDto,
}
