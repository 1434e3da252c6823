// crates/domain/src/model/country.rs
use std::cmp::Ordering;

use country_stats_shared_kernel::{Area, CountryCode, Emission, PopulationCount, Year};

use super::timeseries::{EmissionTable, PopulationSeries};

/// One country: identity, land area, and its population/emission series.
///
/// Equality and ordering look at `code` only, so countries sort by code when
/// placed in ordered containers.
#[derive(Debug, Clone)]
pub struct Country {
    code: CountryCode,
    name: String,
    area: Area,
    population: PopulationSeries,
    emission: EmissionTable,
}

impl Country {
    pub fn new(code: impl Into<CountryCode>, name: impl Into<String>, area: impl Into<Area>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            area: area.into(),
            population: PopulationSeries::new(),
            emission: EmissionTable::new(),
        }
    }

    pub fn code(&self) -> &CountryCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn area(&self) -> Area {
        self.area
    }

    /// Appends a population entry. Years must arrive in ascending order.
    pub fn add_population(&mut self, year: Year, count: PopulationCount) {
        self.population.push(year, count);
    }

    pub fn add_emission(&mut self, year: Year, value: Emission) -> Option<Emission> {
        self.emission.insert(year, value)
    }

    /// Population for `year`; zero when nothing was recorded.
    pub fn population_at(&self, year: Year) -> PopulationCount {
        self.population.population_at(year)
    }

    /// Emission for `year`; `None` when nothing was recorded.
    pub fn emission_at(&self, year: Year) -> Option<Emission> {
        self.emission.emission_at(year)
    }

    pub fn population(&self) -> &PopulationSeries {
        &self.population
    }

    pub fn emissions(&self) -> &EmissionTable {
        &self.emission
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Country {}

impl PartialOrd for Country {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Country {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}
