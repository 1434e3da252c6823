// crates/ports/src/records.rs
use country_stats_shared_kernel::{Area, CountryCode, Emission, PopulationCount, Result, Year};
use serde::{Deserialize, Serialize};

/// DTO for one line of the country list: identity and land area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecordDto {
    pub code: CountryCode,
    pub name: String,
    pub area: Area,
}

/// DTO for one line of the detail file: a country's figures for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRecordDto {
    pub code: CountryCode,
    pub year: Year,
    pub emission: Emission,
    pub population: PopulationCount,
}

/// A source line that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line number in the source.
    pub line: u64,
    pub content: String,
    pub reason: String,
}

/// Records read from a source, plus the lines that were skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedLine>,
}

impl<T> Default for Batch<T> {
    fn default() -> Self {
        Self { records: Vec::new(), skipped: Vec::new() }
    }
}

/// Port for reading the country list.
pub trait CountrySource {
    fn read_countries(&self) -> Result<Batch<CountryRecordDto>>;
}

/// Port for reading per-year detail records, in source order.
pub trait DetailSource {
    fn read_details(&self) -> Result<Batch<DetailRecordDto>>;
}
