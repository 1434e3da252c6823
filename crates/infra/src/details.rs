// crates/infra/src/details.rs
use std::path::{Path, PathBuf};

use country_stats_ports::records::{Batch, DetailRecordDto, DetailSource};
use country_stats_shared_kernel::{CountryCode, Emission, ErrorContext, PopulationCount, Result, Year};
use csv::StringRecord;

use crate::csv_support::{non_negative, parse_field, read_records};

/// Per-year country figures in `code,year,emission,population` form.
///
/// Rows are returned in file order; each carries its own code, so no fixed
/// number of rows per country is assumed.
#[derive(Debug, Clone)]
pub struct CsvDetailSource {
    path: PathBuf,
    has_headers: bool,
}

impl CsvDetailSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), has_headers: false }
    }

    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DetailSource for CsvDetailSource {
    fn read_details(&self) -> Result<Batch<DetailRecordDto>> {
        read_records(&self.path, self.has_headers, parse_detail)
            .with_context(|| format!("reading country details from {}", self.path.display()))
    }
}

fn parse_detail(record: &StringRecord) -> std::result::Result<DetailRecordDto, String> {
    if record.len() < 4 {
        return Err(format!("expected 4 fields, found {}", record.len()));
    }
    let code = record.get(0).unwrap_or_default();
    if code.is_empty() {
        return Err("empty country code".to_string());
    }
    let year: i32 = parse_field(record, 1, "year")?;
    let emission: f64 = parse_field(record, 2, "emission")?;
    let population: u64 = parse_field(record, 3, "population")?;

    Ok(DetailRecordDto {
        code: CountryCode::from(code),
        year: Year::new(year),
        emission: Emission::new(non_negative(emission, "emission")?),
        population: PopulationCount::new(population),
    })
}
