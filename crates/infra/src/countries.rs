// crates/infra/src/countries.rs
use std::path::{Path, PathBuf};

use country_stats_ports::records::{Batch, CountryRecordDto, CountrySource};
use country_stats_shared_kernel::{Area, CountryCode, ErrorContext, Result};
use csv::StringRecord;

use crate::csv_support::{non_negative, parse_field, read_records};

/// Country list in `code,name,area` form.
///
/// Names containing unquoted commas are tolerated: the last field is the
/// area and everything between the first and last field is the name.
#[derive(Debug, Clone)]
pub struct CsvCountrySource {
    path: PathBuf,
    has_headers: bool,
}

impl CsvCountrySource {
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

impl CountrySource for CsvCountrySource {
    fn read_countries(&self) -> Result<Batch<CountryRecordDto>> {
        read_records(&self.path, self.has_headers, parse_country)
            .with_context(|| format!("reading countries from {}", self.path.display()))
    }
}

fn parse_country(record: &StringRecord) -> std::result::Result<CountryRecordDto, String> {
    if record.len() < 3 {
        return Err(format!("expected 3 fields, found {}", record.len()));
    }
    let code = record.get(0).unwrap_or_default();
    if code.is_empty() {
        return Err("empty country code".to_string());
    }
    let last = record.len() - 1;
    let name = record.iter().skip(1).take(last - 1).collect::<Vec<_>>().join(",");
    let area: f64 = parse_field(record, last, "area")?;

    Ok(CountryRecordDto {
        code: CountryCode::from(code),
        name,
        area: Area::new(non_negative(area, "area")?),
    })
}
