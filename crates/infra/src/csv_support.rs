// crates/infra/src/csv_support.rs
use std::{io, path::Path};

use country_stats_ports::records::{Batch, SkippedLine};
use country_stats_shared_kernel::{InfrastructureError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::persistence::FileReader;

/// Reads every record of a comma separated file at `path`.
///
/// Records `parse` rejects, and lines the CSV reader cannot decode, end up in
/// [`Batch::skipped`]. Only I/O failures abort the read.
pub(crate) fn read_records<T, F>(path: &Path, has_headers: bool, mut parse: F) -> Result<Batch<T>>
where
    F: FnMut(&StringRecord) -> std::result::Result<T, String>,
{
    let file = FileReader::open_buffered(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut batch = Batch::default();
    for (index, result) in reader.records().enumerate() {
        let fallback_line = index as u64 + 1;
        match result {
            Ok(record) => {
                let line = record.position().map_or(fallback_line, |p| p.line());
                match parse(&record) {
                    Ok(parsed) => batch.records.push(parsed),
                    Err(reason) => batch.skipped.push(SkippedLine { line, content: join_fields(&record), reason }),
                }
            }
            Err(err) if err.is_io_error() => {
                return Err(InfrastructureError::FileRead { path: path.to_path_buf(), source: io::Error::from(err) }.into());
            }
            Err(err) => {
                let line = err.position().map_or(fallback_line, |p| p.line());
                batch.skipped.push(SkippedLine { line, content: String::new(), reason: err.to_string() });
            }
        }
    }
    Ok(batch)
}

pub(crate) fn join_fields(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}

pub(crate) fn parse_field<T: std::str::FromStr>(record: &StringRecord, index: usize, field: &str) -> std::result::Result<T, String> {
    let raw = record.get(index).ok_or_else(|| format!("missing {field}"))?;
    raw.parse().map_err(|_| format!("invalid {field} '{raw}'"))
}

pub(crate) fn non_negative(value: f64, field: &str) -> std::result::Result<f64, String> {
    if value.is_finite() && value >= 0.0 { Ok(value) } else { Err(format!("{field} must be a non-negative number, got {value}")) }
}
