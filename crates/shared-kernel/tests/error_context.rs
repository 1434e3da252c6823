use std::io;

use country_stats_shared_kernel::{CountryStatsError, ErrorContext};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(CountryStatsError::from)
        .context("reading countries.csv")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("reading countries.csv"));
    assert!(display.contains("Output error:"));
}

#[test]
fn with_context_is_lazy_and_nests() {
    let err = boom()
        .with_context(|| "loading codes".to_string())
        .with_context(|| "building report".to_string())
        .unwrap_err();

    let display = err.to_string();
    assert!(display.starts_with("building report: loading codes"));
}
