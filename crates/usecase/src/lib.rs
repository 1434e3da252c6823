//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the ports implemented by
//! infrastructure adapters:
//!
//! - [`load`]: Build a `CountryDirectory` from the country and detail sources
//! - [`report`]: Run the emission, population and ranking queries
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod load;
pub mod report;

pub use dto::{CountryRow, ExtremeRow, LoadSummary, PopulationRow, RankingDto, Report, ReportRequest};
pub use load::{LoadDirectory, LoadOutput};
pub use report::BuildReport;
