// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod codes;
pub mod countries;
pub mod details;
pub mod persistence;

mod csv_support;

pub use codes::CodeList;
pub use countries::CsvCountrySource;
pub use details::CsvDetailSource;
