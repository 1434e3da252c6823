// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    CountryStatsError, DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError,
    PresentationError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Area, CountryCode, Emission, PopulationCount, Year};
