//! # Domain
//!
//! In-memory country model and the queries that run over it.
//!
//! - [`model`]: `Country`, its population/emission series, and the
//!   code-keyed `CountryDirectory`
//! - [`analytics`]: emission extremes, world population totals, and the
//!   quicksort used to rank countries
//! - [`options`]: small value types selecting how queries and rankings run
//!
//! Nothing in this crate performs I/O or logs.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod options;
