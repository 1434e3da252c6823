//! # country_stats
//!
//! Reads a country list and per-year emission/population details, then
//! reports emission extremes, world population totals and a ranking of
//! countries.
//!
//! The binary wires the layered crates together:
//!
//! - [`cli`]: clap argument definitions
//! - [`config`]: merging flags, config file and defaults
//! - [`app`]: load, build and emit
//! - [`presentation`]: table / JSON / YAML renderers

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
