//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`validation`]: Reference list of accepted country codes
//! - [`records`]: Country and per-year detail record sources
//!
//! These ports allow the domain and use case layers to remain
//! independent of file formats and storage.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod records;
pub mod validation;
