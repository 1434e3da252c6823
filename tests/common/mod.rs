// tests/common/mod.rs
//! Shared test utilities.

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;
