// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod identity;
pub mod measures;

pub use counts::PopulationCount;
pub use identity::{CountryCode, Year};
pub use measures::{Area, Emission};
