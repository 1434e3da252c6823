// crates/shared-kernel/src/value_objects/measures.rs
use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

/// Carbon emission in tons for one country and year.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Emission(f64);

impl Emission {
    #[inline]
    pub const fn new(tons: f64) -> Self {
        Self(tons)
    }

    #[inline]
    pub const fn tons(self) -> f64 {
        self.0
    }
}

impl From<f64> for Emission {
    fn from(tons: f64) -> Self {
        Self::new(tons)
    }
}

impl fmt::Display for Emission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Land area in square units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Area(f64);

impl Area {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Total order over areas, usable as a sort comparator.
    #[inline]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Area {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
