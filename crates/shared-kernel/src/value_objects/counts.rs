// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Head count for one country and year, or a sum of them.
///
/// Backed by `u64`. Addition saturates at `u64::MAX` instead of wrapping or
/// panicking, so sums over arbitrary input stay well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PopulationCount(u64);

impl PopulationCount {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn saturating_add(self, rhs: u64) -> Self {
        Self(self.0.saturating_add(rhs))
    }

    #[inline]
    pub const fn saturating_add_count(self, rhs: Self) -> Self {
        self.saturating_add(rhs.0)
    }
}

impl Default for PopulationCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for PopulationCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add_count(rhs)
    }
}

impl AddAssign for PopulationCount {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add_count(rhs);
    }
}

impl Sum for PopulationCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a PopulationCount> for PopulationCount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<u64> for PopulationCount {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<u32> for PopulationCount {
    fn from(value: u32) -> Self {
        Self::new(u64::from(value))
    }
}

impl From<PopulationCount> for u64 {
    fn from(value: PopulationCount) -> Self {
        value.0
    }
}

impl PartialEq<u64> for PopulationCount {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for PopulationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
