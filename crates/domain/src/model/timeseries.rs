// crates/domain/src/model/timeseries.rs
use std::{cmp::Ordering, collections::HashMap};

use country_stats_shared_kernel::{Emission, PopulationCount, Year};

/// Year-ordered `(year, population)` entries for one country.
///
/// Entries must be pushed in ascending year order. Lookups binary-search the
/// sequence, so an unsorted series yields unspecified (but non-panicking)
/// results; the series never re-sorts itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationSeries {
    entries: Vec<(Year, PopulationCount)>,
}

impl PopulationSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, year: Year, count: PopulationCount) {
        self.entries.push((year, count));
    }

    /// Population recorded for `year`, or zero when the year is absent.
    pub fn population_at(&self, year: Year) -> PopulationCount {
        let mut left = 0usize;
        let mut right = self.entries.len();

        while left < right {
            let mid = left + (right - left) / 2;
            let (current, count) = self.entries[mid];
            match current.cmp(&year) {
                Ordering::Equal => return count,
                Ordering::Less => left = mid + 1,
                Ordering::Greater => right = mid,
            }
        }

        PopulationCount::zero()
    }

    /// Year of the most recently pushed entry.
    pub fn last_year(&self) -> Option<Year> {
        self.entries.last().map(|(year, _)| *year)
    }

    /// Whether the entries satisfy the ascending-year precondition.
    pub fn is_sorted(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].0 <= w[1].0)
    }

    /// Linear scan, so it also answers correctly for unsorted series.
    pub fn contains_year(&self, year: Year) -> bool {
        self.entries.iter().any(|(y, _)| *y == year)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Year, PopulationCount)> + '_ {
        self.entries.iter().copied()
    }
}

/// Year-keyed emission values for one country. Exact-match lookup only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmissionTable {
    entries: HashMap<Year, Emission>,
}

impl EmissionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` for `year`, returning any value it replaced.
    pub fn insert(&mut self, year: Year, value: Emission) -> Option<Emission> {
        self.entries.insert(year, value)
    }

    /// `None` means "no data for that year", which is distinct from `Some(0.0)`.
    pub fn emission_at(&self, year: Year) -> Option<Emission> {
        self.entries.get(&year).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
