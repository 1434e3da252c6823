// crates/domain/src/analytics/rank.rs
use std::cmp::Ordering;

use country_stats_shared_kernel::DomainResult;

use super::sort::{SortReport, quick_sort_by};
use crate::{
    model::Country,
    options::{RankKey, RankSpec},
};

/// Orders `countries` in place according to `spec`.
pub fn rank_countries(countries: &mut [Country], spec: RankSpec) -> DomainResult<SortReport> {
    quick_sort_by(countries, |a, b| spec.order.apply(spec.key.compare(a, b)))
}

impl RankKey {
    /// Compares two countries on this key.
    #[inline]
    pub fn compare(&self, a: &Country, b: &Country) -> Ordering {
        match self {
            Self::Area => a.area().total_cmp(&b.area()),
            Self::Name => a.name().cmp(b.name()),
            Self::Code => a.cmp(b),
        }
    }
}
