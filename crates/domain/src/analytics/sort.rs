// crates/domain/src/analytics/sort.rs
use std::cmp::Ordering;

use country_stats_shared_kernel::{DomainError, DomainResult};

/// Instrumentation for a single sort invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortReport {
    partitions: usize,
}

impl SortReport {
    /// Number of partition passes performed by the call that produced this report.
    pub fn partitions(&self) -> usize {
        self.partitions
    }
}

/// Sorts `items` in place by their natural order.
///
/// See [`quick_sort_by`] for the algorithm and its guarantees.
pub fn quick_sort<T: Ord>(items: &mut [T]) -> DomainResult<SortReport> {
    quick_sort_by(items, T::cmp)
}

/// Sorts `items` in place with `compare`.
///
/// Quicksort using the first element of each range as pivot and a single-pass
/// (Lomuto) partition. Average O(n log n), O(n²) on already ordered or
/// reverse-ordered input. The sort is not stable.
///
/// The smaller side of each partition is sorted recursively and the larger
/// side iteratively, which keeps stack depth logarithmic without changing the
/// resulting order.
pub fn quick_sort_by<T, F>(items: &mut [T], mut compare: F) -> DomainResult<SortReport>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut report = SortReport::default();
    if items.len() > 1 {
        let last = items.len() - 1;
        sort_range(items, 0, last, &mut compare, &mut report)?;
    }
    Ok(report)
}

/// Swaps two elements after checking both indices.
///
/// Nothing is moved when either index is out of range.
pub fn swap<T>(items: &mut [T], a: usize, b: usize) -> DomainResult<()> {
    let len = items.len();
    for index in [a, b] {
        if index >= len {
            return Err(DomainError::IndexOutOfBounds { index, len });
        }
    }
    items.swap(a, b);
    Ok(())
}

fn sort_range<T, F>(
    items: &mut [T],
    mut first: usize,
    mut last: usize,
    compare: &mut F,
    report: &mut SortReport,
) -> DomainResult<()>
where
    F: FnMut(&T, &T) -> Ordering,
{
    while first < last {
        let pivot = partition(items, first, last, compare)?;
        report.partitions += 1;

        if pivot - first < last - pivot {
            if pivot > first {
                sort_range(items, first, pivot - 1, compare, report)?;
            }
            first = pivot + 1;
        } else {
            if pivot < last {
                sort_range(items, pivot + 1, last, compare, report)?;
            }
            if pivot == first {
                break;
            }
            last = pivot - 1;
        }
    }
    Ok(())
}

/// Partitions `items[first..=last]` around `items[first]` and returns the
/// pivot's final index.
fn partition<T, F>(items: &mut [T], first: usize, last: usize, compare: &mut F) -> DomainResult<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut index = first;
    for i in first + 1..=last {
        if compare(&items[i], &items[first]) == Ordering::Less {
            index += 1;
            swap(items, index, i)?;
        }
    }
    swap(items, first, index)?;
    Ok(index)
}
