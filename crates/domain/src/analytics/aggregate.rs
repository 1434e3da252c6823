// crates/domain/src/analytics/aggregate.rs
use country_stats_shared_kernel::{PopulationCount, Year};

use crate::{model::Country, options::Extreme};

/// Country with the highest or lowest emission recorded for `year`.
///
/// Countries without an emission entry for `year` are skipped rather than
/// treated as zero. Comparisons are strict, so on ties the first country in
/// iteration order wins. Returns `None` when no country has data for `year`.
pub fn extreme_emission<'a, I>(countries: I, year: Year, extreme: Extreme) -> Option<&'a Country>
where
    I: IntoIterator<Item = &'a Country>,
{
    let mut best_value = match extreme {
        Extreme::Max => f64::NEG_INFINITY,
        Extreme::Min => f64::INFINITY,
    };
    let mut best_country = None;

    for country in countries {
        let Some(emission) = country.emission_at(year) else {
            continue;
        };
        let value = emission.tons();
        let better = match extreme {
            Extreme::Max => value > best_value,
            Extreme::Min => value < best_value,
        };
        if better {
            best_value = value;
            best_country = Some(country);
        }
    }

    best_country
}

/// Sum of every country's population for `year`; missing years add zero.
///
/// The total saturates at `u64::MAX`.
pub fn world_population<'a, I>(countries: I, year: Year) -> PopulationCount
where
    I: IntoIterator<Item = &'a Country>,
{
    countries.into_iter().map(|country| country.population_at(year)).sum()
}
