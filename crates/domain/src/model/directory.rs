// crates/domain/src/model/directory.rs
use std::collections::{BTreeMap, btree_map};

use country_stats_shared_kernel::{CountryCode, DomainError, DomainResult};

use super::country::Country;

/// Countries keyed by code, iterated in ascending code order.
#[derive(Debug, Clone, Default)]
pub struct CountryDirectory {
    countries: BTreeMap<CountryCode, Country>,
}

impl CountryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `country`, refusing a code that is already present.
    pub fn insert(&mut self, country: Country) -> DomainResult<()> {
        match self.countries.entry(country.code().clone()) {
            btree_map::Entry::Occupied(entry) => Err(DomainError::DuplicateCode {
                code: entry.key().as_str().to_string(),
            }),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(country);
                Ok(())
            }
        }
    }

    pub fn get(&self, code: &str) -> Option<&Country> {
        self.countries.get(code)
    }

    pub fn get_mut(&mut self, code: &str) -> Option<&mut Country> {
        self.countries.get_mut(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.countries.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn values(&self) -> btree_map::Values<'_, CountryCode, Country> {
        self.countries.values()
    }

    /// Plain sequence of the countries in code order, ready for sorting.
    pub fn to_vec(&self) -> Vec<Country> {
        self.countries.values().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a CountryDirectory {
    type Item = &'a Country;
    type IntoIter = btree_map::Values<'a, CountryCode, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}

impl FromIterator<Country> for CountryDirectory {
    /// Later duplicates are dropped; the first country for a code wins.
    fn from_iter<I: IntoIterator<Item = Country>>(iter: I) -> Self {
        let mut directory = Self::new();
        for country in iter {
            let _ = directory.insert(country);
        }
        directory
    }
}
