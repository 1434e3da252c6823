// crates/domain/src/options.rs
use std::{cmp::Ordering, fmt, str::FromStr};

use country_stats_shared_kernel::{DomainError, DomainResult, Year};
use serde::{Deserialize, Serialize};

/// Which end of the emission range an extreme query looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extreme {
    Max,
    Min,
}

impl From<bool> for Extreme {
    /// `true` selects the maximum.
    #[inline]
    fn from(want_max: bool) -> Self {
        if want_max { Self::Max } else { Self::Min }
    }
}

impl fmt::Display for Extreme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Max => "Highest",
            Self::Min => "Lowest",
        })
    }
}

/// Attribute countries are ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankKey {
    Area,
    Name,
    Code,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(desc: bool) -> Self {
        if desc { Self::Descending } else { Self::Ascending }
    }
}

/// Ranking specification. Example: `area`, `area:desc`, `name:asc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankSpec {
    pub key: RankKey,
    #[serde(default)]
    pub order: SortOrder,
}

impl RankSpec {
    pub fn new(key: RankKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn ascending(key: RankKey) -> Self {
        Self::new(key, SortOrder::Ascending)
    }

    pub fn descending(key: RankKey) -> Self {
        Self::new(key, SortOrder::Descending)
    }
}

impl Default for RankSpec {
    fn default() -> Self {
        Self::ascending(RankKey::Area)
    }
}

impl FromStr for RankSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidRankSpec { spec: s.to_string() };
        let (key_str, order_str) = s.split_once(':').map_or((s.trim(), None), |(k, o)| (k.trim(), Some(o.trim())));

        let key = match key_str.to_ascii_lowercase().as_str() {
            "area" => RankKey::Area,
            "name" => RankKey::Name,
            "code" => RankKey::Code,
            _ => return Err(invalid()),
        };
        let order = match order_str.map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => SortOrder::Ascending,
            Some("desc") => SortOrder::Descending,
            Some(_) => return Err(invalid()),
        };
        Ok(Self::new(key, order))
    }
}

/// Inclusive range of years accepted from detail records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearRange {
    first: Year,
    last: Year,
}

impl YearRange {
    pub fn new(first: Year, last: Year) -> DomainResult<Self> {
        if first > last {
            return Err(DomainError::InvalidYearRange { first: first.value(), last: last.value() });
        }
        Ok(Self { first, last })
    }

    pub fn first(&self) -> Year {
        self.first
    }

    pub fn last(&self) -> Year {
        self.last
    }

    pub fn contains(&self, year: Year) -> bool {
        (self.first..=self.last).contains(&year)
    }

    /// Number of years covered, i.e. the expected rows per country.
    pub fn year_count(&self) -> usize {
        let span = i64::from(self.last.value()) - i64::from(self.first.value());
        usize::try_from(span).map_or(usize::MAX, |n| n.saturating_add(1))
    }
}

impl FromStr for YearRange {
    type Err = DomainError;

    /// Accepts `2000..=2021` and `2000-2021` (inclusive) or `2000..2022`
    /// (exclusive end).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::UnparsableYearRange { spec: s.to_string() };
        let trimmed = s.trim();
        let parse = |raw: &str| raw.trim().parse::<i32>().map_err(|_| invalid());

        let (first, last) = if let Some((first, last)) = trimmed.split_once("..=") {
            (parse(first)?, parse(last)?)
        } else if let Some((first, end)) = trimmed.split_once("..") {
            let (first, end) = (parse(first)?, parse(end)?);
            if end <= first {
                return Err(invalid());
            }
            (first, end - 1)
        } else if let Some((first, last)) = trimmed.split_once('-') {
            (parse(first)?, parse(last)?)
        } else {
            return Err(invalid());
        };
        Self::new(Year::new(first), Year::new(last))
    }
}

impl TryFrom<String> for YearRange {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearRange> for String {
    fn from(range: YearRange) -> Self {
        range.to_string()
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.first, self.last)
    }
}
