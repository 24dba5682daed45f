//! Customer table query pipeline: search filter, sort, and the sort-header
//! toggle state machine.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{CustomerRecord, SalesdashError};

/// Column the customer table can be sorted by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Amount,
    Date,
}

impl SortKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Amount => "amount",
            Self::Date => "date",
        }
    }

    fn compare(self, a: &CustomerRecord, b: &CustomerRecord) -> Ordering {
        match self {
            Self::Name => compare_names(&a.name, &b.name),
            Self::Amount => a.amount.total_cmp(&b.amount),
            Self::Date => a.date.cmp(&b.date),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = SalesdashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "amount" => Ok(Self::Amount),
            "date" => Ok(Self::Date),
            other => Err(SalesdashError::UnknownVariant {
                field: "sortBy",
                value: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = SalesdashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(SalesdashError::UnknownVariant {
                field: "sortOrder",
                value: other.to_owned(),
            }),
        }
    }
}

/// Current sort of the customer table.
///
/// Clicking the active column flips the direction; clicking any other column
/// selects it and starts over in ascending order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    /// Newest purchases first.
    fn default() -> Self {
        Self { key: SortKey::Date, direction: SortDirection::Descending }
    }
}

impl SortState {
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Applies one click on the header of `key`.
    #[must_use]
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self { key, direction: self.direction.flipped() }
        } else {
            Self { key, direction: SortDirection::Ascending }
        }
    }
}

/// Search term plus sort selection for the customer table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerQuery {
    pub search: String,
    pub sort: SortState,
}

impl CustomerQuery {
    #[must_use]
    pub fn new(search: impl Into<String>, sort: SortState) -> Self {
        Self { search: search.into(), sort }
    }

    /// Filters then sorts `records` without touching the source slice.
    ///
    /// The sort is stable: records with equal keys keep their source order
    /// in both directions.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [CustomerRecord]) -> Vec<&'a CustomerRecord> {
        let mut result = filter_customers(records, &self.search);
        sort_customers(&mut result, self.sort);
        result
    }
}

/// Records whose name or email contains `search`, ignoring case.
#[must_use]
pub fn filter_customers<'a>(records: &'a [CustomerRecord], search: &str) -> Vec<&'a CustomerRecord> {
    let needle = search.to_lowercase();
    records.iter().filter(|r| r.matches(&needle)).collect()
}

pub fn sort_customers(records: &mut [&CustomerRecord], sort: SortState) {
    records.sort_by(|a, b| {
        let ordering = sort.key.compare(a, b);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Locale-style name ordering: letters compare without case first.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}
