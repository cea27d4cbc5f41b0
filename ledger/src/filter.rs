//! View filter: search term plus status and violation criteria.
//!
//! Criteria combine with logical AND. An inactive criterion (`all`, or an
//! empty search term) matches every record. Filtering never touches the
//! dataset; it returns a fresh sequence in dataset order.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::record::{PaymentStatus, Record, Violation};

/// Status select value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Paid,
    Unpaid,
}

impl StatusFilter {
    /// Parse a select value. Unknown values mean `all`.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "paid" => Self::Paid,
            "unpaid" => Self::Unpaid,
            _ => Self::All,
        }
    }

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
        }
    }

    #[must_use]
    pub fn admits(self, status: PaymentStatus) -> bool {
        match self {
            Self::All => true,
            Self::Paid => status == PaymentStatus::Paid,
            Self::Unpaid => status == PaymentStatus::Unpaid,
        }
    }
}

/// Violation select value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViolationFilter {
    #[default]
    All,
    Minor,
    Major,
}

impl ViolationFilter {
    /// Parse a select value. Unknown values mean `all`.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "minor" => Self::Minor,
            "major" => Self::Major,
            _ => Self::All,
        }
    }

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }

    #[must_use]
    pub fn admits(self, violation: Violation) -> bool {
        match self {
            Self::All => true,
            Self::Minor => violation == Violation::Minor,
            Self::Major => violation == Violation::Major,
        }
    }
}

/// Active filter criteria for the penalty table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    pub search: String,
    pub status: StatusFilter,
    pub violation: ViolationFilter,
}

impl Criteria {
    /// True when no criterion constrains the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.status == StatusFilter::All && self.violation == ViolationFilter::All
    }

    /// True when `record` satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        matches_search(record, &self.search.to_lowercase())
            && self.status.admits(record.status)
            && self.violation.admits(record.violation)
    }
}

/// Case-insensitive substring match on name or id. The term is used as
/// typed; only an empty term is inactive.
fn matches_search(record: &Record, needle: &str) -> bool {
    needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record.id.as_str().to_lowercase().contains(needle)
}

/// Records satisfying `criteria`, in their current order.
#[must_use]
pub fn filter_records(records: &[Record], criteria: &Criteria) -> Vec<Record> {
    if criteria.is_empty() {
        return records.to_vec();
    }
    records.iter().filter(|record| criteria.matches(record)).cloned().collect()
}
