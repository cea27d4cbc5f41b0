//! The seeded violation dataset.
//!
//! The dataset is populated once from [`SEED`] and afterwards only reordered
//! by the sort stage. Record ids are unique within a dataset.

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;

use std::collections::HashSet;

use crate::error::RecordError;
use crate::record::{Record, RecordLiteral};
use crate::sort::{SortDirection, SortField, sort_records};

const fn seed(
    name: &'static str,
    id: &'static str,
    violation: &'static str,
    date: &'static str,
    amount: &'static str,
    status: &'static str,
) -> RecordLiteral<'static> {
    RecordLiteral { name, id, violation, date, amount, status }
}

/// Records shown on the dashboard at startup, in display order.
pub const SEED: [RecordLiteral<'static>; 8] = [
    seed("Aritro Das", "242-35-260", "Minor", "2025-10-15", "25tk", "unpaid"),
    seed("Sakib Hasan", "242-35-259", "Major", "2025-10-14", "250tk", "paid"),
    seed("Shams Kabir", "242-35-154", "Minor", "2025-10-13", "50tk", "unpaid"),
    seed("Moumita Das", "242-35-834", "Minor", "2025-10-12", "30tk", "paid"),
    seed("Ratul Hasan", "242-35-349", "Major", "2025-10-11", "170tk", "unpaid"),
    seed("Prottoy Kumar Pramanik", "242-35-336", "Minor", "2025-10-10", "20tk", "paid"),
    seed("Ridwan Siddique", "242-35-045", "Major", "2025-10-09", "285tk", "unpaid"),
    seed("Khairun Nazmin Khushi", "242-35-745", "Minor", "2025-10-08", "50tk", "paid"),
];

/// Ordered, id-unique sequence of violation records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Wrap already-validated records, enforcing id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::DuplicateId`] for the first repeated id.
    pub fn from_records(records: Vec<Record>) -> Result<Self, RecordError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(RecordError::DuplicateId(record.id.to_string()));
            }
        }
        Ok(Self { records })
    }

    /// Validate a list of literals into a dataset.
    ///
    /// # Errors
    ///
    /// Returns the first field or uniqueness error.
    pub fn from_literals(literals: &[RecordLiteral<'_>]) -> Result<Self, RecordError> {
        let records = literals.iter().map(Record::parse).collect::<Result<Vec<_>, _>>()?;
        Self::from_records(records)
    }

    /// The dashboard's startup dataset.
    ///
    /// # Errors
    ///
    /// Returns an error only if [`SEED`] itself is malformed.
    pub fn seeded() -> Result<Self, RecordError> {
        Self::from_literals(&SEED)
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reorder the records in place.
    pub fn sort(&mut self, field: SortField, direction: SortDirection) {
        sort_records(&mut self.records, field, direction);
    }
}
