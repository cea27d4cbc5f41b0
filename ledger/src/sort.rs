//! Column sorting.
//!
//! Dates compare chronologically, amounts numerically on the parsed value,
//! and every other column lexicographically on its display text. The sort is
//! stable, so equal keys keep their previous relative order.
//!
//! Direction tracking: activating a column other than the active one sorts it
//! ascending; activating the active column again flips its direction.

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;

use std::cmp::Ordering;

use crate::record::Record;

/// Sortable table columns, named by their `data-sort` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Id,
    Violation,
    Date,
    Amount,
    Status,
}

impl SortField {
    /// All columns in table order.
    pub const ALL: [Self; 6] = [Self::Name, Self::Id, Self::Violation, Self::Date, Self::Amount, Self::Status];

    /// Parse a `data-sort` attribute value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "id" => Some(Self::Id),
            "violation" => Some(Self::Violation),
            "date" => Some(Self::Date),
            "amount" => Some(Self::Amount),
            "status" => Some(Self::Status),
            _ => None,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Id => "id",
            Self::Violation => "violation",
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Status => "status",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header class marking the active column.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Value for the header's `aria-sort` attribute.
    #[must_use]
    pub fn aria(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// The single active sort column, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(SortField, SortDirection)>,
}

impl SortState {
    /// Record a header activation and return the direction to sort in.
    pub fn activate(&mut self, field: SortField) -> SortDirection {
        let direction = match self.active {
            Some((active, direction)) if active == field => direction.toggled(),
            _ => SortDirection::Ascending,
        };
        self.active = Some((field, direction));
        direction
    }

    #[must_use]
    pub fn active(&self) -> Option<(SortField, SortDirection)> {
        self.active
    }

    /// Direction of `field` if it is the active column.
    #[must_use]
    pub fn direction_of(&self, field: SortField) -> Option<SortDirection> {
        self.active.filter(|(active, _)| *active == field).map(|(_, direction)| direction)
    }
}

/// Compare two records by a single column, ascending.
#[must_use]
pub fn compare(a: &Record, b: &Record, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Id => a.id.as_str().cmp(b.id.as_str()),
        SortField::Violation => a.violation.as_str().cmp(b.violation.as_str()),
        SortField::Date => a.date.cmp(&b.date),
        SortField::Amount => a.amount.value().total_cmp(&b.amount.value()),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

/// Stable in-place sort of `records` by `field`.
pub fn sort_records(records: &mut [Record], field: SortField, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
