//! Penalty table controller.
//!
//! DESIGN
//! ======
//! [`PenaltyTable`] owns the dataset, the active criteria, and the sort state.
//! Every interaction mutates that state and then re-runs the pipeline:
//! dataset -> filter -> rows -> [`TableView::render`]. Sorting reorders the
//! dataset itself, and the active criteria stay applied afterwards.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::dataset::Dataset;
use crate::error::RecordError;
use crate::filter::{Criteria, StatusFilter, ViolationFilter, filter_records};
use crate::record::Record;
use crate::sort::{SortDirection, SortField, SortState};
use crate::table::{TableRow, TableView, render_rows};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PenaltyTable {
    dataset: Dataset,
    criteria: Criteria,
    sort: SortState,
}

impl PenaltyTable {
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset, criteria: Criteria::default(), sort: SortState::default() }
    }

    /// Controller over the startup dataset.
    ///
    /// # Errors
    ///
    /// Propagates seed validation failures.
    pub fn seeded() -> Result<Self, RecordError> {
        Dataset::seeded().map(Self::new)
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    #[must_use]
    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.criteria.search = term.into();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.criteria.status = status;
    }

    pub fn set_violation_filter(&mut self, violation: ViolationFilter) {
        self.criteria.violation = violation;
    }

    /// Handle a header activation: reorder the dataset and return the
    /// direction applied.
    pub fn sort_by(&mut self, field: SortField) -> SortDirection {
        let direction = self.sort.activate(field);
        self.dataset.sort(field, direction);
        direction
    }

    /// Records passing the active criteria, in dataset order.
    #[must_use]
    pub fn visible(&self) -> Vec<Record> {
        filter_records(self.dataset.records(), &self.criteria)
    }

    #[must_use]
    pub fn rows(&self) -> Vec<TableRow> {
        render_rows(&self.visible())
    }

    /// Push the current rows to `view`.
    pub fn refresh<V: TableView + ?Sized>(&self, view: &mut V) {
        view.render(self.rows());
    }

    /// Header class for `field`: `asc`/`desc` on the active column, empty otherwise.
    #[must_use]
    pub fn header_class(&self, field: SortField) -> &'static str {
        self.sort.direction_of(field).map_or("", SortDirection::class)
    }
}
