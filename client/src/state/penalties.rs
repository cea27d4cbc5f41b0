//! Penalty table wiring for the page.
//!
//! The table controller lives in the `ledger` crate. This module seeds it,
//! adapts the displayed rows signal to [`TableView`], and derives the
//! headline numbers shown in the stat cards.

#[cfg(test)]
#[path = "penalties_test.rs"]
mod penalties_test;

use leptos::prelude::*;
use ledger::{Dataset, PaymentStatus, PenaltyTable, TableRow, TableView, Violation};

/// Rows currently shown in the table body.
#[derive(Clone, Copy)]
pub struct RowsSurface(pub RwSignal<Vec<TableRow>>);

impl TableView for RowsSurface {
    fn render(&mut self, rows: Vec<TableRow>) {
        self.0.set(rows);
    }
}

/// Controller over the seed data, or an empty table if the seed is rejected.
pub fn initial_table() -> PenaltyTable {
    PenaltyTable::seeded().unwrap_or_else(|err| {
        leptos::logging::warn!("penalty seed rejected: {err}");
        PenaltyTable::default()
    })
}

/// Headline figures for the stat cards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PenaltySummary {
    pub total: usize,
    pub unpaid: usize,
    pub major: usize,
    pub collected: f64,
}

impl PenaltySummary {
    #[must_use]
    pub fn of(dataset: &Dataset) -> Self {
        dataset.records().iter().fold(Self::default(), |mut acc, record| {
            acc.total += 1;
            if record.violation == Violation::Major {
                acc.major += 1;
            }
            match record.status {
                PaymentStatus::Unpaid => acc.unpaid += 1,
                PaymentStatus::Paid => acc.collected += record.amount.value(),
            }
            acc
        })
    }

    /// Stat cards as (value, label).
    #[must_use]
    pub fn cards(&self) -> [(String, &'static str); 4] {
        [
            (self.total.to_string(), "Recorded Violations"),
            (self.unpaid.to_string(), "Unpaid Penalties"),
            (self.major.to_string(), "Major Violations"),
            (format!("{}tk", self.collected), "Fines Collected"),
        ]
    }
}
