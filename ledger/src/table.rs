//! Table rendering: records projected into display rows.
//!
//! Rendering is total. Any record sequence, including an empty one, yields a
//! row set; the [`TableView`] receiving it replaces whatever it showed before.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::record::Record;
use crate::sort::SortField;

/// Column headers in display order, keyed by their sort field.
pub const COLUMNS: [(SortField, &str); 6] = [
    (SortField::Name, "Name"),
    (SortField::Id, "Student ID"),
    (SortField::Violation, "Violation"),
    (SortField::Date, "Date"),
    (SortField::Amount, "Amount"),
    (SortField::Status, "Status"),
];

/// One rendered table row. Cells are display strings in column order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub id: String,
    pub violation: String,
    pub date: String,
    pub amount: String,
    pub status_label: String,
    pub status_class: String,
}

impl TableRow {
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let status = record.status.as_str();
        Self {
            name: record.name.clone(),
            id: record.id.to_string(),
            violation: record.violation.as_str().to_owned(),
            date: record.date.to_string(),
            amount: record.amount.to_string(),
            status_label: capitalize(status),
            status_class: format!("status-badge status-{status}"),
        }
    }

    /// The five plain text cells preceding the status badge.
    #[must_use]
    pub fn text_cells(&self) -> [&str; 5] {
        [&self.name, &self.id, &self.violation, &self.date, &self.amount]
    }
}

/// Display surface for table rows.
pub trait TableView {
    /// Replace all displayed rows with `rows`.
    fn render(&mut self, rows: Vec<TableRow>);
}

impl TableView for Vec<TableRow> {
    fn render(&mut self, rows: Vec<TableRow>) {
        *self = rows;
    }
}

/// Project records into rows, preserving order.
#[must_use]
pub fn render_rows(records: &[Record]) -> Vec<TableRow> {
    records.iter().map(TableRow::from_record).collect()
}

/// Upper-case the first character, leaving the rest unchanged.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
