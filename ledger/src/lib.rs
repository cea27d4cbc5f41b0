//! Penalty ledger: the tabular data view behind the violations dashboard.
//!
//! This crate is UI-agnostic. It owns the violation record model, the seeded
//! dataset, and the filter -> sort -> render pipeline that the browser client
//! drives from search input, filter selects, and column-header clicks. Nothing
//! here touches the DOM; rendering goes through the [`table::TableView`]
//! capability so the pipeline is testable with a plain `Vec`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`record`] | Violation record and its typed fields |
//! | [`dataset`] | Seed literals and the validated, ordered dataset |
//! | [`filter`] | Search/status/violation criteria and the view filter |
//! | [`sort`] | Sort fields, directions, and the in-place comparator |
//! | [`table`] | Display rows, column headers, and the `TableView` trait |
//! | [`controller`] | [`controller::PenaltyTable`], which owns all table state |
//! | [`error`] | Record validation errors |

pub mod controller;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod record;
pub mod sort;
pub mod table;

pub use controller::PenaltyTable;
pub use dataset::Dataset;
pub use error::RecordError;
pub use filter::{Criteria, StatusFilter, ViolationFilter};
pub use record::{Amount, PaymentStatus, Record, RecordLiteral, StudentId, Violation};
pub use sort::{SortDirection, SortField, SortState};
pub use table::{TableRow, TableView};
