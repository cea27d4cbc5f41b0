//! Validation errors for violation records.

/// Error returned when a record literal does not have a valid shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The display name is empty or whitespace.
    #[error("record name is empty")]
    EmptyName,
    /// The id does not follow the `nnn-nn-nnn` pattern.
    #[error("invalid record id '{0}' (expected nnn-nn-nnn)")]
    InvalidId(String),
    /// The violation category is not `Minor` or `Major`.
    #[error("unknown violation category '{0}'")]
    UnknownViolation(String),
    /// The payment status is not `paid` or `unpaid`.
    #[error("unknown payment status '{0}'")]
    UnknownStatus(String),
    /// The date is not a calendar date in `YYYY-MM-DD` form.
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
    /// The amount is missing the `tk` suffix or is not a finite number.
    #[error("invalid amount '{0}' (expected <number>tk)")]
    InvalidAmount(String),
    /// Two records share an id.
    #[error("duplicate record id '{0}'")]
    DuplicateId(String),
}
