//! Violation records and their typed fields.
//!
//! Records are built from string literals through [`Record::parse`], which
//! validates every field once so the filter, sort, and render stages can rely
//! on well-formed data.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use std::fmt;

use time::Date;
use time::macros::format_description;

use crate::error::RecordError;

/// Currency suffix carried by every amount.
pub const CURRENCY_SUFFIX: &str = "tk";

/// Severity category of a recorded infraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Violation {
    Minor,
    Major,
}

impl Violation {
    /// Parse a category name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::UnknownViolation`] for anything but minor/major.
    pub fn parse(raw: &str) -> Result<Self, RecordError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            _ => Err(RecordError::UnknownViolation(raw.to_owned())),
        }
    }

    /// Display text, as shown in the table.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minor => "Minor",
            Self::Major => "Major",
        }
    }
}

/// Payment state of a penalty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl PaymentStatus {
    /// Parse a status value, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::UnknownStatus`] for anything but paid/unpaid.
    pub fn parse(raw: &str) -> Result<Self, RecordError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "paid" => Ok(Self::Paid),
            "unpaid" => Ok(Self::Unpaid),
            _ => Err(RecordError::UnknownStatus(raw.to_owned())),
        }
    }

    /// Lowercase wire value, also used as the CSS class suffix.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
        }
    }
}

/// Student identifier in `nnn-nn-nnn` form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StudentId(String);

impl StudentId {
    /// Validate and wrap an id.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidId`] when the groups are not 3, 2 and 3
    /// ASCII digits separated by dashes.
    pub fn parse(raw: &str) -> Result<Self, RecordError> {
        let trimmed = raw.trim();
        let groups = trimmed.split('-').collect::<Vec<_>>();
        let well_formed = groups.len() == 3
            && groups
                .iter()
                .zip([3_usize, 2, 3])
                .all(|(group, len)| group.len() == len && group.bytes().all(|b| b.is_ascii_digit()));
        if well_formed {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(RecordError::InvalidId(raw.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Penalty amount. Keeps the literal text for display and the parsed value
/// for numeric comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct Amount {
    value: f64,
    text: String,
}

impl Amount {
    /// Parse `<number>tk`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidAmount`] when the suffix is missing or the
    /// numeral is not a finite number.
    pub fn parse(raw: &str) -> Result<Self, RecordError> {
        let trimmed = raw.trim();
        let invalid = || RecordError::InvalidAmount(raw.to_owned());
        let numeral = trimmed.strip_suffix(CURRENCY_SUFFIX).ok_or_else(invalid)?;
        let value = numeral.trim().parse::<f64>().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        Ok(Self { value, text: trimmed.to_owned() })
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Unvalidated record fields, as written in the seed list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordLiteral<'a> {
    pub name: &'a str,
    pub id: &'a str,
    pub violation: &'a str,
    pub date: &'a str,
    pub amount: &'a str,
    pub status: &'a str,
}

/// One recorded infraction.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub name: String,
    pub id: StudentId,
    pub violation: Violation,
    pub date: Date,
    pub amount: Amount,
    pub status: PaymentStatus,
}

impl Record {
    /// Validate every field of a literal.
    ///
    /// # Errors
    ///
    /// Returns the first [`RecordError`] encountered, in column order.
    pub fn parse(literal: &RecordLiteral<'_>) -> Result<Self, RecordError> {
        let name = literal.name.trim();
        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }
        Ok(Self {
            name: name.to_owned(),
            id: StudentId::parse(literal.id)?,
            violation: Violation::parse(literal.violation)?,
            date: parse_date(literal.date)?,
            amount: Amount::parse(literal.amount)?,
            status: PaymentStatus::parse(literal.status)?,
        })
    }
}

fn parse_date(raw: &str) -> Result<Date, RecordError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| RecordError::InvalidDate(raw.to_owned()))
}
