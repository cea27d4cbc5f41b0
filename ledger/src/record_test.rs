use super::*;

fn literal() -> RecordLiteral<'static> {
    RecordLiteral {
        name: "Aritro Das",
        id: "242-35-260",
        violation: "Minor",
        date: "2025-10-15",
        amount: "25tk",
        status: "unpaid",
    }
}

// =============================================================
// Record::parse
// =============================================================

#[test]
fn parse_accepts_seed_shaped_literal() {
    let record = Record::parse(&literal()).unwrap();
    assert_eq!(record.name, "Aritro Das");
    assert_eq!(record.id.as_str(), "242-35-260");
    assert_eq!(record.violation, Violation::Minor);
    assert_eq!(record.date.to_string(), "2025-10-15");
    assert_eq!(record.amount.as_str(), "25tk");
    assert!((record.amount.value() - 25.0).abs() < f64::EPSILON);
    assert_eq!(record.status, PaymentStatus::Unpaid);
}

#[test]
fn parse_rejects_blank_name() {
    let lit = RecordLiteral { name: "   ", ..literal() };
    assert_eq!(Record::parse(&lit), Err(RecordError::EmptyName));
}

#[test]
fn parse_reports_first_bad_field() {
    let lit = RecordLiteral { id: "24235260", status: "late", ..literal() };
    assert_eq!(Record::parse(&lit), Err(RecordError::InvalidId("24235260".to_owned())));
}

#[test]
fn parse_rejects_impossible_date() {
    let lit = RecordLiteral { date: "2025-02-30", ..literal() };
    assert_eq!(Record::parse(&lit), Err(RecordError::InvalidDate("2025-02-30".to_owned())));
}

// =============================================================
// Field parsers
// =============================================================

#[test]
fn student_id_requires_three_two_three_digits() {
    assert!(StudentId::parse("242-35-045").is_ok());
    assert!(StudentId::parse("242-35-04").is_err());
    assert!(StudentId::parse("24-235-045").is_err());
    assert!(StudentId::parse("242-3a-045").is_err());
    assert!(StudentId::parse("242-35-045-1").is_err());
}

#[test]
fn amount_strips_currency_suffix() {
    let amount = Amount::parse("250tk").unwrap();
    assert!((amount.value() - 250.0).abs() < f64::EPSILON);
    assert_eq!(amount.to_string(), "250tk");

    let fractional = Amount::parse("12.5tk").unwrap();
    assert!((fractional.value() - 12.5).abs() < f64::EPSILON);
}

#[test]
fn amount_rejects_missing_suffix_and_garbage() {
    assert_eq!(Amount::parse("250"), Err(RecordError::InvalidAmount("250".to_owned())));
    assert_eq!(Amount::parse("$250"), Err(RecordError::InvalidAmount("$250".to_owned())));
    assert_eq!(Amount::parse("tk"), Err(RecordError::InvalidAmount("tk".to_owned())));
    assert_eq!(Amount::parse("inftk"), Err(RecordError::InvalidAmount("inftk".to_owned())));
}

#[test]
fn violation_and_status_parse_case_insensitively() {
    assert_eq!(Violation::parse("MAJOR").unwrap(), Violation::Major);
    assert_eq!(Violation::parse("minor").unwrap().as_str(), "Minor");
    assert_eq!(PaymentStatus::parse("Paid").unwrap(), PaymentStatus::Paid);
    assert_eq!(PaymentStatus::Unpaid.as_str(), "unpaid");
    assert!(Violation::parse("none").is_err());
    assert!(PaymentStatus::parse("pending").is_err());
}
