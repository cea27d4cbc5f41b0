use super::*;
use crate::dataset::Dataset;

#[test]
fn rows_follow_fixed_column_order() {
    let dataset = Dataset::seeded().unwrap();
    let rows = render_rows(dataset.records());
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[1].text_cells(), ["Sakib Hasan", "242-35-259", "Major", "2025-10-14", "250tk"]);
    assert_eq!(rows[1].status_label, "Paid");
    assert_eq!(rows[1].status_class, "status-badge status-paid");
}

#[test]
fn unpaid_status_is_capitalized_and_tagged() {
    let dataset = Dataset::seeded().unwrap();
    let row = TableRow::from_record(&dataset.records()[0]);
    assert_eq!(row.status_label, "Unpaid");
    assert_eq!(row.status_class, "status-badge status-unpaid");
}

#[test]
fn empty_sequence_renders_zero_rows() {
    let mut view = vec![TableRow::from_record(&Dataset::seeded().unwrap().records()[0])];
    view.render(render_rows(&[]));
    assert!(view.is_empty());
}

#[test]
fn capitalize_only_touches_first_character() {
    assert_eq!(capitalize("unpaid"), "Unpaid");
    assert_eq!(capitalize("pAID"), "PAID");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("éclair"), "Éclair");
}

#[test]
fn columns_cover_every_sort_field_once() {
    let fields = COLUMNS.iter().map(|(field, _)| *field).collect::<Vec<_>>();
    assert_eq!(fields, SortField::ALL.to_vec());
}
