use super::*;

fn seeded() -> PenaltyTable {
    PenaltyTable::seeded().unwrap()
}

fn row_names(rows: &[TableRow]) -> Vec<String> {
    rows.iter().map(|r| r.name.clone()).collect()
}

// =============================================================
// Pipeline
// =============================================================

#[test]
fn refresh_renders_every_record_by_default() {
    let table = seeded();
    let mut view: Vec<TableRow> = Vec::new();
    table.refresh(&mut view);
    assert_eq!(view.len(), 8);
    assert_eq!(view[0].name, "Aritro Das");
}

#[test]
fn criteria_combine_with_and() {
    let mut table = seeded();
    table.set_status_filter(StatusFilter::Unpaid);
    table.set_violation_filter(ViolationFilter::Major);
    assert_eq!(row_names(&table.rows()), vec!["Ratul Hasan", "Ridwan Siddique"]);

    table.set_search("ridwan");
    assert_eq!(row_names(&table.rows()), vec!["Ridwan Siddique"]);

    table.set_search("sakib");
    assert!(table.rows().is_empty());
}

#[test]
fn refresh_replaces_previous_rows() {
    let mut table = seeded();
    let mut view: Vec<TableRow> = Vec::new();
    table.refresh(&mut view);
    table.set_search("no such student");
    table.refresh(&mut view);
    assert!(view.is_empty());
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn second_sort_by_same_field_reverses_first() {
    let mut table = seeded();
    assert_eq!(table.sort_by(SortField::Name), SortDirection::Ascending);
    let first = row_names(&table.rows());
    assert_eq!(table.sort_by(SortField::Name), SortDirection::Descending);
    let mut second = row_names(&table.rows());
    second.reverse();
    assert_eq!(first, second);
}

#[test]
fn sort_reorders_dataset_and_keeps_filters() {
    let mut table = seeded();
    table.set_status_filter(StatusFilter::Paid);
    table.sort_by(SortField::Amount);

    let amounts = table.dataset().records().iter().map(|r| r.amount.value()).collect::<Vec<_>>();
    assert!(amounts.windows(2).all(|w| w[0] <= w[1]));

    let visible = table.rows().into_iter().map(|r| r.amount).collect::<Vec<_>>();
    assert_eq!(visible, vec!["20tk", "30tk", "50tk", "250tk"]);
}

#[test]
fn header_class_marks_only_active_column() {
    let mut table = seeded();
    assert_eq!(table.header_class(SortField::Date), "");
    table.sort_by(SortField::Date);
    assert_eq!(table.header_class(SortField::Date), "asc");
    table.sort_by(SortField::Date);
    assert_eq!(table.header_class(SortField::Date), "desc");
    table.sort_by(SortField::Status);
    assert_eq!(table.header_class(SortField::Date), "");
    assert_eq!(table.header_class(SortField::Status), "asc");
}

#[test]
fn empty_table_is_valid() {
    let mut table = PenaltyTable::default();
    table.sort_by(SortField::Amount);
    let mut view: Vec<TableRow> = Vec::new();
    table.refresh(&mut view);
    assert!(view.is_empty());
}
