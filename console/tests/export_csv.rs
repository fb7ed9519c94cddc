use hrconsole_console::export::{append_csv_row, records_to_csv};
use hrconsole_core::models::{Branch, LeaveApplication};
use hrconsole_core::record_set::RecordSetView;
use hrconsole_core::services::seed::Seeded;
use hrconsole_core::RecordId;

#[test]
fn csv_escapes_double_quotes() {
    let mut buffer = String::new();
    append_csv_row(&mut buffer, &["say \"hello\""]);
    assert_eq!(buffer, "\"say \"\"hello\"\"\"\n");
}

#[test]
fn csv_formula_guard_with_equals() {
    let mut buffer = String::new();
    append_csv_row(&mut buffer, &["=cmd|' /C calc'!A0".to_string()]);
    assert_eq!(buffer, "\"'=cmd|' /C calc'!A0\"\n");
}

#[test]
fn csv_formula_guard_with_at_and_minus() {
    let mut buffer = String::new();
    append_csv_row(&mut buffer, &["@SUM(A1)", "-2", "plain"]);
    assert_eq!(buffer, "\"'@SUM(A1)\",\"'-2\",\"plain\"\n");
}

#[test]
fn exports_filtered_records_in_collection_order() {
    let mut view = RecordSetView::new(Branch::seed()).unwrap();
    view.set_field_filter("status", "active");
    view.set_search_text("zone");

    let csv = records_to_csv(&view.filtered_records());
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "\"ID\",\"Code\",\"Name\",\"City\",\"Status\"");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("\"br-02\""));
    assert!(lines[3].starts_with("\"br-04\""));
}

#[test]
fn export_includes_records_beyond_the_visible_page() {
    let mut view = RecordSetView::with_page_size(LeaveApplication::seed(), 5).unwrap();
    view.set_field_filter("status", "approved");
    assert_eq!(view.current_page_records().len(), 4);

    view.set_field_filter("status", "all");
    let csv = records_to_csv(&view.filtered_records());
    assert_eq!(csv.lines().count(), 13);
    assert!(csv.contains(&format!("\"{}\"", RecordId::from("lv-012"))));
}
