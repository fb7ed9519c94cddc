use hrconsole_core::models::{AttendanceRequest, Employee, LeaveApplication, Record};
use hrconsole_core::record_set::RecordSetView;
use hrconsole_core::services::seed::Seeded;
use hrconsole_core::RecordId;

fn ids<R: Record>(records: &[&R]) -> Vec<RecordId> {
    records.iter().map(|record| record.id().clone()).collect()
}

#[test]
fn twelve_leave_applications_span_three_pages_of_five() {
    let all = LeaveApplication::seed();
    let mut view = RecordSetView::with_page_size(all.clone(), 5).unwrap();

    assert_eq!(view.pagination_summary().total_pages, 3);

    view.set_page(3);
    let page = view.current_page_records();
    assert_eq!(page.len(), 2);
    assert_eq!(
        ids(&page),
        vec![all[10].id.clone(), all[11].id.clone()]
    );

    let summary = view.pagination_summary();
    assert_eq!((summary.start_index, summary.end_index), (10, 12));
}

#[test]
fn search_by_employee_code_finds_single_attendance_request() {
    let mut view = RecordSetView::new(AttendanceRequest::seed()).unwrap();
    view.set_search_text("EMP1002");

    let matches = view.filtered_records();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].emp_id, "EMP1002");
    assert_eq!(matches[0].id, RecordId::from("att-002"));
}

#[test]
fn search_matches_names_and_reasons_case_insensitively() {
    let mut view = RecordSetView::new(AttendanceRequest::seed()).unwrap();

    view.set_search_text("priya");
    assert_eq!(view.filtered_count(), 1);

    view.set_search_text("PUNCH");
    let found: Vec<_> = view.filtered_records().iter().map(|r| r.id.to_string()).collect();
    assert_eq!(found, vec!["att-003", "att-004"]);
}

#[test]
fn changing_page_size_returns_to_first_page() {
    let mut view = RecordSetView::with_page_size(Employee::seed(), 2).unwrap();
    view.set_page(3);
    assert_eq!(view.current_page(), 3);

    view.set_page_size(25).unwrap();
    assert_eq!(view.current_page(), 1);
    assert_eq!(view.current_page_records().len(), 10);
}

#[test]
fn filters_and_search_compose() {
    let mut view = RecordSetView::new(LeaveApplication::seed()).unwrap();
    view.set_field_filter("status", "pending");
    view.set_field_filter("leave_type", "annual");

    let matches = view.filtered_records();
    assert!(matches
        .iter()
        .all(|r| r.status.as_str() == "pending" && r.leave_type == "annual"));
    assert_eq!(ids(&matches), vec![RecordId::from("lv-001"), RecordId::from("lv-004")]);

    view.set_search_text("vacation");
    assert_eq!(ids(&view.filtered_records()), vec![RecordId::from("lv-004")]);

    view.set_field_filter("leave_type", "all");
    view.set_search_text("");
    assert_eq!(view.filtered_count(), 6);
}

#[test]
fn page_stays_clamped_after_filter_is_widened_again() {
    let mut view = RecordSetView::with_page_size(Employee::seed(), 2).unwrap();
    view.set_page(5);
    assert_eq!(view.current_page(), 5);

    view.set_field_filter("branch", "North Zone");
    assert_eq!(view.current_page(), 2);

    view.set_field_filter("branch", "all");
    assert_eq!(view.current_page(), 2);
    assert_eq!(view.pagination_summary().start_index, 2);
}

#[test]
fn filter_membership_matches_predicate_for_every_record() {
    let mut view = RecordSetView::new(Employee::seed()).unwrap();
    view.set_field_filter("branch", "North Zone");
    view.set_search_text("a");

    let filtered = ids(&view.filtered_records());
    for employee in view.records() {
        let expected = employee.branch.eq_ignore_ascii_case("north zone")
            && employee
                .searchable_fields()
                .iter()
                .any(|field| field.to_lowercase().contains('a'));
        assert_eq!(filtered.contains(&employee.id), expected, "{}", employee.emp_id);
    }
}

#[test]
fn invalid_page_size_is_rejected_and_state_kept() {
    let mut view = RecordSetView::with_page_size(LeaveApplication::seed(), 5).unwrap();
    view.set_page(2);

    let err = view.set_page_size(0).unwrap_err();
    assert_eq!(err.code(), "INVALID_ARGUMENT");
    assert_eq!(view.page_size(), 5);
    assert_eq!(view.current_page(), 2);
}
