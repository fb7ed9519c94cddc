//! Plain-text tables for the terminal.

use std::fmt::Write as _;

use chrono::NaiveDateTime;
use hrconsole_core::lifecycle::RequestStatistics;
use hrconsole_core::models::{
    ApprovalRequest, AttendanceRequest, Branch, CorrectionKind, Deputation, Employee,
    LeaveApplication, LeaveType, Transfer,
};
use hrconsole_core::record_set::PaginationSummary;

const TIME_FORMAT: &str = "%H:%M";

/// Columns shown for a record kind, shared by the table view and CSV export.
pub trait Tabular {
    const COLUMNS: &'static [&'static str];

    /// One cell per entry of `COLUMNS`.
    fn cells(&self) -> Vec<String>;
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

impl Tabular for Branch {
    const COLUMNS: &'static [&'static str] = &["ID", "Code", "Name", "City", "Status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.code.clone(),
            self.name.clone(),
            self.city.clone(),
            if self.is_active { "active" } else { "inactive" }.to_string(),
        ]
    }
}

impl Tabular for LeaveType {
    const COLUMNS: &'static [&'static str] = &["ID", "Code", "Name", "Annual credits", "Paid"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.code.clone(),
            self.name.clone(),
            self.annual_credits.to_string(),
            if self.is_paid { "yes" } else { "no" }.to_string(),
        ]
    }
}

impl Tabular for Employee {
    const COLUMNS: &'static [&'static str] = &[
        "Emp ID",
        "Name",
        "Email",
        "Branch",
        "Department",
        "Role",
        "Status",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.emp_id.clone(),
            self.full_name.clone(),
            self.email.clone(),
            self.branch.clone(),
            self.department.clone(),
            self.role.clone(),
            self.status.as_str().to_string(),
        ]
    }
}

impl Tabular for Deputation {
    const COLUMNS: &'static [&'static str] = &[
        "ID", "Emp ID", "Name", "From", "To", "Start", "End", "Status",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.emp_id.clone(),
            self.employee_name.clone(),
            self.from_branch.clone(),
            self.to_branch.clone(),
            self.start_date.to_string(),
            or_dash(self.end_date.map(|date| date.to_string())),
            self.status.as_str().to_string(),
        ]
    }
}

impl Tabular for Transfer {
    const COLUMNS: &'static [&'static str] =
        &["ID", "Emp ID", "Name", "From", "To", "Effective", "Status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.emp_id.clone(),
            self.employee_name.clone(),
            self.from_branch.clone(),
            self.to_branch.clone(),
            self.effective_date.to_string(),
            self.status.as_str().to_string(),
        ]
    }
}

impl Tabular for AttendanceRequest {
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Emp ID",
        "Name",
        "Date",
        "Recorded",
        "Requested",
        "Kind",
        "Status",
        "Reason",
    ];

    fn cells(&self) -> Vec<String> {
        let span = |in_time: Option<NaiveDateTime>, out_time: Option<NaiveDateTime>| {
            format!(
                "{}-{}",
                or_dash(in_time.map(|t| t.format(TIME_FORMAT).to_string())),
                or_dash(out_time.map(|t| t.format(TIME_FORMAT).to_string()))
            )
        };
        vec![
            self.id.to_string(),
            self.emp_id.clone(),
            self.employee_name.clone(),
            self.date.to_string(),
            span(self.original.clock_in_time, self.original.clock_out_time),
            span(self.requested.clock_in_time, self.requested.clock_out_time),
            correction_label(self.correction_kind()).to_string(),
            self.status.as_str().to_string(),
            self.reason.clone(),
        ]
    }
}

impl Tabular for LeaveApplication {
    const COLUMNS: &'static [&'static str] = &[
        "ID", "Emp ID", "Name", "Type", "From", "To", "Days", "Balance", "Status", "Reason",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.emp_id.clone(),
            self.employee_name.clone(),
            self.leave_type.clone(),
            self.period.from_date.to_string(),
            self.period.to_date.to_string(),
            self.period.days().to_string(),
            or_dash(self.remaining_credits.map(|credits| format!("{:.1}", credits))),
            self.status.as_str().to_string(),
            self.reason.clone(),
        ]
    }
}

fn correction_label(kind: CorrectionKind) -> &'static str {
    match kind {
        CorrectionKind::MissingPunch => "missing punch",
        CorrectionKind::TimeCorrection => "time correction",
        CorrectionKind::Confirmation => "confirmation",
        CorrectionKind::NotApplicable => "-",
    }
}

/// Renders the visible page as an aligned table with a range footer.
pub fn render_page<R: Tabular>(title: &str, rows: &[&R], summary: &PaginationSummary) -> String {
    let cells: Vec<Vec<String>> = rows.iter().map(|row| row.cells()).collect();
    let mut widths: Vec<usize> = R::COLUMNS.iter().map(|c| c.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    push_row(&mut out, R::COLUMNS.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &cells {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    let _ = writeln!(
        out,
        "{} (page {} of {})",
        summary.display_range(),
        summary.current_page,
        summary.total_pages
    );
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

pub fn render_statistics(title: &str, stats: &RequestStatistics) -> String {
    let rows = [
        ("Total", stats.total_requests),
        ("Pending", stats.pending_requests),
        ("Approved", stats.approved_requests),
        ("Rejected", stats.rejected_requests),
        ("Missing punch", stats.missing_punch),
        ("Time correction", stats.time_correction),
    ];
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    for (label, count) in rows {
        let _ = writeln!(out, "{:<16}{:>6}", label, count);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrconsole_core::record_set::RecordSetView;
    use hrconsole_core::services::seed::Seeded;

    #[test]
    fn renders_last_page_with_footer() {
        let mut view = RecordSetView::with_page_size(LeaveApplication::seed(), 5).unwrap();
        view.set_page(3);
        let text = render_page("Leave applications", &view.current_page_records(), &view.pagination_summary());

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Leave applications");
        assert!(lines[1].starts_with("ID "));
        assert!(lines[3].starts_with("lv-011"));
        assert!(lines[4].starts_with("lv-012"));
        assert_eq!(lines[5], "Showing 11 to 12 of 12 (page 3 of 3)");
    }

    #[test]
    fn attendance_cells_show_missing_punches() {
        let request = AttendanceRequest::seed().remove(1);
        let cells = request.cells();
        assert_eq!(cells.len(), AttendanceRequest::COLUMNS.len());
        assert_eq!(cells[4], "---");
        assert_eq!(cells[5], "09:00-17:30");
        assert_eq!(cells[6], "missing punch");
    }

    #[test]
    fn empty_page_reports_no_records() {
        let view = RecordSetView::<Branch>::new(Vec::new()).unwrap();
        let text = render_page("Branches", &view.current_page_records(), &view.pagination_summary());
        assert!(text.ends_with("No records (page 1 of 1)\n"));
    }

    #[test]
    fn statistics_table_lists_every_bucket() {
        let stats = hrconsole_core::lifecycle::derive_statistics(&AttendanceRequest::seed());
        let text = render_statistics("Attendance requests", &stats);
        assert!(text.contains("Pending              5"));
        assert!(text.contains("Missing punch        4"));
    }
}
