//! Demo dataset used when no back end is configured.
//!
//! The attendance set holds five pending requests covering each statistics
//! bucket; the leave set holds twelve applications so it spans several pages.

use chrono::{NaiveDate, NaiveDateTime};

use super::data_source::InMemoryDataSource;
use crate::models::{
    AttendanceRequest, Branch, Deputation, DeputationStatus, Employee, EmployeeStatus,
    LeaveApplication, LeavePeriod, LeaveType, PunchSnapshot, RequestStatus, Resource, Transfer,
    TransferStatus,
};
use crate::types::RecordId;

/// Record kinds with a built-in demo collection.
pub trait Seeded: Resource + Sized {
    fn seed() -> Vec<Self>;
}

impl<R: Seeded> InMemoryDataSource<R> {
    pub fn seeded() -> Self {
        Self::new(R::seed())
    }
}

fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap_or_default()
}

fn punch(date: NaiveDate, time: Option<(u32, u32)>) -> Option<NaiveDateTime> {
    time.and_then(|(hour, minute)| date.and_hms_opt(hour, minute, 0))
}

type Punches = (Option<(u32, u32)>, Option<(u32, u32)>);

impl Seeded for Branch {
    fn seed() -> Vec<Self> {
        [
            ("br-01", "HQ", "Head Office", "Mumbai", true),
            ("br-02", "NZ", "North Zone", "Delhi", true),
            ("br-03", "SZ", "South Zone", "Chennai", true),
            ("br-04", "EZ", "East Zone", "Kolkata", true),
            ("br-05", "WA", "West Annex", "Pune", false),
        ]
        .into_iter()
        .map(|(id, code, name, city, is_active)| Branch {
            id: RecordId::from(id),
            code: code.into(),
            name: name.into(),
            city: city.into(),
            is_active,
        })
        .collect()
    }
}

impl Seeded for LeaveType {
    fn seed() -> Vec<Self> {
        [
            (1, "AL", "Annual Leave", 18, true),
            (2, "SL", "Sick Leave", 12, true),
            (3, "CL", "Casual Leave", 8, true),
            (4, "LWP", "Leave Without Pay", 0, false),
        ]
        .into_iter()
        .map(|(id, code, name, annual_credits, is_paid)| LeaveType {
            id: RecordId::from(id),
            code: code.into(),
            name: name.into(),
            annual_credits,
            is_paid,
        })
        .collect()
    }
}

impl Seeded for Employee {
    fn seed() -> Vec<Self> {
        [
            ("EMP1001", "Aarav Sharma", "Head Office", "Finance", "manager", EmployeeStatus::Active),
            ("EMP1002", "Priya Nair", "North Zone", "Operations", "staff", EmployeeStatus::Active),
            ("EMP1003", "Rohan Gupta", "South Zone", "IT", "staff", EmployeeStatus::Active),
            ("EMP1004", "Meera Iyer", "Head Office", "HR", "admin", EmployeeStatus::Active),
            ("EMP1005", "Kabir Singh", "East Zone", "Sales", "staff", EmployeeStatus::OnLeave),
            ("EMP1006", "Ananya Rao", "North Zone", "Finance", "staff", EmployeeStatus::Active),
            ("EMP1007", "Vikram Das", "South Zone", "Operations", "manager", EmployeeStatus::Active),
            ("EMP1008", "Sneha Kulkarni", "East Zone", "IT", "staff", EmployeeStatus::Inactive),
            ("EMP1009", "Arjun Menon", "Head Office", "Sales", "staff", EmployeeStatus::Active),
            ("EMP1010", "Divya Pillai", "North Zone", "HR", "staff", EmployeeStatus::Active),
        ]
        .into_iter()
        .enumerate()
        .map(|(index, (emp_id, name, branch, department, role, status))| Employee {
            id: RecordId::from(index as i64 + 1),
            emp_id: emp_id.into(),
            full_name: name.into(),
            email: format!(
                "{}@example.com",
                name.to_ascii_lowercase().replace(' ', ".")
            ),
            branch: branch.into(),
            department: department.into(),
            role: role.into(),
            status,
        })
        .collect()
    }
}

impl Seeded for Deputation {
    fn seed() -> Vec<Self> {
        [
            ("dep-01", "EMP1003", "Rohan Gupta", "South Zone", "Head Office", day(1, 6), Some(day(3, 31)), DeputationStatus::Completed, "ERP rollout support"),
            ("dep-02", "EMP1006", "Ananya Rao", "North Zone", "East Zone", day(3, 1), Some(day(6, 30)), DeputationStatus::Active, "Quarter-end audit"),
            ("dep-03", "EMP1009", "Arjun Menon", "Head Office", "South Zone", day(4, 14), None, DeputationStatus::Active, "New client onboarding"),
            ("dep-04", "EMP1010", "Divya Pillai", "North Zone", "Head Office", day(7, 1), Some(day(9, 30)), DeputationStatus::Upcoming, "Policy harmonisation"),
        ]
        .into_iter()
        .map(|(id, emp_id, name, from, to, start_date, end_date, status, remarks)| Deputation {
            id: RecordId::from(id),
            emp_id: emp_id.into(),
            employee_name: name.into(),
            from_branch: from.into(),
            to_branch: to.into(),
            start_date,
            end_date,
            status,
            remarks: remarks.into(),
        })
        .collect()
    }
}

impl Seeded for Transfer {
    fn seed() -> Vec<Self> {
        [
            ("tr-01", "EMP1002", "Priya Nair", "Head Office", "North Zone", day(2, 1), TransferStatus::Completed, "Relocation request"),
            ("tr-02", "EMP1007", "Vikram Das", "East Zone", "South Zone", day(5, 1), TransferStatus::Scheduled, "Branch leadership"),
            ("tr-03", "EMP1005", "Kabir Singh", "East Zone", "Head Office", day(6, 15), TransferStatus::Cancelled, "Withdrawn by employee"),
            ("tr-04", "EMP1004", "Meera Iyer", "South Zone", "Head Office", day(8, 1), TransferStatus::Scheduled, "Central HR consolidation"),
        ]
        .into_iter()
        .map(|(id, emp_id, name, from, to, effective_date, status, reason)| Transfer {
            id: RecordId::from(id),
            emp_id: emp_id.into(),
            employee_name: name.into(),
            from_branch: from.into(),
            to_branch: to.into(),
            effective_date,
            status,
            reason: reason.into(),
        })
        .collect()
    }
}

impl Seeded for AttendanceRequest {
    fn seed() -> Vec<Self> {
        let rows: [(&str, &str, &str, &str, &str, u32, Punches, Punches, &str, RequestStatus, Option<&str>); 8] = [
            ("att-001", "EMP1001", "Aarav Sharma", "Head Office", "Finance", 3,
                (Some((9, 40)), Some((18, 5))), (Some((9, 0)), Some((18, 5))),
                "Biometric device lag at entry", RequestStatus::Pending, None),
            ("att-002", "EMP1002", "Priya Nair", "North Zone", "Operations", 4,
                (None, None), (Some((9, 0)), Some((17, 30))),
                "Attended offsite client meeting", RequestStatus::Pending, None),
            ("att-003", "EMP1003", "Rohan Gupta", "South Zone", "IT", 4,
                (Some((9, 5)), None), (Some((9, 5)), Some((19, 0))),
                "Forgot to punch out after release", RequestStatus::Pending, None),
            ("att-004", "EMP1004", "Meera Iyer", "Head Office", "HR", 5,
                (Some((10, 15)), Some((18, 30))), (Some((9, 15)), Some((18, 30))),
                "Punch recorded late due to queue", RequestStatus::Pending, None),
            ("att-005", "EMP1005", "Kabir Singh", "East Zone", "Sales", 5,
                (Some((9, 0)), Some((18, 0))), (Some((9, 0)), Some((18, 0))),
                "Confirming disputed hours", RequestStatus::Pending, None),
            ("att-006", "EMP1006", "Ananya Rao", "North Zone", "Finance", 6,
                (None, Some((18, 10))), (Some((8, 55)), Some((18, 10))),
                "Card reader outage", RequestStatus::Approved, Some("Verified with security log")),
            ("att-007", "EMP1007", "Vikram Das", "South Zone", "Operations", 6,
                (Some((9, 20)), Some((17, 0))), (Some((9, 0)), Some((18, 0))),
                "Stayed for vendor call", RequestStatus::Approved, None),
            ("att-008", "EMP1008", "Sneha Kulkarni", "East Zone", "IT", 7,
                (None, None), (Some((9, 0)), Some((18, 0))),
                "Worked from site", RequestStatus::Rejected, Some("No supporting evidence")),
        ];

        rows.into_iter()
            .map(
                |(id, emp_id, name, branch, department, date_day, original, requested, reason, status, note)| {
                    let date = day(3, date_day);
                    AttendanceRequest {
                        id: RecordId::from(id),
                        emp_id: emp_id.into(),
                        employee_name: name.into(),
                        branch: branch.into(),
                        department: department.into(),
                        date,
                        original: PunchSnapshot::new(punch(date, original.0), punch(date, original.1)),
                        requested: PunchSnapshot::new(punch(date, requested.0), punch(date, requested.1)),
                        reason: reason.into(),
                        status,
                        decision_note: note.map(str::to_string),
                    }
                },
            )
            .collect()
    }
}

impl Seeded for LeaveApplication {
    fn seed() -> Vec<Self> {
        let employees = Employee::seed();
        let plan: [(&str, (u32, u32), (u32, u32), f64, RequestStatus, &str); 12] = [
            ("annual", (4, 7), (4, 11), 13.0, RequestStatus::Pending, "Family function"),
            ("sick", (4, 2), (4, 3), 10.0, RequestStatus::Approved, "Fever"),
            ("casual", (4, 18), (4, 18), 6.0, RequestStatus::Pending, "Bank errand"),
            ("annual", (5, 5), (5, 16), 0.0, RequestStatus::Pending, "Vacation abroad"),
            ("sick", (3, 24), (3, 26), 9.0, RequestStatus::Rejected, "Medical appointment"),
            ("annual", (6, 2), (6, 6), 8.0, RequestStatus::Approved, "Home town visit"),
            ("casual", (4, 21), (4, 21), 7.0, RequestStatus::Pending, "School open day"),
            ("unpaid", (5, 19), (5, 30), 0.0, RequestStatus::Pending, "Extended personal leave"),
            ("annual", (4, 28), (4, 30), 15.0, RequestStatus::Approved, "Wedding"),
            ("sick", (4, 14), (4, 15), 11.0, RequestStatus::Pending, "Dental surgery"),
            ("casual", (5, 2), (5, 2), 5.0, RequestStatus::Rejected, "Moving house"),
            ("annual", (7, 7), (7, 18), 18.0, RequestStatus::Approved, "Summer break"),
        ];

        plan.into_iter()
            .zip(employees.iter().cycle())
            .enumerate()
            .map(|(index, ((leave_type, from, to, remaining, status, reason), employee))| {
                LeaveApplication {
                    id: RecordId::from(format!("lv-{:03}", index + 1)),
                    emp_id: employee.emp_id.clone(),
                    employee_name: employee.full_name.clone(),
                    branch: employee.branch.clone(),
                    department: employee.department.clone(),
                    leave_type: leave_type.into(),
                    period: LeavePeriod::new(day(from.0, from.1), day(to.0, to.1)),
                    reason: reason.into(),
                    remaining_credits: Some(remaining),
                    status,
                    decision_note: None,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use std::collections::HashSet;

    fn assert_unique<R: Record>(records: &[R]) {
        let ids: HashSet<_> = records.iter().map(|r| r.id().clone()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn seed_collections_have_unique_ids() {
        assert_unique(&Branch::seed());
        assert_unique(&LeaveType::seed());
        assert_unique(&Employee::seed());
        assert_unique(&Deputation::seed());
        assert_unique(&Transfer::seed());
        assert_unique(&AttendanceRequest::seed());
        assert_unique(&LeaveApplication::seed());
    }

    #[test]
    fn seed_sizes() {
        assert_eq!(AttendanceRequest::seed().len(), 8);
        assert_eq!(LeaveApplication::seed().len(), 12);
        assert_eq!(
            AttendanceRequest::seed()
                .iter()
                .filter(|r| r.status == RequestStatus::Pending)
                .count(),
            5
        );
    }

    #[test]
    fn leave_applications_borrow_employee_details() {
        let applications = LeaveApplication::seed();
        assert_eq!(applications[0].emp_id, "EMP1001");
        assert_eq!(applications[10].emp_id, "EMP1001");
        assert_eq!(applications[0].id, RecordId::from("lv-001"));
        assert_eq!(applications[11].id, RecordId::from("lv-012"));
    }
}
