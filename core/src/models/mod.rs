//! Record kinds managed by the console's list screens.

pub mod attendance_request;
pub mod branch;
pub mod deputation;
pub mod employee;
pub mod leave_application;
pub mod leave_type;
pub mod request_status;
pub mod transfer;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::types::RecordId;

pub use attendance_request::{AttendanceRequest, CorrectionKind, PunchSnapshot};
pub use branch::Branch;
pub use deputation::{Deputation, DeputationStatus};
pub use employee::{Employee, EmployeeStatus};
pub use leave_application::{LeaveApplication, LeavePeriod};
pub use leave_type::LeaveType;
pub use request_status::{Decision, RequestStatus};
pub use transfer::{Transfer, TransferStatus};

/// A single entity shown on a list screen.
///
/// The set of searchable fields and filter keys is fixed per kind; only the
/// values change over a record's lifetime.
pub trait Record {
    fn id(&self) -> &RecordId;

    /// Free-text fields matched by the search box.
    fn searchable_fields(&self) -> Vec<&str>;

    /// Value of an enumerated field for a filter key, or `None` when the kind
    /// does not expose that key.
    fn filter_value(&self, key: &str) -> Option<Cow<'_, str>>;
}

/// A record kind that can be fetched from a data source.
pub trait Resource:
    Record + Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: RecordKind;
}

/// A record with a Pending/Approved/Rejected lifecycle.
pub trait ApprovalRequest: Resource {
    /// Payload an administrator may revise before approving.
    type Value: Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync;

    fn status(&self) -> RequestStatus;
    fn set_status(&mut self, status: RequestStatus);
    fn requested_value(&self) -> &Self::Value;
    fn set_requested_value(&mut self, value: Self::Value);
    fn decision_note(&self) -> Option<&str>;
    fn set_decision_note(&mut self, note: Option<String>);

    /// Statistics bucket for the requested change. Kinds without a punch
    /// payload are never counted as missing punches or corrections.
    fn correction_kind(&self) -> CorrectionKind {
        CorrectionKind::NotApplicable
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Branch,
    LeaveType,
    Employee,
    Deputation,
    Transfer,
    AttendanceRequest,
    LeaveApplication,
}

impl RecordKind {
    pub const ALL: [RecordKind; 7] = [
        RecordKind::Branch,
        RecordKind::LeaveType,
        RecordKind::Employee,
        RecordKind::Deputation,
        RecordKind::Transfer,
        RecordKind::AttendanceRequest,
        RecordKind::LeaveApplication,
    ];

    /// REST collection path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            RecordKind::Branch => "branches",
            RecordKind::LeaveType => "leave-types",
            RecordKind::Employee => "employees",
            RecordKind::Deputation => "deputations",
            RecordKind::Transfer => "transfers",
            RecordKind::AttendanceRequest => "attendance-requests",
            RecordKind::LeaveApplication => "leave-applications",
        }
    }

    /// Key of the list envelope in JSON responses, e.g. `{ "branches": [...] }`.
    pub fn envelope_key(&self) -> &'static str {
        match self {
            RecordKind::Branch => "branches",
            RecordKind::LeaveType => "leave_types",
            RecordKind::Employee => "employees",
            RecordKind::Deputation => "deputations",
            RecordKind::Transfer => "transfers",
            RecordKind::AttendanceRequest => "attendance_requests",
            RecordKind::LeaveApplication => "leave_applications",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Branch => "Branches",
            RecordKind::LeaveType => "Leave types",
            RecordKind::Employee => "Employees",
            RecordKind::Deputation => "Deputations",
            RecordKind::Transfer => "Transfers",
            RecordKind::AttendanceRequest => "Attendance requests",
            RecordKind::LeaveApplication => "Leave applications",
        }
    }

    pub fn is_approval_kind(&self) -> bool {
        matches!(
            self,
            RecordKind::AttendanceRequest | RecordKind::LeaveApplication
        )
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.envelope_key())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        RecordKind::ALL
            .into_iter()
            .find(|kind| kind.envelope_key() == normalized)
            .ok_or_else(|| format!("unknown record kind: {}", value))
    }
}

pub(crate) fn bool_label(value: bool, yes: &'static str, no: &'static str) -> Cow<'static, str> {
    Cow::Borrowed(if value { yes } else { no })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_kind_parses_paths_and_keys() {
        assert_eq!(
            "attendance-requests".parse::<RecordKind>().unwrap(),
            RecordKind::AttendanceRequest
        );
        assert_eq!(
            "leave_types".parse::<RecordKind>().unwrap(),
            RecordKind::LeaveType
        );
        assert_eq!(" Branches ".parse::<RecordKind>().unwrap(), RecordKind::Branch);
        assert!("payroll".parse::<RecordKind>().is_err());
    }

    #[test]
    fn only_request_kinds_have_a_lifecycle() {
        let approval: Vec<_> = RecordKind::ALL
            .into_iter()
            .filter(RecordKind::is_approval_kind)
            .collect();
        assert_eq!(
            approval,
            vec![RecordKind::AttendanceRequest, RecordKind::LeaveApplication]
        );
    }
}
