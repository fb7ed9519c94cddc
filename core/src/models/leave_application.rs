use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::{ApprovalRequest, Record, RecordKind, RequestStatus, Resource};
use crate::types::RecordId;

/// Inclusive date range requested for leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePeriod {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

impl LeavePeriod {
    pub fn new(from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self { from_date, to_date }
    }

    /// Calendar days covered, counting both ends. Zero for an inverted range.
    pub fn days(&self) -> i64 {
        let span = (self.to_date - self.from_date).num_days();
        if span < 0 {
            0
        } else {
            span + 1
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveApplication {
    pub id: RecordId,
    pub emp_id: String,
    pub employee_name: String,
    pub branch: String,
    pub department: String,
    pub leave_type: String,
    #[serde(flatten)]
    pub period: LeavePeriod,
    #[serde(default)]
    pub reason: String,
    /// Credits left for this leave type. Displayed only; approvals never
    /// check or decrement it.
    #[serde(default)]
    pub remaining_credits: Option<f64>,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub decision_note: Option<String>,
}

impl Record for LeaveApplication {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.emp_id.as_str(),
            self.employee_name.as_str(),
            self.reason.as_str(),
        ];
        if let Some(id) = self.id.as_text() {
            fields.push(id);
        }
        fields
    }

    fn filter_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            "branch" => Some(Cow::Borrowed(self.branch.as_str())),
            "department" => Some(Cow::Borrowed(self.department.as_str())),
            "leave_type" => Some(Cow::Borrowed(self.leave_type.as_str())),
            _ => None,
        }
    }
}

impl Resource for LeaveApplication {
    const KIND: RecordKind = RecordKind::LeaveApplication;
}

impl ApprovalRequest for LeaveApplication {
    type Value = LeavePeriod;

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }

    fn requested_value(&self) -> &LeavePeriod {
        &self.period
    }

    fn set_requested_value(&mut self, value: LeavePeriod) {
        self.period = value;
    }

    fn decision_note(&self) -> Option<&str> {
        self.decision_note.as_deref()
    }

    fn set_decision_note(&mut self, note: Option<String>) {
        self.decision_note = note;
    }
}
