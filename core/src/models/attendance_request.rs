use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::{ApprovalRequest, Record, RecordKind, RequestStatus, Resource};
use crate::types::RecordId;

/// Clock-in/clock-out pair, either as recorded or as proposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchSnapshot {
    pub clock_in_time: Option<NaiveDateTime>,
    pub clock_out_time: Option<NaiveDateTime>,
}

impl PunchSnapshot {
    pub fn new(clock_in_time: Option<NaiveDateTime>, clock_out_time: Option<NaiveDateTime>) -> Self {
        Self {
            clock_in_time,
            clock_out_time,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.clock_in_time.is_some() && self.clock_out_time.is_some()
    }
}

/// How a request relates to what the time clock recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectionKind {
    /// At least one recorded punch is absent.
    MissingPunch,
    /// Both punches were recorded and the request changes them.
    TimeCorrection,
    /// The request repeats the recorded punches.
    Confirmation,
    NotApplicable,
}

/// Employee request to correct a day's recorded punches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRequest {
    pub id: RecordId,
    pub emp_id: String,
    pub employee_name: String,
    pub branch: String,
    pub department: String,
    pub date: NaiveDate,
    #[serde(default, rename = "original_snapshot")]
    pub original: PunchSnapshot,
    #[serde(rename = "proposed_values")]
    pub requested: PunchSnapshot,
    pub reason: String,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub decision_note: Option<String>,
}

impl Record for AttendanceRequest {
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
            _ => None,
        }
    }
}

impl Resource for AttendanceRequest {
    const KIND: RecordKind = RecordKind::AttendanceRequest;
}

impl ApprovalRequest for AttendanceRequest {
    type Value = PunchSnapshot;

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }

    fn requested_value(&self) -> &PunchSnapshot {
        &self.requested
    }

    fn set_requested_value(&mut self, value: PunchSnapshot) {
        self.requested = value;
    }

    fn decision_note(&self) -> Option<&str> {
        self.decision_note.as_deref()
    }

    fn set_decision_note(&mut self, note: Option<String>) {
        self.decision_note = note;
    }

    fn correction_kind(&self) -> CorrectionKind {
        if !self.original.is_complete() {
            CorrectionKind::MissingPunch
        } else if self.requested != self.original {
            CorrectionKind::TimeCorrection
        } else {
            CorrectionKind::Confirmation
        }
    }
}
