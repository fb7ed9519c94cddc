use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::{Record, RecordKind, Resource};
use crate::types::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl TransferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Scheduled => "scheduled",
            TransferStatus::Completed => "completed",
            TransferStatus::Cancelled => "cancelled",
        }
    }
}

/// Permanent move of an employee between branches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: RecordId,
    pub emp_id: String,
    pub employee_name: String,
    pub from_branch: String,
    pub to_branch: String,
    pub effective_date: NaiveDate,
    #[serde(default)]
    pub status: TransferStatus,
    #[serde(default)]
    pub reason: String,
}

impl Record for Transfer {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.emp_id.as_str(), self.employee_name.as_str(), self.reason.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "from_branch" => Some(Cow::Borrowed(self.from_branch.as_str())),
            "to_branch" => Some(Cow::Borrowed(self.to_branch.as_str())),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }
}

impl Resource for Transfer {
    const KIND: RecordKind = RecordKind::Transfer;
}
