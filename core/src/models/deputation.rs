use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::{Record, RecordKind, Resource};
use crate::types::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeputationStatus {
    #[default]
    Upcoming,
    Active,
    Completed,
}

impl DeputationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeputationStatus::Upcoming => "upcoming",
            DeputationStatus::Active => "active",
            DeputationStatus::Completed => "completed",
        }
    }
}

/// Temporary assignment of an employee to another branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deputation {
    pub id: RecordId,
    pub emp_id: String,
    pub employee_name: String,
    pub from_branch: String,
    pub to_branch: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: DeputationStatus,
    #[serde(default)]
    pub remarks: String,
}

impl Record for Deputation {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.emp_id.as_str(), self.employee_name.as_str(), self.remarks.as_str()]
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

impl Resource for Deputation {
    const KIND: RecordKind = RecordKind::Deputation;
}
