use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::{Record, RecordKind, Resource};
use crate::types::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
    OnLeave,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
            EmployeeStatus::OnLeave => "on_leave",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    pub emp_id: String,
    pub full_name: String,
    pub email: String,
    pub branch: String,
    pub department: String,
    pub role: String,
    #[serde(default)]
    pub status: EmployeeStatus,
}

impl Record for Employee {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.emp_id.as_str(), self.full_name.as_str(), self.email.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "branch" => Some(Cow::Borrowed(self.branch.as_str())),
            "department" => Some(Cow::Borrowed(self.department.as_str())),
            "role" => Some(Cow::Borrowed(self.role.as_str())),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }
}

impl Resource for Employee {
    const KIND: RecordKind = RecordKind::Employee;
}
