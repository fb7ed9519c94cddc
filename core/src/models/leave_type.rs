use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::{bool_label, Record, RecordKind, Resource};
use crate::types::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveType {
    pub id: RecordId,
    pub code: String,
    pub name: String,
    /// Days credited per year.
    pub annual_credits: u32,
    #[serde(default)]
    pub is_paid: bool,
}

impl Record for LeaveType {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.name.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "paid" => Some(bool_label(self.is_paid, "paid", "unpaid")),
            _ => None,
        }
    }
}

impl Resource for LeaveType {
    const KIND: RecordKind = RecordKind::LeaveType;
}
