use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::{bool_label, Record, RecordKind, Resource};
use crate::types::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: RecordId,
    pub code: String,
    pub name: String,
    pub city: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Record for Branch {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.name.as_str(), self.city.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "status" => Some(bool_label(self.is_active, "active", "inactive")),
            "city" => Some(Cow::Borrowed(self.city.as_str())),
            _ => None,
        }
    }
}

impl Resource for Branch {
    const KIND: RecordKind = RecordKind::Branch;
}
