//! Opaque record identifiers.
//!
//! Back ends hand out either string keys (`"att-001"`) or numeric keys (`42`)
//! depending on the record kind, so the identifier keeps whichever shape it
//! was created with and compares by value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a record within its collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(i64),
    Text(String),
}

impl RecordId {
    /// Returns the text form when the identifier is a string key.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RecordId::Text(value) => Some(value),
            RecordId::Numeric(_) => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Numeric(value) => write!(f, "{}", value),
            RecordId::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Text(value)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Numeric(value)
    }
}
