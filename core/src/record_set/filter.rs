use std::collections::BTreeMap;

use crate::models::Record;

/// Field-filter value that disables the filter.
pub const SHOW_ALL: &str = "all";

/// Free-text search plus per-field selections for one screen session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search_text: String,
    field_filters: BTreeMap<String, String>,
}

impl FilterState {
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Selects `value` for `key`, trimmed. `"all"` (any case) or an empty
    /// value removes the filter.
    pub fn set_field_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value: String = value.into();
        let value = value.trim();
        if is_show_all(value) {
            self.field_filters.remove(&key);
        } else {
            self.field_filters.insert(key, value.to_string());
        }
    }

    pub fn field_filter(&self, key: &str) -> Option<&str> {
        self.field_filters.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && self.field_filters.is_empty()
    }

    /// AND across field filters; OR across searchable fields for the search.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.matches_fields(record) && self.matches_search(record)
    }

    fn matches_fields<R: Record>(&self, record: &R) -> bool {
        self.field_filters.iter().all(|(key, expected)| {
            record
                .filter_value(key)
                .is_some_and(|actual| actual.eq_ignore_ascii_case(expected))
        })
    }

    fn matches_search<R: Record>(&self, record: &R) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        record
            .searchable_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

fn is_show_all(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case(SHOW_ALL)
}
