//! Client-side search, filter and pagination over an in-memory collection.
//!
//! Every read derives its result from the current collection and state, so
//! callers never need to invalidate anything after a refresh or a decision.

pub mod filter;
pub mod pagination;

use std::collections::HashSet;

use crate::error::CoreError;
use crate::models::Record;
use crate::types::RecordId;

pub use filter::{FilterState, SHOW_ALL};
pub use pagination::{PaginationState, PaginationSummary, DEFAULT_PAGE_SIZE};

/// Collection, filters and page cursor owned by one list screen.
#[derive(Debug, Clone)]
pub struct RecordSetView<R> {
    records: Vec<R>,
    filter: FilterState,
    pagination: PaginationState,
}

impl<R> Default for RecordSetView<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            filter: FilterState::default(),
            pagination: PaginationState::default(),
        }
    }
}

impl<R: Record> RecordSetView<R> {
    pub fn new(records: Vec<R>) -> Result<Self, CoreError> {
        ensure_unique_ids(&records)?;
        Ok(Self {
            records,
            ..Self::default()
        })
    }

    pub fn with_page_size(records: Vec<R>, page_size: i64) -> Result<Self, CoreError> {
        ensure_unique_ids(&records)?;
        Ok(Self {
            records,
            filter: FilterState::default(),
            pagination: PaginationState::new(page_size)?,
        })
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &RecordId) -> Option<&mut R> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    /// Replaces the whole collection with a fresh snapshot. A snapshot with
    /// duplicate ids is rejected and the previous collection is kept.
    pub fn replace_records(&mut self, records: Vec<R>) -> Result<(), CoreError> {
        ensure_unique_ids(&records)?;
        tracing::debug!(count = records.len(), "Replacing record set snapshot");
        self.records = records;
        self.reclamp();
        Ok(())
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.set_search_text(text);
        self.reclamp();
    }

    pub fn set_field_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filter.set_field_filter(key, value);
        self.reclamp();
    }

    /// Pulls the stored page back into range after the filtered collection
    /// changed.
    pub(crate) fn reclamp(&mut self) {
        let total = self.filtered_count();
        self.pagination.clamp(total);
    }

    /// Records matching every active predicate, in collection order.
    pub fn filtered_records(&self) -> Vec<&R> {
        self.records
            .iter()
            .filter(|record| self.filter.matches(*record))
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| self.filter.matches(*record))
            .count()
    }

    pub fn set_page(&mut self, page: i64) {
        let total = self.filtered_count();
        self.pagination.set_page(page, total);
    }

    pub fn set_page_size(&mut self, page_size: i64) -> Result<(), CoreError> {
        self.pagination.set_page_size(page_size)?;
        tracing::debug!(page_size, "Page size changed, returning to first page");
        Ok(())
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page(self.filtered_count())
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn current_page_records(&self) -> Vec<&R> {
        let filtered = self.filtered_records();
        let summary = self.pagination.summary(filtered.len());
        filtered[summary.start_index..summary.end_index].to_vec()
    }

    pub fn pagination_summary(&self) -> PaginationSummary {
        self.pagination.summary(self.filtered_count())
    }
}

fn ensure_unique_ids<R: Record>(records: &[R]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(CoreError::invalid_argument(format!(
                "duplicate record id {}",
                record.id()
            )));
        }
    }
    Ok(())
}
