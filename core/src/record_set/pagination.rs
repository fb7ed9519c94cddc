use serde::Serialize;

use crate::error::CoreError;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page cursor for one screen session. `current_page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    pub fn new(page_size: i64) -> Result<Self, CoreError> {
        Ok(Self {
            current_page: 1,
            page_size: validate_page_size(page_size)?,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Requested page, clamped against `total_count`.
    pub fn current_page(&self, total_count: usize) -> usize {
        self.current_page.min(total_pages(total_count, self.page_size))
    }

    /// Stores the page clamped against `total_count`. Called whenever the
    /// filtered collection changes, so widening it again keeps the clamped page.
    pub fn clamp(&mut self, total_count: usize) {
        self.current_page = self.current_page(total_count);
    }

    pub fn set_page(&mut self, page: i64, total_count: usize) {
        let last = total_pages(total_count, self.page_size);
        let requested = if page < 1 {
            1
        } else {
            usize::try_from(page).unwrap_or(usize::MAX)
        };
        self.current_page = requested.min(last);
    }

    /// Rejects sizes below 1 and leaves the state untouched in that case.
    /// A new size always returns to the first page.
    pub fn set_page_size(&mut self, page_size: i64) -> Result<(), CoreError> {
        self.page_size = validate_page_size(page_size)?;
        self.current_page = 1;
        Ok(())
    }

    pub fn summary(&self, total_count: usize) -> PaginationSummary {
        let total_pages = total_pages(total_count, self.page_size);
        let page = self.current_page(total_count);
        let start_index = ((page - 1) * self.page_size).min(total_count);
        let end_index = (start_index + self.page_size).min(total_count);
        PaginationSummary {
            current_page: page,
            page_size: self.page_size,
            start_index,
            end_index,
            total_pages,
            total_count,
        }
    }
}

/// Display metadata for the visible page.
///
/// `start_index..end_index` is the 0-based slice of the filtered collection
/// shown on the page; both are 0 when nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationSummary {
    pub current_page: usize,
    pub page_size: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl PaginationSummary {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Footer text such as "Showing 11 to 12 of 12".
    pub fn display_range(&self) -> String {
        if self.total_count == 0 {
            "No records".to_string()
        } else {
            format!(
                "Showing {} to {} of {}",
                self.start_index + 1,
                self.end_index,
                self.total_count
            )
        }
    }
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size.max(1)).max(1)
}

fn validate_page_size(page_size: i64) -> Result<usize, CoreError> {
    if page_size < 1 {
        return Err(CoreError::invalid_argument(format!(
            "page size must be at least 1, got {}",
            page_size
        )));
    }
    usize::try_from(page_size)
        .map_err(|_| CoreError::invalid_argument(format!("page size {} is too large", page_size)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(12, 5), 3);
    }

    #[test]
    fn set_page_clamps_any_integer() {
        let mut state = PaginationState::new(5).unwrap();
        for page in [i64::MIN, -3, 0, 1, 2, 3, 4, 99, i64::MAX] {
            state.set_page(page, 12);
            let current = state.current_page(12);
            assert!((1..=3).contains(&current), "page {} -> {}", page, current);
        }
        state.set_page(99, 12);
        assert_eq!(state.current_page(12), 3);
        state.set_page(-1, 12);
        assert_eq!(state.current_page(12), 1);
    }

    #[test]
    fn current_page_reclamps_when_collection_shrinks() {
        let mut state = PaginationState::new(5).unwrap();
        state.set_page(3, 12);
        assert_eq!(state.current_page(12), 3);
        assert_eq!(state.current_page(4), 1);
        assert_eq!(state.current_page(0), 1);
    }

    #[test]
    fn clamp_writes_back_the_visible_page() {
        let mut state = PaginationState::new(2).unwrap();
        state.set_page(5, 10);
        state.clamp(4);
        assert_eq!(state.current_page(4), 2);
        assert_eq!(state.current_page(10), 2);
    }

    #[test]
    fn invalid_page_size_keeps_previous_state() {
        let mut state = PaginationState::new(5).unwrap();
        state.set_page(2, 12);
        let err = state.set_page_size(0).unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGUMENT");
        assert!(state.set_page_size(-4).is_err());
        assert_eq!(state.page_size(), 5);
        assert_eq!(state.current_page(12), 2);
        assert!(PaginationState::new(0).is_err());
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut state = PaginationState::new(5).unwrap();
        state.set_page(3, 60);
        state.set_page_size(25).unwrap();
        assert_eq!(state.current_page(60), 1);
        assert_eq!(state.page_size(), 25);
    }

    #[test]
    fn summary_describes_last_partial_page() {
        let mut state = PaginationState::new(5).unwrap();
        state.set_page(3, 12);
        let summary = state.summary(12);
        assert_eq!(summary.start_index, 10);
        assert_eq!(summary.end_index, 12);
        assert_eq!(summary.total_pages, 3);
        assert!(summary.has_previous());
        assert!(!summary.has_next());
        assert_eq!(summary.display_range(), "Showing 11 to 12 of 12");
    }

    #[test]
    fn summary_of_empty_collection() {
        let summary = PaginationState::default().summary(0);
        assert_eq!(summary.start_index, 0);
        assert_eq!(summary.end_index, 0);
        assert_eq!(summary.total_pages, 1);
        assert_eq!(summary.display_range(), "No records");
    }
}
