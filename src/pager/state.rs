use serde::{Deserialize, Serialize};

use crate::ui::mvi::UiState;

/// The two tracked fields of a pager instance.
///
/// With a non-zero total, `1 <= current_page <= total_pages`. With a zero
/// total the current page is held at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPaginationState")]
pub struct PaginationState {
    current_page: u32,
    total_pages: u32,
}

/// Wire shape of [`PaginationState`]; converted through [`PaginationState::new`].
#[derive(Deserialize)]
struct RawPaginationState {
    #[serde(default = "first_page")]
    current_page: u32,
    #[serde(default)]
    total_pages: u32,
}

fn first_page() -> u32 {
    1
}

impl From<RawPaginationState> for PaginationState {
    fn from(raw: RawPaginationState) -> Self {
        Self::new(raw.current_page, raw.total_pages)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
        }
    }
}

impl UiState for PaginationState {}

impl PaginationState {
    /// Build a state, clamping `current_page` into range.
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page: clamp_page(current_page, total_pages),
            total_pages,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn has_pages(&self) -> bool {
        self.total_pages > 0
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub(crate) fn with_current_page(self, page: u32) -> Self {
        Self::new(page, self.total_pages)
    }

    pub(crate) fn with_total_pages(self, total: u32) -> Self {
        Self::new(self.current_page, total)
    }
}

/// Clamp a 1-based page into `1..=total_pages` (1 when there are no pages).
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_current_page() {
        assert_eq!(PaginationState::new(0, 5).current_page(), 1);
        assert_eq!(PaginationState::new(9, 5).current_page(), 5);
        assert_eq!(PaginationState::new(4, 0).current_page(), 1);
    }

    #[test]
    fn shrinking_total_pulls_current_page_back() {
        let state = PaginationState::new(40, 50).with_total_pages(12);
        assert_eq!(state.current_page(), 12);
        assert_eq!(state.total_pages(), 12);
    }
}
