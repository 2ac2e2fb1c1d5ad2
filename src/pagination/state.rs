//! Pagination state, page sizes and the pure transition reducer.

use super::page_range::{compress, PageLabel};
use crate::error::{PaginationError, PaginationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Items per page offered by the page-size selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    /// All selectable sizes, smallest first
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    /// Number of items per page
    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    /// Next larger size, wrapping back to the smallest
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Next smaller size, wrapping around to the largest
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PaginationError;

    fn try_from(value: usize) -> PaginationResult<Self> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(PaginationError::InvalidPageSize(value))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Number of pages needed to show `item_count` items
pub fn total_pages(item_count: usize, page_size: PageSize) -> usize {
    item_count.div_ceil(page_size.get())
}

/// Clamp a zero-based page into `0..=max(total_pages - 1, 0)`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages.saturating_sub(1))
}

/// Item index range for a zero-based page; the page is clamped first.
pub fn page_window(item_count: usize, page_size: PageSize, page: usize) -> Range<usize> {
    let page = clamp_page(page, total_pages(item_count, page_size));
    let start = (page * page_size.get()).min(item_count);
    let end = (start + page_size.get()).min(item_count);
    start..end
}

/// Whether selecting `label` would be a no-op for `state`
///
/// The ellipsis and the active page are never selectable.
pub fn is_disabled(label: PageLabel, state: &PaginationState) -> bool {
    match label {
        PageLabel::Ellipsis => true,
        PageLabel::Number(page) => page == state.current_page + 1,
    }
}

/// Transitions accepted by [`PaginationState::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    First,
    Previous,
    Next,
    Last,
    Select(PageLabel),
    SetPageSize(PageSize),
}

/// Current page and page size of a paginated list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaginationState {
    /// Current page (0-based)
    pub current_page: usize,

    /// Items per page
    pub page_size: PageSize,
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            current_page: 0,
            page_size,
        }
    }

    pub fn total_pages(&self, item_count: usize) -> usize {
        total_pages(item_count, self.page_size)
    }

    /// Highest valid zero-based page
    pub fn max_page(&self, item_count: usize) -> usize {
        self.total_pages(item_count).saturating_sub(1)
    }

    /// Same state with the page pulled back into range for `item_count`
    pub fn clamped(self, item_count: usize) -> Self {
        Self {
            current_page: clamp_page(self.current_page, self.total_pages(item_count)),
            ..self
        }
    }

    /// Apply a transition and return the resulting state.
    ///
    /// Every result satisfies `current_page <= max_page(item_count)`.
    pub fn apply(self, action: PageAction, item_count: usize) -> Self {
        let last = self.max_page(item_count);

        let current_page = match action {
            PageAction::First => 0,
            PageAction::Previous => self.current_page.saturating_sub(1).min(last),
            PageAction::Next => self.current_page.saturating_add(1).min(last),
            PageAction::Last => last,
            PageAction::Select(label) => {
                if is_disabled(label, &self) {
                    return self;
                }
                match label.page() {
                    Some(page) => page.saturating_sub(1).min(last),
                    None => return self,
                }
            }
            PageAction::SetPageSize(page_size) => {
                return Self { page_size, ..self }.clamped(item_count);
            }
        };

        Self {
            current_page,
            ..self
        }
    }

    /// Item index range of the current page
    pub fn window(&self, item_count: usize) -> Range<usize> {
        page_window(item_count, self.page_size, self.current_page)
    }

    /// Page labels for the current page
    pub fn labels(&self, item_count: usize) -> Vec<PageLabel> {
        let total = self.total_pages(item_count);
        compress(total, clamp_page(self.current_page, total) + 1)
    }
}
