//! Pagination controller owning the page state of a list.
//!
//! The controller is the only place where [`PaginationState`] changes. Each
//! operation runs the pure reducer, notifies observers when something actually
//! moved, and keeps the page inside the range implied by the item count.

use super::page_range::PageLabel;
use super::state::{is_disabled, PageAction, PageSize, PaginationState};
use std::fmt;
use std::ops::Range;
use tracing::{debug, warn};

/// Pagination events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationEvent {
    /// Page changed
    PageChanged {
        old_page: usize,
        new_page: usize,
        page_size: PageSize,
    },

    /// Page size changed
    PageSizeChanged {
        old_size: PageSize,
        new_size: PageSize,
        new_total_pages: usize,
    },
}

type Callback = Box<dyn Fn(&PaginationEvent) + Send + Sync>;

/// Pagination controller for list components
pub struct PaginationController {
    /// Current page and page size
    state: PaginationState,

    /// Number of items being paginated
    item_count: usize,

    /// Event callbacks
    callbacks: Vec<Callback>,
}

/// Everything the presentation layer needs to draw one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, T> {
    /// Items on the current page
    pub items: &'a [T],

    /// Absolute index range of `items` within the collection
    pub item_range: Range<usize>,

    /// Compressed page selector
    pub labels: Vec<PageLabel>,

    /// Current page (0-based)
    pub current_page: usize,

    pub total_pages: usize,
    pub page_size: PageSize,
    pub total_items: usize,

    pub first_disabled: bool,
    pub previous_disabled: bool,
    pub next_disabled: bool,
    pub last_disabled: bool,
}

impl<T> PageView<'_, T> {
    /// Whether `label` is the active page
    pub fn is_selected(&self, label: PageLabel) -> bool {
        label.page() == Some(self.current_page + 1)
    }

    /// Whether clicking `label` would be a no-op
    pub fn is_label_disabled(&self, label: PageLabel) -> bool {
        label.is_ellipsis() || self.is_selected(label)
    }

    /// Short position summary, e.g. `11-20 of 95`
    pub fn summary(&self) -> String {
        if self.item_range.is_empty() {
            format!("0 of {}", self.total_items)
        } else {
            format!(
                "{}-{} of {}",
                self.item_range.start + 1,
                self.item_range.end,
                self.total_items
            )
        }
    }
}

impl PaginationController {
    /// Create a new pagination controller
    pub fn new() -> Self {
        Self::with_state(PaginationState::default())
    }

    /// Create a controller starting with a specific page size
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self::with_state(PaginationState::with_page_size(page_size))
    }

    fn with_state(state: PaginationState) -> Self {
        Self {
            state,
            item_count: 0,
            callbacks: Vec::new(),
        }
    }

    /// Add an event callback
    pub fn add_callback<F>(&mut self, callback: F)
    where
        F: Fn(&PaginationEvent) + Send + Sync + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Set the number of items being paginated; the current page is clamped
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        let old_page = self.state.current_page;
        self.state = self.state.clamped(count);

        if old_page != self.state.current_page {
            debug!(old_page, new_page = self.state.current_page, "Item count shrank, page clamped");
            self.emit_event(PaginationEvent::PageChanged {
                old_page,
                new_page: self.state.current_page,
                page_size: self.state.page_size,
            });
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    /// Get the current page (0-based)
    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.state.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages(self.item_count)
    }

    /// Get the maximum valid page index
    pub fn max_page(&self) -> usize {
        self.state.max_page(self.item_count)
    }

    /// Go to the first page
    pub fn go_to_first(&mut self) -> bool {
        self.dispatch(PageAction::First)
    }

    /// Go to the previous page
    pub fn go_to_previous(&mut self) -> bool {
        self.dispatch(PageAction::Previous)
    }

    /// Go to the next page
    pub fn go_to_next(&mut self) -> bool {
        self.dispatch(PageAction::Next)
    }

    /// Go to the last page
    pub fn go_to_last(&mut self) -> bool {
        self.dispatch(PageAction::Last)
    }

    /// Select a page from the label sequence. Ellipses and the active page are ignored.
    pub fn select_page(&mut self, label: PageLabel) -> bool {
        self.dispatch(PageAction::Select(label))
    }

    /// Set the page size. Only 10, 20, 50 and 100 are accepted; anything else is ignored.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        match PageSize::try_from(size) {
            Ok(page_size) => self.dispatch(PageAction::SetPageSize(page_size)),
            Err(e) => {
                warn!("Ignoring page size change: {}", e);
                false
            }
        }
    }

    /// Step to the next (or previous) selectable page size, wrapping around
    pub fn cycle_page_size(&mut self, forward: bool) -> bool {
        let current = self.state.page_size;
        let target = if forward {
            current.next()
        } else {
            current.previous()
        };
        self.set_page_size(target.get())
    }

    pub fn is_disabled(&self, label: PageLabel) -> bool {
        is_disabled(label, &self.state)
    }

    pub fn first_disabled(&self) -> bool {
        self.state.current_page == 0
    }

    pub fn previous_disabled(&self) -> bool {
        self.first_disabled()
    }

    pub fn next_disabled(&self) -> bool {
        self.total_pages() == 0 || self.state.current_page >= self.max_page()
    }

    pub fn last_disabled(&self) -> bool {
        self.next_disabled()
    }

    /// Page labels for the current page
    pub fn labels(&self) -> Vec<PageLabel> {
        self.state.labels(self.item_count)
    }

    /// Item index range of the current page
    pub fn window(&self) -> Range<usize> {
        self.state.window(self.item_count)
    }

    /// Build the render view over `items`.
    ///
    /// Everything is derived from `items.len()`, so a stale item count never
    /// produces an out-of-range slice.
    pub fn view<'a, T>(&self, items: &'a [T]) -> PageView<'a, T> {
        let total_items = items.len();
        let state = self.state.clamped(total_items);
        let total_pages = state.total_pages(total_items);
        let item_range = state.window(total_items);
        let at_end = total_pages == 0 || state.current_page >= state.max_page(total_items);

        PageView {
            items: &items[item_range.clone()],
            item_range,
            labels: state.labels(total_items),
            current_page: state.current_page,
            total_pages,
            page_size: state.page_size,
            total_items,
            first_disabled: state.current_page == 0,
            previous_disabled: state.current_page == 0,
            next_disabled: at_end,
            last_disabled: at_end,
        }
    }

    fn dispatch(&mut self, action: PageAction) -> bool {
        let old = self.state;
        let new = old.apply(action, self.item_count);
        if new == old {
            return false;
        }

        self.state = new;
        debug!(?action, from = old.current_page, to = new.current_page, "Pagination transition");

        if old.page_size != new.page_size {
            self.emit_event(PaginationEvent::PageSizeChanged {
                old_size: old.page_size,
                new_size: new.page_size,
                new_total_pages: self.total_pages(),
            });
        }

        if old.current_page != new.current_page {
            self.emit_event(PaginationEvent::PageChanged {
                old_page: old.current_page,
                new_page: new.current_page,
                page_size: new.page_size,
            });
        }

        true
    }

    /// Emit an event to all callbacks
    fn emit_event(&self, event: PaginationEvent) {
        for callback in &self.callbacks {
            callback(&event);
        }
    }
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PaginationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationController")
            .field("state", &self.state)
            .field("item_count", &self.item_count)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
