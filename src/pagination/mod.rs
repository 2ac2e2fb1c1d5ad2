//! Page-state machine and page-label compression for paginated lists.
//!
//! Nothing in here depends on a terminal; the widget in
//! `tui::components::paginated_list` is one consumer of these types.

pub mod controller;
pub mod page_range;
pub mod state;

pub use controller::{PageView, PaginationController, PaginationEvent};
pub use page_range::{compress, format_labels, PageLabel, MAX_PAGE_LABELS};
pub use state::{
    clamp_page, is_disabled, page_window, total_pages, PageAction, PageSize, PaginationState,
};
