//! A bounded-height paginated list for the terminal.
//!
//! [`pagination`] holds the page-state machine and the page-label compressor
//! and does not depend on a terminal. [`tui`] renders a list with a pager
//! line using ratatui and maps keyboard and mouse input onto the controller.

pub mod config;
pub mod error;
pub mod pagination;
pub mod tui;

pub use error::{PaginationError, PaginationResult};
pub use pagination::{compress, PageLabel, PageSize, PaginationController, PaginationState};
