//! Error types for pagination configuration

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Unsupported page size: {0} (expected one of 10, 20, 50, 100)")]
    InvalidPageSize(usize),

    #[error("Invalid max height: {0}")]
    InvalidMaxHeight(String),
}

pub type PaginationResult<T> = Result<T, PaginationError>;
