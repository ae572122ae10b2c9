//! Error types for simple-paginator
//!
//! All fallible public APIs return `Result<T, Error>` where Error is defined
//! here. Every failure is a local precondition violation; nothing here is
//! transient or retryable.

use thiserror::Error;

/// The main error type for simple-paginator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The page size must be a positive number of items.
    #[error("items per page must be greater than zero")]
    InvalidPageSize,

    /// A page was requested outside the valid range `1..=page_count`.
    #[error("page {page} out of range (valid pages: 1..={page_count})")]
    PageOutOfRange {
        /// The page that was requested
        page: usize,
        /// Number of pages actually available
        page_count: usize,
    },
}

impl Error {
    /// Create a page-out-of-range error
    pub fn page_out_of_range(page: usize, page_count: usize) -> Self {
        Self::PageOutOfRange { page, page_count }
    }
}

/// Result type alias for simple-paginator
pub type Result<T> = std::result::Result<T, Error>;
