//! Pagination core
//!
//! Splits an in-memory dataset into fixed-size pages and resolves the
//! requested page from a [`PageRequest`](crate::PageRequest). All derived
//! state (page bounds, page count, navigation markup) is computed eagerly at
//! construction; accessors only return precomputed values.

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::{chunk_bounds, PageBounds};
