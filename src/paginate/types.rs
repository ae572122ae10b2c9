//! Page boundary arithmetic
//!
//! Pages are represented as index ranges into the source dataset rather than
//! copied-out chunks, so each item's original position stays observable.

/// Boundaries of one page within the source dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// 1-based page number
    pub number: usize,
    /// Index of the first item on this page
    pub start: usize,
    /// Index one past the last item on this page
    pub end: usize,
}

impl PageBounds {
    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check whether this page holds no items
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split `total_items` into consecutive chunks of `items_per_page`.
///
/// Every chunk is full except possibly the last. A dataset that fits on one
/// page (including an empty dataset) yields a single page, so page 1 is
/// always valid.
///
/// Callers must ensure `items_per_page > 0`.
pub fn chunk_bounds(total_items: usize, items_per_page: usize) -> Vec<PageBounds> {
    debug_assert!(items_per_page > 0);

    let mut bounds = Vec::with_capacity(total_items.div_ceil(items_per_page).max(1));
    let mut start = 0;

    while start < total_items {
        let end = usize::min(start + items_per_page, total_items);
        bounds.push(PageBounds {
            number: bounds.len() + 1,
            start,
            end,
        });
        start = end;
    }

    if bounds.is_empty() {
        bounds.push(PageBounds {
            number: 1,
            start: 0,
            end: 0,
        });
    }

    bounds
}
