//! The paginator itself
//!
//! Construct-once, read-only: the constructor captures the request context,
//! chunks the dataset, optionally publishes rendering globals into a view
//! environment, and renders the navigation markup. Nothing is recomputed
//! afterwards.

use serde_json::json;
use tracing::{debug, warn};

use super::types::{chunk_bounds, PageBounds};
use crate::error::{Error, Result};
use crate::nav::{render_nav, NavModel};
use crate::request::PageRequest;
use crate::view::{
    ViewEnvironment, GLOBAL_PAGE, GLOBAL_PAGES, GLOBAL_PAGINATED, GLOBAL_URI,
};

/// Page assumed when the request carries no `page` parameter
const DEFAULT_PAGE: usize = 1;

/// Fixed-size pagination over an owned dataset
///
/// ```
/// use simple_paginator::{PageRequest, Paginator};
///
/// let request = PageRequest::from_uri("/posts?page=2");
/// let posts: Vec<u32> = (0..25).collect();
/// let paginator = Paginator::new(&request, posts, 10)?;
///
/// assert_eq!(paginator.page_count(), 3);
/// assert_eq!(paginator.page()?, &(10..20).collect::<Vec<u32>>()[..]);
/// # Ok::<(), simple_paginator::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    data: Vec<T>,
    items_per_page: usize,
    total_items: usize,
    paginated: bool,
    bounds: Vec<PageBounds>,
    page_count: usize,
    current_page: usize,
    base_uri: String,
    nav_html: String,
}

impl<T> Paginator<T> {
    /// Paginate `data` into pages of `items_per_page` items.
    ///
    /// The current page comes from the request's `page` parameter and
    /// defaults to page 1 when unset. A page size of zero is rejected with
    /// [`Error::InvalidPageSize`]. An out-of-range current page is accepted
    /// here and reported by [`page`](Self::page) on access, so navigation for
    /// a bad request can still be rendered.
    pub fn new(request: &PageRequest, data: Vec<T>, items_per_page: usize) -> Result<Self> {
        if items_per_page == 0 {
            return Err(Error::InvalidPageSize);
        }

        let base_uri = request.base_uri().to_string();
        let current_page = request.page().unwrap_or(DEFAULT_PAGE);
        let total_items = data.len();
        let paginated = total_items > items_per_page;
        let bounds = chunk_bounds(total_items, items_per_page);
        let page_count = bounds.len();

        if current_page < 1 || current_page > page_count {
            warn!(current_page, page_count, "requested page outside valid range");
        }
        debug!(
            total_items,
            items_per_page, page_count, paginated, "computed pagination"
        );

        let nav_html = render_nav(&NavModel::new(&base_uri, current_page, page_count));

        Ok(Self {
            data,
            items_per_page,
            total_items,
            paginated,
            bounds,
            page_count,
            current_page,
            base_uri,
            nav_html,
        })
    }

    /// Like [`new`](Self::new), additionally publishing the rendering globals
    /// `paginated`, `pages`, `page` and `uri` into the view environment.
    pub fn with_view(
        view: &mut dyn ViewEnvironment,
        request: &PageRequest,
        data: Vec<T>,
        items_per_page: usize,
    ) -> Result<Self> {
        let paginator = Self::new(request, data, items_per_page)?;
        paginator.publish_globals(view);
        Ok(paginator)
    }

    /// The current page's items.
    ///
    /// Fails with [`Error::PageOutOfRange`] when the requested page is
    /// outside `1..=page_count`.
    pub fn page(&self) -> Result<&[T]> {
        self.page_at(self.current_page)
    }

    /// The items of page `number` (1-based)
    pub fn page_at(&self, number: usize) -> Result<&[T]> {
        let bounds = number
            .checked_sub(1)
            .and_then(|index| self.bounds.get(index))
            .ok_or_else(|| Error::page_out_of_range(number, self.page_count))?;
        Ok(&self.data[bounds.start..bounds.end])
    }

    /// Iterate over all pages in order
    pub fn pages(&self) -> impl Iterator<Item = &[T]> {
        self.bounds.iter().map(|b| &self.data[b.start..b.end])
    }

    /// The precomputed navigation markup
    pub fn nav_html(&self) -> &str {
        &self.nav_html
    }

    /// Rebuild the navigation view model, for callers rendering their own
    /// markup instead of [`nav_html`](Self::nav_html)
    pub fn nav_model(&self) -> NavModel {
        NavModel::new(&self.base_uri, self.current_page, self.page_count)
    }

    /// The current page number (1-based)
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total number of pages
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Number of items in the full dataset
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Configured page size
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Whether the dataset spans more than one page
    pub fn is_paginated(&self) -> bool {
        self.paginated
    }

    /// The request path navigation links are built from
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Boundaries of every page within the dataset
    pub fn page_bounds(&self) -> &[PageBounds] {
        &self.bounds
    }

    /// Consume the paginator and return the dataset
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }

    fn publish_globals(&self, view: &mut dyn ViewEnvironment) {
        view.add_global(GLOBAL_PAGINATED, json!(self.paginated));
        view.add_global(GLOBAL_PAGES, json!(self.page_count));
        view.add_global(GLOBAL_PAGE, json!(self.current_page));
        view.add_global(GLOBAL_URI, json!(self.base_uri));
    }
}
