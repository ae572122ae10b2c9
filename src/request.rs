//! Request context for pagination
//!
//! The caller hands the paginator an explicit [`PageRequest`] instead of the
//! paginator reaching into ambient request state. A request carries two
//! things: the base URI (the request path without its query string, used to
//! build navigation links) and the requested page number from the `page`
//! query parameter.

use serde::Deserialize;

/// Name of the query parameter carrying the requested page
pub const PAGE_PARAM: &str = "page";

/// Pagination-relevant view of an incoming request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    base_uri: String,
    page: Option<usize>,
}

impl PageRequest {
    /// Create a request from a path and an already-resolved page number.
    ///
    /// Any `?...` suffix on the path is stripped, so passing a full request
    /// URI here is harmless.
    pub fn new(path: impl Into<String>, page: Option<usize>) -> Self {
        Self {
            base_uri: strip_query(&path.into()).to_string(),
            page,
        }
    }

    /// Parse a request URI, extracting the base path and the `page` parameter.
    ///
    /// A missing or non-numeric `page` value is treated as unset, matching
    /// the original behavior where an absent parameter left the current page
    /// undetermined.
    pub fn from_uri(uri: &str) -> Self {
        let (base_uri, query) = match uri.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (uri, None),
        };

        let page = query.and_then(parse_page_param);

        Self {
            base_uri: base_uri.to_string(),
            page,
        }
    }

    /// Combine a request path with a deserialized [`PageQuery`]
    pub fn from_parts(path: &str, query: PageQuery) -> Self {
        Self::new(path, query.page)
    }

    /// The request path without its query string
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// The requested page number, if one was supplied
    pub fn page(&self) -> Option<usize> {
        self.page
    }
}

/// Query-string payload for framework extractors
///
/// Deserialize this with your web framework's query extractor and combine it
/// with the request path via [`PageRequest::from_parts`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    /// Requested page number
    pub page: Option<usize>,
}

/// Drop everything from the first `?` onward
fn strip_query(uri: &str) -> &str {
    match uri.split_once('?') {
        Some((path, _)) => path,
        None => uri,
    }
}

/// Find the `page` parameter in a raw query string and parse it
fn parse_page_param(query: &str) -> Option<usize> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == PAGE_PARAM)
        .and_then(|(_, value)| value.parse().ok())
}
