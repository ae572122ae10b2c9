//! # simple-paginator
//!
//! Plug-and-play pagination for server-rendered web views.
//!
//! Hand it the full dataset and a page size; it splits the data into
//! fixed-size pages, resolves the requested page from the `page` query
//! parameter, and renders a Bootstrap-styled navigation fragment with
//! previous/next and numbered links.
//!
//! ## Quick Start
//!
//! ```
//! use simple_paginator::{PageRequest, Paginator};
//!
//! // Build the request context from the incoming URI.
//! let request = PageRequest::from_uri("/posts?page=2");
//!
//! let posts: Vec<String> = (0..25).map(|i| format!("post {i}")).collect();
//! let paginator = Paginator::new(&request, posts, 10)?;
//!
//! assert_eq!(paginator.page_count(), 3);
//! assert_eq!(paginator.page()?.len(), 10);
//!
//! // Drop the rendered nav into your layout.
//! let nav = paginator.nav_html();
//! assert!(nav.starts_with("<nav"));
//! # Ok::<(), simple_paginator::Error>(())
//! ```
//!
//! ## Template engine integration
//!
//! Implement [`ViewEnvironment`] for your engine and construct with
//! [`Paginator::with_view`]; the paginator publishes `paginated`, `pages`,
//! `page` and `uri` as rendering globals so the navigation works out of the
//! box inside templates.
//!
//! ## Custom markup
//!
//! The default markup follows Bootstrap conventions. To render something
//! else, take the [`NavModel`] (a plain list of labeled links with
//! active/disabled states) and feed it to your own template instead of
//! calling [`nav_html`](Paginator::nav_html).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Pagination core
pub mod paginate;

/// Request context (base URI and `page` parameter)
pub mod request;

/// Navigation view model and HTML renderer
pub mod nav;

/// View-environment capability and adapters
pub mod view;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use nav::{render_nav, LinkState, NavItem, NavKind, NavModel};
pub use paginate::{chunk_bounds, PageBounds, Paginator};
pub use request::{PageQuery, PageRequest};
pub use view::{GlobalsMap, ViewEnvironment};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
