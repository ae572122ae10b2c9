//! Navigation view model
//!
//! Captures the navigation structure as data before any markup exists:
//! one item per control, each with a label, an optional target and a state.

/// Interaction state of a navigation item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// A plain clickable link
    Enabled,
    /// The link for the current page
    Active,
    /// A non-interactive placeholder (Previous on page 1, Next on the last)
    Disabled,
}

/// Which control a navigation item represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKind {
    /// The "Previous" control
    Previous,
    /// A numbered page link
    Page,
    /// The "Next" control
    Next,
}

/// One entry in the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Visible text ("Previous", "Next", or the page number)
    pub label: String,
    /// Link target, `None` for disabled items
    pub href: Option<String>,
    /// Interaction state
    pub state: LinkState,
    /// Control kind, drives styling in the default renderer
    pub kind: NavKind,
}

/// Complete navigation structure for one paginated view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavModel {
    /// Base URI that page links append `?page={n}` to
    pub base_uri: String,
    /// Current page number (1-based)
    pub current_page: usize,
    /// Total number of pages
    pub page_count: usize,
    /// Navigation items in display order
    pub items: Vec<NavItem>,
}

impl NavModel {
    /// Build the navigation model for the given pagination shape.
    ///
    /// Previous is disabled on page 1, Next is disabled on the last page,
    /// and the numbered link matching `current_page` is marked active.
    pub fn new(base_uri: &str, current_page: usize, page_count: usize) -> Self {
        let mut items = Vec::with_capacity(page_count + 2);

        if current_page > 1 {
            items.push(NavItem {
                label: "Previous".to_string(),
                href: Some(page_href(base_uri, current_page - 1)),
                state: LinkState::Enabled,
                kind: NavKind::Previous,
            });
        } else {
            items.push(NavItem {
                label: "Previous".to_string(),
                href: None,
                state: LinkState::Disabled,
                kind: NavKind::Previous,
            });
        }

        for number in 1..=page_count {
            let state = if number == current_page {
                LinkState::Active
            } else {
                LinkState::Enabled
            };
            items.push(NavItem {
                label: number.to_string(),
                href: Some(page_href(base_uri, number)),
                state,
                kind: NavKind::Page,
            });
        }

        if current_page == page_count {
            items.push(NavItem {
                label: "Next".to_string(),
                href: None,
                state: LinkState::Disabled,
                kind: NavKind::Next,
            });
        } else {
            items.push(NavItem {
                label: "Next".to_string(),
                href: Some(page_href(base_uri, current_page + 1)),
                state: LinkState::Enabled,
                kind: NavKind::Next,
            });
        }

        Self {
            base_uri: base_uri.to_string(),
            current_page,
            page_count,
            items,
        }
    }
}

/// Link target for a given page number
fn page_href(base_uri: &str, page: usize) -> String {
    format!("{base_uri}?page={page}")
}
