//! View-environment integration
//!
//! Template engines differ in how rendering globals are registered, so the
//! paginator only depends on the one capability it needs: "publish a named
//! global value". Implement [`ViewEnvironment`] as a thin adapter over your
//! engine and pass it to [`Paginator::with_view`](crate::Paginator::with_view);
//! the paginator publishes four fixed globals once, at construction.

use serde_json::Value;
use std::collections::BTreeMap;

/// Global key for the "dataset spans multiple pages" flag
pub const GLOBAL_PAGINATED: &str = "paginated";
/// Global key for the total number of pages
pub const GLOBAL_PAGES: &str = "pages";
/// Global key for the current page number
pub const GLOBAL_PAGE: &str = "page";
/// Global key for the base URI used in navigation links
pub const GLOBAL_URI: &str = "uri";

/// Capability to register a named global value accessible during rendering
pub trait ViewEnvironment {
    /// Register `value` under `key` for the upcoming render
    fn add_global(&mut self, key: &str, value: Value);
}

/// In-memory [`ViewEnvironment`] backed by a map
///
/// Useful for template engines that take their context as a plain map, and
/// for asserting published globals in tests.
#[derive(Debug, Clone, Default)]
pub struct GlobalsMap {
    globals: BTreeMap<String, Value>,
}

impl GlobalsMap {
    /// Create an empty globals map
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a registered global by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.globals.get(key)
    }

    /// Number of registered globals
    pub fn len(&self) -> usize {
        self.globals.len()
    }

    /// Check whether no globals have been registered
    pub fn is_empty(&self) -> bool {
        self.globals.is_empty()
    }

    /// Iterate over registered globals in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.globals.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl ViewEnvironment for GlobalsMap {
    fn add_global(&mut self, key: &str, value: Value) {
        self.globals.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_globals_map_roundtrip() {
        let mut view = GlobalsMap::new();
        assert!(view.is_empty());

        view.add_global(GLOBAL_PAGE, json!(2));
        view.add_global(GLOBAL_URI, json!("/posts"));

        assert_eq!(view.len(), 2);
        assert_eq!(view.get(GLOBAL_PAGE), Some(&json!(2)));
        assert_eq!(view.get(GLOBAL_URI), Some(&json!("/posts")));
        assert_eq!(view.get("missing"), None);
    }

    #[test]
    fn test_globals_map_overwrites() {
        let mut view = GlobalsMap::new();
        view.add_global(GLOBAL_PAGE, json!(1));
        view.add_global(GLOBAL_PAGE, json!(2));

        assert_eq!(view.len(), 1);
        assert_eq!(view.get(GLOBAL_PAGE), Some(&json!(2)));
    }
}
