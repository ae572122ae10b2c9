//! Tests for the navigation model and default renderer

use super::*;
use pretty_assertions::assert_eq;

// ============================================================================
// NavModel Tests
// ============================================================================

#[test]
fn test_model_shape() {
    let model = NavModel::new("/posts", 2, 3);

    // Previous + 3 numbered + Next
    assert_eq!(model.items.len(), 5);
    assert_eq!(model.items[0].kind, NavKind::Previous);
    assert_eq!(model.items[4].kind, NavKind::Next);
    assert!(model.items[1..4]
        .iter()
        .all(|item| item.kind == NavKind::Page));
}

#[test]
fn test_previous_disabled_on_first_page() {
    let model = NavModel::new("/posts", 1, 3);
    let previous = &model.items[0];

    assert_eq!(previous.state, LinkState::Disabled);
    assert_eq!(previous.href, None);
}

#[test]
fn test_previous_links_back_one_page() {
    let model = NavModel::new("/posts", 3, 3);
    let previous = &model.items[0];

    assert_eq!(previous.state, LinkState::Enabled);
    assert_eq!(previous.href.as_deref(), Some("/posts?page=2"));
}

#[test]
fn test_next_disabled_on_last_page() {
    let model = NavModel::new("/posts", 3, 3);
    let next = model.items.last().unwrap();

    assert_eq!(next.state, LinkState::Disabled);
    assert_eq!(next.href, None);
}

#[test]
fn test_next_links_forward_one_page() {
    let model = NavModel::new("/posts", 1, 3);
    let next = model.items.last().unwrap();

    assert_eq!(next.state, LinkState::Enabled);
    assert_eq!(next.href.as_deref(), Some("/posts?page=2"));
}

#[test]
fn test_exactly_one_active_page() {
    let model = NavModel::new("/posts", 2, 4);

    let active: Vec<&NavItem> = model
        .items
        .iter()
        .filter(|item| item.state == LinkState::Active)
        .collect();

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].label, "2");
    assert_eq!(active[0].href.as_deref(), Some("/posts?page=2"));
}

#[test]
fn test_numbered_links_cover_all_pages() {
    let model = NavModel::new("/items", 1, 4);

    let labels: Vec<&str> = model
        .items
        .iter()
        .filter(|item| item.kind == NavKind::Page)
        .map(|item| item.label.as_str())
        .collect();

    assert_eq!(labels, vec!["1", "2", "3", "4"]);
}

#[test]
fn test_single_page_disables_both_ends() {
    let model = NavModel::new("/posts", 1, 1);

    assert_eq!(model.items[0].state, LinkState::Disabled);
    assert_eq!(model.items[1].state, LinkState::Active);
    assert_eq!(model.items[2].state, LinkState::Disabled);
}

// ============================================================================
// Renderer Tests
// ============================================================================

#[test]
fn test_render_first_of_two_pages_exact() {
    let model = NavModel::new("/items", 1, 2);
    let html = render_nav(&model);

    assert_eq!(
        html,
        concat!(
            r#"<nav class="mt-5"><ul class="pagination pagination-sm">"#,
            r#"<li class="page-item disabled"><a class="page-link text-secondary">Previous</a></li>"#,
            r#"<li class="page-item active"><a class="page-link" href="/items?page=1">1</a></li>"#,
            r#"<li class="page-item"><a class="page-link" href="/items?page=2">2</a></li>"#,
            r#"<li class="page-item"><a class="page-link text-info" href="/items?page=2">Next</a></li>"#,
            r#"</ul></nav>"#,
        )
    );
}

#[test]
fn test_render_last_page_disables_next() {
    let model = NavModel::new("/items", 2, 2);
    let html = render_nav(&model);

    assert!(html.contains(
        r#"<li class="page-item"><a class="page-link text-info" href="/items?page=1">Previous</a></li>"#
    ));
    assert!(html.contains(
        r#"<li class="page-item disabled"><a class="page-link text-secondary">Next</a></li>"#
    ));
}

#[test]
fn test_render_marks_only_current_active() {
    let model = NavModel::new("/items", 2, 3);
    let html = render_nav(&model);

    assert_eq!(html.matches(r#"class="page-item active""#).count(), 1);
    assert!(html.contains(
        r#"<li class="page-item active"><a class="page-link" href="/items?page=2">2</a></li>"#
    ));
}

#[test]
fn test_render_wraps_in_nav_container() {
    let model = NavModel::new("/items", 1, 1);
    let html = render_nav(&model);

    assert!(html.starts_with(r#"<nav class="mt-5"><ul class="pagination pagination-sm">"#));
    assert!(html.ends_with("</ul></nav>"));
}
