//! Default Bootstrap renderer for the navigation model
//!
//! Produces the same markup as the original SimplePaginator nav: a `<nav>`
//! with `mt-5`, a `pagination pagination-sm` list, `page-item` entries with
//! `disabled`/`active` modifiers and `page-link` anchors. Previous/Next use
//! `text-info` when enabled and `text-secondary` when disabled; numbered
//! links carry no color class.

use super::model::{LinkState, NavItem, NavKind, NavModel};

/// Render the navigation model as a Bootstrap-styled HTML fragment
pub fn render_nav(model: &NavModel) -> String {
    let mut html = String::from(r#"<nav class="mt-5"><ul class="pagination pagination-sm">"#);

    for item in &model.items {
        render_item(&mut html, item);
    }

    html.push_str("</ul></nav>");
    html
}

fn render_item(html: &mut String, item: &NavItem) {
    match (item.state, item.kind) {
        (LinkState::Disabled, _) => {
            html.push_str(r#"<li class="page-item disabled"><a class="page-link text-secondary">"#);
            html.push_str(&item.label);
            html.push_str("</a></li>");
        }
        (LinkState::Active, _) => {
            html.push_str(r#"<li class="page-item active"><a class="page-link" href=""#);
            html.push_str(item.href.as_deref().unwrap_or_default());
            html.push_str(r#"">"#);
            html.push_str(&item.label);
            html.push_str("</a></li>");
        }
        (LinkState::Enabled, NavKind::Page) => {
            html.push_str(r#"<li class="page-item"><a class="page-link" href=""#);
            html.push_str(item.href.as_deref().unwrap_or_default());
            html.push_str(r#"">"#);
            html.push_str(&item.label);
            html.push_str("</a></li>");
        }
        (LinkState::Enabled, NavKind::Previous | NavKind::Next) => {
            html.push_str(r#"<li class="page-item"><a class="page-link text-info" href=""#);
            html.push_str(item.href.as_deref().unwrap_or_default());
            html.push_str(r#"">"#);
            html.push_str(&item.label);
            html.push_str("</a></li>");
        }
    }
}
