//! Navigation markup
//!
//! The navigation bar is built in two steps: [`NavModel`] captures the links
//! and their states (previous, numbered pages, next) as plain data, and
//! [`render_nav`] turns that model into the default Bootstrap markup. Render
//! the model yourself when the default markup does not fit your styling; the
//! model is the contract, the markup is a convenience.

mod html;
mod model;

pub use html::render_nav;
pub use model::{LinkState, NavItem, NavKind, NavModel};

#[cfg(test)]
mod tests;
