//! Tab widgets bound to the live DOM.
//!
//! Containers are found by role once the page is rendered. Each one gets a
//! `keydown` listener (arrow-key cycling) and, unless disabled in its config,
//! a `click` listener per tab (panel and image switching).

pub mod dom;
pub mod widget;

pub use dom::{DomImage, DomPanel, DomScope, DomTab};
pub use widget::{attach_all, TabWidget};
