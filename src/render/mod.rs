//! Tag widgets.
//!
//! | Directive   | Renderer  | Output                                  |
//! |-------------|-----------|-----------------------------------------|
//! | `tag_cloud` | [`TagCloud`] | inline `<a>` links scaled by popularity |
//! | `tag_list`  | [`TagList`]  | `<li>` items, no enclosing `<ul>`       |
//!
//! Both are pure functions of the tag index, the site config and the
//! options parsed from their markup. Tag names are emitted verbatim.

mod cloud;
mod list;

pub use cloud::TagCloud;
pub use list::TagList;

use crate::{config::SiteConfig, tags::TagIndex};

/// Everything a renderer reads during one page render.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub tags: &'a TagIndex,
    pub site: &'a SiteConfig,
}

impl<'a> RenderContext<'a> {
    pub const fn new(tags: &'a TagIndex, site: &'a SiteConfig) -> Self {
        Self { tags, site }
    }
}
