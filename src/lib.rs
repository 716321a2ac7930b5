//! Tag cloud and tag list directives for static site templates.
//!
//! ```ignore
//! let ctx = RenderContext::new(&index, &site);
//! let cloud = TagCloud::new("counter:true").render(&ctx);
//! let page = directive::expand(template, &ctx).text;
//! ```

pub mod config;
pub mod directive;
pub mod options;
pub mod render;
pub mod tags;
pub mod utils;

pub use config::SiteConfig;
pub use directive::{Directive, expand};
pub use options::RenderOptions;
pub use render::{RenderContext, TagCloud, TagList};
pub use tags::{TagIndex, WeightedTag};
