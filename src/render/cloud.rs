//! `tag_cloud`: one inline link per tag, font size scaled by post count.
//!
//! ```html
//! <a href='http://example.com/tags/ruby' style='font-size: 160.0%'>Ruby</a> <a ...>Web</a>
//! ```

use super::RenderContext;
use crate::{directive::Directive, options::RenderOptions, tags::WeightedTag};

/// Smallest value the scaling divisor may take. Seeding the running maximum
/// with it keeps the divisor non-zero even for an index of empty tags.
const MIN_DIVISOR: usize = 1;

/// Font size of the least popular tag, in percent.
const BASE_PERCENT: f64 = 100.0;

/// Extra percent given to the most popular tag.
const SPREAD_PERCENT: f64 = 60.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCloud {
    opts: RenderOptions,
}

impl TagCloud {
    pub fn new(markup: &str) -> Self {
        Self::with_options(RenderOptions::parse(markup))
    }

    pub const fn with_options(opts: RenderOptions) -> Self {
        Self { opts }
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        let tags = ctx.tags.sorted();
        let max = tags.iter().map(|t| t.count).fold(MIN_DIVISOR, usize::max);
        let prefix = format!("{}/{}/", ctx.site.root(), ctx.site.tag_dir());

        tags.iter()
            .map(|tag| self.entry(tag, &prefix, max, ctx))
            .collect()
    }

    fn entry(
        &self,
        tag: &WeightedTag<'_>,
        prefix: &str,
        max: usize,
        ctx: &RenderContext<'_>,
    ) -> String {
        let url = format!("{prefix}{}", ctx.site.slugify(tag.name));
        let size = font_size(tag.count, max);
        let counter = if self.opts.counter {
            format!("({})", tag.count)
        } else {
            String::new()
        };
        format!(
            "<a href='{url}' style='font-size: {size:?}%'>{}{counter}</a> ",
            tag.name
        )
    }
}

impl Directive for TagCloud {
    fn name(&self) -> &'static str {
        "tag_cloud"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        TagCloud::render(self, ctx)
    }
}

/// Font size in percent: `100 + 60 * count / max`.
///
/// `max` must be at least [`MIN_DIVISOR`] and no smaller than `count`.
fn font_size(count: usize, max: usize) -> f64 {
    debug_assert!(max >= MIN_DIVISOR);
    BASE_PERCENT + (SPREAD_PERCENT * count as f64) / max as f64
}
