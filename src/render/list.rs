//! `tag_list`: one `<li>` per tag linking to its root-relative tag page.
//!
//! The caller provides the enclosing list element:
//!
//! ```html
//! <ul id="tag-list">{% tag_list counter:true %}</ul>
//! ```

use super::RenderContext;
use crate::{directive::Directive, options::RenderOptions};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList {
    opts: RenderOptions,
}

impl TagList {
    pub fn new(markup: &str) -> Self {
        Self::with_options(RenderOptions::parse(markup))
    }

    pub const fn with_options(opts: RenderOptions) -> Self {
        Self { opts }
    }

    /// Links are `/{tag_dir}/{slug}/` and never carry the site root.
    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        let tag_dir = ctx.site.tag_dir();

        ctx.tags
            .sorted()
            .into_iter()
            .map(|tag| {
                let slug = ctx.site.slugify(tag.name);
                let counter = if self.opts.counter {
                    format!(" ({})", tag.count)
                } else {
                    String::new()
                };
                format!("<li><a href='/{tag_dir}/{slug}/'>{}{counter}</a></li>", tag.name)
            })
            .collect()
    }
}

impl Directive for TagList {
    fn name(&self) -> &'static str {
        "tag_list"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        TagList::render(self, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{SiteConfig, SlugMode},
        render::fixtures::sample,
        tags::TagIndex,
    };

    #[test]
    fn test_render_with_counter() {
        let (index, site) = sample();
        let ctx = RenderContext::new(&index, &site);

        assert_eq!(
            TagList::new("counter:true").render(&ctx),
            "<li><a href='/tags/ruby/'>Ruby (3)</a></li>\
             <li><a href='/tags/ruby-on-rails/'>ruby on rails (1)</a></li>\
             <li><a href='/tags/web/'>Web (1)</a></li>"
        );
    }

    #[test]
    fn test_render_without_counter() {
        let (index, site) = sample();
        let ctx = RenderContext::new(&index, &site);

        assert_eq!(
            TagList::new("").render(&ctx),
            "<li><a href='/tags/ruby/'>Ruby</a></li>\
             <li><a href='/tags/ruby-on-rails/'>ruby on rails</a></li>\
             <li><a href='/tags/web/'>Web</a></li>"
        );
        assert_eq!(TagList::new("counter:yes").render(&ctx), TagList::new("").render(&ctx));
    }

    #[test]
    fn test_render_never_uses_root() {
        let (index, site) = sample();
        let html = TagList::new("counter:true").render(&RenderContext::new(&index, &site));

        assert!(!html.contains("example.com"));
        assert_eq!(html.matches("href='/tags/").count(), 3);
    }

    #[test]
    fn test_render_empty_index() {
        let index = TagIndex::new();
        let site = SiteConfig::default();
        let ctx = RenderContext::new(&index, &site);
        assert_eq!(TagList::new("counter:true").render(&ctx), "");
    }

    #[test]
    fn test_render_respects_slug_mode() {
        let (index, mut site) = sample();
        site.slug.tags = SlugMode::Safe;
        let html = TagList::default().render(&RenderContext::new(&index, &site));
        assert!(html.contains("<li><a href='/tags/ruby_on_rails/'>ruby on rails</a></li>"));
    }

    #[test]
    fn test_render_tag_names_are_not_escaped() {
        let mut index = TagIndex::new();
        index.insert("<b>bold</b>", "p");
        let site = SiteConfig::default();
        let html = TagList::default().render(&RenderContext::new(&index, &site));
        assert_eq!(html, "<li><a href='/tags/b-bold-b/'><b>bold</b></a></li>");
    }

    #[test]
    fn test_directive_name() {
        assert_eq!(Directive::name(&TagList::default()), "tag_list");
    }
}
