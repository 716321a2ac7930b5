//! Directive registry and template expansion.
//!
//! Directives are registered once per process by name. A template is
//! expanded by replacing each `{% name markup %}` whose name is registered
//! with the rendering of a directive built from that markup:
//!
//! ```text
//! <span id="tag-cloud">{% tag_cloud %}</span>
//! <ul id="tag-list">{% tag_list counter:true %}</ul>
//! ```
//!
//! Anything else, including unregistered directives, is copied through.

use crate::render::{RenderContext, TagCloud, TagList};
use regex::{Captures, Regex};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// A renderer constructed from directive markup.
pub trait Directive: Send + Sync {
    /// Name the directive is registered under.
    fn name(&self) -> &'static str;

    /// Render the directive against one page's context.
    fn render(&self, ctx: &RenderContext<'_>) -> String;
}

/// Builds a directive from its markup.
pub type Factory = fn(&str) -> Box<dyn Directive>;

fn tag_cloud(markup: &str) -> Box<dyn Directive> {
    Box::new(TagCloud::new(markup))
}

fn tag_list(markup: &str) -> Box<dyn Directive> {
    Box::new(TagList::new(markup))
}

static REGISTRY: LazyLock<FxHashMap<&'static str, Factory>> = LazyLock::new(|| {
    let entries: [(&'static str, Factory); 2] = [("tag_cloud", tag_cloud), ("tag_list", tag_list)];
    entries.into_iter().collect()
});

/// Factory registered under `name`.
pub fn lookup(name: &str) -> Option<Factory> {
    REGISTRY.get(name).copied()
}

/// Build the directive registered under `name` from `markup`.
pub fn create(name: &str, markup: &str) -> Option<Box<dyn Directive>> {
    lookup(name).map(|factory| factory(markup))
}

/// Registered directive names, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Result of expanding a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expanded {
    /// Template text with registered directives rendered in place.
    pub text: String,
    /// Number of directives rendered.
    pub rendered: usize,
    /// Names of directives left untouched because nothing is registered
    /// under them, in order of appearance.
    pub unknown: Vec<String>,
}

/// Expand every registered `{% name markup %}` in `template`.
///
/// `{%-` and `-%}` trim markers are accepted; surrounding whitespace is
/// left as-is.
pub fn expand(template: &str, ctx: &RenderContext<'_>) -> Expanded {
    static RE_DIRECTIVE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?s)\{%-?\s*(\w+)(.*?)-?%\}").unwrap());

    let mut rendered = 0;
    let mut unknown = Vec::new();

    let text = RE_DIRECTIVE.replace_all(template, |caps: &Captures<'_>| {
        match create(&caps[1], &caps[2]) {
            Some(directive) => {
                rendered += 1;
                directive.render(ctx)
            }
            None => {
                unknown.push(caps[1].to_owned());
                caps[0].to_owned()
            }
        }
    });

    Expanded {
        text: text.into_owned(),
        rendered,
        unknown,
    }
}
