//! Directive option parsing.
//!
//! Both directives accept the same free-form markup, of which only
//! `counter:<word>` is recognised:
//!
//! ```text
//! {% tag_cloud counter:true %}
//! {% tag_list %}
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Options parsed once from a directive's markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append each tag's post count to its entry.
    pub counter: bool,
    /// Markup left after the recognised options were stripped.
    pub rest: String,
}

impl RenderOptions {
    /// Parse directive markup. Never fails; unrecognised text is kept in
    /// `rest` and otherwise ignored.
    ///
    /// The key is matched case-insensitively, the value must be exactly
    /// `true` to enable the counter.
    pub fn parse(markup: &str) -> Self {
        static RE_COUNTER: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"(?i)counter:([A-Za-z0-9_]+)").unwrap());

        let markup = markup.trim();
        match RE_COUNTER.captures(markup) {
            Some(caps) => {
                let token = caps.get(0).map_or(0..0, |m| m.range());
                let mut rest = String::with_capacity(markup.len());
                rest.push_str(&markup[..token.start]);
                rest.push_str(&markup[token.end..]);
                Self {
                    counter: &caps[1] == "true",
                    rest,
                }
            }
            None => Self {
                counter: false,
                rest: markup.to_owned(),
            },
        }
    }
}
