//! Tag slugification.
//!
//! Converts free-form tag text into the path segment used for its tag page.

use crate::config::SlugMode;

/// Characters forbidden in file paths and fragments
const FORBIDDEN_CHARS: &[char] = &[
    '<', '>', ':', '|', '?', '*', '#', '\\', '/', '(', ')', '[', ']', '\t', '\r', '\n',
];

/// Convert tag text to a URL path segment according to `mode`.
pub fn slugify_tag(text: &str, mode: SlugMode) -> String {
    match mode {
        SlugMode::On => to_url(text),
        SlugMode::Safe => sanitize_text(text),
        SlugMode::No => text.to_owned(),
    }
}

/// ASCII slug: transliterate, lowercase, collapse separators into `-`.
///
/// `"ruby on rails"` → `"ruby-on-rails"`, `"Q&A"` → `"q-and-a"`.
fn to_url(text: &str) -> String {
    slug::slugify(text.replace('&', " and "))
}

/// Remove forbidden characters and replace whitespace with underscores
fn sanitize_text(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}
