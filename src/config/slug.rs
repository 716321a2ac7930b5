//! `[slug]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// How tag text is turned into a URL path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// ASCII slug: transliterated, lowercased, hyphenated (default).
    #[default]
    On,
    /// Strip path-unsafe characters, whitespace becomes `_`.
    Safe,
    /// Use the tag text as-is.
    No,
}

/// `[slug]` section in tagcloud.toml.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SlugConfig {
    /// Slug mode for tag page segments
    #[serde(default = "defaults::slug::tags")]
    #[educe(Default = defaults::slug::tags())]
    pub tags: SlugMode,
}
