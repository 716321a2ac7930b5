//! The site's tag index: tag name → posts carrying that tag.
//!
//! Renderers only ever read post counts, so posts are kept as opaque
//! identifiers. The index is loaded from a JSON object:
//!
//! ```json
//! { "Ruby": ["hello-world", "on-blocks"], "Web": ["css-grid"] }
//! ```

use rustc_hash::FxHashMap;
use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Tag index loading errors
#[derive(Debug, Error)]
pub enum TagIndexError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Tag index parsing error")]
    Json(#[from] serde_json::Error),
}

/// Mapping from tag name to the posts bearing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tags: FxHashMap<String, Vec<String>>,
}

/// A tag with its post count, as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedTag<'a> {
    pub name: &'a str,
    pub count: usize,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an index from a JSON object of `tag → [post, ...]`.
    pub fn from_json(content: &str) -> Result<Self, TagIndexError> {
        let tags: FxHashMap<String, Vec<String>> = serde_json::from_str(content)?;
        Ok(Self { tags })
    }

    /// Load an index from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, TagIndexError> {
        let content =
            fs::read_to_string(path).map_err(|err| TagIndexError::Io(path.to_path_buf(), err))?;
        Self::from_json(&content)
    }

    /// Add a post under `tag`, creating the tag on first use.
    pub fn insert(&mut self, tag: impl Into<String>, post: impl Into<String>) {
        self.tags.entry(tag.into()).or_default().push(post.into());
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of posts under `tag`, if the tag exists.
    pub fn count(&self, tag: &str) -> Option<usize> {
        self.tags.get(tag).map(Vec::len)
    }

    /// Every tag with its post count, in display order.
    ///
    /// Display order is ascending by lowercased name. Names that lowercase
    /// identically fall back to plain byte order so the result never
    /// depends on hash iteration order.
    pub fn sorted(&self) -> Vec<WeightedTag<'_>> {
        let mut tags: Vec<(String, WeightedTag<'_>)> = self
            .tags
            .iter()
            .map(|(name, posts)| {
                let tag = WeightedTag {
                    name,
                    count: posts.len(),
                };
                (name.to_lowercase(), tag)
            })
            .collect();

        tags.sort_unstable_by(|(a_key, a), (b_key, b)| match a_key.cmp(b_key) {
            Ordering::Equal => a.name.cmp(b.name),
            other => other,
        });

        tags.into_iter().map(|(_, tag)| tag).collect()
    }
}

impl FromIterator<(String, Vec<String>)> for TagIndex {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}
