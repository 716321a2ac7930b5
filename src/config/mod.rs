//! Site configuration management for `tagcloud.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                    |
//! |-----------|--------------------------------------------|
//! | `[base]`  | Link roots (`root`, `tag_dir`)             |
//! | `[slug]`  | How tag text becomes a path segment        |
//!
//! # Example
//!
//! ```toml
//! [base]
//! root = "http://example.com"
//! tag_dir = "tags"
//!
//! [slug]
//! tags = "on"
//! ```

mod base;
pub mod defaults;
mod error;
mod slug;

pub use base::BaseConfig;
pub use error::ConfigError;
pub use slug::{SlugConfig, SlugMode};

use crate::utils::slug::slugify_tag;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing tagcloud.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Link roots
    #[serde(default)]
    pub base: BaseConfig,

    /// Slug settings
    #[serde(default)]
    pub slug: SlugConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = normalize_path(path);
        Ok(config)
    }

    /// Base URL path for tag cloud links.
    pub fn root(&self) -> &str {
        &self.base.root
    }

    /// Path segment under which tag pages live.
    pub fn tag_dir(&self) -> &str {
        &self.base.tag_dir
    }

    /// Slug of `tag` under the configured mode.
    pub fn slugify(&self, tag: &str) -> String {
        slugify_tag(tag, self.slug.tags)
    }

    /// Replace `root` and `tag_dir` with command-line values when given.
    pub fn apply_overrides(&mut self, root: Option<&String>, tag_dir: Option<&String>) {
        Self::update_option(&mut self.base.root, root);
        Self::update_option(&mut self.base.tag_dir, tag_dir);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }
}

/// Normalize a path to absolute, using canonicalize if the path exists
fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}
