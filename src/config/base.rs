//! `[base]` section configuration.
//!
//! Holds the two values tag links are built from.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in tagcloud.toml.
///
/// # Example
/// ```toml
/// [base]
/// root = "http://example.com"
/// tag_dir = "tags"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Base URL path prepended to tag cloud links.
    /// Tag list links are root-relative and ignore it.
    #[serde(default = "defaults::base::root")]
    #[educe(Default = defaults::base::root())]
    pub root: String,

    /// Path segment under which tag pages live.
    #[serde(default = "defaults::base::tag_dir")]
    #[educe(Default = defaults::base::tag_dir())]
    pub tag_dir: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            root = "http://example.com"
            tag_dir = "categories"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.root, "http://example.com");
        assert_eq!(config.base.tag_dir, "categories");
    }

    #[test]
    fn test_base_config_defaults() {
        let config: SiteConfig = toml::from_str("[base]").unwrap();

        assert_eq!(config.base.root, "");
        assert_eq!(config.base.tag_dir, "tags");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            root = "/"
            category_dir = "cats"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_base_config_empty_strings() {
        let config = r#"
            [base]
            root = ""
            tag_dir = ""
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.root, "");
        assert_eq!(config.base.tag_dir, "");
    }
}
