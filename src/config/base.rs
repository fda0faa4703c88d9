//! `[base]` section configuration.
//!
//! Contains basic site information like title, author, description, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in masthead.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "My Site"
/// description = "A site about things"
/// author = "Alice"
/// url = "https://example.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title displayed in browser tab and sharing previews.
    pub title: String,

    /// Site description for SEO meta tags.
    pub description: String,

    /// Author name for twitter:creator meta tags.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Base URL for canonical links.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            title = "My Site"
            description = "A site about things"
            author = "Alice"
            url = "https://example.com"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "My Site");
        assert_eq!(config.base.description, "A site about things");
        assert_eq!(config.base.author, "Alice");
        assert_eq!(config.base.url, Some("https://example.com".to_string()));
    }

    #[test]
    fn test_base_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.author, "<YOUR_NAME>");
        assert_eq!(config.base.url, None);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
            unknown_field = "should_fail"
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
            title = ""
            description = ""
            author = ""
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "");
        assert_eq!(config.base.description, "");
        assert_eq!(config.base.author, "");
    }

    #[test]
    fn test_base_config_unicode() {
        let config = r#"
            [base]
            title = "My Site 🚀"
            description = "This is a site with unicode"
            author = "René"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "My Site 🚀");
        assert_eq!(config.base.author, "René");
    }
}
