//! `[head]` section configuration.
//!
//! Defaults used when assembling document-head metadata.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[head]` section in masthead.toml - document-head defaults.
///
/// # Example
/// ```toml
/// [head]
/// og_image = "images/social.png"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct HeadConfig {
    /// Content-relative path of the social-sharing source image.
    ///
    /// The content layer crops this to a fixed 1200x1200 square.
    #[serde(default = "defaults::head::og_image")]
    #[educe(Default = defaults::head::og_image())]
    pub og_image: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_head_config_default() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.head.og_image, "og-source.png");
    }

    #[test]
    fn test_head_config_custom_image() {
        let config = r#"
            [head]
            og_image = "images/social.png"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.head.og_image, "images/social.png");
    }

    #[test]
    fn test_head_config_unknown_field() {
        let config = r#"
            [head]
            og_image = "a.png"
            favicon = "b.ico"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
    }
}
