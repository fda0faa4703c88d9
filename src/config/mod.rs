//! Site configuration management for `masthead.toml`.
//!
//! # Sections
//!
//! | Section  | Purpose                                         |
//! |----------|-------------------------------------------------|
//! | `[base]` | Site metadata (title, description, author, url) |
//! | `[head]` | Document-head defaults (sharing image source)   |
//! | `[extra]`| User-defined custom fields                      |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Site"
//! description = "A site about things"
//! author = "Alice"
//! url = "https://example.com"
//!
//! [head]
//! og_image = "og-source.png"
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

mod base;
pub mod defaults;
mod error;
mod head;

pub use error::ConfigError;

use crate::content::ImageQuery;
use anyhow::{Result, bail};
use base::BaseConfig;
use educe::Educe;
use head::HeadConfig;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing masthead.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Document-head defaults
    #[serde(default)]
    pub head: HeadConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        Ok(())
    }

    /// Read-only snapshot of the site-wide metadata defaults.
    ///
    /// Taken once per build; the composer only ever sees this immutable view.
    /// The base URL is normalized without a trailing slash.
    pub fn site_metadata(&self) -> SiteMetadata {
        let url = self
            .base
            .url
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_owned();

        SiteMetadata {
            title: self.base.title.clone(),
            description: self.base.description.clone(),
            author: self.base.author.clone(),
            url,
        }
    }

    /// Query request for the configured social-sharing source image.
    pub fn og_image_query(&self) -> ImageQuery {
        ImageQuery::og(&self.head.og_image)
    }
}

// ============================================================================
// Site Metadata Snapshot
// ============================================================================

/// Site-wide metadata defaults, as a single immutable snapshot.
///
/// Every field is fully resolved: the composer falls back to these values
/// for any per-page field left unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    /// Site title displayed in browser tab and sharing previews.
    pub title: String,
    /// Site description for SEO meta tags.
    pub description: String,
    /// Author name for twitter:creator.
    pub author: String,
    /// Base URL for the canonical link (no trailing slash, empty if unset).
    pub url: String,
}

// ============================================================================
// Tests
// ============================================================================
