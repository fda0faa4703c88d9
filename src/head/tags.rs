//! Head tag descriptor types.
//!
//! These are opaque descriptors destined for a document's head section.
//! They are serialized to JSON for the external head-injection layer;
//! this crate only cares about their ordering and presence.

use serde::Serialize;

// ============================================================================
// Meta Tags
// ============================================================================

/// A `<meta>` tag descriptor.
///
/// OpenGraph tags are keyed by `property`, plain meta tags by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetaTag {
    Name { name: String, content: String },
    Property { property: String, content: String },
}

impl MetaTag {
    /// A `name`-keyed meta tag (e.g. `description`, `twitter:card`).
    pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Name {
            name: name.into(),
            content: content.into(),
        }
    }

    /// A `property`-keyed meta tag (e.g. `og:title`).
    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Property {
            property: property.into(),
            content: content.into(),
        }
    }

    /// The tag key, regardless of variant.
    pub fn key(&self) -> &str {
        match self {
            Self::Name { name, .. } => name,
            Self::Property { property, .. } => property,
        }
    }

    /// The tag content, regardless of variant.
    pub fn content(&self) -> &str {
        match self {
            Self::Name { content, .. } | Self::Property { content, .. } => content,
        }
    }
}

// ============================================================================
// Link Tags
// ============================================================================

/// A `<link>` tag descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
    /// Media query constraining when the resource applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

impl LinkTag {
    /// Canonical link for the page URL.
    pub fn canonical(href: impl Into<String>) -> Self {
        Self {
            rel: "canonical".into(),
            href: href.into(),
            media: None,
        }
    }

    /// Unconditional stylesheet link.
    pub fn stylesheet(href: impl Into<String>) -> Self {
        Self {
            rel: "stylesheet".into(),
            href: href.into(),
            media: None,
        }
    }

    /// Stylesheet link constrained by a media query.
    pub fn stylesheet_for_media(href: impl Into<String>, media: impl Into<String>) -> Self {
        Self {
            rel: "stylesheet".into(),
            href: href.into(),
            media: Some(media.into()),
        }
    }
}

// ============================================================================
// Script Tags
// ============================================================================

/// A `<script>` tag descriptor.
///
/// Passed through the composer verbatim; no defaults exist for scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptTag {
    /// External script source URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Inline script body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ScriptTag {
    /// An external script referenced by URL.
    pub fn external(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            body: None,
        }
    }

    /// An inline script.
    pub fn inline(body: impl Into<String>) -> Self {
        Self {
            src: None,
            body: Some(body.into()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meta_tag_name_serialization() {
        let tag = MetaTag::name("description", "A site");
        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            json!({"name": "description", "content": "A site"})
        );
    }

    #[test]
    fn test_meta_tag_property_serialization() {
        let tag = MetaTag::property("og:title", "Hello");
        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            json!({"property": "og:title", "content": "Hello"})
        );
    }

    #[test]
    fn test_meta_tag_accessors() {
        let name = MetaTag::name("twitter:card", "summary");
        assert_eq!(name.key(), "twitter:card");
        assert_eq!(name.content(), "summary");

        let property = MetaTag::property("og:type", "website");
        assert_eq!(property.key(), "og:type");
        assert_eq!(property.content(), "website");
    }

    #[test]
    fn test_link_tag_canonical() {
        let link = LinkTag::canonical("https://example.com");
        assert_eq!(link.rel, "canonical");
        assert_eq!(link.href, "https://example.com");
        assert_eq!(link.media, None);
    }

    #[test]
    fn test_link_tag_media_serialization() {
        let plain = LinkTag::stylesheet("/style.css");
        assert_eq!(
            serde_json::to_value(&plain).unwrap(),
            json!({"rel": "stylesheet", "href": "/style.css"})
        );

        let constrained = LinkTag::stylesheet_for_media("/m.css", "screen and (max-width:1280px)");
        assert_eq!(
            serde_json::to_value(&constrained).unwrap(),
            json!({
                "rel": "stylesheet",
                "href": "/m.css",
                "media": "screen and (max-width:1280px)"
            })
        );
    }

    #[test]
    fn test_script_tag_variants() {
        let external = ScriptTag::external("https://example.com/app.js");
        assert_eq!(
            serde_json::to_value(&external).unwrap(),
            json!({"src": "https://example.com/app.js"})
        );

        let inline = ScriptTag::inline("console.log(1)");
        assert_eq!(
            serde_json::to_value(&inline).unwrap(),
            json!({"body": "console.log(1)"})
        );
    }
}
