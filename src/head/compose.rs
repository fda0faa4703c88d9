//! The metadata merge algorithm.
//!
//! A pure function over immutable inputs: per-page overrides win over
//! site-wide defaults, field by field, and the result is a fully resolved
//! [`ComposedHead`] with a fixed tag ordering.

use super::tags::{LinkTag, MetaTag, ScriptTag};
use crate::config::SiteMetadata;
use crate::content::FixedImage;
use serde::Serialize;

// ============================================================================
// Constants
// ============================================================================

/// Fallback html lang attribute when the page supplies none.
///
/// Deliberately a literal, not sourced from site metadata.
const DEFAULT_LANG: &str = "en";

/// Body font stylesheet, linked on every page.
const FONT_OPEN_SANS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Open+Sans:wght@400;700&display=swap";

/// Heading font stylesheet, linked on every page.
const FONT_MONTSERRAT_URL: &str =
    "https://fonts.googleapis.com/css2?family=Montserrat:wght@400;700&display=swap";

/// Mobile navigation stylesheet, applied below the desktop breakpoint.
const HAMBURGER_CSS_HREF: &str = "/hamburger.min.css";
const HAMBURGER_CSS_MEDIA: &str = "screen and (max-width:1280px)";

// ============================================================================
// Page Overrides
// ============================================================================

/// Per-page metadata overrides.
///
/// Every field is optional; anything left unset falls back to the
/// [`SiteMetadata`] snapshot (or, for `lang`, to the literal `"en"`).
/// The `meta`, `links` and `scripts` sequences are appended to the output
/// verbatim, after all default entries, in the order given here.
#[derive(Debug, Clone, Default)]
pub struct PageHead {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    /// Canonical URL for this page.
    pub url: Option<String>,
    pub lang: Option<String>,
    /// Representative image for social-sharing previews.
    pub image: Option<FixedImage>,
    /// Extra meta tags, unvalidated.
    pub meta: Vec<MetaTag>,
    /// Extra link tags, unvalidated.
    pub links: Vec<LinkTag>,
    /// Script tags, passed through as-is.
    pub scripts: Vec<ScriptTag>,
}

// ============================================================================
// Composed Output
// ============================================================================

/// Fully resolved document-head metadata for one page.
///
/// Consumed by an external head-injection layer; serialized to JSON the
/// same way site data is exposed to templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedHead {
    /// Page title.
    pub title: String,
    /// html lang attribute.
    pub lang: String,
    /// Ordered meta tag descriptors.
    pub meta: Vec<MetaTag>,
    /// Ordered link tag descriptors.
    pub links: Vec<LinkTag>,
    /// Ordered script descriptors.
    pub scripts: Vec<ScriptTag>,
}

impl ComposedHead {
    /// Serialize to pretty-printed JSON for the head-injection layer.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// ============================================================================
// Composition
// ============================================================================

/// Merge per-page overrides with site-wide defaults into a final head.
///
/// Pure and total: performs no I/O, never fails, and resolves every
/// output field before use. Tag order is fixed:
///
/// 1. seven base meta tags (description, og:*, twitter:*),
/// 2. image-conditional meta tags (exactly one `twitter:card` branch),
/// 3. page-supplied extra meta tags, verbatim.
///
/// Links follow the same scheme: canonical, the two font stylesheets,
/// the mobile navigation stylesheet, then page-supplied extras. Later
/// entries never remove earlier ones; no dedup is performed.
pub fn compose(
    page: &PageHead,
    site: &SiteMetadata,
    default_image: Option<&FixedImage>,
) -> ComposedHead {
    let description = page.description.as_deref().unwrap_or(&site.description);
    let title = page.title.as_deref().unwrap_or(&site.title);
    let author = page.author.as_deref().unwrap_or(&site.author);
    let url = page.url.as_deref().unwrap_or(&site.url);
    let lang = page.lang.as_deref().unwrap_or(DEFAULT_LANG);

    // Presence check, not truthiness: a page image with zero dimensions
    // is still used as-is rather than falling back to the default.
    let image = page.image.as_ref().or(default_image);

    let mut meta = vec![
        MetaTag::name("description", description),
        MetaTag::property("og:title", title),
        MetaTag::property("og:description", description),
        MetaTag::property("og:type", "website"),
        MetaTag::name("twitter:creator", author),
        MetaTag::name("twitter:title", title),
        MetaTag::name("twitter:description", description),
    ];

    match image {
        Some(image) => {
            meta.push(MetaTag::property("og:image", image.src.as_str()));
            meta.push(MetaTag::property("og:image:width", image.width.to_string()));
            meta.push(MetaTag::property(
                "og:image:height",
                image.height.to_string(),
            ));
            meta.push(MetaTag::name("twitter:card", "summary_large_image"));
        }
        None => meta.push(MetaTag::name("twitter:card", "summary")),
    }

    meta.extend(page.meta.iter().cloned());

    let mut links = vec![
        LinkTag::canonical(url),
        LinkTag::stylesheet(FONT_OPEN_SANS_URL),
        LinkTag::stylesheet(FONT_MONTSERRAT_URL),
        LinkTag::stylesheet_for_media(HAMBURGER_CSS_HREF, HAMBURGER_CSS_MEDIA),
    ];
    links.extend(page.links.iter().cloned());

    ComposedHead {
        title: title.to_owned(),
        lang: lang.to_owned(),
        meta,
        links,
        scripts: page.scripts.clone(),
    }
}

// ============================================================================
// Tests
// ============================================================================
