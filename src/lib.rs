//! Masthead - document-head metadata assembly for static sites.
//!
//! Two independent pieces, no shared state between them:
//!
//! - [`head`]: merges per-page overrides with site-wide defaults into a
//!   final, ordered set of head tag descriptors (meta, link, script).
//! - [`content`]: typed content queries and the event collection reader,
//!   projecting pre-sorted content snapshots into [`content::EventRecord`]s.
//!
//! Site-wide defaults come from the [`config`] layer (`masthead.toml`).
//!
//! # Example
//!
//! ```
//! use masthead::{compose, ContentStore, ImageQuery, MemoryStore, PageHead, SiteConfig};
//!
//! let config = SiteConfig::from_str(r#"
//!     [base]
//!     title = "My Site"
//!     description = "A site about things"
//!     author = "Alice"
//!     url = "https://example.com"
//! "#).unwrap();
//!
//! let store = MemoryStore::new();
//! store.insert_image("og-source.png", "/static/og-1200.png");
//! let default_image = store.fixed_image(&ImageQuery::og_default());
//!
//! let page = PageHead {
//!     title: Some("Launch".into()),
//!     ..PageHead::default()
//! };
//! let head = compose(&page, &config.site_metadata(), default_image.as_ref());
//! assert_eq!(head.title, "Launch");
//! ```

pub mod config;
pub mod content;
pub mod head;
pub mod log;

pub use config::{SiteConfig, SiteMetadata};
pub use content::{
    ContentStore, EventRecord, EventsQuery, FixedImage, ImageQuery, MemoryStore, RawContentNode,
    read_events,
};
pub use head::{ComposedHead, LinkTag, MetaTag, PageHead, ScriptTag, compose};
