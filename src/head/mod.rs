//! Document-head metadata assembly.
//!
//! `compose()` is the **single entry point**: it merges per-page overrides
//! with the site-wide defaults snapshot into a final, ordered set of head
//! tag descriptors.
//!
//! # Architecture
//!
//! ```text
//! PageHead (per-page overrides)      SiteMetadata (config snapshot)
//!          │                                │
//!          └───────────► compose() ◄────────┘
//!                            │          ▲
//!                            │          └── Option<&FixedImage>
//!                            ▼              (default sharing image)
//!                       ComposedHead
//!                  { title, lang, meta, links, scripts }
//! ```
//!
//! Ordering is fixed: base tags first, image-conditional tags next,
//! override extras appended last. Earlier entries are never removed.

mod compose;
mod tags;

pub use compose::{ComposedHead, PageHead, compose};
pub use tags::{LinkTag, MetaTag, ScriptTag};
