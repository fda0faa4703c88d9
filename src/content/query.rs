//! Typed content query requests and the executor seam.
//!
//! Queries are explicit request objects rather than embedded query
//! strings: callers describe what they want (path filter, sort, crop
//! geometry) and a [`ContentStore`] implementation resolves them against
//! whatever content backend the build uses. Snapshots come back already
//! filtered and sorted, so downstream readers stay pure projections.

use super::events::RawContentNode;
use super::image::{FixedImage, OG_IMAGE_SIZE};
use crate::log;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, collections::HashMap};

// ============================================================================
// Constants
// ============================================================================

/// Path fragment identifying event content files.
pub const EVENTS_PATH_PREFIX: &str = "content/events/";

// ============================================================================
// Query Requests
// ============================================================================

/// Sort direction for query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Frontmatter field a query sorts by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Start,
    Title,
}

/// Sort specification of a content query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

/// Request for a snapshot of event content nodes.
///
/// The default query matches the events subdirectory, newest start date
/// first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsQuery {
    /// Nodes whose source path contains this fragment are included.
    pub path_prefix: String,
    pub sort: SortSpec,
}

impl Default for EventsQuery {
    fn default() -> Self {
        Self {
            path_prefix: EVENTS_PATH_PREFIX.to_string(),
            sort: SortSpec::default(),
        }
    }
}

/// Crop focus for fixed-size image requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropFocus {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

/// Request for an already-cropped, fixed-size image descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageQuery {
    /// Content-relative path of the source image.
    pub relative_path: String,
    pub width: u32,
    pub height: u32,
    pub crop: CropFocus,
}

impl ImageQuery {
    /// Square center crop of a source image at the sharing image size.
    pub fn og(relative_path: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            width: OG_IMAGE_SIZE,
            height: OG_IMAGE_SIZE,
            crop: CropFocus::Center,
        }
    }

    /// Query for the conventional `og-source.png` sharing image.
    pub fn og_default() -> Self {
        Self::og("og-source.png")
    }
}

// ============================================================================
// Executor Seam
// ============================================================================

/// The content query executor.
///
/// Implementations own filtering, sorting and asset processing; callers
/// receive resolved snapshots and never retry or re-sort. Failure to
/// resolve a backend is the implementation's problem to surface, not
/// this crate's.
pub trait ContentStore {
    /// Pre-filtered, pre-sorted snapshot of event content nodes.
    fn events(&self, query: &EventsQuery) -> Vec<RawContentNode>;

    /// Fixed-size cropped image descriptor for a content-relative path,
    /// or `None` when the source image does not exist.
    fn fixed_image(&self, query: &ImageQuery) -> Option<FixedImage>;
}

// ============================================================================
// In-Memory Store
// ============================================================================

/// In-memory [`ContentStore`] backed by inserted nodes.
///
/// Used by the build pipeline between the content-collection phase and
/// page rendering, and by tests.
///
/// # Thread Safety
///
/// Uses `RwLock` to allow concurrent snapshot reads during rendering
/// while collection writes stay exclusive.
#[derive(Debug, Default)]
pub struct MemoryStore {
    nodes: RwLock<Vec<RawContentNode>>,
    /// Processed image URLs keyed by content-relative source path.
    images: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data.
    ///
    /// Call this at the start of each build to ensure fresh data.
    pub fn clear(&self) {
        self.nodes.write().clear();
        self.images.write().clear();
    }

    /// Insert a collected content node.
    pub fn insert_node(&self, node: RawContentNode) {
        self.nodes.write().push(node);
    }

    /// Register a processed image URL for a content-relative source path.
    pub fn insert_image(&self, relative_path: impl Into<String>, src: impl Into<String>) {
        self.images.write().insert(relative_path.into(), src.into());
    }

    /// Number of stored nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.read().len()
    }
}

impl ContentStore for MemoryStore {
    fn events(&self, query: &EventsQuery) -> Vec<RawContentNode> {
        let nodes = self.nodes.read();
        let mut snapshot: Vec<_> = nodes
            .iter()
            .filter(|node| node.source.to_string_lossy().contains(&query.path_prefix))
            .cloned()
            .collect();

        match (query.sort.field, query.sort.order) {
            (SortField::Start, SortOrder::Desc) => snapshot.sort_by(compare_by_start),
            (SortField::Start, SortOrder::Asc) => snapshot.sort_by(|a, b| compare_by_start(b, a)),
            (SortField::Title, SortOrder::Asc) => {
                snapshot.sort_by(|a, b| a.frontmatter.title.cmp(&b.frontmatter.title));
            }
            (SortField::Title, SortOrder::Desc) => {
                snapshot.sort_by(|a, b| b.frontmatter.title.cmp(&a.frontmatter.title));
            }
        }

        log!("content"; "collected {} event nodes", snapshot.len());
        snapshot
    }

    fn fixed_image(&self, query: &ImageQuery) -> Option<FixedImage> {
        let images = self.images.read();
        // Crop focus is applied by the asset pipeline that registered the
        // image; the descriptor records the requested geometry.
        images.get(&query.relative_path).map(|src| FixedImage {
            src: src.clone(),
            width: query.width,
            height: query.height,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Compare two nodes by start date for sorting (newest first).
///
/// - Nodes with start dates come before nodes without
/// - Nodes with the same start date are sorted by title
fn compare_by_start(a: &RawContentNode, b: &RawContentNode) -> Ordering {
    match (&a.frontmatter.start, &b.frontmatter.start) {
        (Some(a_start), Some(b_start)) if a_start != b_start => b_start.cmp(a_start),
        (Some(_), Some(_)) | (None, None) => a.frontmatter.title.cmp(&b.frontmatter.title),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
    }
}

// ============================================================================
// Tests
// ============================================================================
