//! Event collection reading.
//!
//! `read_events()` projects a pre-filtered, pre-sorted content snapshot
//! into the [`EventRecord`] shape the rest of the site expects. The query
//! executor has already restricted results to the events subdirectory and
//! sorted them by start date, newest first; nothing is re-filtered or
//! re-sorted here.

use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, path::PathBuf};

// ============================================================================
// Raw Content Nodes
// ============================================================================

/// Frontmatter fields of a content node, as the content layer parsed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    pub title: String,

    pub slug: String,

    #[serde(default)]
    pub language: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub authors: Vec<String>,

    /// Recording identifier, present once a recording is published.
    #[serde(default, rename = "videoId")]
    pub video_id: Option<String>,

    /// Event start date (ISO 8601). Drives the executor's sort order;
    /// not part of the projected record.
    #[serde(default)]
    pub start: Option<String>,
}

/// A single node of a content query result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawContentNode {
    /// Source file path, used by the executor's path filter.
    pub source: PathBuf,

    pub frontmatter: Frontmatter,

    /// Summary string precomputed by the content layer.
    #[serde(default)]
    pub excerpt: String,
}

// ============================================================================
// Event Records
// ============================================================================

/// A projected event entry.
///
/// Read-only 1:1 projection of a raw content node; never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub title: String,
    pub slug: String,
    pub language: String,
    pub tags: BTreeSet<String>,
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    pub excerpt: String,
}

impl From<RawContentNode> for EventRecord {
    fn from(node: RawContentNode) -> Self {
        let Frontmatter {
            title,
            slug,
            language,
            tags,
            authors,
            video_id,
            start: _,
        } = node.frontmatter;

        Self {
            title,
            slug,
            language,
            tags: tags.into_iter().collect(),
            authors,
            video_id,
            excerpt: node.excerpt,
        }
    }
}

/// Project a content query snapshot into event records.
///
/// Pure and total: N nodes in, N records out; an empty snapshot yields an
/// empty vector, never an error. Whatever shape the executor returned is
/// projected unchanged.
pub fn read_events(nodes: Vec<RawContentNode>) -> Vec<EventRecord> {
    nodes.into_iter().map(EventRecord::from).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn node(title: &str, slug: &str) -> RawContentNode {
        RawContentNode {
            source: PathBuf::from(format!("content/events/{slug}.mdx")),
            frontmatter: Frontmatter {
                title: title.to_string(),
                slug: slug.to_string(),
                language: "en".to_string(),
                tags: vec!["rust".to_string(), "web".to_string()],
                authors: vec!["Alice".to_string(), "Bob".to_string()],
                video_id: Some("abc123".to_string()),
                start: Some("2024-06-01".to_string()),
            },
            excerpt: "An excerpt".to_string(),
        }
    }

    #[test]
    fn test_read_events_projects_all_fields() {
        let records = read_events(vec![node("Launch", "launch")]);

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.title, "Launch");
        assert_eq!(record.slug, "launch");
        assert_eq!(record.language, "en");
        assert!(record.tags.contains("rust"));
        assert!(record.tags.contains("web"));
        assert_eq!(record.authors, vec!["Alice", "Bob"]);
        assert_eq!(record.video_id.as_deref(), Some("abc123"));
        assert_eq!(record.excerpt, "An excerpt");
    }

    #[test]
    fn test_read_events_count_preserved() {
        let nodes = vec![node("A", "a"), node("B", "b"), node("C", "c")];
        let records = read_events(nodes);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_read_events_order_preserved() {
        let nodes = vec![node("Newest", "n"), node("Older", "o")];
        let records = read_events(nodes);
        assert_eq!(records[0].title, "Newest");
        assert_eq!(records[1].title, "Older");
    }

    #[test]
    fn test_read_events_empty() {
        assert!(read_events(vec![]).is_empty());
    }

    #[test]
    fn test_read_events_missing_optionals() {
        let node = RawContentNode {
            source: PathBuf::from("content/events/bare.mdx"),
            frontmatter: Frontmatter {
                title: "Bare".to_string(),
                slug: "bare".to_string(),
                ..Frontmatter::default()
            },
            excerpt: String::new(),
        };
        let records = read_events(vec![node]);

        let record = &records[0];
        assert_eq!(record.video_id, None);
        assert!(record.tags.is_empty());
        assert!(record.authors.is_empty());
        assert_eq!(record.excerpt, "");
    }

    #[test]
    fn test_duplicate_tags_collapse_into_set() {
        let mut raw = node("Dup", "dup");
        raw.frontmatter.tags = vec!["rust".to_string(), "rust".to_string()];
        let records = read_events(vec![raw]);
        assert_eq!(records[0].tags.len(), 1);
    }

    #[test]
    fn test_frontmatter_deserializes_camel_case_video_id() {
        let json = r#"{
            "title": "Talk",
            "slug": "talk",
            "videoId": "xyz"
        }"#;
        let frontmatter: Frontmatter = serde_json::from_str(json).unwrap();
        assert_eq!(frontmatter.video_id.as_deref(), Some("xyz"));
    }

    #[test]
    fn test_event_record_json_omits_missing_video() {
        let mut raw = node("NoVideo", "no-video");
        raw.frontmatter.video_id = None;
        let records = read_events(vec![raw]);

        let value = serde_json::to_value(&records[0]).unwrap();
        assert!(value.get("video_id").is_none());
        assert_eq!(value["title"], "NoVideo");
    }
}
