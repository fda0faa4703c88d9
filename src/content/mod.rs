//! Content-layer collaborators.
//!
//! The content store owns parsing, filtering and sorting; this crate only
//! issues typed query requests against it and projects the returned
//! snapshots. Everything here is synchronous: by the time these types are
//! used, the content layer has already resolved its data.

mod events;
mod image;
mod query;

pub use events::{EventRecord, Frontmatter, RawContentNode, read_events};
pub use image::{FixedImage, OG_IMAGE_SIZE};
pub use query::{
    ContentStore, CropFocus, EVENTS_PATH_PREFIX, EventsQuery, ImageQuery, MemoryStore, SortField,
    SortOrder, SortSpec,
};
