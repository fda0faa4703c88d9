//! Representative image descriptors for social-sharing previews.

use serde::{Deserialize, Serialize};

/// Edge length of the cropped social-sharing source image, in pixels.
pub const OG_IMAGE_SIZE: u32 = 1200;

/// An already-cropped, fixed-size image descriptor.
///
/// Produced by the content layer's asset pipeline; this crate never
/// resizes or crops, it only forwards the descriptor into meta tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedImage {
    /// URL of the processed image.
    pub src: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}
