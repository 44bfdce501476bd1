//! Media kind classification by content type.

use mediacanvas_core::{CanvasError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What an uploaded resource is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a MIME content type by its top-level type.
    ///
    /// Matching is case-insensitive; anything other than `image/*` or
    /// `video/*` is rejected with [`CanvasError::UnsupportedMediaKind`].
    pub fn classify(content_type: &str) -> Result<Self> {
        let normalized = content_type.trim().to_ascii_lowercase();
        if normalized.starts_with("image/") {
            Ok(Self::Image)
        } else if normalized.starts_with("video/") {
            Ok(Self::Video)
        } else {
            Err(CanvasError::UnsupportedMediaKind {
                content_type: content_type.to_string(),
            })
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    /// Only images get their natural size probed.
    pub fn needs_size_probe(self) -> bool {
        matches!(self, Self::Image)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
