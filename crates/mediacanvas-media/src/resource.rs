//! Uploaded binary resources.

use crate::kind::MediaKind;
use mediacanvas_core::{CanvasError, Result};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// An uploaded file: its name, declared content type and raw bytes.
///
/// Cloning is cheap; the payload is shared.
#[derive(Clone)]
pub struct MediaResource {
    name: String,
    content_type: String,
    data: Arc<[u8]>,
}

impl MediaResource {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Read a file from disk, deriving the content type from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content_type = content_type_for_path(path).ok_or_else(|| {
            CanvasError::UnsupportedMediaKind {
                content_type: path
                    .extension()
                    .map(|ext| ext.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            }
        })?;
        let data = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, content_type, data))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Shared handle to the payload, for moving into background tasks.
    pub fn shared_data(&self) -> Arc<[u8]> {
        Arc::clone(&self.data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn kind(&self) -> Result<MediaKind> {
        MediaKind::classify(&self.content_type)
    }
}

impl fmt::Debug for MediaResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaResource")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("len", &self.data.len())
            .finish()
    }
}

const VIDEO_EXTENSIONS: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/mp4"),
    ("mov", "video/quicktime"),
    ("webm", "video/webm"),
    ("mkv", "video/x-matroska"),
    ("ogv", "video/ogg"),
    ("avi", "video/x-msvideo"),
];

/// Guess a MIME type from a file extension.
///
/// Image formats are resolved by the `image` crate; a short table covers
/// common video containers.
pub fn content_type_for_path(path: &Path) -> Option<String> {
    if let Ok(format) = image::ImageFormat::from_path(path) {
        return Some(format.to_mime_type().to_string());
    }
    let ext = path.extension()?.to_string_lossy().to_ascii_lowercase();
    VIDEO_EXTENSIONS
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| (*mime).to_string())
}
