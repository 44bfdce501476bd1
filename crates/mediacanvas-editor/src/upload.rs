//! Upload entry point for the file picker and the drop zone.

use crate::item::MediaId;
use crate::store::MediaStore;
use mediacanvas_core::Result;
use mediacanvas_media::MediaResource;

/// `accept` attribute for the file picker.
pub const ACCEPT: &str = "image/*,video/*";

/// Add the first of the picked or dropped files.
///
/// An empty selection is not an error and yields `Ok(None)`. Anything that
/// is not an image or video fails with `UnsupportedMediaKind`, whose message
/// is meant to be shown to the user.
pub fn upload<I>(store: &MediaStore, files: I) -> Result<Option<MediaId>>
where
    I: IntoIterator<Item = MediaResource>,
{
    let Some(file) = files.into_iter().next() else {
        return Ok(None);
    };
    store.add(file).map(Some)
}
