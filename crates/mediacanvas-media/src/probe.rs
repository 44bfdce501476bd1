//! Natural-size probing for uploaded images.
//!
//! Only the image header is read; pixels are never decoded.

use crate::resource::MediaResource;
use mediacanvas_core::{CanvasError, Result, Size};
use std::io::Cursor;
use tracing::debug;

/// Read the natural width and height from encoded image bytes.
pub fn probe_natural_size(data: &[u8]) -> Result<Size> {
    let reader = image::ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| CanvasError::Probe(format!("Failed to sniff image format: {}", e)))?;

    let Some(format) = reader.format() else {
        return Err(CanvasError::Probe("Unrecognized image format".into()));
    };

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| CanvasError::Probe(format!("Failed to read {:?} header: {}", format, e)))?;

    if width == 0 || height == 0 {
        return Err(CanvasError::Probe(format!(
            "Image reports empty size {}x{}",
            width, height
        )));
    }

    debug!(?format, width, height, "Probed natural size");
    Ok(Size::from((width, height)))
}

/// Probe a resource on the blocking pool so header parsing never stalls
/// the event loop.
pub async fn probe_resource(resource: &MediaResource) -> Result<Size> {
    let data = resource.shared_data();
    tokio::task::spawn_blocking(move || probe_natural_size(&data))
        .await
        .map_err(|e| CanvasError::Probe(format!("Probe task failed: {}", e)))?
}
