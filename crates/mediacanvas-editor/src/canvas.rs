//! Canvas presentation feed: pointer placement and the layers visible at the
//! current playhead.

use crate::item::{MediaId, MediaItem, MediaItemPatch};
use crate::store::MediaStore;
use mediacanvas_core::defaults::SELECTED_Z_INDEX;
use mediacanvas_core::{Point, Size};
use mediacanvas_media::MediaKind;
use serde::Serialize;

/// One visible item, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub id: MediaId,
    pub kind: MediaKind,
    pub display_url: String,
    pub position: Point,
    pub size: Size,
    pub selected: bool,
    pub z_index: u32,
}

/// Items visible at `current_time`, in insertion order.
pub fn visible_layers(
    items: &[MediaItem],
    selected: Option<&MediaId>,
    current_time: f64,
) -> Vec<Layer> {
    items
        .iter()
        .filter(|item| item.is_visible_at(current_time))
        .map(|item| {
            let selected = selected == Some(&item.id);
            Layer {
                id: item.id.clone(),
                kind: item.kind,
                display_url: item.display_url.clone(),
                position: item.position(),
                size: item.size(),
                selected,
                z_index: if selected { SELECTED_Z_INDEX } else { 1 },
            }
        })
        .collect()
}

/// The drawing surface. Pointer events arrive in client coordinates and are
/// translated against the canvas origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Canvas {
    origin: Point,
}

impl Canvas {
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    pub fn to_canvas(&self, pointer: Point) -> Point {
        pointer.relative_to(self.origin)
    }

    /// Clicking or starting to drag an item selects it.
    pub fn drag_start(&self, store: &MediaStore, id: &MediaId) -> bool {
        store.select(Some(id))
    }

    /// Write the canvas-relative drop position into the item.
    pub fn drop_item(&self, store: &MediaStore, id: &MediaId, pointer: Point) -> bool {
        let at = self.to_canvas(pointer);
        store.update(id, MediaItemPatch::new().position(at.x, at.y))
    }

    /// Drag end carries the same final pointer as the drop.
    pub fn drag_end(&self, store: &MediaStore, id: &MediaId, pointer: Point) -> bool {
        self.drop_item(store, id, pointer)
    }

    /// Clicking empty canvas clears the selection.
    pub fn background_click(&self, store: &MediaStore) {
        store.select(None);
    }

    pub fn layers(&self, store: &MediaStore, current_time: f64) -> Vec<Layer> {
        visible_layers(&store.items(), store.selected_id().as_ref(), current_time)
    }
}
