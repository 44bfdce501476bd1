//! Editing facade for a single selected item.
//!
//! Holds only the item's id; every read and write goes through the store.

use crate::clock::{ClockStatus, PlaybackClock};
use crate::item::{MediaId, MediaItem, MediaItemPatch};
use crate::store::MediaStore;
use tracing::debug;

/// Resolve a requested size against the item's aspect lock.
///
/// With the lock on, whichever side differs from the stored value drives the
/// other (rounded to the nearest integer); width wins when both differ.
pub fn coupled_dimensions(item: &MediaItem, width: f64, height: f64) -> (f64, f64) {
    if !item.maintain_aspect_ratio {
        return (width, height);
    }
    let ratio = item.size().aspect_ratio();
    if width != item.width {
        (width, (width / ratio).round())
    } else if height != item.height {
        ((height * ratio).round(), height)
    } else {
        (width, height)
    }
}

pub struct MediaEditor<'a> {
    store: &'a MediaStore,
    clock: &'a PlaybackClock,
    media_id: Option<MediaId>,
}

impl<'a> MediaEditor<'a> {
    pub fn new(store: &'a MediaStore, clock: &'a PlaybackClock, media_id: Option<MediaId>) -> Self {
        Self {
            store,
            clock,
            media_id,
        }
    }

    /// Bind to whatever the store currently has selected.
    pub fn for_selection(store: &'a MediaStore, clock: &'a PlaybackClock) -> Self {
        Self::new(store, clock, store.selected_id())
    }

    pub fn media_id(&self) -> Option<&MediaId> {
        self.media_id.as_ref()
    }

    /// Current state of the bound item, if it still exists.
    pub fn selected_media(&self) -> Option<MediaItem> {
        self.media_id.as_ref().and_then(|id| self.store.get(id))
    }

    pub fn update_position(&self, x: f64, y: f64) {
        if let Some(id) = &self.media_id {
            self.store.update(id, MediaItemPatch::new().position(x, y));
        }
    }

    pub fn update_dimensions(&self, width: f64, height: f64) {
        let Some(id) = &self.media_id else {
            return;
        };
        self.store.update_with(id, |item| {
            let (width, height) = coupled_dimensions(item, width, height);
            debug!(id = %id, width, height, "Resizing media");
            MediaItemPatch::new().size(width, height)
        });
    }

    /// Set the visibility window as given. Ordering is the caller's concern.
    pub fn update_time_range(&self, start_time: f64, end_time: f64) {
        if let Some(id) = &self.media_id {
            self.store
                .update(id, MediaItemPatch::new().time_range(start_time, end_time));
        }
    }

    /// Flip the aspect lock. Existing dimensions are left as they are.
    pub fn toggle_aspect_ratio(&self) {
        if let Some(id) = &self.media_id {
            self.store.update_with(id, |item| {
                MediaItemPatch::new().maintain_aspect_ratio(!item.maintain_aspect_ratio)
            });
        }
    }

    pub fn delete_selected(&self) {
        if let Some(id) = &self.media_id {
            self.store.remove(id);
        }
    }

    pub fn is_visible(&self, item: &MediaItem) -> bool {
        item.is_visible_at(self.clock.current_time())
    }

    pub fn current_time(&self) -> f64 {
        self.clock.current_time()
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    pub fn toggle_play(&self) -> ClockStatus {
        self.clock.toggle_play()
    }

    pub fn reset_timer(&self) {
        self.clock.reset_timer();
    }
}
