//! Read-only view of the session handed to presentation consumers.

use crate::clock::PlaybackClock;
use crate::item::{MediaId, MediaItem};
use crate::store::MediaStore;
use mediacanvas_core::{format_clock, CanvasError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EditorSnapshot {
    pub items: Vec<MediaItem>,
    pub selected: Option<MediaId>,
    pub current_time: f64,
    pub is_playing: bool,
    /// `MM:SS` transport label.
    pub clock_label: String,
}

impl EditorSnapshot {
    pub fn capture(store: &MediaStore, clock: &PlaybackClock) -> Self {
        let playback = clock.state();
        Self {
            items: store.items(),
            selected: store.selected_id(),
            current_time: playback.current_time,
            is_playing: playback.is_playing,
            clock_label: format_clock(playback.current_time),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CanvasError::Serialization(format!("Failed to serialize snapshot: {}", e)))
    }
}
