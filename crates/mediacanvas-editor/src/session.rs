//! One editing session: configuration, media store and playback clock.

use crate::canvas::{visible_layers, Layer};
use crate::clock::PlaybackClock;
use crate::editing::MediaEditor;
use crate::item::MediaId;
use crate::panel::PropertyPanel;
use crate::snapshot::EditorSnapshot;
use crate::store::MediaStore;
use crate::upload;
use mediacanvas_core::{EditorConfig, Result};
use mediacanvas_media::{HandleRegistry, MediaResource};
use tracing::info;

/// Everything a front end needs for one session. Construct one per session
/// and pass it by reference; dropping it releases all display handles.
pub struct EditorSession {
    config: EditorConfig,
    panel: PropertyPanel,
    store: MediaStore,
    clock: PlaybackClock,
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_registry(config, HandleRegistry::new())
    }

    pub fn with_registry(config: EditorConfig, registry: HandleRegistry) -> Self {
        info!(
            tick_interval_ms = config.playback.tick_interval_ms,
            max_probe_dimension = config.placement.max_probe_dimension,
            "Editor session started"
        );
        Self {
            panel: PropertyPanel::new(&config.inputs),
            store: MediaStore::with_registry(config.placement, registry),
            clock: PlaybackClock::new(&config.playback),
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn store(&self) -> &MediaStore {
        &self.store
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn panel(&self) -> &PropertyPanel {
        &self.panel
    }

    /// Upload the first of `files`.
    pub fn upload<I>(&self, files: I) -> Result<Option<MediaId>>
    where
        I: IntoIterator<Item = MediaResource>,
    {
        upload::upload(&self.store, files)
    }

    /// Facade for the current selection.
    pub fn editor(&self) -> MediaEditor<'_> {
        MediaEditor::for_selection(&self.store, &self.clock)
    }

    /// Layers visible at the current playhead.
    pub fn layers(&self) -> Vec<Layer> {
        visible_layers(
            &self.store.items(),
            self.store.selected_id().as_ref(),
            self.clock.current_time(),
        )
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot::capture(&self.store, &self.clock)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
