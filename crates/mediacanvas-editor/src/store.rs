//! The media store: ordered items, the current selection, and the display
//! handles that back them.
//!
//! One store exists per editing session and is passed explicitly to its
//! consumers. Operations take `&self`; the only concurrent writers are the
//! size-probe tasks spawned by [`MediaStore::add`], which hold a weak
//! reference and re-check that their item still exists before writing.

use crate::item::{IdAllocator, MediaId, MediaItem, MediaItemPatch};
use mediacanvas_core::{CanvasError, PlacementConfig, Result, Size};
use mediacanvas_media::{probe, DisplayHandle, HandleRegistry, MediaResource};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

struct Entry {
    item: MediaItem,
    handle: DisplayHandle,
}

#[derive(Default)]
struct StoreState {
    entries: Vec<Entry>,
    selected: Option<MediaId>,
    ids: IdAllocator,
}

impl StoreState {
    fn position(&self, id: &MediaId) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| &e.item.id == id)
            .ok_or_else(|| CanvasError::NotFound(id.to_string()))
    }

    fn find_mut(&mut self, id: &MediaId) -> Result<&mut MediaItem> {
        self.entries
            .iter_mut()
            .find(|e| &e.item.id == id)
            .map(|e| &mut e.item)
            .ok_or_else(|| CanvasError::NotFound(id.to_string()))
    }
}

struct Shared {
    placement: PlacementConfig,
    registry: HandleRegistry,
    state: Mutex<StoreState>,
    probes: Mutex<Vec<JoinHandle<()>>>,
}

impl Shared {
    /// Apply a finished size probe, unless the item has been removed since.
    fn apply_probe(&self, id: &MediaId, result: Result<Size>) {
        let natural = match result {
            Ok(size) => size,
            Err(err) => {
                warn!(id = %id, error = %err, "Size probe failed; keeping default size");
                return;
            }
        };

        let fitted = natural.fit_within(self.placement.max_probe_dimension);
        let mut state = self.state.lock();
        match state.find_mut(id) {
            Ok(item) => {
                item.width = fitted.width;
                item.height = fitted.height;
                debug!(
                    id = %id,
                    natural_width = natural.width,
                    natural_height = natural.height,
                    width = fitted.width,
                    height = fitted.height,
                    "Applied natural size"
                );
            }
            Err(err) => debug!(error = %err, "Media removed before size probe finished; discarding"),
        }
    }
}

/// Owner of all media items and the selection.
pub struct MediaStore {
    shared: Arc<Shared>,
}

impl MediaStore {
    pub fn new(placement: PlacementConfig) -> Self {
        Self::with_registry(placement, HandleRegistry::new())
    }

    /// Create a store issuing display handles from `registry`.
    pub fn with_registry(placement: PlacementConfig, registry: HandleRegistry) -> Self {
        Self {
            shared: Arc::new(Shared {
                placement,
                registry,
                state: Mutex::new(StoreState::default()),
                probes: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn registry(&self) -> &HandleRegistry {
        &self.shared.registry
    }

    /// Add an uploaded resource and select it.
    ///
    /// Images additionally get their natural size probed in the background;
    /// without an async runtime the probe runs before this returns.
    pub fn add(&self, resource: MediaResource) -> Result<MediaId> {
        let kind = resource.kind().map_err(|err| {
            warn!(
                name = resource.name(),
                content_type = resource.content_type(),
                "Rejected upload"
            );
            err
        })?;

        let handle = self.shared.registry.create(&resource);
        let placement = &self.shared.placement;

        let id = {
            let mut state = self.shared.state.lock();
            let id = state.ids.next();
            let item = MediaItem {
                id: id.clone(),
                kind,
                source: resource.clone(),
                display_url: handle.url().to_string(),
                width: placement.default_size.width,
                height: placement.default_size.height,
                x: placement.origin.x,
                y: placement.origin.y,
                start_time: placement.default_window.start,
                end_time: placement.default_window.end,
                maintain_aspect_ratio: true,
            };
            state.entries.push(Entry { item, handle });
            state.selected = Some(id.clone());
            id
        };

        info!(id = %id, kind = %kind, name = resource.name(), "Media added");

        if kind.needs_size_probe() {
            self.schedule_probe(id.clone(), resource);
        }
        Ok(id)
    }

    fn schedule_probe(&self, id: MediaId, resource: MediaResource) {
        let Ok(runtime) = Handle::try_current() else {
            let result = probe::probe_natural_size(resource.data());
            self.shared.apply_probe(&id, result);
            return;
        };

        let store: Weak<Shared> = Arc::downgrade(&self.shared);
        let task = runtime.spawn(async move {
            let result = probe::probe_resource(&resource).await;
            match store.upgrade() {
                Some(shared) => shared.apply_probe(&id, result),
                None => debug!(id = %id, "Store disposed before size probe finished"),
            }
        });

        let mut probes = self.shared.probes.lock();
        probes.retain(|p| !p.is_finished());
        probes.push(task);
    }

    /// Remove an item and release its display handle. Unknown ids are ignored.
    pub fn remove(&self, id: &MediaId) -> bool {
        let entry = {
            let mut state = self.shared.state.lock();
            let index = match state.position(id) {
                Ok(index) => index,
                Err(err) => {
                    debug!(error = %err, "Remove skipped");
                    return false;
                }
            };
            if state.selected.as_ref() == Some(id) {
                state.selected = None;
            }
            state.entries.remove(index)
        };

        self.shared.registry.release(entry.handle);
        info!(id = %id, "Media removed");
        true
    }

    /// Merge `patch` into an item. Unknown ids are ignored.
    pub fn update(&self, id: &MediaId, patch: MediaItemPatch) -> bool {
        self.update_with(id, |_| patch)
    }

    /// Derive a patch from the item's current state and apply it under a
    /// single lock.
    pub fn update_with<F>(&self, id: &MediaId, make_patch: F) -> bool
    where
        F: FnOnce(&MediaItem) -> MediaItemPatch,
    {
        let mut state = self.shared.state.lock();
        let item = match state.find_mut(id) {
            Ok(item) => item,
            Err(err) => {
                debug!(error = %err, "Update skipped");
                return false;
            }
        };
        let patch = make_patch(item);
        patch.apply_to(item);
        true
    }

    /// Set or clear the selection. Selecting an unknown id changes nothing.
    pub fn select(&self, id: Option<&MediaId>) -> bool {
        let mut state = self.shared.state.lock();
        match id {
            None => {
                state.selected = None;
                true
            }
            Some(id) => match state.position(id) {
                Ok(_) => {
                    state.selected = Some(id.clone());
                    true
                }
                Err(err) => {
                    debug!(error = %err, "Select skipped");
                    false
                }
            },
        }
    }

    pub fn selected_id(&self) -> Option<MediaId> {
        self.shared.state.lock().selected.clone()
    }

    pub fn selected(&self) -> Option<MediaItem> {
        let state = self.shared.state.lock();
        let id = state.selected.as_ref()?;
        state
            .entries
            .iter()
            .find(|e| &e.item.id == id)
            .map(|e| e.item.clone())
    }

    pub fn get(&self, id: &MediaId) -> Option<MediaItem> {
        let state = self.shared.state.lock();
        state
            .entries
            .iter()
            .find(|e| &e.item.id == id)
            .map(|e| e.item.clone())
    }

    pub fn contains(&self, id: &MediaId) -> bool {
        self.shared.state.lock().position(id).is_ok()
    }

    /// All items in insertion order.
    pub fn items(&self) -> Vec<MediaItem> {
        let state = self.shared.state.lock();
        state.entries.iter().map(|e| e.item.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.shared.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wait until every in-flight size probe has finished.
    pub async fn settle(&self) {
        loop {
            let pending = std::mem::take(&mut *self.shared.probes.lock());
            if pending.is_empty() {
                return;
            }
            for task in pending {
                if let Err(err) = task.await {
                    if !err.is_cancelled() {
                        warn!(error = %err, "Size probe task panicked");
                    }
                }
            }
        }
    }

    /// Tear the store down, releasing every display handle.
    pub fn dispose(self) {
        drop(self);
    }
}

impl Drop for MediaStore {
    fn drop(&mut self) {
        for task in self.shared.probes.lock().drain(..) {
            task.abort();
        }

        let entries = {
            let mut state = self.shared.state.lock();
            state.selected = None;
            std::mem::take(&mut state.entries)
        };
        let released = entries.len();
        for entry in entries {
            self.shared.registry.release(entry.handle);
        }
        debug!(released, "Media store disposed");
    }
}
