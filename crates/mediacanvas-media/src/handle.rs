//! Display handles: temporary URLs that let a front end render an uploaded
//! resource. Each handle must be released exactly once.

use crate::resource::MediaResource;
use mediacanvas_core::defaults::DISPLAY_URL_PREFIX;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// An owned display URL. Not `Clone`: releasing consumes it.
#[derive(Debug)]
pub struct DisplayHandle {
    url: String,
    released: bool,
}

impl DisplayHandle {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for DisplayHandle {
    fn drop(&mut self) {
        if !self.released {
            warn!(url = %self.url, "Display handle dropped without release");
        }
    }
}

/// Issues display handles and tracks which ones are still live.
///
/// Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct HandleRegistry {
    live: Arc<Mutex<HashSet<String>>>,
}

impl HandleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh handle for `resource`.
    pub fn create(&self, resource: &MediaResource) -> DisplayHandle {
        let url = format!("{}{}", DISPLAY_URL_PREFIX, Uuid::new_v4());
        self.live.lock().insert(url.clone());
        debug!(url = %url, name = resource.name(), "Display handle created");
        DisplayHandle {
            url,
            released: false,
        }
    }

    /// Release a handle. Returns `false` if the URL was not live here,
    /// which indicates a double release or a handle from another registry.
    pub fn release(&self, mut handle: DisplayHandle) -> bool {
        handle.released = true;
        let removed = self.live.lock().remove(&handle.url);
        if removed {
            debug!(url = %handle.url, "Display handle released");
        } else {
            warn!(url = %handle.url, "Display handle was not live");
        }
        removed
    }

    pub fn is_live(&self, url: &str) -> bool {
        self.live.lock().contains(url)
    }

    /// Number of handles created and not yet released.
    pub fn live_count(&self) -> usize {
        self.live.lock().len()
    }
}
