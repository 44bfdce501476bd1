//! Media items placed on the canvas.

use mediacanvas_core::defaults::MEDIA_ID_PREFIX;
use mediacanvas_core::{Point, Size, TimeWindow};
use mediacanvas_media::{MediaKind, MediaResource};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Stable identifier of a media item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(String);

impl MediaId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MediaId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Hands out timestamp-derived ids (`media-<unix millis>`).
///
/// Ids are strictly increasing: two uploads within the same millisecond,
/// or a clock stepping backwards, still get distinct ids.
#[derive(Debug, Default)]
pub(crate) struct IdAllocator {
    last_millis: u64,
}

impl IdAllocator {
    pub(crate) fn next(&mut self) -> MediaId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.next_at(now)
    }

    fn next_at(&mut self, now_millis: u64) -> MediaId {
        let millis = now_millis.max(self.last_millis + 1);
        self.last_millis = millis;
        MediaId(format!("{MEDIA_ID_PREFIX}{millis}"))
    }
}

/// One uploaded image or video on the canvas.
#[derive(Debug, Clone, Serialize)]
pub struct MediaItem {
    pub id: MediaId,
    pub kind: MediaKind,
    /// The uploaded bytes. Not part of any serialized view.
    #[serde(skip)]
    pub source: MediaResource,
    /// Display handle URL used by the front end to render `source`.
    pub display_url: String,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    /// Seconds.
    pub start_time: f64,
    /// Seconds, inclusive.
    pub end_time: f64,
    pub maintain_aspect_ratio: bool,
}

impl MediaItem {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }

    /// Whether the item renders at `current_time`.
    #[inline]
    pub fn is_visible_at(&self, current_time: f64) -> bool {
        self.window().contains(current_time)
    }
}

/// `start_time <= current_time <= end_time`.
#[inline]
pub fn is_visible(item: &MediaItem, current_time: f64) -> bool {
    item.is_visible_at(current_time)
}

/// Partial update of a [`MediaItem`]. Unset fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MediaItemPatch {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
    pub maintain_aspect_ratio: Option<bool>,
}

impl MediaItemPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn time_range(mut self, start_time: f64, end_time: f64) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }

    pub fn maintain_aspect_ratio(mut self, on: bool) -> Self {
        self.maintain_aspect_ratio = Some(on);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the set fields into `item`.
    pub fn apply_to(&self, item: &mut MediaItem) {
        if let Some(width) = self.width {
            item.width = width;
        }
        if let Some(height) = self.height {
            item.height = height;
        }
        if let Some(x) = self.x {
            item.x = x;
        }
        if let Some(y) = self.y {
            item.y = y;
        }
        if let Some(start_time) = self.start_time {
            item.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            item.end_time = end_time;
        }
        if let Some(on) = self.maintain_aspect_ratio {
            item.maintain_aspect_ratio = on;
        }
    }
}
