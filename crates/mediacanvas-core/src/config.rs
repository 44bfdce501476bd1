//! Editor configuration.
//!
//! Every knob has a default matching the stock editor, so an empty JSON
//! object (or no config file at all) yields a working setup.

use crate::error::{CanvasError, Result};
use crate::geometry::{Point, Size};
use crate::time::{PlayheadTime, TimeWindow};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Inclusive `[min, max]` bounds for a numeric input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
}

impl InputRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Placement assigned to freshly uploaded media.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Top-left corner of a new item.
    pub origin: Point,
    /// Size before the natural size is known.
    pub default_size: Size,
    /// Visibility window of a new item.
    pub default_window: TimeWindow,
    /// Natural sizes are scaled so the longest side fits this bound.
    pub max_probe_dimension: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            origin: Point::new(100.0, 100.0),
            default_size: Size::new(320.0, 240.0),
            default_window: TimeWindow::new(0.0, 60.0),
            max_probe_dimension: 400.0,
        }
    }
}

/// Playback clock tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Seconds added to the playhead per tick.
    pub tick_step_secs: f64,
    /// Wall-clock time between ticks, in milliseconds.
    pub tick_interval_ms: u64,
}

impl PlaybackConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_step_secs: 0.1,
            tick_interval_ms: 100,
        }
    }
}

/// Bounds for the property panel inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub dimension: InputRange,
    pub time: InputRange,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dimension: InputRange::new(10.0, 2000.0),
            time: InputRange::new(0.0, 300.0),
        }
    }
}

/// Top-level editor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub placement: PlacementConfig,
    pub playback: PlaybackConfig,
    pub inputs: InputConfig,
}

impl EditorConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let config: Self = serde_json::from_slice(data)
            .map_err(|e| CanvasError::Config(format!("Invalid JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading editor config");
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }

    /// Reject values the editor cannot operate with.
    pub fn validate(&self) -> Result<()> {
        let placement = &self.placement;
        if !placement.default_size.is_valid() {
            return Err(CanvasError::Config(
                "placement.default_size must be positive".into(),
            ));
        }
        if !placement.default_window.is_well_formed() {
            return Err(CanvasError::Config(
                "placement.default_window must satisfy 0 <= start <= end".into(),
            ));
        }
        if !is_positive(placement.max_probe_dimension) {
            return Err(CanvasError::Config(
                "placement.max_probe_dimension must be positive".into(),
            ));
        }
        if PlayheadTime::from_seconds_f64(self.playback.tick_step_secs).is_zero() {
            return Err(CanvasError::Config(
                "playback.tick_step_secs must be at least one microsecond".into(),
            ));
        }
        if self.playback.tick_interval_ms == 0 {
            return Err(CanvasError::Config(
                "playback.tick_interval_ms must be positive".into(),
            ));
        }
        for (name, range) in [("dimension", self.inputs.dimension), ("time", self.inputs.time)] {
            if range.min.is_nan() || range.max.is_nan() || range.min > range.max {
                return Err(CanvasError::Config(format!(
                    "inputs.{name}: min {} exceeds max {}",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
