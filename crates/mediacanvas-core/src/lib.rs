//! MediaCanvas Core - Foundation types for the canvas editor
//!
//! This crate provides the fundamental types used throughout MediaCanvas:
//! - Error taxonomy shared by every crate
//! - Canvas geometry (points, sizes, fit-within scaling)
//! - Playhead time and visibility windows
//! - Editor configuration

pub mod config;
pub mod error;
pub mod geometry;
pub mod time;

pub use config::{EditorConfig, InputConfig, InputRange, PlacementConfig, PlaybackConfig};
pub use error::{CanvasError, Result};
pub use geometry::{Point, Size};
pub use time::{format_clock, PlayheadTime, TimeWindow};

/// Stock editor constants.
pub mod defaults {
    /// Name of the environment variable pointing at a JSON config file.
    pub const CONFIG_ENV: &str = "MEDIACANVAS_CONFIG";

    /// Scheme and authority of display handle URLs.
    pub const DISPLAY_URL_PREFIX: &str = "blob:mediacanvas/";

    /// Z-index of the selected layer; every other layer uses 1.
    pub const SELECTED_Z_INDEX: u32 = 10;

    /// Prefix of generated media ids.
    pub const MEDIA_ID_PREFIX: &str = "media-";
}
