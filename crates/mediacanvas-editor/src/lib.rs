//! MediaCanvas Editor - the editing model behind the canvas
//!
//! Implements the state a canvas front end renders from:
//! - A media store owning items, selection and display handles
//! - A playback clock driving the shared timeline
//! - An editing facade with aspect-ratio coupling
//! - Input validation and the property panel binding
//! - Canvas placement, visible layers and snapshots

pub mod canvas;
pub mod clock;
pub mod editing;
pub mod input;
pub mod item;
pub mod panel;
pub mod session;
pub mod snapshot;
pub mod store;
pub mod upload;

pub use canvas::{visible_layers, Canvas, Layer};
pub use clock::{ClockStatus, PlaybackClock, PlaybackState};
pub use editing::{coupled_dimensions, MediaEditor};
pub use input::{NumberFormat, NumericInput};
pub use item::{is_visible, MediaId, MediaItem, MediaItemPatch};
pub use panel::{Property, PropertyPanel};
pub use session::EditorSession;
pub use snapshot::EditorSnapshot;
pub use store::MediaStore;
pub use upload::{upload, ACCEPT};
