//! MediaCanvas Media - uploaded resources and their browser-side handles
//!
//! This crate handles:
//! - Classifying uploads as image or video
//! - Holding the uploaded bytes
//! - Issuing and releasing display handles
//! - Probing the natural size of images

pub mod handle;
pub mod kind;
pub mod probe;
pub mod resource;

pub use handle::{DisplayHandle, HandleRegistry};
pub use kind::MediaKind;
pub use probe::{probe_natural_size, probe_resource};
pub use resource::{content_type_for_path, MediaResource};
