//! Integration test crate for MediaCanvas.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on every mediacanvas library crate to verify they work together.

#[cfg(test)]
mod editor;

#[cfg(test)]
mod playback;

#[cfg(test)]
mod upload;
