//! Geometric primitives for canvas placement.

use serde::{Deserialize, Serialize};

/// A canvas-relative position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Express this point relative to `origin`.
    #[inline]
    pub fn relative_to(self, origin: Point) -> Self {
        Self::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Width and height of an item on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    #[inline]
    pub fn aspect_ratio(self) -> f64 {
        self.width / self.height
    }

    /// Both sides strictly positive and finite.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Longest side.
    #[inline]
    pub fn longest_side(self) -> f64 {
        self.width.max(self.height)
    }

    /// Scale down so that neither side exceeds `max_dimension`, keeping the
    /// aspect ratio. Sizes already within the limit are returned unchanged.
    ///
    /// A landscape size has its width capped; square and portrait sizes have
    /// their height capped.
    pub fn fit_within(self, max_dimension: f64) -> Self {
        if self.width <= max_dimension && self.height <= max_dimension {
            return self;
        }

        let ratio = self.aspect_ratio();
        if self.width > self.height {
            Self::new(max_dimension, max_dimension / ratio)
        } else {
            Self::new(max_dimension * ratio, max_dimension)
        }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(f64::from(width), f64::from(height))
    }
}
