//! Screen-space draw rectangles.

use crate::Point2d;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen (pixel) coordinates, used as the
/// destination area of a quad draw call.
///
/// Screen rectangles are derived per draw call and never persisted. Min is
/// guaranteed to be less or equal to max on both axes when the rectangle is
/// constructed with [`ScreenRect::from_corners`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreenRect {
    /// Left edge, in pixels.
    pub min_x: f32,
    /// Bottom edge, in pixels.
    pub min_y: f32,
    /// Right edge, in pixels.
    pub max_x: f32,
    /// Top edge, in pixels.
    pub max_y: f32,
}

impl ScreenRect {
    /// Creates a rectangle with the given edges.
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates a rectangle from two opposite corners in any order.
    ///
    /// Takes per-axis min/max of the corners, so the result is normalized
    /// even if the transform that produced the corners flipped one or both
    /// axes.
    pub fn from_corners(first: Point2d, second: Point2d) -> Self {
        Self {
            min_x: first.x.min(second.x) as f32,
            min_y: first.y.min(second.y) as f32,
            max_x: first.x.max(second.x) as f32,
            max_y: first.y.max(second.y) as f32,
        }
    }

    /// Rounds every edge to the nearest whole pixel, half away from zero.
    ///
    /// Each edge is rounded independently, not as a (min, max) pair. The
    /// rounded rectangle can come out one pixel narrower or wider than the
    /// unrounded one; pixel-perfect placement of adjacent rasters depends on
    /// this exact behavior, so do not replace it with consistent pair
    /// rounding.
    pub fn round_to_pixel(&self) -> Self {
        Self {
            min_x: self.min_x.round(),
            min_y: self.min_y.round(),
            max_x: self.max_x.round(),
            max_y: self.max_y.round(),
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}
