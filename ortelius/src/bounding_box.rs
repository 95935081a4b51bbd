//! World-space axis-aligned bounding boxes.

use crate::Point2d;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world (map) coordinates.
///
/// A raster feature uses a bounding box as its placement: the feature image is
/// stretched over this area of the map.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl BoundingBox {
    /// Creates a new bounding box with the given edge coordinates.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Left edge of the box.
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Right edge of the box.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Bottom edge of the box.
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Top edge of the box.
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Corner of the box with minimal coordinate values.
    pub fn p_min(&self) -> Point2d {
        Point2d::new(self.x_min, self.y_min)
    }

    /// Corner of the box with maximal coordinate values.
    pub fn p_max(&self) -> Point2d {
        Point2d::new(self.x_max, self.y_max)
    }

    /// Intersection of two boxes.
    pub fn intersect(&self, other: BoundingBox) -> Self {
        Self::new(
            self.x_min.max(other.x_min),
            self.y_min.max(other.y_min),
            self.x_max.min(other.x_max),
            self.y_max.min(other.y_max),
        )
    }

    /// Returns true if the given point lies inside the box or on its edge.
    pub fn contains(&self, point: Point2d) -> bool {
        self.x_min <= point.x
            && self.x_max >= point.x
            && self.y_min <= point.y
            && self.y_max >= point.y
    }
}
