//! Viewport of a map widget.

use crate::bounding_box::BoundingBox;
use crate::screen_rect::ScreenRect;
use crate::size::Size;
use crate::Point2d;

/// Current world-to-screen transform of a map.
///
/// The viewport is owned by the map or view layer of the application and
/// handed to the renderer for every frame. World coordinates have the y axis
/// pointing up, screen coordinates have it pointing down with the origin at
/// the top-left corner of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    position: Point2d,
    resolution: f64,
    size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            position: Point2d::new(0.0, 0.0),
            resolution: 1.0,
            size: Size::new(0.0, 0.0),
        }
    }
}

impl Viewport {
    /// Creates a new viewport centered on the given world position.
    ///
    /// `resolution` is the number of world units per screen pixel.
    pub fn new(position: Point2d, resolution: f64) -> Self {
        Self {
            position,
            resolution,
            ..Default::default()
        }
    }

    /// World position at the center of the viewport.
    pub fn position(&self) -> Point2d {
        self.position
    }

    /// Returns a copy of the viewport with the given center position.
    pub fn with_position(&self, position: Point2d) -> Self {
        Self { position, ..*self }
    }

    /// Number of world units per screen pixel.
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Returns a copy of the viewport with the given resolution.
    pub fn with_resolution(&self, resolution: f64) -> Self {
        Self {
            resolution,
            ..*self
        }
    }

    /// Size of the viewport in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns a copy of the viewport with the given pixel size.
    pub fn with_size(&self, size: Size) -> Self {
        Self { size, ..*self }
    }

    /// Projects a world point into screen pixel coordinates.
    pub fn world_to_screen(&self, point: Point2d) -> Point2d {
        Point2d::new(
            (point.x - self.position.x) / self.resolution + self.size.half_width(),
            self.size.half_height() - (point.y - self.position.y) / self.resolution,
        )
    }

    /// Projects a screen pixel position into world coordinates.
    pub fn screen_to_world(&self, point: Point2d) -> Point2d {
        Point2d::new(
            (point.x - self.size.half_width()) * self.resolution + self.position.x,
            (self.size.half_height() - point.y) * self.resolution + self.position.y,
        )
    }

    /// Projects a world bounding box into a screen rectangle rounded to whole
    /// pixels.
    ///
    /// The two opposite corners of the box are projected separately and then
    /// normalized per axis, so the result is well-formed even though the
    /// screen y axis points the opposite way from the world one. Rounding
    /// follows [`ScreenRect::round_to_pixel`].
    pub fn project_bbox(&self, bbox: BoundingBox) -> ScreenRect {
        let first = self.world_to_screen(bbox.p_min());
        let second = self.world_to_screen(bbox.p_max());
        ScreenRect::from_corners(first, second).round_to_pixel()
    }

    /// World area currently visible through the viewport.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            self.position.x - self.size.half_width() * self.resolution,
            self.position.y - self.size.half_height() * self.resolution,
            self.position.x + self.size.half_width() * self.resolution,
            self.position.y + self.size.half_height() * self.resolution,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn world_to_screen_size() {
        let view = Viewport::default().with_size(Size::new(100.0, 100.0));

        assert_abs_diff_eq!(
            view.world_to_screen(Point2d::new(0.0, 0.0)),
            Point2d::new(50.0, 50.0),
            epsilon = 0.0001,
        );
        assert_abs_diff_eq!(
            view.world_to_screen(Point2d::new(-50.0, 50.0)),
            Point2d::new(0.0, 0.0),
            epsilon = 0.0001,
        );
        assert_abs_diff_eq!(
            view.world_to_screen(Point2d::new(50.0, -50.0)),
            Point2d::new(100.0, 100.0),
            epsilon = 0.0001,
        );
    }

    #[test]
    fn world_to_screen_position_and_resolution() {
        let view = Viewport::new(Point2d::new(-100.0, -100.0), 2.0)
            .with_size(Size::new(100.0, 100.0));

        assert_abs_diff_eq!(
            view.world_to_screen(Point2d::new(-100.0, -100.0)),
            Point2d::new(50.0, 50.0),
            epsilon = 0.0001,
        );
        assert_abs_diff_eq!(
            view.world_to_screen(Point2d::new(-200.0, 0.0)),
            Point2d::new(0.0, 0.0),
            epsilon = 0.0001,
        );
    }

    #[test]
    fn screen_to_world_roundtrip() {
        let view =
            Viewport::new(Point2d::new(13.0, -7.0), 2.5).with_size(Size::new(200.0, 50.0));

        let point = Point2d::new(17.0, 133.0);
        assert_abs_diff_eq!(
            view.screen_to_world(view.world_to_screen(point)),
            point,
            epsilon = 0.0001,
        );
    }

    #[test]
    fn project_bbox_normalizes_flipped_axis() {
        let view = Viewport::default().with_size(Size::new(100.0, 100.0));
        let rect = view.project_bbox(BoundingBox::new(-10.0, -10.0, 10.0, 10.0));

        assert!(rect.min_x <= rect.max_x);
        assert!(rect.min_y <= rect.max_y);
        assert_eq!(rect, ScreenRect::new(40.0, 40.0, 60.0, 60.0));
    }

    #[test]
    fn project_bbox_rounds_each_edge_independently() {
        let view = Viewport::default().with_size(Size::new(100.0, 100.0));
        // Projects to corners (10.4, 20.6) and (30.5, 5.5) on screen.
        let bbox = BoundingBox::new(-39.6, 29.4, -19.5, 44.5);

        let rect = view.project_bbox(bbox);
        assert_eq!(rect, ScreenRect::new(10.0, 6.0, 31.0, 21.0));
    }

    #[test]
    fn bounds_cover_visible_area() {
        let view = Viewport::new(Point2d::new(10.0, 20.0), 2.0).with_size(Size::new(100.0, 50.0));
        let bounds = view.bounds();

        assert_abs_diff_eq!(bounds.x_min(), -90.0, epsilon = 0.0001);
        assert_abs_diff_eq!(bounds.y_min(), -30.0, epsilon = 0.0001);
        assert_abs_diff_eq!(bounds.x_max(), 110.0, epsilon = 0.0001);
        assert_abs_diff_eq!(bounds.y_max(), 70.0, epsilon = 0.0001);
    }
}
