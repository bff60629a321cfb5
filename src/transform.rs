//! Coordinate transforms between world and screen space.
//!
//! Every world/pixel conversion in the crate goes through [`CoordinateMapper`],
//! so sampling, zooming, and hover readouts all agree on the same rounding.

use crate::geom::{CanvasSize, Point, ScreenPoint, ScreenRect};
use crate::view::Viewport;

/// Bidirectional mapping between a viewport and a canvas.
///
/// The screen Y axis points down, so world `max_y` maps to pixel row `0` and
/// world `min_y` maps to pixel row `height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    viewport: Viewport,
    canvas: CanvasSize,
}

impl CoordinateMapper {
    /// Create a mapper for the given viewport and canvas.
    ///
    /// The viewport is expected to come from a
    /// [`ViewWindow`](crate::view::ViewWindow), which guarantees non-zero spans.
    pub fn new(viewport: Viewport, canvas: CanvasSize) -> Self {
        Self { viewport, canvas }
    }

    /// Access the viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Access the canvas size.
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Map a world point into screen space.
    ///
    /// Results outside the `i32` range saturate.
    pub fn to_screen(&self, point: Point) -> ScreenPoint {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        let x_norm = (point.x - self.viewport.x.min) / self.viewport.x.span();
        let y_norm = (point.y - self.viewport.y.min) / self.viewport.y.span();
        let sx = (x_norm * width).round();
        let sy = height - (y_norm * height).round();
        ScreenPoint::new(sx as i32, sy as i32)
    }

    /// Map a screen point into world space.
    pub fn to_world(&self, point: ScreenPoint) -> Point {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        let x = self.viewport.x.min + f64::from(point.x) / width * self.viewport.x.span();
        let y =
            self.viewport.y.min + (height - f64::from(point.y)) / height * self.viewport.y.span();
        Point::new(x, y)
    }

    /// Map a screen rectangle into the world viewport it covers.
    pub fn to_world_rect(&self, rect: ScreenRect) -> Viewport {
        let a = self.to_world(rect.min);
        let b = self.to_world(rect.max);
        Viewport::from_bounds(a.x, b.x, a.y, b.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(Viewport::default(), CanvasSize::new(800, 600).unwrap())
    }

    #[test]
    fn origin_maps_to_canvas_center() {
        assert_eq!(
            mapper().to_screen(Point::new(0.0, 0.0)),
            ScreenPoint::new(400, 300)
        );
    }

    #[test]
    fn corners_map_with_inverted_y() {
        let mapper = mapper();
        assert_eq!(
            mapper.to_screen(Point::new(-10.0, 10.0)),
            ScreenPoint::new(0, 0)
        );
        assert_eq!(
            mapper.to_screen(Point::new(10.0, -10.0)),
            ScreenPoint::new(800, 600)
        );
        let world = mapper.to_world(ScreenPoint::new(0, 600));
        assert_eq!(world, Point::new(-10.0, -10.0));
    }

    #[test]
    fn screen_roundtrip() {
        let mapper = CoordinateMapper::new(
            Viewport::from_bounds(-0.37, 2.9, 11.0, 11.5),
            CanvasSize::new(333, 97).unwrap(),
        );
        for x in (0..333).step_by(7) {
            for y in (0..97).step_by(3) {
                let point = ScreenPoint::new(x, y);
                assert_eq!(mapper.to_screen(mapper.to_world(point)), point);
            }
        }
    }

    #[test]
    fn world_rect_is_normalized() {
        let rect = ScreenRect::new(ScreenPoint::new(100, 100), ScreenPoint::new(300, 300));
        let viewport = mapper().to_world_rect(rect);
        assert!((viewport.x.min + 7.5).abs() < 1e-9);
        assert!((viewport.x.max + 2.5).abs() < 1e-9);
        assert!(viewport.y.min.abs() < 1e-9);
        assert!((viewport.y.max - 20.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn huge_values_saturate() {
        let point = mapper().to_screen(Point::new(1e300, -1e300));
        assert_eq!(point, ScreenPoint::new(i32::MAX, i32::MAX));
    }
}
