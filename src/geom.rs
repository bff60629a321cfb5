//! Geometric primitives used by the plotting pipeline.
//!
//! [`Point`] lives in world space. [`ScreenPoint`] and [`ScreenRect`] are whole
//! pixels on the canvas, with the origin at the top-left corner.
//! [`PointerPosition`] keeps the sub-pixel location reported by the input layer.

use crate::error::PlotError;

/// A point in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X value in world coordinates.
    pub x: f64,
    /// Y value in world coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new world point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in screen space (whole pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    /// X value in pixels, growing to the right.
    pub x: i32,
    /// Y value in pixels, growing downwards.
    pub y: i32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset the point by a pixel delta.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// Pointer location as delivered by the input layer, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    /// X value in pixels.
    pub x: f32,
    /// Y value in pixels.
    pub y: f32,
}

impl PointerPosition {
    /// Create a new pointer position.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Snap to the nearest whole pixel.
    pub fn to_screen_point(self) -> ScreenPoint {
        ScreenPoint::new(self.x.round() as i32, self.y.round() as i32)
    }

    /// Squared distance to a screen point.
    pub fn distance_sq(self, point: ScreenPoint) -> f32 {
        let dx = self.x - point.x as f32;
        let dy = self.y - point.y as f32;
        dx * dx + dy * dy
    }
}

impl From<ScreenPoint> for PointerPosition {
    fn from(point: ScreenPoint) -> Self {
        Self::new(point.x as f32, point.y as f32)
    }
}

/// A rectangle in screen space.
///
/// `min` is the top-left corner and `max` the bottom-right corner once the
/// rectangle is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Bounding box of two arbitrary corners.
    pub fn from_corners(a: ScreenPoint, b: ScreenPoint) -> Self {
        Self {
            min: ScreenPoint::new(a.x.min(b.x), a.y.min(b.y)),
            max: ScreenPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0 && self.height() > 0
    }
}

/// Pixel dimensions of the drawing canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

impl CanvasSize {
    /// Create a canvas size. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self, PlotError> {
        if width == 0 || height == 0 {
            return Err(PlotError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Full canvas rectangle.
    pub fn rect(&self) -> ScreenRect {
        ScreenRect::new(
            ScreenPoint::new(0, 0),
            ScreenPoint::new(self.width as i32, self.height as i32),
        )
    }

    /// Pixel at the center of the canvas.
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_from_corners_normalizes() {
        let rect = ScreenRect::from_corners(ScreenPoint::new(30, 5), ScreenPoint::new(10, 25));
        assert_eq!(rect.min, ScreenPoint::new(10, 5));
        assert_eq!(rect.max, ScreenPoint::new(30, 25));
        assert!(rect.is_valid());
    }

    #[test]
    fn zero_canvas_is_rejected() {
        assert_eq!(
            CanvasSize::new(0, 600),
            Err(PlotError::InvalidCanvas {
                width: 0,
                height: 600
            })
        );
    }

    #[test]
    fn pointer_snaps_to_nearest_pixel() {
        let pos = PointerPosition::new(10.6, 3.4);
        assert_eq!(pos.to_screen_point(), ScreenPoint::new(11, 3));
    }
}
