//! View window and world-space ranges.

use tracing::warn;

use crate::error::PlotError;

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether the range has finite bounds and a positive, finite span.
    pub fn is_valid(&self) -> bool {
        let span = self.span();
        self.is_finite() && span.is_finite() && span > 0.0
    }

    /// Check whether another range lies entirely inside this one.
    pub fn contains_range(&self, other: Range) -> bool {
        other.min >= self.min && other.max <= self.max
    }
}

/// Visible world ranges on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// X axis range.
    pub x: Range,
    /// Y axis range.
    pub y: Range,
}

impl Viewport {
    /// Create a viewport from X and Y ranges.
    pub fn new(x: Range, y: Range) -> Self {
        Self { x, y }
    }

    /// Create a viewport from raw bounds, normalizing each axis.
    pub fn from_bounds(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self::new(Range::new(min_x, max_x), Range::new(min_y, max_y))
    }

    /// Check whether both axes are valid.
    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid()
    }

    /// Check whether another viewport lies entirely inside this one.
    pub fn contains(&self, other: Viewport) -> bool {
        self.x.contains_range(other.x) && self.y.contains_range(other.y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_bounds(-10.0, 10.0, -10.0, 10.0)
    }
}

/// The visible region of world space, plus the snapshot it resets to.
///
/// Bounds always satisfy `min < max` on both axes. The only mutation paths are
/// [`ViewWindow::set`] and [`ViewWindow::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewWindow {
    current: Viewport,
    initial: Viewport,
}

impl ViewWindow {
    /// Create a view window. The given bounds become the reset snapshot.
    pub fn new(initial: Viewport) -> Result<Self, PlotError> {
        check_bounds(initial.x.min, initial.x.max, initial.y.min, initial.y.max)?;
        Ok(Self {
            current: initial,
            initial,
        })
    }

    /// Current bounds.
    pub fn viewport(&self) -> Viewport {
        self.current
    }

    /// Bounds captured at construction.
    pub fn initial(&self) -> Viewport {
        self.initial
    }

    /// Check whether the window is at its initial bounds.
    pub fn is_initial(&self) -> bool {
        self.current == self.initial
    }

    /// Replace the bounds.
    ///
    /// Fails with [`PlotError::InvalidBounds`] unless `min_x < max_x` and
    /// `min_y < max_y` with finite values and finite spans; the window is
    /// unchanged on failure.
    pub fn set(&mut self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<(), PlotError> {
        if let Err(err) = check_bounds(min_x, max_x, min_y, max_y) {
            warn!(%err, "rejected view window update");
            return Err(err);
        }
        self.current = Viewport::new(
            Range {
                min: min_x,
                max: max_x,
            },
            Range {
                min: min_y,
                max: max_y,
            },
        );
        Ok(())
    }

    /// Restore the bounds captured at construction.
    pub fn reset(&mut self) {
        self.current = self.initial;
    }
}

fn check_bounds(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<(), PlotError> {
    let x = Range {
        min: min_x,
        max: max_x,
    };
    let y = Range {
        min: min_y,
        max: max_y,
    };
    if x.is_valid() && y.is_valid() {
        Ok(())
    } else {
        Err(PlotError::InvalidBounds {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }
}
