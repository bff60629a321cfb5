//! Error types for plot configuration and view updates.

use thiserror::Error;

/// Errors raised when configuring a plot or changing its view window.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// View bounds are non-finite or have a non-positive span.
    #[error("invalid view bounds: x [{min_x}, {max_x}], y [{min_y}, {max_y}]")]
    InvalidBounds {
        /// Requested minimum X.
        min_x: f64,
        /// Requested maximum X.
        max_x: f64,
        /// Requested minimum Y.
        min_y: f64,
        /// Requested maximum Y.
        max_y: f64,
    },
    /// Sampling step is not a finite positive number.
    #[error("invalid sampling step: {0}")]
    InvalidStep(f64),
    /// Canvas has a zero dimension.
    #[error("invalid canvas size: {width}x{height}")]
    InvalidCanvas {
        /// Canvas width in pixels.
        width: u32,
        /// Canvas height in pixels.
        height: u32,
    },
}
