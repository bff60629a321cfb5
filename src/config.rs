//! Plot configuration.

use crate::hover::DEFAULT_HOVER_THRESHOLD_PX;
use crate::sample::DEFAULT_STEP;
use crate::view::Viewport;

/// Configuration for a function plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// World bounds shown at startup and restored on reset.
    pub initial: Viewport,
    /// World-space distance between samples.
    pub step: f64,
    /// Pixel radius for hover hit testing.
    pub hover_threshold_px: f32,
    /// Marker glyph size in pixels.
    pub marker_size: i32,
    /// Offset of the hover label from the hovered sample.
    pub label_offset: (i32, i32),
    /// Font size of the hover label.
    pub label_size: f32,
    /// Dash length of the zoom rectangle outline.
    pub dash_length: f32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            initial: Viewport::default(),
            step: DEFAULT_STEP,
            hover_threshold_px: DEFAULT_HOVER_THRESHOLD_PX,
            marker_size: 11,
            label_offset: (10, -10),
            label_size: 12.0,
            dash_length: 5.0,
        }
    }
}
