//! GPUI integration for gpui_funcplot.
//!
//! This module provides a GPUI view that paints a [`Plot`](crate::plot::Plot)'s
//! render plan and forwards mouse input to its interaction state machine:
//! left-drag zooms to a rectangle, right-click resets the view, and hovering a
//! sample shows its coordinates.

mod paint;
mod view;

pub use view::{GpuiPlotView, PlotHandle};
