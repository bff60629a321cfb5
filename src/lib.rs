//! gpui_funcplot is an interactive function plotter built for GPUI.
//! Drag a rectangle to zoom in, right-click to reset, hover a sample to read
//! its coordinates. The core is backend-agnostic; [`gpui_backend`] paints it.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod geom;
pub mod gpui_backend;
pub mod hover;
pub mod interaction;
pub mod plot;
pub mod render;
pub mod sample;
pub mod style;
pub mod transform;
pub mod view;

pub use config::PlotConfig;
pub use error::PlotError;
pub use geom::{CanvasSize, Point, PointerPosition, ScreenPoint, ScreenRect};
pub use gpui_backend::{GpuiPlotView, PlotHandle};
pub use hover::HoverState;
pub use interaction::{
    DragState, InteractionController, InteractionOutcome, PointerButton, PointerEvent,
};
pub use plot::{Plot, PlotBuilder};
pub use render::{
    LineSegment, LineStyle, RectStyle, RenderCommand, RenderPlan, TextStyle, build_render_plan,
};
pub use sample::{MAX_SAMPLES, PlotFunction, Sample, SampleSet};
pub use style::{Color, DisplayOptions, Theme};
pub use transform::CoordinateMapper;
pub use view::{Range, ViewWindow, Viewport};
