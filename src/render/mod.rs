//! Render plans and clipping helpers.
//!
//! A [`RenderPlan`] is a backend-agnostic list of draw commands rebuilt every
//! frame from the interaction state. Backends (such as the GPUI backend) only
//! rasterize it.

use crate::config::PlotConfig;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::interaction::InteractionController;
use crate::sample::Sample;
use crate::style::{Color, DisplayOptions, Theme};

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Rectangle outline styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width.
    pub stroke_width: f32,
    /// Dash length; `None` draws a solid outline.
    pub dash: Option<f32>,
}

impl Default for RectStyle {
    fn default() -> Self {
        Self {
            stroke: Color::BLACK,
            stroke_width: 1.0,
            dash: None,
        }
    }
}

/// Text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
        }
    }
}

/// A line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSegment {
    /// Segment start.
    pub start: ScreenPoint,
    /// Segment end.
    pub end: ScreenPoint,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }
}

/// A single draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Start clipping to a rectangle.
    ClipRect(ScreenRect),
    /// End clipping.
    ClipEnd,
    /// Draw line segments.
    LineSegments {
        /// Segments to draw.
        segments: Vec<LineSegment>,
        /// Styling for the segments.
        style: LineStyle,
    },
    /// Draw a rectangle outline.
    Rect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Rectangle styling.
        style: RectStyle,
    },
    /// Draw text.
    Text {
        /// Text position.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Ordered draw commands for one frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderPlan {
    commands: Vec<RenderCommand>,
}

impl RenderPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }
}

/// Assemble the frame for the controller's current state.
///
/// Draw order: axes, curve, markers, zoom rectangle, hover label, all clipped
/// to the canvas.
pub fn build_render_plan(
    controller: &InteractionController,
    options: DisplayOptions,
    theme: &Theme,
    config: &PlotConfig,
) -> RenderPlan {
    let mut plan = RenderPlan::new();
    let clip = controller.canvas().rect();
    let samples = controller.samples().samples();

    plan.push(RenderCommand::ClipRect(clip));
    if options.show_axes {
        build_axes(&mut plan, clip, theme);
    }
    build_curve(&mut plan, samples, clip, theme);
    if options.show_markers {
        build_markers(&mut plan, samples, config.marker_size, theme);
    }
    if let Some(rect) = controller.drag().rect() {
        plan.push(RenderCommand::Rect {
            rect,
            style: RectStyle {
                stroke: theme.selection,
                stroke_width: 1.0,
                dash: Some(config.dash_length),
            },
        });
    }
    if let Some(sample) = controller.hover().sample() {
        let (dx, dy) = config.label_offset;
        plan.push(RenderCommand::Text {
            position: sample.screen.offset(dx, dy),
            text: hover_label(sample),
            style: TextStyle {
                color: theme.label,
                size: config.label_size,
            },
        });
    }
    plan.push(RenderCommand::ClipEnd);
    plan
}

/// Readout for a hovered sample, e.g. `(1.50, -0.25)`.
pub fn hover_label(sample: &Sample) -> String {
    format!("({:.2}, {:.2})", sample.world.x, sample.world.y)
}

/// Whether a marker at world `y` uses the accent color.
pub fn is_accent_marker(y: f64) -> bool {
    y.floor().rem_euclid(2.0) == 0.0
}

/// Star glyph centered on `center`: horizontal, vertical and both diagonals.
pub fn star_segments(center: ScreenPoint, size: i32) -> [LineSegment; 4] {
    let half = size / 2;
    [
        LineSegment::new(center.offset(-half, 0), center.offset(half, 0)),
        LineSegment::new(center.offset(0, -half), center.offset(0, half)),
        LineSegment::new(center.offset(-half, -half), center.offset(half, half)),
        LineSegment::new(center.offset(-half, half), center.offset(half, -half)),
    ]
}

/// Split a rectangle outline into dashes of `dash` pixels separated by gaps
/// of the same length.
pub fn dashed_outline(rect: ScreenRect, dash: f32) -> Vec<LineSegment> {
    let corners = [
        rect.min,
        ScreenPoint::new(rect.max.x, rect.min.y),
        rect.max,
        ScreenPoint::new(rect.min.x, rect.max.y),
    ];
    let dash = dash.max(1.0).round() as i32;
    let mut out = Vec::new();
    for (index, &start) in corners.iter().enumerate() {
        let end = corners[(index + 1) % corners.len()];
        let length = (end.x - start.x).abs().max((end.y - start.y).abs());
        let step_x = (end.x - start.x).signum();
        let step_y = (end.y - start.y).signum();
        let mut offset = 0;
        while offset < length {
            let stop = (offset + dash).min(length);
            out.push(LineSegment::new(
                start.offset(step_x * offset, step_y * offset),
                start.offset(step_x * stop, step_y * stop),
            ));
            offset += dash * 2;
        }
    }
    out
}

fn build_axes(plan: &mut RenderPlan, canvas: ScreenRect, theme: &Theme) {
    let center_x = (canvas.min.x + canvas.max.x) / 2;
    let center_y = (canvas.min.y + canvas.max.y) / 2;
    plan.push(RenderCommand::LineSegments {
        segments: vec![
            LineSegment::new(
                ScreenPoint::new(canvas.min.x, center_y),
                ScreenPoint::new(canvas.max.x, center_y),
            ),
            LineSegment::new(
                ScreenPoint::new(center_x, canvas.min.y),
                ScreenPoint::new(center_x, canvas.max.y),
            ),
        ],
        style: LineStyle {
            color: theme.axis,
            width: 1.0,
        },
    });
}

fn build_curve(plan: &mut RenderPlan, samples: &[Sample], clip: ScreenRect, theme: &Theme) {
    let mut segments = Vec::with_capacity(samples.len().saturating_sub(1));
    build_line_segments(samples, clip, &mut segments);
    if segments.is_empty() {
        return;
    }
    plan.push(RenderCommand::LineSegments {
        segments,
        style: LineStyle {
            color: theme.curve,
            width: 1.0,
        },
    });
}

fn build_markers(plan: &mut RenderPlan, samples: &[Sample], size: i32, theme: &Theme) {
    let mut accent = Vec::new();
    let mut secondary = Vec::new();
    for sample in samples {
        let glyph = star_segments(sample.screen, size);
        if is_accent_marker(sample.world.y) {
            accent.extend(glyph);
        } else {
            secondary.extend(glyph);
        }
    }
    for (segments, color) in [
        (accent, theme.marker_accent),
        (secondary, theme.marker_secondary),
    ] {
        if segments.is_empty() {
            continue;
        }
        plan.push(RenderCommand::LineSegments {
            segments,
            style: LineStyle { color, width: 1.0 },
        });
    }
}

/// Build clipped segments joining consecutive samples.
pub(crate) fn build_line_segments(
    samples: &[Sample],
    clip: ScreenRect,
    out: &mut Vec<LineSegment>,
) {
    out.clear();
    for pair in samples.windows(2) {
        if let Some(segment) = clip_segment(pair[0].screen, pair[1].screen, clip) {
            out.push(segment);
        }
    }
}

/// Cohen-Sutherland clip of a segment against a rectangle.
fn clip_segment(start: ScreenPoint, end: ScreenPoint, rect: ScreenRect) -> Option<LineSegment> {
    const LEFT: u8 = 1;
    const RIGHT: u8 = 2;
    const TOP: u8 = 4;
    const BOTTOM: u8 = 8;

    let min = (f64::from(rect.min.x), f64::from(rect.min.y));
    let max = (f64::from(rect.max.x), f64::from(rect.max.y));
    let region_code = |(x, y): (f64, f64)| -> u8 {
        let mut code = 0;
        if x < min.0 {
            code |= LEFT;
        } else if x > max.0 {
            code |= RIGHT;
        }
        if y < min.1 {
            code |= TOP;
        } else if y > max.1 {
            code |= BOTTOM;
        }
        code
    };

    let mut a = (f64::from(start.x), f64::from(start.y));
    let mut b = (f64::from(end.x), f64::from(end.y));
    let mut out_a = region_code(a);
    let mut out_b = region_code(b);

    loop {
        if (out_a | out_b) == 0 {
            return Some(LineSegment::new(to_pixel(a), to_pixel(b)));
        }
        if (out_a & out_b) != 0 {
            return None;
        }

        let out_code = if out_a != 0 { out_a } else { out_b };
        let point = if (out_code & TOP) != 0 {
            (a.0 + (b.0 - a.0) * (min.1 - a.1) / (b.1 - a.1), min.1)
        } else if (out_code & BOTTOM) != 0 {
            (a.0 + (b.0 - a.0) * (max.1 - a.1) / (b.1 - a.1), max.1)
        } else if (out_code & RIGHT) != 0 {
            (max.0, a.1 + (b.1 - a.1) * (max.0 - a.0) / (b.0 - a.0))
        } else {
            (min.0, a.1 + (b.1 - a.1) * (min.0 - a.0) / (b.0 - a.0))
        };

        if out_code == out_a {
            a = point;
            out_a = region_code(a);
        } else {
            b = point;
            out_b = region_code(b);
        }
    }
}

fn to_pixel((x, y): (f64, f64)) -> ScreenPoint {
    ScreenPoint::new(x.round() as i32, y.round() as i32)
}
