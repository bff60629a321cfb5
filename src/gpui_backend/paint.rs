use gpui::{
    App, BorderStyle, Bounds, ContentMask, Corners, Edges, PathBuilder, Pixels, TextRun, Window,
    font, point, px, quad,
};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{
    LineSegment, LineStyle, RectStyle, RenderCommand, RenderPlan, TextStyle, dashed_outline,
};
use crate::style::Color;

/// A render plan plus the window position of the canvas it targets.
#[derive(Debug, Clone)]
pub(crate) struct PlotFrame {
    pub(crate) plan: RenderPlan,
    pub(crate) origin: (f32, f32),
}

pub(crate) fn paint_frame(frame: &PlotFrame, window: &mut Window, cx: &mut App) {
    let origin = frame.origin;
    let mut clip_stack: Vec<ContentMask<Pixels>> = Vec::new();
    for command in frame.plan.commands() {
        match command {
            RenderCommand::ClipRect(rect) => {
                clip_stack.push(ContentMask {
                    bounds: to_bounds(*rect, origin),
                });
            }
            RenderCommand::ClipEnd => {
                clip_stack.pop();
            }
            RenderCommand::LineSegments { segments, style } => {
                with_clip(window, &clip_stack, |window| {
                    paint_lines(window, segments, *style, origin);
                });
            }
            RenderCommand::Rect { rect, style } => {
                with_clip(window, &clip_stack, |window| {
                    paint_rect(window, *rect, *style, origin);
                });
            }
            RenderCommand::Text {
                position,
                text,
                style,
            } => {
                with_clip(window, &clip_stack, |window| {
                    paint_text(window, cx, *position, text, style, origin);
                });
            }
        }
    }
}

fn paint_lines(
    window: &mut Window,
    segments: &[LineSegment],
    style: LineStyle,
    origin: (f32, f32),
) {
    if segments.is_empty() {
        return;
    }
    let width = style.width.max(0.5);
    let mut builder = PathBuilder::stroke(px(width));
    for segment in segments {
        builder.move_to(to_point(segment.start, origin));
        builder.line_to(to_point(segment.end, origin));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_rect(window: &mut Window, rect: ScreenRect, style: RectStyle, origin: (f32, f32)) {
    if let Some(dash) = style.dash {
        let line = LineStyle {
            color: style.stroke,
            width: style.stroke_width,
        };
        paint_lines(window, &dashed_outline(rect, dash), line, origin);
        return;
    }
    window.paint_quad(quad(
        to_bounds(rect, origin),
        Corners::all(px(0.0)),
        to_rgba(Color::new(0.0, 0.0, 0.0, 0.0)),
        Edges::all(px(style.stroke_width)),
        to_rgba(style.stroke),
        BorderStyle::default(),
    ));
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    position: ScreenPoint,
    text: &str,
    style: &TextStyle,
    origin: (f32, f32),
) {
    if text.is_empty() {
        return;
    }
    let font_size = px(style.size);
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: to_hsla(style.color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), font_size, &[run], None);
    let line_height = shaped.ascent + shaped.descent;
    // The label position is its baseline-left corner; shaped lines paint from the top.
    let top = ScreenPoint::new(position.x, position.y - f32::from(shaped.ascent).round() as i32);
    let _ = shaped.paint(to_point(top, origin), line_height, window, cx);
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}

fn to_point(point_px: ScreenPoint, origin: (f32, f32)) -> gpui::Point<Pixels> {
    point(
        px(origin.0 + point_px.x as f32),
        px(origin.1 + point_px.y as f32),
    )
}

fn to_bounds(rect: ScreenRect, origin: (f32, f32)) -> Bounds<Pixels> {
    Bounds::from_corners(to_point(rect.min, origin), to_point(rect.max, origin))
}

fn with_clip(window: &mut Window, stack: &[ContentMask<Pixels>], f: impl FnOnce(&mut Window)) {
    if let Some(mask) = stack.last() {
        window.with_content_mask(Some(mask.clone()), f);
    } else {
        f(window);
    }
}
