//! Pointer-driven zoom and hover state machine.
//!
//! The controller consumes backend-agnostic [`PointerEvent`]s. Render backends
//! translate their native mouse events into these and redraw whenever
//! [`InteractionOutcome::needs_redraw`] says so.

use tracing::{debug, trace};

use crate::geom::{CanvasSize, PointerPosition, ScreenPoint, ScreenRect};
use crate::hover::{self, HoverState};
use crate::sample::SampleSet;
use crate::transform::CoordinateMapper;
use crate::view::{ViewWindow, Viewport};

/// Pointer buttons the controller distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Drag to zoom.
    Primary,
    /// Release to reset the view.
    Secondary,
}

/// Primitive pointer input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed at a position.
    Down {
        /// Pressed button.
        button: PointerButton,
        /// Pointer position in canvas pixels.
        position: PointerPosition,
    },
    /// The pointer moved.
    Move {
        /// Pointer position in canvas pixels.
        position: PointerPosition,
    },
    /// A button was released.
    Up {
        /// Released button.
        button: PointerButton,
    },
    /// The pointer left the canvas.
    Leave,
}

/// Zoom drag progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// Primary button held since `start`.
    Dragging {
        /// Where the drag began.
        start: ScreenPoint,
        /// Latest pointer position.
        current: ScreenPoint,
    },
}

impl DragState {
    /// Axis-aligned rectangle swept by the drag, if one is in progress.
    pub fn rect(&self) -> Option<ScreenRect> {
        match *self {
            Self::Idle => None,
            Self::Dragging { start, current } => Some(ScreenRect::from_corners(start, current)),
        }
    }
}

/// Result of feeding one event to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// Nothing visible changed.
    Ignored,
    /// Drag or hover state changed; the view window did not.
    Updated,
    /// A zoom was committed and samples were regenerated.
    Zoomed,
    /// The view was reset and samples were regenerated.
    Reset,
}

impl InteractionOutcome {
    /// Whether the host should schedule a redraw.
    pub fn needs_redraw(self) -> bool {
        self != Self::Ignored
    }
}

/// Owner of the view window, samples, drag and hover state.
#[derive(Debug, Clone)]
pub struct InteractionController {
    window: ViewWindow,
    canvas: CanvasSize,
    samples: SampleSet,
    drag: DragState,
    hover: HoverState,
    cursor: Option<PointerPosition>,
    hover_threshold_px: f32,
}

impl InteractionController {
    /// Create a controller and generate the initial samples.
    pub fn new(
        window: ViewWindow,
        canvas: CanvasSize,
        samples: SampleSet,
        hover_threshold_px: f32,
    ) -> Self {
        let mut controller = Self {
            window,
            canvas,
            samples,
            drag: DragState::Idle,
            hover: HoverState::None,
            cursor: None,
            hover_threshold_px,
        };
        controller.regenerate();
        controller
    }

    /// The view window.
    pub fn view_window(&self) -> &ViewWindow {
        &self.window
    }

    /// Current canvas size.
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Samples for the current view window.
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    /// Drag progress.
    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Hover state.
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    /// Mapper for the current view window and canvas.
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.window.viewport(), self.canvas)
    }

    /// Feed one pointer event through the state machine.
    pub fn handle(&mut self, event: PointerEvent) -> InteractionOutcome {
        match event {
            PointerEvent::Down {
                button: PointerButton::Primary,
                position,
            } => {
                self.cursor = Some(position);
                let start = self.clamp_to_canvas(position.to_screen_point());
                trace!(x = start.x, y = start.y, "zoom drag started");
                self.drag = DragState::Dragging {
                    start,
                    current: start,
                };
                InteractionOutcome::Updated
            }
            PointerEvent::Down {
                button: PointerButton::Secondary,
                position,
            } => {
                self.cursor = Some(position);
                InteractionOutcome::Ignored
            }
            PointerEvent::Move { position } => self.on_move(position),
            PointerEvent::Up {
                button: PointerButton::Primary,
            } => self.on_primary_up(),
            PointerEvent::Up {
                button: PointerButton::Secondary,
            } => {
                self.drag = DragState::Idle;
                self.window.reset();
                debug!(viewport = ?self.window.viewport(), "view reset");
                self.regenerate();
                InteractionOutcome::Reset
            }
            PointerEvent::Leave => {
                self.cursor = None;
                if self.hover == HoverState::None {
                    return InteractionOutcome::Ignored;
                }
                self.hover = HoverState::None;
                InteractionOutcome::Updated
            }
        }
    }

    /// Replace the canvas size and regenerate samples for it.
    pub fn resize(&mut self, canvas: CanvasSize) {
        if canvas == self.canvas {
            return;
        }
        debug!(
            width = canvas.width(),
            height = canvas.height(),
            "canvas resized"
        );
        self.canvas = canvas;
        if let DragState::Dragging { start, current } = self.drag {
            self.drag = DragState::Dragging {
                start: self.clamp_to_canvas(start),
                current: self.clamp_to_canvas(current),
            };
        }
        self.regenerate();
    }

    fn on_move(&mut self, position: PointerPosition) -> InteractionOutcome {
        self.cursor = Some(position);
        let previous_drag = self.drag;
        if let DragState::Dragging { start, .. } = self.drag {
            self.drag = DragState::Dragging {
                start,
                current: self.clamp_to_canvas(position.to_screen_point()),
            };
        }
        let previous_hover = self.hover;
        self.refresh_hover();
        if self.drag != previous_drag || self.hover != previous_hover {
            InteractionOutcome::Updated
        } else {
            InteractionOutcome::Ignored
        }
    }

    fn on_primary_up(&mut self) -> InteractionOutcome {
        let Some(rect) = self.drag.rect() else {
            return InteractionOutcome::Ignored;
        };
        self.drag = DragState::Idle;

        let Some(next) = zoom_to_rect(rect, &self.mapper()) else {
            trace!("zoom drag cancelled: empty rectangle");
            return InteractionOutcome::Updated;
        };
        if self
            .window
            .set(next.x.min, next.x.max, next.y.min, next.y.max)
            .is_err()
        {
            return InteractionOutcome::Updated;
        }
        debug!(viewport = ?next, "zoom committed");
        self.regenerate();
        InteractionOutcome::Zoomed
    }

    fn regenerate(&mut self) {
        let mapper = self.mapper();
        self.samples.regenerate(&mapper);
        self.refresh_hover();
    }

    fn refresh_hover(&mut self) {
        self.hover = match self.cursor {
            Some(cursor) => hover::locate(self.samples.samples(), cursor, self.hover_threshold_px),
            None => HoverState::None,
        };
    }

    fn clamp_to_canvas(&self, point: ScreenPoint) -> ScreenPoint {
        let max = self.canvas.rect().max;
        ScreenPoint::new(point.x.clamp(0, max.x), point.y.clamp(0, max.y))
    }
}

/// Convert a zoom rectangle into the world viewport it covers.
///
/// Returns `None` for rectangles with zero width or height. The result never
/// extends past the mapper's viewport, even by float rounding.
pub(crate) fn zoom_to_rect(rect: ScreenRect, mapper: &CoordinateMapper) -> Option<Viewport> {
    if !rect.is_valid() {
        return None;
    }
    let current = mapper.viewport();
    let next = mapper.to_world_rect(rect);
    Some(Viewport::from_bounds(
        next.x.min.max(current.x.min),
        next.x.max.min(current.x.max),
        next.y.min.max(current.y.min),
        next.y.max.min(current.y.max),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::DEFAULT_STEP;

    fn controller() -> InteractionController {
        InteractionController::new(
            ViewWindow::new(Viewport::default()).unwrap(),
            CanvasSize::new(800, 600).unwrap(),
            SampleSet::sine(DEFAULT_STEP).unwrap(),
            6.0,
        )
    }

    fn down(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Down {
            button: PointerButton::Primary,
            position: PointerPosition::new(x, y),
        }
    }

    fn move_to(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Move {
            position: PointerPosition::new(x, y),
        }
    }

    const PRIMARY_UP: PointerEvent = PointerEvent::Up {
        button: PointerButton::Primary,
    };
    const SECONDARY_UP: PointerEvent = PointerEvent::Up {
        button: PointerButton::Secondary,
    };

    #[test]
    fn drag_updates_rect_without_touching_window() {
        let mut controller = controller();
        controller.handle(down(300.0, 300.0));
        controller.handle(move_to(100.0, 120.0));
        assert_eq!(
            controller.drag().rect(),
            Some(ScreenRect::new(
                ScreenPoint::new(100, 120),
                ScreenPoint::new(300, 300)
            ))
        );
        assert!(controller.view_window().is_initial());
        assert_eq!(controller.samples().generation(), 1);
    }

    #[test]
    fn reverse_drag_commits_normalized_zoom() {
        let mut controller = controller();
        controller.handle(down(300.0, 300.0));
        controller.handle(move_to(100.0, 100.0));
        assert_eq!(controller.handle(PRIMARY_UP), InteractionOutcome::Zoomed);
        let viewport = controller.view_window().viewport();
        assert!((viewport.x.min + 7.5).abs() < 1e-9);
        assert!((viewport.x.max + 2.5).abs() < 1e-9);
        assert!(viewport.y.min < viewport.y.max);
        assert_eq!(controller.drag(), DragState::Idle);
        assert_eq!(controller.samples().generation(), 2);
    }

    #[test]
    fn click_without_motion_is_a_no_op() {
        let mut controller = controller();
        controller.handle(down(250.0, 250.0));
        assert_eq!(controller.handle(PRIMARY_UP), InteractionOutcome::Updated);
        assert!(controller.view_window().is_initial());
        assert_eq!(controller.samples().generation(), 1);
        assert_eq!(controller.drag(), DragState::Idle);
    }

    #[test]
    fn zero_height_drag_is_a_no_op() {
        let mut controller = controller();
        controller.handle(down(100.0, 250.0));
        controller.handle(move_to(400.0, 250.0));
        controller.handle(PRIMARY_UP);
        assert!(controller.view_window().is_initial());
    }

    #[test]
    fn secondary_release_cancels_drag_and_resets() {
        let mut controller = controller();
        controller.handle(down(100.0, 100.0));
        controller.handle(move_to(300.0, 300.0));
        controller.handle(PRIMARY_UP);
        controller.handle(down(10.0, 10.0));
        controller.handle(move_to(50.0, 50.0));
        assert_eq!(controller.handle(SECONDARY_UP), InteractionOutcome::Reset);
        assert_eq!(controller.drag(), DragState::Idle);
        assert_eq!(controller.view_window().viewport(), Viewport::default());
        assert_eq!(controller.handle(PRIMARY_UP), InteractionOutcome::Ignored);
    }

    #[test]
    fn drag_points_are_clamped_to_canvas() {
        let mut controller = controller();
        controller.handle(down(-40.0, 500.0));
        controller.handle(move_to(900.0, 700.0));
        assert_eq!(
            controller.drag().rect(),
            Some(ScreenRect::new(
                ScreenPoint::new(0, 500),
                ScreenPoint::new(800, 600)
            ))
        );
    }

    #[test]
    fn hover_follows_pointer_and_clears_on_leave() {
        let mut controller = controller();
        let target = controller.samples().samples()[0];
        let outcome = controller.handle(move_to(
            target.screen.x as f32 + 0.5,
            target.screen.y as f32,
        ));
        assert_eq!(outcome, InteractionOutcome::Updated);
        assert_eq!(controller.hover().sample(), Some(&target));
        assert_eq!(
            controller.handle(PointerEvent::Leave),
            InteractionOutcome::Updated
        );
        assert_eq!(controller.hover(), HoverState::None);
    }

    #[test]
    fn resize_regenerates_samples() {
        let mut controller = controller();
        controller.resize(CanvasSize::new(400, 300).unwrap());
        assert_eq!(controller.samples().generation(), 2);
        assert_eq!(controller.samples().samples()[200].screen.x, 400);
        controller.resize(CanvasSize::new(400, 300).unwrap());
        assert_eq!(controller.samples().generation(), 2);
    }

    #[test]
    fn resize_reclamps_drag_corners() {
        let mut controller = controller();
        controller.handle(down(100.0, 100.0));
        controller.handle(move_to(700.0, 500.0));
        controller.resize(CanvasSize::new(400, 300).unwrap());
        assert_eq!(
            controller.drag().rect(),
            Some(ScreenRect::new(
                ScreenPoint::new(100, 100),
                ScreenPoint::new(400, 300)
            ))
        );
        assert!(controller.view_window().is_initial());
    }
}
