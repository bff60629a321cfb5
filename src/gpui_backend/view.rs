use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{
    MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point, Window, canvas, div,
};
use tracing::trace;

use crate::geom::{CanvasSize, PointerPosition};
use crate::interaction::{PointerButton, PointerEvent};
use crate::plot::Plot;
use crate::render::RenderPlan;

use super::paint::{PlotFrame, paint_frame, to_hsla};

/// Where the canvas was laid out during the last frame, in window pixels.
#[derive(Debug, Clone, Copy, Default)]
struct CanvasPlacement {
    origin: (f32, f32),
    size: (f32, f32),
}

impl CanvasPlacement {
    fn to_local(self, position: Point<Pixels>) -> PointerPosition {
        PointerPosition::new(
            f32::from(position.x) - self.origin.0,
            f32::from(position.y) - self.origin.1,
        )
    }
}

/// A GPUI view that renders a [`Plot`] with interactive zoom and hover.
///
/// Left-drag selects a zoom rectangle, right-click resets to the initial view.
/// The canvas size follows the element bounds; a resize regenerates samples.
#[derive(Clone)]
pub struct GpuiPlotView {
    plot: Arc<RwLock<Plot>>,
    placement: Arc<RwLock<CanvasPlacement>>,
}

impl GpuiPlotView {
    /// Create a new GPUI view for the given plot.
    pub fn new(plot: Plot) -> Self {
        Self {
            plot: Arc::new(RwLock::new(plot)),
            placement: Arc::new(RwLock::new(CanvasPlacement::default())),
        }
    }

    /// Get a handle for reading or mutating the underlying plot.
    ///
    /// Useful for wiring host menus to the display toggles.
    pub fn plot_handle(&self) -> PlotHandle {
        PlotHandle {
            plot: Arc::clone(&self.plot),
        }
    }

    fn placement(&self) -> CanvasPlacement {
        *self.placement.read().expect("placement lock")
    }

    fn dispatch(&mut self, event: PointerEvent, cx: &mut Context<Self>) {
        let outcome = self.plot.write().expect("plot lock").handle_event(event);
        trace!(?event, ?outcome, "pointer event");
        if outcome.needs_redraw() {
            cx.notify();
        }
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let Some(button) = pointer_button(ev.button) else {
            return;
        };
        let position = self.placement().to_local(ev.position);
        self.dispatch(PointerEvent::Down { button, position }, cx);
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        let position = self.placement().to_local(ev.position);
        self.dispatch(PointerEvent::Move { position }, cx);
    }

    // Move events stop once the pointer leaves the hitbox, so leaving is
    // reported through the hover listener instead.
    fn on_hover_change(&mut self, hovered: bool, cx: &mut Context<Self>) {
        if let Some(event) = hover_change_event(hovered) {
            self.dispatch(event, cx);
        }
    }

    fn on_mouse_up(&mut self, ev: &MouseUpEvent, cx: &mut Context<Self>) {
        let Some(button) = pointer_button(ev.button) else {
            return;
        };
        self.dispatch(PointerEvent::Up { button }, cx);
    }
}

impl Render for GpuiPlotView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let plot = Arc::clone(&self.plot);
        let placement = Arc::clone(&self.placement);
        let background = self.plot.read().expect("plot lock").theme().background;

        div()
            .id("funcplot-canvas")
            .size_full()
            .bg(to_hsla(background))
            .child(
                canvas(
                    move |bounds, _window, _| {
                        let current = CanvasPlacement {
                            origin: (f32::from(bounds.origin.x), f32::from(bounds.origin.y)),
                            size: (f32::from(bounds.size.width), f32::from(bounds.size.height)),
                        };
                        *placement.write().expect("placement lock") = current;

                        let mut plot = plot.write().expect("plot lock");
                        let size = CanvasSize::new(current.size.0 as u32, current.size.1 as u32);
                        let plan = match size {
                            Ok(size) => {
                                plot.resize(size);
                                plot.render_plan()
                            }
                            Err(_) => RenderPlan::new(),
                        };
                        PlotFrame {
                            plan,
                            origin: current.origin,
                        }
                    },
                    move |_, frame, window, cx| {
                        paint_frame(&frame, window, cx);
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_down(
                MouseButton::Right,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_hover(cx.listener(|this, hovered: &bool, _, cx| {
                this.on_hover_change(*hovered, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
            .on_mouse_up(
                MouseButton::Right,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
    }
}

/// A handle for reading or mutating a [`Plot`] held inside a `GpuiPlotView`.
///
/// The handle clones cheaply. Callers that change display options should
/// notify the view afterwards so the next frame picks them up.
#[derive(Clone)]
pub struct PlotHandle {
    plot: Arc<RwLock<Plot>>,
}

impl PlotHandle {
    /// Read the plot state.
    ///
    /// The plot is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&Plot) -> R) -> R {
        let plot = self.plot.read().expect("plot lock");
        f(&plot)
    }

    /// Mutate the plot state.
    ///
    /// The plot is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut Plot) -> R) -> R {
        let mut plot = self.plot.write().expect("plot lock");
        f(&mut plot)
    }
}

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        _ => None,
    }
}

fn hover_change_event(hovered: bool) -> Option<PointerEvent> {
    (!hovered).then_some(PointerEvent::Leave)
}
