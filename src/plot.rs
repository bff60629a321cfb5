//! Plot entry points and builders.

use std::sync::Arc;

use crate::config::PlotConfig;
use crate::error::PlotError;
use crate::geom::CanvasSize;
use crate::interaction::{InteractionController, InteractionOutcome, PointerEvent};
use crate::render::{RenderPlan, build_render_plan};
use crate::sample::{PlotFunction, SampleSet};
use crate::style::{DisplayOptions, Theme};
use crate::view::{ViewWindow, Viewport};

/// An interactive plot of a single function.
///
/// Owns the interaction state plus the styling needed to build a
/// [`RenderPlan`] each frame.
#[derive(Debug, Clone)]
pub struct Plot {
    controller: InteractionController,
    config: PlotConfig,
    theme: Theme,
    options: DisplayOptions,
}

impl Plot {
    /// Plot `y = sin(x)` with the default configuration.
    pub fn new(canvas: CanvasSize) -> Result<Self, PlotError> {
        Self::builder().build(canvas)
    }

    /// Start building a plot with custom configuration.
    pub fn builder() -> PlotBuilder {
        PlotBuilder::default()
    }

    /// Access the interaction state.
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Access the configuration.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Access the current theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Current visible bounds.
    pub fn viewport(&self) -> Viewport {
        self.controller.view_window().viewport()
    }

    /// Current display toggles.
    pub fn display_options(&self) -> DisplayOptions {
        self.options
    }

    /// Replace the display toggles.
    pub fn set_display_options(&mut self, options: DisplayOptions) {
        self.options = options;
    }

    /// Flip axis visibility.
    pub fn toggle_axes(&mut self) {
        self.options.show_axes = !self.options.show_axes;
    }

    /// Flip marker visibility.
    pub fn toggle_markers(&mut self) {
        self.options.show_markers = !self.options.show_markers;
    }

    /// Feed one pointer event to the interaction state machine.
    pub fn handle_event(&mut self, event: PointerEvent) -> InteractionOutcome {
        self.controller.handle(event)
    }

    /// Adapt to a new canvas size.
    pub fn resize(&mut self, canvas: CanvasSize) {
        self.controller.resize(canvas);
    }

    /// Build the draw commands for the current state.
    pub fn render_plan(&self) -> RenderPlan {
        build_render_plan(&self.controller, self.options, &self.theme, &self.config)
    }
}

/// Builder for configuring a plot before construction.
#[derive(Default)]
pub struct PlotBuilder {
    config: PlotConfig,
    theme: Theme,
    options: DisplayOptions,
    function: Option<PlotFunction>,
}

impl PlotBuilder {
    /// Replace the whole configuration.
    pub fn config(mut self, config: PlotConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the bounds shown at startup and restored on reset.
    pub fn initial_view(mut self, viewport: Viewport) -> Self {
        self.config.initial = viewport;
        self
    }

    /// Set the world-space sampling step.
    pub fn step(mut self, step: f64) -> Self {
        self.config.step = step;
        self
    }

    /// Set the theme used by the plot.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the initial display toggles.
    pub fn display_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }

    /// Plot `function` instead of `sin`.
    pub fn function(mut self, function: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.function = Some(Arc::new(function));
        self
    }

    /// Validate the configuration and build the plot for `canvas`.
    pub fn build(self, canvas: CanvasSize) -> Result<Plot, PlotError> {
        let window = ViewWindow::new(self.config.initial)?;
        let samples = match self.function {
            Some(function) => SampleSet::new(function, self.config.step)?,
            None => SampleSet::sine(self.config.step)?,
        };
        let controller =
            InteractionController::new(window, canvas, samples, self.config.hover_threshold_px);
        Ok(Plot {
            controller,
            config: self.config,
            theme: self.theme,
            options: self.options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderCommand;

    fn canvas() -> CanvasSize {
        CanvasSize::new(800, 600).unwrap()
    }

    #[test]
    fn default_plot_samples_sine() {
        let plot = Plot::new(canvas()).unwrap();
        let samples = plot.controller().samples().samples();
        assert_eq!(samples.len(), 201);
        assert!(
            samples
                .iter()
                .all(|sample| (sample.world.y - sample.world.x.sin()).abs() < 1e-12)
        );
    }

    #[test]
    fn builder_rejects_bad_step_and_bounds() {
        assert_eq!(
            Plot::builder().step(-1.0).build(canvas()).unwrap_err(),
            PlotError::InvalidStep(-1.0)
        );
        let flat = Viewport::from_bounds(0.0, 1.0, 3.0, 3.0);
        assert!(matches!(
            Plot::builder().initial_view(flat).build(canvas()),
            Err(PlotError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn custom_function_is_sampled() {
        let plot = Plot::builder()
            .function(|x| x * x)
            .step(0.5)
            .initial_view(Viewport::from_bounds(0.0, 2.0, 0.0, 4.0))
            .build(canvas())
            .unwrap();
        let ys: Vec<f64> = plot
            .controller()
            .samples()
            .samples()
            .iter()
            .map(|sample| sample.world.y)
            .collect();
        assert_eq!(ys, vec![0.0, 0.25, 1.0, 2.25, 4.0]);
    }

    #[test]
    fn toggles_only_change_the_next_plan() {
        let mut plot = Plot::new(canvas()).unwrap();
        let before = plot.render_plan();
        plot.toggle_axes();
        plot.toggle_markers();
        let after = plot.render_plan();
        assert!(after.commands().len() < before.commands().len());
        assert_eq!(plot.controller().samples().generation(), 1);
        let lines = after
            .commands()
            .iter()
            .filter(|command| matches!(command, RenderCommand::LineSegments { .. }))
            .count();
        assert_eq!(lines, 1);
    }
}
