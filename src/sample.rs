//! Sampling of the plotted function over the visible X range.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::PlotError;
use crate::geom::{Point, ScreenPoint};
use crate::transform::CoordinateMapper;

/// Default world-space distance between samples.
pub const DEFAULT_STEP: f64 = 0.1;

/// Slack on the inclusive upper bound so `max_x` itself survives float error.
const STEP_TOLERANCE: f64 = 1e-9;

/// Upper bound on samples per regeneration.
pub const MAX_SAMPLES: u64 = 1_000_000;

/// A plottable function of one variable.
pub type PlotFunction = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// A single evaluated point, kept in both world and screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Point in world space.
    pub world: Point,
    /// Same point mapped onto the canvas.
    pub screen: ScreenPoint,
}

/// The curve's samples for the current view window.
///
/// Samples are ordered by strictly ascending world X. Each call to
/// [`SampleSet::regenerate`] discards the previous samples.
#[derive(Clone)]
pub struct SampleSet {
    function: PlotFunction,
    step: f64,
    samples: Vec<Sample>,
    generation: u64,
}

impl SampleSet {
    /// Create an empty sample set for `function` at the given world step.
    pub fn new(function: PlotFunction, step: f64) -> Result<Self, PlotError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(PlotError::InvalidStep(step));
        }
        Ok(Self {
            function,
            step,
            samples: Vec::new(),
            generation: 0,
        })
    }

    /// Sample set for `y = sin(x)`.
    pub fn sine(step: f64) -> Result<Self, PlotError> {
        Self::new(Arc::new(f64::sin), step)
    }

    /// World-space sampling step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Current samples in ascending world X.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of completed regenerations.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Rebuild all samples for the mapper's viewport and canvas.
    ///
    /// Walks `min_x, min_x + step, ...` up to `max_x` inclusive. Points where
    /// the function is not finite are skipped. At most [`MAX_SAMPLES`] steps
    /// are taken; wider windows are truncated on the right.
    pub fn regenerate(&mut self, mapper: &CoordinateMapper) {
        let range = mapper.viewport().x;
        let limit = range.max + self.step * STEP_TOLERANCE;
        self.samples.clear();

        let steps = (range.span() / self.step + STEP_TOLERANCE).floor();
        let last_index = if steps.is_finite() && steps < MAX_SAMPLES as f64 {
            steps.max(0.0) as u64
        } else {
            warn!(steps, max = MAX_SAMPLES, "sample count capped");
            MAX_SAMPLES - 1
        };

        let mut skipped = 0usize;
        let mut last_x: Option<f64> = None;
        for index in 0..=last_index {
            let x = range.min + index as f64 * self.step;
            if x > limit {
                break;
            }
            // Very small steps relative to |x| can round onto the previous value.
            if last_x.is_some_and(|last| x <= last) {
                continue;
            }
            last_x = Some(x);

            let y = (self.function)(x);
            if !y.is_finite() {
                skipped += 1;
                continue;
            }
            let world = Point::new(x, y);
            self.samples.push(Sample {
                world,
                screen: mapper.to_screen(world),
            });
        }

        self.generation += 1;
        debug!(
            count = self.samples.len(),
            skipped,
            generation = self.generation,
            "regenerated samples"
        );
    }
}

impl fmt::Debug for SampleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SampleSet")
            .field("step", &self.step)
            .field("samples", &self.samples.len())
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
