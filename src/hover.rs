//! Hover lookup against the current samples.

use crate::geom::PointerPosition;
use crate::sample::Sample;

/// Default hover radius in pixels.
pub const DEFAULT_HOVER_THRESHOLD_PX: f32 = 6.0;

/// What the pointer is currently over.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HoverState {
    /// No sample near the pointer.
    #[default]
    None,
    /// The pointer is within the hover radius of a sample.
    Hovering {
        /// The matched sample.
        sample: Sample,
    },
}

impl HoverState {
    /// The hovered sample, if any.
    pub fn sample(&self) -> Option<&Sample> {
        match self {
            Self::None => None,
            Self::Hovering { sample } => Some(sample),
        }
    }
}

/// Return the first sample strictly closer than `threshold` pixels to `cursor`.
///
/// Samples are scanned in ascending world X, so the earliest match wins even
/// when a later sample is nearer.
pub fn locate(samples: &[Sample], cursor: PointerPosition, threshold: f32) -> HoverState {
    let threshold_sq = threshold * threshold;
    samples
        .iter()
        .find(|sample| cursor.distance_sq(sample.screen) < threshold_sq)
        .map_or(HoverState::None, |sample| HoverState::Hovering {
            sample: *sample,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Point, ScreenPoint};

    fn sample_at(x: i32, y: i32) -> Sample {
        Sample {
            world: Point::new(f64::from(x), f64::from(y)),
            screen: ScreenPoint::new(x, y),
        }
    }

    #[test]
    fn threshold_is_exclusive() {
        let samples = [sample_at(100, 100)];
        let near = locate(&samples, PointerPosition::new(105.9, 100.0), 6.0);
        assert_eq!(near.sample(), Some(&samples[0]));
        let edge = locate(&samples, PointerPosition::new(106.0, 100.0), 6.0);
        assert_eq!(edge, HoverState::None);
    }

    #[test]
    fn earliest_match_wins_over_nearest() {
        let samples = [sample_at(100, 100), sample_at(104, 100)];
        let hover = locate(&samples, PointerPosition::new(104.0, 100.0), 6.0);
        assert_eq!(hover.sample(), Some(&samples[0]));
    }

    #[test]
    fn empty_samples_never_hover() {
        assert_eq!(
            locate(&[], PointerPosition::new(0.0, 0.0), 6.0),
            HoverState::None
        );
    }
}
