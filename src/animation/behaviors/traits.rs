//! Core trait for transition behaviors.

use super::{ExponentialApproach, Snap};
use crate::camera::Pose;

/// Defines how the live camera pose approaches a slide's pose each tick.
///
/// See [`Snap`] and [`ExponentialApproach`].
pub trait TransitionBehavior: Send + Sync {
    /// Next pose after `dt` seconds.
    fn step(&self, current: Pose, target: Pose, dt: f32) -> Pose;

    /// Optional name for debugging/logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// Whether `step` always lands exactly on the target.
    fn is_instant(&self) -> bool {
        false
    }
}

/// Behavior for a slide with the given transition time: [`Snap`] when the
/// time is zero, negative or not finite, otherwise [`ExponentialApproach`].
#[must_use]
pub fn behavior_for(transition_time: f32) -> Box<dyn TransitionBehavior> {
    if transition_time.is_finite() && transition_time > 0.0 {
        Box::new(ExponentialApproach::new(transition_time))
    } else {
        Box::new(Snap)
    }
}

/// Frame delta with negative or non-finite values treated as zero.
#[must_use]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_or_invalid_times_snap() {
        for t in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let behavior = behavior_for(t);
            assert!(behavior.is_instant(), "{t} should snap");
            assert_eq!(behavior.name(), "snap");
        }
        let smooth = behavior_for(0.5);
        assert!(!smooth.is_instant());
        assert_eq!(smooth.name(), "exponential_approach");
    }

    #[test]
    fn dt_sanitizing() {
        assert_eq!(sanitize_dt(0.016), 0.016);
        assert_eq!(sanitize_dt(-0.5), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::NEG_INFINITY), 0.0);
    }
}
