//! Frame-rate dependent exponential approach toward the target pose.

use super::traits::{sanitize_dt, TransitionBehavior};
use crate::camera::Pose;

/// Moves a fraction of the remaining distance each tick.
///
/// Position uses `lerp(current, target, clamp01(dt / T * POSITION_GAIN))`,
/// rotation uses `slerp(current, target, clamp01(dt / T))`. The approach is
/// asymptotic; callers decide arrival with [`Pose::approx_eq`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialApproach {
    /// Smoothing time constant in seconds. Must be positive.
    pub transition_time: f32,
}

impl ExponentialApproach {
    /// Position moves slightly faster than rotation.
    pub const POSITION_GAIN: f32 = 1.15;

    /// Create with the given time constant.
    #[must_use]
    pub fn new(transition_time: f32) -> Self {
        Self { transition_time }
    }

    /// Position interpolation factor for `dt`.
    #[must_use]
    pub fn position_factor(&self, dt: f32) -> f32 {
        self.raw_factor(dt)
            .map_or(1.0, |f| (f * Self::POSITION_GAIN).clamp(0.0, 1.0))
    }

    /// Rotation interpolation factor for `dt`.
    #[must_use]
    pub fn rotation_factor(&self, dt: f32) -> f32 {
        self.raw_factor(dt).map_or(1.0, |f| f.clamp(0.0, 1.0))
    }

    /// `dt / T`, or `None` when the time constant cannot smooth.
    fn raw_factor(&self, dt: f32) -> Option<f32> {
        (self.transition_time > 0.0 && self.transition_time.is_finite())
            .then(|| sanitize_dt(dt) / self.transition_time)
    }
}

impl TransitionBehavior for ExponentialApproach {
    fn step(&self, current: Pose, target: Pose, dt: f32) -> Pose {
        let position = current
            .position
            .lerp(target.position, self.position_factor(dt));
        let rotation = current
            .rotation
            .slerp(target.rotation, self.rotation_factor(dt))
            .normalize();
        Pose::new(position, rotation)
    }

    fn name(&self) -> &'static str {
        "exponential_approach"
    }
}
