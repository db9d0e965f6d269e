//! Instant snap behavior with no interpolation.

use super::traits::TransitionBehavior;
use crate::camera::Pose;

/// Instant snap to target with no interpolation.
///
/// Used for slides without a transition time, and for every slide while
/// authoring so the editor view follows selection immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct Snap;

impl TransitionBehavior for Snap {
    fn step(&self, _current: Pose, target: Pose, _dt: f32) -> Pose {
        target
    }

    fn name(&self) -> &'static str {
        "snap"
    }

    fn is_instant(&self) -> bool {
        true
    }
}
