//! Pose transitions driving the live camera toward the current slide.

pub mod behaviors;

pub use behaviors::{
    behavior_for, sanitize_dt, ExponentialApproach, Snap, TransitionBehavior,
};
