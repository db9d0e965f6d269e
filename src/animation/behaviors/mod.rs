//! Transition behaviors define how the live camera moves to a slide.
//!
//! Behaviors are stateless per tick: given the current pose, the target pose
//! and the elapsed time they return the next pose. The player picks one per
//! tick from the slide's transition time.

mod smooth;
mod snap;
mod traits;

pub use smooth::ExponentialApproach;
pub use snap::Snap;
pub use traits::{behavior_for, sanitize_dt, TransitionBehavior};
