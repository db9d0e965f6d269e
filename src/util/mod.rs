//! Shared utilities: frame clocks supplying the per-tick time delta.

/// Frame clocks supplying the per-tick time delta.
pub mod clock;

pub use clock::{FixedClock, FrameClock, WallClock};
