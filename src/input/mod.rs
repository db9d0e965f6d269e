//! Input handling: event types, edge and swipe detection, and the input
//! processor that converts raw events into navigation commands.

/// Rising-edge detection over sampled levels.
pub mod edge;
/// Platform-agnostic input events.
pub mod event;
/// Bindable navigation actions.
pub mod keyboard;
/// Converts raw events into per-tick navigation intents.
pub mod processor;
/// Touch swipe classification.
pub mod touch;

pub use edge::EdgeDetector;
pub use event::InputEvent;
pub use keyboard::NavAction;
pub use processor::{InputProcessor, NavIntent};
pub use touch::{Swipe, SwipeTracker};
