//! Converts raw platform events into navigation intents.
//!
//! The `InputProcessor` owns all transient input state (held keys, the Alt
//! modifier, touch tracking) and the key-binding map. It is the only thing
//! that sits between raw window events and the engine's
//! [`execute`](crate::PresentationEngine::execute) method.

use glam::Vec2;
use rustc_hash::FxHashMap;

use super::edge::EdgeDetector;
use super::event::InputEvent;
use super::keyboard::NavAction;
use super::touch::{Swipe, SwipeTracker};
use crate::engine::command::PresenterCommand;
use crate::mode::PresentationMode;
use crate::options::{KeybindingOptions, NavigationOptions};

/// Edge-triggered navigation requested during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavIntent {
    /// An advance key was pressed or a left swipe finished.
    pub advance: bool,
    /// A retreat key was pressed or a right swipe finished.
    pub retreat: bool,
}

impl NavIntent {
    /// The single command to apply this tick. Advance wins when both fired.
    #[must_use]
    pub fn command(self) -> Option<PresenterCommand> {
        if self.advance {
            Some(PresenterCommand::Advance)
        } else if self.retreat {
            Some(PresenterCommand::Retreat)
        } else {
            None
        }
    }

    /// Whether nothing was requested.
    #[must_use]
    pub fn is_empty(self) -> bool {
        !self.advance && !self.retreat
    }
}

/// A key that went down, and whether Alt was held at that moment.
#[derive(Debug, Clone)]
struct KeyPress {
    code: String,
    with_alt: bool,
}

/// Converts raw input events into [`NavIntent`]s, sampled once per tick.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// input_processor.handle_event(&event);
///
/// // Once per frame:
/// if let Some(cmd) = input_processor.sample(mode).command() {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Swipe threshold and enable flag.
    navigation: NavigationOptions,
    /// Whether an Alt key is currently held.
    alt_pressed: bool,
    /// Keys currently held, with the Alt state at press time.
    held: FxHashMap<String, bool>,
    /// Presses since the last sample, so a tap shorter than a tick still
    /// raises its key's level once.
    tapped: Vec<KeyPress>,
    /// Per-key edge detectors for keys whose level was high at the last
    /// sample.
    key_edges: FxHashMap<String, EdgeDetector>,
    swipes: SwipeTracker,
    /// Swipe finished since the last sample.
    pending_swipe: Option<Swipe>,
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(KeybindingOptions::default(), NavigationOptions::default())
    }
}

impl InputProcessor {
    /// Create a processor with the given bindings and touch settings.
    #[must_use]
    pub fn new(
        key_bindings: KeybindingOptions,
        navigation: NavigationOptions,
    ) -> Self {
        Self {
            swipes: SwipeTracker::new(navigation.swipe_threshold),
            key_bindings,
            navigation,
            alt_pressed: false,
            held: FxHashMap::default(),
            tapped: Vec::new(),
            key_edges: FxHashMap::default(),
            pending_swipe: None,
        }
    }

    /// Whether an Alt key is held.
    #[must_use]
    pub fn alt_pressed(&self) -> bool {
        self.alt_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings and touch settings (e.g. after loading a
    /// preset). Held key state is kept.
    pub fn set_options(
        &mut self,
        key_bindings: KeybindingOptions,
        navigation: NavigationOptions,
    ) {
        self.key_bindings = key_bindings;
        self.key_bindings.rebuild_reverse_map();
        self.swipes = SwipeTracker::new(navigation.swipe_threshold);
        self.navigation = navigation;
    }

    /// Record a raw input event. Nothing navigates until [`Self::sample`].
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Key {
                code,
                pressed: true,
            } => {
                // Auto-repeat presses keep the original Alt state.
                if !self.held.contains_key(code) {
                    // Re-arm so a release and press between samples still
                    // fires.
                    let _ = self.key_edges.remove(code);
                    let _ = self.held.insert(code.clone(), self.alt_pressed);
                    self.tapped.push(KeyPress {
                        code: code.clone(),
                        with_alt: self.alt_pressed,
                    });
                }
            }
            InputEvent::Key {
                code,
                pressed: false,
            } => {
                let _ = self.held.remove(code);
            }
            InputEvent::ModifiersChanged { alt } => self.alt_pressed = *alt,
            InputEvent::TouchStart { id, x, y } => {
                if self.navigation.swipes_enabled {
                    self.swipes.touch_start(*id, Vec2::new(*x, *y));
                }
            }
            InputEvent::TouchEnd { id, x, y } => {
                if let Some(swipe) =
                    self.swipes.touch_end(*id, Vec2::new(*x, *y))
                {
                    log::debug!("swipe {swipe:?}");
                    self.pending_swipe = Some(swipe);
                }
            }
            InputEvent::TouchCancel { id } => self.swipes.touch_cancel(*id),
        }
    }

    /// Run each key's edge detector once for this tick and consume any
    /// latched swipe. Every physical press fires once, even while another
    /// key bound to the same action is held.
    pub fn sample(&mut self, mode: PresentationMode) -> NavIntent {
        let levels = self.key_levels();
        self.key_edges.retain(|code, _| levels.contains_key(code));

        let mut intent = NavIntent::default();
        for (code, with_alt) in &levels {
            let rising = self
                .key_edges
                .entry(code.clone())
                .or_default()
                .update(true);
            if !rising {
                continue;
            }
            if self.counts_as(code, *with_alt, NavAction::Advance, mode) {
                intent.advance = true;
            }
            if self.counts_as(code, *with_alt, NavAction::Retreat, mode) {
                intent.retreat = true;
            }
        }

        match self.pending_swipe.take() {
            Some(Swipe::Left) => intent.advance = true,
            Some(Swipe::Right) => intent.retreat = true,
            None => {}
        }
        intent
    }

    /// Drop all held keys, touches and latches (e.g. on focus loss).
    pub fn reset(&mut self) {
        self.held.clear();
        self.tapped.clear();
        self.alt_pressed = false;
        self.pending_swipe = None;
        self.key_edges.clear();
        self.swipes = SwipeTracker::new(self.navigation.swipe_threshold);
    }

    /// Keys whose level is high this tick (held, or tapped since the last
    /// sample), each with whether Alt was down when it was pressed. Drains
    /// the tap list.
    fn key_levels(&mut self) -> FxHashMap<String, bool> {
        let mut levels = self.held.clone();
        for press in self.tapped.drain(..) {
            let with_alt = levels.entry(press.code).or_insert(press.with_alt);
            *with_alt |= press.with_alt;
        }
        levels
    }

    fn counts_as(
        &self,
        code: &str,
        with_alt: bool,
        action: NavAction,
        mode: PresentationMode,
    ) -> bool {
        if self.key_bindings.lookup(code) != Some(action) {
            return false;
        }
        match mode {
            PresentationMode::Playback => true,
            PresentationMode::Authoring => {
                with_alt || !self.key_bindings.is_chorded(code)
            }
        }
    }
}
