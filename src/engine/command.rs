//! The presenter's complete navigation vocabulary.
//!
//! Every slide change, whether triggered by a key press, a swipe, an editor
//! shortcut or a programmatic call, is represented as a `PresenterCommand`.
//! Consumers construct commands and pass them to
//! [`PresentationEngine::execute`](super::PresentationEngine::execute).

/// A navigation command applied to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterCommand {
    /// Move to the next slide, saturating at the last.
    Advance,
    /// Move to the previous slide, saturating at the first.
    Retreat,
    /// Jump to a slide by deck index (clamped into range).
    GoTo {
        /// Target deck index.
        index: usize,
    },
    /// Rebuild the deck from the scene.
    Rescan,
}

