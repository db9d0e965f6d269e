//! Presentation mode selected when a session is constructed.

use serde::{Deserialize, Serialize};

/// Whether the session is being edited or played to an audience.
///
/// Authoring discovers slides flat in scene order and keeps the editor
/// preview in sync. Playback groups slides by section, disables the slide
/// cameras and leaves the editor alone.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PresentationMode {
    /// Editing the presentation inside the host editor.
    #[default]
    Authoring,
    /// Presenting to an audience.
    Playback,
}

impl PresentationMode {
    /// Whether the presentation is running for an audience.
    #[must_use]
    pub fn is_playing(self) -> bool {
        self == Self::Playback
    }

    /// Whether discovery groups slides by section.
    #[must_use]
    pub fn is_sectioned(self) -> bool {
        self.is_playing()
    }
}

impl std::fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authoring => f.write_str("authoring"),
            Self::Playback => f.write_str("playback"),
        }
    }
}
