//! Centralized presentation options with TOML preset support.
//!
//! All tweakable settings (live camera projection, player behavior, touch
//! navigation, keybindings, editor preview, discovery tags) are consolidated
//! here. Options serialize to/from TOML so a presentation can ship a preset
//! next to its scene file.

mod camera;
mod discovery;
mod keybindings;
mod navigation;
mod player;
mod preview;

use std::path::Path;

pub use camera::CameraOptions;
pub use discovery::DiscoveryOptions;
pub use keybindings::KeybindingOptions;
pub use navigation::NavigationOptions;
pub use player::PlayerOptions;
pub use preview::PreviewOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LociError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[navigation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Live camera projection parameters.
    pub camera: CameraOptions,
    /// Player behavior.
    pub player: PlayerOptions,
    /// Touch navigation parameters.
    pub navigation: NavigationOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Editor preview options.
    pub preview: PreviewOptions,
    /// Slide/section discovery options.
    pub discovery: DiscoveryOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, LociError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| LociError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, LociError> {
        let content = std::fs::read_to_string(path).map_err(LociError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), LociError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LociError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(LociError::Io)?;
        }
        std::fs::write(path, content).map_err(LociError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
