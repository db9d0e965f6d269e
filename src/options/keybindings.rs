use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::NavAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping navigation actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key strings (e.g. `Advance` → `["ArrowRight", "Space"]`).
    pub bindings: HashMap<NavAction, Vec<String>>,
    /// Keys that only navigate while Alt is held in authoring mode, so they
    /// stay free for the editor otherwise.
    pub chorded_while_authoring: Vec<String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, NavAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (
                NavAction::Advance,
                vec!["ArrowRight".into(), "Space".into()],
            ),
            (NavAction::Retreat, vec!["ArrowLeft".into()]),
        ]);

        let mut opts = Self {
            bindings,
            chorded_while_authoring: vec![
                "ArrowRight".into(),
                "ArrowLeft".into(),
            ],
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, keys) in &self.bindings {
            for key in keys {
                let _ = self.key_to_action.insert(key.clone(), *action);
            }
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<NavAction> {
        self.key_to_action.get(key).copied()
    }

    /// Whether `key` needs the Alt modifier while authoring.
    #[must_use]
    pub fn is_chorded(&self, key: &str) -> bool {
        self.chorded_while_authoring.iter().any(|k| k == key)
    }
}
