use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `Advance` → `"ArrowLeft"`).
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self {
            bindings: HashMap::from([
                (KeyAction::Advance, "ArrowLeft".into()),
                (KeyAction::Retreat, "ArrowRight".into()),
            ]),
        }
    }
}

impl KeybindingOptions {
    /// Look up the action bound to a key string. Unambiguous once
    /// [`shared_key`](Self::shared_key) is `None`, which
    /// [`Options::validate`](super::Options::validate) enforces.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
    }

    /// A key bound to more than one action, if any.
    #[must_use]
    pub fn shared_key(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.bindings
            .values()
            .find(|key| !seen.insert(key.as_str()))
            .map(String::as_str)
    }
}
