use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::MoveAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "BindingTable", into = "BindingTable")]
/// Configurable keyboard bindings mapping movement actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `Forward` → `"KeyW"`).
    pub bindings: HashMap<MoveAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    key_to_action: HashMap<String, MoveAction>,
}

/// On-disk shape; the reverse map is never serialized.
#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct BindingTable {
    bindings: HashMap<MoveAction, String>,
}

impl From<BindingTable> for KeybindingOptions {
    fn from(table: BindingTable) -> Self {
        Self::new(table.bindings)
    }
}

impl From<KeybindingOptions> for BindingTable {
    fn from(opts: KeybindingOptions) -> Self {
        Self {
            bindings: opts.bindings,
        }
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self::new(HashMap::from([
            (MoveAction::Forward, "KeyW".into()),
            (MoveAction::Backward, "KeyS".into()),
            (MoveAction::Left, "KeyA".into()),
            (MoveAction::Right, "KeyD".into()),
            (MoveAction::Accelerate, "ShiftLeft".into()),
        ]))
    }
}

impl KeybindingOptions {
    /// Build from an action → key map.
    #[must_use]
    pub fn new(bindings: HashMap<MoveAction, String>) -> Self {
        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }

    /// Bind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: MoveAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Rebuild the reverse lookup map (key string → action).
    ///
    /// When one key is bound to several actions, the action declared first
    /// in [`MoveAction`] wins.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for action in MoveAction::ALL {
            let Some(key) = self.bindings.get(&action) else {
                continue;
            };
            if let Some(kept) = self.key_to_action.get(key) {
                log::warn!(
                    "key {key} bound to both {kept:?} and {action:?}; \
                     keeping {kept:?}"
                );
                continue;
            }
            let _ = self.key_to_action.insert(key.clone(), action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<MoveAction> {
        self.key_to_action.get(key).copied()
    }
}
