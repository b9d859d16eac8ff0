use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Camera movement actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// forward = "KeyW"
/// accelerate = "ShiftLeft"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MoveAction {
    /// Move along the look direction.
    Forward,
    /// Move against the look direction.
    Backward,
    /// Strafe left.
    Left,
    /// Strafe right.
    Right,
    /// Speed up while held.
    Accelerate,
}

impl MoveAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Accelerate,
    ];
}

/// Which movement actions are held during the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct MovementIntent {
    /// Forward key held.
    pub forward: bool,
    /// Backward key held.
    pub backward: bool,
    /// Strafe-left key held.
    pub left: bool,
    /// Strafe-right key held.
    pub right: bool,
    /// Accelerate key held.
    pub accelerate: bool,
}

impl MovementIntent {
    /// True when no key that moves the camera is held.
    ///
    /// Accelerate alone does not count: without a direction it has nothing
    /// to act on.
    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.left || self.right)
    }
}

/// Held-state of movement actions.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<MoveAction>,
}

impl KeyState {
    /// Record a press or release.
    pub fn set(&mut self, action: MoveAction, pressed: bool) {
        if pressed {
            let _ = self.held.insert(action);
        } else {
            let _ = self.held.remove(&action);
        }
    }

    /// Whether `action` is currently held.
    pub fn is_held(&self, action: MoveAction) -> bool {
        self.held.contains(&action)
    }

    /// Release everything.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Snapshot of the held actions.
    pub fn intent(&self) -> MovementIntent {
        MovementIntent {
            forward: self.is_held(MoveAction::Forward),
            backward: self.is_held(MoveAction::Backward),
            left: self.is_held(MoveAction::Left),
            right: self.is_held(MoveAction::Right),
            accelerate: self.is_held(MoveAction::Accelerate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut keys = KeyState::default();
        keys.set(MoveAction::Forward, true);
        keys.set(MoveAction::Accelerate, true);
        assert!(keys.intent().forward && keys.intent().accelerate);

        keys.set(MoveAction::Forward, false);
        assert!(!keys.is_held(MoveAction::Forward));
        assert!(keys.intent().is_idle());
    }

    #[test]
    fn repeated_press_is_idempotent() {
        let mut keys = KeyState::default();
        keys.set(MoveAction::Left, true);
        keys.set(MoveAction::Left, true);
        keys.set(MoveAction::Left, false);
        assert!(!keys.is_held(MoveAction::Left));
    }
}
