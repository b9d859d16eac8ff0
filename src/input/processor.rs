//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! held movement keys) and the key-binding map. It is the only thing that
//! sits between raw window events and
//! [`CameraController`](crate::camera::CameraController).

use super::event::InputEvent;
use super::keyboard::{KeyState, MovementIntent};
use super::mouse::MouseTracker;
use crate::camera::CameraCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`CameraCommand`]s and per-frame
/// [`MovementIntent`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event handler:
/// if let Some(cmd) = input.handle_event(event) {
///     controller.execute(cmd);
/// }
/// input.handle_key("KeyW", true);
///
/// // Once per frame:
/// controller.apply_movement(input.movement_intent(), clock.tick());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Cursor position tracking with first-sample suppression.
    mouse: MouseTracker,
    /// Which movement actions are held.
    keys: KeyState,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings. Held keys are released since their
    /// meaning may have changed.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
        self.keys.clear();
    }

    /// Forget the last cursor position, e.g. after re-capturing the cursor.
    pub fn reset_mouse(&mut self) {
        self.mouse.reset();
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let offset = self.mouse.handle_position(x, y)?;
                Some(CameraCommand::Rotate {
                    x_offset: offset.x,
                    y_offset: offset.y,
                })
            }
            InputEvent::Scroll { delta } => Some(CameraCommand::Zoom { delta }),
            InputEvent::FocusLost => {
                self.keys.clear();
                self.mouse.reset();
                None
            }
        }
    }

    /// Record a physical key press or release. Unbound keys are ignored.
    pub fn handle_key(&mut self, key: &str, pressed: bool) {
        match self.key_bindings.lookup(key) {
            Some(action) => self.keys.set(action, pressed),
            None => log::trace!("unbound key {key}"),
        }
    }

    /// Movement keys held right now.
    #[must_use]
    pub fn movement_intent(&self) -> MovementIntent {
        self.keys.intent()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::input::MoveAction;

    #[test]
    fn cursor_motion_becomes_rotation_after_first_sample() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 }),
            None
        );
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 420.0, y: 310.0 }),
            Some(CameraCommand::Rotate {
                x_offset: 20.0,
                y_offset: -10.0,
            })
        );
    }

    #[test]
    fn scroll_becomes_zoom() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 2.0 }),
            Some(CameraCommand::Zoom { delta: 2.0 })
        );
    }

    #[test]
    fn default_bindings_drive_intent() {
        let mut input = InputProcessor::new();
        input.handle_key("KeyW", true);
        input.handle_key("ShiftLeft", true);
        input.handle_key("KeyZ", true);

        let intent = input.movement_intent();
        assert!(intent.forward && intent.accelerate);
        assert!(!intent.backward && !intent.left && !intent.right);

        input.handle_key("KeyW", false);
        assert!(input.movement_intent().is_idle());
    }

    #[test]
    fn focus_loss_releases_keys_and_mouse() {
        let mut input = InputProcessor::new();
        input.handle_key("KeyD", true);
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });

        assert_eq!(input.handle_event(InputEvent::FocusLost), None);
        assert!(input.movement_intent().is_idle());
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 50.0, y: 50.0 }),
            None
        );
    }

    #[test]
    fn custom_bindings() {
        let bindings = KeybindingOptions::new(HashMap::from([
            (MoveAction::Forward, "ArrowUp".into()),
            (MoveAction::Backward, "ArrowDown".into()),
        ]));
        let mut input = InputProcessor::with_key_bindings(bindings);

        input.handle_key("KeyW", true);
        assert!(input.movement_intent().is_idle());
        input.handle_key("ArrowDown", true);
        assert!(input.movement_intent().backward);
    }
}
