//! Input handling: event types, key and cursor state, and the input
//! processor that converts raw window events into camera commands.

/// Platform-agnostic input events.
pub mod event;
/// Movement actions and held-key state.
pub mod keyboard;
/// Cursor tracking with first-sample suppression.
pub mod mouse;
/// Converts raw events into camera commands.
pub mod processor;

#[cfg(feature = "viewer")]
pub use event::key_input;
pub use event::InputEvent;
pub use keyboard::{KeyState, MoveAction, MovementIntent};
pub use mouse::MouseTracker;
pub use processor::InputProcessor;
