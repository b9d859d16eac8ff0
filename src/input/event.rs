/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CameraCommand`](crate::camera::CameraCommand)
/// values. Keyboard state goes through
/// [`InputProcessor::handle_key`](super::InputProcessor::handle_key)
/// instead, since held keys drive per-frame movement rather than
/// one-off commands.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = input.handle_event(InputEvent::CursorMoved { x, y }) {
///     controller.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (grows downward).
        y: f32,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// The window lost keyboard focus; held keys will never see a release.
    FocusLost,
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit window event, if it is one the camera cares about.
    pub fn from_window_event(
        event: &winit::event::WindowEvent,
    ) -> Option<Self> {
        use winit::event::{MouseScrollDelta, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::Focused(false) => Some(Self::FocusLost),
            _ => None,
        }
    }
}

/// Extract `(key string, pressed)` from a winit keyboard event.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format
/// (`"KeyW"`, `"ShiftLeft"`, ...), matching the option files.
#[cfg(feature = "viewer")]
pub fn key_input(event: &winit::event::WindowEvent) -> Option<(String, bool)> {
    use winit::event::{ElementState, WindowEvent};
    use winit::keyboard::PhysicalKey;

    let WindowEvent::KeyboardInput { event, .. } = event else {
        return None;
    };
    let PhysicalKey::Code(code) = event.physical_key else {
        return None;
    };
    Some((format!("{code:?}"), event.state == ElementState::Pressed))
}
