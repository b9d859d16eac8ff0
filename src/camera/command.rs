//! The camera's complete interactive vocabulary.
//!
//! Every camera change, whether triggered by mouse movement, the scroll
//! wheel, or a programmatic call, is represented as a `CameraCommand`.
//! Consumers construct commands and pass them to
//! [`CameraController::execute`](super::controller::CameraController::execute).
//!
//! ```ignore
//! controller.execute(CameraCommand::Zoom { delta: 1.0 });
//! ```

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How held movement keys translate the camera.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MovementMode {
    /// Move freely along the look direction.
    #[default]
    Fly,
    /// Stay on the ground plane; forward/backward ignore pitch.
    Ground,
}

/// A single camera operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Turn by raw input offsets (scaled by the camera sensitivity).
    Rotate {
        /// Horizontal offset; positive turns right.
        x_offset: f32,
        /// Vertical offset; positive looks up.
        y_offset: f32,
    },
    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
    /// Speed up the next translation.
    Accelerate {
        /// Multiplier applied to the base speed.
        factor: f32,
    },
    /// Move along an arbitrary world-space direction.
    Translate {
        /// Direction (not required to be unit length).
        direction: Vec3,
        /// Frame time in seconds.
        delta_time: f32,
    },
    /// Switch between free flight and ground-locked movement.
    SetMovementMode(MovementMode),
    /// Rebuild the camera from its configured initial state.
    Reset,
}
