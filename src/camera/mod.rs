//! Free-look camera.
//!
//! Provides a yaw/pitch camera with movement, look, zoom and view-matrix
//! construction, plus the projection, GPU uniform and command-driven
//! controller built around it.

/// Camera command vocabulary and movement modes.
pub mod command;
/// Command executor owning camera, projection and uniform.
pub mod controller;
/// Core camera struct and its defaults.
pub mod core;
/// Perspective projection parameters.
pub mod projection;
/// GPU uniform block.
pub mod uniform;

pub use self::command::{CameraCommand, MovementMode};
pub use self::controller::CameraController;
pub use self::core::Camera;
pub use self::projection::{ClipDepth, Projection};
pub use self::uniform::CameraUniform;
