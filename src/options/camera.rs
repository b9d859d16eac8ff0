use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::core::{
    DEFAULT_ACCELERATION, DEFAULT_FOV_Y, DEFAULT_PITCH, DEFAULT_SENSITIVITY,
    DEFAULT_SPEED, DEFAULT_YAW,
};
use crate::camera::MovementMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera state and control parameters.
pub struct CameraOptions {
    /// Initial eye position in world space.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial yaw in degrees.
    #[schemars(title = "Yaw")]
    pub yaw: f32,
    /// Initial pitch in degrees.
    #[schemars(title = "Pitch")]
    pub pitch: f32,
    /// Base movement speed in world units per second.
    #[schemars(
        title = "Speed",
        range(min = 0.1, max = 50.0),
        extend("step" = 0.1)
    )]
    pub speed: f32,
    /// Degrees of rotation per pixel of mouse movement.
    #[schemars(
        title = "Sensitivity",
        range(min = 0.01, max = 1.0),
        extend("step" = 0.01)
    )]
    pub sensitivity: f32,
    /// Initial vertical field of view in degrees.
    #[schemars(
        title = "Field of View",
        range(min = 1.0, max = 45.0),
        extend("step" = 1.0)
    )]
    pub fov_y: f32,
    /// Speed multiplier while the accelerate key is held.
    #[schemars(
        title = "Acceleration",
        range(min = 1.0, max = 10.0),
        extend("step" = 0.5)
    )]
    pub accelerate_factor: f32,
    /// Clamp mouse-look pitch to ±89°.
    #[schemars(title = "Constrain Pitch")]
    pub constrain_pitch: bool,
    /// Free flight or ground-locked movement.
    #[schemars(title = "Movement")]
    pub movement_mode: MovementMode,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
            fov_y: DEFAULT_FOV_Y,
            accelerate_factor: DEFAULT_ACCELERATION,
            constrain_pitch: true,
            movement_mode: MovementMode::Fly,
        }
    }
}
