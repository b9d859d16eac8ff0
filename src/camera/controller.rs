use glam::{Mat4, Vec3};

use super::command::{CameraCommand, MovementMode};
use super::core::Camera;
use super::projection::Projection;
use super::uniform::CameraUniform;
use crate::input::MovementIntent;
use crate::options::{CameraOptions, Options};

/// Owns the camera, its projection and the GPU uniform mirror, and applies
/// commands and per-frame movement to them.
pub struct CameraController {
    camera: Camera,
    projection: Projection,
    uniform: CameraUniform,
    initial: CameraOptions,
    movement_mode: MovementMode,
    constrain_pitch: bool,
    accelerate_factor: f32,
}

impl CameraController {
    /// Create a controller for a `width` x `height` viewport.
    #[must_use]
    pub fn new(width: u32, height: u32, options: &Options) -> Self {
        let camera = Camera::from_options(&options.camera);
        let projection = Projection::new(width, height, &options.projection);

        let mut uniform = CameraUniform::new();
        uniform.update(&camera, &projection);

        Self {
            camera,
            projection,
            uniform,
            initial: options.camera.clone(),
            movement_mode: options.camera.movement_mode,
            constrain_pitch: options.camera.constrain_pitch,
            accelerate_factor: options.camera.accelerate_factor,
        }
    }

    /// The controlled camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access for direct manipulation outside the command set.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Current projection parameters.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Uniform contents as of the last [`Self::refresh_uniform`].
    pub fn uniform(&self) -> &CameraUniform {
        &self.uniform
    }

    /// Active movement mode.
    pub fn movement_mode(&self) -> MovementMode {
        self.movement_mode
    }

    /// Whether mouse rotation clamps the pitch.
    pub fn constrain_pitch(&self) -> bool {
        self.constrain_pitch
    }

    /// Apply a single command.
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::Rotate { x_offset, y_offset } => {
                self.camera.rotate(x_offset, y_offset, self.constrain_pitch);
            }
            CameraCommand::Zoom { delta } => self.camera.zoom(delta),
            CameraCommand::Accelerate { factor } => {
                self.camera.accelerate(factor);
            }
            CameraCommand::Translate {
                direction,
                delta_time,
            } => self.camera.translate(direction, delta_time),
            CameraCommand::SetMovementMode(mode) => {
                log::debug!(
                    "movement mode {:?} -> {mode:?}",
                    self.movement_mode
                );
                self.movement_mode = mode;
            }
            CameraCommand::Reset => self.reset(),
        }
    }

    /// Move the camera according to the keys held this frame.
    ///
    /// Acceleration is applied first, then each held direction is a separate
    /// translation in forward, backward, left, right order. Because every
    /// translation drops the acceleration, only the first direction moved
    /// in a frame is sped up. Acceleration held without a direction stays
    /// pending until the next translation.
    pub fn apply_movement(&mut self, intent: MovementIntent, delta_time: f32) {
        if intent.accelerate {
            self.camera.accelerate(self.accelerate_factor);
        }
        if intent.is_idle() {
            return;
        }
        log::trace!("movement {intent:?} over {delta_time}s");

        let forward = match self.movement_mode {
            MovementMode::Fly => self.camera.forward(),
            MovementMode::Ground => self.camera.ground_forward(),
        };
        let right = self.camera.right();

        let steps: [(bool, Vec3); 4] = [
            (intent.forward, forward),
            (intent.backward, -forward),
            (intent.left, -right),
            (intent.right, right),
        ];
        for (held, direction) in steps {
            if held {
                self.camera.translate(direction, delta_time);
            }
        }
    }

    /// Update the aspect ratio after a framebuffer resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    /// Recompute the uniform from the current camera and projection.
    pub fn refresh_uniform(&mut self) {
        self.uniform.update(&self.camera, &self.projection);
    }

    /// World-to-camera matrix.
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    /// Projection matrix using the camera's current field of view.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix(self.camera.fov_y())
    }

    /// Restore the camera to its configured initial state.
    pub fn reset(&mut self) {
        self.camera = Camera::from_options(&self.initial);
        self.movement_mode = self.initial.movement_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::core::{DEFAULT_SPEED, MAX_PITCH};

    const EPS: f32 = 1e-5;

    fn controller() -> CameraController {
        CameraController::new(800, 600, &Options::default())
    }

    fn forward_only() -> MovementIntent {
        MovementIntent {
            forward: true,
            ..MovementIntent::default()
        }
    }

    #[test]
    fn starts_from_options() {
        let ctrl = controller();
        assert!(ctrl
            .camera()
            .position()
            .abs_diff_eq(Vec3::new(0.0, 0.0, 3.0), EPS));
        assert_eq!(ctrl.movement_mode(), MovementMode::Fly);
        assert!((ctrl.projection().aspect - 800.0 / 600.0).abs() < EPS);
    }

    #[test]
    fn rotate_command_respects_pitch_constraint() {
        let mut ctrl = controller();
        ctrl.execute(CameraCommand::Rotate {
            x_offset: 0.0,
            y_offset: 5000.0,
        });
        assert_eq!(ctrl.camera().pitch(), MAX_PITCH);
    }

    #[test]
    fn fly_mode_follows_pitch() {
        let mut ctrl = controller();
        ctrl.camera_mut().set_orientation(-90.0, 45.0);
        ctrl.apply_movement(forward_only(), 1.0);
        assert!(ctrl.camera().position().y > 0.0);
    }

    #[test]
    fn ground_mode_stays_on_plane() {
        let mut ctrl = controller();
        ctrl.execute(CameraCommand::SetMovementMode(MovementMode::Ground));
        ctrl.camera_mut().set_orientation(-90.0, 45.0);
        let start = ctrl.camera().position();

        ctrl.apply_movement(forward_only(), 1.0);
        let pos = ctrl.camera().position();
        assert_eq!(pos.y, start.y);
        let expected = DEFAULT_SPEED * 45.0_f32.to_radians().cos();
        assert!(((start.z - pos.z) - expected).abs() < 1e-4);
    }

    #[test]
    fn accelerate_only_speeds_first_held_direction() {
        let mut ctrl = controller();
        let intent = MovementIntent {
            forward: true,
            right: true,
            accelerate: true,
            ..MovementIntent::default()
        };
        let start = ctrl.camera().position();
        ctrl.apply_movement(intent, 1.0);
        let moved = ctrl.camera().position() - start;

        // Forward (-Z) got the doubled speed, right (+X) the base speed.
        assert!((moved.z + 2.0 * DEFAULT_SPEED).abs() < 1e-4);
        assert!((moved.x - DEFAULT_SPEED).abs() < 1e-4);
        assert_eq!(ctrl.camera().speed(), DEFAULT_SPEED);
    }

    #[test]
    fn accelerate_without_direction_carries_to_next_frame() {
        let mut ctrl = controller();
        let shift_only = MovementIntent {
            accelerate: true,
            ..MovementIntent::default()
        };
        let start = ctrl.camera().position();
        ctrl.apply_movement(shift_only, 1.0);
        assert_eq!(ctrl.camera().position(), start);
        assert_eq!(ctrl.camera().speed(), 2.0 * DEFAULT_SPEED);

        ctrl.apply_movement(forward_only(), 1.0);
        let moved = start.z - ctrl.camera().position().z;
        assert!((moved - 2.0 * DEFAULT_SPEED).abs() < 1e-4);
        assert_eq!(ctrl.camera().speed(), DEFAULT_SPEED);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut ctrl = controller();
        let start = ctrl.camera().position();
        let intent = MovementIntent {
            left: true,
            right: true,
            ..MovementIntent::default()
        };
        ctrl.apply_movement(intent, 0.25);
        assert!(ctrl.camera().position().abs_diff_eq(start, EPS));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut ctrl = controller();
        ctrl.execute(CameraCommand::Zoom { delta: 30.0 });
        ctrl.execute(CameraCommand::Translate {
            direction: Vec3::Y,
            delta_time: 3.0,
        });
        ctrl.execute(CameraCommand::SetMovementMode(MovementMode::Ground));
        ctrl.execute(CameraCommand::Reset);

        let fresh = controller();
        assert_eq!(ctrl.camera(), fresh.camera());
        assert_eq!(ctrl.movement_mode(), MovementMode::Fly);
    }

    #[test]
    fn refresh_uniform_tracks_zoom() {
        let mut ctrl = controller();
        ctrl.execute(CameraCommand::Zoom { delta: 15.0 });
        assert_eq!(ctrl.uniform().fov_y, 45.0);
        ctrl.refresh_uniform();
        assert_eq!(ctrl.uniform().fov_y, 30.0);
        assert_eq!(
            ctrl.uniform().projection,
            ctrl.projection_matrix().to_cols_array_2d()
        );
    }
}
