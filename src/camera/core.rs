use glam::{Mat4, Vec3, Vec4};

use crate::options::CameraOptions;

/// World-space up direction used to derive the right vector.
pub const WORLD_UP: Vec3 = Vec3::Y;
/// Initial yaw in degrees; looks down negative Z.
pub const DEFAULT_YAW: f32 = -90.0;
/// Initial pitch in degrees.
pub const DEFAULT_PITCH: f32 = 0.0;
/// Base movement speed in world units per second.
pub const DEFAULT_SPEED: f32 = 2.5;
/// Degrees of rotation per unit of raw mouse delta.
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
/// Initial vertical field of view in degrees.
pub const DEFAULT_FOV_Y: f32 = 45.0;
/// Default multiplier applied by [`Camera::accelerate_default`].
pub const DEFAULT_ACCELERATION: f32 = 2.0;
/// Narrowest field of view reachable through [`Camera::zoom`].
pub const MIN_FOV_Y: f32 = 1.0;
/// Widest field of view reachable through [`Camera::zoom`].
pub const MAX_FOV_Y: f32 = DEFAULT_FOV_Y;
/// Pitch limit (degrees, symmetric) applied when rotation is constrained.
pub const MAX_PITCH: f32 = 89.0;

/// Free-look camera driven by yaw/pitch Euler angles.
///
/// The `forward`, `right` and `up` vectors are derived from the angles and
/// are only exposed read-only, so they always form an orthonormal basis
/// consistent with the current yaw and pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    speed: f32,
    base_speed: f32,
    sensitivity: f32,
    fov_y: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Create a camera at `position` with the default orientation.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, DEFAULT_YAW, DEFAULT_PITCH)
    }

    /// Create a camera at `position` looking along `yaw`/`pitch` (degrees).
    ///
    /// The pitch is taken as given; only [`Camera::rotate`] clamps it.
    #[must_use]
    pub fn with_orientation(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            yaw,
            pitch,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            speed: DEFAULT_SPEED,
            base_speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
            fov_y: DEFAULT_FOV_Y,
        };
        camera.update_basis();
        camera
    }

    /// Build a camera from configuration values.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut camera = Self::with_orientation(
            Vec3::from_array(options.position),
            options.yaw,
            options.pitch,
        );
        camera.base_speed = options.speed;
        camera.speed = options.speed;
        camera.sensitivity = options.sensitivity;
        camera.fov_y = options.fov_y.clamp(MIN_FOV_Y, MAX_FOV_Y);
        camera
    }

    /// Eye position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Yaw in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit look direction.
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Unit vector pointing to the camera's right.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit vector pointing up relative to the camera.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Speed used by the next [`Camera::translate`] call.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Speed restored after every translation.
    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    /// Degrees of rotation per unit of input delta.
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Vertical field of view in degrees.
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Forward direction flattened onto the XZ plane.
    ///
    /// Not renormalized: looking steeply up or down slows ground movement,
    /// the same as feeding `(forward.x, 0, forward.z)` to
    /// [`Camera::translate`] directly.
    pub fn ground_forward(&self) -> Vec3 {
        Vec3::new(self.forward.x, 0.0, self.forward.z)
    }

    /// Right direction flattened onto the XZ plane.
    pub fn ground_right(&self) -> Vec3 {
        Vec3::new(self.right.x, 0.0, self.right.z)
    }

    /// Move the eye to `position`.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Replace the rotation sensitivity.
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Replace the base speed. Any pending acceleration is discarded.
    pub fn set_base_speed(&mut self, speed: f32) {
        self.base_speed = speed;
        self.speed = speed;
    }

    /// Set yaw and pitch (degrees) directly and recompute the basis.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
        self.update_basis();
    }

    /// Move by `direction * speed * delta_time`, then drop any acceleration.
    pub fn translate(&mut self, direction: Vec3, delta_time: f32) {
        self.position += direction * self.speed * delta_time;
        self.speed = self.base_speed;
    }

    /// Turn the camera by raw input offsets scaled by the sensitivity.
    ///
    /// With `constrain_pitch` the pitch is held within ±[`MAX_PITCH`] so the
    /// view never flips over the poles.
    pub fn rotate(
        &mut self,
        x_offset: f32,
        y_offset: f32,
        constrain_pitch: bool,
    ) {
        let yaw = self.yaw + x_offset * self.sensitivity;
        let pitch = self.pitch + y_offset * self.sensitivity;
        if !yaw.is_finite() || !pitch.is_finite() {
            log::warn!("ignoring non-finite rotation ({x_offset}, {y_offset})");
            return;
        }

        self.yaw = yaw;
        self.pitch = pitch;

        if constrain_pitch {
            let clamped = self.pitch.clamp(-MAX_PITCH, MAX_PITCH);
            if clamped != self.pitch {
                log::debug!("pitch {} clamped to {clamped}", self.pitch);
            }
            self.pitch = clamped;
        }

        self.update_basis();
    }

    /// Narrow (positive offset) or widen the field of view.
    pub fn zoom(&mut self, y_offset: f32) {
        if y_offset.is_nan() {
            log::warn!("ignoring NaN zoom offset");
            return;
        }

        let fov_y = self.fov_y - y_offset;
        self.fov_y = fov_y.clamp(MIN_FOV_Y, MAX_FOV_Y);
        if self.fov_y != fov_y {
            log::debug!("fov {fov_y} clamped to {}", self.fov_y);
        }
    }

    /// Scale the speed of the next translation by `factor`.
    pub fn accelerate(&mut self, factor: f32) {
        self.speed = self.base_speed * factor;
    }

    /// [`Camera::accelerate`] with [`DEFAULT_ACCELERATION`].
    pub fn accelerate_default(&mut self) {
        self.accelerate(DEFAULT_ACCELERATION);
    }

    /// World-to-camera transform: basis rotation composed with a
    /// translation by `-position`.
    pub fn view_matrix(&self) -> Mat4 {
        let (r, u, f) = (self.right, self.up, self.forward);
        let rotation = Mat4::from_cols(
            Vec4::new(r.x, u.x, -f.x, 0.0),
            Vec4::new(r.y, u.y, -f.y, 0.0),
            Vec4::new(r.z, u.z, -f.z, 0.0),
            Vec4::W,
        );
        rotation * Mat4::from_translation(-self.position)
    }

    fn update_basis(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());

        self.forward = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        // Looking straight along the world up axis leaves the cross product
        // degenerate; fall back to the horizontal right for this yaw.
        self.right = self
            .forward
            .cross(WORLD_UP)
            .try_normalize()
            .unwrap_or_else(|| Vec3::new(-yaw.sin(), 0.0, yaw.cos()));
        self.up = self.right.cross(self.forward).normalize();
    }
}
