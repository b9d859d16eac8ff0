use glam::Mat4;

use super::core::Camera;
use super::projection::Projection;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding the camera matrices and eye metadata.
///
/// Layout matches a std140 block of three `mat4`s followed by two `vec4`s.
pub struct CameraUniform {
    /// World-to-camera matrix.
    pub view: [[f32; 4]; 4],
    /// Camera-to-clip matrix.
    pub projection: [[f32; 4]; 4],
    /// Combined `projection * view`.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity matrices, looking down negative Z.
    pub fn new() -> Self {
        let identity = Mat4::IDENTITY.to_cols_array_2d();
        Self {
            view: identity,
            projection: identity,
            view_proj: identity,
            position: [0.0; 3],
            fov_y: 45.0,
            forward: [0.0, 0.0, -1.0],
            _pad: 0.0,
        }
    }

    /// Refresh every field from the camera and projection.
    pub fn update(&mut self, camera: &Camera, projection: &Projection) {
        let view = camera.view_matrix();
        let proj = projection.matrix(camera.fov_y());
        self.view = view.to_cols_array_2d();
        self.projection = proj.to_cols_array_2d();
        self.view_proj = (proj * view).to_cols_array_2d();
        self.position = camera.position().to_array();
        self.fov_y = camera.fov_y();
        self.forward = camera.forward().to_array();
    }

    /// Raw bytes ready for a buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn uniform_is_std140_sized() {
        assert_eq!(CameraUniform::new().as_bytes().len(), 3 * 64 + 2 * 16);
    }

    #[test]
    fn update_copies_camera_state() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        camera.zoom(5.0);
        let projection = Projection::default();

        let mut uniform = CameraUniform::new();
        uniform.update(&camera, &projection);

        assert_eq!(uniform.position, [0.0, 0.0, 3.0]);
        assert_eq!(uniform.fov_y, 40.0);
        let expected = projection.matrix(40.0) * camera.view_matrix();
        assert_eq!(uniform.view_proj, expected.to_cols_array_2d());
    }
}
