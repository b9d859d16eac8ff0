use glam::Mat4;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::ProjectionOptions;

/// Clip-space depth convention of the target graphics API.
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
pub enum ClipDepth {
    /// OpenGL convention, depth in [-1, 1].
    #[default]
    NegativeOneToOne,
    /// wgpu/Vulkan/D3D convention, depth in [0, 1].
    ZeroToOne,
}

/// Perspective projection parameters. The field of view comes from the
/// camera so that zooming only has to touch one value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub z_near: f32,
    /// Far clipping plane distance.
    pub z_far: f32,
    /// Depth range the matrix maps into.
    pub depth: ClipDepth,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            aspect: 800.0 / 600.0,
            z_near: 0.1,
            z_far: 100.0,
            depth: ClipDepth::NegativeOneToOne,
        }
    }
}

impl Projection {
    /// Build projection parameters for a `width` x `height` viewport.
    #[must_use]
    pub fn new(width: u32, height: u32, options: &ProjectionOptions) -> Self {
        let mut projection = Self {
            z_near: options.z_near,
            z_far: options.z_far,
            depth: options.depth,
            ..Self::default()
        };
        projection.resize(width, height);
        projection
    }

    /// Update the aspect ratio after a framebuffer resize.
    ///
    /// A zero-sized dimension (minimized window) keeps the previous aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("ignoring degenerate viewport {width}x{height}");
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// Right-handed perspective matrix for a vertical fov in degrees.
    pub fn matrix(&self, fov_y_degrees: f32) -> Mat4 {
        let fov = fov_y_degrees.to_radians();
        match self.depth {
            ClipDepth::NegativeOneToOne => Mat4::perspective_rh_gl(
                fov,
                self.aspect,
                self.z_near,
                self.z_far,
            ),
            ClipDepth::ZeroToOne => {
                Mat4::perspective_rh(fov, self.aspect, self.z_near, self.z_far)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec3, Vec4};

    use super::*;

    #[test]
    fn resize_updates_aspect() {
        let mut projection = Projection::default();
        projection.resize(1920, 1080);
        assert!((projection.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn zero_height_keeps_previous_aspect() {
        let mut projection = Projection::default();
        let before = projection.aspect;
        projection.resize(1024, 0);
        assert_eq!(projection.aspect, before);
    }

    #[test]
    fn near_plane_maps_to_depth_convention() {
        let mut projection = Projection::default();
        let near = Vec4::new(0.0, 0.0, -projection.z_near, 1.0);

        let clip = projection.matrix(45.0) * near;
        assert!((clip.z / clip.w + 1.0).abs() < 1e-4);

        projection.depth = ClipDepth::ZeroToOne;
        let clip = projection.matrix(45.0) * near;
        assert!((clip.z / clip.w).abs() < 1e-4);
    }

    #[test]
    fn narrower_fov_magnifies() {
        let projection = Projection::default();
        let point = Vec3::new(1.0, 1.0, -10.0);
        let wide = projection.matrix(45.0).project_point3(point);
        let narrow = projection.matrix(10.0).project_point3(point);
        assert!(narrow.y.abs() > wide.y.abs());
    }
}
