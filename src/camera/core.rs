use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Horizontal sway runs at this fraction of the vertical frequency.
const SWAY_X_FREQUENCY: f32 = 0.7;
/// Horizontal sway amplitude as a fraction of the vertical one.
const SWAY_X_AMPLITUDE: f32 = 0.5;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Camera {
    /// Camera on the +Z axis looking at the origin.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, options.distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: sanitize_aspect(aspect),
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Adopt new projection parameters, keeping the aspect ratio.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.eye.z = options.distance;
        self.fovy = options.fovy;
        self.znear = options.znear;
        self.zfar = options.zfar;
    }

    /// Match the aspect ratio of a `width × height` viewport.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = sanitize_aspect(width as f32 / height.max(1) as f32);
    }

    /// Idle sway: drift the eye on a slow Lissajous path around the
    /// axis, still looking at the origin.
    pub fn sway(&mut self, time: f32, options: &CameraOptions) {
        let phase = time * options.sway_frequency;
        self.eye.y = phase.sin() * options.sway_amplitude;
        self.eye.x = (phase * SWAY_X_FREQUENCY).cos()
            * options.sway_amplitude
            * SWAY_X_AMPLITUDE;
        self.target = Vec3::ZERO;
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Project a world-space point to normalized device coordinates.
    #[must_use]
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.build_matrix().project_point3(world)
    }
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::from_options(&CameraOptions::default(), 16.0 / 9.0)
    }

    #[test]
    fn origin_projects_to_center() {
        let ndc = camera().project(Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
    }

    #[test]
    fn right_of_center_projects_right() {
        let ndc = camera().project(Vec3::new(1.0, 0.0, 0.0));
        assert!(ndc.x > 0.0);
        assert!(ndc.y.abs() < 1e-6);
    }

    #[test]
    fn resize_guards_zero_height() {
        let mut camera = camera();
        camera.resize(800, 0);
        assert!(camera.aspect.is_finite());
        camera.resize(800, 400);
        assert!((camera.aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn zero_amplitude_sway_keeps_eye_on_axis() {
        let mut camera = camera();
        camera.sway(12.3, &CameraOptions::default());
        assert_eq!(camera.eye, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn sway_follows_lissajous_path() {
        let mut camera = camera();
        let options = CameraOptions {
            sway_amplitude: 1.0,
            ..CameraOptions::default()
        };
        camera.sway(0.0, &options);
        assert!((camera.eye.x - 0.5).abs() < 1e-6);
        assert!(camera.eye.y.abs() < 1e-6);
    }
}
