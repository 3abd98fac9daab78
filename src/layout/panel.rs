use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::render::PanelUniforms;

/// Placement of a panel in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelTransform {
    /// World-space center of the panel.
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
}

impl PanelTransform {
    /// Rotation as a quaternion.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Model matrix (rotation, then translation).
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position)
    }
}

/// One image panel on the strip.
///
/// `target_x`/`current_x` are strip offsets; `transform` and `uniforms`
/// hold what was last pushed to the render surface and are only refreshed
/// while the panel is inside the visibility margin.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Logical slot on the strip. Fixed for the session.
    pub index: usize,
    /// Wrapped slot offset for the current scroll position.
    pub target_x: f32,
    /// Smoothed offset actually rendered.
    pub current_x: f32,
    /// Smoothed roll angle.
    pub current_rotation: f32,
    /// Roll angle the panel is easing toward.
    pub target_rotation: f32,
    /// Smoothed per-panel shader distortion.
    pub current_distortion: f32,
    /// Inside the visibility margin on the latest frame.
    pub visible: bool,
    /// Texture finished loading.
    pub texture_ready: bool,
    /// Last applied placement.
    pub transform: PanelTransform,
    /// Last applied shader parameters.
    pub uniforms: PanelUniforms,
}

impl Panel {
    /// Panel parked at the strip origin.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self {
            index,
            target_x: 0.0,
            current_x: 0.0,
            current_rotation: 0.0,
            target_rotation: 0.0,
            current_distortion: 0.0,
            visible: true,
            texture_ready: false,
            transform: PanelTransform::default(),
            uniforms: PanelUniforms::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_matrix_translates_and_rolls() {
        let transform = PanelTransform {
            position: Vec3::new(2.0, 0.0, -0.1),
            rotation: Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2),
        };
        let m = transform.model_matrix();
        let origin = m.transform_point3(Vec3::ZERO);
        assert!((origin - transform.position).length() < 1e-6);
        // +X of the panel rolls onto +Y.
        let tip = m.transform_vector3(Vec3::X);
        assert!((tip - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn new_panel_is_parked() {
        let panel = Panel::new(3);
        assert_eq!(panel.index, 3);
        assert_eq!(panel.current_x, 0.0);
        assert!(!panel.texture_ready);
    }
}
