use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Per-panel shader parameters.
///
/// Layout matches the `PanelUniforms` block in `panel.wgsl`: 32 bytes,
/// `direction` 8-byte aligned at offset 8.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct PanelUniforms {
    /// Smoothed per-panel distortion.
    pub distortion: f32,
    /// Animation clock, already scaled by the wave speed.
    pub time: f32,
    /// Damped movement direction.
    pub direction: [f32; 2],
    /// `|direction|` clamped to 1.
    pub directional_influence: f32,
    /// 1 once the panel's texture has loaded; 0 draws the untextured
    /// backdrop instead.
    pub textured: f32,
    _padding: [f32; 2],
}

impl PanelUniforms {
    /// Uniforms for one panel and frame.
    #[must_use]
    pub fn new(
        distortion: f32,
        time: f32,
        direction: Vec2,
        directional_influence: f32,
    ) -> Self {
        Self {
            distortion,
            time,
            direction: direction.to_array(),
            directional_influence,
            textured: 0.0,
            _padding: [0.0; 2],
        }
    }

    /// Same uniforms with the texture flag set from `ready`.
    #[must_use]
    pub fn with_texture_ready(mut self, ready: bool) -> Self {
        self.textured = if ready { 1.0 } else { 0.0 };
        self
    }
}
