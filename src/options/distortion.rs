use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Distortion", inline)]
#[serde(default)]
/// Velocity-reactive warp, tilt and shader animation parameters.
pub struct DistortionOptions {
    /// Base per-frame multiplier applied to the distortion target while
    /// slowing down.
    #[schemars(title = "Decay", range(min = 0.8, max = 0.99), extend("step" = 0.005))]
    pub decay: f32,
    /// Upper bound of the shared distortion factor.
    #[schemars(title = "Max Distortion", range(min = 1.0, max = 8.0), extend("step" = 0.1))]
    pub max_distortion: f32,
    /// How strongly a touch fling drives distortion.
    #[schemars(title = "Sensitivity", range(min = 0.05, max = 1.0), extend("step" = 0.01))]
    pub sensitivity: f32,
    /// Per-frame smoothing of the distortion factor.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 0.5), extend("step" = 0.005))]
    pub smoothing: f32,
    /// Scale from shared factor to the per-panel shader distortion.
    #[schemars(title = "Intensity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub intensity: f32,
    /// Damping applied to the horizontal distortion direction.
    #[schemars(title = "Horizontal Damping", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub horizontal_damping: f32,
    /// How far panels tilt with distortion.
    #[schemars(title = "Rotation", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub rotation_factor: f32,
    /// Speed of the shader wave animation.
    #[schemars(title = "Wave Speed", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub animation_speed: f32,
    /// Per-frame step of the smoothed movement direction.
    #[schemars(title = "Direction Smoothing", range(min = 0.005, max = 0.2), extend("step" = 0.005))]
    pub direction_smoothing: f32,
}

impl Default for DistortionOptions {
    fn default() -> Self {
        Self {
            decay: 0.93,
            max_distortion: 4.0,
            sensitivity: 0.25,
            smoothing: 0.075,
            intensity: 0.3,
            horizontal_damping: 0.3,
            rotation_factor: 0.2,
            animation_speed: 0.5,
            direction_smoothing: 0.03,
        }
    }
}
