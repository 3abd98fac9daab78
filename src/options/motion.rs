use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Input sensitivity and scroll smoothing parameters.
pub struct MotionOptions {
    /// Strip units travelled per wheel delta unit.
    #[schemars(title = "Wheel Sensitivity", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub wheel_sensitivity: f32,
    /// Strip units travelled per touch pixel.
    #[schemars(title = "Touch Sensitivity", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub touch_sensitivity: f32,
    /// Scale applied to fling velocity when it becomes momentum.
    #[schemars(title = "Momentum", range(min = 0.5, max = 5.0), extend("step" = 0.1))]
    pub momentum_multiplier: f32,
    /// Fraction of the remaining distance covered by the scroll position
    /// each frame.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub smoothing: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            wheel_sensitivity: 0.01,
            touch_sensitivity: 0.01,
            momentum_multiplier: 2.5,
            smoothing: 0.1,
        }
    }
}
