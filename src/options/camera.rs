use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Distance from the eye to the strip along +Z.
    #[schemars(title = "Distance", range(min = 2.0, max = 15.0), extend("step" = 0.1))]
    pub distance: f32,
    /// Height of the idle camera sway; zero keeps the camera still.
    #[schemars(title = "Sway", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub sway_amplitude: f32,
    /// Angular frequency of the idle sway.
    #[schemars(skip)]
    pub sway_frequency: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 50.0,
            znear: 0.1,
            zfar: 100.0,
            distance: 5.0,
            sway_amplitude: 0.0,
            sway_frequency: 0.2,
        }
    }
}
