use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Panel dimensions and strip arrangement.
pub struct LayoutOptions {
    /// Panel width in world units.
    #[schemars(skip)]
    pub slide_width: f32,
    /// Panel height in world units.
    #[schemars(skip)]
    pub slide_height: f32,
    /// Horizontal gap between neighbouring panels.
    #[schemars(title = "Gap", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub gap: f32,
    /// Number of panels on the strip. Fixed for the session.
    #[schemars(skip)]
    pub slide_count: usize,
    /// Per-frame lerp rate of a panel toward its wrapped slot.
    #[schemars(title = "Slide Lerp", range(min = 0.01, max = 1.0), extend("step" = 0.005))]
    pub slide_lerp: f32,
}

impl LayoutOptions {
    /// Distance between neighbouring panel slots (`slide_width + gap`).
    #[must_use]
    pub fn slide_unit(&self) -> f32 {
        self.slide_width + self.gap
    }

    /// Length of one full revolution of the strip.
    #[must_use]
    pub fn total_width(&self) -> f32 {
        self.slide_count as f32 * self.slide_unit()
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            slide_width: 3.2,
            slide_height: 1.8,
            gap: 0.25,
            slide_count: 4,
            slide_lerp: 0.075,
        }
    }
}
