use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fade length used when only the start of the band is known.
const DEFAULT_FADE_LENGTH: f32 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Titles", inline)]
#[serde(default)]
/// Title overlay fade parameters, in world units from the strip center.
///
/// An unset band follows the panel size: fading starts at half the slide
/// width and ends half a unit further out.
pub struct OverlayOptions {
    /// Distance where titles start fading out.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(title = "Fade Start", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub fade_start: Option<f32>,
    /// Distance where titles are fully transparent.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(title = "Fade End", range(min = 0.0, max = 6.0), extend("step" = 0.05))]
    pub fade_end: Option<f32>,
    /// Blur radius in pixels once fully faded.
    #[schemars(title = "Max Blur", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub max_blur: f32,
}

impl OverlayOptions {
    /// `(start, end)` of the fade band for panels `slide_width` wide.
    #[must_use]
    pub fn fade_band(&self, slide_width: f32) -> (f32, f32) {
        let start = self.fade_start.unwrap_or(slide_width / 2.0);
        let end = self.fade_end.unwrap_or(start + DEFAULT_FADE_LENGTH);
        (start, end)
    }
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            fade_start: None,
            fade_end: None,
            max_blur: 5.0,
        }
    }
}
