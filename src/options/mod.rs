//! Centralized carousel tuning options with TOML preset support.
//!
//! All tweakable feel parameters (input sensitivity, smoothing, distortion,
//! layout, title fade, camera, keybindings, overlay text) are consolidated
//! here. Options serialize to/from TOML so presets can be stored alongside
//! the binary.

mod camera;
mod content;
mod distortion;
mod keybindings;
mod layout;
mod motion;
mod overlay;

use std::path::Path;

pub use camera::CameraOptions;
pub use content::{ContentOptions, PanelContent};
pub use distortion::DistortionOptions;
pub use keybindings::KeybindingOptions;
pub use layout::LayoutOptions;
pub use motion::MotionOptions;
pub use overlay::OverlayOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[distortion]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Input sensitivity and scroll smoothing.
    pub motion: MotionOptions,
    /// Distortion, tilt and shader animation.
    pub distortion: DistortionOptions,
    /// Panel size and strip arrangement.
    pub layout: LayoutOptions,
    /// Title overlay fading.
    pub overlay: OverlayOptions,
    /// Camera projection.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Overlay text per panel.
    #[schemars(skip)]
    pub content: ContentOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::OptionsParse`] for malformed TOML or
    /// values rejected by [`validate`](Self::validate).
    pub fn from_toml_str(content: &str) -> Result<Self, CarouselError> {
        let opts: Self = toml::from_str(content)
            .map_err(|e| CarouselError::OptionsParse(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Io`] if the file cannot be read, otherwise
    /// as [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, CarouselError> {
        let content = std::fs::read_to_string(path).map_err(CarouselError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::OptionsParse`] if serialization fails or
    /// [`CarouselError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), CarouselError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CarouselError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CarouselError::Io)?;
        }
        std::fs::write(path, content).map_err(CarouselError::Io)
    }

    /// Reject option sets that would make the strip geometry degenerate.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::OptionsParse`] naming the offending field.
    pub fn validate(&self) -> Result<(), CarouselError> {
        let layout = &self.layout;
        if layout.slide_count == 0 {
            return Err(CarouselError::OptionsParse(
                "layout.slide_count must be at least 1".into(),
            ));
        }
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(layout.slide_width) || !positive(layout.slide_unit()) {
            return Err(CarouselError::OptionsParse(
                "layout.slide_width and gap must give a positive slide unit"
                    .into(),
            ));
        }
        let (fade_start, fade_end) =
            self.overlay.fade_band(layout.slide_width);
        if fade_end < fade_start {
            return Err(CarouselError::OptionsParse(
                "overlay.fade_end must not precede overlay.fade_start".into(),
            ));
        }
        if let Some(key) = self.keybindings.shared_key() {
            return Err(CarouselError::OptionsParse(format!(
                "keybindings: {key} is bound to more than one action"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[distortion]
max_distortion = 2.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.distortion.max_distortion, 2.0);
        // Everything else should be default
        assert_eq!(opts.distortion.decay, 0.93);
        assert_eq!(opts.layout.slide_count, 4);
        assert_eq!(opts.motion.momentum_multiplier, 2.5);
    }

    #[test]
    fn default_geometry_matches_page_layout() {
        let layout = LayoutOptions::default();
        assert!((layout.slide_unit() - 3.45).abs() < 1e-6);
        assert!((layout.total_width() - 13.8).abs() < 1e-5);
    }

    #[test]
    fn degenerate_layout_is_rejected() {
        let err = Options::from_toml_str("[layout]\nslide_count = 0\n");
        assert!(matches!(err, Err(CarouselError::OptionsParse(_))));
        let err = Options::from_toml_str("[overlay]\nfade_start = 3.0\nfade_end = 1.0\n");
        assert!(matches!(err, Err(CarouselError::OptionsParse(_))));
    }

    #[test]
    fn fade_band_follows_slide_width_override() {
        let opts = Options::from_toml_str("[layout]\nslide_width = 4.0\n").unwrap();
        assert_eq!(opts.overlay.fade_band(opts.layout.slide_width), (2.0, 2.5));
        let defaults = Options::default();
        assert_eq!(
            defaults.overlay.fade_band(defaults.layout.slide_width).0,
            1.6
        );
    }

    #[test]
    fn fade_start_alone_beyond_default_end_is_accepted() {
        let opts = Options::from_toml_str("[overlay]\nfade_start = 3.0\n").unwrap();
        assert_eq!(opts.overlay.fade_band(opts.layout.slide_width), (3.0, 3.5));
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("ArrowLeft"),
            Some(KeyAction::Advance)
        );
        assert_eq!(
            opts.keybindings.lookup("ArrowRight"),
            Some(KeyAction::Retreat)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn keybindings_parse_from_toml() {
        use crate::input::KeyAction;
        let toml_str = r#"
[keybindings.bindings]
advance = "KeyA"
retreat = "KeyD"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyA"), Some(KeyAction::Advance));
        assert_eq!(opts.keybindings.lookup("ArrowLeft"), None);
    }

    #[test]
    fn shared_key_bindings_are_rejected() {
        let toml_str = r#"
[keybindings.bindings]
advance = "Space"
retreat = "Space"
"#;
        let err = Options::from_toml_str(toml_str);
        assert!(matches!(err, Err(CarouselError::OptionsParse(msg)) if msg.contains("Space")));
        assert!(Options::default().keybindings.shared_key().is_none());
    }

    #[test]
    fn content_pairs_by_modulo() {
        let content = ContentOptions::default();
        assert_eq!(content.for_panel(1).unwrap().title, "BEAUTIFUL WORLD");
        assert_eq!(content.for_panel(5).unwrap().number, "02");
        let empty = ContentOptions { panels: Vec::new() };
        assert!(empty.for_panel(0).is_none());
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("motion"));
        assert!(props.contains_key("distortion"));
        assert!(props.contains_key("layout"));
        assert!(props.contains_key("overlay"));
        assert!(props.contains_key("camera"));

        assert!(!props.contains_key("keybindings"));
        assert!(!props.contains_key("content"));

        let layout = &props["layout"]["properties"];
        assert!(layout.get("slide_lerp").is_some());
        assert!(layout.get("slide_count").is_none());
    }
}
