use serde::{Deserialize, Serialize};

/// Carousel actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// advance = "ArrowLeft"
/// retreat = "ArrowRight"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move the strip forward by one slide unit.
    Advance,
    /// Move the strip back by one slide unit.
    Retreat,
}

impl KeyAction {
    /// Sign of the target-position change this action produces.
    #[must_use]
    pub fn direction(self) -> f32 {
        match self {
            Self::Advance => 1.0,
            Self::Retreat => -1.0,
        }
    }
}
