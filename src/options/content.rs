use serde::{Deserialize, Serialize};

/// Text shown in the overlay paired with one panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PanelContent {
    /// Headline.
    pub title: String,
    /// Two-digit ordinal label.
    pub number: String,
    /// Short caption; lines separated by `\n`.
    pub description: String,
    /// Link target of the caption.
    pub link: String,
}

impl PanelContent {
    fn new(title: &str, number: &str, description: &str) -> Self {
        Self {
            title: title.to_owned(),
            number: number.to_owned(),
            description: description.to_owned(),
            link: "#".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Overlay text for each panel, paired by index modulo the list length.
pub struct ContentOptions {
    /// One entry per title overlay.
    pub panels: Vec<PanelContent>,
}

impl ContentOptions {
    /// Content paired with the panel at `index`, wrapping around the list.
    #[must_use]
    pub fn for_panel(&self, index: usize) -> Option<&PanelContent> {
        if self.panels.is_empty() {
            return None;
        }
        self.panels.get(index % self.panels.len())
    }
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            panels: vec![
                PanelContent::new(
                    "IN BETWEEN",
                    "01",
                    "where things are still forming",
                ),
                PanelContent::new(
                    "BEAUTIFUL WORLD",
                    "02",
                    "in the uneven\nthe broken\nthe overlooked",
                ),
                PanelContent::new(
                    "FILMS",
                    "03",
                    "shaping me\nslowly and quietly",
                ),
                PanelContent::new(
                    "THE MUZIK",
                    "04",
                    "to silence\nto space\nto what's unsaid",
                ),
            ],
        }
    }
}
