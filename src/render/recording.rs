use std::collections::BTreeMap;

use super::{OverlayHost, PanelUniforms, RenderSurface};
use crate::layout::PanelTransform;
use crate::overlay::OverlayPlacement;

/// In-memory surface and overlay host.
///
/// Keeps the latest value pushed for each panel plus a count of calls, so
/// headless hosts and tests can inspect what a frame produced.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    /// Latest transform per panel index.
    pub transforms: BTreeMap<usize, PanelTransform>,
    /// Latest uniforms per panel index.
    pub uniforms: BTreeMap<usize, PanelUniforms>,
    /// Latest placement per title index.
    pub titles: BTreeMap<usize, OverlayPlacement>,
    /// Total `set_panel_transform` calls.
    pub transform_calls: usize,
    /// Total `place_title` calls.
    pub title_calls: usize,
}

impl RecordingSurface {
    /// Empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for RecordingSurface {
    fn set_panel_transform(&mut self, index: usize, transform: &PanelTransform) {
        let _ = self.transforms.insert(index, *transform);
        self.transform_calls += 1;
    }

    fn set_panel_uniforms(&mut self, index: usize, uniforms: &PanelUniforms) {
        let _ = self.uniforms.insert(index, *uniforms);
    }
}

impl OverlayHost for RecordingSurface {
    fn place_title(&mut self, title: usize, placement: &OverlayPlacement) {
        let _ = self.titles.insert(title, *placement);
        self.title_calls += 1;
    }
}
