//! Contracts between the engine and whatever draws the carousel.
//!
//! The engine never touches a GPU directly. Each frame it pushes panel
//! placements and shader parameters into a [`RenderSurface`] and title
//! placements into an [`OverlayHost`]. The reference wgpu implementation
//! lives in [`crate::gpu`]; [`RecordingSurface`] captures frames in memory.

mod recording;
mod uniforms;

pub use recording::RecordingSurface;
pub use uniforms::PanelUniforms;

use crate::layout::PanelTransform;
use crate::overlay::OverlayPlacement;

/// Receives per-panel render state once per frame.
pub trait RenderSurface {
    /// Place panel `index` in world space.
    fn set_panel_transform(&mut self, index: usize, transform: &PanelTransform);
    /// Update panel `index`'s distortion shader parameters.
    fn set_panel_uniforms(&mut self, index: usize, uniforms: &PanelUniforms);
}

/// Receives screen-space title placements.
pub trait OverlayHost {
    /// Position, fade and blur title `title`.
    ///
    /// Panels pair with titles by index modulo the title count, so with
    /// more panels than titles the last panel placed wins.
    fn place_title(&mut self, title: usize, placement: &OverlayPlacement);
}
