//! Reference wgpu rendering of the carousel.
//!
//! Provides device/surface initialization, the segmented panel mesh,
//! placeholder textures, and the panel renderer that implements
//! [`RenderSurface`](crate::render::RenderSurface).

/// Segmented plane geometry.
pub mod mesh;
/// Distortion-shader panel renderer.
pub mod panel_renderer;
/// Shared wgpu boilerplate helpers.
pub mod pipeline_helpers;
/// Device and window surface bring-up.
pub mod surface;
/// Panel texture upload and placeholder generation.
pub mod texture;

pub use panel_renderer::PanelRenderer;
pub use surface::{GpuInitError, SurfaceContext};
