//! The carousel controller and its per-frame pipeline.
//!
//! Construction and accessors live here; input routing, option changes,
//! and the frame driver are split into submodules.

mod frame;
mod input;
mod options;

use crate::camera::Camera;
use crate::distortion::{DistortionModel, DistortionSignal, DistortionState};
use crate::input::InputAggregator;
use crate::layout::PanelLayoutEngine;
use crate::motion::{MotionModel, MotionSample, MotionState};
use crate::options::Options;
use crate::overlay::{FadeBand, OverlayProjector};

/// Size of the render target and overlay, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Viewport of `width × height` pixels.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; 1.0 for a zero-height viewport.
    #[must_use]
    pub fn aspect(self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// The carousel controller.
///
/// Owns every piece of motion, distortion, and panel state and runs the
/// per-frame pipeline. Nothing here touches the GPU; rendering goes through
/// the [`RenderSurface`](crate::render::RenderSurface) and
/// [`OverlayHost`](crate::render::OverlayHost) traits.
///
/// # Frame loop
///
/// ```ignore
/// engine.handle_input(event, Instant::now(), &mut overlay); // as events arrive
/// engine.update(dt, Instant::now());
/// engine.apply(&mut surface);
/// engine.project_overlays(&mut overlay);
/// ```
///
/// Window size changes arrive as
/// [`InputEvent::Resize`](crate::input::InputEvent::Resize) or through
/// [`resize`](Self::resize); call
/// [`on_texture_loaded`](Self::on_texture_loaded) as panel textures
/// arrive.
pub struct CarouselEngine {
    /// Active tuning options.
    options: Options,
    /// Scroll position, momentum and velocity tracking.
    motion: MotionState,
    /// Shared distortion factor.
    distortion: DistortionState,
    motion_model: MotionModel,
    distortion_model: DistortionModel,
    /// Gesture state and idle timers.
    aggregator: InputAggregator,
    /// Panels and their placement.
    layout: PanelLayoutEngine,
    camera: Camera,
    overlay: OverlayProjector,
    viewport: Viewport,
    /// Seconds of animation since construction.
    global_time: f32,
    last_sample: MotionSample,
    last_signal: DistortionSignal,
}

impl CarouselEngine {
    /// Engine at rest with `options.layout.slide_count` panels.
    #[must_use]
    pub fn new(options: Options, viewport: Viewport) -> Self {
        log::info!(
            "carousel: {} panels, {}x{} viewport",
            options.layout.slide_count,
            viewport.width,
            viewport.height
        );
        Self {
            motion: MotionState::new(),
            distortion: DistortionState::new(
                options.distortion.max_distortion,
            ),
            motion_model: MotionModel::new(options.motion.clone()),
            distortion_model: DistortionModel::new(options.distortion.clone()),
            aggregator: InputAggregator::new(),
            layout: PanelLayoutEngine::new(
                options.layout.clone(),
                options.distortion.clone(),
            ),
            camera: Camera::from_options(&options.camera, viewport.aspect()),
            overlay: OverlayProjector::new(
                FadeBand::new(&options.overlay, options.layout.slide_width),
                viewport.width,
                viewport.height,
            ),
            viewport,
            global_time: 0.0,
            last_sample: MotionSample::default(),
            last_signal: DistortionSignal::default(),
            options,
        }
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Scroll state.
    #[must_use]
    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    /// Shared distortion state.
    #[must_use]
    pub fn distortion(&self) -> &DistortionState {
        &self.distortion
    }

    /// Panels and their placement.
    #[must_use]
    pub fn layout(&self) -> &PanelLayoutEngine {
        &self.layout
    }

    /// Camera used for drawing and overlay projection.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Seconds of animation since construction.
    #[must_use]
    pub fn global_time(&self) -> f32 {
        self.global_time
    }

    /// Velocity signal of the latest frame.
    #[must_use]
    pub fn last_sample(&self) -> &MotionSample {
        &self.last_sample
    }

    /// Distortion signal of the latest frame.
    #[must_use]
    pub fn last_signal(&self) -> &DistortionSignal {
        &self.last_signal
    }
}
