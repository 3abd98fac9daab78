//! Per-frame driver for CarouselEngine

use web_time::Instant;

use super::{CarouselEngine, Viewport};
use crate::error::CarouselError;
use crate::render::{OverlayHost, RenderSurface};
use crate::util::frame_timing::sanitize_dt;

impl CarouselEngine {
    /// Advance one frame of `dt` seconds ending at `now`.
    ///
    /// Fires expired idle timers, then runs motion → distortion → camera
    /// → layout. A non-finite or non-positive `dt` counts as 16 ms.
    pub fn update(&mut self, dt: f32, now: Instant) {
        self.aggregator.poll_timers(now, &mut self.motion);

        let dt = sanitize_dt(dt);
        self.global_time += dt;

        self.last_sample =
            self.motion_model
                .advance(&mut self.motion, &mut self.distortion, dt);
        self.last_signal = self.distortion_model.update(
            &mut self.distortion,
            &mut self.motion,
            &self.last_sample,
        );

        self.camera.sway(self.global_time, &self.options.camera);
        self.layout.update(
            self.motion.current_position,
            &self.last_signal,
            self.global_time,
        );
    }

    /// Push the transform and shader parameters of every visible panel.
    pub fn apply(&self, surface: &mut impl RenderSurface) {
        for panel in self.layout.visible_panels() {
            surface.set_panel_transform(panel.index, &panel.transform);
            surface.set_panel_uniforms(panel.index, &panel.uniforms);
        }
    }

    /// Place every panel's title in overlay pixel space.
    pub fn project_overlays(&self, host: &mut impl OverlayHost) {
        self.overlay.project(
            &self.camera,
            self.layout.panels(),
            self.options.content.panels.len(),
            host,
        );
    }

    /// Track a new window size and re-place the titles immediately.
    pub fn resize(
        &mut self,
        width: u32,
        height: u32,
        overlay: &mut impl OverlayHost,
    ) {
        self.set_viewport(Viewport::new(width, height));
        self.project_overlays(overlay);
    }

    /// Record the outcome of loading panel `index`'s texture.
    ///
    /// Failures are logged and otherwise ignored: the panel keeps
    /// animating with whatever placeholder its surface shows.
    pub fn on_texture_loaded(
        &mut self,
        index: usize,
        result: Result<(), CarouselError>,
    ) {
        let Some(panel) = self.layout.panel_mut(index) else {
            log::debug!("texture result for unknown panel {index}");
            return;
        };
        match result {
            Ok(()) => {
                panel.texture_ready = true;
                log::debug!("panel {index} texture ready");
            }
            Err(e) => log::warn!("{e}"),
        }
    }
}
