//! Per-frame placement of every panel on the wrapping strip.

use glam::Vec3;

use super::panel::Panel;
use super::wrap::wrapped_offset;
use crate::distortion::DistortionSignal;
use crate::options::{DistortionOptions, LayoutOptions};
use crate::render::PanelUniforms;
use crate::util::smoothing::approach;

/// Jumps wider than this many panel widths snap instead of sliding.
const SNAP_WIDTHS: f32 = 2.0;
/// Panels this many widths beyond the strip edge are culled.
const VISIBILITY_MARGIN_WIDTHS: f32 = 1.5;
/// Depth pushed back per unit of distance from the center.
const DEPTH_PER_OFFSET: f32 = -0.05;
/// Scale from distortion to roll angle (after the rotation factor).
const ROTATION_SCALE: f32 = 0.05;
/// Per-frame easing of the roll angle.
const ROTATION_SMOOTHING: f32 = 0.1;
/// Yaw as a fraction of roll.
const YAW_PER_ROLL: f32 = 0.3;

/// Wraps, smooths and culls the panels of the strip.
#[derive(Debug, Clone)]
pub struct PanelLayoutEngine {
    layout: LayoutOptions,
    distortion: DistortionOptions,
    panels: Vec<Panel>,
}

impl PanelLayoutEngine {
    /// Engine with `layout.slide_count` panels parked at the origin.
    #[must_use]
    pub fn new(layout: LayoutOptions, distortion: DistortionOptions) -> Self {
        let panels = (0..layout.slide_count).map(Panel::new).collect();
        Self {
            layout,
            distortion,
            panels,
        }
    }

    /// Re-tune without touching panel state. The panel count is fixed for
    /// the session; a different `slide_count` is ignored.
    pub fn set_options(
        &mut self,
        layout: LayoutOptions,
        distortion: DistortionOptions,
    ) {
        if layout.slide_count != self.panels.len() {
            log::warn!(
                "ignoring slide_count change {} -> {}: panel count is fixed",
                self.panels.len(),
                layout.slide_count
            );
        }
        self.layout = layout;
        self.distortion = distortion;
    }

    /// All panels in index order.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Panel at `index`, if it exists.
    #[must_use]
    pub fn panel(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    /// Mutable panel at `index`, if it exists.
    pub fn panel_mut(&mut self, index: usize) -> Option<&mut Panel> {
        self.panels.get_mut(index)
    }

    /// Panels refreshed on the latest frame.
    #[must_use]
    pub fn visible_panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter().filter(|p| p.visible)
    }

    /// Length of one revolution for the session's panel count.
    #[must_use]
    pub fn total_width(&self) -> f32 {
        self.panels.len() as f32 * self.layout.slide_unit()
    }

    /// Half-extent beyond which panels are culled.
    #[must_use]
    pub fn visibility_limit(&self) -> f32 {
        self.total_width() * 0.5
            + self.layout.slide_width * VISIBILITY_MARGIN_WIDTHS
    }

    /// Place every panel for scroll `position`.
    ///
    /// `global_time` is the engine clock in seconds; it drives the shader
    /// wave animation.
    pub fn update(
        &mut self,
        position: f64,
        signal: &DistortionSignal,
        global_time: f32,
    ) {
        let unit = self.layout.slide_unit();
        let total = self.total_width();
        let snap_distance = self.layout.slide_width * SNAP_WIDTHS;
        let limit = self.visibility_limit();
        let time = global_time * self.distortion.animation_speed;

        for panel in &mut self.panels {
            let base = wrapped_offset(panel.index, position, unit, total);
            if (base - panel.target_x).abs() > snap_distance {
                panel.current_x = base;
            }
            panel.target_x = base;
            panel.current_x =
                approach(panel.current_x, panel.target_x, self.layout.slide_lerp);

            panel.visible = panel.current_x.abs() < limit;
            if !panel.visible {
                continue;
            }

            panel.current_distortion = approach(
                panel.current_distortion,
                signal.factor * self.distortion.intensity,
                self.distortion.smoothing,
            );
            panel.uniforms = PanelUniforms::new(
                panel.current_distortion,
                time,
                signal.direction,
                signal.directional_influence,
            )
            .with_texture_ready(panel.texture_ready);

            panel.target_rotation = panel.current_distortion
                * self.distortion.rotation_factor
                * ROTATION_SCALE
                * signal.smoothed_direction.x;
            panel.current_rotation = approach(
                panel.current_rotation,
                panel.target_rotation,
                ROTATION_SMOOTHING,
            );

            panel.transform.position = Vec3::new(
                panel.current_x,
                0.0,
                panel.current_x.abs() * DEPTH_PER_OFFSET,
            );
            panel.transform.rotation = Vec3::new(
                0.0,
                panel.current_rotation * YAW_PER_ROLL,
                panel.current_rotation,
            );
        }
    }
}
