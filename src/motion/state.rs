use glam::Vec2;

use super::history::VelocityHistory;

/// Scroll state shared by the input handlers and the frame driver.
///
/// Owned by the [`CarouselEngine`](crate::engine::CarouselEngine) and passed
/// by reference; input handlers write the target fields, the
/// [`MotionModel`](super::MotionModel) advances the rest once per frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MotionState {
    /// Smoothed scroll offset along the strip. Unbounded over a session,
    /// hence `f64`.
    pub current_position: f64,
    /// Offset the strip is easing toward.
    pub target_position: f64,
    /// Residual momentum added to the target each frame while scrolling.
    pub auto_scroll_speed: f32,
    /// Active input or momentum is in effect.
    pub is_scrolling: bool,
    /// Recent per-frame velocities.
    pub velocity_history: VelocityHistory,
    /// Exponentially tracked maximum of the weighted average velocity.
    pub peak_velocity: f32,
    /// Sign of the latest input along each axis.
    pub movement_direction: Vec2,
    /// `movement_direction` low-passed over time.
    pub smoothed_direction: Vec2,
}

impl MotionState {
    /// State at rest at position zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift the target by `delta` strip units.
    pub fn nudge_target(&mut self, delta: f32) {
        self.target_position += f64::from(delta);
    }
}
