//! Velocity → distortion signal.

use glam::Vec2;

use super::state::DistortionState;
use crate::motion::{MotionSample, MotionState};
use crate::options::DistortionOptions;
use crate::util::smoothing::{approach, approach_vec2, settling_rate};

/// Velocity above which movement re-targets the distortion.
const RETARGET_VELOCITY: f32 = 0.03;
/// Cap of the per-frame blend toward the movement-based target.
const RETARGET_BLEND_LIMIT: f32 = 0.2;
/// Decay multiplier scale while coasting down from a peak.
const COASTING_DECAY_SCALE: f32 = 1.01;
/// Decay multiplier scale once nearly stopped.
const RESTING_DECAY_SCALE: f32 = 0.9;
/// Average velocity below which the strip counts as nearly stopped.
const RESTING_VELOCITY: f32 = 0.1;
/// Gap below which distortion smoothing switches to its settling rate.
const DISTORTION_SETTLE_WITHIN: f32 = 0.05;

/// Distortion values shared by every panel for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DistortionSignal {
    /// Smoothed shared distortion factor.
    pub factor: f32,
    /// Smoothed movement direction (undamped).
    pub smoothed_direction: Vec2,
    /// Shader direction: horizontal damped, vertical as-is.
    pub direction: Vec2,
    /// `|direction|` clamped to 1, used as a shader weight.
    pub directional_influence: f32,
}

/// Derives the shared distortion from the frame's motion sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistortionModel {
    options: DistortionOptions,
}

/// Movement-based distortion target for a frame velocity: `min(1, 2v²)`.
#[must_use]
pub fn movement_distortion(velocity: f32) -> f32 {
    (velocity * velocity * 2.0).min(1.0)
}

impl DistortionModel {
    /// Model using the given distortion parameters.
    #[must_use]
    pub fn new(options: DistortionOptions) -> Self {
        Self { options }
    }

    /// Current tuning parameters.
    #[must_use]
    pub fn options(&self) -> &DistortionOptions {
        &self.options
    }

    /// Replace the tuning parameters.
    pub fn set_options(&mut self, options: DistortionOptions) {
        self.options = options;
    }

    /// Re-target, decay and smooth `state`; low-pass the movement direction
    /// stored in `motion`.
    pub fn update(
        &self,
        state: &mut DistortionState,
        motion: &mut MotionState,
        sample: &MotionSample,
    ) -> DistortionSignal {
        let velocity = sample.current_velocity;
        if velocity > RETARGET_VELOCITY {
            let blend = velocity.min(RETARGET_BLEND_LIMIT);
            state.set_target(approach(
                state.target_factor(),
                movement_distortion(velocity),
                blend,
            ));
        }

        if sample.is_decelerating {
            state.set_target(
                state.target_factor()
                    * self.options.decay
                    * COASTING_DECAY_SCALE,
            );
        } else if sample.avg_velocity < RESTING_VELOCITY {
            state.set_target(
                state.target_factor() * self.options.decay * RESTING_DECAY_SCALE,
            );
        }

        let rate = settling_rate(
            state.current_factor(),
            state.target_factor(),
            self.options.smoothing,
            DISTORTION_SETTLE_WITHIN,
        );
        state.ease_current(rate);

        motion.smoothed_direction = approach_vec2(
            motion.smoothed_direction,
            motion.movement_direction,
            self.options.direction_smoothing,
        );

        self.signal(state, motion.smoothed_direction)
    }

    /// Shader-facing signal for the given state and smoothed direction.
    #[must_use]
    pub fn signal(
        &self,
        state: &DistortionState,
        smoothed_direction: Vec2,
    ) -> DistortionSignal {
        let direction = Vec2::new(
            smoothed_direction.x * self.options.horizontal_damping,
            smoothed_direction.y,
        );
        DistortionSignal {
            factor: state.current_factor(),
            smoothed_direction,
            direction,
            directional_influence: direction.length().min(1.0),
        }
    }
}
