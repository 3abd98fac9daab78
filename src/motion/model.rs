//! Per-frame advance of the scroll state.
//!
//! Applies residual momentum, eases the scroll position toward its target,
//! and derives the velocity signal that drives distortion.

use super::state::MotionState;
use crate::distortion::DistortionState;
use crate::options::MotionOptions;
use crate::util::frame_timing::sanitize_dt;
use crate::util::smoothing::{approach, settling_rate};

/// Momentum below this magnitude is dropped to zero.
pub const MOMENTUM_REST_THRESHOLD: f32 = 0.001;
/// Slowest allowed momentum decay multiplier.
const MOMENTUM_DECAY_FLOOR: f32 = 0.92;
/// Decay multiplier at zero speed; faster momentum decays harder.
const MOMENTUM_DECAY_BASE: f32 = 0.97;
/// Extra decay per unit of momentum.
const MOMENTUM_DECAY_PER_SPEED: f32 = 0.5;
/// Gap below which position smoothing switches to its settling rate.
const POSITION_SETTLE_WITHIN: f32 = 0.1;
/// Per-frame velocities at or below this are treated as noise.
pub const VELOCITY_NOISE_FLOOR: f32 = 0.01;
/// Rate at which the peak tracker chases a higher average.
const PEAK_ATTACK: f32 = 0.3;
/// Per-frame peak retention (2% decay).
const PEAK_RETENTION: f32 = 0.98;
/// Cap of the distortion boost granted while accelerating.
const ACCELERATION_BOOST_LIMIT: f32 = 0.1;
/// Distortion boost per unit of average velocity.
const ACCELERATION_BOOST_SCALE: f32 = 0.03;
/// Average/peak ratio below which motion counts as decelerating.
const DECELERATION_RATIO: f32 = 0.7;
/// Peak velocity required before deceleration is reported.
const DECELERATION_MIN_PEAK: f32 = 0.3;
/// Guards the average/peak division.
const PEAK_EPSILON: f32 = 0.001;

/// Velocity signal produced by one [`MotionModel::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionSample {
    /// Elapsed seconds actually used for this frame.
    pub dt: f32,
    /// Unfiltered `|Δposition| / dt` of this frame.
    pub current_velocity: f32,
    /// Weighted average of the velocity history.
    pub avg_velocity: f32,
    /// Peak tracker value after this frame's update.
    pub peak_velocity: f32,
    /// Average has fallen well below a meaningful peak.
    pub is_decelerating: bool,
}

/// Advances [`MotionState`] once per frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MotionModel {
    options: MotionOptions,
}

impl MotionModel {
    /// Model using the given smoothing parameters.
    #[must_use]
    pub fn new(options: MotionOptions) -> Self {
        Self { options }
    }

    /// Replace the tuning parameters.
    pub fn set_options(&mut self, options: MotionOptions) {
        self.options = options;
    }

    /// Advance `state` by one frame of `dt` seconds.
    ///
    /// Accelerating motion boosts `distortion`'s target; everything else
    /// about distortion is left to the
    /// [`DistortionModel`](crate::distortion::DistortionModel).
    pub fn advance(
        &self,
        state: &mut MotionState,
        distortion: &mut DistortionState,
        dt: f32,
    ) -> MotionSample {
        let dt = sanitize_dt(dt);
        let previous_position = state.current_position;

        if state.is_scrolling {
            apply_momentum(state);
        }

        let gap = state.target_position - state.current_position;
        let rate = settling_rate(
            0.0,
            gap as f32,
            self.options.smoothing,
            POSITION_SETTLE_WITHIN,
        );
        state.current_position += gap * f64::from(rate);

        let current_velocity = ((state.current_position - previous_position)
            .abs()
            / f64::from(dt)) as f32;
        let significant = if current_velocity > VELOCITY_NOISE_FLOOR {
            current_velocity
        } else {
            0.0
        };
        state.velocity_history.push(significant);

        let avg_velocity = state.velocity_history.weighted_average();
        if avg_velocity > state.peak_velocity {
            state.peak_velocity =
                approach(state.peak_velocity, avg_velocity, PEAK_ATTACK);
            let boost = (avg_velocity * ACCELERATION_BOOST_SCALE)
                .min(ACCELERATION_BOOST_LIMIT);
            distortion.set_target(distortion.target_factor() + boost);
        }

        let ratio = avg_velocity / (state.peak_velocity + PEAK_EPSILON);
        let is_decelerating = ratio < DECELERATION_RATIO
            && state.peak_velocity > DECELERATION_MIN_PEAK;
        state.peak_velocity *= PEAK_RETENTION;

        MotionSample {
            dt,
            current_velocity,
            avg_velocity,
            peak_velocity: state.peak_velocity,
            is_decelerating,
        }
    }
}

/// Feed residual momentum into the target and decay it.
fn apply_momentum(state: &mut MotionState) {
    state.target_position += f64::from(state.auto_scroll_speed);
    state.auto_scroll_speed *= momentum_decay(state.auto_scroll_speed);
    if state.auto_scroll_speed.abs() < MOMENTUM_REST_THRESHOLD {
        state.auto_scroll_speed = 0.0;
    }
}

/// Speed-dependent momentum decay multiplier, never below
/// [`MOMENTUM_DECAY_FLOOR`].
#[must_use]
pub fn momentum_decay(speed: f32) -> f32 {
    (MOMENTUM_DECAY_BASE - speed.abs() * MOMENTUM_DECAY_PER_SPEED)
        .max(MOMENTUM_DECAY_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> MotionModel {
        MotionModel::new(MotionOptions::default())
    }

    #[test]
    fn momentum_decays_to_rest_quickly() {
        for start in [0.05_f32, -0.05, 0.125, -0.125, 0.002] {
            let mut state = MotionState {
                auto_scroll_speed: start,
                is_scrolling: true,
                ..MotionState::default()
            };
            let settled = (1..200).any(|_| {
                apply_momentum(&mut state);
                state.auto_scroll_speed == 0.0
            });
            assert!(settled, "momentum {start} did not settle");
        }
    }

    #[test]
    fn decay_is_speed_dependent_with_floor() {
        assert!((momentum_decay(0.0) - 0.97).abs() < 1e-6);
        assert!((momentum_decay(0.02) - 0.96).abs() < 1e-6);
        assert_eq!(momentum_decay(0.5), 0.92);
        assert_eq!(momentum_decay(-0.5), 0.92);
    }

    #[test]
    fn momentum_only_applies_while_scrolling() {
        let mut state = MotionState {
            auto_scroll_speed: 0.05,
            ..MotionState::default()
        };
        let mut distortion = DistortionState::default();
        let _ = model().advance(&mut state, &mut distortion, 0.016);
        assert_eq!(state.target_position, 0.0);
        assert_eq!(state.auto_scroll_speed, 0.05);

        state.is_scrolling = true;
        let _ = model().advance(&mut state, &mut distortion, 0.016);
        assert!((state.target_position - 0.05).abs() < 1e-6);
        assert!((state.auto_scroll_speed - 0.05 * 0.945).abs() < 1e-6);
    }

    #[test]
    fn position_uses_settling_rate_near_target() {
        let mut distortion = DistortionState::default();
        let mut far = MotionState {
            target_position: 1.0,
            ..MotionState::default()
        };
        let _ = model().advance(&mut far, &mut distortion, 0.016);
        assert!((far.current_position - 0.1).abs() < 1e-6);

        let mut near = MotionState {
            target_position: 0.05,
            ..MotionState::default()
        };
        let _ = model().advance(&mut near, &mut distortion, 0.016);
        assert!((near.current_position - 0.0025).abs() < 1e-6);
    }

    #[test]
    fn velocity_below_noise_floor_is_recorded_as_zero() {
        let mut distortion = DistortionState::default();
        let mut state = MotionState {
            // settling step 0.01 * 0.05 = 0.0005; / 0.1 s = 0.005 u/s
            target_position: 0.01,
            ..MotionState::default()
        };
        let sample = model().advance(&mut state, &mut distortion, 0.1);
        assert!(sample.current_velocity > 0.0);
        assert_eq!(state.velocity_history.latest(), 0.0);
    }

    #[test]
    fn acceleration_tracks_peak_and_boosts_distortion() {
        let mut distortion = DistortionState::default();
        let mut state = MotionState {
            target_position: 10.0,
            ..MotionState::default()
        };
        let sample = model().advance(&mut state, &mut distortion, 0.016);
        // Δ = 1.0 over 16 ms → 62.5 u/s, newest weight 0.3 → avg 18.75
        assert!((sample.current_velocity - 62.5).abs() < 1e-3);
        assert!((sample.avg_velocity - 18.75).abs() < 1e-3);
        let expected_peak = 18.75 * 0.3 * 0.98;
        assert!((sample.peak_velocity - expected_peak).abs() < 1e-3);
        assert!((distortion.target_factor() - 0.1).abs() < 1e-6);
        assert!(!sample.is_decelerating);
    }

    #[test]
    fn stopping_after_fast_motion_reports_deceleration() {
        let mut distortion = DistortionState::default();
        let mut state = MotionState {
            target_position: 10.0,
            ..MotionState::default()
        };
        for _ in 0..40 {
            let _ = model().advance(&mut state, &mut distortion, 0.016);
        }
        // Freeze the strip; history drains over the next frames.
        state.target_position = state.current_position;
        let mut saw_deceleration = false;
        for _ in 0..5 {
            let sample = model().advance(&mut state, &mut distortion, 0.016);
            saw_deceleration |= sample.is_decelerating;
        }
        assert!(saw_deceleration);
    }

    #[test]
    fn degenerate_dt_falls_back() {
        let mut distortion = DistortionState::default();
        let mut state = MotionState {
            target_position: 1.0,
            ..MotionState::default()
        };
        let sample = model().advance(&mut state, &mut distortion, 0.0);
        assert_eq!(sample.dt, 0.016);
        assert!(sample.current_velocity.is_finite());
    }

    #[test]
    fn far_positions_still_converge() {
        let mut distortion = DistortionState::default();
        let start = 5_000_000.0;
        let mut state = MotionState {
            current_position: start,
            target_position: start + 3.45,
            ..MotionState::default()
        };
        for _ in 0..600 {
            let _ = model().advance(&mut state, &mut distortion, 0.016);
        }
        assert!((state.target_position - state.current_position).abs() < 1e-3);
        assert!(state.current_position > start + 3.4);
    }

    #[test]
    fn history_always_holds_five_samples() {
        let mut distortion = DistortionState::default();
        let mut state = MotionState::default();
        for i in 0..12 {
            state.target_position = f64::from(i);
            let _ = model().advance(&mut state, &mut distortion, 0.016);
            assert_eq!(state.velocity_history.samples().len(), 5);
        }
    }
}
