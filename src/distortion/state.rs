/// Ceiling applied to the distortion target by direct input impulses.
pub const IMPULSE_CEILING: f32 = 1.0;

/// Shared distortion intensity driving every panel's warp shader.
///
/// Both factors stay within `[0, max_distortion]`. Input impulses are
/// additionally capped at [`IMPULSE_CEILING`]; only the motion model's
/// acceleration boost can push the target beyond it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistortionState {
    current_factor: f32,
    target_factor: f32,
    max_distortion: f32,
}

impl DistortionState {
    /// Relaxed state bounded by `max_distortion`.
    #[must_use]
    pub fn new(max_distortion: f32) -> Self {
        Self {
            current_factor: 0.0,
            target_factor: 0.0,
            max_distortion: max_distortion.max(0.0),
        }
    }

    /// Smoothed factor consumed by the panels this frame.
    #[must_use]
    pub fn current_factor(&self) -> f32 {
        self.current_factor
    }

    /// Factor the current value eases toward.
    #[must_use]
    pub fn target_factor(&self) -> f32 {
        self.target_factor
    }

    /// Upper bound of both factors.
    #[must_use]
    pub fn max_distortion(&self) -> f32 {
        self.max_distortion
    }

    /// Change the upper bound, pulling both factors inside it.
    pub fn set_max_distortion(&mut self, max_distortion: f32) {
        self.max_distortion = max_distortion.max(0.0);
        self.target_factor = self.clamp(self.target_factor);
        self.current_factor = self.clamp(self.current_factor);
    }

    /// Add an input impulse; the result is capped at [`IMPULSE_CEILING`].
    pub fn add_impulse(&mut self, amount: f32) {
        self.set_impulse(self.target_factor + amount);
    }

    /// Replace the target with an input impulse capped at
    /// [`IMPULSE_CEILING`].
    pub fn set_impulse(&mut self, value: f32) {
        self.set_target(value.min(IMPULSE_CEILING));
    }

    /// Replace the target, clamped to `[0, max_distortion]`.
    pub fn set_target(&mut self, value: f32) {
        self.target_factor = self.clamp(value);
    }

    /// Move the current factor toward the target by `rate` of the gap.
    pub fn ease_current(&mut self, rate: f32) {
        let rate = rate.clamp(0.0, 1.0);
        self.current_factor = self.clamp(
            self.current_factor + (self.target_factor - self.current_factor) * rate,
        );
    }

    fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, self.max_distortion)
    }
}

impl Default for DistortionState {
    fn default() -> Self {
        Self::new(4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impulses_cap_at_one() {
        let mut state = DistortionState::new(4.0);
        state.add_impulse(0.4);
        assert!((state.target_factor() - 0.4).abs() < 1e-6);
        for _ in 0..10 {
            state.add_impulse(0.4);
        }
        assert_eq!(state.target_factor(), IMPULSE_CEILING);
    }

    #[test]
    fn impulse_lowers_boosted_target_to_ceiling() {
        let mut state = DistortionState::new(4.0);
        state.set_target(3.0);
        state.add_impulse(0.4);
        assert_eq!(state.target_factor(), IMPULSE_CEILING);
    }

    #[test]
    fn target_is_clamped_to_bounds() {
        let mut state = DistortionState::new(4.0);
        state.set_target(100.0);
        assert_eq!(state.target_factor(), 4.0);
        state.set_target(-3.0);
        assert_eq!(state.target_factor(), 0.0);
        state.set_target(f32::NAN);
        assert_eq!(state.target_factor(), 0.0);
    }

    #[test]
    fn current_eases_without_overshoot() {
        let mut state = DistortionState::new(4.0);
        state.set_target(2.0);
        let mut previous = state.current_factor();
        for _ in 0..200 {
            state.ease_current(0.075);
            assert!(state.current_factor() >= previous);
            assert!(state.current_factor() <= 2.0);
            previous = state.current_factor();
        }
    }

    #[test]
    fn lowering_max_pulls_factors_inside() {
        let mut state = DistortionState::new(4.0);
        state.set_target(3.0);
        state.ease_current(1.0);
        state.set_max_distortion(1.5);
        assert_eq!(state.target_factor(), 1.5);
        assert_eq!(state.current_factor(), 1.5);
    }
}
