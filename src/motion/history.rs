//! Fixed-length velocity history with weighted averaging.

/// Number of per-frame velocity samples kept.
pub const VELOCITY_HISTORY_LEN: usize = 5;

/// Averaging weights, oldest → newest. Sum to 1.0.
pub const VELOCITY_WEIGHTS: [f32; VELOCITY_HISTORY_LEN] =
    [0.1, 0.15, 0.2, 0.25, 0.3];

/// The most recent per-frame velocities, ordered oldest → newest.
///
/// Always holds exactly [`VELOCITY_HISTORY_LEN`] samples; pushing evicts the
/// oldest.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VelocityHistory {
    samples: [f32; VELOCITY_HISTORY_LEN],
}

impl VelocityHistory {
    /// History pre-filled with `samples` (oldest first).
    #[must_use]
    pub const fn from_samples(samples: [f32; VELOCITY_HISTORY_LEN]) -> Self {
        Self { samples }
    }

    /// Append `velocity` as the newest sample, evicting the oldest.
    pub fn push(&mut self, velocity: f32) {
        self.samples.rotate_left(1);
        self.samples[VELOCITY_HISTORY_LEN - 1] = velocity;
    }

    /// Samples ordered oldest → newest.
    #[must_use]
    pub fn samples(&self) -> &[f32; VELOCITY_HISTORY_LEN] {
        &self.samples
    }

    /// Newest sample.
    #[must_use]
    pub fn latest(&self) -> f32 {
        self.samples[VELOCITY_HISTORY_LEN - 1]
    }

    /// Weighted average favouring recent frames.
    #[must_use]
    pub fn weighted_average(&self) -> f32 {
        let (weighted, weight_sum) = self
            .samples
            .iter()
            .zip(VELOCITY_WEIGHTS)
            .fold((0.0, 0.0), |(acc, sum), (v, w)| (acc + v * w, sum + w));
        if weight_sum > 0.0 {
            weighted / weight_sum
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let sum: f32 = VELOCITY_WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn weighted_average_of_ramp() {
        let history = VelocityHistory::from_samples([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((history.weighted_average() - 3.5).abs() < 1e-5);
    }

    #[test]
    fn push_evicts_oldest() {
        let mut history =
            VelocityHistory::from_samples([1.0, 2.0, 3.0, 4.0, 5.0]);
        history.push(6.0);
        assert_eq!(history.samples(), &[2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(history.latest(), 6.0);
    }

    #[test]
    fn newest_sample_dominates() {
        let mut history = VelocityHistory::default();
        history.push(1.0);
        assert!((history.weighted_average() - 0.3).abs() < 1e-6);
    }
}
