//! Frame-rate-agnostic exponential smoothing helpers.
//!
//! Every animated value in the carousel moves toward its target by a fixed
//! fraction per frame. "Settling" halves that fraction once the value is
//! already close, which avoids jitter near convergence.

use glam::Vec2;

/// Move `current` toward `target` by `rate` of the remaining distance.
#[inline]
#[must_use]
pub fn approach(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}

/// [`approach`] for 2-D vectors.
#[inline]
#[must_use]
pub fn approach_vec2(current: Vec2, target: Vec2, rate: f32) -> Vec2 {
    current + (target - current) * rate
}

/// Smoothing rate with settling: `base` normally, `base / 2` once the gap
/// between `current` and `target` is below `settle_within`.
#[inline]
#[must_use]
pub fn settling_rate(
    current: f32,
    target: f32,
    base: f32,
    settle_within: f32,
) -> f32 {
    if (target - current).abs() < settle_within {
        base * 0.5
    } else {
        base
    }
}

/// Sign of `value` as the host page computed it: `0.0` for zero, `±1.0`
/// otherwise. Unlike [`f32::signum`], zero stays zero.
#[inline]
#[must_use]
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_moves_fractionally() {
        assert!((approach(0.0, 10.0, 0.1) - 1.0).abs() < 1e-6);
        assert!((approach(10.0, 0.0, 0.5) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn approach_never_overshoots_for_unit_rates() {
        let mut v = 0.0;
        for _ in 0..500 {
            v = approach(v, 1.0, 0.3);
            assert!(v <= 1.0);
        }
        assert!((v - 1.0).abs() < 1e-5);
    }

    #[test]
    fn settling_halves_rate_near_target() {
        assert_eq!(settling_rate(0.0, 1.0, 0.1, 0.1), 0.1);
        assert_eq!(settling_rate(0.95, 1.0, 0.1, 0.1), 0.05);
    }

    #[test]
    fn sign_keeps_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(3.0), 1.0);
        assert_eq!(sign(-0.2), -1.0);
    }

    #[test]
    fn approach_vec2_componentwise() {
        let v = approach_vec2(Vec2::ZERO, Vec2::new(2.0, -4.0), 0.25);
        assert!((v - Vec2::new(0.5, -1.0)).length() < 1e-6);
    }
}
