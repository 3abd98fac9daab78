use web_time::{Duration, Instant};

/// Frame delta used when the host cannot supply a usable one (first frame,
/// zero-length or non-finite intervals).
pub const DEFAULT_FRAME_DT: f32 = 0.016;

/// Replace a degenerate frame delta with [`DEFAULT_FRAME_DT`].
#[inline]
#[must_use]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        DEFAULT_FRAME_DT
    }
}

/// Frame clock turning wall-clock instants into per-frame deltas.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameTiming {
    /// Last frame timestamp (`None` before the first tick).
    last_frame: Option<Instant>,
}

impl FrameTiming {
    /// Create a clock that has not ticked yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock to `now` and return the elapsed seconds since the
    /// previous tick. The first tick reports [`DEFAULT_FRAME_DT`].
    pub fn tick(&mut self, now: Instant) -> f32 {
        let elapsed = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_frame = Some(now);
        sanitize_dt(elapsed.as_secs_f32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_uses_default_dt() {
        let mut timing = FrameTiming::new();
        assert_eq!(timing.tick(Instant::now()), DEFAULT_FRAME_DT);
    }

    #[test]
    fn tick_reports_elapsed_seconds() {
        let mut timing = FrameTiming::new();
        let start = Instant::now();
        let _ = timing.tick(start);
        let dt = timing.tick(start + Duration::from_millis(20));
        assert!((dt - 0.02).abs() < 1e-4);
    }

    #[test]
    fn zero_length_frame_falls_back() {
        let mut timing = FrameTiming::new();
        let start = Instant::now();
        let _ = timing.tick(start);
        assert_eq!(timing.tick(start), DEFAULT_FRAME_DT);
    }

    #[test]
    fn sanitize_rejects_degenerate_values() {
        assert_eq!(sanitize_dt(0.0), DEFAULT_FRAME_DT);
        assert_eq!(sanitize_dt(-1.0), DEFAULT_FRAME_DT);
        assert_eq!(sanitize_dt(f32::NAN), DEFAULT_FRAME_DT);
        assert_eq!(sanitize_dt(f32::INFINITY), DEFAULT_FRAME_DT);
        assert_eq!(sanitize_dt(0.033), 0.033);
    }
}
