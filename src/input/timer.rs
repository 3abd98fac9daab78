//! Deadline-keyed idle timers.
//!
//! Replaces ambient timer callbacks with explicit state: arming stores a
//! deadline, re-arming replaces it (last event wins), and the frame driver
//! polls the timer once per tick.

use web_time::{Duration, Instant};

/// A one-shot, re-armable timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl IdleTimer {
    /// An unarmed timer that fires `delay` after each arm.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Schedule the timer to fire `delay` after `now`, replacing any
    /// pending deadline.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when `now` reaches the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(150);

    #[test]
    fn unarmed_timer_never_fires() {
        let mut timer = IdleTimer::new(DELAY);
        assert!(!timer.poll(Instant::now() + Duration::from_secs(10)));
    }

    #[test]
    fn fires_once_after_deadline() {
        let start = Instant::now();
        let mut timer = IdleTimer::new(DELAY);
        timer.arm(start);
        assert!(!timer.poll(start + Duration::from_millis(149)));
        assert!(timer.poll(start + Duration::from_millis(150)));
        assert!(!timer.poll(start + Duration::from_millis(400)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn rearm_postpones_deadline() {
        let start = Instant::now();
        let mut timer = IdleTimer::new(DELAY);
        timer.arm(start);
        timer.arm(start + Duration::from_millis(100));
        assert!(!timer.poll(start + Duration::from_millis(200)));
        assert!(timer.poll(start + Duration::from_millis(250)));
    }

    #[test]
    fn cancel_drops_deadline() {
        let start = Instant::now();
        let mut timer = IdleTimer::new(DELAY);
        timer.arm(start);
        timer.cancel();
        assert!(!timer.poll(start + Duration::from_secs(1)));
    }
}
