//! Normalizes key, wheel and touch events into scroll-state changes.
//!
//! The `InputAggregator` owns the transient gesture state (touch start,
//! accumulated drag, throttle clock) and the two idle timers that end a
//! scroll. Everything it changes lives in the caller-owned
//! [`MotionState`] and [`DistortionState`].

use web_time::{Duration, Instant};

use super::event::InputEvent;
use super::keyboard::KeyAction;
use super::timer::IdleTimer;
use crate::distortion::DistortionState;
use crate::motion::MotionState;
use crate::options::Options;
use crate::util::smoothing::sign;

/// Distortion added per pixel of wheel delta.
const WHEEL_DISTORTION_PER_DELTA: f32 = 0.001;
/// Momentum per pixel of wheel delta.
const WHEEL_MOMENTUM_PER_DELTA: f32 = 0.0005;
/// Largest momentum a single wheel event can start.
const WHEEL_MOMENTUM_LIMIT: f32 = 0.05;
/// Distortion added by a key press.
const KEY_DISTORTION_IMPULSE: f32 = 0.4;
/// Distortion added per pixel of applied touch drag.
const TOUCH_DISTORTION_PER_PIXEL: f32 = 0.02;
/// Accumulated drag (pixels) that forces an update.
const TOUCH_APPLY_THRESHOLD: f32 = 1.0;
/// Throttled touch updates wait strictly longer than this.
const TOUCH_APPLY_INTERVAL: Duration = Duration::from_millis(50);
/// Fling velocity per pixel of total gesture travel.
const FLING_VELOCITY_PER_PIXEL: f32 = 0.005;
/// Fling velocity required to start momentum.
const FLING_THRESHOLD: f32 = 0.5;
/// Scale from fling velocity to momentum (after the multiplier).
const FLING_MOMENTUM_SCALE: f32 = 0.05;
/// Scale from fling velocity to distortion (before sensitivity).
const FLING_DISTORTION_SCALE: f32 = 3.0;

/// Quiet period after the last wheel event that ends a scroll.
pub const SCROLL_IDLE_DELAY: Duration = Duration::from_millis(150);
/// Quiet period after a fling that ends its momentum phase.
pub const MOMENTUM_IDLE_DELAY: Duration = Duration::from_millis(800);

/// State of the touch (or drag) gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TouchGesture {
    start_x: f32,
    last_x: f32,
    accumulated: f32,
    last_applied: Option<Instant>,
}

impl TouchGesture {
    fn new(x: f32) -> Self {
        Self {
            start_x: x,
            last_x: x,
            accumulated: 0.0,
            last_applied: None,
        }
    }

    /// Whether the accumulated drag should be applied at `now`.
    fn due(&self, now: Instant) -> bool {
        self.accumulated.abs() > TOUCH_APPLY_THRESHOLD
            || self.last_applied.is_none_or(|last| {
                now.saturating_duration_since(last) > TOUCH_APPLY_INTERVAL
            })
    }
}

/// Converts raw input into motion and distortion changes.
///
/// # Usage
///
/// ```ignore
/// aggregator.apply(event, now, &mut motion, &mut distortion, &options);
/// // once per frame, before advancing the motion model:
/// aggregator.poll_timers(now, &mut motion);
/// ```
#[derive(Debug, Clone)]
pub struct InputAggregator {
    touch: Option<TouchGesture>,
    scroll_idle: IdleTimer,
    momentum_idle: IdleTimer,
}

impl InputAggregator {
    /// Aggregator with no gesture in progress and both timers idle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            touch: None,
            scroll_idle: IdleTimer::new(SCROLL_IDLE_DELAY),
            momentum_idle: IdleTimer::new(MOMENTUM_IDLE_DELAY),
        }
    }

    /// Whether a touch gesture is in progress.
    #[must_use]
    pub fn touch_active(&self) -> bool {
        self.touch.is_some()
    }

    /// Apply one event. Returns `false` for events this aggregator does not
    /// handle (resize) or drops (non-finite values, stray touch events).
    pub fn apply(
        &mut self,
        event: InputEvent,
        now: Instant,
        motion: &mut MotionState,
        distortion: &mut DistortionState,
        options: &Options,
    ) -> bool {
        match event {
            InputEvent::Key { action } => {
                Self::key_press(action, motion, distortion, options);
                true
            }
            InputEvent::Wheel { delta_y } => {
                if !delta_y.is_finite() {
                    log::debug!("dropping non-finite wheel delta {delta_y}");
                    return false;
                }
                self.wheel(delta_y, now, motion, distortion, options);
                true
            }
            InputEvent::TouchStart { x } => {
                if !x.is_finite() {
                    log::debug!("dropping non-finite touch start {x}");
                    return false;
                }
                self.touch = Some(TouchGesture::new(x));
                motion.is_scrolling = false;
                true
            }
            InputEvent::TouchMove { x } => {
                if !x.is_finite() {
                    log::debug!("dropping non-finite touch move {x}");
                    return false;
                }
                self.touch_move(x, now, motion, distortion, options)
            }
            InputEvent::TouchEnd => {
                self.touch_end(now, motion, distortion, options)
            }
            InputEvent::Resize { .. } => false,
        }
    }

    /// Step the strip one slide unit for a bound key.
    pub fn key_press(
        action: KeyAction,
        motion: &mut MotionState,
        distortion: &mut DistortionState,
        options: &Options,
    ) {
        let direction = action.direction();
        motion.nudge_target(direction * options.layout.slide_unit());
        distortion.add_impulse(KEY_DISTORTION_IMPULSE);
        motion.movement_direction.x = direction;
    }

    fn wheel(
        &mut self,
        delta_y: f32,
        now: Instant,
        motion: &mut MotionState,
        distortion: &mut DistortionState,
        options: &Options,
    ) {
        distortion.add_impulse(delta_y.abs() * WHEEL_DISTORTION_PER_DELTA);
        motion.nudge_target(-delta_y * options.motion.wheel_sensitivity);
        motion.is_scrolling = true;
        motion.auto_scroll_speed = (delta_y.abs() * WHEEL_MOMENTUM_PER_DELTA)
            .min(WHEEL_MOMENTUM_LIMIT)
            * sign(delta_y);
        motion.movement_direction.x = -sign(delta_y);
        self.scroll_idle.arm(now);
    }

    fn touch_move(
        &mut self,
        x: f32,
        now: Instant,
        motion: &mut MotionState,
        distortion: &mut DistortionState,
        options: &Options,
    ) -> bool {
        let Some(gesture) = self.touch.as_mut() else {
            log::debug!("touch move without an active gesture");
            return false;
        };
        gesture.accumulated += x - gesture.last_x;
        gesture.last_x = x;
        if !gesture.due(now) {
            return true;
        }

        let accumulated = gesture.accumulated;
        distortion.add_impulse(accumulated.abs() * TOUCH_DISTORTION_PER_PIXEL);
        motion.nudge_target(-accumulated * options.motion.touch_sensitivity);
        motion.movement_direction.x = -sign(accumulated);
        motion.is_scrolling = true;
        gesture.accumulated = 0.0;
        gesture.last_applied = Some(now);
        true
    }

    fn touch_end(
        &mut self,
        now: Instant,
        motion: &mut MotionState,
        distortion: &mut DistortionState,
        options: &Options,
    ) -> bool {
        let Some(gesture) = self.touch.take() else {
            log::debug!("touch end without an active gesture");
            return false;
        };
        let velocity =
            (gesture.last_x - gesture.start_x) * FLING_VELOCITY_PER_PIXEL;
        if velocity.abs() > FLING_THRESHOLD {
            motion.auto_scroll_speed = -velocity
                * options.motion.momentum_multiplier
                * FLING_MOMENTUM_SCALE;
            distortion.set_impulse(
                velocity.abs()
                    * FLING_DISTORTION_SCALE
                    * options.distortion.sensitivity,
            );
            motion.movement_direction.x = -sign(velocity);
            motion.is_scrolling = true;
            self.momentum_idle.arm(now);
        }
        true
    }

    /// Fire expired idle timers. Either one ending clears
    /// `motion.is_scrolling`.
    pub fn poll_timers(&mut self, now: Instant, motion: &mut MotionState) {
        let scroll_ended = self.scroll_idle.poll(now);
        let momentum_ended = self.momentum_idle.poll(now);
        if scroll_ended || momentum_ended {
            motion.is_scrolling = false;
        }
    }
}

impl Default for InputAggregator {
    fn default() -> Self {
        Self::new()
    }
}
