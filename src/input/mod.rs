//! Input handling: event types, key actions, idle timers, and the
//! aggregator that turns raw events into scroll-state changes.

/// Normalizes events into motion and distortion changes.
pub mod aggregator;
/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Re-armable deadline timers.
pub mod timer;

pub use aggregator::{InputAggregator, MOMENTUM_IDLE_DELAY, SCROLL_IDLE_DELAY};
pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use timer::IdleTimer;
