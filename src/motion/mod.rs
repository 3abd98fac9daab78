//! Scroll position, momentum and velocity tracking.
//!
//! [`MotionState`] is written by input handlers between frames;
//! [`MotionModel::advance`] runs once at the start of each frame and emits a
//! [`MotionSample`] that every later stage of the frame consumes.

pub mod history;
pub mod model;
/// Caller-owned scroll state.
pub mod state;

pub use history::{VelocityHistory, VELOCITY_HISTORY_LEN, VELOCITY_WEIGHTS};
pub use model::{MotionModel, MotionSample};
pub use state::MotionState;
