//! Velocity-reactive panel distortion.
//!
//! [`DistortionState`] holds the shared factor; [`DistortionModel`] turns
//! each frame's [`MotionSample`](crate::motion::MotionSample) into a
//! [`DistortionSignal`] consumed by every panel.

pub mod model;
/// Shared distortion factor with its bounds.
pub mod state;

pub use model::{DistortionModel, DistortionSignal};
pub use state::{DistortionState, IMPULSE_CEILING};
