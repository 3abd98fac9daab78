//! Perspective camera used to draw the strip and project title anchors.

/// Core camera struct and GPU uniform type.
pub mod core;

pub use self::core::{Camera, CameraUniform};
