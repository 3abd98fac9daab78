//! Screen-space title overlays that follow their panels.
//!
//! Each visible panel's world position is projected through the camera
//! into overlay pixels; titles fade and blur as their panel leaves the
//! center of the strip.

mod projector;

pub use projector::{fade, FadeBand, OverlayPlacement, OverlayProjector};
