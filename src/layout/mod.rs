//! Panel placement on the infinitely wrapping strip.
//!
//! Each panel's logical slot is wrapped around the scroll position into a
//! strip centered on the origin. Panels slide toward their slot, snap
//! across the wrap seam, sink back with distance from the center, and
//! tilt with the shared distortion.

/// Panel state and world transform.
pub mod panel;
pub mod strip;
pub mod wrap;

pub use panel::{Panel, PanelTransform};
pub use strip::PanelLayoutEngine;
pub use wrap::wrapped_offset;
