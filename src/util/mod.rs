//! Shared utilities for the carousel engine.
//!
//! Helpers for frame timing and exponential smoothing.

/// Frame clock and dt fallback.
pub mod frame_timing;
pub mod smoothing;
