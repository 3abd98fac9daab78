// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Momentum-driven infinite carousel with velocity-reactive distortion.
//!
//! Raw wheel, touch, and key input becomes a smoothed scroll position,
//! a velocity signal, and a shared distortion factor; a row of image
//! panels wraps seamlessly around that position and bends with it, and
//! screen-space titles follow their panels.
//!
//! # Key entry points
//!
//! - [`engine::CarouselEngine`] - owns all state and runs the frame loop
//! - [`input::InputEvent`] - platform-agnostic input
//! - [`render::RenderSurface`] / [`render::OverlayHost`] - what the engine
//!   draws into
//! - [`options::Options`] - tuning parameters with TOML presets
//!
//! # Architecture
//!
//! Each frame runs input aggregation → motion → distortion → panel layout
//! → overlay projection. The numeric core is free of GPU types; the
//! [`gpu`] module provides a reference wgpu surface and, with the `viewer`
//! feature, `Viewer` opens a winit window around it.

pub mod camera;
pub mod distortion;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod layout;
pub mod motion;
pub mod options;
pub mod overlay;
pub mod render;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{CarouselEngine, Viewport};
pub use error::CarouselError;
pub use input::InputEvent;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
