//! Crate-level error types.

use std::fmt;

use crate::gpu::GpuInitError;

/// Errors produced by the carousel crate.
#[derive(Debug)]
pub enum CarouselError {
    /// GPU bring-up failure.
    Gpu(GpuInitError),
    /// A panel texture failed to load. Never fatal: the panel keeps
    /// animating with whatever placeholder the surface provides.
    AssetLoad {
        /// Panel whose texture failed.
        index: usize,
        /// Loader-provided reason.
        reason: String,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::AssetLoad { index, reason } => {
                write!(f, "texture load failed for panel {index}: {reason}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for CarouselError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GpuInitError> for CarouselError {
    fn from(e: GpuInitError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for CarouselError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_load_message_names_panel() {
        let err = CarouselError::AssetLoad {
            index: 2,
            reason: "404".into(),
        };
        assert_eq!(err.to_string(), "texture load failed for panel 2: 404");
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err = CarouselError::from(std::io::Error::other("disk"));
        assert!(err.source().is_some());
    }
}
