//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three operations every backend
//! must support: identify, resize, and optimize.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, zero
//! external dependencies. Everything is statically linked into the binary.

use super::params::{OptimizeParams, ResizeParams};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation: what `imgopt info` prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// Source path as given on the command line.
    pub name: String,
    /// On-disk format (e.g. "JPEG", "PNG", "WEBP").
    pub format: String,
    pub width: u32,
    pub height: u32,
    /// Channel layout of the decoded raster (e.g. "RGB", "RGBA", "L").
    pub color_mode: String,
}

/// Byte sizes measured around an optimize operation.
///
/// The benefit percentage is derived from these by the caller; the backend
/// only reports what it saw on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizeOutcome {
    pub original_bytes: u64,
    pub final_bytes: u64,
}

/// Trait for image processing backends.
///
/// Every backend must implement all three operations so the command layer
/// and the bulk dispatcher are backend-agnostic.
pub trait ImageBackend: Sync {
    /// Decode an image far enough to report format, dimensions, and color mode.
    fn identify(&self, path: &Path) -> Result<ImageInfo, BackendError>;

    /// Resize to exact dimensions, keeping the source format.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;

    /// Re-encode as JPEG at the given quality, optionally resizing first.
    fn optimize(&self, params: &OptimizeParams) -> Result<OptimizeOutcome, BackendError>;
}
