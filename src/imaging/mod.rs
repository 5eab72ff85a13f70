//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::ImageReader` + decode |
//! | **Resize** | `resize_exact` with Lanczos3 |
//! | **Optimize → JPEG** | normalize → resize → flatten → `JpegEncoder` |
//!
//! The module is split into:
//! - **Transform**: Pure raster steps and dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod params;
pub mod rust_backend;
pub mod transform;

pub use backend::{BackendError, ImageBackend, ImageInfo, OptimizeOutcome};
pub use params::{OptimizeParams, Quality, ResizeParams};
pub use rust_backend::{RustBackend, SUPPORTED_EXTENSIONS};
