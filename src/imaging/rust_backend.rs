//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, WebP) | `image` crate (pure Rust decoders) |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` with explicit quality |
//! | Encode → source format | `DynamicImage::save` (format from extension) |

use super::backend::{BackendError, ImageBackend, ImageInfo, OptimizeOutcome};
use super::params::{OptimizeParams, Quality, ResizeParams};
use super::transform;
use image::{ColorType, DynamicImage, ImageReader};
use std::path::Path;

/// Extensions whose decoders are compiled in and known to work.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// PIL-style short name for a channel layout.
fn color_mode_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "L16",
        ColorType::La16 => "LA16",
        ColorType::Rgb16 => "RGB16",
        ColorType::Rgba16 => "RGBA16",
        ColorType::Rgb32F => "RGB32F",
        ColorType::Rgba32F => "RGBA32F",
        _ => "unknown",
    }
}

/// Save keeping the source format, inferred from the output extension.
fn save_as_source_format(img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
    img.save(path).map_err(|e| {
        BackendError::ProcessingFailed(format!("Failed to encode {}: {}", path.display(), e))
    })
}

/// Encode and save as JPEG at the given quality.
fn save_jpeg(img: &DynamicImage, path: &Path, quality: Quality) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(writer, quality.value() as u8);
    img.write_with_encoder(encoder)
        .map_err(|e| BackendError::ProcessingFailed(format!("JPEG encode failed: {}", e)))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<ImageInfo, BackendError> {
        let reader = ImageReader::open(path)
            .map_err(BackendError::Io)?
            .with_guessed_format()
            .map_err(BackendError::Io)?;
        let format = reader
            .format()
            .map(|f| format!("{f:?}").to_uppercase())
            .unwrap_or_else(|| "unknown".to_string());
        let img = reader.decode().map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })?;

        Ok(ImageInfo {
            name: path.display().to_string(),
            format,
            width: img.width(),
            height: img.height(),
            color_mode: color_mode_name(img.color()).to_string(),
        })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let resized = img.resize_exact(
            params.width,
            params.height,
            image::imageops::FilterType::Lanczos3,
        );
        save_as_source_format(&resized, &params.output)
    }

    fn optimize(&self, params: &OptimizeParams) -> Result<OptimizeOutcome, BackendError> {
        let original_bytes = std::fs::metadata(&params.source)
            .map_err(BackendError::Io)?
            .len();

        // Order matters: normalize transparency, resize, then flatten alpha.
        let img = load_image(&params.source)?;
        let img = transform::normalize_transparency(img);
        let img = transform::apply_resize(img, params.width, params.height);
        let img = transform::flatten_for_jpeg(img);

        save_jpeg(&img, &params.output, params.quality)?;

        let final_bytes = std::fs::metadata(&params.output)
            .map_err(BackendError::Io)?
            .len();
        Ok(OptimizeOutcome {
            original_bytes,
            final_bytes,
        })
    }
}
