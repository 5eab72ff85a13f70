//! Raster transforms shared by the resize and optimize paths.
//!
//! The pipeline order is fixed: normalize transparency, then resize, then
//! flatten alpha for the target encoder. Flattening before the resize would
//! change pixel values along the edges of transparent regions, so the steps
//! must not be reordered.

use image::DynamicImage;
use image::imageops::FilterType;

/// Resolve the target dimensions for an optional resize.
///
/// Returns `None` when neither axis is given (no resize at all). A missing
/// axis defaults to the image's current value — no aspect-ratio inference
/// beyond carrying the original dimension forward.
pub fn resolve_target(
    current: (u32, u32),
    width: Option<u32>,
    height: Option<u32>,
) -> Option<(u32, u32)> {
    if width.is_none() && height.is_none() {
        return None;
    }
    Some((width.unwrap_or(current.0), height.unwrap_or(current.1)))
}

/// Expand any raster carrying transparency to plain 8-bit RGBA.
///
/// Palette sources with a transparency key arrive from the decoder already
/// expanded, but 16-bit and luma-alpha rasters still need normalizing so the
/// resample filter sees a uniform alpha channel.
pub fn normalize_transparency(img: DynamicImage) -> DynamicImage {
    if img.color().has_alpha() && !matches!(img, DynamicImage::ImageRgba8(_)) {
        DynamicImage::ImageRgba8(img.to_rgba8())
    } else {
        img
    }
}

/// Resize to the exact target dimensions, if any, with Lanczos3 resampling.
pub fn apply_resize(img: DynamicImage, width: Option<u32>, height: Option<u32>) -> DynamicImage {
    match resolve_target((img.width(), img.height()), width, height) {
        Some((w, h)) => img.resize_exact(w, h, FilterType::Lanczos3),
        None => img,
    }
}

/// Reduce a raster to a color layout the JPEG encoder accepts (L8 or Rgb8).
///
/// Alpha is dropped here, after any resize. Handing an RGBA raster to the
/// JPEG encoder is an encode error, so every optimize path runs through this.
pub fn flatten_for_jpeg(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => img,
        DynamicImage::ImageLuma16(_) => DynamicImage::ImageLuma8(img.to_luma8()),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, RgbImage, RgbaImage};

    fn rgba_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, _| {
            image::Rgba([200, 100, 50, if x % 2 == 0 { 0 } else { 255 }])
        }))
    }

    #[test]
    fn resolve_target_both_missing_is_none() {
        assert_eq!(resolve_target((400, 300), None, None), None);
    }

    #[test]
    fn resolve_target_carries_forward_missing_height() {
        assert_eq!(resolve_target((400, 300), Some(200), None), Some((200, 300)));
    }

    #[test]
    fn resolve_target_carries_forward_missing_width() {
        assert_eq!(resolve_target((400, 300), None, Some(150)), Some((400, 150)));
    }

    #[test]
    fn resolve_target_both_given_wins() {
        assert_eq!(
            resolve_target((400, 300), Some(64), Some(48)),
            Some((64, 48))
        );
    }

    #[test]
    fn apply_resize_without_targets_keeps_dimensions() {
        let img = apply_resize(rgba_image(40, 30), None, None);
        assert_eq!((img.width(), img.height()), (40, 30));
    }

    #[test]
    fn apply_resize_is_exact_not_aspect_preserving() {
        // 2:1 source squeezed into a square — resize must not letterbox or fit
        let img = apply_resize(rgba_image(80, 40), Some(20), Some(20));
        assert_eq!((img.width(), img.height()), (20, 20));
    }

    #[test]
    fn normalize_keeps_opaque_rgb_untouched() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(10, 10));
        let out = normalize_transparency(img);
        assert!(matches!(out, DynamicImage::ImageRgb8(_)));
    }

    #[test]
    fn normalize_expands_luma_alpha_to_rgba() {
        let img = DynamicImage::ImageLumaA8(image::GrayAlphaImage::new(10, 10));
        let out = normalize_transparency(img);
        assert!(matches!(out, DynamicImage::ImageRgba8(_)));
    }

    #[test]
    fn flatten_drops_alpha_channel() {
        let out = flatten_for_jpeg(rgba_image(10, 10));
        assert!(!out.color().has_alpha());
        assert!(matches!(out, DynamicImage::ImageRgb8(_)));
    }

    #[test]
    fn flatten_keeps_grayscale_as_luma() {
        let img = DynamicImage::ImageLuma8(GrayImage::new(10, 10));
        let out = flatten_for_jpeg(img);
        assert!(matches!(out, DynamicImage::ImageLuma8(_)));
    }
}
