//! Single-image operations: resolve the output target, run the backend.
//!
//! These functions combine name resolution with backend execution. They take
//! the raw command-line inputs, compute the output path, and call the
//! backend — both the per-command paths in `main` and the bulk dispatcher go
//! through them, so the naming and flattening rules stay in one place.

use crate::benefit::benefit;
use crate::imaging::{BackendError, ImageBackend, OptimizeParams, Quality, ResizeParams};
use crate::naming;
use std::path::{Path, PathBuf};

/// Result type for single-image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Options shared by `optimize-image` and each bulk task.
#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub quality: Quality,
    pub output_dir: Option<PathBuf>,
}

/// What an optimize run produced: where it landed and what it saved.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeReport {
    pub output: PathBuf,
    pub benefit_percent: f64,
}

/// Resize an image to exact dimensions, keeping the source format.
///
/// Default output name is `<stem>_resized<ext>`, resolved against
/// `output_dir` if given.
pub fn resize_file(
    backend: &impl ImageBackend,
    source: &Path,
    explicit_name: Option<&str>,
    output_dir: Option<&Path>,
    width: u32,
    height: u32,
) -> Result<PathBuf> {
    let name = naming::output_name(explicit_name, source, naming::RESIZE);
    let output = naming::resolve_output_path(output_dir, &name)?;

    backend.resize(&ResizeParams {
        source: source.to_path_buf(),
        output: output.clone(),
        width,
        height,
    })?;
    Ok(output)
}

/// Re-encode an image as JPEG, optionally resizing, and report the benefit.
///
/// The `.jpg` extension is forced on the final path even when an explicit
/// name carries another extension — this operation only ever writes JPEG.
pub fn optimize_file(
    backend: &impl ImageBackend,
    source: &Path,
    explicit_name: Option<&str>,
    options: &OptimizeOptions,
) -> Result<OptimizeReport> {
    let name = naming::output_name(explicit_name, source, naming::OPTIMIZE);
    let output =
        naming::resolve_output_path(options.output_dir.as_deref(), &name)?.with_extension("jpg");

    let outcome = backend.optimize(&OptimizeParams {
        source: source.to_path_buf(),
        output: output.clone(),
        width: options.width,
        height: options.height,
        quality: options.quality,
    })?;

    Ok(OptimizeReport {
        output,
        benefit_percent: benefit(outcome.original_bytes, outcome.final_bytes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};

    fn options() -> OptimizeOptions {
        OptimizeOptions {
            width: None,
            height: None,
            quality: Quality::new(85),
            output_dir: None,
        }
    }

    #[test]
    fn resize_uses_default_name_next_to_cwd() {
        let backend = MockBackend::new();
        let output =
            resize_file(&backend, Path::new("photo.png"), None, None, 200, 100).unwrap();

        assert_eq!(output, PathBuf::from("photo_resized.png"));
        let ops = backend.get_operations();
        assert!(matches!(
            &ops[0],
            RecordedOp::Resize {
                width: 200,
                height: 100,
                ..
            }
        ));
    }

    #[test]
    fn resize_explicit_name_wins() {
        let backend = MockBackend::new();
        let output = resize_file(
            &backend,
            Path::new("photo.png"),
            Some("cover.webp"),
            None,
            64,
            64,
        )
        .unwrap();

        assert_eq!(output, PathBuf::from("cover.webp"));
    }

    #[test]
    fn optimize_default_name_is_stem_opt_jpg() {
        let backend = MockBackend::new();
        let report =
            optimize_file(&backend, Path::new("photo.png"), None, &options()).unwrap();

        assert_eq!(report.output, PathBuf::from("photo_opt.jpg"));
        // Mock reports 1000 → 400 bytes
        assert_eq!(report.benefit_percent, 60.0);
    }

    #[test]
    fn optimize_forces_jpg_on_explicit_name() {
        let backend = MockBackend::new();
        let report = optimize_file(
            &backend,
            Path::new("photo.png"),
            Some("custom.png"),
            &options(),
        )
        .unwrap();

        assert_eq!(report.output, PathBuf::from("custom.jpg"));
    }

    #[test]
    fn optimize_resolves_against_output_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("out");
        let backend = MockBackend::new();

        let report = optimize_file(
            &backend,
            Path::new("photo.jpg"),
            None,
            &OptimizeOptions {
                output_dir: Some(dir.clone()),
                ..options()
            },
        )
        .unwrap();

        assert_eq!(report.output, dir.join("photo_opt.jpg"));
        assert!(dir.is_dir());
    }

    #[test]
    fn optimize_passes_dimensions_and_quality_through() {
        let backend = MockBackend::new();
        optimize_file(
            &backend,
            Path::new("photo.jpg"),
            None,
            &OptimizeOptions {
                width: Some(640),
                height: None,
                quality: Quality::new(40),
                output_dir: None,
            },
        )
        .unwrap();

        let ops = backend.get_operations();
        assert!(matches!(
            &ops[0],
            RecordedOp::Optimize {
                width: Some(640),
                height: None,
                quality: 40,
                ..
            }
        ));
    }

    #[test]
    fn optimize_propagates_backend_failure() {
        let backend = MockBackend::failing_on(&["broken.png"]);
        let result = optimize_file(&backend, Path::new("broken.png"), None, &options());
        assert!(result.is_err());
    }
}
