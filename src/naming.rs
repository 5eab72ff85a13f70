//! Output name and path resolution.
//!
//! Every command derives a default output filename from the source path and
//! an operation-specific convention tag, then resolves it against an
//! optional output directory:
//!
//! - `photo.png` + resize → `photo_resized.png`
//! - `photo.png` + optimize → `photo_opt.jpg` (JPEG output is forced)
//! - an explicit `--name` wins verbatim
//!
//! The resolved path is a pure function of the inputs; the only filesystem
//! effect is creating the output directory (with parents) when it is missing.

use std::io;
use std::path::{Path, PathBuf};

/// Naming convention for one operation's default output filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameConvention {
    /// Tag appended to the source stem (e.g. "_opt").
    pub tag: &'static str,
    /// Extension the operation forces on default names, if any.
    pub forced_ext: Option<&'static str>,
}

/// Convention for `optimize-image` and `optimize-bulk`: `<stem>_opt.jpg`.
pub const OPTIMIZE: NameConvention = NameConvention {
    tag: "_opt",
    forced_ext: Some("jpg"),
};

/// Convention for `resize-image`: `<stem>_resized<original ext>`.
pub const RESIZE: NameConvention = NameConvention {
    tag: "_resized",
    forced_ext: None,
};

/// Derive the output filename for a source path under a convention.
///
/// An explicit name is returned verbatim. Otherwise the name is
/// `<stem><tag>.<ext>` where `<ext>` is the convention's forced extension or,
/// failing that, the source extension.
pub fn output_name(explicit: Option<&str>, source: &Path, convention: NameConvention) -> String {
    if let Some(name) = explicit {
        return name.to_string();
    }

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = convention
        .forced_ext
        .map(str::to_string)
        .or_else(|| source.extension().map(|e| e.to_string_lossy().into_owned()));

    match ext {
        Some(ext) => format!("{stem}{}.{ext}", convention.tag),
        None => format!("{stem}{}", convention.tag),
    }
}

/// Resolve a filename against an optional output directory.
///
/// The directory is created with parents when missing; creation is
/// idempotent and tolerates concurrent creators (`create_dir_all` does not
/// fail when the directory already exists). Without a directory the name is
/// returned as a path relative to the current working directory.
pub fn resolve_output_path(output_dir: Option<&Path>, name: &str) -> io::Result<PathBuf> {
    match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Ok(dir.join(name))
        }
        None => Ok(PathBuf::from(name)),
    }
}
