//! # imgopt
//!
//! A command-line image inspector, resizer, and JPEG optimizer. Point it at
//! a file to see what it is, resize it to exact dimensions, or re-encode it
//! as JPEG at a lower quality — or point it at a whole directory and let it
//! fan the work out across every core.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Backend trait + pure-Rust backend, raster transforms, operation params |
//! | [`naming`] | Output filename conventions (`_opt`, `_resized`) and path resolution |
//! | [`benefit`] | File-size benefit percentage |
//! | [`process`] | Single-image operations: resize, optimize (name → backend → report) |
//! | [`bulk`] | Directory enumeration + parallel dispatch with per-file failure isolation |
//! | [`output`] | CLI output formatting — pure `format_*` functions + colored print wrappers |
//!
//! # Design Decisions
//!
//! ## Pure-Rust Imaging (No ImageMagick, No FFmpeg)
//!
//! The [`imaging`] module uses the `image` crate (Lanczos3 resampling, JPEG
//! encoding with explicit quality) — pure Rust, statically linked. A user
//! can download a single binary and it just works, on any machine.
//!
//! ## Fixed Transform Order
//!
//! The optimize path always runs normalize transparency → resize → flatten
//! alpha. Flattening before the resize would shift pixel values along the
//! edges of transparent regions, so the order is part of the contract, not
//! an implementation detail.
//!
//! ## Per-File Failure Isolation
//!
//! Bulk runs wrap every task in its own error boundary. One unreadable file
//! produces one red line tagged with its name; the remaining files are
//! processed normally and the process still exits 0.

pub mod benefit;
pub mod bulk;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
