//! Bulk optimization: enumerate a directory, fan work out across the pool.
//!
//! One task per file is dispatched over rayon's thread pool (sized to host
//! parallelism). Tasks share no mutable state; the only resource touched
//! concurrently is the output directory, and directory creation is
//! idempotent. Completion order is not guaranteed and nothing depends on it.
//!
//! ## Failure isolation
//!
//! A failure while processing one file is caught at the task boundary and
//! reported as a [`BulkEvent::Failed`] tagged with that file's name. It does
//! not abort sibling tasks, and the dispatcher itself still returns
//! normally — bulk per-file errors never change the process exit code.
//!
//! Workers report through an mpsc channel; the caller owns the receiving
//! side (typically a printer thread). [`dispatch`] blocks until every task
//! has completed.

use crate::imaging::{ImageBackend, SUPPORTED_EXTENSIONS};
use crate::process::{self, OptimizeOptions};
use rayon::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

/// Per-file outcome sent from a worker to the printer.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkEvent {
    Completed {
        file: String,
        output: PathBuf,
        benefit_percent: f64,
    },
    Failed {
        file: String,
        message: String,
    },
}

/// Immediate files under `dir` whose extension is in the allow-list.
///
/// The match is case-sensitive (`photo.PNG` is skipped) and subdirectories
/// are not descended into. Enumeration order is filesystem-dependent.
pub fn find_images(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext));
        if matches {
            files.push(path);
        }
    }
    Ok(files)
}

/// Optimize every file in parallel, one event per file, blocking until done.
pub fn dispatch(
    backend: &impl ImageBackend,
    files: &[PathBuf],
    options: &OptimizeOptions,
    events: Option<Sender<BulkEvent>>,
) {
    files.par_iter().for_each_with(events, |events, file| {
        let event = run_one(backend, file, options);
        if let Some(tx) = events {
            // The receiver hanging up is not a task failure
            tx.send(event).ok();
        }
    });
}

/// Process a single file, converting any error into a tagged `Failed` event.
fn run_one(backend: &impl ImageBackend, file: &Path, options: &OptimizeOptions) -> BulkEvent {
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    match process::optimize_file(backend, file, None, options) {
        Ok(report) => BulkEvent::Completed {
            file: file_name,
            output: report.output,
            benefit_percent: report.benefit_percent,
        },
        Err(e) => BulkEvent::Failed {
            file: file_name,
            message: e.to_string(),
        },
    }
}
