//! CLI output formatting.
//!
//! Each message has a pure `format_*` function (returns plain text, easy to
//! assert on) and a `print_*` wrapper that applies terminal colors and
//! writes to the right stream. Values are green, the benefit figure magenta,
//! warnings yellow, and errors red — error lines go to stderr, everything
//! else to stdout.

use crate::bulk::BulkEvent;
use crate::imaging::ImageInfo;
use crate::process::OptimizeReport;
use colored::Colorize;
use std::path::Path;

/// The four lines `info` prints, without styling.
pub fn format_info(info: &ImageInfo) -> Vec<String> {
    vec![
        format!("Image name: {}", info.name),
        format!("Image format: {}", info.format),
        format!("Image size: {}x{}", info.width, info.height),
        format!("Image mode: {}", info.color_mode),
    ]
}

/// Benefit figure as shown after an optimize: `37.5% ⬆️`.
pub fn format_benefit(percent: f64) -> String {
    format!("{percent}% ⬆️")
}

/// A bulk failure line: filename tag, then the opaque error message.
pub fn format_failed(file: &str, message: &str) -> String {
    format!("{file}: {message}")
}

pub fn print_info(info: &ImageInfo) {
    println!("Image name: {}", info.name.green());
    println!("Image format: {}", info.format.green());
    println!(
        "Image size: {}",
        format!("{}x{}", info.width, info.height).green()
    );
    println!("Image mode: {}", info.color_mode.green());
}

pub fn print_resized(output: &Path) {
    println!(
        "Resized image saved to: {}",
        output.display().to_string().green()
    );
}

pub fn print_optimized(report: &OptimizeReport) {
    println!(
        "Optimized image saved to: {} {}",
        report.output.display().to_string().green(),
        format_benefit(report.benefit_percent).magenta()
    );
}

pub fn print_no_files_warning() {
    println!("{}", "Files are not found".yellow());
}

pub fn print_found_files(count: usize) {
    println!(
        "Found files: {}. Running processing on all cores...",
        count.to_string().green()
    );
}

pub fn print_bulk_event(event: &BulkEvent) {
    match event {
        BulkEvent::Completed {
            output,
            benefit_percent,
            ..
        } => {
            println!(
                "Optimized image saved to: {} {}",
                output.display().to_string().green(),
                format_benefit(*benefit_percent).magenta()
            );
        }
        BulkEvent::Failed { file, message } => {
            eprintln!("{}", format_failed(file, message).red());
        }
    }
}
