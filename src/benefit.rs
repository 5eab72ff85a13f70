//! File-size benefit percentage.

/// Percentage file-size reduction between an original and a processed file,
/// rounded to two decimals.
///
/// A zero-byte original yields `0.0` rather than dividing by zero. Negative
/// results are valid — the processed file grew — and are not clamped.
pub fn benefit(original_bytes: u64, end_bytes: u64) -> f64 {
    if original_bytes == 0 {
        return 0.0;
    }
    let percent = 100.0 - (end_bytes as f64 * 100.0 / original_bytes as f64);
    (percent * 100.0).round() / 100.0
}
