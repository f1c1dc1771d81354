//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Digits kept at each end of an abbreviated value.
const ABBREVIATED_EDGE: usize = 50;

/// Format a rendered value for display, abbreviating long digit strings.
#[must_use]
pub fn format_value(value: &str, verbose: bool) -> String {
    let len = value.len();
    if verbose || len <= 2 * ABBREVIATED_EDGE || !value.bytes().all(|b| b.is_ascii_digit()) {
        return value.to_string();
    }
    format!(
        "{}...{} ({len} digits)",
        &value[..ABBREVIATED_EDGE],
        &value[len - ABBREVIATED_EDGE..]
    )
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a count with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write values to a file, one per line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: impl AsRef<Path>, values: &[String]) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    for value in values {
        writeln!(file, "{value}")?;
    }
    file.flush()
}
