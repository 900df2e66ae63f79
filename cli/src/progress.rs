//! Progress reporting while reading the input file, and human readable formatting
//! of the numbers shown afterwards.
//!
//! The bar itself is drawn by the `indicatif` crate, see <https://docs.rs/indicatif>

use std::{fmt::Write, io::Read, time::Duration};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::info;

/// Wraps a reader and advances a progress bar by every byte read through it.
///
/// Once `total` bytes have been read the bar is cleared and a summary is logged.
pub struct ProgressMonitor<R: Read> {
    total: usize,
    read: usize,
    reader: R,
    progress_bar: ProgressBar,
}

impl<R: Read> ProgressMonitor<R> {
    pub fn new(reader: R, total: usize) -> Self {
        // https://docs.rs/indicatif/latest/indicatif/index.html#templates
        let style = ProgressStyle::with_template(
            "reading {wide_bar} {binary_bytes}/{binary_total_bytes} [{eta}]",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        let progress_bar = ProgressBar::new(total as u64).with_style(style);
        // The default is 20hz, reading is usually over long before that matters
        progress_bar.set_draw_target(ProgressDrawTarget::stderr_with_hz(8));
        Self {
            total,
            read: 0,
            reader,
            progress_bar,
        }
    }

    fn advance(&mut self, delta: usize) {
        self.read += delta;
        self.progress_bar.inc(delta as u64);
        if self.read >= self.total && !self.progress_bar.is_finished() {
            self.progress_bar.finish_and_clear();
            let elapsed = self.progress_bar.elapsed();
            info!(
                "read {} in {} ({}/s)",
                fmt_size(self.read as f64),
                fmt_duration(elapsed),
                fmt_size(self.read as f64 / elapsed.as_secs_f64().max(f64::EPSILON))
            );
        }
    }
}

impl<R: Read> Read for ProgressMonitor<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.reader.read(buf)?;
        self.advance(n);
        Ok(n)
    }
}

/// Formats a number of bytes with binary prefixes: "512B", "12.00KiB", "7.00MiB", ...
pub fn fmt_size(size_in_bytes: f64) -> String {
    const UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];
    let mut size = size_in_bytes;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{:.0}{}", size, UNITS[unit])
    } else {
        format!("{:.2}{}", size, UNITS[unit])
    }
}

/// Formats a duration as e.g. "1h 20m 30s", "1.50s" or "7.00ms"
pub fn fmt_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let secs = duration.as_secs_f64() - (hours * 3600 + minutes * 60) as f64;

    let mut output = String::new();
    if hours > 0 {
        write!(output, "{}h ", hours).unwrap();
    }
    if minutes > 0 {
        write!(output, "{}m ", minutes).unwrap();
    }
    if total_secs >= 60 {
        if secs >= 1.0 {
            write!(output, "{:.0}s", secs.floor()).unwrap();
        }
    } else if secs >= 1.0 {
        write!(output, "{:.2}s", secs).unwrap();
    } else {
        write!(output, "{:.2}ms", secs * 1000.0).unwrap();
    }
    output.trim_end().to_string()
}
