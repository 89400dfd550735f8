//! ASCII bar-chart printer

use crate::options::PrinterOptions;
use crate::printer::HistogramPrinter;
use freqhist_core::{utils, Error, Result};
use freqhist_histogram::{stats_if_any, HistogramMode, UnivariateHistogram};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write as _;
use std::io::Write;
use tracing::{debug, instrument};

/// Longest bar, in characters
pub const MAX_BAR_WIDTH: usize = 40;

/// Plain-text printer drawing one `*` bar per bin
///
/// ```text
/// Histogram
///     Number of bins: 5
///     Plot range: [0, 5]
///     Data range: [0, 5]
///     Original data range: [0, 5]
/// BIN (FREQUENCY) ASCII_BAR (%)
/// 1.000 (2   ) |** (33.3%)
/// 2.000 (1   ) |* (16.7%)
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextPrinter {
    options: PrinterOptions,
}

impl TextPrinter {
    /// Fails if the options cannot be rendered
    pub fn new(options: PrinterOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }
}

impl HistogramPrinter for TextPrinter {
    fn options(&self) -> &PrinterOptions {
        &self.options
    }

    fn set_options(&mut self, options: PrinterOptions) -> Result<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    #[instrument(skip(self, hist))]
    fn generate_output<H: UnivariateHistogram>(&self, hist: &mut H) -> Result<String> {
        if !hist.is_calculated() {
            debug!(stats_mode = ?self.options.histogram_stats_mode, "calculating before printing");
            hist.calculate(self.options.histogram_stats_mode)?;
        }

        let selection = hist.get_bins(self.options.histogram_bin_mode)?;
        let rows = selection.edges().ok_or_else(|| {
            Error::InvalidFilter("rows need a low, mid or high bin edge".to_string())
        })?;
        let nbins = hist.bin_count().unwrap_or(rows.len());
        let range = hist.range().ok_or(Error::NoData)?;
        let hist_data = hist.histogram_data()?;
        let data = hist.data()?;
        let max_freq = rows.iter().map(|r| r.count).max().unwrap_or(0);
        let total = hist_data.len();

        let mut out = String::new();
        out.push_str(match hist.mode() {
            HistogramMode::Simple => "Histogram",
            HistogramMode::Cumulative => "Cumulative Frequency",
        });
        let _ = writeln!(out);
        let _ = writeln!(out, "\tNumber of bins: {nbins}");
        let _ = writeln!(out, "\tPlot range: {range}");
        let _ = writeln!(out, "\tData range: {}", extent(&hist_data));
        let _ = writeln!(out, "\tOriginal data range: {}", extent(&data));
        out.push_str("BIN (FREQUENCY) ASCII_BAR (%)\n");
        for row in rows {
            let _ = writeln!(
                out,
                "{:<4.3} ({:<4}) |{}",
                row.edge,
                row.count,
                bar(row.count, max_freq, total)
            );
        }

        if self.options.output_statistics {
            out.push_str("\n --- Histogram Statistics ---\n");
            match stats_if_any(hist.histogram_data_stats())? {
                Some(stats) => out.push_str(&format_stats(&stats)?),
                None => out.push_str("count: 0\n"),
            }
        }
        Ok(out)
    }
}

/// Print `hist` to `out` with a one-off [`TextPrinter`]
pub fn print_histogram<H: UnivariateHistogram, W: Write>(
    hist: &mut H,
    options: PrinterOptions,
    out: &mut W,
) -> Result<()> {
    TextPrinter::new(options)?.print_output(hist, out)
}

fn extent(data: &[f64]) -> String {
    match utils::min_max(data) {
        Some((min, max)) => format!("[{min}, {max}]"),
        None => "[]".to_string(),
    }
}

/// Bar of `*` scaled so the tallest bin is at most [`MAX_BAR_WIDTH`] long,
/// followed by the share of `total` in percent
pub fn bar(freq: usize, max_freq: usize, total: usize) -> String {
    let factor = if max_freq > MAX_BAR_WIDTH {
        MAX_BAR_WIDTH as f64 / max_freq as f64
    } else {
        1.0
    };
    let width = (freq as f64 * factor).round() as usize;
    let percent = if total == 0 {
        0.0
    } else {
        freq as f64 / total as f64 * 100.0
    };
    format!("{} ({percent:.1}%)", "*".repeat(width))
}

/// `name: value` lines, nested records indented by one tab per level
pub fn format_stats<S: Serialize>(stats: &S) -> Result<String> {
    let mut out = String::new();
    write_value(&mut out, &serde_json::to_value(stats)?, "");
    Ok(out)
}

fn write_value(out: &mut String, value: &Value, prefix: &str) {
    let Value::Object(fields) = value else {
        let _ = writeln!(out, "{prefix}{value}");
        return;
    };
    for (name, field) in fields {
        match field {
            Value::Object(_) => {
                let _ = writeln!(out, "{prefix}{name}:");
                write_value(out, field, &format!("{prefix}\t"));
            }
            Value::String(s) => {
                let _ = writeln!(out, "{prefix}{name}: {s}");
            }
            other => {
                let _ = writeln!(out, "{prefix}{name}: {other}");
            }
        }
    }
}
