//! Printer interface

use crate::options::PrinterOptions;
use freqhist_core::Result;
use freqhist_histogram::UnivariateHistogram;
use std::io::Write;

/// Header written before the plot when `use_http_headers` is set
pub const HTTP_HEADER: &str = "Content-type: text/plain\n\n";

/// Renders a one-dimensional histogram into some output format
///
/// Printers calculate an uncalculated histogram themselves, which is why
/// they take it by mutable reference.
pub trait HistogramPrinter {
    fn options(&self) -> &PrinterOptions;

    /// Replace the options; fails if they cannot be rendered
    fn set_options(&mut self, options: PrinterOptions) -> Result<()>;

    /// Render the plot
    fn generate_output<H: UnivariateHistogram>(&self, hist: &mut H) -> Result<String>;

    /// Render the plot into `out`, preceded by the HTTP header if enabled
    fn print_output<H: UnivariateHistogram, W: Write>(&self, hist: &mut H, out: &mut W) -> Result<()> {
        let plot = self.generate_output(hist)?;
        if self.options().use_http_headers {
            out.write_all(HTTP_HEADER.as_bytes())?;
        }
        out.write_all(plot.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
