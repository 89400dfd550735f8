//! Text rendering of frequency histograms
//!
//! [`TextPrinter`] draws a one-dimensional histogram as an ASCII bar chart,
//! optionally followed by the statistics of the in-range data. A histogram
//! that has not been calculated yet is calculated on the way.
//!
//! # Example
//!
//! ```rust
//! use freqhist_histogram::{Histogram, HistogramMode};
//! use freqhist_printer::{HistogramPrinter, PrinterOptions, TextPrinter};
//!
//! let mut hist = Histogram::new(HistogramMode::Simple);
//! hist.set_data(&[1.0, 2.0, 2.0, 3.0]).unwrap();
//!
//! let printer = TextPrinter::new(PrinterOptions::default()).unwrap();
//! let plot = printer.generate_output(&mut hist).unwrap();
//! assert!(plot.starts_with("Histogram\n\tNumber of bins: 10\n"));
//! ```

pub mod options;
pub mod printer;
pub mod text;

pub use options::PrinterOptions;
pub use printer::{HistogramPrinter, HTTP_HEADER};
pub use text::{bar, format_stats, print_histogram, TextPrinter, MAX_BAR_WIDTH};

pub use freqhist_core::{Error, Result};
