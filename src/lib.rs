//! Simple and cumulative frequency histograms
//!
//! This crate re-exports the freqhist workspace:
//!
//! - [`freqhist_histogram`]: one-dimensional and bivariate histogram engines
//! - [`freqhist_stats`]: descriptive statistics of the binned data
//! - [`freqhist_printer`]: ASCII bar-chart rendering
//! - [`freqhist_core`]: shared error type and numeric helpers
//!
//! # Example
//!
//! ```rust
//! use freqhist::prelude::*;
//!
//! let mut hist = Histogram::new(HistogramMode::Simple);
//! hist.set_bin_options(5, Some(0.0), Some(5.0))?;
//! hist.set_data(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0])?;
//! hist.calculate(StatsMode::Full)?;
//!
//! let counts: Vec<usize> = hist.bins()?.iter().map(|b| b.count).collect();
//! assert_eq!(counts, vec![2, 1, 1, 1, 1]);
//! assert_eq!(hist.data_stats()?.median, Some(2.5));
//! # Ok::<(), freqhist::Error>(())
//! ```

pub use freqhist_core;
pub use freqhist_histogram;
pub use freqhist_printer;
pub use freqhist_stats;

pub use freqhist_core::{Error, Result};
pub use freqhist_histogram::{
    Axes, Bin, BinFilterView, BinOptions, BivariateBinOptions, BivariateConfig,
    BivariateHistogram, FrequencyHistogram, Histogram, HistogramConfig, HistogramMode, JointBin,
    Lifecycle, PairedData, RangeSpec, UnivariateHistogram,
};
pub use freqhist_printer::{print_histogram, HistogramPrinter, PrinterOptions, TextPrinter};
pub use freqhist_stats::{StatsEngine, StatsMode, StatsResult};

/// Everything needed to build, query and print a histogram
pub mod prelude {
    pub use freqhist_histogram::{
        Axes, BinFilterView, BivariateBinOptions, BivariateHistogram, FrequencyHistogram,
        Histogram, HistogramMode, PairedData, RangeSpec,
    };
    pub use freqhist_printer::{HistogramPrinter, PrinterOptions, TextPrinter};
    pub use freqhist_stats::{StatsMode, StatsResult};
}
