//! Simple and cumulative frequency histograms
//!
//! This crate bins finite numeric data into equal-width bins and counts
//! how many samples fall into each bin, either per bin (simple) or as a
//! running total (cumulative). Two engines share one query surface, the
//! [`FrequencyHistogram`] trait:
//!
//! - [`Histogram`]: one data set, one axis
//! - [`BivariateHistogram`]: paired `(x, y)` samples on a joint grid
//!
//! # Boundary rule
//!
//! The first bin of an axis is closed on both edges, every later bin is
//! open on its low edge and closed on its high edge. A value sitting on
//! an interior edge is therefore counted in the lower bin, and a value
//! equal to the range minimum is counted in the first bin.
//!
//! # Example
//!
//! ```rust
//! use freqhist_histogram::{BinFilterView, FrequencyHistogram, Histogram, HistogramMode};
//! use freqhist_stats::StatsMode;
//!
//! let mut hist = Histogram::new(HistogramMode::Cumulative);
//! hist.set_bin_options(5, Some(0.0), Some(5.0)).unwrap();
//! hist.set_data(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! hist.calculate(StatsMode::Basic).unwrap();
//!
//! let text = hist.to_separated(BinFilterView::High, ", ").unwrap();
//! assert!(text.starts_with("# bin, frequency\n1, 2\n2, 3\n"));
//! ```

pub mod accumulate;
pub mod bivariate;
pub mod config;
pub mod grid;
pub mod histogram;
pub mod traits;
pub mod types;
pub mod validate;

pub use accumulate::{ClaimedSet, FrequencyAccumulator};
pub use bivariate::BivariateHistogram;
pub use config::{BinOptions, BivariateBinOptions, BivariateConfig, HistogramConfig, DEFAULT_NBINS};
pub use grid::{in_bin, AxisGrid, GridCell, JointGrid};
pub use histogram::Histogram;
pub use traits::{stats_if_any, FrequencyHistogram, UnivariateHistogram};
pub use types::{
    Axes, Bin, BinEdges, BinFilterView, BinSelection, EdgeCount, HistogramInfo, HistogramMode,
    JointBin, JointEdgeCount, Lifecycle, RangeSpec,
};
pub use validate::PairedData;

pub use freqhist_core::{Error, Result};
