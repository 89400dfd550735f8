//! Descriptive statistics for histogram data sets
//!
//! Histograms report summary statistics for their full data set and for
//! the subset that falls inside the binned range. This crate provides the
//! engine that computes them.
//!
//! # Detail levels
//!
//! - [`StatsMode::Basic`]: count, min, max, sum, sum of squares, mean,
//!   variance, standard deviation, standard error of the mean, range
//! - [`StatsMode::Full`]: basic plus median, quartiles, interquartile
//!   range, midrange and (for positive data) geometric/harmonic means
//! - [`StatsMode::CumulativeAggregatedInput`]: full statistics over a
//!   `(value, count)` frequency table
//!
//! # Example
//!
//! ```rust
//! use freqhist_stats::{StatsEngine, StatsMode};
//!
//! let mut engine = StatsEngine::new();
//! engine.set_data(&[1.0, 2.0, 3.0, 4.0, 5.0], StatsMode::Full).unwrap();
//! let stats = engine.compute().unwrap();
//! assert_eq!(stats.median, Some(3.0));
//!
//! // Large aggregated inputs are never expanded
//! engine.set_frequencies(&[(2.0, 1_000_000), (3.0, 3_000_000)]).unwrap();
//! let stats = engine.compute().unwrap();
//! assert_eq!(stats.count, 4_000_000);
//! ```

pub mod describe;
pub mod engine;
pub mod types;

pub use describe::{describe_frequencies, describe_samples};
pub use engine::{describe, StatsEngine};
pub use types::{Quartiles, StatsMode, StatsResult};

pub use freqhist_core::{Error, Result};
