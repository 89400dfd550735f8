//! Result and mode types for descriptive statistics

use freqhist_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much detail a statistics computation produces, and how its input is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsMode {
    /// Count, extremes, sum, mean, dispersion
    #[default]
    Basic,
    /// Basic plus order statistics and alternative means
    Full,
    /// Full statistics over a `(value, count)` frequency table
    CumulativeAggregatedInput,
}

impl StatsMode {
    /// Whether the order statistics and alternative means are produced
    pub fn is_full(self) -> bool {
        !matches!(self, StatsMode::Basic)
    }
}

impl FromStr for StatsMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "full" => Ok(Self::Full),
            "cumulative_aggregated_input" | "aggregated" => Ok(Self::CumulativeAggregatedInput),
            other => Err(Error::InvalidParameter(format!("unknown statistics mode '{other}'"))),
        }
    }
}

/// First, second and third quartile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    #[serde(rename = "25")]
    pub q25: f64,
    #[serde(rename = "50")]
    pub q50: f64,
    #[serde(rename = "75")]
    pub q75: f64,
}

/// Descriptive statistics of one data set
///
/// The `Option` fields are only populated for [`StatsMode::Full`] and
/// [`StatsMode::CumulativeAggregatedInput`]; `geometric_mean` and
/// `harmonic_mean` additionally require every sample to be positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsResult {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub sum2: f64,
    pub mean: f64,
    pub variance: f64,
    pub stdev: f64,
    pub std_error_of_mean: f64,
    pub range: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quartiles: Option<Quartiles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interquartile_range: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midrange: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometric_mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harmonic_mean: Option<f64>,
}

impl fmt::Display for StatsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={}, mean={:.4}, stdev={:.4}, range=[{}, {}]",
            self.count, self.mean, self.stdev, self.min, self.max
        )
    }
}
