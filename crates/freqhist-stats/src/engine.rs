//! Reusable statistics engine
//!
//! A [`StatsEngine`] is configured with one data set at a time and then
//! asked to [`compute`](StatsEngine::compute) its statistics. Histograms
//! hold one engine and reconfigure it on every statistics query, so no
//! state survives from one query to the next.

use crate::describe::{describe_frequencies, describe_samples};
use crate::types::{StatsMode, StatsResult};
use freqhist_core::{Error, Result};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
enum StatsInput {
    Samples(Vec<f64>),
    Frequencies(Vec<(f64, u64)>),
}

/// Statistics engine over a single configured data set
#[derive(Debug, Clone, Default)]
pub struct StatsEngine {
    input: Option<StatsInput>,
    mode: StatsMode,
}

impl StatsEngine {
    /// Create an engine with no data
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure raw samples and the detail level to compute
    ///
    /// Replaces any previously configured data. Fails with `InvalidData`
    /// on a non-finite sample and with `InvalidParameter` for
    /// [`StatsMode::CumulativeAggregatedInput`], which needs
    /// [`set_frequencies`](Self::set_frequencies) instead.
    pub fn set_data(&mut self, samples: &[f64], mode: StatsMode) -> Result<()> {
        self.reset();
        if mode == StatsMode::CumulativeAggregatedInput {
            return Err(Error::InvalidParameter(
                "aggregated statistics need a (value, count) table".to_string(),
            ));
        }
        if let Some(index) = samples.iter().position(|v| !v.is_finite()) {
            return Err(Error::non_numeric("statistics input", index));
        }
        self.input = Some(StatsInput::Samples(samples.to_vec()));
        self.mode = mode;
        Ok(())
    }

    /// Configure a `(value, count)` frequency table
    ///
    /// The engine switches to [`StatsMode::CumulativeAggregatedInput`].
    pub fn set_frequencies(&mut self, table: &[(f64, u64)]) -> Result<()> {
        self.reset();
        if let Some(index) = table.iter().position(|(v, _)| !v.is_finite()) {
            return Err(Error::non_numeric("frequency table", index));
        }
        self.input = Some(StatsInput::Frequencies(table.to_vec()));
        self.mode = StatsMode::CumulativeAggregatedInput;
        Ok(())
    }

    /// The detail level of the configured data
    pub fn mode(&self) -> StatsMode {
        self.mode
    }

    /// Whether a data set is configured
    pub fn has_data(&self) -> bool {
        self.input.is_some()
    }

    /// Drop the configured data set
    pub fn reset(&mut self) {
        self.input = None;
        self.mode = StatsMode::default();
    }

    /// Compute the statistics of the configured data set
    pub fn compute(&self) -> Result<StatsResult> {
        let result = match &self.input {
            None => return Err(Error::NoData),
            Some(StatsInput::Samples(samples)) => describe_samples(samples, self.mode)?,
            Some(StatsInput::Frequencies(table)) => describe_frequencies(table)?,
        };
        debug!(mode = ?self.mode, count = result.count, mean = result.mean, "computed statistics");
        Ok(result)
    }
}

/// Compute statistics of `samples` without keeping an engine around
pub fn describe(samples: &[f64], mode: StatsMode) -> Result<StatsResult> {
    let mut engine = StatsEngine::new();
    engine.set_data(samples, mode)?;
    engine.compute()
}
