//! One-dimensional frequency histogram

use crate::accumulate::FrequencyAccumulator;
use crate::config::{BinOptions, HistogramConfig};
use crate::grid::AxisGrid;
use crate::traits::{stats_if_any, FrequencyHistogram};
use crate::types::{
    Bin, BinFilterView, BinSelection, EdgeCount, HistogramInfo, HistogramMode, Lifecycle,
    RangeSpec,
};
use crate::validate::{samples_from_value, validate_samples};
use freqhist_core::{utils, Error, Result};
use freqhist_stats::{StatsEngine, StatsMode, StatsResult};
use serde_json::Value;
use std::fmt::Write as _;
use tracing::{debug, instrument};

/// Bins of the last calculation and the parameters they were built with
#[derive(Debug, Clone, PartialEq)]
struct Calculation {
    bins: Vec<Bin>,
    range: RangeSpec,
    nbins: usize,
    stats_mode: StatsMode,
}

/// Simple or cumulative frequency histogram over one data set
///
/// # Examples
///
/// ```rust
/// use freqhist_histogram::{FrequencyHistogram, Histogram, HistogramMode};
/// use freqhist_stats::StatsMode;
///
/// let mut hist = Histogram::new(HistogramMode::Simple);
/// hist.set_bin_options(5, Some(0.0), Some(5.0)).unwrap();
/// hist.set_data(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// hist.calculate(StatsMode::Basic).unwrap();
///
/// let counts: Vec<usize> = hist.bins().unwrap().iter().map(|b| b.count).collect();
/// assert_eq!(counts, vec![2, 1, 1, 1, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Histogram {
    mode: HistogramMode,
    options: BinOptions,
    /// Sorted ascending
    data: Option<Vec<f64>>,
    calculation: Option<Calculation>,
    stats: StatsEngine,
}

impl Histogram {
    /// A histogram with default bin options: 10 bins over the data range
    pub fn new(mode: HistogramMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_options(mode: HistogramMode, options: BinOptions) -> Self {
        Self {
            mode,
            options,
            ..Self::default()
        }
    }

    pub fn from_config(config: HistogramConfig) -> Self {
        Self::with_options(config.mode, config.bin_options)
    }

    /// Build from a JSON configuration document
    pub fn from_value(config: &Value) -> Result<Self> {
        Ok(Self::from_config(HistogramConfig::from_value(config)?))
    }

    /// Set the bin count and optional range bounds
    ///
    /// A bin count of 2 or less is replaced by 10. Unset bounds are taken
    /// from the data. The lifecycle state is unchanged: computed bins keep
    /// their parameters until the next `calculate`.
    pub fn set_bin_options(&mut self, nbins: usize, low: Option<f64>, high: Option<f64>) -> Result<()> {
        self.options = BinOptions::new(nbins, low, high)?;
        Ok(())
    }

    pub fn bin_options(&self) -> BinOptions {
        self.options
    }

    /// Accept a new data set, discarding any computed bins
    ///
    /// A rejected data set leaves the histogram without data.
    pub fn set_data(&mut self, data: &[f64]) -> Result<()> {
        self.clear();
        validate_samples(data)?;
        self.data = Some(utils::sorted(data));
        debug!(n = data.len(), range = ?self.range(), "accepted data set");
        Ok(())
    }

    /// Accept a JSON sequence of numbers or numeric strings
    pub fn set_data_value(&mut self, data: &Value) -> Result<()> {
        self.clear();
        let samples = samples_from_value(data)?;
        self.set_data(&samples)
    }

    fn clear(&mut self) {
        self.data = None;
        self.calculation = None;
        self.stats.reset();
    }

    fn sorted_data(&self) -> Result<&[f64]> {
        self.data.as_deref().ok_or(Error::NoData)
    }

    fn calculation(&self) -> Result<&Calculation> {
        self.calculation.as_ref().ok_or(Error::NotCalculated)
    }

    /// Range resolved from the options and the current data
    fn resolved_range(&self) -> Option<RangeSpec> {
        let data = self.data.as_deref()?;
        let (min, max) = (*data.first()?, *data.last()?);
        Some(self.options.resolve(min, max))
    }

    fn in_range(&self, range: RangeSpec) -> Result<Vec<f64>> {
        let data = self.sorted_data()?;
        Ok(data.iter().copied().filter(|&v| range.contains(v)).collect())
    }

    fn compute_stats(&mut self, samples: &[f64]) -> Result<StatsResult> {
        let stats_mode = self.calculation()?.stats_mode;
        self.stats.set_data(samples, stats_mode)?;
        self.stats.compute()
    }
}

impl FrequencyHistogram for Histogram {
    type Bin = Bin;
    type EdgeCount = EdgeCount;
    type Data = Vec<f64>;
    type Range = RangeSpec;
    type BinCount = usize;
    type Stats = StatsResult;

    fn mode(&self) -> HistogramMode {
        self.mode
    }

    fn set_mode(&mut self, mode: HistogramMode) {
        self.mode = mode;
    }

    fn lifecycle(&self) -> Lifecycle {
        match (&self.data, &self.calculation) {
            (None, _) => Lifecycle::Uninitialized,
            (Some(_), None) => Lifecycle::DataAccepted,
            (Some(_), Some(_)) => Lifecycle::Calculated,
        }
    }

    #[instrument(skip(self), fields(mode = ?self.mode, nbins = self.options.nbins()))]
    fn calculate(&mut self, stats_mode: StatsMode) -> Result<()> {
        if stats_mode == StatsMode::CumulativeAggregatedInput {
            return Err(Error::InvalidParameter(
                "histogram statistics are computed over raw samples".to_string(),
            ));
        }
        let range = self.resolved_range().ok_or(Error::NoData)?;
        let nbins = self.options.nbins();
        let samples = self.in_range(range)?;

        let grid = AxisGrid::equal_width(range, nbins);
        let bins = FrequencyAccumulator::new(self.mode).accumulate(&grid, &samples);
        debug!(%range, in_range = samples.len(), "calculated histogram");

        self.calculation = Some(Calculation {
            bins,
            range,
            nbins,
            stats_mode,
        });
        Ok(())
    }

    fn bins(&self) -> Result<&[Bin]> {
        Ok(&self.calculation()?.bins)
    }

    fn get_bins(&self, filter: BinFilterView) -> Result<BinSelection<'_, Bin, EdgeCount>> {
        let bins = self.bins()?;
        Ok(match filter {
            BinFilterView::All => BinSelection::All(bins),
            view => BinSelection::Edges(
                bins.iter()
                    .filter_map(|b| {
                        b.edges().edge(view).map(|edge| EdgeCount {
                            edge,
                            count: b.count,
                        })
                    })
                    .collect(),
            ),
        })
    }

    fn range(&self) -> Option<RangeSpec> {
        match &self.calculation {
            Some(calculation) => Some(calculation.range),
            None => self.resolved_range(),
        }
    }

    fn bin_count(&self) -> Option<usize> {
        match &self.calculation {
            Some(calculation) => Some(calculation.nbins),
            None => Some(self.options.nbins()),
        }
    }

    fn data(&self) -> Result<Vec<f64>> {
        Ok(self.sorted_data()?.to_vec())
    }

    fn histogram_data(&self) -> Result<Vec<f64>> {
        let range = self.range().ok_or(Error::NoData)?;
        self.in_range(range)
    }

    fn data_stats(&mut self) -> Result<StatsResult> {
        self.calculation()?;
        let data = self.sorted_data()?.to_vec();
        self.compute_stats(&data)
    }

    fn histogram_data_stats(&mut self) -> Result<StatsResult> {
        self.calculation()?;
        let data = self.histogram_data()?;
        self.compute_stats(&data)
    }

    fn histogram_info(&mut self) -> Result<HistogramInfo<StatsResult, Bin, usize, RangeSpec>> {
        let data_stats = self.data_stats()?;
        let hist_data_stats = stats_if_any(self.histogram_data_stats())?;
        let calculation = self.calculation()?;
        Ok(HistogramInfo {
            kind: self.mode.label(),
            data_stats,
            hist_data_stats,
            bins: calculation.bins.clone(),
            nbins: calculation.nbins,
            range: calculation.range,
        })
    }

    fn to_separated(&self, filter: BinFilterView, separator: &str) -> Result<String> {
        let selection = self.get_bins(filter)?;
        let rows = selection
            .edges()
            .ok_or_else(|| Error::InvalidFilter("rows need a low, mid or high edge".to_string()))?;

        let mut out = format!("# bin{separator}frequency\n");
        for row in rows {
            // writing to a String cannot fail
            let _ = writeln!(out, "{}{separator}{}", row.edge, row.count);
        }
        Ok(out)
    }
}
