//! Bivariate (joint) frequency histogram

use crate::accumulate::FrequencyAccumulator;
use crate::config::{BivariateBinOptions, BivariateConfig, DEFAULT_NBINS};
use crate::grid::JointGrid;
use crate::traits::{stats_if_any, FrequencyHistogram};
use crate::types::{
    Axes, BinFilterView, BinSelection, HistogramInfo, HistogramMode, JointBin, JointEdgeCount,
    Lifecycle, RangeSpec,
};
use crate::validate::PairedData;
use freqhist_core::{Error, Result};
use freqhist_stats::{StatsEngine, StatsMode, StatsResult};
use serde_json::Value;
use std::fmt::Write as _;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq)]
struct JointCalculation {
    cells: Vec<JointBin>,
    range: Axes<RangeSpec>,
    nbins: Axes<usize>,
    stats_mode: StatsMode,
}

/// Joint histogram over paired `(x, y)` samples
///
/// Each axis is partitioned on its own; the cells are the cartesian
/// product, reported in row-major order (x outer, y inner). Without
/// explicit bin options both axes span their data and get 10 bins.
///
/// # Examples
///
/// ```rust
/// use freqhist_histogram::{Axes, BivariateBinOptions, BivariateHistogram, FrequencyHistogram, PairedData};
/// use freqhist_stats::StatsMode;
///
/// let mut hist = BivariateHistogram::default();
/// hist.set_bin_options(BivariateBinOptions::new(Axes::splat(0.0), Axes::splat(4.0), Axes::splat(2)).unwrap());
/// let data = PairedData::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 2.0, 3.0]).unwrap();
/// hist.set_data(data);
/// hist.calculate(StatsMode::Basic).unwrap();
///
/// let counts: Vec<usize> = hist.bins().unwrap().iter().map(|c| c.count).collect();
/// assert_eq!(counts, vec![3, 0, 0, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BivariateHistogram {
    mode: HistogramMode,
    options: Option<BivariateBinOptions>,
    data: Option<PairedData>,
    calculation: Option<JointCalculation>,
    stats: StatsEngine,
}

impl BivariateHistogram {
    pub fn new(mode: HistogramMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn from_config(config: BivariateConfig) -> Self {
        Self {
            mode: config.mode,
            options: config.bin_options,
            ..Self::default()
        }
    }

    /// Build from a JSON configuration document
    pub fn from_value(config: &Value) -> Result<Self> {
        Ok(Self::from_config(BivariateConfig::from_value(config)?))
    }

    /// Set per-axis ranges and bin counts; the lifecycle state is unchanged
    pub fn set_bin_options(&mut self, options: BivariateBinOptions) {
        self.options = Some(options);
    }

    /// Parse and set bin options from `{"low": {x, y}, "high": {x, y}, "nbins": {x, y}}`
    pub fn set_bin_options_value(&mut self, options: &Value) -> Result<()> {
        self.options = Some(BivariateBinOptions::from_value(options)?);
        Ok(())
    }

    pub fn bin_options(&self) -> Option<BivariateBinOptions> {
        self.options
    }

    /// Accept a new paired data set, discarding any computed cells
    pub fn set_data(&mut self, data: PairedData) {
        self.clear();
        self.data = Some(data);
        debug!(n = self.data.as_ref().map_or(0, PairedData::len), range = ?self.range(), "accepted paired data");
    }

    /// Accept `{"x": [...], "y": [...]}`; a rejected document leaves the
    /// histogram without data
    pub fn set_data_value(&mut self, data: &Value) -> Result<()> {
        self.clear();
        let paired = PairedData::from_value(data)?;
        self.set_data(paired);
        Ok(())
    }

    fn clear(&mut self) {
        self.data = None;
        self.calculation = None;
        self.stats.reset();
    }

    fn paired(&self) -> Result<&PairedData> {
        self.data.as_ref().ok_or(Error::NoData)
    }

    fn calculation(&self) -> Result<&JointCalculation> {
        self.calculation.as_ref().ok_or(Error::NotCalculated)
    }

    fn data_range(data: &PairedData) -> Axes<RangeSpec> {
        let ((xmin, xmax), (ymin, ymax)) = data.bounds();
        Axes::new(RangeSpec::new(xmin, xmax), RangeSpec::new(ymin, ymax))
    }

    fn resolved_range(&self) -> Option<Axes<RangeSpec>> {
        match (&self.options, &self.data) {
            (Some(options), _) => Some(options.range()),
            (None, Some(data)) => Some(Self::data_range(data)),
            (None, None) => None,
        }
    }

    fn resolved_nbins(&self) -> Option<Axes<usize>> {
        match (&self.options, &self.data) {
            (Some(options), _) => Some(options.nbins()),
            (None, Some(_)) => Some(Axes::splat(DEFAULT_NBINS)),
            (None, None) => None,
        }
    }

    fn in_range(&self, range: Axes<RangeSpec>) -> Result<Axes<Vec<f64>>> {
        let data = self.paired()?;
        if range == Self::data_range(data) {
            return Ok(Axes::new(data.x().to_vec(), data.y().to_vec()));
        }
        let (x, y) = data.filter(|x, y| range.x.contains(x) && range.y.contains(y));
        Ok(Axes::new(x, y))
    }

    fn compute_stats(&mut self, samples: Axes<Vec<f64>>) -> Result<Axes<StatsResult>> {
        let stats_mode = self.calculation()?.stats_mode;
        self.stats.set_data(&samples.x, stats_mode)?;
        let x = self.stats.compute()?;
        self.stats.set_data(&samples.y, stats_mode)?;
        let y = self.stats.compute()?;
        Ok(Axes::new(x, y))
    }
}

impl FrequencyHistogram for BivariateHistogram {
    type Bin = JointBin;
    type EdgeCount = JointEdgeCount;
    type Data = Axes<Vec<f64>>;
    type Range = Axes<RangeSpec>;
    type BinCount = Axes<usize>;
    type Stats = Axes<StatsResult>;

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

    #[instrument(skip(self), fields(mode = ?self.mode))]
    fn calculate(&mut self, stats_mode: StatsMode) -> Result<()> {
        if stats_mode == StatsMode::CumulativeAggregatedInput {
            return Err(Error::InvalidParameter(
                "histogram statistics are computed over raw samples".to_string(),
            ));
        }
        self.paired()?;
        let (range, nbins) = match (self.resolved_range(), self.resolved_nbins()) {
            (Some(range), Some(nbins)) => (range, nbins),
            _ => return Err(Error::NoData),
        };
        let samples = self.in_range(range)?;

        let grid = JointGrid::equal_width(range, nbins);
        let cells = FrequencyAccumulator::new(self.mode).accumulate_joint(&grid, &samples.x, &samples.y);
        debug!(
            x_range = %range.x,
            y_range = %range.y,
            cells = cells.len(),
            in_range = samples.x.len(),
            "calculated joint histogram"
        );

        self.calculation = Some(JointCalculation {
            cells,
            range,
            nbins,
            stats_mode,
        });
        Ok(())
    }

    fn bins(&self) -> Result<&[JointBin]> {
        Ok(&self.calculation()?.cells)
    }

    fn get_bins(&self, filter: BinFilterView) -> Result<BinSelection<'_, JointBin, JointEdgeCount>> {
        let cells = self.bins()?;
        Ok(match filter {
            BinFilterView::All => BinSelection::All(cells),
            view => BinSelection::Edges(
                cells
                    .iter()
                    .filter_map(|c| {
                        Some(JointEdgeCount {
                            x: c.x.edge(view)?,
                            y: c.y.edge(view)?,
                            count: c.count,
                        })
                    })
                    .collect(),
            ),
        })
    }

    fn range(&self) -> Option<Axes<RangeSpec>> {
        match &self.calculation {
            Some(calculation) => Some(calculation.range),
            None => self.resolved_range(),
        }
    }

    fn bin_count(&self) -> Option<Axes<usize>> {
        match &self.calculation {
            Some(calculation) => Some(calculation.nbins),
            None => self.resolved_nbins(),
        }
    }

    fn data(&self) -> Result<Axes<Vec<f64>>> {
        let data = self.paired()?;
        Ok(Axes::new(data.x().to_vec(), data.y().to_vec()))
    }

    /// The raw data when the range is the data's own extent on both axes,
    /// otherwise the pairs with both coordinates in range
    fn histogram_data(&self) -> Result<Axes<Vec<f64>>> {
        let range = self.range().ok_or(Error::NoData)?;
        self.in_range(range)
    }

    fn data_stats(&mut self) -> Result<Axes<StatsResult>> {
        self.calculation()?;
        let data = self.data()?;
        self.compute_stats(data)
    }

    fn histogram_data_stats(&mut self) -> Result<Axes<StatsResult>> {
        self.calculation()?;
        let data = self.histogram_data()?;
        self.compute_stats(data)
    }

    fn histogram_info(
        &mut self,
    ) -> Result<HistogramInfo<Axes<StatsResult>, JointBin, Axes<usize>, Axes<RangeSpec>>> {
        let data_stats = self.data_stats()?;
        let hist_data_stats = stats_if_any(self.histogram_data_stats())?;
        let calculation = self.calculation()?;
        Ok(HistogramInfo {
            kind: self.mode.label(),
            data_stats,
            hist_data_stats,
            bins: calculation.cells.clone(),
            nbins: calculation.nbins,
            range: calculation.range,
        })
    }

    fn to_separated(&self, filter: BinFilterView, separator: &str) -> Result<String> {
        let selection = self.get_bins(filter)?;
        let rows = selection
            .edges()
            .ok_or_else(|| Error::InvalidFilter("rows need a low, mid or high edge".to_string()))?;

        let mut out = format!("# x_bin{separator}y_bin{separator}frequency\n");
        for row in rows {
            let _ = writeln!(out, "{}{separator}{}{separator}{}", row.x, row.y, row.count);
        }
        Ok(out)
    }
}
