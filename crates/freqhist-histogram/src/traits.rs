//! Query surface shared by the one-dimensional and bivariate engines

use crate::types::{
    Bin, BinFilterView, BinSelection, EdgeCount, HistogramInfo, HistogramMode, Lifecycle,
    RangeSpec,
};
use freqhist_core::{Error, Result};
use freqhist_stats::{StatsMode, StatsResult};
use serde::Serialize;

/// A frequency histogram with a lifecycle and a query surface
///
/// Implementations move through [`Lifecycle`]: bins and statistics are only
/// available once [`calculate`](Self::calculate) has run on the current
/// data set. Range and bin-count queries work in any state.
pub trait FrequencyHistogram {
    /// Full bin record
    type Bin: Clone + Serialize;
    /// Edge-keyed projection of a bin
    type EdgeCount: Clone + Serialize;
    /// Data set as returned by data queries
    type Data: Serialize;
    /// Binned range: one per axis
    type Range: Copy + Serialize;
    /// Bin count: one per axis
    type BinCount: Copy + Serialize;
    /// Statistics: one result per axis
    type Stats: Serialize;

    fn mode(&self) -> HistogramMode;

    /// Change the counting mode; takes effect on the next `calculate`
    fn set_mode(&mut self, mode: HistogramMode);

    /// Parse and set the counting mode, failing with `InvalidType`
    fn set_mode_str(&mut self, mode: &str) -> Result<()> {
        self.set_mode(mode.parse()?);
        Ok(())
    }

    fn lifecycle(&self) -> Lifecycle;

    fn is_calculated(&self) -> bool {
        self.lifecycle() == Lifecycle::Calculated
    }

    /// Build the bin grid and count the data into it
    ///
    /// `stats_mode` is the detail level of later statistics queries.
    /// Fails with `NoData` before any data is accepted.
    fn calculate(&mut self, stats_mode: StatsMode) -> Result<()>;

    /// The computed bins; fails with `NotCalculated` before `calculate`
    fn bins(&self) -> Result<&[Self::Bin]>;

    /// The computed bins, or their `(edge, count)` projection
    fn get_bins(&self, filter: BinFilterView)
        -> Result<BinSelection<'_, Self::Bin, Self::EdgeCount>>;

    /// The range in effect: the computed one, else the one resolved from
    /// the options and the current data. `None` until it can be resolved.
    fn range(&self) -> Option<Self::Range>;

    /// The bin count in effect; `None` until it can be resolved
    fn bin_count(&self) -> Option<Self::BinCount>;

    /// The accepted data set; fails with `NoData` before `set_data`
    fn data(&self) -> Result<Self::Data>;

    /// The part of the data set that lies inside the range
    fn histogram_data(&self) -> Result<Self::Data>;

    /// Statistics of the full data set; requires `Calculated`
    fn data_stats(&mut self) -> Result<Self::Stats>;

    /// Statistics of the in-range data; requires `Calculated`
    fn histogram_data_stats(&mut self) -> Result<Self::Stats>;

    /// Mode label, both statistics blocks, bins, bin count and range
    ///
    /// Succeeds whenever the histogram is calculated; the in-range
    /// statistics are `None` if no sample falls inside the range.
    fn histogram_info(
        &mut self,
    ) -> Result<HistogramInfo<Self::Stats, Self::Bin, Self::BinCount, Self::Range>>;

    /// Delimited text: a `#` header line then one row per bin
    ///
    /// `filter` selects the edge each row is keyed on; `All` fails with
    /// `InvalidFilter`.
    fn to_separated(&self, filter: BinFilterView, separator: &str) -> Result<String>;
}

/// Turn the empty-input failure of a statistics query into `None`
///
/// # Examples
///
/// ```rust
/// use freqhist_histogram::traits::stats_if_any;
/// use freqhist_histogram::Error;
///
/// assert_eq!(stats_if_any(Ok(1)).unwrap(), Some(1));
/// let empty: Result<i32, Error> = Err(Error::InsufficientData { expected: 1, actual: 0 });
/// assert_eq!(stats_if_any(empty).unwrap(), None);
/// assert!(stats_if_any::<i32>(Err(Error::NotCalculated)).is_err());
/// ```
pub fn stats_if_any<S>(result: Result<S>) -> Result<Option<S>> {
    match result {
        Ok(stats) => Ok(Some(stats)),
        Err(Error::InsufficientData { actual: 0, .. }) => Ok(None),
        Err(err) => Err(err),
    }
}

/// A one-dimensional histogram, as rendered by text printers
pub trait UnivariateHistogram:
    FrequencyHistogram<
    Bin = Bin,
    EdgeCount = EdgeCount,
    Data = Vec<f64>,
    Range = RangeSpec,
    BinCount = usize,
    Stats = StatsResult,
>
{
}

impl<H> UnivariateHistogram for H where
    H: FrequencyHistogram<
        Bin = Bin,
        EdgeCount = EdgeCount,
        Data = Vec<f64>,
        Range = RangeSpec,
        BinCount = usize,
        Stats = StatsResult,
    >
{
}
