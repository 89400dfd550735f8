//! Core types for histogram representation

use freqhist_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether bin counts are per-bin frequencies or running totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistogramMode {
    /// Each bin counts the samples that fall inside it
    #[default]
    Simple,
    /// Each bin counts the samples up to and including it
    Cumulative,
}

impl HistogramMode {
    /// Human readable label used in reports
    pub fn label(self) -> &'static str {
        match self {
            HistogramMode::Simple => "histogram",
            HistogramMode::Cumulative => "cumulative frequency",
        }
    }
}

impl FromStr for HistogramMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" | "histogram" => Ok(Self::Simple),
            // the misspelling is what older option files carry
            "cumulative" | "cummulative" | "cumulative frequency" => Ok(Self::Cumulative),
            other => Err(Error::InvalidType(format!("unknown histogram type '{other}'"))),
        }
    }
}

impl fmt::Display for HistogramMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Projection used when reading bins back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinFilterView {
    /// The full bin records
    #[default]
    All,
    /// Keyed by each bin's low edge
    Low,
    /// Keyed by each bin's midpoint
    Mid,
    /// Keyed by each bin's high edge
    High,
}

impl FromStr for BinFilterView {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "low" | "lo" => Ok(Self::Low),
            "mid" => Ok(Self::Mid),
            "high" | "hi" => Ok(Self::High),
            other => Err(Error::InvalidFilter(format!("unknown bin filter '{other}'"))),
        }
    }
}

/// Lifecycle of a histogram engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// No data accepted yet
    #[default]
    Uninitialized,
    /// Data accepted, bins not computed
    DataAccepted,
    /// Bins computed for the current data
    Calculated,
}

/// Closed interval `[low, high]` spanned by one axis of a histogram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub low: f64,
    pub high: f64,
}

impl RangeSpec {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether `value` lies inside the closed range
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// One value per axis of a bivariate histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axes<T> {
    pub x: T,
    pub y: T,
}

impl<T> Axes<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Apply `f` to both axes
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Axes<U> {
        Axes {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

impl<T: Copy> Axes<T> {
    /// Same value on both axes
    pub fn splat(value: T) -> Self {
        Self { x: value, y: value }
    }
}

/// Edges of a single bin on one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinEdges {
    pub low: f64,
    pub high: f64,
    pub mid: f64,
}

impl BinEdges {
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            mid: (low + high) / 2.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// The edge value a filter view keys on; `None` for [`BinFilterView::All`]
    pub fn edge(&self, view: BinFilterView) -> Option<f64> {
        match view {
            BinFilterView::All => None,
            BinFilterView::Low => Some(self.low),
            BinFilterView::Mid => Some(self.mid),
            BinFilterView::High => Some(self.high),
        }
    }
}

/// A single bin of a one-dimensional histogram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bin {
    pub low: f64,
    pub high: f64,
    pub mid: f64,
    /// Frequency, or running total in cumulative mode
    pub count: usize,
}

impl Bin {
    pub fn new(edges: BinEdges, count: usize) -> Self {
        Self {
            low: edges.low,
            high: edges.high,
            mid: edges.mid,
            count,
        }
    }

    pub fn edges(&self) -> BinEdges {
        BinEdges {
            low: self.low,
            high: self.high,
            mid: self.mid,
        }
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}]: count={}", self.low, self.high, self.count)
    }
}

/// One cell of a bivariate histogram grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JointBin {
    pub x: BinEdges,
    pub y: BinEdges,
    pub count: usize,
    /// Index of the x-axis bin
    pub xbin: usize,
    /// Index of the y-axis bin
    pub ybin: usize,
}

/// Bin count keyed by one edge value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeCount {
    pub edge: f64,
    pub count: usize,
}

/// Joint cell count keyed by one edge value per axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JointEdgeCount {
    pub x: f64,
    pub y: f64,
    pub count: usize,
}

/// Result of a bin query: the full records or an edge-keyed projection
///
/// `Edges` keeps one entry per bin in bin order. Over a zero-width range
/// every bin has the same edges, so several entries share one edge value;
/// they are not merged.
#[derive(Debug, Clone, PartialEq)]
pub enum BinSelection<'a, B, E> {
    All(&'a [B]),
    Edges(Vec<E>),
}

impl<B, E> BinSelection<'_, B, E> {
    pub fn len(&self) -> usize {
        match self {
            BinSelection::All(bins) => bins.len(),
            BinSelection::Edges(edges) => edges.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The edge projection, if this selection is one
    pub fn edges(&self) -> Option<&[E]> {
        match self {
            BinSelection::All(_) => None,
            BinSelection::Edges(edges) => Some(edges),
        }
    }
}

/// Everything known about a computed histogram, in one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramInfo<S, B, N, R> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data_stats: S,
    /// `None` when no sample lies inside the range
    pub hist_data_stats: Option<S>,
    pub bins: Vec<B>,
    pub nbins: N,
    pub range: R,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("simple".parse::<HistogramMode>().unwrap(), HistogramMode::Simple);
        assert_eq!(" Cumulative ".parse::<HistogramMode>().unwrap(), HistogramMode::Cumulative);
        assert_eq!("cummulative".parse::<HistogramMode>().unwrap(), HistogramMode::Cumulative);
        assert!(matches!("triangular".parse::<HistogramMode>(), Err(Error::InvalidType(_))));
        assert_eq!(HistogramMode::default(), HistogramMode::Simple);
        assert_eq!(HistogramMode::Cumulative.to_string(), "cumulative frequency");
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<BinFilterView>().unwrap(), BinFilterView::All);
        assert_eq!("LOW".parse::<BinFilterView>().unwrap(), BinFilterView::Low);
        assert_eq!("mid".parse::<BinFilterView>().unwrap(), BinFilterView::Mid);
        assert_eq!("hi".parse::<BinFilterView>().unwrap(), BinFilterView::High);
        assert!(matches!("median".parse::<BinFilterView>(), Err(Error::InvalidFilter(_))));
    }

    #[test]
    fn test_bin_edges() {
        let edges = BinEdges::new(1.0, 2.0);
        assert_eq!(edges.mid, 1.5);
        assert_eq!(edges.width(), 1.0);
        assert_eq!(edges.edge(BinFilterView::Low), Some(1.0));
        assert_eq!(edges.edge(BinFilterView::Mid), Some(1.5));
        assert_eq!(edges.edge(BinFilterView::High), Some(2.0));
        assert_eq!(edges.edge(BinFilterView::All), None);

        let bin = Bin::new(edges, 4);
        assert_eq!(bin.edges(), edges);
        assert_eq!(bin.to_string(), "[1.000, 2.000]: count=4");
    }

    #[test]
    fn test_range_spec() {
        let range = RangeSpec::new(0.0, 5.0);
        assert!(range.contains(0.0));
        assert!(range.contains(5.0));
        assert!(!range.contains(5.0001));
        assert_eq!(range.width(), 5.0);
        assert_eq!(range.to_string(), "[0, 5]");
    }

    #[test]
    fn test_axes_map() {
        let axes = Axes::new(2usize, 3usize).map(|n| n * 10);
        assert_eq!(axes, Axes::new(20, 30));
        assert_eq!(Axes::splat(10usize), Axes::new(10, 10));
    }

    #[test]
    fn test_info_serializes_type_key() {
        let info = HistogramInfo {
            kind: HistogramMode::Simple.label(),
            data_stats: (),
            hist_data_stats: None,
            bins: vec![Bin::new(BinEdges::new(0.0, 1.0), 2)],
            nbins: 1usize,
            range: RangeSpec::new(0.0, 1.0),
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["type"], "histogram");
        assert_eq!(value["bins"][0]["mid"], 0.5);
        assert_eq!(value["range"]["high"], 1.0);
        assert!(value["hist_data_stats"].is_null());
    }
}
