//! Frequency accumulation over a bin grid
//!
//! Every accumulation pass owns one [`ClaimedSet`]. A sample that matched a
//! bin is claimed and skipped by every later bin, so no sample is counted
//! twice even if the membership rule would accept it in more than one
//! place. No spatial index is used: the cost is `O(bins × samples)` in the
//! worst case and shrinks as samples get claimed.

use crate::grid::{AxisGrid, JointGrid};
use crate::types::{Bin, HistogramMode, JointBin};
use tracing::trace;

/// Samples already attributed to a bin during one accumulation pass
#[derive(Debug, Clone)]
pub struct ClaimedSet {
    claimed: Vec<bool>,
    n_claimed: usize,
}

impl ClaimedSet {
    /// A set with room for `len` sample indices, none claimed
    pub fn with_len(len: usize) -> Self {
        Self {
            claimed: vec![false; len],
            n_claimed: 0,
        }
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.claimed[index]
    }

    /// Claim `index`; returns `false` if it was already claimed
    #[inline]
    pub fn claim(&mut self, index: usize) -> bool {
        if self.claimed[index] {
            return false;
        }
        self.claimed[index] = true;
        self.n_claimed += 1;
        true
    }

    /// Number of claimed samples
    pub fn len(&self) -> usize {
        self.n_claimed
    }

    pub fn is_empty(&self) -> bool {
        self.n_claimed == 0
    }

    /// Whether every sample has been claimed
    pub fn is_full(&self) -> bool {
        self.n_claimed == self.claimed.len()
    }
}

/// Single-pass frequency counter in simple or cumulative mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencyAccumulator {
    mode: HistogramMode,
}

impl FrequencyAccumulator {
    pub fn new(mode: HistogramMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> HistogramMode {
        self.mode
    }

    /// Count `data` into the bins of `grid`
    ///
    /// In cumulative mode each bin starts from the running total of all
    /// earlier bins, so `count` is the number of samples matched in bins
    /// `0..=i`.
    pub fn accumulate(&self, grid: &AxisGrid, data: &[f64]) -> Vec<Bin> {
        let mut claimed = ClaimedSet::with_len(data.len());
        let mut running = 0usize;
        let mut bins = Vec::with_capacity(grid.len());

        for (i, edges) in grid.bins().iter().enumerate() {
            let mut count = match self.mode {
                HistogramMode::Simple => 0,
                HistogramMode::Cumulative => running,
            };
            if !claimed.is_full() {
                for (j, &value) in data.iter().enumerate() {
                    if claimed.contains(j) || !grid.classify(i, value) {
                        continue;
                    }
                    claimed.claim(j);
                    count += 1;
                    running += 1;
                }
            }
            trace!(bin = i, low = edges.low, high = edges.high, count, "accumulated bin");
            bins.push(Bin::new(*edges, count));
        }

        bins
    }

    /// Count paired samples into the cells of `grid`, in row-major order
    ///
    /// Cumulative mode uses the historical joint formula: a cell with
    /// `freq > 0` matches reports `freq + cumm - 1`, where `cumm` is the
    /// running total of matches including this cell, and an empty cell
    /// reports 0. This counts a cell's own matches twice compared with the
    /// one-dimensional running total and is not monotone across cells. It
    /// is kept for compatibility with existing outputs.
    pub fn accumulate_joint(&self, grid: &JointGrid, x: &[f64], y: &[f64]) -> Vec<JointBin> {
        let n = x.len().min(y.len());
        let mut claimed = ClaimedSet::with_len(n);
        let mut cumm = 0usize;
        let mut cells = Vec::with_capacity(grid.len());

        for cell in grid.cells() {
            let mut freq = 0usize;
            if !claimed.is_full() {
                for k in 0..n {
                    if claimed.contains(k) || !cell.contains(x[k], y[k]) {
                        continue;
                    }
                    claimed.claim(k);
                    freq += 1;
                    cumm += 1;
                }
            }
            let count = match self.mode {
                HistogramMode::Simple => freq,
                HistogramMode::Cumulative if freq > 0 => freq + cumm - 1,
                HistogramMode::Cumulative => 0,
            };
            trace!(xbin = cell.xbin, ybin = cell.ybin, freq, count, "accumulated cell");
            cells.push(JointBin {
                x: cell.x,
                y: cell.y,
                count,
                xbin: cell.xbin,
                ybin: cell.ybin,
            });
        }

        cells
    }
}
