//! Equal-width bin grids and the bin membership rule

use crate::types::{Axes, BinEdges, RangeSpec};

/// Contiguous, equal-width partition of one axis
///
/// Edge `k` sits at `low + k * delta` with `delta = (high - low) / n`.
/// Neighbouring bins share the same edge value, and the last edge is
/// pinned to `high` so rounding never pushes the range ceiling out of the
/// grid.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGrid {
    bins: Vec<BinEdges>,
}

impl AxisGrid {
    /// Partition `range` into `nbins` equal-width bins
    pub fn equal_width(range: RangeSpec, nbins: usize) -> Self {
        if nbins == 0 {
            return Self { bins: Vec::new() };
        }
        let delta = range.width() / nbins as f64;
        let edges: Vec<f64> = (0..=nbins)
            .map(|k| {
                if k == nbins {
                    range.high
                } else {
                    range.low + k as f64 * delta
                }
            })
            .collect();
        let bins = edges.windows(2).map(|w| BinEdges::new(w[0], w[1])).collect();
        Self { bins }
    }

    pub fn bins(&self) -> &[BinEdges] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Whether `value` belongs to bin `index` under [`in_bin`]
    pub fn classify(&self, index: usize, value: f64) -> bool {
        self.bins
            .get(index)
            .is_some_and(|edges| in_bin(edges, index, value))
    }

    /// Index of the bin `value` belongs to, if any
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        (0..self.bins.len()).find(|&i| self.classify(i, value))
    }
}

/// Bin membership rule
///
/// The first bin is closed on both edges; every later bin is open on its
/// low edge and closed on its high edge. A value on an interior boundary
/// therefore belongs to the lower bin only.
#[inline]
pub fn in_bin(edges: &BinEdges, index: usize, value: f64) -> bool {
    if index == 0 {
        edges.low <= value && value <= edges.high
    } else {
        edges.low < value && value <= edges.high
    }
}

/// One cell of a [`JointGrid`] with its per-axis indices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub xbin: usize,
    pub ybin: usize,
    pub x: BinEdges,
    pub y: BinEdges,
}

impl GridCell {
    /// A pair belongs to the cell iff each coordinate belongs to its axis bin
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        in_bin(&self.x, self.xbin, x) && in_bin(&self.y, self.ybin, y)
    }
}

/// Cartesian product of two axis grids
#[derive(Debug, Clone, PartialEq)]
pub struct JointGrid {
    x: AxisGrid,
    y: AxisGrid,
}

impl JointGrid {
    pub fn equal_width(range: Axes<RangeSpec>, nbins: Axes<usize>) -> Self {
        Self {
            x: AxisGrid::equal_width(range.x, nbins.x),
            y: AxisGrid::equal_width(range.y, nbins.y),
        }
    }

    pub fn x(&self) -> &AxisGrid {
        &self.x
    }

    pub fn y(&self) -> &AxisGrid {
        &self.y
    }

    /// Number of cells, `nx * ny`
    pub fn len(&self) -> usize {
        self.x.len() * self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cells in row-major order: x index outer, y index inner
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.x.bins().iter().enumerate().flat_map(move |(xbin, &x)| {
            self.y
                .bins()
                .iter()
                .enumerate()
                .map(move |(ybin, &y)| GridCell { xbin, ybin, x, y })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_width_edges() {
        let grid = AxisGrid::equal_width(RangeSpec::new(0.0, 5.0), 5);
        assert_eq!(grid.len(), 5);
        for (i, bin) in grid.bins().iter().enumerate() {
            assert_eq!(bin.low, i as f64);
            assert_eq!(bin.high, (i + 1) as f64);
            assert_eq!(bin.mid, i as f64 + 0.5);
        }
    }

    #[test]
    fn test_edges_are_shared_and_last_edge_is_pinned() {
        // 0.1 steps do not add up exactly in binary
        let range = RangeSpec::new(0.0, 0.7);
        let grid = AxisGrid::equal_width(range, 7);
        for pair in grid.bins().windows(2) {
            assert_eq!(pair[0].high, pair[1].low);
        }
        assert_eq!(grid.bins()[0].low, 0.0);
        assert_eq!(grid.bins()[6].high, 0.7);
    }

    #[test]
    fn test_zero_bins_is_empty() {
        let grid = AxisGrid::equal_width(RangeSpec::new(0.0, 1.0), 0);
        assert!(grid.is_empty());
        assert_eq!(grid.find_bin(0.5), None);
    }

    #[test]
    fn test_boundary_rule() {
        let grid = AxisGrid::equal_width(RangeSpec::new(0.0, 4.0), 4);

        // first bin is closed on both ends
        assert!(grid.classify(0, 0.0));
        assert!(grid.classify(0, 1.0));
        // interior boundaries go to the lower bin
        assert!(!grid.classify(1, 1.0));
        assert!(grid.classify(1, 2.0));
        assert!(!grid.classify(2, 2.0));
        // last bin is closed on the top
        assert!(grid.classify(3, 4.0));
        // out of range
        assert!(!grid.classify(0, -0.1));
        assert!(!grid.classify(3, 4.1));
        assert!(!grid.classify(9, 1.0));

        assert_eq!(grid.find_bin(0.0), Some(0));
        assert_eq!(grid.find_bin(1.0), Some(0));
        assert_eq!(grid.find_bin(1.5), Some(1));
        assert_eq!(grid.find_bin(4.0), Some(3));
        assert_eq!(grid.find_bin(4.5), None);
    }

    #[test]
    fn test_degenerate_range_collapses_into_first_bin() {
        let grid = AxisGrid::equal_width(RangeSpec::new(2.0, 2.0), 3);
        assert_eq!(grid.find_bin(2.0), Some(0));
        assert!(!grid.classify(1, 2.0));
    }

    #[test]
    fn test_joint_grid_row_major_order() {
        let grid = JointGrid::equal_width(
            Axes::new(RangeSpec::new(0.0, 4.0), RangeSpec::new(0.0, 6.0)),
            Axes::new(2, 3),
        );
        assert_eq!(grid.len(), 6);

        let order: Vec<(usize, usize)> = grid.cells().map(|c| (c.xbin, c.ybin)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);

        let cell = grid.cells().nth(4).unwrap();
        assert_eq!((cell.x.low, cell.x.high), (2.0, 4.0));
        assert_eq!((cell.y.low, cell.y.high), (2.0, 4.0));
        assert!(cell.contains(3.0, 3.0));
        assert!(!cell.contains(2.0, 3.0));
        assert!(!cell.contains(3.0, 2.0));
    }

    #[test]
    fn test_joint_cell_first_row_and_column_are_closed() {
        let grid = JointGrid::equal_width(
            Axes::splat(RangeSpec::new(0.0, 4.0)),
            Axes::splat(2),
        );
        let first = grid.cells().next().unwrap();
        assert!(first.contains(0.0, 0.0));
        assert!(first.contains(2.0, 2.0));

        let corner = grid.cells().last().unwrap();
        assert!(!corner.contains(2.0, 4.0));
        assert!(corner.contains(4.0, 4.0));
    }
}
