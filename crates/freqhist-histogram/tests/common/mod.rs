//! Shared data sets for histogram integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use freqhist_histogram::{Bin, JointBin};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal, Uniform};

/// A small hand-made sample with repeated values on bin edges
pub const BORING_BLOCK: [f64; 28] = [
    1.5, 2.0, 3.0, 4.0, 0.0, 3.2, 0.1, 0.0, 0.0, 5.0, 3.0, 2.0, 3.0, 4.0, 1.0, 2.0, 4.0, 5.0, 1.0,
    3.0, 2.0, 4.0, 5.0, 2.0, 3.0, 4.0, 1.0, 2.0,
];

/// [`BORING_BLOCK`] repeated three times, 84 samples over `[0, 5]`
pub fn boring_values() -> Vec<f64> {
    BORING_BLOCK.iter().copied().cycle().take(3 * BORING_BLOCK.len()).collect()
}

/// Seeded normal sample
pub fn normal_sample(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).expect("valid normal parameters");
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Seeded uniform sample over `[low, high)`
pub fn uniform_sample(n: usize, low: f64, high: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let uniform = Uniform::new(low, high);
    (0..n).map(|_| uniform.sample(&mut rng)).collect()
}

pub fn counts(bins: &[Bin]) -> Vec<usize> {
    bins.iter().map(|b| b.count).collect()
}

pub fn cell_counts(cells: &[JointBin]) -> Vec<usize> {
    cells.iter().map(|c| c.count).collect()
}
