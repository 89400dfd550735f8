//! Utility functions for working with data slices

use std::cmp::Ordering;

/// Total order on `f64` that places NaN after every other value
fn nan_last(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Sort data in place, ascending
///
/// Handles NaN values by placing them at the end.
pub fn sort_in_place(data: &mut [f64]) {
    data.sort_by(nan_last);
}

/// Sort data and return a new vector
///
/// # Examples
///
/// ```rust
/// use freqhist_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sort_in_place(&mut sorted);
    sorted
}

/// Minimum and maximum of a slice in one pass
///
/// Returns `None` for empty slices.
///
/// # Examples
///
/// ```rust
/// use freqhist_core::utils::min_max;
///
/// assert_eq!(min_max(&[3.0, -1.0, 7.5]), Some((-1.0, 7.5)));
/// assert_eq!(min_max(&[]), None);
/// ```
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = data.split_first()?;
    Some(rest.iter().fold((first, first), |(lo, hi), &v| {
        (if v < lo { v } else { lo }, if v > hi { v } else { hi })
    }))
}

/// Quantile of pre-sorted data by linear interpolation between order statistics
///
/// `p` is clamped to `[0, 1]`. Returns `None` for empty slices.
///
/// # Examples
///
/// ```rust
/// use freqhist_core::utils::quantile_sorted;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(quantile_sorted(&data, 0.25), Some(2.0));
/// assert_eq!(quantile_sorted(&data, 0.5), Some(3.0));
/// ```
pub fn quantile_sorted(sorted_data: &[f64], p: f64) -> Option<f64> {
    if sorted_data.is_empty() {
        return None;
    }
    let p = p.clamp(0.0, 1.0);
    let h = (sorted_data.len() - 1) as f64 * p;
    let lower = h.floor() as usize;
    let upper = h.ceil() as usize;
    let frac = h - lower as f64;
    Some(sorted_data[lower] + frac * (sorted_data[upper] - sorted_data[lower]))
}
