//! Descriptive statistics over raw samples and over frequency tables

use crate::types::{Quartiles, StatsMode, StatsResult};
use freqhist_core::{utils, Error, Result};
use statrs::statistics::Statistics;

/// Compute statistics over raw samples
///
/// Moments come from `statrs`; order statistics interpolate linearly
/// between neighbouring samples. Variance and its derivatives are 0.0 for
/// a single sample.
pub fn describe_samples(samples: &[f64], mode: StatsMode) -> Result<StatsResult> {
    if mode == StatsMode::CumulativeAggregatedInput {
        return Err(Error::InvalidParameter(
            "aggregated statistics need a (value, count) table".to_string(),
        ));
    }
    let (min, max) = utils::min_max(samples).ok_or_else(|| Error::empty_input("statistics"))?;

    let n = samples.len();
    let sum: f64 = samples.iter().sum();
    let sum2: f64 = samples.iter().map(|v| v * v).sum();
    let mean = Statistics::mean(samples.iter());
    let variance = if n < 2 {
        0.0
    } else {
        Statistics::variance(samples.iter())
    };
    let stdev = variance.sqrt();

    let mut result = StatsResult {
        count: n,
        min,
        max,
        sum,
        sum2,
        mean,
        variance,
        stdev,
        std_error_of_mean: stdev / (n as f64).sqrt(),
        range: max - min,
        median: None,
        quartiles: None,
        interquartile_range: None,
        midrange: None,
        geometric_mean: None,
        harmonic_mean: None,
    };

    if mode.is_full() {
        let sorted = utils::sorted(samples);
        // Non-empty was checked above, so every quantile exists.
        let q = |p| utils::quantile_sorted(&sorted, p).unwrap_or(f64::NAN);
        fill_order_statistics(&mut result, q(0.25), q(0.5), q(0.75));
        if min > 0.0 {
            result.geometric_mean = Some(Statistics::geometric_mean(samples.iter()));
            result.harmonic_mean = Some(Statistics::harmonic_mean(samples.iter()));
        }
    }

    Ok(result)
}

/// Compute full statistics over a `(value, count)` frequency table
///
/// Entries with a zero count are ignored. The table is never expanded, so
/// very large counts are cheap.
pub fn describe_frequencies(table: &[(f64, u64)]) -> Result<StatsResult> {
    let mut entries: Vec<(f64, u64)> = table.iter().copied().filter(|&(_, c)| c > 0).collect();
    if let Some(index) = entries.iter().position(|(v, _)| !v.is_finite()) {
        return Err(Error::non_numeric("frequency table", index));
    }
    entries.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let n: u64 = entries.iter().map(|&(_, c)| c).sum();
    if n == 0 {
        return Err(Error::empty_input("statistics"));
    }
    let n_f = n as f64;

    let min = entries[0].0;
    let max = entries[entries.len() - 1].0;
    let sum: f64 = entries.iter().map(|&(v, c)| v * c as f64).sum();
    let sum2: f64 = entries.iter().map(|&(v, c)| v * v * c as f64).sum();
    let mean = sum / n_f;
    let variance = if n < 2 {
        0.0
    } else {
        entries
            .iter()
            .map(|&(v, c)| c as f64 * (v - mean) * (v - mean))
            .sum::<f64>()
            / (n_f - 1.0)
    };
    let stdev = variance.sqrt();

    let mut result = StatsResult {
        count: n as usize,
        min,
        max,
        sum,
        sum2,
        mean,
        variance,
        stdev,
        std_error_of_mean: stdev / n_f.sqrt(),
        range: max - min,
        median: None,
        quartiles: None,
        interquartile_range: None,
        midrange: None,
        geometric_mean: None,
        harmonic_mean: None,
    };

    let q = |p| weighted_quantile(&entries, n, p);
    fill_order_statistics(&mut result, q(0.25), q(0.5), q(0.75));
    if min > 0.0 {
        let log_sum: f64 = entries.iter().map(|&(v, c)| c as f64 * v.ln()).sum();
        let recip_sum: f64 = entries.iter().map(|&(v, c)| c as f64 / v).sum();
        result.geometric_mean = Some((log_sum / n_f).exp());
        result.harmonic_mean = Some(n_f / recip_sum);
    }

    Ok(result)
}

fn fill_order_statistics(result: &mut StatsResult, q25: f64, q50: f64, q75: f64) {
    result.median = Some(q50);
    result.quartiles = Some(Quartiles { q25, q50, q75 });
    result.interquartile_range = Some(q75 - q25);
    result.midrange = Some((result.min + result.max) / 2.0);
}

/// Value of the `k`-th order statistic (0-based) of a sorted frequency table
fn order_statistic(entries: &[(f64, u64)], k: u64) -> f64 {
    let mut seen = 0u64;
    for &(value, count) in entries {
        seen += count;
        if k < seen {
            return value;
        }
    }
    entries.last().map(|&(v, _)| v).unwrap_or(f64::NAN)
}

/// Same interpolation rule as [`utils::quantile_sorted`], over a frequency table
fn weighted_quantile(entries: &[(f64, u64)], n: u64, p: f64) -> f64 {
    let h = (n - 1) as f64 * p.clamp(0.0, 1.0);
    let lower = h.floor();
    let frac = h - lower;
    let lo = order_statistic(entries, lower as u64);
    let hi = order_statistic(entries, h.ceil() as u64);
    lo + frac * (hi - lo)
}
