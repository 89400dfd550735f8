//! Integration tests for the bivariate histogram

mod common;

use common::*;
use freqhist_histogram::*;
use freqhist_stats::StatsMode;

fn diagonal_histogram(mode: HistogramMode) -> BivariateHistogram {
    let mut hist = BivariateHistogram::new(mode);
    hist.set_bin_options(
        BivariateBinOptions::new(Axes::splat(0.0), Axes::splat(4.0), Axes::splat(2)).unwrap(),
    );
    hist.set_data(PairedData::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 2.0, 3.0]).unwrap());
    hist.calculate(StatsMode::Basic).unwrap();
    hist
}

#[test]
fn test_diagonal_simple() {
    let hist = diagonal_histogram(HistogramMode::Simple);
    assert_eq!(cell_counts(hist.bins().unwrap()), vec![3, 0, 0, 1]);
}

#[test]
fn test_diagonal_cumulative_keeps_historical_counts() {
    // occupied cells report freq + running total - 1
    let hist = diagonal_histogram(HistogramMode::Cumulative);
    assert_eq!(cell_counts(hist.bins().unwrap()), vec![5, 0, 0, 4]);
}

#[test]
fn test_uniform_cloud_counts_every_pair_once() {
    let x = uniform_sample(2_000, -1.0, 1.0, 7);
    let y = uniform_sample(2_000, 10.0, 30.0, 8);
    let mut hist = BivariateHistogram::default();
    hist.set_data(PairedData::new(x, y).unwrap());
    hist.calculate(StatsMode::Full).unwrap();

    let cells = hist.bins().unwrap();
    assert_eq!(cells.len(), 100);
    assert_eq!(cell_counts(cells).iter().sum::<usize>(), 2_000);

    let stats = hist.data_stats().unwrap();
    assert_eq!(stats.x.count, 2_000);
    assert!(stats.y.min >= 10.0);
    assert!(stats.x.median.is_some());
}

#[test]
fn test_partial_range_filters_pairs() {
    let mut hist = BivariateHistogram::default();
    hist.set_bin_options(
        BivariateBinOptions::new(Axes::new(0.0, 0.0), Axes::new(2.0, 2.0), Axes::new(2, 4)).unwrap(),
    );
    hist.set_data(PairedData::new(vec![0.5, 1.5, 2.5, 1.0], vec![0.5, 3.0, 1.0, 1.0]).unwrap());
    hist.calculate(StatsMode::Basic).unwrap();

    assert_eq!(
        hist.histogram_data().unwrap(),
        Axes::new(vec![0.5, 1.0], vec![0.5, 1.0])
    );
    let cells = hist.bins().unwrap();
    assert_eq!(cells.len(), 8);
    // (0.5, 0.5) and (1.0, 1.0) both land in x bin 0, y bins 0 and 1
    assert_eq!(cells[0].count, 1);
    assert_eq!(cells[1].count, 1);
    assert_eq!(cell_counts(cells).iter().sum::<usize>(), 2);
}

#[test]
fn test_separated_output_for_low_edges() {
    let hist = diagonal_histogram(HistogramMode::Simple);
    let text = hist.to_separated(BinFilterView::Low, "\t").unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "# x_bin\ty_bin\tfrequency");
    assert_eq!(&lines[1..], &["0\t0\t3", "0\t2\t0", "2\t0\t0", "2\t2\t1"]);
}

#[test]
fn test_info_serializes_per_axis() {
    let mut hist = diagonal_histogram(HistogramMode::Simple);
    let info = serde_json::to_value(hist.histogram_info().unwrap()).unwrap();
    assert_eq!(info["type"], "histogram");
    assert_eq!(info["nbins"]["x"], 2);
    assert_eq!(info["range"]["y"]["high"], 4.0);
    assert_eq!(info["data_stats"]["x"]["count"], 4);
    assert_eq!(info["bins"][0]["x"]["low"], 0.0);
    assert_eq!(info["bins"][3]["ybin"], 1);
}
