//! Renders simple and cumulative histograms as ASCII bar charts
//!
//! Run with `RUST_LOG=debug` to see the calculation events.

use freqhist_histogram::{
    BinFilterView, BivariateHistogram, FrequencyHistogram, Histogram, HistogramMode, PairedData,
};
use freqhist_printer::{print_histogram, HistogramPrinter, PrinterOptions, TextPrinter};
use freqhist_stats::StatsMode;
use tracing_subscriber::EnvFilter;

fn main() -> freqhist_printer::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let block = [
        1.5, 2.0, 3.0, 4.0, 0.0, 3.2, 0.1, 0.0, 0.0, 5.0, 3.0, 2.0, 3.0, 4.0, 1.0, 2.0, 4.0, 5.0,
        1.0, 3.0, 2.0, 4.0, 5.0, 2.0, 3.0, 4.0, 1.0, 2.0,
    ];
    let values: Vec<f64> = block.iter().copied().cycle().take(3 * block.len()).collect();

    let mut stdout = std::io::stdout();

    println!("===== Cumulative histogram, default options =====");
    let mut hist = Histogram::new(HistogramMode::Cumulative);
    hist.set_data(&values)?;
    print_histogram(&mut hist, PrinterOptions::default(), &mut stdout)?;

    println!("\n===== Same data with statistics =====");
    let printer = TextPrinter::new(PrinterOptions {
        output_statistics: true,
        ..PrinterOptions::default()
    })?;
    printer.print_output(&mut hist, &mut stdout)?;

    // Smooth bell-shaped data, binned over a narrow window
    let bell: Vec<f64> = (0..2000)
        .map(|i| {
            let u = (i as f64 + 0.5) / 2000.0;
            2.2 + 0.5 * (u - 0.5).signum() * (-(1.0 - (2.0 * u - 1.0).abs()).ln()).sqrt() * 0.8
        })
        .collect();

    println!("\n===== Simple histogram over [1.7, 2.7], mid-bin labels =====");
    let mut narrow = Histogram::new(HistogramMode::Simple);
    narrow.set_bin_options(20, Some(1.7), Some(2.7))?;
    narrow.set_data(&bell)?;
    narrow.calculate(StatsMode::Full)?;
    let printer = TextPrinter::new(PrinterOptions {
        output_statistics: true,
        histogram_bin_mode: BinFilterView::Mid,
        ..PrinterOptions::default()
    })?;
    print!("{}", printer.generate_output(&mut narrow)?);

    println!("\n===== Joint histogram as tab-separated values =====");
    let mut joint = BivariateHistogram::new(HistogramMode::Simple);
    let x: Vec<f64> = (0..200).map(|i| (i as f64 * 0.37).sin() * 3.0).collect();
    let y: Vec<f64> = (0..200).map(|i| (i as f64 * 0.11).cos() * 2.0).collect();
    joint.set_data(PairedData::new(x, y)?);
    joint.calculate(StatsMode::Basic)?;
    print!("{}", joint.to_separated(BinFilterView::Mid, "\t")?);

    Ok(())
}
