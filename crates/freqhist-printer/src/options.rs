//! Printer options

use freqhist_core::{Error, Result};
use freqhist_histogram::BinFilterView;
use freqhist_stats::StatsMode;
use serde::{Deserialize, Serialize};

/// Rendering options shared by printers
///
/// Every field has a default, so a JSON document only needs the keys it
/// changes: `{"output_statistics": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterOptions {
    /// Append the statistics of the in-range data
    pub output_statistics: bool,
    /// Prefix the output with a `Content-type: text/plain` header
    pub use_http_headers: bool,
    /// Which bin edge labels each row; must not be `All`
    pub histogram_bin_mode: BinFilterView,
    /// Statistics detail used when the printer has to calculate the histogram
    pub histogram_stats_mode: StatsMode,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            output_statistics: false,
            use_http_headers: false,
            histogram_bin_mode: BinFilterView::High,
            histogram_stats_mode: StatsMode::Basic,
        }
    }
}

impl PrinterOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject combinations that cannot be rendered
    pub fn validate(&self) -> Result<()> {
        if self.histogram_bin_mode == BinFilterView::All {
            return Err(Error::InvalidFilter(
                "rows need a low, mid or high bin edge".to_string(),
            ));
        }
        if self.histogram_stats_mode == StatsMode::CumulativeAggregatedInput {
            return Err(Error::InvalidParameter(
                "histograms are calculated over raw samples".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PrinterOptions::default();
        assert!(!options.output_statistics);
        assert!(!options.use_http_headers);
        assert_eq!(options.histogram_bin_mode, BinFilterView::High);
        assert_eq!(options.histogram_stats_mode, StatsMode::Basic);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let options =
            PrinterOptions::from_json_str(r#"{"output_statistics": true, "histogram_bin_mode": "mid"}"#)
                .unwrap();
        assert!(options.output_statistics);
        assert_eq!(options.histogram_bin_mode, BinFilterView::Mid);
        assert_eq!(options.histogram_stats_mode, StatsMode::Basic);

        assert!(matches!(
            PrinterOptions::from_json_str(r#"{"histogram_bin_mode": "all"}"#),
            Err(Error::InvalidFilter(_))
        ));
        assert!(matches!(
            PrinterOptions::from_json_str(r#"{"histogram_bin_mode": "median"}"#),
            Err(Error::Json(_))
        ));
    }
}
