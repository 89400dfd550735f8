//! Bin options and construction-time configuration
//!
//! Options can be built from typed values or read from a JSON document.
//! A recognized one-dimensional document looks like
//! `{"type": "cumulative", "nbins": 20, "low": 1.7, "high": 2.7}`; a
//! bivariate one carries per-axis objects:
//! `{"type": "simple", "low": {"x": 0, "y": 0}, "high": {"x": 4, "y": 4},
//! "nbins": {"x": 2, "y": 2}}`.

use crate::types::{Axes, HistogramMode, RangeSpec};
use crate::validate::numeric;
use freqhist_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Bin count used when none, or an unusable one, is given
pub const DEFAULT_NBINS: usize = 10;

/// Substitute [`DEFAULT_NBINS`] unless `raw` is an integer greater than 2
///
/// # Examples
///
/// ```rust
/// use freqhist_histogram::config::coerce_nbins;
///
/// assert_eq!(coerce_nbins(5.0), 5);
/// assert_eq!(coerce_nbins(2.0), 10);
/// assert_eq!(coerce_nbins(7.5), 10);
/// ```
pub fn coerce_nbins(raw: f64) -> usize {
    if raw.is_finite() && raw.fract() == 0.0 && raw > 2.0 && raw <= u32::MAX as f64 {
        raw as usize
    } else {
        warn!(requested = raw, substituted = DEFAULT_NBINS, "unusable bin count");
        DEFAULT_NBINS
    }
}

fn check_bound(value: Option<f64>, name: &str) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() => Err(Error::InvalidBinOptions(format!("{name} must be finite"))),
        _ => Ok(()),
    }
}

/// Bin count and optional range bounds of a one-dimensional histogram
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinOptions {
    nbins: usize,
    low: Option<f64>,
    high: Option<f64>,
}

impl Default for BinOptions {
    fn default() -> Self {
        Self {
            nbins: DEFAULT_NBINS,
            low: None,
            high: None,
        }
    }
}

impl BinOptions {
    /// Build options; `nbins <= 2` is replaced by [`DEFAULT_NBINS`]
    ///
    /// Unset bounds are resolved from the data when it is accepted. Fails
    /// with `InvalidBinOptions` for non-finite bounds or `low > high`.
    pub fn new(nbins: usize, low: Option<f64>, high: Option<f64>) -> Result<Self> {
        check_bound(low, "low")?;
        check_bound(high, "high")?;
        if let (Some(lo), Some(hi)) = (low, high) {
            if lo > hi {
                return Err(Error::InvalidBinOptions(format!("low {lo} is above high {hi}")));
            }
        }
        Ok(Self {
            nbins: coerce_nbins(nbins as f64),
            low,
            high,
        })
    }

    /// Read `nbins`, `low` and `high` from a JSON object; all are optional
    pub fn from_object(object: &Map<String, Value>) -> Result<Self> {
        let nbins = match object.get("nbins") {
            None | Some(Value::Null) => DEFAULT_NBINS,
            Some(value) => coerce_nbins(numeric(value).unwrap_or(f64::NAN)),
        };
        let bound = |key: &str| -> Result<Option<f64>> {
            match object.get(key) {
                None | Some(Value::Null) => Ok(None),
                Some(value) => numeric(value)
                    .map(Some)
                    .ok_or_else(|| Error::InvalidBinOptions(format!("{key} must be numeric"))),
            }
        };
        let options = Self::new(DEFAULT_NBINS, bound("low")?, bound("high")?)?;
        Ok(Self { nbins, ..options })
    }

    pub fn nbins(&self) -> usize {
        self.nbins
    }

    pub fn low(&self) -> Option<f64> {
        self.low
    }

    pub fn high(&self) -> Option<f64> {
        self.high
    }

    /// Fill unset bounds from the observed data extremes
    pub fn resolve(&self, data_min: f64, data_max: f64) -> RangeSpec {
        RangeSpec::new(self.low.unwrap_or(data_min), self.high.unwrap_or(data_max))
    }
}

/// Per-axis ranges and bin counts of a bivariate histogram
///
/// All three structures are required together; there is no partial form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BivariateBinOptions {
    low: Axes<f64>,
    high: Axes<f64>,
    nbins: Axes<usize>,
}

impl BivariateBinOptions {
    /// Fails with `InvalidBinOptions` for non-finite bounds, `low > high`
    /// on an axis, or a zero bin count
    pub fn new(low: Axes<f64>, high: Axes<f64>, nbins: Axes<usize>) -> Result<Self> {
        for (axis, lo, hi, n) in [("x", low.x, high.x, nbins.x), ("y", low.y, high.y, nbins.y)] {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(Error::InvalidBinOptions(format!("{axis} bounds must be finite")));
            }
            if lo > hi {
                return Err(Error::InvalidBinOptions(format!(
                    "{axis} low {lo} is above high {hi}"
                )));
            }
            if n == 0 {
                return Err(Error::InvalidBinOptions(format!("{axis} needs at least one bin")));
            }
        }
        Ok(Self { low, high, nbins })
    }

    /// Read `low`, `high` and `nbins`, each an object with numeric `x` and `y`
    pub fn from_object(object: &Map<String, Value>) -> Result<Self> {
        let axes = |key: &str| -> Result<Axes<f64>> {
            let inner = object
                .get(key)
                .and_then(Value::as_object)
                .ok_or_else(|| Error::InvalidBinOptions(format!("'{key}' must be an object with x and y")))?;
            let axis = |name: &str| {
                inner.get(name).and_then(numeric).ok_or_else(|| {
                    Error::InvalidBinOptions(format!("'{key}.{name}' must be numeric"))
                })
            };
            Ok(Axes::new(axis("x")?, axis("y")?))
        };

        let low = axes("low")?;
        let high = axes("high")?;
        let nbins = axes("nbins")?;
        let count = |n: f64, axis: &str| -> Result<usize> {
            if n.fract() != 0.0 || n < 1.0 || n > u32::MAX as f64 {
                return Err(Error::InvalidBinOptions(format!(
                    "'nbins.{axis}' must be a positive integer"
                )));
            }
            Ok(n as usize)
        };
        Self::new(low, high, Axes::new(count(nbins.x, "x")?, count(nbins.y, "y")?))
    }

    /// Parse from a JSON value, which must be an object
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::InvalidBinOptions("incorrect options object".to_string()))?;
        Self::from_object(object)
    }

    pub fn low(&self) -> Axes<f64> {
        self.low
    }

    pub fn high(&self) -> Axes<f64> {
        self.high
    }

    pub fn nbins(&self) -> Axes<usize> {
        self.nbins
    }

    /// The configured range of each axis
    pub fn range(&self) -> Axes<RangeSpec> {
        Axes::new(
            RangeSpec::new(self.low.x, self.high.x),
            RangeSpec::new(self.low.y, self.high.y),
        )
    }
}

fn mode_from_object(object: &Map<String, Value>) -> Result<HistogramMode> {
    match object.get("type") {
        None | Some(Value::Null) => Ok(HistogramMode::default()),
        Some(Value::String(s)) => s.parse(),
        Some(other) => Err(Error::InvalidType(format!("histogram type must be a string, got {other}"))),
    }
}

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::InvalidBinOptions(format!("{what} configuration must be an object")))
}

/// Construction options of a one-dimensional histogram
///
/// Deserializes from the flat document form, with the same coercions and
/// checks as [`from_value`](Self::from_value).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct HistogramConfig {
    #[serde(rename = "type")]
    pub mode: HistogramMode,
    pub bin_options: BinOptions,
}

impl HistogramConfig {
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = as_object(value, "histogram")?;
        Ok(Self {
            mode: mode_from_object(object)?,
            bin_options: BinOptions::from_object(object)?,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_value(&serde_json::from_str(json)?)
    }
}

impl TryFrom<Value> for HistogramConfig {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

/// Construction options of a bivariate histogram
///
/// `bin_options` is `None` when the document carries none of `low`,
/// `high` and `nbins`; ranges and bin counts are then taken from the data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct BivariateConfig {
    #[serde(rename = "type")]
    pub mode: HistogramMode,
    pub bin_options: Option<BivariateBinOptions>,
}

impl BivariateConfig {
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = as_object(value, "bivariate histogram")?;
        let has_options = ["low", "high", "nbins"].iter().any(|k| object.contains_key(*k));
        Ok(Self {
            mode: mode_from_object(object)?,
            bin_options: if has_options {
                Some(BivariateBinOptions::from_object(object)?)
            } else {
                None
            },
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_value(&serde_json::from_str(json)?)
    }
}

impl TryFrom<Value> for BivariateConfig {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_nbins() {
        assert_eq!(coerce_nbins(3.0), 3);
        assert_eq!(coerce_nbins(20.0), 20);
        assert_eq!(coerce_nbins(2.0), DEFAULT_NBINS);
        assert_eq!(coerce_nbins(0.0), DEFAULT_NBINS);
        assert_eq!(coerce_nbins(-4.0), DEFAULT_NBINS);
        assert_eq!(coerce_nbins(4.5), DEFAULT_NBINS);
        assert_eq!(coerce_nbins(f64::NAN), DEFAULT_NBINS);
    }

    #[test]
    fn test_bin_options_new() {
        let options = BinOptions::new(5, Some(0.0), None).unwrap();
        assert_eq!(options.nbins(), 5);
        assert_eq!(options.low(), Some(0.0));
        assert_eq!(options.high(), None);
        assert_eq!(options.resolve(-3.0, 9.0), RangeSpec::new(0.0, 9.0));

        assert_eq!(BinOptions::new(1, None, None).unwrap().nbins(), DEFAULT_NBINS);
        assert_eq!(BinOptions::default().nbins(), DEFAULT_NBINS);
        assert!(matches!(
            BinOptions::new(5, Some(3.0), Some(1.0)),
            Err(Error::InvalidBinOptions(_))
        ));
        assert!(matches!(
            BinOptions::new(5, Some(f64::NAN), None),
            Err(Error::InvalidBinOptions(_))
        ));
    }

    #[test]
    fn test_histogram_config_from_json() {
        let config =
            HistogramConfig::from_json_str(r#"{"type": "cumulative", "nbins": 20, "low": 1.7, "high": "2.7"}"#)
                .unwrap();
        assert_eq!(config.mode, HistogramMode::Cumulative);
        assert_eq!(config.bin_options.nbins(), 20);
        assert_eq!(config.bin_options.low(), Some(1.7));
        assert_eq!(config.bin_options.high(), Some(2.7));

        let config = HistogramConfig::from_value(&json!({})).unwrap();
        assert_eq!(config, HistogramConfig::default());

        let config = HistogramConfig::from_value(&json!({"nbins": 2.5})).unwrap();
        assert_eq!(config.bin_options.nbins(), DEFAULT_NBINS);
        let config = HistogramConfig::from_value(&json!({"nbins": "many"})).unwrap();
        assert_eq!(config.bin_options.nbins(), DEFAULT_NBINS);
    }

    #[test]
    fn test_histogram_config_errors() {
        assert!(matches!(
            HistogramConfig::from_value(&json!({"type": "pie"})),
            Err(Error::InvalidType(_))
        ));
        assert!(matches!(
            HistogramConfig::from_value(&json!({"type": 2})),
            Err(Error::InvalidType(_))
        ));
        assert!(matches!(
            HistogramConfig::from_value(&json!({"low": "floor"})),
            Err(Error::InvalidBinOptions(_))
        ));
        assert!(matches!(
            HistogramConfig::from_value(&json!([1, 2])),
            Err(Error::InvalidBinOptions(_))
        ));
        assert!(matches!(HistogramConfig::from_json_str("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_bivariate_options_from_value() {
        let options = BivariateBinOptions::from_value(&json!({
            "low": {"x": 0, "y": -1},
            "high": {"x": 4, "y": 1},
            "nbins": {"x": 2, "y": 4},
        }))
        .unwrap();
        assert_eq!(options.low(), Axes::new(0.0, -1.0));
        assert_eq!(options.high(), Axes::new(4.0, 1.0));
        assert_eq!(options.nbins(), Axes::new(2, 4));
        assert_eq!(options.range().y, RangeSpec::new(-1.0, 1.0));
    }

    #[test]
    fn test_bivariate_options_rejects_malformed() {
        let good_axes = json!({"x": 1, "y": 1});
        for bad in [
            json!("options"),
            json!({"low": good_axes, "high": good_axes}),
            json!({"low": {"x": 0}, "high": good_axes, "nbins": good_axes}),
            json!({"low": [0, 0], "high": good_axes, "nbins": good_axes}),
            json!({"low": {"x": "a", "y": 0}, "high": good_axes, "nbins": good_axes}),
            json!({"low": good_axes, "high": good_axes, "nbins": {"x": 0, "y": 1}}),
            json!({"low": good_axes, "high": good_axes, "nbins": {"x": 1.5, "y": 1}}),
            json!({"low": {"x": 2, "y": 0}, "high": good_axes, "nbins": good_axes}),
        ] {
            assert!(
                matches!(BivariateBinOptions::from_value(&bad), Err(Error::InvalidBinOptions(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_bivariate_config() {
        let config = BivariateConfig::from_value(&json!({"type": "cumulative"})).unwrap();
        assert_eq!(config.mode, HistogramMode::Cumulative);
        assert!(config.bin_options.is_none());

        let config = BivariateConfig::from_value(&json!({
            "low": {"x": 0, "y": 0},
            "high": {"x": 4, "y": 4},
            "nbins": {"x": 2, "y": 2},
        }))
        .unwrap();
        assert_eq!(config.mode, HistogramMode::Simple);
        assert_eq!(config.bin_options.unwrap().nbins(), Axes::splat(2));

        assert!(matches!(
            BivariateConfig::from_value(&json!({"nbins": {"x": 2, "y": 2}})),
            Err(Error::InvalidBinOptions(_))
        ));
    }

    #[test]
    fn test_configs_deserialize_through_validation() {
        let config: HistogramConfig =
            serde_json::from_str(r#"{"type": "cumulative", "nbins": 4, "low": 0, "high": "8"}"#).unwrap();
        assert_eq!(config.mode, HistogramMode::Cumulative);
        assert_eq!(config.bin_options, BinOptions::new(4, Some(0.0), Some(8.0)).unwrap());

        assert!(serde_json::from_str::<HistogramConfig>(r#"{"type": "stacked"}"#).is_err());
        assert!(serde_json::from_str::<HistogramConfig>(r#"{"low": 5, "high": 1}"#).is_err());
        assert!(serde_json::from_str::<HistogramConfig>("[1, 2]").is_err());

        let config: BivariateConfig = serde_json::from_value(json!({
            "type": "simple",
            "low": {"x": 0, "y": 0},
            "high": {"x": 4, "y": 4},
            "nbins": {"x": 2, "y": 2}
        }))
        .unwrap();
        assert_eq!(config.bin_options.map(|o| o.nbins()), Some(Axes::splat(2)));
        assert_eq!(serde_json::from_value::<BivariateConfig>(json!({})).unwrap(), BivariateConfig::default());
        assert!(serde_json::from_value::<BivariateConfig>(json!({"low": {"x": 0, "y": 0}})).is_err());
    }
}
