//! Data set validation
//!
//! Typed input (`&[f64]`, [`PairedData`]) only needs the finiteness and
//! length checks. JSON input additionally goes through the shape checks
//! that a loosely typed document needs: a sequence of numbers for one
//! dimension, an object with exactly the sequences `x` and `y` for two.
//! Numeric strings such as `"2.5"` are accepted as numbers.

use freqhist_core::{utils, Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Check a one-dimensional data set: non-empty, every sample finite
pub fn validate_samples(data: &[f64]) -> Result<()> {
    if data.is_empty() {
        return Err(Error::InvalidData("array of numeric data expected".to_string()));
    }
    if let Some(index) = data.iter().position(|v| !v.is_finite()) {
        return Err(Error::non_numeric("data", index));
    }
    Ok(())
}

/// Read a number, or a string holding one, out of a JSON value
pub fn numeric(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn numeric_sequence(value: &Value, context: &str) -> Result<Vec<f64>> {
    let items = value
        .as_array()
        .ok_or_else(|| Error::InvalidData(format!("{context}: array of numeric data expected")))?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| numeric(item).ok_or_else(|| Error::non_numeric(context, i)))
        .collect()
}

/// Parse and validate a one-dimensional data set from JSON
pub fn samples_from_value(value: &Value) -> Result<Vec<f64>> {
    let data = numeric_sequence(value, "data")?;
    validate_samples(&data)?;
    Ok(data)
}

/// Two equal-length sequences paired by index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairedData {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PairedData {
    /// Pair `x` and `y`, checking lengths and that every value is finite
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::size_mismatch(x.len(), y.len(), "paired data"));
        }
        if x.is_empty() {
            return Err(Error::InvalidData("array of numeric coordinates expected".to_string()));
        }
        if let Some(index) = x.iter().position(|v| !v.is_finite()) {
            return Err(Error::non_numeric("x", index));
        }
        if let Some(index) = y.iter().position(|v| !v.is_finite()) {
            return Err(Error::non_numeric("y", index));
        }
        Ok(Self { x, y })
    }

    /// Parse `{"x": [...], "y": [...]}`; any other key is rejected
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::InvalidData("object with 'x' and 'y' expected".to_string()))?;
        if object.len() != 2 {
            return Err(Error::InvalidData(format!(
                "exactly the keys 'x' and 'y' expected, got {} keys",
                object.len()
            )));
        }
        let x = object
            .get("x")
            .ok_or_else(|| Error::InvalidData("missing 'x' sequence".to_string()))?;
        let y = object
            .get("y")
            .ok_or_else(|| Error::InvalidData("missing 'y' sequence".to_string()))?;
        Self::new(numeric_sequence(x, "x")?, numeric_sequence(y, "y")?)
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate the `(x, y)` pairs in order
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Per-axis `(min, max)`; both exist because the data is non-empty
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let x = utils::min_max(&self.x).unwrap_or((f64::NAN, f64::NAN));
        let y = utils::min_max(&self.y).unwrap_or((f64::NAN, f64::NAN));
        (x, y)
    }

    /// Keep the pairs matching `keep`, preserving order
    ///
    /// The result may be empty, so it is returned as raw sequences rather
    /// than as a validated `PairedData`.
    pub fn filter(&self, mut keep: impl FnMut(f64, f64) -> bool) -> (Vec<f64>, Vec<f64>) {
        self.pairs().filter(|&(x, y)| keep(x, y)).unzip()
    }
}
