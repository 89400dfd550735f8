//! Core types shared by the freqhist crates
//!
//! This crate holds the pieces every other crate in the workspace depends on:
//! the unified [`Error`] type with its [`Result`] alias, and a handful of
//! slice utilities (NaN-aware sorting, one-pass min/max, interpolated
//! quantiles on sorted data).
//!
//! # Example
//!
//! ```rust
//! use freqhist_core::{utils, Error, Result};
//!
//! fn spread(data: &[f64]) -> Result<f64> {
//!     let (lo, hi) = utils::min_max(data).ok_or_else(|| Error::empty_input("spread"))?;
//!     Ok(hi - lo)
//! }
//!
//! assert_eq!(spread(&[3.0, 9.0, 4.0]).unwrap(), 6.0);
//! assert!(spread(&[]).is_err());
//! ```

pub mod error;
pub mod utils;

pub use error::{Error, Result};
