//! Positional argument access for the evaluator binaries.
//!
//! Every numeric argument is a decimal WAD string. Arguments are parsed
//! straight to `f64` (values routinely exceed `u64`) and then descaled.

use crate::{Error, Result, WAD};

/// Positional arguments of one invocation, program name excluded.
#[derive(Clone, Debug, Default)]
pub struct Args {
    values: Vec<String>,
}

impl Args {
    pub fn from_env() -> Self {
        Self::new(std::env::args().skip(1))
    }

    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Raw argument at `idx`, empty strings included.
    pub fn raw(&self, idx: usize) -> Option<&str> {
        self.values.get(idx).map(|s| s.as_str())
    }

    /// Descaled argument at `idx`, or `None` if absent. An empty string reads as 0.
    pub fn wad(&self, idx: usize) -> Option<f64> {
        self.raw(idx).map(parse_wad)
    }

    /// Descaled argument, or the literal real `default` when absent or empty.
    /// The default is not descaled.
    pub fn wad_or(&self, idx: usize, default: f64) -> f64 {
        self.raw(idx)
            .filter(|s| !s.is_empty())
            .map(parse_wad)
            .unwrap_or(default)
    }

    /// Descaled argument, or NaN when absent so the failure surfaces in the encoder.
    pub fn wad_or_nan(&self, idx: usize) -> f64 {
        self.wad(idx).unwrap_or(f64::NAN)
    }

    /// Descaled argument that must be present and non-blank.
    pub fn wad_required(&self, idx: usize, name: &'static str) -> Result<f64> {
        self.raw(idx)
            .filter(|s| !s.trim().is_empty())
            .map(parse_wad)
            .ok_or(Error::MissingArgument(name))
    }
}

/// Parse a WAD string into its real value. Unparseable input becomes NaN.
///
/// Accepts decimal integers, decimals and exponent forms (`1e18`), plus
/// `inf`/`NaN`. Hex (`0x10`) is not accepted and reads as NaN. A blank string
/// reads as 0.
pub fn parse_wad(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) => v / WAD,
        Err(e) => {
            log::warn!("[ARGS] '{}' is not a number ({}), using NaN", raw, e);
            f64::NAN
        }
    }
}
