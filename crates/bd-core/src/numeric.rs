//! Float comparison and validation helpers.

use thiserror::Error;

/// A value that must be finite was NaN or infinite.
#[derive(Debug, Error)]
#[error("non-finite value for {what}: {value}")]
pub struct NonFiniteError {
    pub what: &'static str,
    pub value: f64,
}

/// Absolute/relative tolerance pair for float comparisons.
///
/// The absolute bound covers comparisons near zero (mole fractions, pressure
/// differences); the relative bound covers everything else.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within the absolute or the relative bound.
pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Reject NaN and infinities before they propagate into the balances.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, NonFiniteError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(NonFiniteError { what, value: v })
    }
}
