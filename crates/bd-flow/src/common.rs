//! Common utilities for flow calculations.

use crate::error::{FlowError, FlowResult};
use bd_core::numeric::ensure_finite;

/// Small epsilon for pressure differences (Pa)
pub const EPSILON_PRESSURE: f64 = 1e-3;

/// Small epsilon for mass flow rate (kg/s)
pub const EPSILON_MDOT: f64 = 1e-12;

/// Ensure a value is finite, returning FlowError if not.
pub fn check_finite(value: f64, what: &'static str) -> FlowResult<()> {
    ensure_finite(value, what).map_err(|_| FlowError::NonPhysical { what })?;
    Ok(())
}

/// Ensure a value is positive and finite.
pub fn check_positive(value: f64, what: &'static str) -> FlowResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FlowError::InvalidArg { what });
    }
    Ok(())
}
