//! Error types for configuration and simulation runs.

use bd_flow::FlowError;
use bd_fluids::FluidError;
use thiserror::Error;

/// Rejections raised during [`SimConfig::new`](crate::SimConfig::new).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("non-positive geometry: {what}")]
    NonPositiveGeometry { what: &'static str },

    #[error("non-positive value: {what}")]
    NonPositiveValue { what: &'static str },

    #[error("discharge coefficient must be in (0, 1], got {value}")]
    DischargeCoefficient { value: f64 },

    #[error("inconsistent pressures: {what}")]
    PressureOrdering { what: &'static str },
}

/// Failures raised during a simulation run.
///
/// Every variant carries the step index at which the run stopped; the rows
/// accumulated up to that step remain available in the result store.
#[derive(Debug, Error)]
pub enum SimError {
    /// The property backend could not evaluate the requested state.
    #[error("property evaluation failed at step {step}: {message}")]
    ThermoDomain { step: usize, message: String },

    /// The integration produced a non-physical state.
    #[error("numerical instability at step {step}: {what}")]
    NumericalInstability { step: usize, what: String },

    /// An engine instance runs exactly once.
    #[error("engine has already run")]
    AlreadyRan,
}

impl SimError {
    pub(crate) fn from_fluid(step: usize, err: FluidError) -> Self {
        match err {
            FluidError::OutOfDomain { .. } => SimError::ThermoDomain {
                step,
                message: err.to_string(),
            },
            other => SimError::NumericalInstability {
                step,
                what: other.to_string(),
            },
        }
    }

    pub(crate) fn from_flow(step: usize, err: FlowError) -> Self {
        match err {
            FlowError::Backend { .. } => SimError::ThermoDomain {
                step,
                message: err.to_string(),
            },
            other => SimError::NumericalInstability {
                step,
                what: other.to_string(),
            },
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
