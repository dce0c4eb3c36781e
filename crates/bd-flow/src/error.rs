//! Error types for flow and heat-transfer calculations.

use bd_fluids::FluidError;
use thiserror::Error;

/// Errors that can occur during flow or heat-transfer model evaluation.
#[derive(Error, Debug, Clone)]
pub enum FlowError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type FlowResult<T> = Result<T, FlowError>;

impl From<FluidError> for FlowError {
    fn from(e: FluidError) -> Self {
        FlowError::Backend {
            message: format!("Fluid model error: {}", e),
        }
    }
}
