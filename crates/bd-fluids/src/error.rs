//! Fluid property errors.

use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// State outside the backend's valid correlation domain.
    #[error("State outside valid domain: {what}")]
    OutOfDomain { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Operation not supported (e.g., unsupported species).
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },

    /// Could not parse a fluid identifier string.
    #[error("Unparseable fluid identifier: {message}")]
    Parse { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::NonPhysical { what: "pressure" };
        assert!(err.to_string().contains("pressure"));

        let err = FluidError::OutOfDomain {
            what: "temperature above envelope",
        };
        assert!(err.to_string().contains("valid domain"));
    }
}
