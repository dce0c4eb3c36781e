//! bd-core: shared foundation for the blowdown workspace.
//!
//! Units (uom SI aliases plus constructors) and numeric helpers used by the
//! fluid, flow, and simulation crates.

pub mod numeric;
pub mod units;

pub use numeric::{NonFiniteError, Tolerances, ensure_finite, nearly_equal};
pub use units::*;
