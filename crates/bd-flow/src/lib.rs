//! bd-flow: flow and heat-transfer models for the blowdown engine.
//!
//! Provides:
//! - Orifice flow with subsonic and choked regimes plus the throat (vent)
//!   temperature estimate
//! - Convective film coefficient correlations (natural, forced, mixed)
//! - Lumped-capacitance vessel wall model
//!
//! All models are deterministic functions of state and parameters; fluid
//! properties come in through the `bd_fluids::FluidModel` contract.

pub mod common;
pub mod error;
pub mod film;
pub mod orifice;
pub mod wall;

// Re-exports
pub use error::{FlowError, FlowResult};
pub use film::{Orientation, forced_convection_h, mixed_film_h, natural_convection_h};
pub use orifice::{OrificeFlow, critical_pressure_ratio};
pub use wall::WallModel;
