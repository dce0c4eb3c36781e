//! bd-sim: transient vessel blowdown and filling simulation.
//!
//! Ties the workspace together: a validated configuration, an explicit-Euler
//! engine integrating the single-control-volume mass and energy balance, the
//! orifice and wall models from `bd-flow`, and property lookups through the
//! `bd_fluids::FluidModel` contract. Results accumulate in a
//! `bd_results::ResultStore`, one row per accepted step.

pub mod config;
pub mod engine;
pub mod error;
pub mod state;

// Re-exports
pub use config::{
    CalculationConfig, FlowMode, HeatTransferConfig, InitialState, InnerFilm, SimConfig,
    ValveConfig, ValveKind, Vessel,
};
pub use engine::{Engine, RunStatus};
pub use error::{ConfigError, SimError, SimResult};
pub use state::SimulationState;
