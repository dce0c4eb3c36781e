//! Result data types.

use serde::{Deserialize, Serialize};

/// One accepted time step of the simulation, in SI units.
///
/// Any bar/°C conversion for display is the consumer's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSnapshot {
    pub time_s: f64,
    pub p_pa: f64,
    pub t_fluid_k: f64,
    pub t_wall_k: f64,
    /// Throat temperature during discharge; absent for filling runs.
    pub t_vent_k: Option<f64>,
    pub mdot_kg_s: f64,
    pub m_kg: f64,
}

/// Outcome of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// End time reached or target pressure met.
    Completed,
    /// Fatal error; the partial store is preserved for inspection.
    Failed,
}

/// Post-run summary for reporting collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    /// Number of accepted rows, including the initial state.
    pub rows: usize,
    pub final_time_s: f64,
    pub final_pressure_pa: f64,
}
