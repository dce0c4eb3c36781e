//! Mutable per-run state advanced by the engine.

/// Current integration state of a run.
///
/// Updated in place by the engine each step; snapshots of it land in the
/// result store.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Elapsed simulation time [s].
    pub t_s: f64,
    /// Gas inventory in the vessel [kg].
    pub m_kg: f64,
    /// Specific internal energy of the gas [J/kg].
    pub u_j_per_kg: f64,
    /// Vessel pressure [Pa].
    pub p_pa: f64,
    /// Bulk fluid temperature [K].
    pub t_fluid_k: f64,
    /// Lumped wall temperature [K].
    pub t_wall_k: f64,
    /// Instantaneous valve mass flow magnitude [kg/s].
    pub mdot_kg_s: f64,
}
