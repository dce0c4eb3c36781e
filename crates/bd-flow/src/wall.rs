//! Lumped-capacitance vessel wall model.
//!
//! Uniform wall temperature (Type I thin-wall assumption, no radial
//! gradient): M_wall·Cp_wall·dT_wall/dt = Q_in − Q_out.

use crate::common::check_positive;
use crate::error::FlowResult;

/// Lumped-capacitance wall energy balance.
#[derive(Debug, Clone)]
pub struct WallModel {
    /// Wall mass [kg], from vessel geometry and material density.
    pub mass_kg: f64,
    /// Wall material heat capacity [J/(kg·K)].
    pub cp_j_per_kg_k: f64,
    /// Inner (fluid-facing) surface area [m²].
    pub area_inner_m2: f64,
    /// Outer (ambient-facing) surface area [m²].
    pub area_outer_m2: f64,
}

impl WallModel {
    pub fn new(
        mass_kg: f64,
        cp_j_per_kg_k: f64,
        area_inner_m2: f64,
        area_outer_m2: f64,
    ) -> FlowResult<Self> {
        check_positive(mass_kg, "wall mass must be positive")?;
        check_positive(cp_j_per_kg_k, "wall heat capacity must be positive")?;
        check_positive(area_inner_m2, "inner area must be positive")?;
        check_positive(area_outer_m2, "outer area must be positive")?;
        Ok(Self {
            mass_kg,
            cp_j_per_kg_k,
            area_inner_m2,
            area_outer_m2,
        })
    }

    /// Heat rate from fluid into wall [W]: h_in·A_in·(T_fluid − T_wall).
    pub fn q_inner(&self, h_inner: f64, t_fluid_k: f64, t_wall_k: f64) -> f64 {
        h_inner * self.area_inner_m2 * (t_fluid_k - t_wall_k)
    }

    /// Heat rate from wall to ambient [W]: h_out·A_out·(T_wall − T_amb).
    pub fn q_outer(&self, h_outer: f64, t_wall_k: f64, t_ambient_k: f64) -> f64 {
        h_outer * self.area_outer_m2 * (t_wall_k - t_ambient_k)
    }

    /// Wall temperature rate [K/s] from the inner and outer exchange terms.
    pub fn dtwall_dt(
        &self,
        h_inner: f64,
        h_outer: f64,
        t_fluid_k: f64,
        t_wall_k: f64,
        t_ambient_k: f64,
    ) -> f64 {
        let q_in = self.q_inner(h_inner, t_fluid_k, t_wall_k);
        let q_out = self.q_outer(h_outer, t_wall_k, t_ambient_k);
        (q_in - q_out) / (self.mass_kg * self.cp_j_per_kg_k)
    }
}
