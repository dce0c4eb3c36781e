//! Transient vessel simulation engine.
//!
//! Explicit Euler integration of the gas mass and energy balance in a single
//! control volume, coupled to a lumped wall and an orifice flow element. Each
//! accepted step lands as one row in the result store; on failure the partial
//! store is preserved for inspection.

use crate::config::{FlowMode, InnerFilm, SimConfig};
use crate::error::{SimError, SimResult};
use crate::state::SimulationState;
use bd_core::units::{k, m, pa};
use bd_flow::{OrificeFlow, WallModel, forced_convection_h, mixed_film_h, natural_convection_h};
use bd_fluids::{FluidModel, StateInput, ThermoState};
use bd_results::{ResultStore, RunOutcome, RunSummary, StepSnapshot};

/// Lifecycle of an engine instance. An engine runs exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Initialized,
    Running,
    Completed,
    Failed,
}

/// Simulation engine for one run.
///
/// Owns the validated configuration and the result store; borrows the
/// property backend. After [`run`](Engine::run) returns, the store holds
/// every accepted row regardless of outcome.
pub struct Engine<'a> {
    config: SimConfig,
    fluid: &'a dyn FluidModel,
    status: RunStatus,
    store: ResultStore,
}

impl<'a> Engine<'a> {
    pub fn new(config: SimConfig, fluid: &'a dyn FluidModel) -> Self {
        Self {
            config,
            fluid,
            status: RunStatus::Initialized,
            store: ResultStore::new(),
        }
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Accepted rows so far, including the initial state.
    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// Execute the run to completion or failure.
    ///
    /// Terminates when the vessel pressure meets the back (or fill) pressure
    /// or when the configured end time is reached, whichever comes first.
    pub fn run(&mut self) -> SimResult<RunSummary> {
        if self.status != RunStatus::Initialized {
            return Err(SimError::AlreadyRan);
        }
        self.status = RunStatus::Running;

        match self.run_inner() {
            Ok(summary) => {
                self.status = RunStatus::Completed;
                tracing::info!(
                    rows = summary.rows,
                    final_time_s = summary.final_time_s,
                    final_pressure_pa = summary.final_pressure_pa,
                    "run completed"
                );
                Ok(summary)
            }
            Err(err) => {
                self.status = RunStatus::Failed;
                tracing::warn!(rows = self.store.len(), error = %err, "run failed");
                Err(err)
            }
        }
    }

    fn run_inner(&mut self) -> SimResult<RunSummary> {
        let vessel = self.config.vessel().clone();
        let valve = self.config.valve().clone();
        let ht = self.config.heat_transfer().clone();
        let calc = self.config.calculation().clone();
        let initial = self.config.initial().clone();
        let comp = initial.composition.clone();

        let orifice = OrificeFlow::from_bore(valve.discharge_coefficient, m(valve.bore_diameter_m))
            .map_err(|e| SimError::from_flow(0, e))?;
        let wall = WallModel::new(
            vessel.wall_mass_kg(),
            vessel.material_heat_capacity_j_kg_k,
            vessel.inner_area_m2(),
            vessel.outer_area_m2(),
        )
        .map_err(|e| SimError::from_flow(0, e))?;

        let volume = vessel.inner_volume_m3();
        let dt = calc.time_step_s;
        let p_back = valve.back_pressure_pa;

        // Initial vessel state; the wall starts at the fluid temperature.
        let mut thermo = self
            .fluid
            .state(
                StateInput::PT {
                    p: pa(initial.pressure_pa),
                    t: k(initial.temperature_k),
                },
                &comp,
            )
            .map_err(|e| SimError::from_fluid(0, e))?;
        let mut pack = self
            .fluid
            .property_pack(&thermo)
            .map_err(|e| SimError::from_fluid(0, e))?;

        // Reservoir state for filling: fill pressure, ambient temperature.
        // The inflowing stream carries the reservoir's stagnation enthalpy.
        let reservoir: Option<(ThermoState, f64)> = match valve.mode {
            FlowMode::Filling => {
                let res = self
                    .fluid
                    .state(
                        StateInput::PT {
                            p: pa(p_back),
                            t: k(ht.ambient_temperature_k),
                        },
                        &comp,
                    )
                    .map_err(|e| SimError::from_fluid(0, e))?;
                let h_res = self
                    .fluid
                    .h(&res)
                    .map_err(|e| SimError::from_fluid(0, e))?;
                Some((res, h_res))
            }
            FlowMode::Discharge => None,
        };

        let mut state = SimulationState {
            t_s: 0.0,
            m_kg: pack.rho.value * volume,
            u_j_per_kg: pack.u,
            p_pa: pack.p.value,
            t_fluid_k: pack.t.value,
            t_wall_k: initial.temperature_k,
            mdot_kg_s: 0.0,
        };

        let (mdot0, t_vent0) =
            self.valve_flow(&orifice, valve.mode, &reservoir, &thermo, 0)?;
        state.mdot_kg_s = mdot0;
        self.store.push(snapshot(&state, t_vent0));

        let steps = (calc.end_time_s / dt).ceil() as usize;
        for step in 1..=steps {
            // Inner film coefficient for this step.
            let h_inner = match ht.inner {
                InnerFilm::None => 0.0,
                InnerFilm::Fixed(h) => h,
                InnerFilm::Calculated => {
                    let t_film = 0.5 * (state.t_fluid_k + state.t_wall_k);
                    let film_state = self
                        .fluid
                        .state(
                            StateInput::PT {
                                p: pa(state.p_pa),
                                t: k(t_film),
                            },
                            &comp,
                        )
                        .map_err(|e| SimError::from_fluid(step, e))?;
                    let film_pack = self
                        .fluid
                        .property_pack(&film_state)
                        .map_err(|e| SimError::from_fluid(step, e))?;
                    let h_n = natural_convection_h(
                        &film_pack,
                        vessel.orientation,
                        vessel.characteristic_length_m(),
                        state.t_wall_k - state.t_fluid_k,
                    )
                    .map_err(|e| SimError::from_flow(step, e))?;
                    match valve.mode {
                        // Filling adds the incoming jet's forced contribution.
                        FlowMode::Filling => {
                            let h_f = forced_convection_h(
                                &pack,
                                state.mdot_kg_s,
                                ht.throat_diameter_m,
                            )
                            .map_err(|e| SimError::from_flow(step, e))?;
                            mixed_film_h(h_n, h_f)
                        }
                        FlowMode::Discharge => h_n,
                    }
                }
            };

            // Heat into the fluid from the wall [W].
            let q_fluid = h_inner * wall.area_inner_m2 * (state.t_wall_k - state.t_fluid_k);

            // Mass and energy balance over the step.
            let (new_m, total_u) = match valve.mode {
                FlowMode::Discharge => {
                    let new_m = state.m_kg - state.mdot_kg_s * dt;
                    // Leaving stream carries the bulk enthalpy.
                    let total_u = state.m_kg * state.u_j_per_kg
                        - state.mdot_kg_s * dt * pack.h
                        + q_fluid * dt;
                    (new_m, total_u)
                }
                FlowMode::Filling => {
                    let new_m = state.m_kg + state.mdot_kg_s * dt;
                    let h_res = reservoir
                        .as_ref()
                        .map(|(_, h)| *h)
                        .unwrap_or(pack.h);
                    let total_u = state.m_kg * state.u_j_per_kg
                        + state.mdot_kg_s * dt * h_res
                        + q_fluid * dt;
                    (new_m, total_u)
                }
            };
            if !new_m.is_finite() || new_m <= 0.0 {
                return Err(SimError::NumericalInstability {
                    step,
                    what: format!("gas inventory depleted: m = {new_m} kg"),
                });
            }

            let new_u = total_u / new_m;
            let new_rho = new_m / volume;

            let new_thermo = self
                .fluid
                .state(
                    StateInput::RhoU {
                        rho_kg_m3: new_rho,
                        u: new_u,
                    },
                    &comp,
                )
                .map_err(|e| SimError::from_fluid(step, e))?;
            let new_pack = self
                .fluid
                .property_pack(&new_thermo)
                .map_err(|e| SimError::from_fluid(step, e))?;

            // Explicit wall update from the pre-step temperatures.
            let new_t_wall = state.t_wall_k
                + dt * wall.dtwall_dt(
                    h_inner,
                    ht.h_outer_w_m2_k,
                    state.t_fluid_k,
                    state.t_wall_k,
                    ht.ambient_temperature_k,
                );

            thermo = new_thermo;
            pack = new_pack;
            state.t_s = step as f64 * dt;
            state.m_kg = new_m;
            state.u_j_per_kg = new_u;
            state.p_pa = pack.p.value;
            state.t_fluid_k = pack.t.value;
            state.t_wall_k = new_t_wall;

            let (mdot, t_vent) =
                self.valve_flow(&orifice, valve.mode, &reservoir, &thermo, step)?;
            state.mdot_kg_s = mdot;

            tracing::debug!(
                step,
                t_s = state.t_s,
                p_pa = state.p_pa,
                t_fluid_k = state.t_fluid_k,
                t_wall_k = state.t_wall_k,
                mdot_kg_s = state.mdot_kg_s,
                "step accepted"
            );
            self.store.push(snapshot(&state, t_vent));

            // Pressure-driven termination.
            let done = match valve.mode {
                FlowMode::Discharge => state.p_pa <= p_back,
                FlowMode::Filling => state.p_pa >= p_back,
            };
            if done {
                break;
            }
        }

        Ok(RunSummary {
            outcome: RunOutcome::Completed,
            rows: self.store.len(),
            final_time_s: state.t_s,
            final_pressure_pa: state.p_pa,
        })
    }

    /// Valve flow magnitude and vent temperature at the current state.
    fn valve_flow(
        &self,
        orifice: &OrificeFlow,
        mode: FlowMode,
        reservoir: &Option<(ThermoState, f64)>,
        vessel_state: &ThermoState,
        step: usize,
    ) -> SimResult<(f64, Option<f64>)> {
        match mode {
            FlowMode::Discharge => {
                let p_back = pa(self.config.valve().back_pressure_pa);
                let mdot = orifice
                    .mass_flow(self.fluid, vessel_state, p_back)
                    .map_err(|e| SimError::from_flow(step, e))?;
                let t_vent = orifice
                    .throat_temperature(self.fluid, vessel_state, p_back)
                    .map_err(|e| SimError::from_flow(step, e))?;
                Ok((mdot.value, Some(t_vent.value)))
            }
            FlowMode::Filling => match reservoir {
                Some((res, _)) => {
                    let mdot = orifice
                        .mass_flow(self.fluid, res, vessel_state.pressure())
                        .map_err(|e| SimError::from_flow(step, e))?;
                    Ok((mdot.value, None))
                }
                None => Ok((0.0, None)),
            },
        }
    }
}

fn snapshot(state: &SimulationState, t_vent_k: Option<f64>) -> StepSnapshot {
    StepSnapshot {
        time_s: state.t_s,
        p_pa: state.p_pa,
        t_fluid_k: state.t_fluid_k,
        t_wall_k: state.t_wall_k,
        t_vent_k,
        mdot_kg_s: state.mdot_kg_s,
        m_kg: state.m_kg,
    }
}
