//! End-to-end discharge runs against the ideal-gas reference backend.
//!
//! Scenario: 0.463 m × 0.254 m horizontal steel vessel, nitrogen at 50 bar
//! and 298.15 K venting to atmosphere through a 0.4 mm orifice (Cd 0.84).

use bd_flow::Orientation;
use bd_fluids::{Composition, IdealGasModel, Species};
use bd_results::RunOutcome;
use bd_sim::{
    CalculationConfig, Engine, FlowMode, HeatTransferConfig, InitialState, InnerFilm, RunStatus,
    SimConfig, SimError, ValveConfig, ValveKind, Vessel,
};

fn vessel() -> Vessel {
    Vessel {
        length_m: 0.463,
        diameter_m: 0.254,
        thickness_m: 0.016,
        material_density_kg_m3: 7740.0,
        material_heat_capacity_j_kg_k: 470.0,
        orientation: Orientation::Horizontal,
    }
}

fn discharge_config() -> SimConfig {
    SimConfig::new(
        vessel(),
        InitialState {
            pressure_pa: 50e5,
            temperature_k: 298.15,
            composition: Composition::pure(Species::N2),
        },
        ValveConfig {
            mode: FlowMode::Discharge,
            kind: ValveKind::Orifice,
            bore_diameter_m: 0.0004,
            discharge_coefficient: 0.84,
            back_pressure_pa: 101_325.0,
        },
        HeatTransferConfig {
            inner: InnerFilm::Calculated,
            ambient_temperature_k: 298.0,
            h_outer_w_m2_k: 5.0,
            throat_diameter_m: 0.254,
        },
        CalculationConfig {
            time_step_s: 1.0,
            end_time_s: 240.0,
        },
    )
    .unwrap()
}

#[test]
fn discharge_runs_to_end_time() {
    let model = IdealGasModel::new();
    let mut engine = Engine::new(discharge_config(), &model);

    let summary = engine.run().unwrap();

    // 0.4 mm orifice on a 23 L vessel: pressure stays well above atmospheric
    // over 240 s, so the run terminates on end time, not back pressure.
    assert_eq!(summary.outcome, RunOutcome::Completed);
    assert_eq!(summary.rows, 241);
    assert_eq!(summary.final_time_s, 240.0);
    assert!(summary.final_pressure_pa > 101_325.0);
    assert!(summary.final_pressure_pa < 50e5);
    assert_eq!(engine.status(), RunStatus::Completed);
}

#[test]
fn pressure_is_monotone_non_increasing() {
    let model = IdealGasModel::new();
    let mut engine = Engine::new(discharge_config(), &model);
    engine.run().unwrap();

    let pressures = engine.store().pressures();
    for pair in pressures.windows(2) {
        assert!(pair[1] <= pair[0], "pressure rose: {} -> {}", pair[0], pair[1]);
    }
}

#[test]
fn mass_balance_closes() {
    let model = IdealGasModel::new();
    let mut engine = Engine::new(discharge_config(), &model);
    engine.run().unwrap();

    let rows = engine.store().rows();
    let dt = 1.0;
    let released: f64 = rows[..rows.len() - 1].iter().map(|r| r.mdot_kg_s * dt).sum();
    let inventory_drop = rows[0].m_kg - rows[rows.len() - 1].m_kg;

    let rel = (released - inventory_drop).abs() / inventory_drop;
    assert!(rel < 1e-9, "mass balance residual {rel}");
}

#[test]
fn fluid_cools_and_vent_is_colder_still() {
    let model = IdealGasModel::new();
    let mut engine = Engine::new(discharge_config(), &model);
    engine.run().unwrap();

    let rows = engine.store().rows();
    let last = rows.last().unwrap();

    // Expansion cools the bulk below the initial temperature.
    assert!(last.t_fluid_k < 298.15);

    // Every row reports a vent temperature below the bulk temperature.
    for row in rows {
        let t_vent = row.t_vent_k.unwrap();
        assert!(t_vent < row.t_fluid_k, "vent {} >= bulk {}", t_vent, row.t_fluid_k);
    }
}

#[test]
fn wall_tracks_between_fluid_and_ambient() {
    let model = IdealGasModel::new();
    let mut engine = Engine::new(discharge_config(), &model);
    engine.run().unwrap();

    let rows = engine.store().rows();
    let last = rows.last().unwrap();

    // The cold gas pulls the wall down, but never below the gas itself.
    assert!(last.t_wall_k < rows[0].t_wall_k);
    assert!(last.t_wall_k > last.t_fluid_k);
    assert!(last.t_wall_k <= 298.15);
}

#[test]
fn replay_is_deterministic() {
    let model = IdealGasModel::new();

    let mut first = Engine::new(discharge_config(), &model);
    first.run().unwrap();
    let mut second = Engine::new(discharge_config(), &model);
    second.run().unwrap();

    assert_eq!(first.store().rows(), second.store().rows());
}

#[test]
fn engine_runs_exactly_once() {
    let model = IdealGasModel::new();
    let mut engine = Engine::new(discharge_config(), &model);
    engine.run().unwrap();

    let err = engine.run().unwrap_err();
    assert!(matches!(err, SimError::AlreadyRan));
}

#[test]
fn failure_preserves_partial_results() {
    // A 50 mm orifice on a tiny vessel drains more than the whole inventory
    // in a single 1 s step, which the engine rejects as instability.
    let model = IdealGasModel::new();
    let config = SimConfig::new(
        Vessel {
            length_m: 0.1,
            diameter_m: 0.1,
            thickness_m: 0.005,
            material_density_kg_m3: 7740.0,
            material_heat_capacity_j_kg_k: 470.0,
            orientation: Orientation::Horizontal,
        },
        InitialState {
            pressure_pa: 50e5,
            temperature_k: 298.15,
            composition: Composition::pure(Species::N2),
        },
        ValveConfig {
            mode: FlowMode::Discharge,
            kind: ValveKind::Orifice,
            bore_diameter_m: 0.05,
            discharge_coefficient: 0.84,
            back_pressure_pa: 101_325.0,
        },
        HeatTransferConfig {
            inner: InnerFilm::None,
            ambient_temperature_k: 298.0,
            h_outer_w_m2_k: 5.0,
            throat_diameter_m: 0.1,
        },
        CalculationConfig {
            time_step_s: 1.0,
            end_time_s: 60.0,
        },
    )
    .unwrap();

    let mut engine = Engine::new(config, &model);
    let err = engine.run().unwrap_err();

    assert!(matches!(err, SimError::NumericalInstability { step: 1, .. }));
    assert_eq!(engine.status(), RunStatus::Failed);
    // Row 0 (the initial state) survives the failure.
    assert_eq!(engine.store().len(), 1);
    assert_eq!(engine.store().rows()[0].time_s, 0.0);
}

#[test]
fn fixed_inner_film_is_accepted() {
    let model = IdealGasModel::new();
    let config = SimConfig::new(
        vessel(),
        InitialState {
            pressure_pa: 50e5,
            temperature_k: 298.15,
            composition: Composition::pure(Species::N2),
        },
        ValveConfig {
            mode: FlowMode::Discharge,
            kind: ValveKind::Orifice,
            bore_diameter_m: 0.0004,
            discharge_coefficient: 0.84,
            back_pressure_pa: 101_325.0,
        },
        HeatTransferConfig {
            inner: InnerFilm::Fixed(50.0),
            ambient_temperature_k: 298.0,
            h_outer_w_m2_k: 5.0,
            throat_diameter_m: 0.254,
        },
        CalculationConfig {
            time_step_s: 1.0,
            end_time_s: 60.0,
        },
    )
    .unwrap();

    let mut engine = Engine::new(config, &model);
    let summary = engine.run().unwrap();
    assert_eq!(summary.outcome, RunOutcome::Completed);
    assert_eq!(summary.rows, 61);
}
