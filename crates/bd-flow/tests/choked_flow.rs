//! Integration test: choked-flow invariant.
//!
//! Once the downstream/upstream pressure ratio drops below the critical
//! ratio, the mass flow rate must be independent of any further decrease in
//! downstream pressure.

use bd_core::units::{k, m, pa};
use bd_fluids::{Composition, FluidModel, IdealGasModel, Species, StateInput};
use bd_flow::{OrificeFlow, critical_pressure_ratio};

#[test]
fn choked_flow_independent_of_downstream_pressure() {
    let model = IdealGasModel::new();
    let comp = Composition::pure(Species::H2);

    let upstream = model
        .state(
            StateInput::PT {
                p: pa(5_000_000.0), // 50 bar
                t: k(298.15),
            },
            &comp,
        )
        .unwrap();

    let gamma = model.gamma(&upstream).unwrap();
    let pr_crit = critical_pressure_ratio(gamma);
    assert!(pr_crit > 0.4 && pr_crit < 0.6, "pr_crit = {pr_crit}");

    let orifice = OrificeFlow::from_bore(0.84, m(0.0004)).unwrap();

    // Two downstream pressures, both well below the critical ratio
    let p_low_1 = pa(5_000_000.0 * pr_crit * 0.5);
    let p_low_2 = pa(5_000_000.0 * pr_crit * 0.1);

    let mdot_1 = orifice.mass_flow(&model, &upstream, p_low_1).unwrap();
    let mdot_2 = orifice.mass_flow(&model, &upstream, p_low_2).unwrap();

    assert!(mdot_1.value > 0.0);
    assert_eq!(
        mdot_1.value, mdot_2.value,
        "choked flow must not depend on downstream pressure"
    );
}

#[test]
fn choked_flow_scales_with_upstream_pressure() {
    let model = IdealGasModel::new();
    let comp = Composition::pure(Species::N2);
    let orifice = OrificeFlow::from_bore(0.84, m(0.0004)).unwrap();

    let mdot_at = |p_up: f64| {
        let state = model
            .state(
                StateInput::PT {
                    p: pa(p_up),
                    t: k(298.15),
                },
                &comp,
            )
            .unwrap();
        orifice
            .mass_flow(&model, &state, pa(101_325.0))
            .unwrap()
            .value
    };

    // Choked flow through an ideal gas is linear in upstream pressure at
    // fixed temperature (rho ∝ P, mdot ∝ sqrt(rho·P))
    let m1 = mdot_at(2_000_000.0);
    let m2 = mdot_at(4_000_000.0);
    assert!((m2 / m1 - 2.0).abs() < 1e-9, "ratio = {}", m2 / m1);
}
