//! Ideal-gas reference backend.
//!
//! A deterministic property provider used as the engine's reference backend
//! and in tests. It implements the full [`FluidModel`] contract from tabulated
//! per-species data with simple mixing rules:
//!
//! - constant cp per species near 300 K, mass-fraction weighted for mixtures
//! - ideal gas law for density and the (ρ, u) → (P, T) inverse solve
//! - power-law temperature scaling for viscosity and conductivity
//!
//! It is NOT a real-gas model. A production deployment plugs a real-gas
//! backend in behind the same trait; the engine does not care which one it
//! talks to. The model enforces an explicit validity envelope and reports
//! states outside it as [`FluidError::OutOfDomain`].

use crate::composition::Composition;
use crate::error::{FluidError, FluidResult};
use crate::model::{FluidModel, validation};
use crate::state::{
    SpecEnthalpy, SpecEntropy, SpecHeatCapacity, SpecInternalEnergy, StateInput, ThermalConductivity,
    ThermoState,
};
use bd_core::units::constants::R_UNIVERSAL;
use bd_core::units::{Density, DynVisc, Velocity, k, pa};
use uom::si::dynamic_viscosity::pascal_second;
use uom::si::mass_density::kilogram_per_cubic_meter;
use uom::si::velocity::meter_per_second;

/// Reference temperature for the tabulated transport properties [K].
const T_REF: f64 = 300.0;

/// Reference pressure for the entropy datum [Pa].
const P_REF: f64 = 101_325.0;

/// Exponent for the power-law transport temperature scaling.
const TRANSPORT_EXPONENT: f64 = 0.7;

/// Ideal-gas property model with an explicit validity envelope.
#[derive(Debug, Clone)]
pub struct IdealGasModel {
    /// Lowest temperature the model will resolve [K].
    pub t_min_k: f64,
    /// Highest temperature the model will resolve [K].
    pub t_max_k: f64,
    /// Highest pressure the model will resolve [Pa].
    pub p_max_pa: f64,
}

impl Default for IdealGasModel {
    fn default() -> Self {
        Self {
            t_min_k: 20.0,
            t_max_k: 2_000.0,
            p_max_pa: 1e9,
        }
    }
}

impl IdealGasModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Specific gas constant R/M [J/(kg·K)] for a composition.
    fn r_specific(comp: &Composition) -> f64 {
        R_UNIVERSAL / comp.molar_mass()
    }

    /// Mass-fraction-weighted cp [J/(kg·K)].
    fn cp_mix(comp: &Composition) -> f64 {
        comp.mass_fractions()
            .map(|(sp, w)| w * sp.cp_300k())
            .sum()
    }

    fn check_envelope(&self, p_pa: f64, t_k: f64) -> FluidResult<()> {
        if !p_pa.is_finite() || p_pa <= 0.0 || p_pa > self.p_max_pa {
            return Err(FluidError::OutOfDomain {
                what: "pressure outside model envelope",
            });
        }
        if !t_k.is_finite() || t_k < self.t_min_k || t_k > self.t_max_k {
            return Err(FluidError::OutOfDomain {
                what: "temperature outside model envelope",
            });
        }
        Ok(())
    }
}

impl FluidModel for IdealGasModel {
    fn name(&self) -> &str {
        "ideal-gas"
    }

    fn supports_composition(&self, _comp: &Composition) -> bool {
        true
    }

    fn state(&self, input: StateInput, comp: &Composition) -> FluidResult<ThermoState> {
        match input {
            StateInput::PT { p, t } => {
                self.check_envelope(p.value, t.value)?;
                ThermoState::from_pt(p, t, comp.clone())
            }
            StateInput::RhoU { rho_kg_m3, u } => {
                validation::validate_density(rho_kg_m3)?;
                validation::validate_energy(u)?;

                let r = Self::r_specific(comp);
                let cv = Self::cp_mix(comp) - r;
                // Closed-form inverse: u = cv·T, P = ρ·R·T
                let t_k = u / cv;
                let p_pa = rho_kg_m3 * r * t_k;
                self.check_envelope(p_pa, t_k)?;
                ThermoState::from_pt(pa(p_pa), k(t_k), comp.clone())
            }
        }
    }

    fn rho(&self, state: &ThermoState) -> FluidResult<Density> {
        let r = Self::r_specific(state.composition());
        let rho = state.pressure().value / (r * state.temperature().value);
        validation::validate_density(rho)?;
        Ok(Density::new::<kilogram_per_cubic_meter>(rho))
    }

    fn h(&self, state: &ThermoState) -> FluidResult<SpecEnthalpy> {
        // Absolute-zero enthalpy datum; only differences enter the balances.
        Ok(Self::cp_mix(state.composition()) * state.temperature().value)
    }

    fn u(&self, state: &ThermoState) -> FluidResult<SpecInternalEnergy> {
        let cv = self.cv(state)?;
        Ok(cv * state.temperature().value)
    }

    fn s(&self, state: &ThermoState) -> FluidResult<SpecEntropy> {
        let cp = Self::cp_mix(state.composition());
        let r = Self::r_specific(state.composition());
        let t = state.temperature().value;
        let p = state.pressure().value;
        Ok(cp * (t / T_REF).ln() - r * (p / P_REF).ln())
    }

    fn cp(&self, state: &ThermoState) -> FluidResult<SpecHeatCapacity> {
        let cp = Self::cp_mix(state.composition());
        validation::validate_cp(cp)?;
        Ok(cp)
    }

    fn gamma(&self, state: &ThermoState) -> FluidResult<f64> {
        let cp = Self::cp_mix(state.composition());
        let r = Self::r_specific(state.composition());
        let cv = cp - r;
        if cv <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "cv must be positive",
            });
        }
        let gamma = cp / cv;
        validation::validate_gamma(gamma)?;
        Ok(gamma)
    }

    fn a(&self, state: &ThermoState) -> FluidResult<Velocity> {
        let gamma = self.gamma(state)?;
        let r = Self::r_specific(state.composition());
        let a = (gamma * r * state.temperature().value).sqrt();
        if !a.is_finite() || a <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "speed of sound must be positive and finite",
            });
        }
        Ok(Velocity::new::<meter_per_second>(a))
    }

    fn mu(&self, state: &ThermoState) -> FluidResult<DynVisc> {
        let scale = (state.temperature().value / T_REF).powf(TRANSPORT_EXPONENT);
        let mu: f64 = state
            .composition()
            .iter()
            .map(|(sp, x)| x * sp.mu_300k())
            .sum::<f64>()
            * scale;
        if !mu.is_finite() || mu <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "viscosity must be positive and finite",
            });
        }
        Ok(DynVisc::new::<pascal_second>(mu))
    }

    fn k_thermal(&self, state: &ThermoState) -> FluidResult<ThermalConductivity> {
        let scale = (state.temperature().value / T_REF).powf(TRANSPORT_EXPONENT);
        let kt: f64 = state
            .composition()
            .iter()
            .map(|(sp, x)| x * sp.k_thermal_300k())
            .sum::<f64>()
            * scale;
        if !kt.is_finite() || kt <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "thermal conductivity must be positive and finite",
            });
        }
        Ok(kt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::Species;
    use bd_core::units::{k, pa};

    fn n2() -> Composition {
        Composition::pure(Species::N2)
    }

    #[test]
    fn density_matches_gas_law() {
        let model = IdealGasModel::new();
        let state = model
            .state(
                StateInput::PT {
                    p: pa(101_325.0),
                    t: k(300.0),
                },
                &n2(),
            )
            .unwrap();

        let rho = model.rho(&state).unwrap().value;
        // N2 at 1 atm, 300 K: about 1.138 kg/m³
        assert!((rho - 1.138).abs() < 0.01, "rho = {rho}");
    }

    #[test]
    fn rho_u_inverse_round_trips() {
        let model = IdealGasModel::new();
        let state = model
            .state(
                StateInput::PT {
                    p: pa(5_000_000.0),
                    t: k(298.15),
                },
                &n2(),
            )
            .unwrap();

        let rho = model.rho(&state).unwrap().value;
        let u = model.u(&state).unwrap();

        let recovered = model
            .state(StateInput::RhoU { rho_kg_m3: rho, u }, &n2())
            .unwrap();

        assert!((recovered.pressure().value - 5_000_000.0).abs() < 1e-3);
        assert!((recovered.temperature().value - 298.15).abs() < 1e-9);
    }

    #[test]
    fn gamma_reasonable_for_diatomic() {
        let model = IdealGasModel::new();
        let state = model
            .state(
                StateInput::PT {
                    p: pa(101_325.0),
                    t: k(300.0),
                },
                &n2(),
            )
            .unwrap();

        let gamma = model.gamma(&state).unwrap();
        assert!((gamma - 1.4).abs() < 0.02, "gamma = {gamma}");
    }

    #[test]
    fn speed_of_sound_reasonable_for_air() {
        let model = IdealGasModel::new();
        let state = model
            .state(
                StateInput::PT {
                    p: pa(101_325.0),
                    t: k(300.0),
                },
                &Composition::pure(Species::Air),
            )
            .unwrap();

        let a = model.a(&state).unwrap().value;
        assert!((a - 347.0).abs() < 5.0, "a = {a}");
    }

    #[test]
    fn out_of_envelope_is_domain_error() {
        let model = IdealGasModel::new();

        let too_cold = model.state(
            StateInput::PT {
                p: pa(101_325.0),
                t: k(5.0),
            },
            &n2(),
        );
        assert!(matches!(too_cold, Err(FluidError::OutOfDomain { .. })));

        let too_high = model.state(
            StateInput::PT {
                p: pa(1e10),
                t: k(300.0),
            },
            &n2(),
        );
        assert!(matches!(too_high, Err(FluidError::OutOfDomain { .. })));
    }

    #[test]
    fn prandtl_near_gas_values() {
        let model = IdealGasModel::new();
        let state = model
            .state(
                StateInput::PT {
                    p: pa(101_325.0),
                    t: k(300.0),
                },
                &Composition::pure(Species::Air),
            )
            .unwrap();

        let pack = model.property_pack(&state).unwrap();
        let pr = pack.prandtl();
        assert!(pr > 0.5 && pr < 1.0, "Pr = {pr}");
    }

    #[test]
    fn mixture_properties_between_components() {
        let model = IdealGasModel::new();
        let mix =
            Composition::new_mole_fractions(vec![(Species::CH4, 0.9), (Species::Ethane, 0.1)])
                .unwrap();

        let state = model
            .state(
                StateInput::PT {
                    p: pa(101_325.0),
                    t: k(300.0),
                },
                &mix,
            )
            .unwrap();

        let cp = model.cp(&state).unwrap();
        assert!(cp < Species::CH4.cp_300k());
        assert!(cp > Species::Ethane.cp_300k());
    }
}
