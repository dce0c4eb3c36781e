//! Fluid property model trait and validation helpers.

use crate::composition::Composition;
use crate::error::{FluidError, FluidResult};
use crate::state::{
    SpecEnthalpy, SpecEntropy, SpecHeatCapacity, SpecInternalEnergy, StateInput, ThermalConductivity,
    ThermoState,
};
use bd_core::units::{Density, DynVisc, Pressure, Temperature, Velocity};

/// Cached thermodynamic properties from a single state.
///
/// This structure batches the property queries the integrator and the heat
/// transfer correlations need from the same state into one backend call,
/// keeping the per-step query path allocation-free.
#[derive(Clone, Debug)]
pub struct ThermoPropertyPack {
    /// Pressure [Pa]
    pub p: Pressure,

    /// Temperature [K]
    pub t: Temperature,

    /// Density [kg/m³]
    pub rho: Density,

    /// Specific enthalpy [J/kg]
    pub h: SpecEnthalpy,

    /// Specific internal energy [J/kg]
    pub u: SpecInternalEnergy,

    /// Specific heat capacity at constant pressure [J/(kg·K)]
    pub cp: SpecHeatCapacity,

    /// Heat capacity ratio γ = cp/cv (dimensionless)
    pub gamma: f64,

    /// Speed of sound [m/s]
    pub a: Velocity,

    /// Dynamic viscosity [Pa·s]
    pub mu: DynVisc,

    /// Thermal conductivity [W/(m·K)]
    pub k_thermal: ThermalConductivity,
}

impl ThermoPropertyPack {
    /// Prandtl number Pr = cp·μ/k (dimensionless).
    pub fn prandtl(&self) -> f64 {
        self.cp * self.mu.value / self.k_thermal
    }
}

/// Trait for fluid property models.
///
/// This is the engine's entire contract against the thermodynamic backend:
/// pure, reentrant property queries keyed by a validated state, plus the
/// inverse (density, internal energy) → (P, T) solve the integrator needs.
/// A state the backend cannot resolve is reported as
/// [`FluidError::OutOfDomain`], which the simulation loop treats as fatal
/// for the current run.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait FluidModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Check if this model supports the given composition.
    fn supports_composition(&self, comp: &Composition) -> bool;

    /// Create a thermodynamic state from input specification.
    ///
    /// For PT input: validates and creates state directly.
    /// For RhoU input: solves for (P, T), then creates state.
    ///
    /// The composition is borrowed; the returned state keeps a cheap
    /// reference-counted copy, so the per-step query path does not allocate.
    fn state(&self, input: StateInput, comp: &Composition) -> FluidResult<ThermoState>;

    /// Compute density [kg/m³] at the given state.
    fn rho(&self, state: &ThermoState) -> FluidResult<Density>;

    /// Compute specific enthalpy [J/kg] at the given state.
    fn h(&self, state: &ThermoState) -> FluidResult<SpecEnthalpy>;

    /// Compute specific internal energy [J/kg] at the given state.
    fn u(&self, state: &ThermoState) -> FluidResult<SpecInternalEnergy>;

    /// Compute specific entropy [J/(kg·K)] at the given state.
    fn s(&self, state: &ThermoState) -> FluidResult<SpecEntropy>;

    /// Compute specific heat capacity at constant pressure [J/(kg·K)] at the given state.
    fn cp(&self, state: &ThermoState) -> FluidResult<SpecHeatCapacity>;

    /// Compute specific heat capacity at constant volume [J/(kg·K)] at the given state.
    fn cv(&self, state: &ThermoState) -> FluidResult<SpecHeatCapacity> {
        let cp = self.cp(state)?;
        let gamma = self.gamma(state)?;
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "gamma must be positive and finite",
            });
        }
        let cv = cp / gamma;
        validation::validate_cp(cv)?;
        Ok(cv)
    }

    /// Compute heat capacity ratio γ = cp/cv (dimensionless) at the given state.
    fn gamma(&self, state: &ThermoState) -> FluidResult<f64>;

    /// Compute speed of sound [m/s] at the given state.
    fn a(&self, state: &ThermoState) -> FluidResult<Velocity>;

    /// Compute dynamic viscosity [Pa·s] at the given state.
    fn mu(&self, state: &ThermoState) -> FluidResult<DynVisc>;

    /// Compute thermal conductivity [W/(m·K)] at the given state.
    fn k_thermal(&self, state: &ThermoState) -> FluidResult<ThermalConductivity>;

    /// Compute a complete property pack in one call.
    ///
    /// Default implementation calls individual property methods; efficient
    /// backends may override to compute all properties together.
    fn property_pack(&self, state: &ThermoState) -> FluidResult<ThermoPropertyPack> {
        Ok(ThermoPropertyPack {
            p: state.pressure(),
            t: state.temperature(),
            rho: self.rho(state)?,
            h: self.h(state)?,
            u: self.u(state)?,
            cp: self.cp(state)?,
            gamma: self.gamma(state)?,
            a: self.a(state)?,
            mu: self.mu(state)?,
            k_thermal: self.k_thermal(state)?,
        })
    }
}

/// Validation helpers for fluid properties.
pub(crate) mod validation {
    use super::*;

    /// Ensure density is positive and finite.
    pub fn validate_density(rho: f64) -> FluidResult<()> {
        if !rho.is_finite() || rho <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure specific heat capacity is positive and finite.
    pub fn validate_cp(cp: f64) -> FluidResult<()> {
        if !cp.is_finite() || cp <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "cp must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure gamma (heat capacity ratio) is physically plausible.
    pub fn validate_gamma(gamma: f64) -> FluidResult<()> {
        if !gamma.is_finite() || gamma < 1.0 {
            return Err(FluidError::NonPhysical {
                what: "gamma must be >= 1 and finite",
            });
        }
        Ok(())
    }

    /// Ensure internal energy is finite (can be negative).
    pub fn validate_energy(u: f64) -> FluidResult<()> {
        if !u.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "internal energy must be finite",
            });
        }
        Ok(())
    }
}
