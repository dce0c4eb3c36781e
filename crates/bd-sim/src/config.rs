//! Validated, immutable simulation configuration.
//!
//! All values are already unit-normalized (Pa, K, m, s, kg, J/(kg·K)) before
//! they reach this layer; bar/°C/mm conversion is the configuration
//! collaborator's job. Every rejection class has its own error variant and is
//! surfaced at construction, never silently defaulted.

use crate::error::ConfigError;
use bd_flow::Orientation;
use bd_fluids::Composition;

fn require_positive(value: f64, what: &'static str) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::NonPositiveValue { what });
    }
    Ok(())
}

/// Vessel geometry and wall material.
///
/// The vessel is a cylinder with flat heads; `diameter_m` and `length_m` are
/// inside dimensions.
#[derive(Debug, Clone)]
pub struct Vessel {
    pub length_m: f64,
    pub diameter_m: f64,
    pub thickness_m: f64,
    pub material_density_kg_m3: f64,
    pub material_heat_capacity_j_kg_k: f64,
    pub orientation: Orientation,
}

impl Vessel {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (value, what) in [
            (self.length_m, "vessel length"),
            (self.diameter_m, "vessel diameter"),
            (self.thickness_m, "vessel wall thickness"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveGeometry { what });
            }
        }
        require_positive(self.material_density_kg_m3, "vessel material density")?;
        require_positive(
            self.material_heat_capacity_j_kg_k,
            "vessel material heat capacity",
        )?;
        Ok(())
    }

    /// Inner fluid volume [m³].
    pub fn inner_volume_m3(&self) -> f64 {
        std::f64::consts::FRAC_PI_4 * self.diameter_m * self.diameter_m * self.length_m
    }

    /// Inner (fluid-facing) surface area, shell plus two heads [m²].
    pub fn inner_area_m2(&self) -> f64 {
        std::f64::consts::PI * self.diameter_m * self.length_m
            + 2.0 * std::f64::consts::FRAC_PI_4 * self.diameter_m * self.diameter_m
    }

    /// Outer (ambient-facing) surface area [m²].
    pub fn outer_area_m2(&self) -> f64 {
        let d_out = self.diameter_m + 2.0 * self.thickness_m;
        let l_out = self.length_m + 2.0 * self.thickness_m;
        std::f64::consts::PI * d_out * l_out
            + 2.0 * std::f64::consts::FRAC_PI_4 * d_out * d_out
    }

    /// Wall mass from geometry and material density [kg].
    pub fn wall_mass_kg(&self) -> f64 {
        let d_out = self.diameter_m + 2.0 * self.thickness_m;
        let l_out = self.length_m + 2.0 * self.thickness_m;
        let v_out = std::f64::consts::FRAC_PI_4 * d_out * d_out * l_out;
        self.material_density_kg_m3 * (v_out - self.inner_volume_m3())
    }

    /// Characteristic length for the natural-convection correlation [m].
    pub fn characteristic_length_m(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.diameter_m,
            Orientation::Vertical => self.length_m,
        }
    }
}

/// Initial fluid state inside the vessel.
#[derive(Debug, Clone)]
pub struct InitialState {
    pub pressure_pa: f64,
    pub temperature_k: f64,
    pub composition: Composition,
}

impl InitialState {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        require_positive(self.pressure_pa, "initial pressure")?;
        require_positive(self.temperature_k, "initial temperature")?;
        Ok(())
    }
}

/// Flow direction of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowMode {
    /// Gas flows from an upstream reservoir into the vessel.
    Filling,
    /// Gas vents from the vessel against a back pressure.
    Discharge,
}

/// Valve flow element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValveKind {
    Orifice,
}

/// Valve / orifice configuration.
///
/// `back_pressure_pa` is the downstream pressure for discharge and the
/// upstream reservoir (fill) pressure for filling.
#[derive(Debug, Clone)]
pub struct ValveConfig {
    pub mode: FlowMode,
    pub kind: ValveKind,
    pub bore_diameter_m: f64,
    pub discharge_coefficient: f64,
    pub back_pressure_pa: f64,
}

impl ValveConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.bore_diameter_m.is_finite() || self.bore_diameter_m <= 0.0 {
            return Err(ConfigError::NonPositiveGeometry {
                what: "orifice bore diameter",
            });
        }
        let cd = self.discharge_coefficient;
        if !cd.is_finite() || cd <= 0.0 || cd > 1.0 {
            return Err(ConfigError::DischargeCoefficient { value: cd });
        }
        require_positive(self.back_pressure_pa, "back/fill pressure")?;
        Ok(())
    }
}

/// Inner (fluid ↔ wall) film coefficient mode, resolved at configuration time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InnerFilm {
    /// No inner heat transfer (h = 0).
    None,
    /// Fixed film coefficient [W/(m²·K)].
    Fixed(f64),
    /// Correlation-derived each step from current fluid properties.
    Calculated,
}

/// Heat transfer settings.
#[derive(Debug, Clone)]
pub struct HeatTransferConfig {
    pub inner: InnerFilm,
    pub ambient_temperature_k: f64,
    pub h_outer_w_m2_k: f64,
    /// Characteristic throat diameter for the forced-convection term [m].
    pub throat_diameter_m: f64,
}

impl HeatTransferConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if let InnerFilm::Fixed(h) = self.inner {
            if !h.is_finite() || h < 0.0 {
                return Err(ConfigError::NonPositiveValue {
                    what: "fixed inner film coefficient",
                });
            }
        }
        require_positive(self.ambient_temperature_k, "ambient temperature")?;
        if !self.h_outer_w_m2_k.is_finite() || self.h_outer_w_m2_k < 0.0 {
            return Err(ConfigError::NonPositiveValue {
                what: "outer film coefficient",
            });
        }
        if !self.throat_diameter_m.is_finite() || self.throat_diameter_m <= 0.0 {
            return Err(ConfigError::NonPositiveGeometry {
                what: "throat diameter",
            });
        }
        Ok(())
    }
}

/// Time-stepping settings.
#[derive(Debug, Clone)]
pub struct CalculationConfig {
    pub time_step_s: f64,
    pub end_time_s: f64,
}

impl CalculationConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        require_positive(self.time_step_s, "time step")?;
        require_positive(self.end_time_s, "end time")?;
        Ok(())
    }
}

/// Validated, immutable simulation configuration.
///
/// Construction checks every field; afterwards the configuration is never
/// mutated, only borrowed by the engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    vessel: Vessel,
    initial: InitialState,
    valve: ValveConfig,
    heat_transfer: HeatTransferConfig,
    calculation: CalculationConfig,
}

impl SimConfig {
    pub fn new(
        vessel: Vessel,
        initial: InitialState,
        valve: ValveConfig,
        heat_transfer: HeatTransferConfig,
        calculation: CalculationConfig,
    ) -> Result<Self, ConfigError> {
        vessel.validate()?;
        initial.validate()?;
        valve.validate()?;
        heat_transfer.validate()?;
        calculation.validate()?;

        // Pressure ordering makes the configured mode physically meaningful.
        match valve.mode {
            FlowMode::Discharge => {
                if initial.pressure_pa <= valve.back_pressure_pa {
                    return Err(ConfigError::PressureOrdering {
                        what: "discharge requires initial pressure above back pressure",
                    });
                }
            }
            FlowMode::Filling => {
                if initial.pressure_pa >= valve.back_pressure_pa {
                    return Err(ConfigError::PressureOrdering {
                        what: "filling requires initial pressure below fill pressure",
                    });
                }
            }
        }

        Ok(Self {
            vessel,
            initial,
            valve,
            heat_transfer,
            calculation,
        })
    }

    pub fn vessel(&self) -> &Vessel {
        &self.vessel
    }

    pub fn initial(&self) -> &InitialState {
        &self.initial
    }

    pub fn valve(&self) -> &ValveConfig {
        &self.valve
    }

    pub fn heat_transfer(&self) -> &HeatTransferConfig {
        &self.heat_transfer
    }

    pub fn calculation(&self) -> &CalculationConfig {
        &self.calculation
    }
}
