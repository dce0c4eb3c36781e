//! bd-fluids: fluid property contract for the blowdown engine.
//!
//! Provides:
//! - Chemical species definitions (H2, He, N2, natural-gas alkanes, ...)
//! - Composition handling (pure fluids and molar-fraction mixtures)
//! - Thermodynamic state representation
//! - FluidModel trait for property calculations
//! - Ideal-gas reference backend
//!
//! # Architecture
//!
//! This crate defines a stable API (`FluidModel` trait) that isolates the
//! simulation engine from property-backend dependencies. The backend contract
//! is two-sided: forward property lookups keyed by (P, T) and the inverse
//! (density, internal energy) → (P, T) solve the integration loop performs
//! each step. Real-gas backends (e.g. a CoolProp binding) implement the same
//! trait outside this workspace; the bundled `IdealGasModel` is the
//! deterministic reference used by the engine's tests.
//!
//! # Example
//!
//! ```
//! use bd_fluids::{Composition, FluidModel, IdealGasModel, Species, StateInput};
//! use bd_core::units::{pa, k};
//!
//! let model = IdealGasModel::new();
//! let comp = Composition::pure(Species::N2);
//! let input = StateInput::PT {
//!     p: pa(101325.0),
//!     t: k(300.0),
//! };
//!
//! let state = model.state(input, &comp).unwrap();
//! let rho = model.rho(&state).unwrap();
//! assert!(rho.value > 1.0);
//! ```

pub mod composition;
pub mod error;
pub mod ideal_gas;
pub mod model;
pub mod species;
pub mod state;

// Re-exports for ergonomics
pub use composition::Composition;
pub use error::{FluidError, FluidResult};
pub use ideal_gas::IdealGasModel;
pub use model::{FluidModel, ThermoPropertyPack};
pub use species::Species;
pub use state::{
    SpecEnthalpy, SpecEntropy, SpecHeatCapacity, SpecInternalEnergy, StateInput,
    ThermalConductivity, ThermoState,
};
