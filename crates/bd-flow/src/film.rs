//! Convective film coefficient correlations.
//!
//! Natural convection uses the Churchill–Chu correlations, with the
//! horizontal-cylinder and vertical-surface forms as distinct branches
//! selected by vessel orientation. Forced convection (the incoming jet during
//! filling) uses Dittus–Boelter on the throat diameter. Mixed films combine
//! as a fourth-power mean.

use crate::common::{EPSILON_MDOT, check_finite};
use crate::error::FlowResult;
use bd_core::units::constants::G0_MPS2;
use bd_fluids::ThermoPropertyPack;

/// Vessel orientation, selecting the natural-convection correlation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Natural-convection film coefficient [W/(m²·K)].
///
/// `film` is a property pack evaluated at the film temperature
/// (T_fluid + T_wall)/2 and the current pressure. `length` is the
/// characteristic length: the vessel diameter for a horizontal cylinder, the
/// vessel length for a vertical one. β is taken as 1/T_film (gas).
pub fn natural_convection_h(
    film: &ThermoPropertyPack,
    orientation: Orientation,
    length: f64,
    delta_t: f64,
) -> FlowResult<f64> {
    let dt = delta_t.abs();
    if dt == 0.0 {
        return Ok(0.0);
    }

    let rho = film.rho.value;
    let mu = film.mu.value;
    let kt = film.k_thermal;
    let beta = 1.0 / film.t.value;
    let pr = film.prandtl();

    // Ra = Gr·Pr = g·β·ΔT·L³·ρ²·cp / (μ·k)
    let ra = G0_MPS2 * beta * dt * length.powi(3) * rho * rho * film.cp / (mu * kt);
    check_finite(ra, "Rayleigh number")?;

    let nu = match orientation {
        // Churchill–Chu, horizontal cylinder
        Orientation::Horizontal => {
            let denom = (1.0 + (0.559 / pr).powf(9.0 / 16.0)).powf(8.0 / 27.0);
            let root = 0.60 + 0.387 * ra.powf(1.0 / 6.0) / denom;
            root * root
        }
        // Churchill–Chu, vertical surface
        Orientation::Vertical => {
            let denom = (1.0 + (0.492 / pr).powf(9.0 / 16.0)).powf(8.0 / 27.0);
            let root = 0.825 + 0.387 * ra.powf(1.0 / 6.0) / denom;
            root * root
        }
    };

    let h = nu * kt / length;
    check_finite(h, "natural convection film coefficient")?;
    Ok(h)
}

/// Forced-convection film coefficient from the throat jet [W/(m²·K)].
///
/// Dittus–Boelter with the Reynolds number of the jet through the throat:
/// Re = 4·ṁ/(π·D·μ), Nu = 0.023·Re^0.8·Pr^0.4.
pub fn forced_convection_h(
    bulk: &ThermoPropertyPack,
    mdot_kg_s: f64,
    throat_diameter: f64,
) -> FlowResult<f64> {
    if mdot_kg_s.abs() < EPSILON_MDOT {
        return Ok(0.0);
    }

    let mu = bulk.mu.value;
    let re = 4.0 * mdot_kg_s.abs() / (std::f64::consts::PI * throat_diameter * mu);
    let nu = 0.023 * re.powf(0.8) * bulk.prandtl().powf(0.4);

    let h = nu * bulk.k_thermal / throat_diameter;
    check_finite(h, "forced convection film coefficient")?;
    Ok(h)
}

/// Combine natural and forced film coefficients as a fourth-power mean.
pub fn mixed_film_h(h_natural: f64, h_forced: f64) -> f64 {
    (h_natural.powi(4) + h_forced.powi(4)).powf(0.25)
}
