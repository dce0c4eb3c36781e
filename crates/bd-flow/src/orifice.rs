//! Orifice flow element with compressible subsonic and choked flow.

use crate::common::{EPSILON_PRESSURE, check_finite, check_positive};
use crate::error::FlowResult;
use bd_core::units::{Area, Length, MassRate, Pressure, Temperature, k, kgps};
use bd_fluids::{FluidModel, ThermoState};
use uom::si::area::square_meter;

/// Critical (choking) pressure ratio for a given isentropic exponent.
///
/// Below this downstream/upstream ratio the throat velocity reaches the local
/// speed of sound and the flow rate becomes independent of downstream pressure.
pub fn critical_pressure_ratio(gamma: f64) -> f64 {
    (2.0 / (gamma + 1.0)).powf(gamma / (gamma - 1.0))
}

/// Orifice flow element.
///
/// Computes the mass flow rate through a sharp-edged orifice from the upstream
/// state and the downstream pressure, switching between the isentropic
/// subsonic relation and the choked (critical flow) relation at the critical
/// pressure ratio. The returned rate is a magnitude; the caller applies the
/// sign convention of its flow direction.
#[derive(Debug, Clone)]
pub struct OrificeFlow {
    /// Discharge coefficient (dimensionless, typically 0.6-0.9)
    pub cd: f64,
    /// Orifice throat area
    pub area: Area,
}

impl OrificeFlow {
    /// Create an orifice from a discharge coefficient and throat area.
    pub fn new(cd: f64, area: Area) -> FlowResult<Self> {
        check_positive(cd, "discharge coefficient must be positive")?;
        check_positive(area.value, "orifice area must be positive")?;
        Ok(Self { cd, area })
    }

    /// Create an orifice from its bore diameter: A = π·d²/4.
    pub fn from_bore(cd: f64, bore: Length) -> FlowResult<Self> {
        check_positive(bore.value, "orifice bore diameter must be positive")?;
        let area = std::f64::consts::FRAC_PI_4 * bore.value * bore.value;
        Self::new(cd, Area::new::<square_meter>(area))
    }

    /// Compute the mass flow rate magnitude through the orifice.
    ///
    /// `upstream` is the high-pressure side state; `p_down` the pressure on
    /// the low-pressure side. Returns zero when the pressure difference is
    /// negligible or reversed (the caller validates flow direction).
    pub fn mass_flow(
        &self,
        fluid: &dyn FluidModel,
        upstream: &ThermoState,
        p_down: Pressure,
    ) -> FlowResult<MassRate> {
        let p_up = upstream.pressure().value;
        let p_dn = p_down.value;

        if p_up - p_dn < EPSILON_PRESSURE {
            return Ok(kgps(0.0));
        }

        let rho_up = fluid.rho(upstream)?.value;
        let gamma = fluid.gamma(upstream)?;
        check_finite(rho_up, "upstream density")?;
        check_finite(gamma, "gamma")?;

        let pr = (p_dn / p_up).max(0.0);
        let pr_crit = critical_pressure_ratio(gamma);

        let mdot = if pr <= pr_crit {
            // Choked: rate depends on upstream conditions only.
            let choke_factor =
                (2.0 / (gamma + 1.0)).powf((gamma + 1.0) / (2.0 * (gamma - 1.0)));
            self.cd * self.area.value * (gamma * rho_up * p_up).sqrt() * choke_factor
        } else {
            // Subsonic isentropic orifice relation.
            let expansion = (gamma / (gamma - 1.0))
                * (pr.powf(2.0 / gamma) - pr.powf((gamma + 1.0) / gamma));
            self.cd * self.area.value * (2.0 * rho_up * p_up * expansion).sqrt()
        };

        check_finite(mdot, "mass flow rate")?;
        Ok(kgps(mdot))
    }

    /// Throat temperature from an isentropic expansion estimate.
    ///
    /// During discharge this is the vent temperature: the fluid cools as it
    /// expands from the vessel pressure to the throat pressure. Once choked,
    /// the expansion is pinned at the critical pressure ratio.
    pub fn throat_temperature(
        &self,
        fluid: &dyn FluidModel,
        upstream: &ThermoState,
        p_down: Pressure,
    ) -> FlowResult<Temperature> {
        let gamma = fluid.gamma(upstream)?;
        let p_up = upstream.pressure().value;

        let pr = (p_down.value / p_up).clamp(0.0, 1.0);
        let pr_eff = pr.max(critical_pressure_ratio(gamma));

        let t_throat = upstream.temperature().value * pr_eff.powf((gamma - 1.0) / gamma);
        check_finite(t_throat, "throat temperature")?;
        Ok(k(t_throat))
    }
}
