//! Chemical species definitions.

/// Chemical species relevant for vessel pressurisation and depressurisation.
///
/// The set covers the pure gases exposed by the configuration layer plus the
/// alkanes needed for natural-gas molar-fraction mixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Hydrogen (H₂)
    H2,
    /// Helium (He)
    He,
    /// Nitrogen (N₂)
    N2,
    /// Oxygen (O₂)
    O2,
    /// Air (pseudo-pure)
    Air,
    /// Methane (CH₄)
    CH4,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Ethane
    Ethane,
    /// Propane
    Propane,
    /// n-Butane
    NButane,
    /// n-Pentane
    NPentane,
    /// n-Hexane
    NHexane,
}

impl Species {
    pub const ALL: [Species; 12] = [
        Species::H2,
        Species::He,
        Species::N2,
        Species::O2,
        Species::Air,
        Species::CH4,
        Species::CO2,
        Species::Ethane,
        Species::Propane,
        Species::NButane,
        Species::NPentane,
        Species::NHexane,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Species::H2 => "H2",
            Species::He => "He",
            Species::N2 => "N2",
            Species::O2 => "O2",
            Species::Air => "Air",
            Species::CH4 => "CH4",
            Species::CO2 => "CO2",
            Species::Ethane => "Ethane",
            Species::Propane => "Propane",
            Species::NButane => "nButane",
            Species::NPentane => "nPentane",
            Species::NHexane => "nHexane",
        }
    }

    /// Molar mass [kg/kmol].
    pub fn molar_mass(&self) -> f64 {
        match self {
            Species::H2 => 2.016,
            Species::He => 4.0026,
            Species::N2 => 28.014,
            Species::O2 => 31.999,
            Species::Air => 28.965,
            Species::CH4 => 16.043,
            Species::CO2 => 44.010,
            Species::Ethane => 30.070,
            Species::Propane => 44.097,
            Species::NButane => 58.122,
            Species::NPentane => 72.149,
            Species::NHexane => 86.175,
        }
    }

    /// Ideal-gas specific heat at constant pressure near 300 K [J/(kg·K)].
    pub fn cp_300k(&self) -> f64 {
        match self {
            Species::H2 => 14_310.0,
            Species::He => 5_193.0,
            Species::N2 => 1_040.0,
            Species::O2 => 918.0,
            Species::Air => 1_005.0,
            Species::CH4 => 2_226.0,
            Species::CO2 => 846.0,
            Species::Ethane => 1_763.0,
            Species::Propane => 1_679.0,
            Species::NButane => 1_694.0,
            Species::NPentane => 1_666.0,
            Species::NHexane => 1_658.0,
        }
    }

    /// Dynamic viscosity of the gas phase at 300 K [Pa·s].
    pub fn mu_300k(&self) -> f64 {
        match self {
            Species::H2 => 8.9e-6,
            Species::He => 1.99e-5,
            Species::N2 => 1.78e-5,
            Species::O2 => 2.06e-5,
            Species::Air => 1.85e-5,
            Species::CH4 => 1.11e-5,
            Species::CO2 => 1.49e-5,
            Species::Ethane => 9.4e-6,
            Species::Propane => 8.2e-6,
            Species::NButane => 7.5e-6,
            Species::NPentane => 6.8e-6,
            Species::NHexane => 6.3e-6,
        }
    }

    /// Thermal conductivity of the gas phase at 300 K [W/(m·K)].
    pub fn k_thermal_300k(&self) -> f64 {
        match self {
            Species::H2 => 0.186,
            Species::He => 0.152,
            Species::N2 => 0.0260,
            Species::O2 => 0.0266,
            Species::Air => 0.0263,
            Species::CH4 => 0.0343,
            Species::CO2 => 0.0166,
            Species::Ethane => 0.0214,
            Species::Propane => 0.0180,
            Species::NButane => 0.0164,
            Species::NPentane => 0.0143,
            Species::NHexane => 0.0132,
        }
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "H2" | "HYDROGEN" => Ok(Species::H2),
            "HE" | "HELIUM" => Ok(Species::He),
            "N2" | "NITROGEN" => Ok(Species::N2),
            "O2" | "OXYGEN" => Ok(Species::O2),
            "AIR" => Ok(Species::Air),
            "CH4" | "METHANE" => Ok(Species::CH4),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Species::CO2),
            "ETHANE" | "C2H6" => Ok(Species::Ethane),
            "PROPANE" | "C3H8" => Ok(Species::Propane),
            "NBUTANE" | "N-BUTANE" | "BUTANE" => Ok(Species::NButane),
            "NPENTANE" | "N-PENTANE" | "PENTANE" => Ok(Species::NPentane),
            "NHEXANE" | "N-HEXANE" | "HEXANE" => Ok(Species::NHexane),
            _ => Err("unknown species"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parse_aliases() {
        assert_eq!(Species::from_str("hydrogen").unwrap(), Species::H2);
        assert_eq!(Species::from_str(" N2 ").unwrap(), Species::N2);
        assert_eq!(Species::from_str("Butane").unwrap(), Species::NButane);
        assert!(Species::from_str("unobtainium").is_err());
    }

    #[test]
    fn property_tables_positive() {
        for sp in Species::ALL {
            assert!(sp.molar_mass() > 0.0, "{:?}", sp);
            assert!(sp.cp_300k() > 0.0, "{:?}", sp);
            assert!(sp.mu_300k() > 0.0, "{:?}", sp);
            assert!(sp.k_thermal_300k() > 0.0, "{:?}", sp);
        }
    }
}
