//! Fluid composition (pure or mixtures).

use crate::error::{FluidError, FluidResult};
use crate::species::Species;
use bd_core::numeric::{Tolerances, nearly_equal};
use std::str::FromStr;
use std::sync::Arc;

/// Fluid composition defined by normalized mole fractions.
///
/// The composition is always normalized (mole fractions sum to 1.0). The
/// species list is reference-counted, so cloning a composition (or a state
/// that owns one) shares the single allocation made at construction; the
/// integration loop never re-allocates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    /// Species and their mole fractions (always normalized to sum=1).
    items: Arc<[(Species, f64)]>,
}

impl Composition {
    /// Create a pure-species composition.
    pub fn pure(species: Species) -> Self {
        Self {
            items: vec![(species, 1.0)].into(),
        }
    }

    /// Create a composition from mole fractions.
    ///
    /// Validates that all fractions are finite, non-negative, and have a positive sum,
    /// then normalizes to sum=1.
    pub fn new_mole_fractions(fractions: Vec<(Species, f64)>) -> FluidResult<Self> {
        if fractions.is_empty() {
            return Err(FluidError::InvalidArg {
                what: "empty composition",
            });
        }

        let mut sum = 0.0;
        for (_, frac) in &fractions {
            if !frac.is_finite() {
                return Err(FluidError::NonPhysical {
                    what: "non-finite mole fraction",
                });
            }
            if *frac < 0.0 {
                return Err(FluidError::NonPhysical {
                    what: "negative mole fraction",
                });
            }
            sum += frac;
        }

        if sum <= 0.0 || !sum.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "mole fractions sum to zero or non-finite",
            });
        }

        let normalized: Vec<(Species, f64)> = fractions
            .into_iter()
            .map(|(s, f)| (s, f / sum))
            .filter(|(_, f)| *f > 1e-15) // Drop negligible species
            .collect();

        if normalized.is_empty() {
            return Err(FluidError::NonPhysical {
                what: "all mole fractions negligible",
            });
        }

        Ok(Self {
            items: normalized.into(),
        })
    }

    /// Parse a fluid identifier string.
    ///
    /// Two forms are accepted:
    /// - a bare species name: `"H2"`, `"air"`, `"Methane"`
    /// - a molar-fraction mixture: `"Methane[0.89571]&Ethane[5.6739e-02]&CO2[0.84e-02]"`
    ///
    /// Mixture fractions are normalized, so they need not sum to exactly 1.
    pub fn parse(identifier: &str) -> FluidResult<Self> {
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return Err(FluidError::Parse {
                message: "empty identifier".to_string(),
            });
        }

        if !trimmed.contains('[') {
            let species = Species::from_str(trimmed).map_err(|_| FluidError::Parse {
                message: format!("unknown species '{}'", trimmed),
            })?;
            return Ok(Self::pure(species));
        }

        let mut fractions = Vec::new();
        for part in trimmed.split('&') {
            let part = part.trim();
            let open = part.find('[').ok_or_else(|| FluidError::Parse {
                message: format!("missing '[' in component '{}'", part),
            })?;
            let close = part.rfind(']').ok_or_else(|| FluidError::Parse {
                message: format!("missing ']' in component '{}'", part),
            })?;
            if close <= open {
                return Err(FluidError::Parse {
                    message: format!("malformed component '{}'", part),
                });
            }

            let species = Species::from_str(&part[..open]).map_err(|_| FluidError::Parse {
                message: format!("unknown species '{}'", &part[..open]),
            })?;
            let frac: f64 = part[open + 1..close]
                .trim()
                .parse()
                .map_err(|_| FluidError::Parse {
                    message: format!("bad mole fraction in '{}'", part),
                })?;
            fractions.push((species, frac));
        }

        Self::new_mole_fractions(fractions)
    }

    /// Get mole fraction of a species (0.0 if not present).
    pub fn mole_fraction(&self, species: Species) -> f64 {
        self.items
            .iter()
            .find(|(s, _)| *s == species)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }

    /// Check if this is a pure-species composition.
    ///
    /// Returns `Some(species)` if exactly one species has fraction ≈1.0.
    pub fn is_pure(&self) -> Option<Species> {
        if self.items.len() == 1 {
            let (species, frac) = self.items[0];
            let tol = Tolerances {
                abs: 1e-10,
                rel: 1e-10,
            };
            if nearly_equal(frac, 1.0, tol) {
                return Some(species);
            }
        }
        None
    }

    /// Iterate over all species with non-zero mole fractions.
    pub fn iter(&self) -> impl Iterator<Item = (Species, f64)> + '_ {
        self.items.iter().copied()
    }

    /// Compute mixture molar mass [kg/kmol] from species mole fractions.
    ///
    /// For a mixture: M_mix = Σ (x_i * M_i) where x_i is mole fraction of species i.
    pub fn molar_mass(&self) -> f64 {
        self.items
            .iter()
            .map(|(species, mole_frac)| species.molar_mass() * mole_frac)
            .sum()
    }

    /// Iterate over species with their mass fractions.
    ///
    /// w_i = x_i * M_i / M_mix. Used for mass-based mixing rules (cp).
    pub fn mass_fractions(&self) -> impl Iterator<Item = (Species, f64)> + '_ {
        let m_mix = self.molar_mass();
        self.items
            .iter()
            .map(move |(s, x)| (*s, x * s.molar_mass() / m_mix))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalized_sum_is_one(fracs in prop::collection::vec(0.0_f64..1.0_f64, 1..5)) {
            let species = [Species::O2, Species::N2, Species::H2, Species::He, Species::CH4];
            let composition_input: Vec<(Species, f64)> = fracs
                .iter()
                .enumerate()
                .map(|(i, &f)| (species[i % species.len()], f))
                .collect();

            if let Ok(comp) = Composition::new_mole_fractions(composition_input) {
                let sum: f64 = comp.iter().map(|(_, f)| f).sum();
                let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
                prop_assert!(nearly_equal(sum, 1.0, tol));
            }
        }
    }
}
