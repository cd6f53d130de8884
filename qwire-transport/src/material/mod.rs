// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Material descriptors for the two transport models
//!
//! - `Material` carries what the non-interacting saddle-point model needs: the Lande g-factor and
//!   the carrier effective mass.
//! - `WireMaterial` carries what the interacting wire model needs: the static dielectric constant,
//!   the effective mass and the range of confinement energies to sweep.
//!
//! All factors are stored relative to their vacuum values and converted to absolute quantities with
//! an instance of `PhysicalConstants`. Descriptors are immutable once built.

mod presets;

pub use presets::KnownMaterial;

use crate::constants::PhysicalConstants;
use nalgebra::RealField;

#[derive(Clone, Debug, PartialEq)]
/// Material information for the non-interacting transmission model
pub struct Material<T> {
    /// A label for the material, may be empty
    pub(crate) name: String,
    /// Lande g-factor
    pub(crate) g_factor: T,
    /// Effective mass in units of the bare electron mass
    pub(crate) effective_mass_ratio: T,
}

impl<T: Copy + RealField> Material<T> {
    /// A material called `name` with the given g-factor and effective mass ratio
    pub fn new(name: impl Into<String>, g_factor: T, effective_mass_ratio: T) -> Self {
        Self {
            name: name.into(),
            g_factor,
            effective_mass_ratio,
        }
    }

    /// Name shown in plot titles
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The effective g-factor
    pub fn g_factor(&self) -> T {
        self.g_factor
    }

    /// Effective mass in units of the bare electron mass
    pub fn effective_mass_ratio(&self) -> T {
        self.effective_mass_ratio
    }

    /// The absolute effective mass in kg
    pub fn effective_mass(&self, constants: &PhysicalConstants<T>) -> T {
        self.effective_mass_ratio * constants.electron_mass
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Material information for the interacting wire model
pub struct WireMaterial<T> {
    /// Static dielectric constant in units of the vacuum permittivity
    pub(crate) dielectric_ratio: T,
    /// Confinement energies spanned by a sweep, in meV, as (lower, upper)
    pub(crate) confinement_range: (T, T),
    /// Effective mass in units of the bare electron mass
    pub(crate) effective_mass_ratio: T,
    pub(crate) name: Option<String>,
}

impl<T: Copy + RealField> WireMaterial<T> {
    /// A wire material, `confinement_range` giving the swept confinement energies in meV
    pub fn new(
        dielectric_ratio: T,
        confinement_range: (T, T),
        effective_mass_ratio: T,
        name: Option<String>,
    ) -> Self {
        Self {
            dielectric_ratio,
            confinement_range,
            effective_mass_ratio,
            name,
        }
    }

    /// Name of the material, for compiled-in presets
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Dielectric constant in units of the vacuum permittivity
    pub fn dielectric_ratio(&self) -> T {
        self.dielectric_ratio
    }

    /// Effective mass in units of the bare electron mass
    pub fn effective_mass_ratio(&self) -> T {
        self.effective_mass_ratio
    }

    /// Confinement energies in meV, as (lower, upper)
    pub fn confinement_range(&self) -> (T, T) {
        self.confinement_range
    }

    /// The absolute dielectric constant in F / m
    pub fn dielectric_constant(&self, constants: &PhysicalConstants<T>) -> T {
        self.dielectric_ratio * constants.vacuum_permittivity
    }

    /// The absolute effective mass in kg
    pub fn effective_mass(&self, constants: &PhysicalConstants<T>) -> T {
        self.effective_mass_ratio * constants.electron_mass
    }
}

#[cfg(test)]
mod test {
    use super::{Material, WireMaterial};
    use crate::constants::{PhysicalConstants, ELECTRON_MASS, EPSILON_0};
    use approx::assert_relative_eq;

    #[test]
    fn absolute_quantities_scale_the_vacuum_values() {
        let constants = PhysicalConstants::<f64>::default();
        let material = Material::new("GaAs", 0.04, 0.067);
        assert_relative_eq!(material.effective_mass(&constants), 0.067 * ELECTRON_MASS);

        let wire = WireMaterial::new(12.4, (1., 2.), 0.067, None);
        assert_relative_eq!(wire.dielectric_constant(&constants), 12.4 * EPSILON_0);
        assert_relative_eq!(wire.effective_mass(&constants), 0.067 * ELECTRON_MASS);
        assert!(wire.name().is_none());
    }
}
