use super::{Material, WireMaterial};
use nalgebra::RealField;

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ArgEnum)]
#[non_exhaustive]
/// Enum with all compiled-in material parameter sets
///
/// As materials may be added in future this is labelled as `non_exhaustive`
pub enum KnownMaterial {
    #[clap(name = "gaas")]
    /// Gallium arsenide
    GaAs,
    #[clap(name = "inas")]
    /// Indium arsenide
    InAs,
    #[clap(name = "si")]
    /// Silicon
    Si,
}

impl std::fmt::Display for KnownMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            KnownMaterial::GaAs => {
                write!(f, "GaAs")
            }
            KnownMaterial::InAs => {
                write!(f, "InAs")
            }
            KnownMaterial::Si => {
                write!(f, "Si")
            }
        }
    }
}

/// The tabulated parameters of a single material
struct Parameters<T> {
    g_factor: T,
    effective_mass_ratio: T,
    dielectric_ratio: T,
}

impl KnownMaterial {
    /// Builds the non-interacting `Material` for the variant
    pub fn material<T: Copy + RealField>(&self) -> Material<T> {
        let parameters = self.parameters();
        Material::new(
            self.to_string(),
            parameters.g_factor,
            parameters.effective_mass_ratio,
        )
    }

    /// Builds the interacting `WireMaterial` for the variant, sweeping `confinement_range`
    pub fn wire_material<T: Copy + RealField>(&self, confinement_range: (T, T)) -> WireMaterial<T> {
        let parameters = self.parameters();
        WireMaterial::new(
            parameters.dielectric_ratio,
            confinement_range,
            parameters.effective_mass_ratio,
            Some(self.to_string()),
        )
    }

    fn parameters<T: RealField>(&self) -> Parameters<T> {
        match self {
            KnownMaterial::GaAs => Parameters::gaas(),
            KnownMaterial::InAs => Parameters::inas(),
            KnownMaterial::Si => Parameters::si(),
        }
    }
}

impl<T: RealField> Parameters<T> {
    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn gaas() -> Self {
        Self {
            g_factor: -0.44,
            effective_mass_ratio: 0.067,
            dielectric_ratio: 12.4,
        }
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn inas() -> Self {
        Self {
            g_factor: -14.9,
            effective_mass_ratio: 0.023,
            dielectric_ratio: 15.15,
        }
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn si() -> Self {
        Self {
            g_factor: 2.0,
            effective_mass_ratio: 0.19,
            dielectric_ratio: 11.7,
        }
    }
}
