//! Length scales and energies reported for each point of an interacting sweep

use crate::{constants::PhysicalConstants, material::WireMaterial, report::Cell};
use nalgebra::RealField;
use numeric_literals::replace_float_literals;

/// Column headings of the sweep table
pub const METRIC_FIELDS: [&str; 9] = [
    "V_int (meV)",
    "V_conf (meV)",
    "V_int/V_conf ()",
    "Electron Sep (nm)",
    "Wire width (nm)",
    "r_0 (nm)",
    "E_g (meV)",
    "E_1 (meV)",
    "E_2 (meV)",
];

#[derive(Copy, Clone, Debug, PartialEq)]
/// A derived length which may not exist at every sweep point
pub enum Metric<T> {
    /// A finite value
    Value(T),
    /// The electron separation when there is no interaction
    NoInteraction,
    /// The value was not finite
    Undefined,
}

impl<T: Copy + RealField> Metric<T> {
    fn checked(value: T, name: &str, index: usize) -> Self {
        if value.is_finite() {
            Metric::Value(value)
        } else {
            tracing::warn!("{} is not finite at sweep point {}", name, index);
            Metric::Undefined
        }
    }

    /// The value, if there is one
    pub fn value(&self) -> Option<T> {
        match self {
            Metric::Value(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<Metric<f64>> for Cell {
    fn from(metric: Metric<f64>) -> Self {
        match metric {
            Metric::Value(value) => Cell::Number(value),
            Metric::NoInteraction => Cell::from("No interaction"),
            Metric::Undefined => Cell::from("Undefined"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// One row of the sweep table
pub struct SweepPoint<T> {
    /// Interaction energy `V` in meV
    pub interaction: T,
    /// Confinement energy `t` in meV
    pub confinement: T,
    /// The ratio `V / t`, NaN where it is not finite
    pub ratio: T,
    /// Electron separation in nm
    pub separation: Metric<T>,
    /// Wire width in nm
    pub width: Metric<T>,
    /// Characteristic length `r_0` in nm
    pub r_0: Metric<T>,
    /// Ground state energy in meV
    pub ground: T,
    /// Tracked first excited energy in meV
    pub first_excited: T,
    /// Highest energy in meV, if it was kept
    pub second_excited: Option<T>,
}

impl<T: Copy + RealField> SweepPoint<T> {
    /// Evaluates the length scales of sweep point `index` at interaction `V` and confinement `t`
    #[replace_float_literals(T::from_f64(literal).unwrap())]
    pub(crate) fn evaluate(
        index: usize,
        (interaction, confinement): (T, T),
        (ground, first_excited, second_excited): (T, T, Option<T>),
        material: &WireMaterial<T>,
        constants: &PhysicalConstants<T>,
    ) -> Self {
        let q = constants.electron_charge;
        let hbar = constants.hbar;
        let mass = material.effective_mass(constants);
        let permittivity = material.dielectric_constant(constants);
        // t in joules
        let energy = confinement * 1e-3 * q;

        let width = hbar / (mass * energy).sqrt() * 1e9;
        let r_0 = (2. * q.powi(2) * hbar.powi(2) / (permittivity * mass * energy.powi(2)))
            .powf(1. / 3.)
            * 1e9;
        let separation = if interaction == T::zero() {
            Metric::NoInteraction
        } else {
            Metric::checked(
                q / (permittivity * 1e-3 * interaction) * 1e9,
                "Electron separation",
                index,
            )
        };

        let mut ratio = interaction / confinement;
        if !ratio.is_finite() {
            tracing::warn!("V / t is not finite at sweep point {}", index);
            ratio = T::zero() / T::zero();
        }

        Self {
            interaction,
            confinement,
            ratio,
            separation,
            width: Metric::checked(width, "Wire width", index),
            r_0: Metric::checked(r_0, "r_0", index),
            ground,
            first_excited,
            second_excited,
        }
    }
}

impl SweepPoint<f64> {
    /// The table row, omitting the second excited energy when it was not requested
    pub fn row(&self) -> Vec<Cell> {
        let mut row = vec![
            self.interaction.into(),
            self.confinement.into(),
            self.ratio.into(),
            self.separation.into(),
            self.width.into(),
            self.r_0.into(),
            self.ground.into(),
            self.first_excited.into(),
        ];
        if let Some(second) = self.second_excited {
            row.push(second.into());
        }
        row
    }
}
