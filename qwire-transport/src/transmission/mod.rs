// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Transmission module
//!
//! The non-interacting saddle-point model of a quantum point contact. The constriction is
//! described by two curvature energies `hw_x` (along the transport direction) and `hw_y`
//! (transverse). A perpendicular component of the magnetic field adds a cyclotron term and a
//! Zeeman splitting, and a source-drain bias shifts the forward and backward moving carriers in
//! opposite directions.
//!
//! Every transverse channel `n` opens as a Fermi-function step centred at `(n + 1/2) E2` with a
//! width set by `E1`:
//!
//! ```text
//! E1 = 1 / (2 pi sqrt(2)) * sqrt(sqrt(w^2 + 4 hw_x^2 hw_y^2) - w)
//! E2 = 1 / sqrt(2)        * sqrt(sqrt(w^2 + 4 hw_x^2 hw_y^2) + w)
//! w  = hw_c^2 + hw_y^2 - hw_x^2
//! ```
//!
//! A model is built for a single `ExperimentPoint` through the `TransmissionModelBuilder`
//!
//! ```ignore
//! let model = TransmissionModelBuilder::new()
//!     .with_material(&material)
//!     .with_experiment(&experiment)
//!     .with_constants(&constants)
//!     .build();
//! ```

mod comparison;

pub use comparison::{
    plot_comparison, ComparisonSettings, ComparisonSweep, SweptQuantity, FIELD_NAMES,
};

use crate::{constants::PhysicalConstants, material::Material};
use nalgebra::RealField;
use ndarray::{Array1, ArrayView1};
use serde::Deserialize;

/// Below this magnitude the cyclotron energy is treated as exactly zero
const CYCLOTRON_CUTOFF: f64 = 1e-8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, clap::ArgEnum)]
#[serde(rename_all = "snake_case")]
/// Which channel indices contribute to the total transmission for a requested channel count
pub enum ChannelSummation {
    /// Channels `0..channels`
    Exclusive,
    /// Channels `0..=channels`
    Inclusive,
}

impl Default for ChannelSummation {
    fn default() -> Self {
        Self::Exclusive
    }
}

impl ChannelSummation {
    pub(crate) fn channels(&self, channels: usize) -> std::ops::Range<usize> {
        match self {
            ChannelSummation::Exclusive => 0..channels,
            ChannelSummation::Inclusive => 0..channels + 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// A single experimental configuration, one curve on a comparison plot
pub struct ExperimentPoint<T> {
    /// Curvature energy along the transport direction in meV
    pub hw_x: T,
    /// The ratio of the transverse curvature to `hw_x`
    pub hw_y_ratio: T,
    /// Source-drain bias in meV
    pub bias: T,
    /// Magnetic field in T
    pub magnetic_field: T,
    /// Tilt of the field away from the normal, in degrees
    pub angle: T,
}

impl<T: Copy + RealField> ExperimentPoint<T> {
    /// The transverse curvature energy in meV
    pub fn hw_y(&self) -> T {
        self.hw_y_ratio * self.hw_x
    }
}

#[derive(Clone, Debug)]
/// The saddle-point model for a single experiment
pub struct TransmissionModel<T> {
    hw_x: T,
    hw_y: T,
    bias: T,
    magnetic_field: T,
    /// Field angle in radians
    angle: T,
    g_factor: T,
    bohr_magneton: T,
    /// Cyclotron energy in meV
    hw_c: T,
    angular_freq: T,
    e1: T,
    e2: T,
}

/// Builder for a `TransmissionModel` from references to a `Material`, an `ExperimentPoint` and the
/// `PhysicalConstants`
pub struct TransmissionModelBuilder<RefMaterial, RefExperiment, RefConstants> {
    material: RefMaterial,
    experiment: RefExperiment,
    constants: RefConstants,
}

impl TransmissionModelBuilder<(), (), ()> {
    /// Starts a builder with nothing set
    pub fn new() -> Self {
        Self {
            material: (),
            experiment: (),
            constants: (),
        }
    }
}

impl Default for TransmissionModelBuilder<(), (), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<RefMaterial, RefExperiment, RefConstants>
    TransmissionModelBuilder<RefMaterial, RefExperiment, RefConstants>
{
    /// Attach the material the constriction is made from
    pub fn with_material<Material>(
        self,
        material: &Material,
    ) -> TransmissionModelBuilder<&Material, RefExperiment, RefConstants> {
        TransmissionModelBuilder {
            material,
            experiment: self.experiment,
            constants: self.constants,
        }
    }

    /// Attach the experimental configuration
    pub fn with_experiment<Experiment>(
        self,
        experiment: &Experiment,
    ) -> TransmissionModelBuilder<RefMaterial, &Experiment, RefConstants> {
        TransmissionModelBuilder {
            material: self.material,
            experiment,
            constants: self.constants,
        }
    }

    /// Attach the physical constants
    pub fn with_constants<Constants>(
        self,
        constants: &Constants,
    ) -> TransmissionModelBuilder<RefMaterial, RefExperiment, &Constants> {
        TransmissionModelBuilder {
            material: self.material,
            experiment: self.experiment,
            constants,
        }
    }
}

impl<T: Copy + RealField>
    TransmissionModelBuilder<&Material<T>, &ExperimentPoint<T>, &PhysicalConstants<T>>
{
    /// Builds the model, evaluating the characteristic energies once
    #[tracing::instrument(name = "Transmission model", level = "debug", skip(self))]
    pub fn build(self) -> TransmissionModel<T> {
        TransmissionModel::new(self.material, self.experiment, self.constants)
    }
}

impl<T: Copy + RealField> TransmissionModel<T> {
    fn new(
        material: &Material<T>,
        experiment: &ExperimentPoint<T>,
        constants: &PhysicalConstants<T>,
    ) -> Self {
        let two = T::one() + T::one();
        let hw_x = experiment.hw_x;
        let hw_y = experiment.hw_y();
        let angle = experiment.angle * T::pi() / T::from_f64(180.).unwrap();
        let magnetic_field = experiment.magnetic_field;

        // hbar e B / m in J, divided by e and scaled to meV
        let mut hw_c = constants.hbar * magnetic_field * angle.cos()
            / material.effective_mass(constants)
            * T::from_f64(1e3).unwrap();
        if hw_c.abs() < T::from_f64(CYCLOTRON_CUTOFF).unwrap() {
            hw_c = T::zero();
        }
        if !hw_c.is_finite() {
            tracing::warn!(
                "Cyclotron energy is not finite, check the effective mass of {}",
                material.name()
            );
        }

        let angular_freq = hw_c.powi(2) + hw_y.powi(2) - hw_x.powi(2);
        let root = (angular_freq.powi(2) + two * two * hw_x.powi(2) * hw_y.powi(2)).sqrt();
        let e1 = T::one() / (two * T::pi() * two.sqrt()) * (root - angular_freq).sqrt();
        let e2 = T::one() / two.sqrt() * (root + angular_freq).sqrt();

        Self {
            hw_x,
            hw_y,
            bias: experiment.bias,
            magnetic_field,
            angle,
            g_factor: material.g_factor(),
            bohr_magneton: constants.bohr_magneton,
            hw_c,
            angular_freq,
            e1,
            e2,
        }
    }

    /// The longitudinal confinement energy in meV
    pub fn hw_x(&self) -> T {
        self.hw_x
    }

    /// The transverse confinement energy in meV
    pub fn hw_y(&self) -> T {
        self.hw_y
    }

    /// The source-drain bias in meV
    pub fn bias(&self) -> T {
        self.bias
    }

    /// The magnetic field in T
    pub fn magnetic_field(&self) -> T {
        self.magnetic_field
    }

    /// The field angle in radians
    pub fn angle(&self) -> T {
        self.angle
    }

    /// The cyclotron energy in meV
    pub fn hw_c(&self) -> T {
        self.hw_c
    }

    /// The combination `hw_c^2 + hw_y^2 - hw_x^2`
    pub fn angular_freq(&self) -> T {
        self.angular_freq
    }

    /// The width of each conductance step in meV
    pub fn e1(&self) -> T {
        self.e1
    }

    /// The spacing of the conductance steps in meV
    pub fn e2(&self) -> T {
        self.e2
    }

    /// Whether the characteristic energies could not be evaluated
    pub fn is_degenerate(&self) -> bool {
        !(self.hw_c.is_finite() && self.e1.is_finite() && self.e2.is_finite())
    }

    /// The Zeeman energy for spin projection `spin` in meV
    pub fn zeeman(&self, spin: T) -> T {
        self.g_factor * self.bohr_magneton * spin * self.magnetic_field
    }

    /// Transmission probability of channel `n` for carriers moving with the bias
    pub fn forward_transmission(&self, n: usize, x: ArrayView1<T>) -> Array1<T> {
        self.directed_transmission(n, x, self.bias)
    }

    /// Transmission probability of channel `n` for carriers moving against the bias
    pub fn backward_transmission(&self, n: usize, x: ArrayView1<T>) -> Array1<T> {
        self.directed_transmission(n, x, -self.bias)
    }

    /// The total conductance in units of `2e^2 / h` summed over `channels`
    pub fn total_transmission(
        &self,
        channels: usize,
        summation: ChannelSummation,
        x: ArrayView1<T>,
    ) -> Array1<T> {
        let half = T::one() / (T::one() + T::one());
        let total = summation
            .channels(channels)
            .fold(Array1::<T>::zeros(x.len()), |acc, n| {
                acc + self.forward_transmission(n, x) + self.backward_transmission(n, x)
            });
        total.mapv(|value| value * half)
    }

    /// Both spin projections for a single direction, each weighted by a half
    fn directed_transmission(&self, n: usize, x: ArrayView1<T>, bias: T) -> Array1<T> {
        let half = T::one() / (T::one() + T::one());
        let level = (T::from_usize(n).unwrap() + half) * self.e2;
        let zeeman = [self.zeeman(half), self.zeeman(-half)];
        x.mapv(|x| {
            zeeman.iter().fold(T::zero(), |acc, &zeeman| {
                let argument = (x * self.hw_x + bias * half - level + zeeman) / self.e1;
                acc + half / (T::one() + (-argument).exp())
            })
        })
    }
}
