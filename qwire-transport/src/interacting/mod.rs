// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Interacting
//!
//! Sweeps a chain of interacting electrons in a quantum wire through a sequence of interaction and
//! confinement energies.
//!
//! At each point the many-body Hamiltonian is built and diagonalised. The ground and highest
//! energies are read straight off the ascending spectrum, while the first excited state is
//! followed from point to point by an `OverlapTracker`. The derived length scales of each point
//! are collected in a `SweepPoint`.
//!
//! A sweep is constructed through the `InteractingSweepBuilder`
//!
//! ```ignore
//! let sweep = InteractingSweepBuilder::new()
//!     .with_material(&material)
//!     .with_parameters(&parameters)
//!     .with_settings(&settings)
//!     .with_constants(&constants)
//!     .build()?;
//! let result = sweep.run()?;
//! ```

mod conductance;
mod continuity;
mod metrics;

pub use conductance::{
    energy_gap_curve, energy_level_curves, level_conductance, plot_level_conductance,
};
pub use continuity::{OverlapTracker, Selection};
pub use metrics::{Metric, SweepPoint, METRIC_FIELDS};

use crate::{
    constants::PhysicalConstants,
    error::BuildError,
    hamiltonian::HamiltonianBuilder,
    material::WireMaterial,
    report::{ReportError, ReportingSink},
};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use miette::Diagnostic;
use nalgebra::RealField;
use serde::Deserialize;

#[derive(thiserror::Error, Debug, Diagnostic)]
/// Failures setting up or running a sweep
pub enum SweepError {
    #[error("a sweep needs at least one electron")]
    #[diagnostic(code(qwire::sweep::zero_electrons))]
    /// A chain needs at least one electron
    ZeroElectrons,
    #[error("{requested} electrons requested, but at most {maximum} are permitted")]
    #[diagnostic(
        code(qwire::sweep::too_many_electrons),
        help("the Hamiltonian has dimension 3^N, raise `maximum_electrons` in the configuration to allow larger chains")
    )]
    /// The chain exceeds the configured electron ceiling
    TooManyElectrons {
        /// Electrons in the requested chain
        requested: usize,
        /// The configured ceiling
        maximum: usize,
    },
    #[error("a sweep needs at least one point")]
    #[diagnostic(code(qwire::sweep::no_points))]
    /// A sweep needs at least one point
    NoPoints,
    #[error("diagonalisation failed to converge at sweep point {index}")]
    #[diagnostic(code(qwire::sweep::diagonalisation))]
    /// The eigensolver did not converge
    Diagonalisation {
        /// The failing sweep point
        index: usize,
    },
    #[error(transparent)]
    #[diagnostic(code(qwire::sweep::build))]
    /// The Hamiltonian could not be assembled
    Build(#[from] BuildError),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
/// Numerical limits of the interacting sweep
pub struct SweepSettings {
    /// The largest chain a sweep will attempt
    pub maximum_electrons: usize,
    /// Overlaps within this distance of the selected maximum are reported as near-ties
    pub overlap_tie_tolerance: f64,
    /// Convergence tolerance of the eigen-decomposition
    pub eigen_tolerance: f64,
    /// Iteration limit of the eigen-decomposition, zero for no limit
    pub maximum_iterations: usize,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            maximum_electrons: 6,
            overlap_tie_tolerance: 1e-10,
            eigen_tolerance: f64::EPSILON,
            maximum_iterations: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// What a sweep samples
pub struct SweepParameters<T> {
    /// Number of electrons in the chain
    pub electrons: usize,
    /// Interaction energies in meV, as (lower, upper)
    pub interaction_range: (T, T),
    /// Sample the interaction from the top of its range downwards
    pub interaction_reversed: bool,
    /// Sample the confinement from the top of its range downwards
    pub confinement_reversed: bool,
    /// Number of sweep points
    pub points: usize,
    /// Keep the highest energy level in the results
    pub include_second_excited: bool,
}

#[derive(Clone, Debug)]
/// A validated sweep, ready to run
pub struct InteractingSweep<'a, T: RealField> {
    material: &'a WireMaterial<T>,
    parameters: &'a SweepParameters<T>,
    settings: &'a SweepSettings,
    constants: &'a PhysicalConstants<T>,
}

/// Builder for an `InteractingSweep` from references to a `WireMaterial`, the `SweepParameters`,
/// the `SweepSettings` and the `PhysicalConstants`
pub struct InteractingSweepBuilder<RefMaterial, RefParameters, RefSettings, RefConstants> {
    material: RefMaterial,
    parameters: RefParameters,
    settings: RefSettings,
    constants: RefConstants,
}

impl InteractingSweepBuilder<(), (), (), ()> {
    /// Starts a builder with nothing set
    pub fn new() -> Self {
        Self {
            material: (),
            parameters: (),
            settings: (),
            constants: (),
        }
    }
}

impl Default for InteractingSweepBuilder<(), (), (), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<RefMaterial, RefParameters, RefSettings, RefConstants>
    InteractingSweepBuilder<RefMaterial, RefParameters, RefSettings, RefConstants>
{
    /// Attach the wire material, which also fixes the confinement range
    pub fn with_material<Material>(
        self,
        material: &Material,
    ) -> InteractingSweepBuilder<&Material, RefParameters, RefSettings, RefConstants> {
        InteractingSweepBuilder {
            material,
            parameters: self.parameters,
            settings: self.settings,
            constants: self.constants,
        }
    }

    /// Attach the sampled ranges and chain length
    pub fn with_parameters<Parameters>(
        self,
        parameters: &Parameters,
    ) -> InteractingSweepBuilder<RefMaterial, &Parameters, RefSettings, RefConstants> {
        InteractingSweepBuilder {
            material: self.material,
            parameters,
            settings: self.settings,
            constants: self.constants,
        }
    }

    /// Attach the numerical settings
    pub fn with_settings<Settings>(
        self,
        settings: &Settings,
    ) -> InteractingSweepBuilder<RefMaterial, RefParameters, &Settings, RefConstants> {
        InteractingSweepBuilder {
            material: self.material,
            parameters: self.parameters,
            settings,
            constants: self.constants,
        }
    }

    /// Attach the physical constants
    pub fn with_constants<Constants>(
        self,
        constants: &Constants,
    ) -> InteractingSweepBuilder<RefMaterial, RefParameters, RefSettings, &Constants> {
        InteractingSweepBuilder {
            material: self.material,
            parameters: self.parameters,
            settings: self.settings,
            constants,
        }
    }
}

impl<'a, T: Copy + RealField>
    InteractingSweepBuilder<
        &'a WireMaterial<T>,
        &'a SweepParameters<T>,
        &'a SweepSettings,
        &'a PhysicalConstants<T>,
    >
{
    /// Validates the chain length and point count
    pub fn build(self) -> Result<InteractingSweep<'a, T>, SweepError> {
        let electrons = self.parameters.electrons;
        if electrons == 0 {
            return Err(SweepError::ZeroElectrons);
        }
        if electrons > self.settings.maximum_electrons {
            return Err(SweepError::TooManyElectrons {
                requested: electrons,
                maximum: self.settings.maximum_electrons,
            });
        }
        if self.parameters.points == 0 {
            return Err(SweepError::NoPoints);
        }
        Ok(InteractingSweep {
            material: self.material,
            parameters: self.parameters,
            settings: self.settings,
            constants: self.constants,
        })
    }
}

#[derive(Clone, Debug)]
/// The energies and table rows of a completed sweep
pub struct SweepResult<T> {
    /// Energy levels in meV indexed as `[level][point]`: the ground state, the tracked first
    /// excited state and optionally the highest state
    pub energies: Vec<Vec<T>>,
    /// The ratio `V / t` at each point
    pub x: Vec<T>,
    /// One table row per point
    pub rows: Vec<SweepPoint<T>>,
}

impl<T: Copy> SweepResult<T> {
    /// The ground state energies
    pub fn ground(&self) -> &[T] {
        &self.energies[0]
    }

    /// The tracked first excited energies
    pub fn first_excited(&self) -> &[T] {
        &self.energies[1]
    }

    /// The highest energies, if they were kept
    pub fn second_excited(&self) -> Option<&[T]> {
        self.energies.get(2).map(|energies| energies.as_slice())
    }

    /// The number of sweep points
    pub fn number_of_points(&self) -> usize {
        self.x.len()
    }
}

impl<'a, T: Copy + RealField> InteractingSweep<'a, T> {
    /// Runs every point of the sweep in order
    ///
    /// A failed diagonalisation aborts the whole sweep.
    #[tracing::instrument(name = "Interacting sweep", level = "info", skip(self))]
    pub fn run(&self) -> Result<SweepResult<T>, SweepError> {
        let electrons = self.parameters.electrons;
        let points = self.parameters.points;
        let interactions = qwire_sampler::sample(
            self.parameters.interaction_range,
            points,
            self.parameters.interaction_reversed,
        );
        let confinements = qwire_sampler::sample(
            self.material.confinement_range(),
            points,
            self.parameters.confinement_reversed,
        );

        let tolerance = T::from_f64(self.settings.eigen_tolerance).unwrap();
        let mut tracker = OverlapTracker::seeded(
            electrons,
            T::from_f64(self.settings.overlap_tie_tolerance).unwrap(),
        );

        let mut ground = Vec::with_capacity(points);
        let mut first_excited = Vec::with_capacity(points);
        let mut second_excited = Vec::with_capacity(points);
        let mut x = Vec::with_capacity(points);
        let mut rows = Vec::with_capacity(points);

        let progress = progress_bar(points);
        for (index, (&interaction, &confinement)) in
            interactions.iter().zip(confinements.iter()).enumerate()
        {
            let spectrum = HamiltonianBuilder::new()
                .with_sites(electrons)
                .with_confinement(confinement)
                .with_interaction(interaction)
                .build()?
                .diagonalise(tolerance, self.settings.maximum_iterations)
                .ok_or(SweepError::Diagonalisation { index })?;

            let e_g = spectrum.ground_state_energy();
            let e_2 = spectrum.highest_energy();
            let e_1 = if index == 0 {
                // The seed is exact without interaction, so the first point is not tracked
                T::from_f64(1.5).unwrap() * T::from_usize(electrons).unwrap() * confinement
            } else {
                let selection = tracker.step(&spectrum);
                tracing::trace!(
                    "Point {}: tracked state {} with overlap {}",
                    index,
                    selection.index,
                    selection.overlap
                );
                selection.energy
            };

            let row = SweepPoint::evaluate(
                index,
                (interaction, confinement),
                (
                    e_g,
                    e_1,
                    self.parameters.include_second_excited.then(|| e_2),
                ),
                self.material,
                self.constants,
            );

            ground.push(e_g);
            first_excited.push(e_1);
            second_excited.push(e_2);
            x.push(row.ratio);
            rows.push(row);
            progress.inc(1);
        }
        progress.finish_and_clear();

        let mut energies = vec![ground, first_excited];
        if self.parameters.include_second_excited {
            energies.push(second_excited);
        }
        Ok(SweepResult { energies, x, rows })
    }
}

fn progress_bar(points: usize) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("{prefix:.bold.dim} {msg} [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    let progress = ProgressBar::with_draw_target(Some(points as u64), ProgressDrawTarget::stderr());
    progress.set_style(style);
    progress.set_message("Sweeping");
    progress
}

/// Renders the sweep table, dropping the last column when the highest state was not kept
pub fn render_sweep_table<Sink: ReportingSink>(
    result: &SweepResult<f64>,
    sink: &mut Sink,
) -> Result<(), ReportError> {
    let columns = if result.second_excited().is_some() {
        METRIC_FIELDS.len()
    } else {
        METRIC_FIELDS.len() - 1
    };
    let rows = result.rows.iter().map(SweepPoint::row).collect::<Vec<_>>();
    sink.render_table(&METRIC_FIELDS[..columns], &rows)
}
