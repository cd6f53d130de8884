//! Global assembly of the many-body `Hamiltonian`
//!
//! This module takes the site and pair operators produced in the local submodule and expands each
//! of them onto the full space of the chain before summing.

use super::{
    expansion::{OperatorExpansion, TensorExpander},
    local::{pair_interaction, single_site, LOCAL_DIMENSION},
    spectrum::Spectrum,
};
use crate::{error::BuildError, utilities::matrices::is_symmetric};
use nalgebra::{DMatrix, RealField};

#[derive(Clone, Debug)]
/// The many-body Hamiltonian of a chain of electrons
pub struct Hamiltonian<T: RealField> {
    matrix: DMatrix<T>,
}

impl<T: Copy + RealField> Hamiltonian<T> {
    /// The dense operator on the full space of the chain
    pub fn matrix(&self) -> &DMatrix<T> {
        &self.matrix
    }

    /// Return the number of rows in the full `Hamiltonian` matrix
    pub fn dimension(&self) -> usize {
        self.matrix.nrows()
    }

    /// Diagonalise, consuming the operator
    ///
    /// Returns `None` when the decomposition fails to converge
    pub fn diagonalise(self, tolerance: T, max_iterations: usize) -> Option<Spectrum<T>> {
        Spectrum::of_symmetric(self.matrix, tolerance, max_iterations)
    }
}

/// Builder for a `Hamiltonian` from the number of sites, the confinement energy `t` and the
/// interaction energy `V`
pub struct HamiltonianBuilder<Sites, Confinement, Interaction> {
    sites: Sites,
    confinement: Confinement,
    interaction: Interaction,
}

impl HamiltonianBuilder<(), (), ()> {
    /// Initialize an empty instance of HamiltonianBuilder
    pub fn new() -> Self {
        Self {
            sites: (),
            confinement: (),
            interaction: (),
        }
    }
}

impl Default for HamiltonianBuilder<(), (), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Sites, Confinement, Interaction> HamiltonianBuilder<Sites, Confinement, Interaction> {
    /// Set the number of electrons in the chain
    pub fn with_sites(self, sites: usize) -> HamiltonianBuilder<usize, Confinement, Interaction> {
        HamiltonianBuilder {
            sites,
            confinement: self.confinement,
            interaction: self.interaction,
        }
    }

    /// Set the confinement energy `t`
    pub fn with_confinement<T>(self, confinement: T) -> HamiltonianBuilder<Sites, T, Interaction> {
        HamiltonianBuilder {
            sites: self.sites,
            confinement,
            interaction: self.interaction,
        }
    }

    /// Set the interaction energy `V` between neighbouring electrons
    pub fn with_interaction<T>(self, interaction: T) -> HamiltonianBuilder<Sites, Confinement, T> {
        HamiltonianBuilder {
            sites: self.sites,
            confinement: self.confinement,
            interaction,
        }
    }
}

impl<T: Copy + RealField> HamiltonianBuilder<usize, T, T> {
    /// Builds an instance of `Hamiltonian` from a `HamiltonianBuilder`
    #[tracing::instrument(name = "Hamiltonian Builder", level = "trace", skip(self))]
    pub fn build(self) -> Result<Hamiltonian<T>, BuildError> {
        Hamiltonian::build_operator(
            &TensorExpander::new(LOCAL_DIMENSION),
            self.sites,
            self.confinement,
            self.interaction,
        )
    }
}

impl<T: Copy + RealField> Hamiltonian<T> {
    /// Sums the expanded single-site operators and the expanded operators of every neighbouring
    /// pair
    fn build_operator<Expander: OperatorExpansion<T>>(
        expander: &Expander,
        sites: usize,
        confinement: T,
        interaction: T,
    ) -> Result<Self, BuildError> {
        let site_operator = single_site(confinement);
        let pair_operator = pair_interaction(interaction);

        let dimension = LOCAL_DIMENSION.pow(sites as u32);
        let mut matrix = DMatrix::zeros(dimension, dimension);

        tracing::trace!("Expanding the confinement onto {} sites", sites);
        for site in 0..sites {
            matrix += expander.expand(site, &site_operator, sites)?;
        }

        tracing::trace!("Expanding the interaction onto {} pairs", sites.saturating_sub(1));
        for pair in 0..sites.saturating_sub(1) {
            matrix += expander.expand(pair, &pair_operator, sites)?;
        }

        debug_assert!(is_symmetric(&matrix), "Hamiltonian must be symmetric");
        Ok(Self { matrix })
    }
}

#[cfg(test)]
mod test {
    use super::HamiltonianBuilder;
    use crate::hamiltonian::{pair_interaction, single_site};
    use approx::assert_relative_eq;
    use itertools::Itertools;
    use matrixcompare::assert_matrix_eq;
    use nalgebra::DMatrix;
    use rand::Rng;

    #[test]
    fn hamiltonian_is_symmetric() {
        let mut rng = rand::thread_rng();
        let t: f64 = rng.gen_range(0.5..5.);
        let v: f64 = rng.gen_range(0.0..10.);
        let hamiltonian = HamiltonianBuilder::new()
            .with_sites(3)
            .with_confinement(t)
            .with_interaction(v)
            .build()
            .unwrap();
        assert_eq!(hamiltonian.dimension(), 27);
        let matrix = hamiltonian.matrix();
        assert_matrix_eq!(matrix.clone(), matrix.transpose(), comp = abs, tol = 1e-12);
    }

    #[test]
    fn two_site_hamiltonian_matches_explicit_construction() {
        let (t, v) = (1.2_f64, 0.7_f64);
        let hamiltonian = HamiltonianBuilder::new()
            .with_sites(2)
            .with_confinement(t)
            .with_interaction(v)
            .build()
            .unwrap();

        let i3 = DMatrix::<f64>::identity(3, 3);
        let h1 = single_site(t);
        let explicit = h1.kronecker(&i3) + i3.kronecker(&h1) + pair_interaction(v);
        assert_matrix_eq!(hamiltonian.matrix().clone(), explicit, comp = abs, tol = 1e-12);
    }

    #[test]
    fn every_neighbouring_pair_contributes_to_the_interaction() {
        // With no confinement the Hamiltonian is the diagonal interaction, and the all-ground
        // state of four sites sits on three pairs of strength V
        let v = 2_f64;
        let hamiltonian = HamiltonianBuilder::new()
            .with_sites(4)
            .with_confinement(0_f64)
            .with_interaction(v)
            .build()
            .unwrap();
        assert_relative_eq!(hamiltonian.matrix()[(0, 0)], 3. * v);
        assert_relative_eq!(hamiltonian.matrix().trace(), {
            // Each pair sums its nine couplings over the 9 states of the remaining two sites
            let pair_trace = pair_interaction(v).trace();
            3. * 9. * pair_trace
        }, max_relative = 1e-12);
    }

    #[test]
    fn decoupled_sites_have_a_ladder_spectrum() {
        let t = 1.7_f64;
        let sites = 3;
        let spectrum = HamiltonianBuilder::new()
            .with_sites(sites)
            .with_confinement(t)
            .with_interaction(0_f64)
            .build()
            .unwrap()
            .diagonalise(f64::EPSILON, 0)
            .unwrap();

        // Every product of single-site levels (k_i + 1/2) t, with the levels summed
        let expected = (0..sites)
            .map(|_| 0..3)
            .multi_cartesian_product()
            .map(|levels| (sites as f64 / 2. + levels.iter().sum::<usize>() as f64) * t)
            .sorted_by(|a, b| a.partial_cmp(b).unwrap())
            .collect::<Vec<_>>();

        assert_eq!(spectrum.dimension(), expected.len());
        for (value, expected) in spectrum.eigenvalues().iter().zip(expected.iter()) {
            assert_relative_eq!(*value, *expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn a_single_site_has_no_interaction() {
        let t = 1.1_f64;
        let hamiltonian = HamiltonianBuilder::new()
            .with_sites(1)
            .with_confinement(t)
            .with_interaction(5_f64)
            .build()
            .unwrap();
        assert_matrix_eq!(hamiltonian.matrix().clone(), single_site(t), comp = abs, tol = 1e-14);
    }
}
