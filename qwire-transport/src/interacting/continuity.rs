//! Identification of the first excited state across a sweep
//!
//! The first excited level of the chain is not a fixed index in the sorted spectrum: as the
//! interaction grows levels cross, and the state that started out as the first excitation can
//! move up or down the ladder. Rather than picking an index, the state is followed by overlap.
//! At each sweep point the eigenvector with the largest overlap magnitude with the previously
//! tracked state is taken as the new first excited state.
//!
//! The tracker is the state of a fold over the sweep points. It is seeded with the product of
//! single-site first excited states, which is exact in the absence of interaction.

use crate::hamiltonian::{first_excited_state, Spectrum};
use nalgebra::{DVector, RealField};

#[derive(Copy, Clone, Debug, PartialEq)]
/// The eigenpair picked out at one sweep point
pub struct Selection<T> {
    /// Index into the ascending spectrum
    pub index: usize,
    /// The eigenvalue of the selected state
    pub energy: T,
    /// Magnitude of the overlap with the previously tracked state
    pub overlap: T,
}

#[derive(Clone, Debug)]
/// Follows the first excited state through a sweep by maximal overlap with the previous point
pub struct OverlapTracker<T: RealField> {
    tracked: DVector<T>,
    tie_tolerance: T,
}

impl<T: Copy + RealField> OverlapTracker<T> {
    /// Starts tracking from `tracked`
    pub fn new(tracked: DVector<T>, tie_tolerance: T) -> Self {
        Self {
            tracked,
            tie_tolerance,
        }
    }

    /// Starts tracking from the product of single-site first excited states of a chain of
    /// `sites` electrons
    pub fn seeded(sites: usize, tie_tolerance: T) -> Self {
        let local = first_excited_state::<T>();
        let tracked = (0..sites).fold(DVector::from_element(1, T::one()), |product, _| {
            product.kronecker(&local)
        });
        Self::new(tracked, tie_tolerance)
    }

    /// The state selected at the previous point
    pub fn tracked(&self) -> &DVector<T> {
        &self.tracked
    }

    /// Advances the fold by one sweep point
    ///
    /// The candidates are every eigenvector but the ground state and the highest state. They are
    /// scanned in ascending order and the first with the maximal overlap magnitude wins. The
    /// tracked state is replaced by the winner.
    pub fn step(&mut self, spectrum: &Spectrum<T>) -> Selection<T> {
        debug_assert_eq!(
            spectrum.dimension(),
            self.tracked.len(),
            "tracked state and spectrum must share a space"
        );
        let eigenvectors = spectrum.eigenvectors();
        let last = spectrum.dimension().saturating_sub(2).max(1);

        let overlaps = (1..=last)
            .map(|index| (index, eigenvectors.column(index).dot(&self.tracked).abs()))
            .collect::<Vec<_>>();

        let (index, overlap) = overlaps
            .iter()
            .copied()
            .fold(None, |best: Option<(usize, T)>, (index, overlap)| match best {
                Some((_, best_overlap)) if overlap <= best_overlap => best,
                _ => Some((index, overlap)),
            })
            .unwrap_or((1, T::zero()));

        let ties = overlaps
            .iter()
            .filter(|(other, value)| *other != index && overlap - *value <= self.tie_tolerance)
            .map(|(other, _)| *other)
            .collect::<Vec<_>>();
        if !ties.is_empty() {
            tracing::debug!(
                "State {} was selected over near-degenerate overlaps at {:?}",
                index,
                ties
            );
        }

        self.tracked = eigenvectors.column(index).into_owned();
        Selection {
            index,
            energy: spectrum.eigenvalues()[index],
            overlap,
        }
    }
}
