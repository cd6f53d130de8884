//! Eigen-decomposition of a Hamiltonian with the eigenpairs in ascending order

use nalgebra::{DMatrix, DVector, RealField, SymmetricEigen};

#[derive(Clone, Debug)]
/// Eigenvalues in ascending order, with the eigenvectors as the columns of a matrix in the same
/// order
pub struct Spectrum<T: RealField> {
    eigenvalues: DVector<T>,
    eigenvectors: DMatrix<T>,
}

impl<T: Copy + RealField> Spectrum<T> {
    /// Diagonalises the symmetric `matrix`
    ///
    /// Returns `None` if the iteration did not converge to `tolerance` within `max_iterations`,
    /// zero iterations places no limit on the iteration count.
    pub(crate) fn of_symmetric(
        matrix: DMatrix<T>,
        tolerance: T,
        max_iterations: usize,
    ) -> Option<Self> {
        let eigen = SymmetricEigen::try_new(matrix, tolerance, max_iterations)?;

        // The decomposition makes no promise about ordering
        let mut order = (0..eigen.eigenvalues.len()).collect::<Vec<_>>();
        order.sort_by(|&a, &b| {
            eigen.eigenvalues[a]
                .partial_cmp(&eigen.eigenvalues[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let eigenvalues = DVector::from_iterator(
            order.len(),
            order.iter().map(|&index| eigen.eigenvalues[index]),
        );
        let eigenvectors = DMatrix::from_fn(order.len(), order.len(), |row, column| {
            eigen.eigenvectors[(row, order[column])]
        });

        Some(Self {
            eigenvalues,
            eigenvectors,
        })
    }

    /// The eigenvalues in ascending order
    pub fn eigenvalues(&self) -> &DVector<T> {
        &self.eigenvalues
    }

    /// The normalised eigenvectors, column `j` belonging to eigenvalue `j`
    pub fn eigenvectors(&self) -> &DMatrix<T> {
        &self.eigenvectors
    }

    /// The number of eigenpairs
    pub fn dimension(&self) -> usize {
        self.eigenvalues.len()
    }

    /// The lowest eigenvalue
    pub fn ground_state_energy(&self) -> T {
        self.eigenvalues[0]
    }

    /// The highest eigenvalue
    pub fn highest_energy(&self) -> T {
        self.eigenvalues[self.eigenvalues.len() - 1]
    }
}
