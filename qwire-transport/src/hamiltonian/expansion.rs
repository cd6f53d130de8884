//! Expansion of local operators onto the full tensor-product space of the chain

use crate::error::BuildError;
use nalgebra::{DMatrix, RealField};

/// Places an operator acting on a few sites into the space of the whole chain
pub trait OperatorExpansion<T: RealField> {
    /// Expands `local_operator`, whose first site is `site_index`, to act on a chain of
    /// `total_sites` sites
    ///
    /// The local operator may span several consecutive sites, in which case its dimension is the
    /// local dimension raised to the number of spanned sites.
    fn expand(
        &self,
        site_index: usize,
        local_operator: &DMatrix<T>,
        total_sites: usize,
    ) -> Result<DMatrix<T>, BuildError>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Pads local operators with identities through Kronecker products
///
/// An operator spanning `k` sites from `site_index` becomes
/// `I_{d^site_index} ⊗ op ⊗ I_{d^(total_sites - site_index - k)}`
pub struct TensorExpander {
    local_dimension: usize,
}

impl TensorExpander {
    /// An expander for sites of dimension `local_dimension`
    pub fn new(local_dimension: usize) -> Self {
        Self { local_dimension }
    }

    /// The dimension of the space spanned by `sites` sites
    pub fn dimension(&self, sites: usize) -> usize {
        self.local_dimension.pow(sites as u32)
    }

    /// The number of sites spanned by a square operator of dimension `dimension`
    fn span(&self, dimension: usize) -> Result<usize, BuildError> {
        let mismatch = || BuildError::DimensionMismatch {
            local_dimension: self.local_dimension,
            found: dimension,
        };
        if self.local_dimension < 2 || dimension < self.local_dimension {
            return Err(mismatch());
        }
        let mut remainder = dimension;
        let mut span = 0;
        while remainder > 1 {
            if remainder % self.local_dimension != 0 {
                return Err(mismatch());
            }
            remainder /= self.local_dimension;
            span += 1;
        }
        Ok(span)
    }
}

impl<T: Copy + RealField> OperatorExpansion<T> for TensorExpander {
    fn expand(
        &self,
        site_index: usize,
        local_operator: &DMatrix<T>,
        total_sites: usize,
    ) -> Result<DMatrix<T>, BuildError> {
        if !local_operator.is_square() {
            return Err(BuildError::NotSquare {
                rows: local_operator.nrows(),
                columns: local_operator.ncols(),
            });
        }
        let span = self.span(local_operator.nrows())?;
        if site_index + span > total_sites {
            return Err(BuildError::SiteOutOfRange {
                site: site_index,
                span,
                total: total_sites,
            });
        }

        let left = DMatrix::<T>::identity(self.dimension(site_index), self.dimension(site_index));
        let trailing = self.dimension(total_sites - site_index - span);
        let right = DMatrix::<T>::identity(trailing, trailing);
        Ok(left.kronecker(local_operator).kronecker(&right))
    }
}

#[cfg(test)]
mod test {
    use super::{OperatorExpansion, TensorExpander};
    use crate::error::BuildError;
    use matrixcompare::assert_matrix_eq;
    use nalgebra::DMatrix;
    use rand::Rng;

    fn random_operator(dimension: usize) -> DMatrix<f64> {
        let mut rng = rand::thread_rng();
        DMatrix::from_fn(dimension, dimension, |_, _| rng.gen_range(-1.0..1.0))
    }

    #[test]
    fn single_site_operator_matches_explicit_kronecker_products() {
        let expander = TensorExpander::new(3);
        let op = random_operator(3);
        let i3 = DMatrix::<f64>::identity(3, 3);

        let expanded = expander.expand(1, &op, 3).unwrap();
        let explicit = i3.kronecker(&op).kronecker(&i3);
        assert_matrix_eq!(expanded, explicit, comp = float);
    }

    #[test]
    fn operators_at_the_chain_ends_are_padded_on_one_side() {
        let expander = TensorExpander::new(3);
        let op = random_operator(3);
        let i9 = DMatrix::<f64>::identity(9, 9);

        let first = expander.expand(0, &op, 3).unwrap();
        assert_matrix_eq!(first, op.kronecker(&i9), comp = float);

        let last = expander.expand(2, &op, 3).unwrap();
        assert_matrix_eq!(last, i9.kronecker(&op), comp = float);
    }

    #[test]
    fn two_site_operators_are_padded_around_both_sites() {
        let expander = TensorExpander::new(3);
        let op = random_operator(9);
        let i3 = DMatrix::<f64>::identity(3, 3);

        let expanded = expander.expand(1, &op, 4).unwrap();
        assert_eq!(expanded.nrows(), 81);
        let explicit = i3.kronecker(&op).kronecker(&i3);
        assert_matrix_eq!(expanded, explicit, comp = float);
    }

    #[test]
    fn an_operator_filling_the_chain_is_unchanged() {
        let expander = TensorExpander::new(3);
        let op = random_operator(9);
        let expanded = expander.expand(0, &op, 2).unwrap();
        assert_matrix_eq!(expanded, op, comp = float);
    }

    #[test]
    fn operators_overhanging_the_chain_are_rejected() {
        let expander = TensorExpander::new(3);
        let op = random_operator(9);
        assert!(matches!(
            expander.expand(2, &op, 3),
            Err(BuildError::SiteOutOfRange {
                site: 2,
                span: 2,
                total: 3
            })
        ));
    }

    #[test]
    fn operators_of_the_wrong_dimension_are_rejected() {
        let expander = TensorExpander::new(3);
        assert!(matches!(
            expander.expand(0, &random_operator(4), 3),
            Err(BuildError::DimensionMismatch { found: 4, .. })
        ));
        assert!(matches!(
            expander.expand(0, &DMatrix::<f64>::zeros(3, 9), 3),
            Err(BuildError::NotSquare { rows: 3, columns: 9 })
        ));
    }
}
