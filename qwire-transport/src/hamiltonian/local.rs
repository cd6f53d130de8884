//! Site level constructors for the Hamiltonian matrix
//!
//! Each site is truncated to the three lowest states of its confining potential. In this basis the
//! single-site operator is tridiagonal, with eigenvalues `t / 2`, `3t / 2` and `5t / 2`, and the
//! interaction between neighbouring electrons is diagonal in the product basis of the pair.

use nalgebra::{DMatrix, DVector, RealField};
use numeric_literals::replace_float_literals;

/// Number of states retained on each site
pub const LOCAL_DIMENSION: usize = 3;

/// The single-site operator `t h_1`
#[replace_float_literals(T::from_f64(literal).unwrap())]
pub fn single_site<T: Copy + RealField>(confinement: T) -> DMatrix<T> {
    let hopping = -(2.).sqrt() / 2.;
    #[rustfmt::skip]
    let h1 = DMatrix::from_row_slice(LOCAL_DIMENSION, LOCAL_DIMENSION, &[
        1.5,     hopping, 0.,
        hopping, 1.5,     hopping,
        0.,      hopping, 1.5,
    ]);
    h1 * confinement
}

/// The interaction between two neighbouring sites with strength `interaction`
///
/// The operator acts on the nine product states `(a, b)` of the pair and is diagonal, with the
/// coupling falling off as `1 / sqrt(1 + (a - b)^2)`.
#[replace_float_literals(T::from_f64(literal).unwrap())]
pub fn pair_interaction<T: Copy + RealField>(interaction: T) -> DMatrix<T> {
    let dimension = LOCAL_DIMENSION * LOCAL_DIMENSION;
    let diagonal = DVector::from_fn(dimension, |index, _| {
        let separation = T::from_usize(index / LOCAL_DIMENSION).unwrap()
            - T::from_usize(index % LOCAL_DIMENSION).unwrap();
        interaction / (1. + separation.powi(2)).sqrt()
    });
    DMatrix::from_diagonal(&diagonal)
}

/// The first excited eigenvector of `h_1`, which does not depend on `t`
#[replace_float_literals(T::from_f64(literal).unwrap())]
pub fn first_excited_state<T: Copy + RealField>() -> DVector<T> {
    let amplitude = 1. / (2.).sqrt();
    DVector::from_column_slice(&[-amplitude, 0., amplitude])
}
