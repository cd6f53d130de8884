use nalgebra::{DMatrix, RealField};

/// Tests for symmetry of a real square matrix, relative to the largest element
pub(crate) fn is_symmetric<T: Copy + RealField>(matrix: &DMatrix<T>) -> bool {
    if !matrix.is_square() {
        return false;
    }
    let mut scale = matrix
        .iter()
        .fold(T::zero(), |largest, value| largest.max(value.abs()));
    if scale == T::zero() {
        scale = T::one();
    }
    let tolerance = T::default_epsilon() * T::from_f64(100.).unwrap() * scale;
    (0..matrix.nrows()).all(|row| {
        (row + 1..matrix.ncols())
            .all(|column| (matrix[(row, column)] - matrix[(column, row)]).abs() <= tolerance)
    })
}
