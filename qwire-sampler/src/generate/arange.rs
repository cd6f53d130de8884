use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Evenly spaced values in `[start, stop)` separated by `step`
///
/// The number of points is `ceil((stop - start) / step)` and the values are computed as
/// `start + i * step` so rounding does not accumulate along the grid. A non-positive step, or
/// a `stop` at or below `start`, gives an empty grid.
pub fn arange<T>(start: T, stop: T, step: T) -> Vec<T>
where
    T: Copy + RealField + ToPrimitive,
{
    if step <= T::zero() || stop <= start {
        return Vec::new();
    }
    let number_of_points = ((stop - start) / step)
        .ceil()
        .to_usize()
        .unwrap_or_default();

    (0..number_of_points)
        .map(|i| start + T::from_usize(i).expect("Must be able to fit usize in T") * step)
        .collect()
}

#[cfg(test)]
mod test {
    use super::arange;
    use approx::assert_relative_eq;

    #[test]
    fn unit_steps_exclude_the_end_point() {
        assert_eq!(arange(0_f64, 5., 1.), vec![0., 1., 2., 3., 4.]);
    }

    #[test]
    fn fractional_steps_cover_the_interval() {
        let grid = arange(-2_f64, 10., 0.1);
        assert_eq!(grid.len(), 120);
        assert_relative_eq!(grid[0], -2.);
        assert_relative_eq!(grid[119], 9.9, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_inputs_give_empty_grids() {
        assert!(arange(0_f64, 1., 0.).is_empty());
        assert!(arange(0_f64, 1., -0.1).is_empty());
        assert!(arange(1_f64, 1., 0.1).is_empty());
    }
}
