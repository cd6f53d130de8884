use nalgebra::RealField;

/// Builder for a sampled range, mirroring the arguments of [`sample`]
///
/// ```
/// use qwire_sampler::RangeSampler;
///
/// let values: Vec<f64> = RangeSampler::new()
///     .with_range((0.0, 10.0))
///     .with_number_of_points(5)
///     .reversed(true)
///     .build();
/// assert_eq!(values, vec![8.0, 6.0, 4.0, 2.0, 0.0]);
/// ```
pub struct RangeSampler<Range> {
    range: Range,
    number_of_points: usize,
    reverse: bool,
}

impl RangeSampler<()> {
    pub fn new() -> Self {
        Self {
            range: (),
            number_of_points: 0,
            reverse: false,
        }
    }
}

impl Default for RangeSampler<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Range> RangeSampler<Range> {
    pub fn with_range<T>(self, range: (T, T)) -> RangeSampler<(T, T)> {
        RangeSampler {
            range,
            number_of_points: self.number_of_points,
            reverse: self.reverse,
        }
    }

    pub fn with_number_of_points(self, number_of_points: usize) -> Self {
        Self {
            number_of_points,
            ..self
        }
    }

    /// Whether the generated sequence should be traversed from the upper bound downward
    pub fn reversed(self, reverse: bool) -> Self {
        Self { reverse, ..self }
    }
}

impl<T: Copy + RealField> RangeSampler<(T, T)> {
    pub fn build(self) -> Vec<T> {
        sample(self.range, self.number_of_points, self.reverse)
    }
}

/// Generates `steps` values spanning `range`
///
/// When the range has zero width the result is `steps` copies of the bound. Otherwise the
/// interval is treated as half-open: the step is `(hi - lo) / steps` and the sequence runs
/// `lo, lo + step, ..` for exactly `steps` elements, so `hi` itself is never produced.
///
/// `reverse` only changes the traversal order, not the set of values. A `steps` of zero
/// gives an empty sequence.
pub fn sample<T: Copy + RealField>(range: (T, T), steps: usize, reverse: bool) -> Vec<T> {
    let (lower, upper) = range;
    if lower == upper {
        return vec![lower; steps];
    }

    let number_of_steps = T::from_usize(steps).expect("Must be able to fit usize in T");
    let step_size = (upper - lower) / number_of_steps;

    let mut output: Vec<T> = (0..steps)
        .map(|i| lower + T::from_usize(i).expect("Must be able to fit usize in T") * step_size)
        .collect();

    if reverse {
        output.reverse();
    }
    output
}

#[cfg(test)]
mod test {
    use super::{sample, RangeSampler};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn degenerate_range_repeats_the_bound() {
        for steps in 1..20 {
            let values = sample((3.5_f64, 3.5), steps, false);
            assert_eq!(values.len(), steps);
            assert!(values.iter().all(|&value| value == 3.5));
        }
    }

    #[test]
    fn upper_bound_is_excluded() {
        let values = sample((0_f64, 10.), 5, false);
        assert_eq!(values, vec![0., 2., 4., 6., 8.]);
    }

    #[test]
    fn descending_ranges_step_downward() {
        let values = sample((1_f64, 0.), 4, false);
        for (value, expected) in values.iter().zip([1., 0.75, 0.5, 0.25]) {
            assert_relative_eq!(*value, expected);
        }
    }

    #[test]
    fn zero_steps_gives_an_empty_grid() {
        assert!(sample((0_f64, 1.), 0, false).is_empty());
        assert!(sample((1_f64, 1.), 0, true).is_empty());
    }

    #[test]
    fn builder_matches_free_function() {
        let built: Vec<f64> = RangeSampler::new()
            .with_number_of_points(7)
            .with_range((-1.0, 2.5))
            .reversed(true)
            .build();
        assert_eq!(built, sample((-1.0, 2.5), 7, true));
    }

    proptest! {
        #[test]
        fn reversal_only_changes_the_order(
            lower in -100_f64..100.,
            width in 0.001_f64..50.,
            steps in 1_usize..200,
        ) {
            let forward = sample((lower, lower + width), steps, false);
            let mut backward = sample((lower, lower + width), steps, true);
            backward.reverse();
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn length_always_matches_the_requested_steps(
            lower in -100_f64..100.,
            upper in -100_f64..100.,
            steps in 0_usize..200,
        ) {
            prop_assert_eq!(sample((lower, upper), steps, false).len(), steps);
        }
    }
}
