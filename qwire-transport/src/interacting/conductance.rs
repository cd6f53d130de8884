//! Curves derived from the energy levels of a sweep
//!
//! Every energy level of a sweep point opens a conductance channel once the Fermi energy passes
//! its threshold above the ground state. The channel opens as a unit-width logistic step.

use super::SweepResult;
use crate::report::{Curve, PlotFrame, ReportError, ReportingSink};
use ndarray::{Array1, ArrayView1};

/// Lower edge of the conductance energy axis in meV
const ENERGY_AXIS_START: f64 = -5.;
/// Extent of the energy axis allotted to each level in meV
const ENERGY_AXIS_PER_LEVEL: f64 = 6.;

/// The conductance in units of `2e^2 / h` of a set of levels with the given thresholds
pub fn level_conductance(thresholds: &[f64], x: ArrayView1<f64>) -> Array1<f64> {
    thresholds
        .iter()
        .fold(Array1::zeros(x.len()), |acc, &threshold| {
            acc + x.mapv(|x| 1. / (1. + (-(x - threshold)).exp()))
        })
}

/// Renders one level-threshold conductance curve per sweep point, successive curves displaced
/// by `offset`
#[tracing::instrument(name = "Level conductance", level = "info", skip_all)]
pub fn plot_level_conductance<Sink: ReportingSink>(
    result: &SweepResult<f64>,
    offset: f64,
    energy_step: f64,
    sink: &mut Sink,
) -> Result<(), ReportError> {
    let levels = result.energies.len();
    let curves = result.number_of_points();
    let x = Array1::from(qwire_sampler::arange(
        ENERGY_AXIS_START,
        offset * curves as f64 + levels as f64 * ENERGY_AXIS_PER_LEVEL,
        energy_step,
    ));
    let frame = PlotFrame::new("Conductance Plot", "E (meV)", "G (2e^2/h)")
        .with_y_limit(0., levels as f64);

    for point in 0..curves {
        let ground = result.energies[0][point];
        let thresholds = result
            .energies
            .iter()
            .map(|level| level[point] - ground)
            .collect::<Vec<_>>();
        let shifted = x.mapv(|x| x - point as f64 * offset);
        let y = level_conductance(&thresholds, shifted.view());
        sink.render_plot(&frame, Curve::new(x.to_vec(), y.to_vec()))?;
    }
    Ok(())
}

/// Renders each energy level against `V / t`
pub fn energy_level_curves<Sink: ReportingSink>(
    result: &SweepResult<f64>,
    sink: &mut Sink,
) -> Result<(), ReportError> {
    let frame = PlotFrame::new("Subbands energy", "V/t", "E (meV)");
    for (level, energies) in result.energies.iter().enumerate() {
        let label = match level {
            0 => "ground state".to_string(),
            level => format!("excited state {}", level),
        };
        sink.render_plot(
            &frame,
            Curve::new(result.x.clone(), energies.clone()).with_label(label),
        )?;
    }
    Ok(())
}

/// Renders the gap between the ground and first excited states against `V / t`
pub fn energy_gap_curve<Sink: ReportingSink>(
    result: &SweepResult<f64>,
    sink: &mut Sink,
) -> Result<(), ReportError> {
    let frame = PlotFrame::new(
        "Energy gap between ground and 1st excited state",
        "V/t",
        "delta E (meV)",
    );
    let gap = result
        .first_excited()
        .iter()
        .zip(result.ground().iter())
        .map(|(first, ground)| first - ground)
        .collect();
    sink.render_plot(&frame, Curve::new(result.x.clone(), gap))
}

#[cfg(test)]
mod test {
    use super::{energy_gap_curve, energy_level_curves, level_conductance, plot_level_conductance};
    use crate::{interacting::SweepResult, report::MemorySink};
    use approx::assert_relative_eq;
    use ndarray::Array1;

    fn result() -> SweepResult<f64> {
        SweepResult {
            energies: vec![vec![1., 1.5], vec![3., 3.], vec![5., 6.]],
            x: vec![0., 0.5],
            rows: Vec::new(),
        }
    }

    #[test]
    fn each_level_contributes_a_half_at_its_threshold() {
        let x = Array1::from(vec![0., 2., 100.]);
        let g = level_conductance(&[0., 2.], x.view());
        assert_relative_eq!(g[0], 0.5 + 1. / (1. + 2_f64.exp()), epsilon = 1e-12);
        assert_relative_eq!(g[1], 1. / (1. + (-2_f64).exp()) + 0.5, epsilon = 1e-12);
        assert_relative_eq!(g[2], 2., epsilon = 1e-12);
    }

    #[test]
    fn conductance_curves_span_every_level() {
        let mut sink = MemorySink::new();
        plot_level_conductance(&result(), 2., 0.1, &mut sink).unwrap();
        let (frame, _) = &sink.plots[0];
        assert_eq!(frame.y_limit, Some((0., 3.)));

        let curves = sink.curves_titled("Conductance Plot").collect::<Vec<_>>();
        assert_eq!(curves.len(), 2);
        // The axis spans [-5, 2 * 2 + 3 * 6)
        assert_eq!(curves[0].x.len(), 270);
        assert!(curves
            .iter()
            .all(|curve| curve.y.iter().all(|&g| (0. ..=3.).contains(&g))));
    }

    #[test]
    fn levels_are_labelled_from_the_ground_state() {
        let mut sink = MemorySink::new();
        energy_level_curves(&result(), &mut sink).unwrap();
        let labels = sink
            .plots
            .iter()
            .map(|(_, curve)| curve.label.clone().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(labels, ["ground state", "excited state 1", "excited state 2"]);
    }

    #[test]
    fn gap_is_measured_from_the_ground_state() {
        let mut sink = MemorySink::new();
        energy_gap_curve(&result(), &mut sink).unwrap();
        let (_, curve) = &sink.plots[0];
        assert_eq!(curve.y, vec![2., 1.5]);
        assert_eq!(curve.x, vec![0., 0.5]);
    }
}
