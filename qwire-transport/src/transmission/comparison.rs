//! Comparison plots of the conductance for a series of experiments
//!
//! Each experiment contributes one curve, shifted along the energy axis by a fixed offset so
//! neighbouring curves can be told apart.

use super::{ChannelSummation, ExperimentPoint, TransmissionModel, TransmissionModelBuilder};
use crate::{
    constants::PhysicalConstants,
    material::Material,
    report::{Cell, Curve, PlotFrame, ReportError, ReportingSink},
};
use ndarray::Array1;

/// Lower edge of the energy axis, in units of `hw_x`
const ENERGY_AXIS_START: f64 = -2.;

/// Column headings of the comparison table
pub const FIELD_NAMES: [&str; 9] = [
    "hbar w_x (meV)",
    "w_y/ w_x",
    "B (T)",
    "angle (rad)",
    "E1 (meV)",
    "E2 (meV)",
    "eVsd (meV)",
    "hbar w_c (meV)",
    "Zeeman (meV)",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ArgEnum)]
/// The experimental knob stepped between curves of a generated comparison
pub enum SweptQuantity {
    /// Step the source-drain bias
    Bias,
    /// Step the magnetic field
    Field,
}

#[derive(Clone, Debug)]
/// Generates a series of experiments by stepping one quantity away from a base configuration
pub struct ComparisonSweep {
    base: ExperimentPoint<f64>,
    quantity: SweptQuantity,
    increment: f64,
    plots: usize,
}

impl ComparisonSweep {
    /// Steps `quantity` by `increment` away from `base`, for `plots` experiments
    pub fn new(
        base: ExperimentPoint<f64>,
        quantity: SweptQuantity,
        increment: f64,
        plots: usize,
    ) -> Self {
        Self {
            base,
            quantity,
            increment,
            plots,
        }
    }

    /// The generated experiments, starting with the base
    pub fn experiments(&self) -> Vec<ExperimentPoint<f64>> {
        (0..self.plots)
            .map(|i| {
                let mut experiment = self.base;
                let shift = i as f64 * self.increment;
                match self.quantity {
                    SweptQuantity::Bias => experiment.bias += shift,
                    SweptQuantity::Field => experiment.magnetic_field += shift,
                }
                experiment
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug)]
/// Layout of a comparison plot
pub struct ComparisonSettings {
    /// Number of transverse channels
    pub channels: usize,
    /// Which channel indices are summed
    pub summation: ChannelSummation,
    /// Shift between successive curves along the energy axis
    pub offset: f64,
    /// Spacing of the energy axis
    pub energy_step: f64,
}

/// Renders one conductance curve per experiment and a summary table of the model parameters
///
/// Returns the models built for each experiment, in order.
#[tracing::instrument(name = "Comparison plot", level = "info", skip_all)]
pub fn plot_comparison<Sink: ReportingSink>(
    material: &Material<f64>,
    experiments: &[ExperimentPoint<f64>],
    settings: &ComparisonSettings,
    constants: &PhysicalConstants<f64>,
    sink: &mut Sink,
) -> Result<Vec<TransmissionModel<f64>>, ReportError> {
    let plots = experiments.len();
    let x = Array1::from(qwire_sampler::arange(
        ENERGY_AXIS_START,
        settings.offset * plots as f64 + settings.channels as f64 * 2.,
        settings.energy_step,
    ));

    let title = if material.name().is_empty() {
        "Conductance".to_string()
    } else {
        format!("Conductance of {}", material.name())
    };
    let frame = PlotFrame::new(title, "(E_f - U_0) / hbar w_x", "G (2e^2/h)")
        .with_y_limit(0., settings.channels as f64);

    let mut rows = Vec::with_capacity(plots);
    let mut models = Vec::with_capacity(plots);
    for (i, experiment) in experiments.iter().enumerate() {
        let model = TransmissionModelBuilder::new()
            .with_material(material)
            .with_experiment(experiment)
            .with_constants(constants)
            .build();
        if model.is_degenerate() {
            tracing::warn!("Experiment {} has non-finite characteristic energies", i);
        }

        rows.push(table_row(&model));

        let shifted = x.mapv(|x| x - i as f64 * settings.offset);
        let y = model.total_transmission(settings.channels, settings.summation, shifted.view());
        sink.render_plot(&frame, Curve::new(x.to_vec(), y.to_vec()))?;
        models.push(model);
    }

    sink.render_table(&FIELD_NAMES, &rows)?;
    Ok(models)
}

fn table_row(model: &TransmissionModel<f64>) -> Vec<Cell> {
    vec![
        model.hw_x().into(),
        (model.hw_y() / model.hw_x()).into(),
        model.magnetic_field().into(),
        model.angle().into(),
        model.e1().into(),
        model.e2().into(),
        model.bias().into(),
        model.hw_c().into(),
        model.zeeman(0.5).into(),
    ]
}

#[cfg(test)]
mod test {
    use super::{plot_comparison, ComparisonSettings, ComparisonSweep, SweptQuantity};
    use crate::{
        constants::PhysicalConstants, material::Material, report::MemorySink,
        transmission::{ChannelSummation, ExperimentPoint},
    };
    use approx::assert_relative_eq;

    fn base() -> ExperimentPoint<f64> {
        ExperimentPoint {
            hw_x: 1.,
            hw_y_ratio: 2.,
            bias: 0.,
            magnetic_field: 0.,
            angle: 0.,
        }
    }

    #[test]
    fn generated_experiments_step_the_requested_quantity() {
        let bias = ComparisonSweep::new(base(), SweptQuantity::Bias, 0.5, 4).experiments();
        assert_eq!(bias.len(), 4);
        assert_relative_eq!(bias[3].bias, 1.5);
        assert!(bias.iter().all(|e| e.magnetic_field == 0.));

        let field = ComparisonSweep::new(base(), SweptQuantity::Field, 2., 3).experiments();
        assert_relative_eq!(field[2].magnetic_field, 4.);
        assert!(field.iter().all(|e| e.bias == 0.));
    }

    #[test]
    fn one_curve_and_one_row_per_experiment() {
        let material = Material::new("GaAs", 0.04, 0.067);
        let experiments = ComparisonSweep::new(base(), SweptQuantity::Field, 1., 3).experiments();
        let settings = ComparisonSettings {
            channels: 4,
            summation: ChannelSummation::Exclusive,
            offset: 2.,
            energy_step: 0.1,
        };
        let mut sink = MemorySink::new();
        let models = plot_comparison(
            &material,
            &experiments,
            &settings,
            &PhysicalConstants::default(),
            &mut sink,
        )
        .unwrap();

        assert_eq!(models.len(), 3);
        let curves: Vec<_> = sink.curves_titled("Conductance of GaAs").collect();
        assert_eq!(curves.len(), 3);
        // The axis spans [-2, offset * plots + 2 * channels)
        assert_eq!(curves[0].x.len(), 160);
        assert!(curves
            .iter()
            .all(|curve| curve.y.iter().all(|&g| (0. ..=4.).contains(&g))));

        let (fields, rows) = &sink.tables[0];
        assert_eq!(fields.len(), 9);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn offset_curves_are_shifted_copies() {
        let material = Material::new("", 0.04, 0.067);
        let experiments = vec![base(), base()];
        let settings = ComparisonSettings {
            channels: 2,
            summation: ChannelSummation::Exclusive,
            offset: 1.,
            energy_step: 0.1,
        };
        let mut sink = MemorySink::new();
        plot_comparison(
            &material,
            &experiments,
            &settings,
            &PhysicalConstants::default(),
            &mut sink,
        )
        .unwrap();

        let curves: Vec<_> = sink.curves_titled("Conductance").collect();
        // A shift of one unit is ten grid points
        for k in 0..curves[0].y.len() - 10 {
            assert_relative_eq!(curves[0].y[k], curves[1].y[k + 10], epsilon = 1e-9);
        }
    }
}
