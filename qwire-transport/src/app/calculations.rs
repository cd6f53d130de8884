//! # Calculations
//!
//! Delegated functions from `App` to run the non-interacting conductance comparison and the
//! interacting wire sweep
//!

use super::{ConductanceArgs, Configuration, InteractingArgs, QwireError};
use crate::{
    constants::PhysicalConstants,
    interacting::{
        energy_gap_curve, energy_level_curves, plot_level_conductance, render_sweep_table,
        InteractingSweepBuilder, SweepParameters,
    },
    material::{KnownMaterial, Material, WireMaterial},
    reader::{find_material, read_materials, read_setup},
    report::ReportingSink,
    transmission::{plot_comparison, ComparisonSettings, ComparisonSweep, ExperimentPoint},
};

pub(crate) fn conductance<Sink: ReportingSink>(
    args: &ConductanceArgs,
    config: &Configuration,
    constants: &PhysicalConstants<f64>,
    sink: &mut Sink,
) -> Result<(), QwireError> {
    let mut experiments = read_setup(&args.experiment_setup)?;
    apply_overrides(&mut experiments, args.bias, args.field);

    if let (Some(quantity), Some(increment), Some(plots)) =
        (args.compare, args.increment, args.plots)
    {
        if experiments.len() > 1 {
            tracing::warn!(
                "Generating {} experiments from the first of {} rows",
                plots,
                experiments.len()
            );
        }
        experiments = ComparisonSweep::new(experiments[0], quantity, increment, plots).experiments();
    }

    let material = conductance_material(args, config)?;
    tracing::info!(
        "{} experiments, g = {}, m* = {} m_e",
        experiments.len(),
        material.g_factor(),
        material.effective_mass_ratio()
    );

    let settings = ComparisonSettings {
        channels: args.channels,
        summation: args.summation.unwrap_or(config.conductance.summation),
        offset: args.offset.unwrap_or(config.conductance.offset),
        energy_step: config.conductance.energy_step,
    };
    plot_comparison(&material, &experiments, &settings, constants, sink)?;

    if let Some(path) = &args.save {
        sink.save_figure(path)?;
    }
    Ok(())
}

/// Command line values of the bias and field replace those of every experiment
fn apply_overrides(experiments: &mut [ExperimentPoint<f64>], bias: Option<f64>, field: Option<f64>) {
    for experiment in experiments.iter_mut() {
        if let Some(bias) = bias {
            experiment.bias = bias;
        }
        if let Some(field) = field {
            experiment.magnetic_field = field;
        }
    }
}

fn conductance_material(
    args: &ConductanceArgs,
    config: &Configuration,
) -> Result<Material<f64>, QwireError> {
    if let Some(preset) = args.preset {
        return Ok(preset.material());
    }
    match (&args.materials, &args.material) {
        (Some(table), Some(name)) => {
            let materials = read_materials(table)?;
            Ok(find_material(&materials, name)?)
        }
        (None, None) => Ok(Material::new(
            args.material_name.clone().unwrap_or_default(),
            args.g.unwrap_or(config.conductance.g_factor),
            args.eff.unwrap_or(config.conductance.effective_mass_ratio),
        )),
        _ => Err(QwireError::Arguments(
            "a material table and a material name must be given together".into(),
        )),
    }
}

pub(crate) fn interacting<Sink: ReportingSink>(
    args: &InteractingArgs,
    config: &Configuration,
    constants: &PhysicalConstants<f64>,
    sink: &mut Sink,
) -> Result<(), QwireError> {
    let interaction_range = range(&args.interaction, "interaction")?;
    let confinement_range = range(&args.confinement, "confinement")?;

    let material = match (args.preset, args.dielectric, args.eff) {
        (Some(preset), _, _) => preset.wire_material(confinement_range),
        (None, Some(dielectric), Some(eff)) => {
            WireMaterial::new(dielectric, confinement_range, eff, None)
        }
        (None, None, None) => KnownMaterial::GaAs.wire_material(confinement_range),
        _ => {
            return Err(QwireError::Arguments(
                "the dielectric constant and effective mass must be given together".into(),
            ))
        }
    };

    let parameters = SweepParameters {
        electrons: args.electrons,
        interaction_range,
        interaction_reversed: args.interaction_decreasing,
        confinement_reversed: args.confinement_decreasing,
        points: args.points,
        include_second_excited: !args.no_second_excited,
    };

    tracing::info!("{} sweep points", parameters.points);
    if let Some(name) = material.name() {
        tracing::info!("Material: {}", name);
    }
    tracing::info!(
        "Dielectric constant: {} epsilon_0, effective mass: {} m_e",
        material.dielectric_ratio(),
        material.effective_mass_ratio()
    );

    let result = InteractingSweepBuilder::new()
        .with_material(&material)
        .with_parameters(&parameters)
        .with_settings(&config.interacting.sweep)
        .with_constants(constants)
        .build()?
        .run()?;

    render_sweep_table(&result, sink)?;
    if config.output.energy_levels {
        energy_level_curves(&result, sink)?;
    }
    if config.output.energy_gap {
        energy_gap_curve(&result, sink)?;
    }
    if config.output.level_conductance {
        plot_level_conductance(
            &result,
            args.offset.unwrap_or(config.interacting.offset),
            config.interacting.energy_step,
            sink,
        )?;
    }

    if let Some(path) = &args.save {
        sink.save_figure(path)?;
    }
    Ok(())
}

fn range(values: &[f64], name: &str) -> Result<(f64, f64), QwireError> {
    match values {
        [lower, upper] => Ok((*lower, *upper)),
        _ => Err(QwireError::Arguments(format!(
            "the {} range takes a lower and an upper value",
            name
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::{apply_overrides, conductance_material, range};
    use crate::{
        app::{App, Command, Configuration},
        material::KnownMaterial,
        transmission::ExperimentPoint,
    };
    use clap::Parser;

    fn conductance_args(arguments: &[&str]) -> super::ConductanceArgs {
        let cli = App::try_parse_from(
            ["qwire", "conductance", "setup.csv", "3"]
                .iter()
                .chain(arguments.iter())
                .copied(),
        )
        .unwrap();
        match cli.command {
            Command::Conductance(args) => args,
            Command::Interacting(_) => unreachable!(),
        }
    }

    #[test]
    fn overrides_replace_every_row() {
        let row = ExperimentPoint {
            hw_x: 1.,
            hw_y_ratio: 2.,
            bias: 0.3,
            magnetic_field: 1.,
            angle: 0.,
        };
        let mut experiments = vec![row, row];
        apply_overrides(&mut experiments, None, Some(4.));
        assert!(experiments
            .iter()
            .all(|e| e.magnetic_field == 4. && e.bias == 0.3));
    }

    #[test]
    fn ranges_need_two_values() {
        assert_eq!(range(&[1., 2.], "interaction").unwrap(), (1., 2.));
        assert!(range(&[1.], "interaction").is_err());
    }

    #[test]
    fn a_preset_supplies_the_conductance_material() {
        let config = Configuration::build().unwrap();
        let args = conductance_args(&["--preset", "inas"]);
        let material = conductance_material(&args, &config).unwrap();
        assert_eq!(material, KnownMaterial::InAs.material());
        assert_eq!(material.name(), "InAs");
    }

    #[test]
    fn without_a_preset_the_configured_material_is_used() {
        let config = Configuration::build().unwrap();
        let args = conductance_args(&["--g", "-0.44"]);
        let material = conductance_material(&args, &config).unwrap();
        assert_eq!(material.g_factor(), -0.44);
        assert_eq!(material.effective_mass_ratio(), config.conductance.effective_mass_ratio);
    }

    #[test]
    fn a_preset_conflicts_with_explicit_parameters() {
        assert!(App::try_parse_from([
            "qwire",
            "conductance",
            "setup.csv",
            "3",
            "--preset",
            "gaas",
            "--eff",
            "0.1"
        ])
        .is_err());
    }
}
