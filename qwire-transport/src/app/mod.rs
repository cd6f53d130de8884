// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! This module governs the high-level implementation of the command line application

mod calculations;
mod configuration;
mod error;
mod telemetry;

pub use configuration::{
    ConductanceConfiguration, Configuration, GlobalConfiguration, InteractingConfiguration,
    OutputConfiguration,
};
pub use error::QwireError;

use crate::{
    constants::PhysicalConstants,
    material::KnownMaterial,
    report::TerminalSink,
    transmission::{ChannelSummation, SweptQuantity},
};
use clap::{ArgEnum, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct App {
    #[clap(arg_enum, short, long, default_value = "info", global = true)]
    log_level: LogLevel,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ArgEnum)]
pub(crate) enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let level = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", level)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Conductance of a saddle-point constriction for each experiment in a setup table
    Conductance(ConductanceArgs),
    /// Energy levels of a chain of interacting electrons swept through interaction and confinement
    Interacting(InteractingArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ConductanceArgs {
    /// Comma delimited table of experiments: hw_x, hw_y / hw_x, V_sd, B, angle
    pub(crate) experiment_setup: PathBuf,
    /// Number of transverse channels to sum
    pub(crate) channels: usize,
    /// Effective g-factor
    #[clap(long, allow_hyphen_values = true, conflicts_with = "materials")]
    pub(crate) g: Option<f64>,
    /// Effective mass in units of the bare electron mass
    #[clap(long, conflicts_with = "materials")]
    pub(crate) eff: Option<f64>,
    /// Compiled-in material, in place of the g-factor and effective mass
    #[clap(arg_enum, long, conflicts_with_all = &["g", "eff", "material-name", "materials"])]
    pub(crate) preset: Option<KnownMaterial>,
    /// Name of the material shown in the plot title
    #[clap(long = "mat-nm", conflicts_with = "materials")]
    pub(crate) material_name: Option<String>,
    /// Comma delimited table of materials: name, g, m_eff
    #[clap(long, requires = "material")]
    pub(crate) materials: Option<PathBuf>,
    /// The entry of the material table to use
    #[clap(long, requires = "materials")]
    pub(crate) material: Option<String>,
    /// Replace the source-drain bias of every experiment, in meV
    #[clap(long, allow_hyphen_values = true)]
    pub(crate) bias: Option<f64>,
    /// Replace the magnetic field of every experiment, in T
    #[clap(long, allow_hyphen_values = true)]
    pub(crate) field: Option<f64>,
    /// Shift between successive curves
    #[clap(long)]
    pub(crate) offset: Option<f64>,
    /// Which channel indices are summed
    #[clap(arg_enum, long)]
    pub(crate) summation: Option<ChannelSummation>,
    /// Generate the experiments by stepping this quantity from the first row of the setup
    #[clap(arg_enum, long, requires_all = &["increment", "plots"])]
    pub(crate) compare: Option<SweptQuantity>,
    /// Step between generated experiments
    #[clap(long, allow_hyphen_values = true, requires = "compare")]
    pub(crate) increment: Option<f64>,
    /// Number of generated experiments
    #[clap(long, requires = "compare")]
    pub(crate) plots: Option<usize>,
    /// Write the curves to this file
    #[clap(long)]
    pub(crate) save: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct InteractingArgs {
    /// Number of electrons in the chain
    #[clap(long)]
    pub(crate) electrons: usize,
    /// Interaction energies spanned by the sweep, in meV
    #[clap(long, number_of_values = 2, value_names = &["LO", "HI"], required = true)]
    pub(crate) interaction: Vec<f64>,
    /// Compiled-in wire material
    #[clap(arg_enum, long, conflicts_with_all = &["dielectric", "eff"])]
    pub(crate) preset: Option<KnownMaterial>,
    /// Dielectric constant in units of the vacuum permittivity
    #[clap(long, requires = "eff")]
    pub(crate) dielectric: Option<f64>,
    /// Effective mass in units of the bare electron mass
    #[clap(long, requires = "dielectric")]
    pub(crate) eff: Option<f64>,
    /// Confinement energies spanned by the sweep, in meV
    #[clap(long, number_of_values = 2, value_names = &["LO", "HI"], required = true)]
    pub(crate) confinement: Vec<f64>,
    /// Number of sweep points
    #[clap(long)]
    pub(crate) points: usize,
    /// Sample the interaction from the top of its range
    #[clap(long)]
    pub(crate) interaction_decreasing: bool,
    /// Sample the confinement from the top of its range
    #[clap(long)]
    pub(crate) confinement_decreasing: bool,
    /// Leave the highest state out of the results
    #[clap(long)]
    pub(crate) no_second_excited: bool,
    /// Shift between successive conductance curves, in meV
    #[clap(long)]
    pub(crate) offset: Option<f64>,
    /// Write the curves to this file
    #[clap(long)]
    pub(crate) save: Option<PathBuf>,
}

/// Parses the command line, sets up tracing and runs the requested calculation
pub fn run() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = App::parse();

    let config = Configuration::build()?;

    let (subscriber, _guard) = telemetry::get_subscriber(cli.log_level, &config.global);
    telemetry::init_subscriber(subscriber)?;

    let constants = PhysicalConstants::default();
    let mut sink = TerminalSink::stdout();

    match cli.command {
        Command::Conductance(args) => {
            tracing::info!("Conductance calculation");
            calculations::conductance(&args, &config, &constants, &mut sink)?;
        }
        Command::Interacting(args) => {
            tracing::info!("Interacting wire calculation");
            calculations::interacting(&args, &config, &constants, &mut sink)?;
        }
    }

    Ok(())
}
