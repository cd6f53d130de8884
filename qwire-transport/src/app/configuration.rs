//! Layered configuration
//!
//! The compiled-in defaults in `.config/default.toml` are overridden by an optional file
//! `.config/{RUN_MODE}` in the working directory, and finally by environment variables prefixed
//! with `QWIRE`, using a double underscore between nested keys, for example
//! `QWIRE_CONDUCTANCE__OFFSET=1.5`.

use crate::{interacting::SweepSettings, transmission::ChannelSummation};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::{env, path::PathBuf};

const DEFAULT_CONFIGURATION: &str = include_str!("../../.config/default.toml");

#[derive(Debug, Deserialize)]
/// The layered configuration of a run
pub struct Configuration {
    /// Logging destinations
    pub global: GlobalConfiguration,
    /// Defaults for the conductance comparison
    pub conductance: ConductanceConfiguration,
    /// Defaults for the interacting sweep
    pub interacting: InteractingConfiguration,
    /// Which supplementary plots to render
    pub output: OutputConfiguration,
}

#[derive(Debug, Deserialize)]
/// Where the structured log is written
pub struct GlobalConfiguration {
    /// Directory receiving the structured log
    pub log_directory: PathBuf,
    /// File name of the structured log
    pub log_file: String,
}

#[derive(Debug, Deserialize)]
/// Defaults for the conductance comparison
pub struct ConductanceConfiguration {
    /// Used when no g-factor is given on the command line
    pub g_factor: f64,
    /// Used when no effective mass is given on the command line
    pub effective_mass_ratio: f64,
    /// Shift between successive curves in units of hbar w_x
    pub offset: f64,
    /// Spacing of the energy axis
    pub energy_step: f64,
    /// Which channel indices are summed
    pub summation: ChannelSummation,
}

#[derive(Debug, Deserialize)]
/// Defaults for the interacting sweep
pub struct InteractingConfiguration {
    /// Shift between successive level conductance curves in meV
    pub offset: f64,
    /// Spacing of the energy axis in meV
    pub energy_step: f64,
    /// Solver and tracking settings
    pub sweep: SweepSettings,
}

#[derive(Debug, Deserialize)]
/// The supplementary plots rendered after an interacting sweep
pub struct OutputConfiguration {
    /// Render each energy level against `V / t`
    pub energy_levels: bool,
    /// Render the gap between the ground and first excited states
    pub energy_gap: bool,
    /// Render the level-threshold conductance
    pub level_conductance: bool,
}

impl Configuration {
    /// Reads the configuration for the run mode in `RUN_MODE`, falling back to `development`
    pub fn build() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::builder(&run_mode).build()?.try_deserialize()
    }

    fn builder(run_mode: &str) -> config::ConfigBuilder<config::builder::DefaultState> {
        Config::builder()
            // The defaults are always present
            .add_source(File::from_str(DEFAULT_CONFIGURATION, FileFormat::Toml))
            // Overrides for the run mode, optional
            .add_source(File::with_name(&format!(".config/{}", run_mode)).required(false))
            .add_source(
                Environment::with_prefix("QWIRE")
                    .prefix_separator("_")
                    .separator("__"),
            )
    }
}
