// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! qwire computes the conductance of quantum point contacts and the energy levels of interacting
//! electrons in quantum wires
//!
//! # Overview
//! Two models are provided.
//!
//! The non-interacting model describes a quantum point contact as a saddle-point potential
//! ([Büttiker 1990](https://doi.org/10.1103/PhysRevB.41.7906)). Each transverse channel opens as a
//! smoothed step in the conductance, and the steps are shifted by a perpendicular magnetic field,
//! a Zeeman splitting and a source-drain bias. Conductance curves for a table of experiments are
//! displaced from one another so they can be compared on a single plot.
//!
//! The interacting model describes a short chain of electrons in a quantum wire. Each electron is
//! truncated to the three lowest states of its confining potential and neighbouring electrons
//! interact through a diagonal coupling. The many-body Hamiltonian is diagonalised across a sweep
//! of the interaction and confinement energies, with the first excited state followed from point
//! to point by its overlap with the previous point.
//!
//! # Usage
//! qwire is distributed as a binary crate, and is intended to be run from the command line. The
//! non-interacting model reads a comma delimited table of experiments
//!
//! ```text
//! hw_x,hw_y/hw_x,V_sd,B,angle
//! 1.0,2.0,0.0,0.0,0.0
//! 1.0,2.0,0.5,0.0,0.0
//! ```
//!
//! and is run as `qwire conductance setup.csv 4`. A sweep of the interacting model is run as
//! `qwire interacting --electrons 3 --interaction 0 2 --confinement 1 1 --points 50`.

#![warn(missing_docs)]
#![allow(clippy::type_complexity)]

/// The command line global application, tracing and configuration
pub mod app;

/// Physical constants
pub mod constants;

/// Error handling
pub mod error;

/// The many-body Hamiltonian of an interacting chain
pub mod hamiltonian;

/// Sweeps of the interacting wire model
pub mod interacting;

/// Material parameters
pub mod material;

/// Input tables
pub mod reader;

/// The presentation layer
pub mod report;

/// The non-interacting saddle-point model
pub mod transmission;

/// Helper functions and traits
mod utilities;
