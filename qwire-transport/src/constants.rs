// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Constants
//!
//! Defines the physical constants used in the simulation. A single `PhysicalConstants` value is
//! built once and handed to each model, so every calculation in a run sees the same set.

use nalgebra::RealField;

/// Single electron charge in C
pub const ELECTRON_CHARGE: f64 = 1.60217662e-19;
/// Single electron mass in kg
pub const ELECTRON_MASS: f64 = 9.10938356e-31;
/// Permittivity of free space in F / m
pub const EPSILON_0: f64 = 8.85418782e-12;
/// Reduced Planck constant in J s
pub const HBAR: f64 = 1.0545718e-34;
/// Bohr magneton in meV / T
pub const BOHR_MAGNETON: f64 = 5.7883818060e-2;

#[derive(Clone, Copy, Debug, PartialEq)]
/// The physical constants used by the transmission and interacting models
pub struct PhysicalConstants<T> {
    /// Reduced Planck constant in J s
    pub hbar: T,
    /// Electron charge in C
    pub electron_charge: T,
    /// Vacuum permittivity in F / m
    pub vacuum_permittivity: T,
    /// Bare electron mass in kg
    pub electron_mass: T,
    /// Bohr magneton in meV / T
    pub bohr_magneton: T,
}

impl<T: RealField> Default for PhysicalConstants<T> {
    fn default() -> Self {
        Self {
            hbar: T::from_f64(HBAR).unwrap(),
            electron_charge: T::from_f64(ELECTRON_CHARGE).unwrap(),
            vacuum_permittivity: T::from_f64(EPSILON_0).unwrap(),
            electron_mass: T::from_f64(ELECTRON_MASS).unwrap(),
            bohr_magneton: T::from_f64(BOHR_MAGNETON).unwrap(),
        }
    }
}
