//! Discrete parameter grids for sweeps and energy axes
//!
//! Two families of grid are provided:
//! - [`sample`] / [`RangeSampler`]: a fixed number of points spanning a half-open interval, used to
//!   lay out the experiments in a parameter sweep
//! - [`arange`]: points at a fixed spacing, used for the energy axis of a conductance curve

mod generate;

pub use generate::*;
