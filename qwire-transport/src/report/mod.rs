// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Reporting
//!
//! The calculations never format or draw anything themselves. They push finished numbers into an
//! implementation of `ReportingSink`:
//! - `render_table` receives one row per experiment or sweep point
//! - `render_plot` receives one curve at a time, together with the frame it belongs to
//! - `save_figure` is only invoked when the caller asked for the curves to be written out
//!
//! `TerminalSink` prints to the terminal and writes collected curves to delimited text, while
//! `MemorySink` simply keeps everything it is handed.

mod memory;
mod styles;
mod terminal;

pub use memory::MemorySink;
pub use terminal::TerminalSink;

use miette::Diagnostic;
use std::path::Path;

#[derive(thiserror::Error, Debug, Diagnostic)]
/// Failures writing reports
pub enum ReportError {
    #[error("IO Failure: {0}")]
    #[diagnostic(code(qwire::report::io))]
    /// The destination could not be written
    Io(#[from] std::io::Error),
    #[error(transparent)]
    #[diagnostic(code(qwire::report::csv))]
    /// The delimited output could not be written
    Csv(#[from] csv::Error),
}

#[derive(Clone, Debug, PartialEq)]
/// A single entry in a table row
pub enum Cell {
    /// A numeric entry
    Number(f64),
    /// A text entry
    Text(String),
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Cell::Number(value) => {
                if *value != 0. && (value.abs() < 1e-3 || value.abs() >= 1e5) {
                    write!(f, "{:.4e}", value)
                } else {
                    write!(f, "{:.4}", value)
                }
            }
            Cell::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Title, axis labels and y-limits shared by every curve on a plot
pub struct PlotFrame {
    /// Title of the plot
    pub title: String,
    /// The (x, y) axis labels
    pub axis_labels: (String, String),
    /// Lower and upper y limits, if fixed
    pub y_limit: Option<(f64, f64)>,
}

impl PlotFrame {
    /// A frame without y limits
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            axis_labels: (x_label.into(), y_label.into()),
            y_limit: None,
        }
    }

    /// Fixes the y limits
    pub fn with_y_limit(self, lower: f64, upper: f64) -> Self {
        Self {
            y_limit: Some((lower, upper)),
            ..self
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// A single curve, the x and y values are index aligned
pub struct Curve {
    /// The abscissae
    pub x: Vec<f64>,
    /// The ordinates
    pub y: Vec<f64>,
    /// Legend entry
    pub label: Option<String>,
}

impl Curve {
    /// An unlabelled curve
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len(), "curve coordinates must be index aligned");
        Self { x, y, label: None }
    }

    /// Attaches a legend entry
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..self
        }
    }
}

/// The presentation layer consumed by the calculations
pub trait ReportingSink {
    /// Display a table with one row per experiment or sweep point
    fn render_table(&mut self, field_names: &[&str], rows: &[Vec<Cell>]) -> Result<(), ReportError>;
    /// Add a single curve to the plot described by `frame`
    fn render_plot(&mut self, frame: &PlotFrame, curve: Curve) -> Result<(), ReportError>;
    /// Persist every curve rendered so far to `path`
    fn save_figure(&mut self, path: &Path) -> Result<(), ReportError>;
}
