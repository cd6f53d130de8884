// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Error
//! The error type for the binary

use miette::Diagnostic;

#[derive(thiserror::Error, Debug, Diagnostic)]
/// Every failure surfaced by the binary
pub enum QwireError {
    #[error(transparent)]
    #[diagnostic(code(qwire::config))]
    /// The configuration could not be read or deserialized
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    /// An input table could not be read
    Read(#[from] crate::reader::ReadError),
    #[error(transparent)]
    /// The interacting sweep failed
    Sweep(#[from] crate::interacting::SweepError),
    #[error(transparent)]
    /// A report could not be written
    Report(#[from] crate::report::ReportError),
    #[error("{0}")]
    #[diagnostic(code(qwire::arguments))]
    /// The command line arguments are inconsistent
    Arguments(String),
}
