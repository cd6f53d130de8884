// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Deserialization of the delimited input tables
//!
//! Two tables are understood, both comma delimited with a single header row which is skipped:
//! - experiment setups: `hw_x, hw_y / hw_x, V_sd, B, angle`, one experiment per row
//! - materials: `name, g, m_eff`
//!
//! A file holding a single experiment is still read as a table with one row. Rows with the wrong
//! number of columns, or fields which do not parse, are rejected with the offending row and column
//! rather than being replaced by a default.

use crate::{material::Material, transmission::ExperimentPoint};
use miette::Diagnostic;
use std::{io::Read, path::Path};

const SETUP_COLUMNS: usize = 5;
const MATERIAL_COLUMNS: usize = 3;

#[derive(thiserror::Error, Debug, Diagnostic)]
/// Failures reading an input table
pub enum ReadError {
    #[error("IO Failure: {0}")]
    #[diagnostic(code(qwire::reader::io))]
    /// The file could not be opened
    Io(#[from] std::io::Error),
    #[error(transparent)]
    #[diagnostic(code(qwire::reader::csv))]
    /// The table is not valid delimited text
    Csv(#[from] csv::Error),
    #[error("row {row} has {found} columns, expected {expected}")]
    #[diagnostic(code(qwire::reader::arity))]
    /// A row has the wrong number of columns
    Arity {
        /// Data row, counted from one
        row: usize,
        /// Columns required by the table
        expected: usize,
        /// Columns present in the row
        found: usize,
    },
    #[error("row {row}, column {column}: could not parse `{value}` as a number")]
    #[diagnostic(code(qwire::reader::parse))]
    /// A field is not a number
    Parse {
        /// Data row, counted from one
        row: usize,
        /// Column, counted from zero
        column: usize,
        /// The field as written
        value: String,
    },
    #[error("the table contains no rows")]
    #[diagnostic(code(qwire::reader::empty), help("the first row is a header and is always skipped"))]
    /// The table has no data rows
    Empty,
    #[error("no material named `{0}` in the table")]
    #[diagnostic(code(qwire::reader::missing_material))]
    /// No material of this name in the table
    MissingMaterial(String),
}

/// Reads the experiment setups from the file at `path`
pub fn read_setup(path: &Path) -> Result<Vec<ExperimentPoint<f64>>, ReadError> {
    tracing::debug!("Reading experiment setup from {}", path.display());
    let file = std::fs::File::open(path)?;
    parse_setup(file)
}

/// Reads the material table from the file at `path`
pub fn read_materials(path: &Path) -> Result<Vec<Material<f64>>, ReadError> {
    tracing::debug!("Reading material table from {}", path.display());
    let file = std::fs::File::open(path)?;
    parse_materials(file)
}

/// Picks the material called `name` out of a material table
pub fn find_material(materials: &[Material<f64>], name: &str) -> Result<Material<f64>, ReadError> {
    materials
        .iter()
        .find(|material| material.name() == name)
        .cloned()
        .ok_or_else(|| ReadError::MissingMaterial(name.to_string()))
}

/// Parses an experiment setup table from `source`
pub fn parse_setup<R: Read>(source: R) -> Result<Vec<ExperimentPoint<f64>>, ReadError> {
    let experiments = records(source, SETUP_COLUMNS)?
        .into_iter()
        .map(|(row, record)| {
            let value = |column: usize| parse_field(&record, row, column);
            Ok(ExperimentPoint {
                hw_x: value(0)?,
                hw_y_ratio: value(1)?,
                bias: value(2)?,
                magnetic_field: value(3)?,
                angle: value(4)?,
            })
        })
        .collect::<Result<Vec<_>, ReadError>>()?;
    tracing::debug!("Read {} experiments", experiments.len());
    Ok(experiments)
}

/// Parses a material table from `source`
pub fn parse_materials<R: Read>(source: R) -> Result<Vec<Material<f64>>, ReadError> {
    records(source, MATERIAL_COLUMNS)?
        .into_iter()
        .map(|(row, record)| {
            Ok(Material::new(
                &record[0],
                parse_field(&record, row, 1)?,
                parse_field(&record, row, 2)?,
            ))
        })
        .collect()
}

/// Collects every data row, numbered from one, after checking it has `columns` fields
fn records<R: Read>(source: R, columns: usize) -> Result<Vec<(usize, csv::StringRecord)>, ReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(source);

    let mut records = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = index + 1;
        if record.len() != columns {
            return Err(ReadError::Arity {
                row,
                expected: columns,
                found: record.len(),
            });
        }
        records.push((row, record));
    }

    if records.is_empty() {
        return Err(ReadError::Empty);
    }
    Ok(records)
}

fn parse_field(record: &csv::StringRecord, row: usize, column: usize) -> Result<f64, ReadError> {
    let field = &record[column];
    field.parse::<f64>().map_err(|_| ReadError::Parse {
        row,
        column,
        value: field.to_string(),
    })
}

#[cfg(test)]
mod test {
    use super::{find_material, parse_materials, parse_setup, ReadError};

    const SETUP: &str = "hw_x,ratio,V_sd,B,angle
1.0,2.0,0.0,0.0,0.0
1.5,1.0,0.5,2.0,30.0
";

    #[test]
    fn setup_rows_are_read_in_order() {
        let experiments = parse_setup(SETUP.as_bytes()).unwrap();
        assert_eq!(experiments.len(), 2);
        assert_eq!(experiments[1].hw_x, 1.5);
        assert_eq!(experiments[1].hw_y(), 1.5);
        assert_eq!(experiments[1].bias, 0.5);
        assert_eq!(experiments[1].magnetic_field, 2.0);
        assert_eq!(experiments[1].angle, 30.0);
    }

    #[test]
    fn single_row_tables_are_still_tables() {
        let single = "hw_x,ratio,V_sd,B,angle\n1.5,1.0,0.5,2.0,30.0\n";
        let experiments = parse_setup(single.as_bytes()).unwrap();
        let full = parse_setup(SETUP.as_bytes()).unwrap();
        assert_eq!(experiments, vec![full[1]]);
    }

    #[test]
    fn short_rows_are_rejected_with_their_position() {
        let short = "hw_x,ratio,V_sd,B,angle\n1.0,2.0,0.0,0.0,0.0\n1.0,2.0\n";
        match parse_setup(short.as_bytes()) {
            Err(ReadError::Arity {
                row,
                expected,
                found,
            }) => {
                assert_eq!((row, expected, found), (2, 5, 2));
            }
            other => panic!("expected an arity error, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_fields_are_rejected() {
        let bad = "hw_x,ratio,V_sd,B,angle\n1.0,two,0.0,0.0,0.0\n";
        match parse_setup(bad.as_bytes()) {
            Err(ReadError::Parse { row, column, value }) => {
                assert_eq!((row, column, value.as_str()), (1, 1, "two"));
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn header_only_tables_are_empty() {
        assert!(matches!(
            parse_setup("hw_x,ratio,V_sd,B,angle\n".as_bytes()),
            Err(ReadError::Empty)
        ));
    }

    #[test]
    fn materials_are_found_by_name() {
        let table = "name,g,m_eff\nGaAs,-0.44,0.067\nInAs,-14.9,0.023\n";
        let materials = parse_materials(table.as_bytes()).unwrap();
        let inas = find_material(&materials, "InAs").unwrap();
        assert_eq!(inas.g_factor(), -14.9);
        assert_eq!(inas.effective_mass_ratio(), 0.023);
        assert!(matches!(
            find_material(&materials, "Si"),
            Err(ReadError::MissingMaterial(_))
        ));
    }
}
