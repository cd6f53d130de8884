use miette::Diagnostic;

#[derive(thiserror::Error, Debug, Diagnostic)]
/// Failures assembling a many-body operator from its local pieces
pub enum BuildError {
    #[error("a local operator of dimension {found} does not span a whole number of sites of dimension {local_dimension}")]
    #[diagnostic(code(qwire::build::dimension))]
    /// The operator dimension is not a power of the local dimension
    DimensionMismatch {
        /// Dimension of a single site
        local_dimension: usize,
        /// Dimension of the offending operator
        found: usize,
    },
    #[error("local operator is not square: {rows} x {columns}")]
    #[diagnostic(code(qwire::build::not_square))]
    /// The operator is not square
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        columns: usize,
    },
    #[error("an operator spanning {span} sites from site {site} does not fit in a chain of {total} sites")]
    #[diagnostic(code(qwire::build::site_out_of_range))]
    /// The operator does not fit on the chain at the requested site
    SiteOutOfRange {
        /// The first site the operator acts on
        site: usize,
        /// Number of sites the operator spans
        span: usize,
        /// Number of sites in the chain
        total: usize,
    },
}
