//! Table construction and lookup errors.

use crate::axis::Axis;
use sg_core::SgError;
use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised while building or searching a table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Table (or axis) has no rows.
    #[error("Table has no rows")]
    Empty,

    /// Schema with no columns or a blank column name.
    #[error("Invalid schema: {what}")]
    InvalidSchema { what: &'static str },

    /// Same column name listed twice.
    #[error("Duplicate column: {name}")]
    DuplicateColumn { name: String },

    /// Column name not present in the schema.
    #[error("Unknown column: {name}")]
    UnknownColumn { name: String },

    /// Row value count does not match the schema.
    #[error("Row at T={t} has {found} values, schema has {expected} columns")]
    RowArity {
        t: f64,
        expected: usize,
        found: usize,
    },

    /// Two rows share the same key.
    #[error("Duplicate row key T={t}, P={p:?}")]
    DuplicateKey { t: f64, p: Option<f64> },

    /// NaN or infinite key or value.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Query not bracketed by the axis.
    #[error("{axis} {value} outside table range [{min}, {max}]")]
    OutOfRange {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl From<SgError> for TableError {
    fn from(err: SgError) -> Self {
        match err {
            SgError::NonFinite { what, value } | SgError::NotPositive { what, value } => {
                TableError::NonFinite { what, value }
            }
        }
    }
}
