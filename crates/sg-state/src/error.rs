//! State evaluation errors.

use sg_core::SgError;
use sg_tables::{Axis, TableError};
use thiserror::Error;

/// Result type for state evaluation.
pub type StateResult<T> = Result<T, StateError>;

/// Errors that can occur while evaluating a state.
///
/// A query either succeeds as a whole or fails with one of these; nothing is
/// clamped, extrapolated, or defaulted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Query coordinate not bracketed by the relevant table.
    #[error("{axis} {value} outside table range [{min}, {max}]")]
    OutOfRange {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Quality outside [0, 1].
    #[error("Quality {quality} outside [0, 1]")]
    InvalidQuality { quality: f64 },

    /// Property name with no known column pair.
    #[error("Unknown property: {name}")]
    UnknownProperty { name: String },

    /// NaN or infinite query input.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Zero or negative absolute temperature or pressure.
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    /// Any other table failure (unknown column, empty axis).
    #[error("Table error: {0}")]
    Table(TableError),
}

impl From<TableError> for StateError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::OutOfRange {
                axis,
                value,
                min,
                max,
            } => StateError::OutOfRange {
                axis,
                value,
                min,
                max,
            },
            other => StateError::Table(other),
        }
    }
}

impl From<SgError> for StateError {
    fn from(err: SgError) -> Self {
        match err {
            SgError::NonFinite { what, value } => StateError::NonFinite { what, value },
            SgError::NotPositive { what, value } => StateError::NonPhysical { what, value },
        }
    }
}
