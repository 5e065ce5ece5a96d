//! Bracketing search on a sorted key axis.

use crate::error::{TableError, TableResult};
use sg_core::Real;
use std::fmt;

/// Key axis of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Temperature [K]
    Temperature,
    /// Pressure [bar]
    Pressure,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Temperature => write!(f, "Temperature"),
            Axis::Pressure => write!(f, "Pressure"),
        }
    }
}

/// Indices of the nearest axis values at or below (`lo`) and at or above (`hi`)
/// a query coordinate.
///
/// On an exact match `lo == hi` and the bracket is degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub lo: usize,
    pub hi: usize,
}

impl Bracket {
    pub fn is_exact(self) -> bool {
        self.lo == self.hi
    }
}

/// Find the bracket of `x` in a strictly increasing `values` slice.
///
/// Fails with [`TableError::OutOfRange`] when no value lies on one side of `x`;
/// the table is never extrapolated.
pub fn bracket(values: &[Real], x: Real, axis: Axis) -> TableResult<Bracket> {
    let (Some(&min), Some(&max)) = (values.first(), values.last()) else {
        return Err(TableError::Empty);
    };

    // First index with values[idx] >= x
    let idx = values.partition_point(|&v| v < x);
    if idx < values.len() && values[idx] == x {
        return Ok(Bracket { lo: idx, hi: idx });
    }
    if idx == 0 || idx == values.len() {
        return Err(TableError::OutOfRange {
            axis,
            value: x,
            min,
            max,
        });
    }
    Ok(Bracket { lo: idx - 1, hi: idx })
}

#[cfg(test)]
mod tests {
    use super::*;

    const AXIS: [Real; 4] = [280.0, 290.0, 300.0, 350.0];

    #[test]
    fn interior_point() {
        let b = bracket(&AXIS, 298.15, Axis::Temperature).unwrap();
        assert_eq!(b, Bracket { lo: 1, hi: 2 });
        assert!(!b.is_exact());
    }

    #[test]
    fn exact_match_is_degenerate() {
        for (i, &v) in AXIS.iter().enumerate() {
            let b = bracket(&AXIS, v, Axis::Temperature).unwrap();
            assert_eq!(b, Bracket { lo: i, hi: i });
            assert!(b.is_exact());
        }
    }

    #[test]
    fn outside_range_is_error() {
        let err = bracket(&AXIS, 279.9, Axis::Temperature).unwrap_err();
        assert_eq!(
            err,
            TableError::OutOfRange {
                axis: Axis::Temperature,
                value: 279.9,
                min: 280.0,
                max: 350.0,
            }
        );
        assert!(bracket(&AXIS, 350.1, Axis::Temperature).is_err());
    }

    #[test]
    fn nan_is_out_of_range() {
        assert!(matches!(
            bracket(&AXIS, Real::NAN, Axis::Pressure),
            Err(TableError::OutOfRange { .. })
        ));
    }

    #[test]
    fn single_point_axis() {
        let axis = [5.0];
        assert_eq!(
            bracket(&axis, 5.0, Axis::Pressure).unwrap(),
            Bracket { lo: 0, hi: 0 }
        );
        assert!(bracket(&axis, 5.5, Axis::Pressure).is_err());
    }

    #[test]
    fn empty_axis() {
        assert_eq!(bracket(&[], 1.0, Axis::Pressure), Err(TableError::Empty));
    }
}
