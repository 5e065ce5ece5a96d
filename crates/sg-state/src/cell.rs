//! Grid-cell selection and bilinear interpolation on the property table.

use crate::error::StateResult;
use crate::interp::{fraction, lerp};
use sg_core::Real;
use sg_tables::{ColumnId, PropertyRow, PropertyTable};
use tracing::trace;

/// The four table rows enclosing a query point.
///
/// Pressure is bracketed independently on each isotherm, so the P bounds at
/// `t_lo` and `t_hi` may differ. On a grid line the bracket is degenerate and
/// the same row appears on both sides.
#[derive(Debug, Clone, Copy)]
pub struct GridCell<'a> {
    /// Rows at the lower temperature: (P below, P above)
    pub at_t_lo: (&'a PropertyRow, &'a PropertyRow),
    /// Rows at the upper temperature: (P below, P above)
    pub at_t_hi: (&'a PropertyRow, &'a PropertyRow),
}

/// Intermediate point on one pressure line after interpolating along T.
#[derive(Debug, Clone, Copy)]
struct Knot {
    p: Real,
    value: Real,
}

impl<'a> GridCell<'a> {
    pub fn t_lo(&self) -> Real {
        self.at_t_lo.0.t
    }

    pub fn t_hi(&self) -> Real {
        self.at_t_hi.0.t
    }

    /// Corner rows in (T_lo, P_lo), (T_lo, P_hi), (T_hi, P_lo), (T_hi, P_hi) order.
    pub fn corners(&self) -> [&'a PropertyRow; 4] {
        [self.at_t_lo.0, self.at_t_lo.1, self.at_t_hi.0, self.at_t_hi.1]
    }

    /// Query lies on a tabulated temperature.
    pub fn is_degenerate_in_t(&self) -> bool {
        self.t_lo() == self.t_hi()
    }

    /// Bilinear value of `column` at (`t`, `p`).
    ///
    /// Interpolates along T on the lower and the upper pressure line (the
    /// pressure coordinate included), then along P between those two knots.
    pub fn interpolate(&self, t: Real, p: Real, column: ColumnId) -> Real {
        let ft = fraction(t, self.t_lo(), self.t_hi());
        let along_t = |cold: &PropertyRow, hot: &PropertyRow| Knot {
            p: lerp(cold.p, hot.p, ft),
            value: lerp(cold.get(column), hot.get(column), ft),
        };
        let below = along_t(self.at_t_lo.0, self.at_t_hi.0);
        let above = along_t(self.at_t_lo.1, self.at_t_hi.1);

        lerp(below.value, above.value, fraction(p, below.p, above.p))
    }
}

/// Select the rows enclosing (`t`, `p`).
///
/// Two-stage nearest-neighbour narrowing: the nearest isotherms at or below
/// and at or above `t`, then on each of them the nearest rows at or below and
/// at or above `p`.
pub fn select_cell(table: &PropertyTable, t: Real, p: Real) -> StateResult<GridCell<'_>> {
    let tb = table.temperature_bracket(t)?;
    let isotherms = table.isotherms();

    let at_t_lo = table.pressure_bracket(&isotherms[tb.lo], p)?;
    let at_t_hi = if tb.is_exact() {
        at_t_lo
    } else {
        table.pressure_bracket(&isotherms[tb.hi], p)?
    };

    trace!(
        t,
        p,
        t_lo = at_t_lo.0.t,
        t_hi = at_t_hi.0.t,
        p_lo = at_t_lo.0.p,
        p_hi = at_t_lo.1.p,
        "selected grid cell"
    );
    Ok(GridCell { at_t_lo, at_t_hi })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StateError;
    use crate::test_support::{h_liq_exact, property_table};
    use sg_tables::{Axis, Schema, columns};

    #[test]
    fn selects_enclosing_rows() {
        let table = property_table();
        let cell = select_cell(&table, 298.15, 1.5).unwrap();
        assert_eq!((cell.t_lo(), cell.t_hi()), (290.0, 300.0));
        let [a, b, c, d] = cell.corners();
        assert_eq!((a.t, a.p), (290.0, 1.0));
        assert_eq!((b.t, b.p), (290.0, 2.0));
        assert_eq!((c.t, c.p), (300.0, 1.0));
        assert_eq!((d.t, d.p), (300.0, 2.0));
    }

    #[test]
    fn grid_point_is_degenerate_and_exact() {
        let table = property_table();
        let h = table.column(columns::H_LIQUID).unwrap();
        let cell = select_cell(&table, 300.0, 1.0).unwrap();
        assert!(cell.is_degenerate_in_t());
        assert!(cell.corners().iter().all(|r| r.t == 300.0 && r.p == 1.0));

        let stored = table.row_at(300.0, 1.0).unwrap().get(h);
        assert_eq!(cell.interpolate(300.0, 1.0, h), stored);
    }

    #[test]
    fn grid_line_in_one_axis() {
        let table = property_table();
        let h = table.column(columns::H_LIQUID).unwrap();

        let on_isotherm = select_cell(&table, 300.0, 1.5).unwrap();
        let v = on_isotherm.interpolate(300.0, 1.5, h);
        assert!((v - h_liq_exact(300.0, 1.5)).abs() < 1e-9);

        let on_isobar = select_cell(&table, 295.0, 2.0).unwrap();
        let v = on_isobar.interpolate(295.0, 2.0, h);
        assert!((v - h_liq_exact(295.0, 2.0)).abs() < 1e-9);
    }

    #[test]
    fn reproduces_bilinear_function() {
        // f = 1 + 2T + 3P + 0.5 T P is reproduced exactly on a rectangular cell
        let f = |t: Real, p: Real| 1.0 + 2.0 * t + 3.0 * p + 0.5 * t * p;
        let rows = [(10.0, 1.0), (10.0, 4.0), (20.0, 1.0), (20.0, 4.0)]
            .into_iter()
            .map(|(t, p)| PropertyRow::new(t, p, [f(t, p)]))
            .collect();
        let table = PropertyTable::new(Schema::new(["f"]).unwrap(), rows).unwrap();
        let col = table.column("f").unwrap();

        for &(t, p) in &[(12.5, 2.0), (17.0, 3.9), (10.0, 1.1), (19.99, 1.0)] {
            let cell = select_cell(&table, t, p).unwrap();
            let v = cell.interpolate(t, p, col);
            assert!((v - f(t, p)).abs() < 1e-9, "t={t} p={p} v={v}");
        }
    }

    #[test]
    fn irregular_isotherms() {
        // Linear data on different pressure grids per isotherm
        let f = |t: Real, p: Real| 4.0 * t - 7.0 * p;
        let rows = [(10.0, 1.0), (10.0, 5.0), (20.0, 2.0), (20.0, 3.0), (20.0, 6.0)]
            .into_iter()
            .map(|(t, p)| PropertyRow::new(t, p, [f(t, p)]))
            .collect();
        let table = PropertyTable::new(Schema::new(["f"]).unwrap(), rows).unwrap();
        let col = table.column("f").unwrap();

        let cell = select_cell(&table, 15.0, 4.0).unwrap();
        assert_eq!((cell.at_t_lo.0.p, cell.at_t_lo.1.p), (1.0, 5.0));
        assert_eq!((cell.at_t_hi.0.p, cell.at_t_hi.1.p), (3.0, 6.0));
        assert!((cell.interpolate(15.0, 4.0, col) - f(15.0, 4.0)).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_axes() {
        let table = property_table();
        assert!(matches!(
            select_cell(&table, 1000.0, 1.0),
            Err(StateError::OutOfRange {
                axis: Axis::Temperature,
                ..
            })
        ));
        assert!(matches!(
            select_cell(&table, 300.0, 500.0),
            Err(StateError::OutOfRange {
                axis: Axis::Pressure,
                ..
            })
        ));
    }
}
