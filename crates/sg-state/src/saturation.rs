//! Saturation-curve lookup.

use crate::error::StateResult;
use crate::interp::{fraction, lerp};
use sg_core::Real;
use sg_tables::{ColumnId, SaturationTable};
use tracing::trace;

/// Saturation state interpolated at one temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct SaturationPoint {
    /// Temperature [K]
    pub t: Real,
    /// Saturation pressure [bar]
    pub p_sat: Real,
    /// Boundary properties, aligned with the saturation table's schema.
    pub values: Vec<Real>,
}

impl SaturationPoint {
    #[inline]
    pub fn get(&self, column: ColumnId) -> Real {
        self.values[column.index()]
    }
}

/// Saturation pressure [bar] at `t` [K], linear between the nearest tabulated
/// temperatures. An exactly tabulated temperature returns its stored value.
pub fn saturation_pressure(table: &SaturationTable, t: Real) -> StateResult<Real> {
    let (lo, hi) = table.bracket(t)?;
    let frac = fraction(t, lo.t, hi.t);
    let p_sat = lerp(lo.p_sat, hi.p_sat, frac);
    trace!(t, t_lo = lo.t, t_hi = hi.t, p_sat, "saturation pressure");
    Ok(p_sat)
}

/// Every saturation column interpolated at `t` [K].
pub fn saturation_point(table: &SaturationTable, t: Real) -> StateResult<SaturationPoint> {
    let (lo, hi) = table.bracket(t)?;
    let frac = fraction(t, lo.t, hi.t);
    let values = lo
        .values
        .iter()
        .zip(&hi.values)
        .map(|(&a, &b)| lerp(a, b, frac))
        .collect();
    Ok(SaturationPoint {
        t,
        p_sat: lerp(lo.p_sat, hi.p_sat, frac),
        values,
    })
}
