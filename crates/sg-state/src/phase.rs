//! Phase classification against the saturation curve.

use crate::error::StateResult;
use crate::saturation::saturation_pressure;
use sg_core::{Real, round_to_decimals};
use sg_tables::SaturationTable;
use std::fmt;
use tracing::debug;

/// Critical temperature of water used by the reference dataset [K].
///
/// Above it there is no liquid/vapor distinction and every state is treated
/// as vapor.
pub const CRITICAL_TEMPERATURE_K: Real = 647.29;

/// Decimal places P and P_sat are rounded to before comparison.
///
/// Absorbs table-generation noise: a pressure within rounding distance of the
/// saturation pressure is classified as a saturated mixture.
pub const SATURATION_COMPARE_DECIMALS: u32 = 2;

/// Phase of a (T, P) state relative to the saturation curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// P above the saturation pressure.
    SubcooledLiquid,
    /// P below the saturation pressure, or T above critical.
    SuperheatedVapor,
    /// P at the saturation pressure; liquid and vapor coexist.
    SaturatedMixture,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::SubcooledLiquid => "subcooled liquid",
            Phase::SuperheatedVapor => "superheated vapor",
            Phase::SaturatedMixture => "saturated mixture",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of classifying one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub phase: Phase,
    /// Saturation pressure at T [bar]; `None` above the critical temperature,
    /// where the saturation table is not consulted.
    pub p_sat: Option<Real>,
}

/// Classify (`t` [K], `p` [bar]).
pub fn classify(saturation: &SaturationTable, t: Real, p: Real) -> StateResult<Classification> {
    if t > CRITICAL_TEMPERATURE_K {
        debug!(t, p, "supercritical temperature, treating as vapor");
        return Ok(Classification {
            phase: Phase::SuperheatedVapor,
            p_sat: None,
        });
    }

    let p_sat = saturation_pressure(saturation, t)?;
    let p_cmp = round_to_decimals(p, SATURATION_COMPARE_DECIMALS);
    let p_sat_cmp = round_to_decimals(p_sat, SATURATION_COMPARE_DECIMALS);

    let phase = if p_cmp > p_sat_cmp {
        Phase::SubcooledLiquid
    } else if p_cmp < p_sat_cmp {
        Phase::SuperheatedVapor
    } else {
        Phase::SaturatedMixture
    };
    debug!(t, p, p_sat, %phase, "classified state");

    Ok(Classification {
        phase,
        p_sat: Some(p_sat),
    })
}
