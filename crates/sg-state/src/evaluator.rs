//! State evaluator: phase-aware property lookup over a property table and a
//! saturation table.

use crate::cell::select_cell;
use crate::error::StateResult;
use crate::interp::lerp;
use crate::phase::{Classification, Phase, classify};
use crate::property::{PropertyPair, ResolvedPair};
use crate::query::Query;
use crate::saturation::{SaturationPoint, saturation_point, saturation_pressure};
use sg_core::{Real, SpecEnthalpy, SpecEntropy};
use sg_tables::{ColumnId, PropertyTable, SaturationTable};
use tracing::debug;

/// Properties of one evaluated state.
#[derive(Debug, Clone, PartialEq)]
pub struct StateProperties {
    /// Temperature [K]
    pub t: Real,
    /// Pressure [bar]
    pub p: Real,
    pub phase: Phase,
    /// Saturation pressure at T [bar]; `None` above the critical temperature.
    pub p_sat: Option<Real>,
    /// Vapor mass fraction; `Some` only for a saturated mixture.
    pub quality: Option<Real>,
    /// Specific enthalpy [kJ/kg]
    pub h: SpecEnthalpy,
    /// Specific entropy [kJ/(kg·K)]
    pub s: SpecEntropy,
}

impl StateProperties {
    /// Return a summary string of all contained properties (for debugging).
    pub fn summary(&self) -> String {
        let quality = self
            .quality
            .map(|x| format!(",x={x:.3}"))
            .unwrap_or_default();
        let p_sat = self
            .p_sat
            .map(|p| format!(",Psat={p:.4}bar"))
            .unwrap_or_default();
        format!(
            "State(T={:.2}K,P={:.4}bar{},{}{},h={:.3}kJ/kg,s={:.5}kJ/kg·K)",
            self.t, self.p, p_sat, self.phase, quality, self.h, self.s
        )
    }
}

/// Evaluates states against a borrowed pair of tables.
///
/// Holds no per-query state; any number of evaluators may share the same
/// tables.
#[derive(Debug, Clone, Copy)]
pub struct StateEvaluator<'a> {
    table: &'a PropertyTable,
    saturation: &'a SaturationTable,
}

impl<'a> StateEvaluator<'a> {
    pub fn new(table: &'a PropertyTable, saturation: &'a SaturationTable) -> Self {
        Self { table, saturation }
    }

    pub fn table(&self) -> &'a PropertyTable {
        self.table
    }

    pub fn saturation_table(&self) -> &'a SaturationTable {
        self.saturation
    }

    /// Saturation pressure [bar] at `t` [K].
    pub fn saturation_pressure(&self, t: Real) -> StateResult<Real> {
        saturation_pressure(self.saturation, t)
    }

    /// All saturation columns at `t` [K].
    pub fn saturation_point(&self, t: Real) -> StateResult<SaturationPoint> {
        saturation_point(self.saturation, t)
    }

    /// Phase of (`t` [K], `p` [bar]).
    pub fn classify(&self, t: Real, p: Real) -> StateResult<Phase> {
        Ok(classify(self.saturation, t, p)?.phase)
    }

    /// Bilinear value of a named column at (`t`, `p`), regardless of phase.
    pub fn interpolate(&self, column: &str, t: Real, p: Real) -> StateResult<Real> {
        let column = self.table.column(column)?;
        self.interpolate_column(column, t, p)
    }

    fn interpolate_column(&self, column: ColumnId, t: Real, p: Real) -> StateResult<Real> {
        let cell = select_cell(self.table, t, p)?;
        Ok(cell.interpolate(t, p, column))
    }

    /// Value of a liquid/vapor property pair for the query's phase.
    ///
    /// Subcooled liquid reads the liquid column, superheated vapor the vapor
    /// column, and a saturated mixture blends both:
    ///
    /// ```text
    /// X = X_liq + quality * (X_vap - X_liq)
    /// ```
    pub fn resolve(&self, pair: &PropertyPair, query: &Query) -> StateResult<Real> {
        let columns = pair.resolve(self.table)?;
        let classification = classify(self.saturation, query.t(), query.p())?;
        self.resolve_classified(columns, classification.phase, query)
    }

    /// [`resolve`](Self::resolve) with the pair looked up by name
    /// (`enthalpy`, `entropy`, or their one-letter symbols).
    pub fn resolve_named(&self, name: &str, query: &Query) -> StateResult<Real> {
        self.resolve(&PropertyPair::from_name(name)?, query)
    }

    /// Specific enthalpy [kJ/kg].
    pub fn enthalpy(&self, query: &Query) -> StateResult<SpecEnthalpy> {
        self.resolve(&PropertyPair::enthalpy(), query)
    }

    /// Specific entropy [kJ/(kg·K)].
    pub fn entropy(&self, query: &Query) -> StateResult<SpecEntropy> {
        self.resolve(&PropertyPair::entropy(), query)
    }

    /// Classify once and resolve enthalpy and entropy for that phase.
    pub fn state(&self, query: &Query) -> StateResult<StateProperties> {
        let enthalpy = PropertyPair::enthalpy().resolve(self.table)?;
        let entropy = PropertyPair::entropy().resolve(self.table)?;
        let Classification { phase, p_sat } = classify(self.saturation, query.t(), query.p())?;

        let h = self.resolve_classified(enthalpy, phase, query)?;
        let s = self.resolve_classified(entropy, phase, query)?;

        Ok(StateProperties {
            t: query.t(),
            p: query.p(),
            phase,
            p_sat,
            quality: (phase == Phase::SaturatedMixture).then_some(query.quality()),
            h,
            s,
        })
    }

    fn resolve_classified(
        &self,
        columns: ResolvedPair,
        phase: Phase,
        query: &Query,
    ) -> StateResult<Real> {
        let (t, p) = (query.t(), query.p());
        let value = match phase {
            Phase::SubcooledLiquid => self.interpolate_column(columns.liquid, t, p)?,
            Phase::SuperheatedVapor => self.interpolate_column(columns.vapor, t, p)?,
            Phase::SaturatedMixture => {
                let cell = select_cell(self.table, t, p)?;
                let x_liq = cell.interpolate(t, p, columns.liquid);
                let x_vap = cell.interpolate(t, p, columns.vapor);
                lerp(x_liq, x_vap, query.quality())
            }
        };
        debug!(t, p, %phase, value, "resolved property");
        Ok(value)
    }
}
