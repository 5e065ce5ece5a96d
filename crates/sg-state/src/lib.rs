//! sg-state: thermodynamic state evaluation over tabulated water properties.
//!
//! Provides:
//! - Linear interpolation primitives (`fraction`, `lerp`, `interpolate_linear`)
//! - Saturation-curve lookup (`saturation_pressure`, `saturation_point`)
//! - Phase classification against the saturation curve
//! - Grid-cell selection and bilinear interpolation on the property table
//! - `StateEvaluator`: phase-aware, quality-weighted property resolution
//!
//! # Architecture
//!
//! Tables come from `sg-tables` and are borrowed, never copied or mutated.
//! The evaluator first finds P_sat(T) on the saturation curve, classifies the
//! query, then interpolates the liquid column, the vapor column, or both
//! blended by quality. Queries outside either table fail with
//! [`StateError::OutOfRange`]; nothing is extrapolated.
//!
//! # Example
//!
//! ```no_run
//! use sg_state::{Query, StateEvaluator};
//! use sg_tables::{PropertyTable, SaturationTable};
//!
//! fn print_state(table: &PropertyTable, saturation: &SaturationTable) -> sg_state::StateResult<()> {
//!     let eval = StateEvaluator::new(table, saturation);
//!     let query = Query::new(351.15, 0.4368, 0.6)?;
//!     let state = eval.state(&query)?;
//!     println!("{}", state.summary());
//!     Ok(())
//! }
//! ```

pub mod cell;
pub mod error;
pub mod evaluator;
pub mod interp;
pub mod phase;
pub mod property;
pub mod query;
pub mod saturation;

#[cfg(test)]
mod test_support;

// Re-exports for ergonomics
pub use cell::{GridCell, select_cell};
pub use error::{StateError, StateResult};
pub use evaluator::{StateEvaluator, StateProperties};
pub use interp::{fraction, interpolate_linear, lerp};
pub use phase::{
    CRITICAL_TEMPERATURE_K, Classification, Phase, SATURATION_COMPARE_DECIMALS, classify,
};
pub use property::{PropertyPair, ResolvedPair};
pub use query::Query;
pub use saturation::{SaturationPoint, saturation_point, saturation_pressure};
