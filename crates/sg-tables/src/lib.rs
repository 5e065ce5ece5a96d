//! sg-tables: immutable property tables for steamgrid.
//!
//! Provides:
//! - Column schema with resolved column handles
//! - Sorted-axis bracketing (nearest key at/below and at/above a query)
//! - `PropertyTable`: single-phase property grid keyed by (T, P)
//! - `SaturationTable`: saturation curve keyed by T
//!
//! Tables are built once from rows in any order and never mutated afterwards.
//! Rows live in a sorted arena; lookups are binary searches on the key axes,
//! never full-table scans.
//!
//! Units follow the reference dataset: temperature in K, pressure in bar.

pub mod axis;
pub mod error;
pub mod property;
pub mod saturation;
pub mod schema;

pub use axis::{Axis, Bracket, bracket};
pub use error::{TableError, TableResult};
pub use property::{Isotherm, PropertyRow, PropertyTable};
pub use saturation::{SaturationRow, SaturationTable};
pub use schema::{ColumnId, Schema, columns};
