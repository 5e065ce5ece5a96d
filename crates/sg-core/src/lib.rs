//! sg-core: numeric foundation for steamgrid.
//!
//! Contains:
//! - units (uom SI types + constructors for the table units, K and bar)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SgError, SgResult};
pub use numeric::*;
pub use units::*;
