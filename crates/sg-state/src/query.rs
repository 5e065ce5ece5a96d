//! Validated state queries.

use crate::error::{StateError, StateResult};
use sg_core::{Pressure, Real, Temperature, bar_of, ensure_finite, ensure_positive, kelvin_of};

/// One (T, P, quality) request.
///
/// Validated on construction: T and P finite and positive, quality in [0, 1].
/// Quality only affects saturated-mixture states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    t: Real,
    p: Real,
    quality: Real,
}

impl Query {
    /// Query at `t_k` [K], `p_bar` [bar] with vapor mass fraction `quality`.
    pub fn new(t_k: Real, p_bar: Real, quality: Real) -> StateResult<Self> {
        let t = ensure_positive(t_k, "temperature")?;
        let p = ensure_positive(p_bar, "pressure")?;
        let quality = ensure_finite(quality, "quality")?;
        if !(0.0..=1.0).contains(&quality) {
            return Err(StateError::InvalidQuality { quality });
        }
        Ok(Self { t, p, quality })
    }

    /// Query with quality 0, for states known to be single-phase.
    pub fn single_phase(t_k: Real, p_bar: Real) -> StateResult<Self> {
        Self::new(t_k, p_bar, 0.0)
    }

    /// Query from uom quantities, converted to the table units (K, bar).
    pub fn from_quantities(t: Temperature, p: Pressure, quality: Real) -> StateResult<Self> {
        Self::new(kelvin_of(t), bar_of(p), quality)
    }

    /// Temperature [K]
    pub fn t(&self) -> Real {
        self.t
    }

    /// Pressure [bar]
    pub fn p(&self) -> Real {
        self.p
    }

    /// Vapor mass fraction
    pub fn quality(&self) -> Real {
        self.quality
    }
}
