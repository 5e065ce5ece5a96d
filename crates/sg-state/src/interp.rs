//! Linear interpolation primitives.
//!
//! Every table lookup reduces to these: a normalized position within an axis
//! span, and a linear blend between the span's endpoint values. Zero-width
//! spans (query on a grid line) give `frac = 0`, so the lower endpoint passes
//! through unchanged instead of dividing by zero.

use sg_core::Real;

/// Normalized position of `x` within `[lo, hi]`.
///
/// ```text
/// frac = (x - lo) / (hi - lo)
/// ```
///
/// Returns 0 when the span is zero.
#[inline]
pub fn fraction(x: Real, lo: Real, hi: Real) -> Real {
    let span = hi - lo;
    if span == 0.0 { 0.0 } else { (x - lo) / span }
}

/// Blend between two values.
///
/// ```text
/// v = v_lo + (v_hi - v_lo) * frac
/// ```
#[inline]
pub fn lerp(v_lo: Real, v_hi: Real, frac: Real) -> Real {
    v_lo + (v_hi - v_lo) * frac
}

/// Value at `x` on the line through `(x0, y0)` and `(x1, y1)`.
#[inline]
pub fn interpolate_linear(x: Real, (x0, y0): (Real, Real), (x1, y1): (Real, Real)) -> Real {
    lerp(y0, y1, fraction(x, x0, x1))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn stays_between_endpoints(
            x0 in -1.0e3_f64..1.0e3,
            width in 1.0e-3_f64..1.0e3,
            y0 in -1.0e4_f64..1.0e4,
            y1 in -1.0e4_f64..1.0e4,
            pick in 0.0_f64..=1.0,
        ) {
            let x1 = x0 + width;
            let x = x0 + width * pick;
            let v = interpolate_linear(x, (x0, y0), (x1, y1));
            let slack = 1e-9 * (y0.abs() + y1.abs() + 1.0);
            prop_assert!(v >= y0.min(y1) - slack && v <= y0.max(y1) + slack);
        }
    }
}
