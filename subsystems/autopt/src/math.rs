//! # Math Utilities for no_std
//!
//! Thin wrappers over `libm` plus the finite-value guards every public
//! output passes through.

/// Square root for f64
#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

/// Absolute value
#[inline]
pub fn abs(x: f64) -> f64 {
    libm::fabs(x)
}

/// Minimum of two values (NaN-ignoring)
#[inline]
pub fn min(a: f64, b: f64) -> f64 {
    libm::fmin(a, b)
}

/// Maximum of two values (NaN-ignoring)
#[inline]
pub fn max(a: f64, b: f64) -> f64 {
    libm::fmax(a, b)
}

// ============================================================================
// FINITE GUARDS
// ============================================================================

/// Replace NaN/Inf with `fallback`
#[inline]
pub fn finite_or(x: f64, fallback: f64) -> f64 {
    if x.is_finite() { x } else { fallback }
}

/// Clamp to `[lo, hi]`; infinities go to the matching bound, NaN goes to `lo`
#[inline]
pub fn clamp_finite(x: f64, lo: f64, hi: f64) -> f64 {
    if x.is_nan() {
        lo
    } else if x == f64::INFINITY {
        hi
    } else if x == f64::NEG_INFINITY {
        lo
    } else {
        x.clamp(lo, hi)
    }
}

/// Clamp to the unit interval
#[inline(always)]
pub fn unit(x: f64) -> f64 {
    clamp_finite(x, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_finite_bounds() {
        assert_eq!(clamp_finite(f64::NAN, 0.0, 2.0), 0.0);
        assert_eq!(clamp_finite(f64::INFINITY, 0.0, 2.0), 2.0);
        assert_eq!(clamp_finite(f64::NEG_INFINITY, 0.0, 2.0), 0.0);
        assert_eq!(clamp_finite(1.5, 0.0, 2.0), 1.5);
        assert_eq!(clamp_finite(-3.0, 0.0, 2.0), 0.0);
    }

    #[test]
    fn test_finite_or() {
        assert_eq!(finite_or(f64::NAN, 0.5), 0.5);
        assert_eq!(finite_or(0.25, 0.5), 0.25);
    }

    #[test]
    fn test_libm_wrappers() {
        assert!((sqrt(16.0) - 4.0).abs() < 1e-12);
        assert_eq!(abs(-2.5), 2.5);
        assert_eq!(min(f64::NAN, 1.0), 1.0);
        assert_eq!(max(0.1, 0.2), 0.2);
    }
}
