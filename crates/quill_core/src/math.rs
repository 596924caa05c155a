//! Scalar helpers
//!
//! Small, pure functions over `f64` used throughout the shape library:
//! range normalization and remapping, wrapping, clamping, and trig mapped
//! into an arbitrary range. None of them allocate or special-case
//! degenerate ranges; NaN and infinities flow through per IEEE 754.

use std::f64::consts::PI;

/// A full turn in radians.
pub const TWO_PI: f64 = PI * 2.0;

/// A quarter turn in radians.
pub const HALF_PI: f64 = PI / 2.0;

/// Position of `value` within `[min, max]`, where `min` maps to 0 and `max` to 1.
#[inline]
pub fn norm(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

/// Linear interpolation. `t` is not clamped.
#[inline]
pub fn lerp(t: f64, min: f64, max: f64) -> f64 {
    min + (max - min) * t
}

/// Map `value` from the source range onto the destination range.
#[inline]
pub fn map_to(value: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> f64 {
    lerp(norm(value, src_min, src_max), dst_min, dst_max)
}

/// Wrap `value` into the half-open range `[min, max)`.
///
/// Negative offsets wrap from the top of the range, so `wrap(-1.0, 0.0, 10.0)`
/// is `9.0`.
#[inline]
pub fn wrap(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    min + ((value - min) % range + range) % range
}

/// Clip `value` into the range spanned by `a` and `b`.
///
/// The bounds may be given in either order.
#[inline]
pub fn clamp(value: f64, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a > b { (b, a) } else { (a, b) };
    let mut result = value;
    if value < lo {
        result = lo;
    }
    if value > hi {
        result = hi;
    }
    result
}

/// `sin(angle)` remapped from `[-1, 1]` onto `[min, max]`.
#[inline]
pub fn sin_range(angle: f64, min: f64, max: f64) -> f64 {
    map_to(angle.sin(), -1.0, 1.0, min, max)
}

/// `cos(angle)` remapped from `[-1, 1]` onto `[min, max]`.
#[inline]
pub fn cos_range(angle: f64, min: f64, max: f64) -> f64 {
    map_to(angle.cos(), -1.0, 1.0, min, max)
}

/// Whether `a` and `b` differ by at most `delta`.
#[inline]
pub fn equalish(a: f64, b: f64, delta: f64) -> bool {
    (a - b).abs() <= delta
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_norm_and_lerp() {
        assert_eq!(norm(5.0, 0.0, 10.0), 0.5);
        assert_eq!(norm(-5.0, 0.0, 10.0), -0.5);
        assert_eq!(lerp(0.25, 100.0, 200.0), 125.0);
        // no clamping
        assert_eq!(lerp(2.0, 0.0, 10.0), 20.0);
    }

    #[test]
    fn test_norm_degenerate_range() {
        assert!(norm(1.0, 3.0, 3.0).is_infinite());
        assert!(norm(3.0, 3.0, 3.0).is_nan());
    }

    #[test]
    fn test_map_to_round_trip() {
        let ranges = [(0.0, 1.0), (-10.0, 10.0), (5.0, -5.0), (100.0, 250.5)];
        for &(lo, hi) in &ranges {
            for step in -4..=14 {
                let t = step as f64 / 10.0;
                let v = lerp(t, lo, hi);
                assert!(equalish(map_to(v, lo, hi, lo, hi), v, EPS));
            }
        }
    }

    #[test]
    fn test_map_to_between_ranges() {
        assert_eq!(map_to(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
        assert_eq!(map_to(0.0, -1.0, 1.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn test_clamp_bounds_either_order() {
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(15.0, 10.0, 0.0), 10.0);
        assert_eq!(clamp(-3.0, 10.0, 0.0), 0.0);
        assert_eq!(clamp(4.0, 10.0, 0.0), 4.0);
    }

    #[test]
    fn test_clamp_in_range_and_idempotent() {
        let bounds = [(0.0, 1.0), (1.0, 0.0), (-5.0, 5.0), (3.0, 3.0)];
        for &(a, b) in &bounds {
            for step in -20..=20 {
                let v = step as f64 * 0.75;
                let c = clamp(v, a, b);
                assert!(c >= a.min(b) && c <= a.max(b));
                assert_eq!(clamp(c, a, b), c);
            }
        }
    }

    #[test]
    fn test_clamp_passes_nan_through() {
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_wrap_negative_values() {
        assert_eq!(wrap(-1.0, 0.0, 10.0), 9.0);
        assert_eq!(wrap(12.0, 0.0, 10.0), 2.0);
        assert_eq!(wrap(10.0, 0.0, 10.0), 0.0);
        assert_eq!(wrap(-15.0, -10.0, 10.0), 5.0);
    }

    #[test]
    fn test_wrap_range_and_period() {
        let (lo, hi) = (-3.0, 7.0);
        let r = hi - lo;
        for step in -50..=50 {
            let v = step as f64 * 0.37;
            let w = wrap(v, lo, hi);
            assert!(w >= lo && w < hi, "wrap({v}) = {w}");
            for k in -3..=3 {
                let shifted = wrap(v + k as f64 * r, lo, hi);
                // values that land on the seam may come back as either end
                let diff = (shifted - w).abs();
                assert!(diff < 1e-9 || (r - diff).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_trig_ranges() {
        assert!(equalish(sin_range(0.0, 0.0, 10.0), 5.0, EPS));
        assert!(equalish(sin_range(HALF_PI, 0.0, 10.0), 10.0, EPS));
        assert!(equalish(cos_range(0.0, 0.0, 10.0), 10.0, EPS));
        assert!(equalish(cos_range(PI, 0.0, 10.0), 0.0, EPS));
        assert!(equalish(cos_range(TWO_PI, -2.0, 2.0), 2.0, EPS));
    }

    #[test]
    fn test_equalish() {
        for &a in &[0.0, -1.5, 1e12, f64::MIN_POSITIVE] {
            assert!(equalish(a, a, 0.0));
        }
        let pairs = [(1.0, 1.05, 0.1), (1.0, 2.0, 0.5), (-3.0, 3.0, 6.0)];
        for &(a, b, d) in &pairs {
            assert_eq!(equalish(a, b, d), equalish(b, a, d));
        }
        assert!(equalish(1.0, 1.05, 0.1));
        assert!(!equalish(1.0, 2.0, 0.5));
    }
}
