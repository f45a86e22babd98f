//! Mathematical utilities for the prayer time calculations.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// Hours in a day, the modulus for all clock values.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Wraps a value in hours into [0, 24).
///
/// Tiny negative inputs would otherwise round up to exactly 24.0, so that case folds to 0.
pub fn fix_hour(hours: f64) -> f64 {
    let mut normalized = hours % HOURS_PER_DAY;
    if normalized < 0.0 {
        normalized += HOURS_PER_DAY;
    }
    if normalized >= HOURS_PER_DAY {
        0.0
    } else {
        normalized
    }
}

/// Clockwise distance in hours from `from` to `to`, in [0, 24).
pub fn time_diff(from: f64, to: f64) -> f64 {
    fix_hour(to - from)
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes sqrt(x) using the appropriate function for the compilation target.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_radian_conversion() {
        use core::f64::consts::PI;

        assert!((degrees_to_radians(180.0) - PI).abs() < EPSILON);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < EPSILON);
        assert!((radians_to_degrees(PI) - 180.0).abs() < EPSILON);
        assert!((radians_to_degrees(0.0)).abs() < EPSILON);
    }

    #[test]
    fn test_fix_hour_known_values() {
        assert_eq!(fix_hour(-1.0), 23.0);
        assert_eq!(fix_hour(25.0), 1.0);
        assert_eq!(fix_hour(0.0), 0.0);
        assert_eq!(fix_hour(24.0), 0.0);
        assert_eq!(fix_hour(-24.0), 0.0);
        assert_eq!(fix_hour(12.5), 12.5);
        assert_eq!(fix_hour(-49.5), 22.5);
    }

    #[test]
    fn test_fix_hour_tiny_negative_stays_in_range() {
        let fixed = fix_hour(-1e-20);
        assert!((0.0..24.0).contains(&fixed), "got {fixed}");
    }

    #[test]
    fn test_fix_hour_is_idempotent() {
        for i in -2000..=2000 {
            let x = f64::from(i) * 0.37 + 0.001;
            let once = fix_hour(x);
            assert!((0.0..24.0).contains(&once), "fix_hour({x}) = {once}");
            assert_eq!(fix_hour(once), once);
        }
    }

    #[test]
    fn test_time_diff_wraps_past_midnight() {
        assert!((time_diff(20.0, 5.0) - 9.0).abs() < EPSILON);
        assert!((time_diff(5.0, 20.0) - 15.0).abs() < EPSILON);
        assert_eq!(time_diff(7.0, 7.0), 0.0);
    }

    #[test]
    fn test_trigonometric_functions() {
        assert!((sin(0.0)).abs() < EPSILON);
        assert!((cos(0.0) - 1.0).abs() < EPSILON);
        assert!((tan(0.0)).abs() < EPSILON);
        assert!((acos(1.0)).abs() < EPSILON);
        assert!(acos(1.5).is_nan());
    }
}
