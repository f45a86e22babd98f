//! Low-precision solar coordinates.
//!
//! Follows the USNO approximation of the sun's apparent position
//! (<https://aa.usno.navy.mil/faq/sun_approx>), good to about one arcminute
//! within two centuries of 2000. That is well below the precision prayer times need.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::{asin, atan2, cos, degrees_to_radians, fix_hour, radians_to_degrees, sin};
use crate::time::JulianDate;

/// Declination and equation of time of the sun for one Julian date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Declination in radians
    declination: f64,
    /// Equation of time in hours
    equation_of_time: f64,
}

impl SolarPosition {
    /// Gets the declination in radians.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the equation of time in hours (apparent minus mean solar time).
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }
}

/// Computes the sun's declination and the equation of time.
///
/// Valid for any Julian date; accuracy degrades slowly away from J2000.0.
///
/// # Example
/// ```
/// # use praytimes::{solar::sun_position, time::JulianDate};
/// // near the March equinox the declination is close to zero
/// let position = sun_position(JulianDate::from_gregorian_unchecked(2024, 3, 20));
/// assert!(position.declination().to_degrees().abs() < 0.5);
/// ```
#[must_use]
pub fn sun_position(jd: JulianDate) -> SolarPosition {
    let d = jd.days_since_j2000();

    // mean anomaly and mean longitude
    let g = (357.529 + 0.98560028 * d) % 360.0;
    let q = (280.459 + 0.98564736 * d) % 360.0;

    // apparent ecliptic longitude
    let g_rad = degrees_to_radians(g);
    let l = (q + 1.915 * sin(g_rad) + 0.020 * sin(2.0 * g_rad)) % 360.0;
    let l_rad = degrees_to_radians(l);

    // obliquity of the ecliptic
    let e_rad = degrees_to_radians(23.439 - 0.00000036 * d);

    let right_ascension = radians_to_degrees(atan2(cos(e_rad) * sin(l_rad), cos(l_rad))) / 15.0;

    SolarPosition {
        declination: asin(sin(e_rad) * sin(l_rad)),
        equation_of_time: q / 15.0 - fix_hour(right_ascension),
    }
}
