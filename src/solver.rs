//! Solving for the local time at which the sun reaches a given angle.
//!
//! All times here are hours of local mean solar time at the observer, before the
//! UTC offset and longitude correction are applied. The `time` argument of each
//! function is a first guess of the event, as a fraction of a day, used to evaluate
//! the solar position near the event rather than at 0h.

use crate::math::{
    acos, atan, cos, degrees_to_radians, fix_hour, radians_to_degrees, sin, sqrt, tan,
};
use crate::solar::sun_position;
use crate::time::JulianDate;
use crate::types::{Coordinates, SunAngleTime};

/// Sun depression at apparent sunrise and sunset on a flat horizon, in degrees.
///
/// Covers the sun's semi-diameter plus standard atmospheric refraction.
pub const SUNRISE_DEPRESSION: f64 = 0.833;

/// Computes local solar noon in hours.
#[must_use]
pub fn mid_day(jd: JulianDate, time: f64) -> f64 {
    let equation_of_time = sun_position(jd.add_days(time)).equation_of_time();
    fix_hour(12.0 - equation_of_time)
}

/// Solves for the time the sun is `angle` degrees below the horizon.
///
/// With `ccw` the morning (before noon) crossing is returned, otherwise the evening one.
/// Negative angles describe the sun above the horizon.
#[must_use]
pub fn sun_angle_time(
    jd: JulianDate,
    angle: f64,
    time: f64,
    ccw: bool,
    coordinates: &Coordinates,
) -> SunAngleTime {
    let declination = sun_position(jd.add_days(time)).declination();
    let noon = mid_day(jd, time);
    let phi = degrees_to_radians(coordinates.latitude());

    let cos_hour_angle = (-sin(degrees_to_radians(angle)) - sin(declination) * sin(phi))
        / (cos(declination) * cos(phi));

    let signed = |hours: f64| if ccw { noon - hours } else { noon + hours };

    if cos_hour_angle < -1.0 {
        SunAngleTime::NeverBelow {
            lowest: signed(12.0),
        }
    } else if cos_hour_angle > 1.0 {
        SunAngleTime::NeverReached { transit: noon }
    } else {
        SunAngleTime::Crossing(signed(radians_to_degrees(acos(cos_hour_angle)) / 15.0))
    }
}

/// Solves for the start of Asr, when shadows reach `factor` times their noon length
/// plus the object height.
#[must_use]
pub fn asr_time(jd: JulianDate, factor: f64, time: f64, coordinates: &Coordinates) -> SunAngleTime {
    let declination = sun_position(jd.add_days(time)).declination();
    let phi = degrees_to_radians(coordinates.latitude());
    let angle = -atan(1.0 / (factor + tan((phi - declination).abs())));
    sun_angle_time(jd, radians_to_degrees(angle), time, false, coordinates)
}

/// Sun depression at sunrise and sunset for an observer at the given coordinates.
///
/// Adds the dip of the horizon seen from `elevation` meters; negative elevations count as sea level.
#[must_use]
pub fn rise_set_angle(coordinates: &Coordinates) -> f64 {
    SUNRISE_DEPRESSION + 0.0347 * sqrt(coordinates.elevation().max(0.0))
}
