//! Bounding twilight times at high latitudes.
//!
//! Near the poles the sun may never get deep enough below the horizon for Fajr or Isha,
//! or does so absurdly close to midnight. Each strategy caps the distance between
//! the twilight time and its anchor (Sunrise for morning times, Sunset for evening ones)
//! to a portion of the night.

use crate::math::{HOURS_PER_DAY, time_diff};
use crate::types::{HighLatitudeMethod, SunAngleTime};

/// Largest allowed distance from the anchor, in hours, or `None` when no bound applies.
///
/// `angle` is the parameter of the prayer being bounded; only `AngleBased` uses it.
///
/// # Example
/// ```
/// # use praytimes::{high_latitude::night_portion, HighLatitudeMethod};
/// assert_eq!(night_portion(HighLatitudeMethod::NightMiddle, 15.0, 8.0), Some(4.0));
/// assert_eq!(night_portion(HighLatitudeMethod::AngleBased, 15.0, 8.0), Some(2.0));
/// assert_eq!(night_portion(HighLatitudeMethod::None, 15.0, 8.0), None);
/// ```
#[must_use]
pub fn night_portion(method: HighLatitudeMethod, angle: f64, night: f64) -> Option<f64> {
    let fraction = match method {
        HighLatitudeMethod::NightMiddle => 0.5,
        HighLatitudeMethod::AngleBased => angle / 60.0,
        HighLatitudeMethod::OneSeventh => 1.0 / 7.0,
        HighLatitudeMethod::None => return None,
    };
    Some(fraction * night)
}

/// Length of the night in hours, from Sunset to the next Sunrise.
///
/// During polar night, when the sun never rises, the whole day counts as night; under
/// the midnight sun there is no night at all.
#[must_use]
pub fn night_length(sunrise: SunAngleTime, sunset: SunAngleTime) -> f64 {
    match (sunrise, sunset) {
        (SunAngleTime::NeverReached { .. }, SunAngleTime::NeverReached { .. }) => HOURS_PER_DAY,
        (SunAngleTime::NeverBelow { .. }, SunAngleTime::NeverBelow { .. }) => 0.0,
        _ => time_diff(sunset.closest(), sunrise.closest()),
    }
}

/// Bounds a twilight time to its portion of the night.
///
/// `ccw` marks a morning time anchored before `anchor` (Sunrise); otherwise the time
/// follows `anchor` (Sunset). A missing crossing, or one further from the anchor than
/// the allowed portion, is replaced with `anchor ∓ portion`. With
/// [`HighLatitudeMethod::None`] the time is returned as solved, falling back to the
/// sun's closest approach when there is no crossing.
#[must_use]
pub fn adjust(
    method: HighLatitudeMethod,
    time: SunAngleTime,
    anchor: f64,
    angle: f64,
    night: f64,
    ccw: bool,
) -> f64 {
    let Some(portion) = night_portion(method, angle, night) else {
        return time.closest();
    };

    match time.crossing() {
        Some(hours) => {
            let distance = if ccw {
                time_diff(hours, anchor)
            } else {
                time_diff(anchor, hours)
            };
            if distance > portion {
                bounded(anchor, portion, ccw)
            } else {
                hours
            }
        }
        None => bounded(anchor, portion, ccw),
    }
}

fn bounded(anchor: f64, portion: f64, ccw: bool) -> f64 {
    if ccw { anchor - portion } else { anchor + portion }
}
