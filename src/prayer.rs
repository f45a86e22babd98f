//! Assembling the nine prayer times of a day.

use crate::error::{check_coordinates, check_elevation, check_utc_offset};
use crate::high_latitude::{adjust, night_length};
use crate::math::{HOURS_PER_DAY, fix_hour, time_diff};
use crate::method::CalculationMethod;
use crate::solver::{asr_time, mid_day, rise_set_angle, sun_angle_time};
use crate::time::JulianDate;
use crate::types::{
    AngleOrMinutes, AsrFactor, Coordinates, HighLatitudeMethod, MidnightMethod, PrayerTimes,
};
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, Offset, TimeZone};

// First guesses of each event as a fraction of the day
const IMSAK_GUESS: f64 = 5.0 / 24.0;
const FAJR_GUESS: f64 = 5.0 / 24.0;
const SUNRISE_GUESS: f64 = 6.0 / 24.0;
const DHUHR_GUESS: f64 = 12.0 / 24.0;
const ASR_GUESS: f64 = 13.0 / 24.0;
const SUNSET_GUESS: f64 = 18.0 / 24.0;
const MAGHRIB_GUESS: f64 = 18.0 / 24.0;
const ISHA_GUESS: f64 = 18.0 / 24.0;

// Largest gap in hours between two saturated events of the same day
const SATURATION_SLACK: f64 = 1.0 / 60.0;

/// Everything besides the date that determines the prayer times.
///
/// # Example
/// ```
/// # use praytimes::{AsrFactor, CalculationMethod, Coordinates, HighLatitudeMethod, MidnightMethod, PrayerConfig};
/// let config = PrayerConfig::new(CalculationMethod::KARACHI, Coordinates::new(24.86, 67.0, 10.0).unwrap())
///     .with_asr_factor(AsrFactor::HANAFI)
///     .with_high_latitude(HighLatitudeMethod::AngleBased);
///
/// assert_eq!(config.asr_factor(), AsrFactor::HANAFI);
/// assert_eq!(config.midnight(), MidnightMethod::Standard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrayerConfig {
    method: CalculationMethod,
    coordinates: Coordinates,
    asr_factor: AsrFactor,
    high_latitude: HighLatitudeMethod,
    midnight: Option<MidnightMethod>,
    dhuhr_minutes: f64,
}

impl PrayerConfig {
    /// Creates a configuration with the standard Asr factor, `NightMiddle` high latitude
    /// adjustment, the method's own Midnight convention and no Dhuhr offset.
    #[must_use]
    pub const fn new(method: CalculationMethod, coordinates: Coordinates) -> Self {
        Self {
            method,
            coordinates,
            asr_factor: AsrFactor::STANDARD,
            high_latitude: HighLatitudeMethod::NightMiddle,
            midnight: None,
            dhuhr_minutes: 0.0,
        }
    }

    /// Replaces the Asr shadow factor.
    #[must_use]
    pub const fn with_asr_factor(mut self, asr_factor: AsrFactor) -> Self {
        self.asr_factor = asr_factor;
        self
    }

    /// Replaces the high latitude adjustment.
    #[must_use]
    pub const fn with_high_latitude(mut self, high_latitude: HighLatitudeMethod) -> Self {
        self.high_latitude = high_latitude;
        self
    }

    /// Overrides the method's Midnight convention.
    #[must_use]
    pub const fn with_midnight(mut self, midnight: MidnightMethod) -> Self {
        self.midnight = Some(midnight);
        self
    }

    /// Adds a fixed number of minutes to Dhuhr.
    #[must_use]
    pub const fn with_dhuhr_minutes(mut self, minutes: f64) -> Self {
        self.dhuhr_minutes = minutes;
        self
    }

    /// Gets the calculation method.
    #[must_use]
    pub const fn method(&self) -> &CalculationMethod {
        &self.method
    }

    /// Gets the observer location.
    #[must_use]
    pub const fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// Gets the Asr shadow factor.
    #[must_use]
    pub const fn asr_factor(&self) -> AsrFactor {
        self.asr_factor
    }

    /// Gets the high latitude adjustment.
    #[must_use]
    pub const fn high_latitude(&self) -> HighLatitudeMethod {
        self.high_latitude
    }

    /// Gets the Midnight convention in effect, falling back to the method's default.
    #[must_use]
    pub const fn midnight(&self) -> MidnightMethod {
        match self.midnight {
            Some(midnight) => midnight,
            None => self.method.midnight(),
        }
    }

    /// Gets the Dhuhr offset in minutes.
    #[must_use]
    pub const fn dhuhr_minutes(&self) -> f64 {
        self.dhuhr_minutes
    }
}

/// Computes the prayer times of one day.
///
/// `utc_offset` is the civil time zone offset in hours (3.5 for UTC+03:30); the
/// results are hours of that civil time in [0, 24). The computation never fails:
/// days on which the sun does not reach an angle are resolved by the high latitude
/// adjustment, or by the sun's closest approach when adjustment is disabled.
///
/// # Example
/// ```
/// use praytimes::{prayer_times, CalculationMethod, Coordinates, PrayerConfig};
///
/// let config = PrayerConfig::new(
///     CalculationMethod::TEHRAN,
///     Coordinates::new(35.7, 51.4, 1200.0).unwrap(),
/// );
/// let times = prayer_times(2024, 4, 15, 3.5, &config);
///
/// assert!(times.fajr() < times.sunrise());
/// assert!(times.sunrise() < times.dhuhr() && times.dhuhr() < times.sunset());
/// ```
#[must_use]
pub fn prayer_times(
    year: i32,
    month: u32,
    day: u32,
    utc_offset: f64,
    config: &PrayerConfig,
) -> PrayerTimes {
    let coordinates = config.coordinates();
    let method = config.method();
    let high_latitude = config.high_latitude();

    let jd = JulianDate::from_gregorian_unchecked(year, month, day)
        .at_longitude(coordinates.longitude());
    let shift = utc_offset - coordinates.longitude() / 15.0;

    let rise_angle = rise_set_angle(coordinates);
    let sunrise = sun_angle_time(jd, rise_angle, SUNRISE_GUESS, true, coordinates).shifted(shift);
    let sunset = sun_angle_time(jd, rise_angle, SUNSET_GUESS, false, coordinates).shifted(shift);
    let night = night_length(sunrise, sunset);
    let (sunrise, sunset) = (sunrise.closest(), sunset.closest());

    let dhuhr = mid_day(jd, DHUHR_GUESS) + shift + config.dhuhr_minutes() / 60.0;
    let asr = asr_time(jd, config.asr_factor().value(), ASR_GUESS, coordinates)
        .shifted(shift)
        .closest();

    // Angle-based twilight, bounded around its anchor
    let twilight = |parameter: AngleOrMinutes, guess: f64, anchor: f64, ccw: bool| {
        parameter.degrees().map(|angle| {
            let time = sun_angle_time(jd, angle, guess, ccw, coordinates).shifted(shift);
            adjust(high_latitude, time, anchor, angle, night, ccw)
        })
    };

    let fajr = twilight(method.fajr(), FAJR_GUESS, sunrise, true)
        .unwrap_or_else(|| sunrise - method.fajr().value() / 60.0);
    let imsak = twilight(method.imsak(), IMSAK_GUESS, sunrise, true)
        .unwrap_or_else(|| fajr - method.imsak().value() / 60.0);
    let maghrib = twilight(method.maghrib(), MAGHRIB_GUESS, sunset, false)
        .unwrap_or_else(|| sunset + method.maghrib().value() / 60.0);
    let isha = twilight(method.isha(), ISHA_GUESS, sunset, false)
        .unwrap_or_else(|| maghrib + method.isha().value() / 60.0);

    // Spans are measured inside the night so saturated endpoints keep its length
    let to_sunrise = night;
    let to_fajr = (night - short_span(fajr, sunrise)).max(0.0);
    let maghrib_delay = short_span(sunset, maghrib);

    let midnight = match config.midnight() {
        MidnightMethod::Standard => sunset + to_sunrise / 2.0,
        MidnightMethod::Jafari => sunset + to_fajr / 2.0,
        MidnightMethod::MaghribToSunrise => maghrib + (to_sunrise - maghrib_delay).max(0.0) / 2.0,
        MidnightMethod::MaghribToFajr => maghrib + (to_fajr - maghrib_delay).max(0.0) / 2.0,
    };

    PrayerTimes {
        imsak: fix_hour(imsak),
        fajr: fix_hour(fajr),
        sunrise: fix_hour(sunrise),
        dhuhr: fix_hour(dhuhr),
        asr: fix_hour(asr),
        sunset: fix_hour(sunset),
        maghrib: fix_hour(maghrib),
        isha: fix_hour(isha),
        midnight: fix_hour(midnight),
    }
}

/// Clockwise distance from `from` to `to`, reading a wrap to almost a full day as zero.
///
/// Saturated events are solved at different first guesses and may land a few seconds
/// apart in either order.
fn short_span(from: f64, to: f64) -> f64 {
    let span = time_diff(from, to);
    if span > HOURS_PER_DAY - SATURATION_SLACK {
        0.0
    } else {
        span
    }
}

/// Computes the prayer times of one day after validating every input.
///
/// # Errors
/// Returns `InvalidDate` for a date outside the Gregorian calendar, `InvalidUtcOffset`
/// for an offset outside -12 to +14 hours, and `InvalidLatitude`, `InvalidLongitude`
/// or `InvalidElevation` for coordinates built with [`Coordinates::new_unchecked`].
pub fn prayer_times_checked(
    year: i32,
    month: u32,
    day: u32,
    utc_offset: f64,
    config: &PrayerConfig,
) -> Result<PrayerTimes> {
    JulianDate::from_gregorian(year, month, day)?;
    check_utc_offset(utc_offset)?;
    let coordinates = config.coordinates();
    check_coordinates(coordinates.latitude(), coordinates.longitude())?;
    check_elevation(coordinates.elevation())?;
    Ok(prayer_times(year, month, day, utc_offset, config))
}

/// Computes the prayer times for the local calendar day of `datetime`.
///
/// The UTC offset in effect at `datetime` is used for the whole day, so on days with a
/// daylight saving transition pass a time on the side of the transition you want.
///
/// # Example
/// ```
/// # use praytimes::{prayer_times_for_date, CalculationMethod, Coordinates, PrayerConfig};
/// use chrono::{DateTime, FixedOffset};
///
/// let date = "2018-09-05T12:00:00-04:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let config = PrayerConfig::new(CalculationMethod::ISNA, Coordinates::new(43.0, -80.0, 0.0).unwrap());
///
/// let times = prayer_times_for_date(&date, &config);
/// assert!((times.dhuhr() - (13.0 + 19.0 / 60.0)).abs() < 1.0 / 60.0);
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn prayer_times_for_date<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    config: &PrayerConfig,
) -> PrayerTimes {
    let utc_offset = f64::from(datetime.offset().fix().local_minus_utc()) / 3600.0;
    prayer_times(
        datetime.year(),
        datetime.month(),
        datetime.day(),
        utc_offset,
        config,
    )
}
