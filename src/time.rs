//! Julian day conversion for the calendar date of a calculation.
//!
//! Uses the closed form from Meeus, "Astronomical Algorithms", with the Gregorian
//! correction applied unconditionally (proleptic Gregorian calendar).

#![allow(clippy::many_single_char_names)]

use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UT)
pub const J2000_JDN: f64 = 2_451_545.0;

/// Converts a proleptic Gregorian date to its Julian day at 0h UT.
///
/// No range checks: any year, month and day are pushed through the closed form.
///
/// # Example
/// ```
/// # use praytimes::time::julian_day;
/// assert_eq!(julian_day(2000, 1, 1), 2_451_544.5);
/// ```
#[must_use]
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let mut y = f64::from(year);
    let mut m = f64::from(month);

    // January and February count as months 13 and 14 of the previous year
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }

    let a = floor(y / 100.0);
    let b = 2.0 - a + floor(a / 4.0);
    floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + f64::from(day) + b - 1524.5
}

/// Julian date of a calendar day, the time base of the solar model.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate(f64);

impl JulianDate {
    /// Wraps a raw Julian date value.
    #[must_use]
    pub const fn new(jd: f64) -> Self {
        Self(jd)
    }

    /// Creates the Julian date at 0h UT of a validated Gregorian date.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is outside 1-12 or the day does not exist in that month.
    ///
    /// # Example
    /// ```
    /// # use praytimes::time::JulianDate;
    /// let jd = JulianDate::from_gregorian(2024, 2, 29).unwrap();
    /// assert_eq!(jd.value(), 2_460_369.5);
    /// assert!(JulianDate::from_gregorian(2023, 2, 29).is_err());
    /// ```
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self::from_gregorian_unchecked(year, month, day))
    }

    /// Creates the Julian date at 0h UT without validating the date.
    #[must_use]
    pub fn from_gregorian_unchecked(year: i32, month: u32, day: u32) -> Self {
        Self(julian_day(year, month, day))
    }

    /// Creates the Julian date of any chrono date-like value.
    ///
    /// Only the calendar fields are used; the time of day is ignored.
    #[cfg(feature = "chrono")]
    #[allow(clippy::needless_pass_by_value)]
    pub fn from_date_like<D: Datelike>(date: D) -> Self {
        Self::from_gregorian_unchecked(date.year(), date.month(), date.day())
    }

    /// Gets the raw Julian date value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Days elapsed since the J2000.0 epoch.
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.0 - J2000_JDN
    }

    /// Shifts the date by a (fractional) number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }

    /// Shifts the date from Greenwich to the local mean solar day at `longitude` degrees.
    #[must_use]
    pub fn at_longitude(self, longitude: f64) -> Self {
        self.add_days(-longitude / (15.0 * 24.0))
    }
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
