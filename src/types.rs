//! Core value types for prayer time calculations.

use core::str::FromStr;

use crate::error::{check_coordinates, check_elevation};
use crate::{Error, Result};

/// Observer location on the Earth.
///
/// # Example
/// ```
/// # use praytimes::Coordinates;
/// let tehran = Coordinates::new(35.7, 51.4, 1200.0).unwrap();
/// assert_eq!(tehran.latitude(), 35.7);
/// assert!(Coordinates::new(95.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    /// Latitude in degrees, north positive
    latitude: f64,
    /// Longitude in degrees, east positive
    longitude: f64,
    /// Height above sea level in meters
    elevation: f64,
}

impl Coordinates {
    /// Creates validated coordinates.
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidElevation` for out-of-range values.
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_elevation(elevation)?;
        Ok(Self::new_unchecked(latitude, longitude, elevation))
    }

    /// Creates coordinates without range checks.
    ///
    /// The calculation accepts any values; out-of-range input gives meaningless but finite times.
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the elevation in meters as given, possibly negative.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }
}

/// A prayer time parameter: either a sun depression angle or a fixed offset in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AngleOrMinutes {
    /// Sun depression angle below the horizon, in degrees
    Degrees(f64),
    /// Offset in minutes from a related prayer time
    Minutes(f64),
}

impl AngleOrMinutes {
    /// Gets the raw number regardless of its unit.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::Degrees(value) | Self::Minutes(value) => *value,
        }
    }

    /// Gets the angle if this is an angle.
    #[must_use]
    pub const fn degrees(&self) -> Option<f64> {
        match self {
            Self::Degrees(value) => Some(*value),
            Self::Minutes(_) => None,
        }
    }

    /// Gets the minute offset if this is an offset.
    #[must_use]
    pub const fn minutes(&self) -> Option<f64> {
        match self {
            Self::Minutes(value) => Some(*value),
            Self::Degrees(_) => None,
        }
    }

    /// Checks if this is a minute offset.
    #[must_use]
    pub const fn is_minutes(&self) -> bool {
        matches!(self, Self::Minutes(_))
    }
}

/// Shadow length multiplier defining the start of Asr.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct AsrFactor(f64);

impl AsrFactor {
    /// Shafi'i, Maliki, Ja'fari and Hanbali: shadow equals object length
    pub const STANDARD: Self = Self(1.0);
    /// Hanafi: shadow twice the object length
    pub const HANAFI: Self = Self(2.0);

    /// Creates a custom shadow factor.
    ///
    /// # Errors
    /// Returns `InvalidAsrFactor` unless the factor is finite and positive.
    pub fn new(factor: f64) -> Result<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(Error::invalid_asr_factor(factor));
        }
        Ok(Self(factor))
    }

    /// Gets the shadow factor.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for AsrFactor {
    type Error = Error;

    fn try_from(factor: f64) -> Result<Self> {
        Self::new(factor)
    }
}

impl From<AsrFactor> for f64 {
    fn from(factor: AsrFactor) -> Self {
        factor.0
    }
}

impl Default for AsrFactor {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl FromStr for AsrFactor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("standard") {
            Ok(Self::STANDARD)
        } else if s.eq_ignore_ascii_case("hanafi") {
            Ok(Self::HANAFI)
        } else {
            Err(Error::unknown_name("asr method"))
        }
    }
}

/// Strategy for bounding twilight times at high latitudes, e.g. Scandinavian summers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighLatitudeMethod {
    /// At most half of the night
    #[default]
    NightMiddle,
    /// At most angle/60 of the night
    AngleBased,
    /// At most one seventh of the night
    OneSeventh,
    /// No adjustment
    None,
}

impl FromStr for HighLatitudeMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        [
            ("NightMiddle", Self::NightMiddle),
            ("AngleBased", Self::AngleBased),
            ("OneSeventh", Self::OneSeventh),
            ("None", Self::None),
        ]
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, method)| method)
        .ok_or(Error::unknown_name("high latitude method"))
    }
}

/// Which interval of the night is halved to find Midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MidnightMethod {
    /// Mid Sunset to Sunrise
    #[default]
    Standard,
    /// Mid Sunset to Fajr
    Jafari,
    /// Mid Maghrib to Sunrise
    MaghribToSunrise,
    /// Mid Maghrib to Fajr
    MaghribToFajr,
}

impl MidnightMethod {
    /// Checks if the method only differs from the sunset-based ones when Maghrib follows Sunset,
    /// as in the Jafari conventions.
    #[must_use]
    pub const fn is_jafari_only(&self) -> bool {
        matches!(self, Self::MaghribToSunrise | Self::MaghribToFajr)
    }
}

impl FromStr for MidnightMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        [
            ("Standard", Self::Standard),
            ("Jafari", Self::Jafari),
            ("MaghribToSunrise", Self::MaghribToSunrise),
            ("MaghribToFajr", Self::MaghribToFajr),
        ]
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, method)| method)
        .ok_or(Error::unknown_name("midnight method"))
    }
}

/// Outcome of solving for the moment the sun reaches a given angle.
///
/// Values are hours of local mean solar time and may lie outside [0, 24).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunAngleTime {
    /// The sun crosses the angle at this time
    Crossing(f64),
    /// The sun stays above the angle all day; carries the time of its lowest point
    NeverBelow {
        /// Solar midnight on the requested side of noon
        lowest: f64,
    },
    /// The sun never climbs to the angle; carries the time of its highest point
    NeverReached {
        /// Solar noon
        transit: f64,
    },
}

impl SunAngleTime {
    /// Gets the crossing time, if the sun reaches the angle on this day.
    #[must_use]
    pub const fn crossing(&self) -> Option<f64> {
        match self {
            Self::Crossing(hours) => Some(*hours),
            Self::NeverBelow { .. } | Self::NeverReached { .. } => None,
        }
    }

    /// Gets the crossing time, or the closest approach to the angle when there is none.
    #[must_use]
    pub const fn closest(&self) -> f64 {
        match self {
            Self::Crossing(hours) => *hours,
            Self::NeverBelow { lowest } => *lowest,
            Self::NeverReached { transit } => *transit,
        }
    }

    /// Checks if the sun crosses the angle.
    #[must_use]
    pub const fn is_crossing(&self) -> bool {
        matches!(self, Self::Crossing(_))
    }

    /// Moves every carried time by `hours`, e.g. from solar to civil time.
    #[must_use]
    pub fn shifted(self, hours: f64) -> Self {
        match self {
            Self::Crossing(time) => Self::Crossing(time + hours),
            Self::NeverBelow { lowest } => Self::NeverBelow {
                lowest: lowest + hours,
            },
            Self::NeverReached { transit } => Self::NeverReached {
                transit: transit + hours,
            },
        }
    }
}

/// Names one of the nine computed instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prayer {
    /// Start of the fast
    Imsak,
    /// Dawn
    Fajr,
    /// Sunrise
    Sunrise,
    /// Midday
    Dhuhr,
    /// Afternoon
    Asr,
    /// Sunset
    Sunset,
    /// Evening
    Maghrib,
    /// Night
    Isha,
    /// Islamic midnight
    Midnight,
}

impl Prayer {
    /// All instants in the order of [`PrayerTimes::as_array`].
    pub const ALL: [Self; 9] = [
        Self::Imsak,
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Sunset,
        Self::Maghrib,
        Self::Isha,
        Self::Midnight,
    ];

    /// English name of the instant.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Imsak => "Imsak",
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Sunset => "Sunset",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
            Self::Midnight => "Midnight",
        }
    }
}

/// The nine times of one day, each in hours of civil time in [0, 24).
///
/// Clock formatting is left to the caller. Values are only produced by the calculation,
/// so the type serializes but does not deserialize.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrayerTimes {
    pub(crate) imsak: f64,
    pub(crate) fajr: f64,
    pub(crate) sunrise: f64,
    pub(crate) dhuhr: f64,
    pub(crate) asr: f64,
    pub(crate) sunset: f64,
    pub(crate) maghrib: f64,
    pub(crate) isha: f64,
    pub(crate) midnight: f64,
}

impl PrayerTimes {
    /// Imsak, when the fast starts in Ramadan.
    #[must_use]
    pub const fn imsak(&self) -> f64 {
        self.imsak
    }

    /// Fajr, dawn.
    #[must_use]
    pub const fn fajr(&self) -> f64 {
        self.fajr
    }

    /// Sunrise.
    #[must_use]
    pub const fn sunrise(&self) -> f64 {
        self.sunrise
    }

    /// Dhuhr, midday.
    #[must_use]
    pub const fn dhuhr(&self) -> f64 {
        self.dhuhr
    }

    /// Asr, afternoon.
    #[must_use]
    pub const fn asr(&self) -> f64 {
        self.asr
    }

    /// Sunset.
    #[must_use]
    pub const fn sunset(&self) -> f64 {
        self.sunset
    }

    /// Maghrib, evening.
    #[must_use]
    pub const fn maghrib(&self) -> f64 {
        self.maghrib
    }

    /// Isha, night.
    #[must_use]
    pub const fn isha(&self) -> f64 {
        self.isha
    }

    /// Islamic midnight.
    #[must_use]
    pub const fn midnight(&self) -> f64 {
        self.midnight
    }

    /// Gets the time of one instant.
    #[must_use]
    pub const fn get(&self, prayer: Prayer) -> f64 {
        match prayer {
            Prayer::Imsak => self.imsak,
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Sunset => self.sunset,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
            Prayer::Midnight => self.midnight,
        }
    }

    /// All nine times in [`Prayer::ALL`] order.
    #[must_use]
    pub const fn as_array(&self) -> [f64; 9] {
        [
            self.imsak,
            self.fajr,
            self.sunrise,
            self.dhuhr,
            self.asr,
            self.sunset,
            self.maghrib,
            self.isha,
            self.midnight,
        ]
    }
}
