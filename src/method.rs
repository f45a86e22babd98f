//! Calculation methods: the published conventions as a table of plain records.

use core::str::FromStr;

use crate::types::{AngleOrMinutes, MidnightMethod};
use crate::{Error, Result};

/// Imsak used by all published methods: ten minutes before Fajr.
pub const DEFAULT_IMSAK: AngleOrMinutes = AngleOrMinutes::Minutes(10.0);

/// Parameters of one calculation convention.
///
/// The named constants cover the widely used authorities. Custom conventions are built
/// with [`CalculationMethod::custom`] and the `with_*` methods.
///
/// # Example
/// ```
/// # use praytimes::{AngleOrMinutes, CalculationMethod, MidnightMethod};
/// let method: CalculationMethod = "tehran".parse().unwrap();
/// assert_eq!(method.fajr(), AngleOrMinutes::Degrees(17.7));
/// assert_eq!(method.midnight(), MidnightMethod::Jafari);
///
/// let local = CalculationMethod::custom("Local", AngleOrMinutes::Degrees(18.0), AngleOrMinutes::Minutes(75.0))
///     .with_imsak(AngleOrMinutes::Degrees(19.0));
/// assert_eq!(local.isha(), AngleOrMinutes::Minutes(75.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalculationMethod {
    name: &'static str,
    description: &'static str,
    fajr: AngleOrMinutes,
    isha: AngleOrMinutes,
    maghrib: AngleOrMinutes,
    imsak: AngleOrMinutes,
    midnight: MidnightMethod,
}

impl CalculationMethod {
    /// Muslim World League
    pub const MWL: Self = Self::custom(
        "MWL",
        AngleOrMinutes::Degrees(18.0),
        AngleOrMinutes::Degrees(17.0),
    )
    .with_description("Muslim World League");

    /// Islamic Society of North America
    pub const ISNA: Self = Self::custom(
        "ISNA",
        AngleOrMinutes::Degrees(15.0),
        AngleOrMinutes::Degrees(15.0),
    )
    .with_description("Islamic Society of North America");

    /// Egyptian General Authority of Survey
    pub const EGYPT: Self = Self::custom(
        "Egypt",
        AngleOrMinutes::Degrees(19.5),
        AngleOrMinutes::Degrees(17.5),
    )
    .with_description("Egyptian General Authority of Survey");

    /// Umm Al-Qura University, Makkah
    pub const MAKKAH: Self = Self::custom(
        "Makkah",
        AngleOrMinutes::Degrees(18.5),
        AngleOrMinutes::Minutes(90.0),
    )
    .with_description("Umm Al-Qura University, Makkah");

    /// University of Islamic Sciences, Karachi
    pub const KARACHI: Self = Self::custom(
        "Karachi",
        AngleOrMinutes::Degrees(18.0),
        AngleOrMinutes::Degrees(18.0),
    )
    .with_description("University of Islamic Sciences, Karachi");

    /// Institute of Geophysics, University of Tehran
    pub const TEHRAN: Self = Self::custom(
        "Tehran",
        AngleOrMinutes::Degrees(17.7),
        AngleOrMinutes::Degrees(14.0),
    )
    .with_maghrib(AngleOrMinutes::Degrees(4.5))
    .with_midnight(MidnightMethod::Jafari)
    .with_description("Institute of Geophysics, University of Tehran");

    /// Shia Ithna-Ashari, Leva Institute, Qum
    pub const JAFARI: Self = Self::custom(
        "Jafari",
        AngleOrMinutes::Degrees(16.0),
        AngleOrMinutes::Degrees(14.0),
    )
    .with_maghrib(AngleOrMinutes::Degrees(4.0))
    .with_midnight(MidnightMethod::Jafari)
    .with_description("Shia Ithna-Ashari, Leva Institute, Qum");

    /// Union des Organisations Islamiques de France
    pub const FRANCE: Self = Self::custom(
        "France",
        AngleOrMinutes::Degrees(12.0),
        AngleOrMinutes::Degrees(12.0),
    )
    .with_description("Union des Organisations Islamiques de France");

    /// Spiritual Administration of Muslims of Russia
    pub const RUSSIA: Self = Self::custom(
        "Russia",
        AngleOrMinutes::Degrees(16.0),
        AngleOrMinutes::Degrees(15.0),
    )
    .with_description("Spiritual Administration of Muslims of Russia");

    /// Majlis Ugama Islam Singapura
    pub const SINGAPORE: Self = Self::custom(
        "Singapore",
        AngleOrMinutes::Degrees(20.0),
        AngleOrMinutes::Degrees(18.0),
    )
    .with_description("Majlis Ugama Islam Singapura");

    /// Every predefined method.
    pub const ALL: [Self; 10] = [
        Self::MWL,
        Self::ISNA,
        Self::EGYPT,
        Self::MAKKAH,
        Self::KARACHI,
        Self::TEHRAN,
        Self::JAFARI,
        Self::FRANCE,
        Self::RUSSIA,
        Self::SINGAPORE,
    ];

    /// Creates a method from its Fajr and Isha parameters.
    ///
    /// Maghrib defaults to Sunset (zero minutes), Imsak to [`DEFAULT_IMSAK`] and
    /// Midnight to the standard convention.
    #[must_use]
    pub const fn custom(name: &'static str, fajr: AngleOrMinutes, isha: AngleOrMinutes) -> Self {
        Self {
            name,
            description: name,
            fajr,
            isha,
            maghrib: AngleOrMinutes::Minutes(0.0),
            imsak: DEFAULT_IMSAK,
            midnight: MidnightMethod::Standard,
        }
    }

    /// Replaces the Maghrib parameter.
    #[must_use]
    pub const fn with_maghrib(mut self, maghrib: AngleOrMinutes) -> Self {
        self.maghrib = maghrib;
        self
    }

    /// Replaces the Imsak parameter.
    #[must_use]
    pub const fn with_imsak(mut self, imsak: AngleOrMinutes) -> Self {
        self.imsak = imsak;
        self
    }

    /// Replaces the default Midnight convention.
    #[must_use]
    pub const fn with_midnight(mut self, midnight: MidnightMethod) -> Self {
        self.midnight = midnight;
        self
    }

    /// Replaces the human readable description.
    #[must_use]
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Looks up a predefined method by its short name, ignoring ASCII case.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.name.eq_ignore_ascii_case(name))
    }

    /// Short name, e.g. `"MWL"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Authority behind the method.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Fajr depression angle or offset.
    #[must_use]
    pub const fn fajr(&self) -> AngleOrMinutes {
        self.fajr
    }

    /// Isha depression angle, or minutes after Maghrib.
    #[must_use]
    pub const fn isha(&self) -> AngleOrMinutes {
        self.isha
    }

    /// Maghrib depression angle, or minutes after Sunset.
    #[must_use]
    pub const fn maghrib(&self) -> AngleOrMinutes {
        self.maghrib
    }

    /// Imsak depression angle, or minutes before Fajr.
    #[must_use]
    pub const fn imsak(&self) -> AngleOrMinutes {
        self.imsak
    }

    /// Default Midnight convention of the method.
    #[must_use]
    pub const fn midnight(&self) -> MidnightMethod {
        self.midnight
    }

    /// Checks if the method measures Midnight from Sunset to Fajr.
    #[must_use]
    pub const fn is_jafari(&self) -> bool {
        matches!(self.midnight, MidnightMethod::Jafari)
    }
}

impl Default for CalculationMethod {
    fn default() -> Self {
        Self::MWL
    }
}

impl FromStr for CalculationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::by_name(s).ok_or(Error::unknown_name("calculation method"))
    }
}
