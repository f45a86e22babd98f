//! Error types for the prayer times library.
//!
//! The numeric core never fails; these errors come only from the validating
//! constructors and name lookups.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by the validating entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid elevation (must be finite).
    InvalidElevation {
        /// The invalid elevation value provided.
        value: f64,
    },
    /// Invalid Asr shadow factor (must be finite and positive).
    InvalidAsrFactor {
        /// The invalid factor provided.
        value: f64,
    },
    /// Invalid UTC offset (must be between -12 and +14 hours).
    InvalidUtcOffset {
        /// The invalid offset in hours.
        value: f64,
    },
    /// Invalid calendar date.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// A name that does not match any known entry.
    UnknownName {
        /// What kind of entry was looked up, e.g. "calculation method".
        kind: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidElevation { value } => {
                write!(f, "invalid elevation {value} m (must be finite)")
            }
            Self::InvalidAsrFactor { value } => {
                write!(f, "invalid asr factor {value} (must be positive)")
            }
            Self::InvalidUtcOffset { value } => {
                write!(
                    f,
                    "invalid utc offset {value} h (must be between -12 and +14)"
                )
            }
            Self::InvalidDate { message } => write!(f, "invalid date: {message}"),
            Self::UnknownName { kind } => write!(f, "unknown {kind}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation error.
    #[must_use]
    pub const fn invalid_elevation(value: f64) -> Self {
        Self::InvalidElevation { value }
    }

    /// Creates an invalid asr factor error.
    #[must_use]
    pub const fn invalid_asr_factor(value: f64) -> Self {
        Self::InvalidAsrFactor { value }
    }

    /// Creates an invalid utc offset error.
    #[must_use]
    pub const fn invalid_utc_offset(value: f64) -> Self {
        Self::InvalidUtcOffset { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates an unknown name error.
    #[must_use]
    pub const fn unknown_name(kind: &'static str) -> Self {
        Self::UnknownName { kind }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates an elevation in meters is a usable number.
///
/// # Errors
/// Returns `InvalidElevation` for NaN or infinite values.
pub fn check_elevation(elevation: f64) -> Result<()> {
    if !elevation.is_finite() {
        return Err(Error::invalid_elevation(elevation));
    }
    Ok(())
}

/// Validates a UTC offset in hours against the offsets in civil use.
///
/// # Errors
/// Returns `InvalidUtcOffset` if the offset is outside -12 to +14 hours.
pub fn check_utc_offset(offset_hours: f64) -> Result<()> {
    if !(-12.0..=14.0).contains(&offset_hours) {
        return Err(Error::invalid_utc_offset(offset_hours));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(35.7).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(51.4).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
    }

    #[test]
    fn test_elevation_validation() {
        assert!(check_elevation(0.0).is_ok());
        assert!(check_elevation(-430.0).is_ok());
        assert!(check_elevation(8848.0).is_ok());
        assert!(check_elevation(f64::NAN).is_err());
        assert!(check_elevation(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_utc_offset_validation() {
        assert!(check_utc_offset(3.5).is_ok());
        assert!(check_utc_offset(-12.0).is_ok());
        assert!(check_utc_offset(14.0).is_ok());
        assert!(check_utc_offset(14.5).is_err());
        assert!(check_utc_offset(f64::NAN).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::unknown_name("calculation method");
        assert_eq!(err.to_string(), "unknown calculation method");

        let err = Error::invalid_date("month must be between 1 and 12");
        assert_eq!(
            err.to_string(),
            "invalid date: month must be between 1 and 12"
        );
    }
}
