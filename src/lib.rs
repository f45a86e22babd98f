//! # Prayer Times Library
//!
//! Computes the daily Islamic prayer times for any location and date from the sun's position.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! For one day and one place the library produces nine clock times: Imsak, Fajr, Sunrise,
//! Dhuhr, Asr, Sunset, Maghrib, Isha and Midnight. They follow one of the published
//! calculation conventions (Muslim World League, ISNA, Egypt, Umm Al-Qura, Karachi,
//! Tehran, Jafari, France, Russia, Singapore) or a custom one.
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Total: polar days and nights never produce NaN, they are resolved by a high latitude rule
//! - Thread-safe: stateless functions over immutable, `Copy` configuration values
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: Serialize configuration and results
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! praytimes = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! praytimes = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! praytimes = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Numeric API
//! ```rust
//! use praytimes::{prayer_times, CalculationMethod, Coordinates, Prayer, PrayerConfig};
//!
//! // Toronto area, 5 September 2018, daylight saving time (UTC-4)
//! let config = PrayerConfig::new(
//!     CalculationMethod::MWL,
//!     Coordinates::new(43.0, -80.0, 0.0).unwrap(),
//! );
//! let times = prayer_times(2018, 9, 5, -4.0, &config);
//!
//! for prayer in Prayer::ALL {
//!     let hours = times.get(prayer);
//!     println!("{:>8}: {:.4} h", prayer.name(), hours);
//! }
//! assert_eq!(times.dhuhr().floor(), 13.0);
//! ```
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use praytimes::{prayer_times_for_date, CalculationMethod, Coordinates, MidnightMethod, PrayerConfig};
//! use chrono::{DateTime, FixedOffset};
//!
//! let date = "2024-04-15T08:00:00+03:30".parse::<DateTime<FixedOffset>>().unwrap();
//! let config = PrayerConfig::new(
//!     CalculationMethod::TEHRAN,
//!     Coordinates::new(35.7, 51.4, 1200.0).unwrap(),
//! );
//!
//! let times = prayer_times_for_date(&date, &config);
//! assert_eq!(config.midnight(), MidnightMethod::Jafari);
//! println!("Maghrib: {:.3} h", times.maghrib());
//! # }
//! ```
//!
//! ## Model
//!
//! The sun's declination and the equation of time come from the USNO low precision
//! formulas, evaluated near each event. Every time is first solved in local solar time,
//! then moved to civil time by `utc_offset - longitude / 15`. Fajr, Imsak, Maghrib and
//! Isha are finally bounded to a portion of the night (see [`HighLatitudeMethod`]), and
//! all nine values are wrapped into [0, 24) with [`fix_hour`].
//!
//! Results are decimal hours. Turning them into clock text, and the choice of rounding,
//! is left to the caller.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of fixed table values in tests
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::math::{fix_hour, time_diff};
pub use crate::method::CalculationMethod;
#[cfg(feature = "chrono")]
pub use crate::prayer::prayer_times_for_date;
pub use crate::prayer::{PrayerConfig, prayer_times, prayer_times_checked};
pub use crate::types::{
    AngleOrMinutes, AsrFactor, Coordinates, HighLatitudeMethod, MidnightMethod, Prayer,
    PrayerTimes, SunAngleTime,
};

// Calculation modules
pub mod high_latitude;
pub mod prayer;
pub mod solar;
pub mod solver;

// Core modules
pub mod error;
pub mod method;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
