//! Behaviour near the poles: every output stays finite, in range, and bounded by the night.

use praytimes::{
    CalculationMethod, Coordinates, HighLatitudeMethod, MidnightMethod, PrayerConfig,
    PrayerTimes, prayer_times, time_diff,
};

const ADJUSTMENTS: [HighLatitudeMethod; 4] = [
    HighLatitudeMethod::NightMiddle,
    HighLatitudeMethod::AngleBased,
    HighLatitudeMethod::OneSeventh,
    HighLatitudeMethod::None,
];

const DAYS: [(u32, u32); 6] = [(1, 15), (3, 20), (5, 1), (6, 21), (9, 23), (12, 21)];

fn assert_in_range(times: &PrayerTimes, context: &str) {
    for value in times.as_array() {
        assert!(value.is_finite(), "{context}: {times:?}");
        assert!((0.0..24.0).contains(&value), "{context}: {times:?}");
    }
}

#[test]
fn test_every_latitude_method_and_season_is_total() {
    let mut latitude = -90.0;
    while latitude <= 90.0 {
        let coordinates = Coordinates::new(latitude, 18.95, 0.0).unwrap();
        for method in CalculationMethod::ALL {
            for adjustment in ADJUSTMENTS {
                let config = PrayerConfig::new(method, coordinates).with_high_latitude(adjustment);
                for (month, day) in DAYS {
                    let times = prayer_times(2024, month, day, 1.0, &config);
                    let context = format!(
                        "lat {latitude} {} {adjustment:?} 2024-{month:02}-{day:02}",
                        method.name()
                    );
                    assert_in_range(&times, &context);
                }
            }
        }
        latitude += 2.5;
    }
}

/// Distance between two clock times in either direction.
fn clock_distance(a: f64, b: f64) -> f64 {
    time_diff(a, b).min(time_diff(b, a))
}

#[test]
fn test_midnight_sun_collapses_twilight() {
    // Tromsø at the June solstice: the sun never sets, so there is no night to share out
    let coordinates = Coordinates::new(69.65, 18.95, 0.0).unwrap();

    for adjustment in [
        HighLatitudeMethod::NightMiddle,
        HighLatitudeMethod::AngleBased,
        HighLatitudeMethod::OneSeventh,
    ] {
        let config =
            PrayerConfig::new(CalculationMethod::MWL, coordinates).with_high_latitude(adjustment);
        let times = prayer_times(2024, 6, 21, 2.0, &config);
        assert_in_range(&times, &format!("{adjustment:?}"));

        assert_eq!(times.fajr(), times.sunrise(), "{adjustment:?}");
        assert_eq!(times.isha(), times.sunset(), "{adjustment:?}");

        // a night of zero length has its middle at solar midnight
        assert_eq!(times.midnight(), times.sunset(), "{adjustment:?}");
        assert_opposite_dhuhr(&times, &format!("{adjustment:?}"));
    }
}

const MIDNIGHTS: [MidnightMethod; 4] = [
    MidnightMethod::Standard,
    MidnightMethod::Jafari,
    MidnightMethod::MaghribToSunrise,
    MidnightMethod::MaghribToFajr,
];

/// Asserts Midnight sits about twelve hours away from Dhuhr.
fn assert_opposite_dhuhr(times: &PrayerTimes, context: &str) {
    let distance = clock_distance(times.midnight(), times.dhuhr());
    assert!((distance - 12.0).abs() < 0.05, "{context}: {times:?}");
}

#[test]
fn test_midnight_under_midnight_sun() {
    for (lat, month, day) in [(69.65, 6, 21), (85.0, 6, 21), (-85.0, 12, 21), (-85.0, 1, 20)] {
        let coordinates = Coordinates::new(lat, 0.0, 0.0).unwrap();
        for adjustment in [HighLatitudeMethod::NightMiddle, HighLatitudeMethod::None] {
            for midnight in MIDNIGHTS {
                let config = PrayerConfig::new(CalculationMethod::MWL, coordinates)
                    .with_high_latitude(adjustment)
                    .with_midnight(midnight);
                let times = prayer_times(2024, month, day, 0.0, &config);
                assert_opposite_dhuhr(
                    &times,
                    &format!("lat {lat} 2024-{month:02}-{day:02} {adjustment:?} {midnight:?}"),
                );
            }
        }
    }
}

#[test]
fn test_midnight_in_polar_night() {
    // without Sunrise and Sunset the whole day is night; its middle is solar midnight
    for (lat, month, day) in [(85.0, 10, 28), (-85.0, 8, 5), (88.0, 10, 20)] {
        let coordinates = Coordinates::new(lat, 0.0, 0.0).unwrap();
        for adjustment in [HighLatitudeMethod::NightMiddle, HighLatitudeMethod::None] {
            for midnight in [MidnightMethod::Standard, MidnightMethod::MaghribToSunrise] {
                let config = PrayerConfig::new(CalculationMethod::MWL, coordinates)
                    .with_high_latitude(adjustment)
                    .with_midnight(midnight);
                let times = prayer_times(2024, month, day, 0.0, &config);
                assert_opposite_dhuhr(
                    &times,
                    &format!("lat {lat} 2024-{month:02}-{day:02} {adjustment:?} {midnight:?}"),
                );
            }
        }
    }
}

#[test]
fn test_one_seventh_at_sixty_degrees() {
    // Helsinki area in June: twilight never ends, Isha is exactly a seventh of the night after Sunset
    let config = PrayerConfig::new(
        CalculationMethod::MWL,
        Coordinates::new(60.17, 24.94, 0.0).unwrap(),
    )
    .with_high_latitude(HighLatitudeMethod::OneSeventh);
    let times = prayer_times(2024, 6, 21, 3.0, &config);

    let night = time_diff(times.sunset(), times.sunrise());
    assert!(night > 3.0 && night < 8.0, "night {night}");
    assert!((time_diff(times.sunset(), times.isha()) - night / 7.0).abs() < 1e-9);
    assert!((time_diff(times.fajr(), times.sunrise()) - night / 7.0).abs() < 1e-9);
}

#[test]
fn test_night_middle_meets_at_midnight() {
    // With twilight all night, NightMiddle puts Fajr and Isha at the middle of the night
    let config = PrayerConfig::new(
        CalculationMethod::MWL,
        Coordinates::new(60.17, 24.94, 0.0).unwrap(),
    )
    .with_high_latitude(HighLatitudeMethod::NightMiddle)
    .with_midnight(MidnightMethod::Standard);
    let times = prayer_times(2024, 6, 21, 3.0, &config);

    assert!(clock_distance(times.isha(), times.midnight()) < 1e-6);
    assert!(clock_distance(times.fajr(), times.midnight()) < 1e-6);
}

#[test]
fn test_adjustment_leaves_mid_latitudes_alone() {
    let coordinates = Coordinates::new(30.04, 31.24, 23.0).unwrap();
    let base = PrayerConfig::new(CalculationMethod::EGYPT, coordinates);

    for (month, day) in DAYS {
        let reference = prayer_times(
            2024,
            month,
            day,
            2.0,
            &base.with_high_latitude(HighLatitudeMethod::None),
        );
        for adjustment in [HighLatitudeMethod::NightMiddle, HighLatitudeMethod::AngleBased] {
            let times = prayer_times(2024, month, day, 2.0, &base.with_high_latitude(adjustment));
            assert_eq!(times, reference, "{adjustment:?} 2024-{month:02}-{day:02}");
        }
    }
}

#[test]
fn test_polar_night_still_orders_the_day() {
    // Longyearbyen in December: the sun never rises
    let config = PrayerConfig::new(
        CalculationMethod::MWL,
        Coordinates::new(78.22, 15.65, 0.0).unwrap(),
    );
    let times = prayer_times(2024, 12, 21, 1.0, &config);
    assert_in_range(&times, "polar night");

    // Sunrise and Sunset both saturate to solar noon
    assert!(clock_distance(times.sunrise(), times.sunset()) < 1.0 / 60.0);
    assert!(clock_distance(times.sunrise(), times.dhuhr()) < 1.0 / 60.0);

    // a full day of night: Midnight opposite noon, twelve hours after Sunset
    assert_opposite_dhuhr(&times, "polar night");
    assert!((time_diff(times.sunset(), times.midnight()) - 12.0).abs() < 1e-9);
}
