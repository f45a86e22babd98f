//! Example comparing the high latitude rules on a white night.
//!
//! Uses only the numeric API, so it also runs without chrono.

use praytimes::{
    CalculationMethod, Coordinates, HighLatitudeMethod, PrayerConfig, prayer_times, time_diff,
};

fn clock(hours: f64) -> String {
    let minutes = ((hours + 0.5 / 60.0) * 60.0).floor() as u32 % (24 * 60);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let places = [
        ("Stockholm", 59.33, 18.07, 3.0),
        ("Reykjavik", 64.15, -21.94, 0.0),
        ("Tromsø", 69.65, 18.95, 2.0),
    ];

    for (name, lat, lon, offset) in places {
        let coordinates = Coordinates::new(lat, lon, 0.0)?;
        println!("{name} ({lat}°, {lon}°), 21 June 2024, UTC{offset:+}");

        for rule in [
            HighLatitudeMethod::None,
            HighLatitudeMethod::NightMiddle,
            HighLatitudeMethod::AngleBased,
            HighLatitudeMethod::OneSeventh,
        ] {
            let config =
                PrayerConfig::new(CalculationMethod::MWL, coordinates).with_high_latitude(rule);
            let times = prayer_times(2024, 6, 21, offset, &config);

            println!(
                "  {:<12} fajr {}  sunrise {}  sunset {}  isha {}  night {:.2} h",
                format!("{rule:?}"),
                clock(times.fajr()),
                clock(times.sunrise()),
                clock(times.sunset()),
                clock(times.isha()),
                time_diff(times.sunset(), times.sunrise()),
            );
        }
        println!();
    }

    Ok(())
}
