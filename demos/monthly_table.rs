//! Example printing a month of prayer times for one city.
//!
//! Run with `cargo run --example monthly_table -- [method] [year] [month]`.

use chrono::{Datelike, NaiveDate, TimeZone};
use chrono_tz::Europe::Istanbul;
use praytimes::{CalculationMethod, Coordinates, Prayer, PrayerConfig, prayer_times_for_date};

fn clock(hours: f64) -> String {
    // round to the nearest minute, then wrap
    let minutes = ((hours + 0.5 / 60.0) * 60.0).floor() as u32 % (24 * 60);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let method: CalculationMethod = args.next().as_deref().unwrap_or("MWL").parse()?;
    let year: i32 = args.next().as_deref().unwrap_or("2024").parse()?;
    let month: u32 = args.next().as_deref().unwrap_or("3").parse()?;

    let config = PrayerConfig::new(method, Coordinates::new(41.01, 28.97, 39.0)?);

    println!("Istanbul, {year}-{month:02}, {} ({})", method.name(), method.description());
    print!("{:>4}", "day");
    for prayer in Prayer::ALL {
        print!(" {:>8}", prayer.name());
    }
    println!();

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or("invalid month")?;
    for date in first.iter_days().take_while(|date| date.month() == month) {
        // noon avoids the ambiguous hours around a daylight saving change
        let noon = date.and_hms_opt(12, 0, 0).ok_or("invalid time")?;
        let local = Istanbul
            .from_local_datetime(&noon)
            .single()
            .ok_or("ambiguous local time")?;

        let times = prayer_times_for_date(&local, &config);
        print!("{:>4}", date.day());
        for value in times.as_array() {
            print!(" {:>8}", clock(value));
        }
        println!();
    }

    Ok(())
}
