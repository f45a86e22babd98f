use chrono::{DateTime, Duration, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use praytimes::{
    CalculationMethod, Coordinates, HighLatitudeMethod, PrayerConfig, prayer_times,
    prayer_times_for_date,
};
use std::hint::black_box;

fn benchmark_single_day(c: &mut Criterion) {
    let config = PrayerConfig::new(
        CalculationMethod::MWL,
        Coordinates::new(43.0, -80.0, 0.0).unwrap(),
    );

    c.bench_function("single_day", |b| {
        b.iter(|| {
            prayer_times(
                black_box(2018),
                black_box(9),
                black_box(5),
                black_box(-4.0),
                black_box(&config),
            )
        })
    });

    let datetime = "2018-09-05T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    c.bench_function("single_day_chrono", |b| {
        b.iter(|| prayer_times_for_date(black_box(&datetime), black_box(&config)))
    });
}

fn benchmark_year_fixed_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("year_fixed_location");
    group.throughput(Throughput::Elements(366));

    let base = "2024-01-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let days: Vec<DateTime<Utc>> = (0..366).map(|i| base + Duration::days(i)).collect();

    for method in [CalculationMethod::MWL, CalculationMethod::MAKKAH, CalculationMethod::TEHRAN] {
        let config = PrayerConfig::new(method, Coordinates::new(35.7, 51.4, 1200.0).unwrap());

        group.bench_with_input(BenchmarkId::new("method", method.name()), &config, |b, config| {
            b.iter(|| {
                for day in &days {
                    let _times = prayer_times_for_date(black_box(day), black_box(config));
                }
            })
        });
    }

    group.finish();
}

fn benchmark_latitude_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("latitude_sweep");

    // includes polar cases where the high latitude rules kick in
    let latitudes: Vec<f64> = (0..=180).map(|i| -90.0 + f64::from(i)).collect();
    group.throughput(Throughput::Elements(latitudes.len() as u64));

    for adjustment in [HighLatitudeMethod::NightMiddle, HighLatitudeMethod::None] {
        group.bench_with_input(
            BenchmarkId::new("adjustment", format!("{adjustment:?}")),
            &adjustment,
            |b, &adjustment| {
                b.iter(|| {
                    for &lat in &latitudes {
                        let config = PrayerConfig::new(
                            CalculationMethod::ISNA,
                            Coordinates::new_unchecked(lat, 10.0, 0.0),
                        )
                        .with_high_latitude(adjustment);
                        let _times = prayer_times(2024, 6, 21, 1.0, black_box(&config));
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_day,
    benchmark_year_fixed_location,
    benchmark_latitude_sweep
);
criterion_main!(benches);
