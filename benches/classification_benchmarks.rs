//! Performance benchmarks for the OB Interpretation Engine.
//!
//! This benchmark suite verifies that the calendar core meets performance
//! targets:
//! - Single day classification: < 50μs mean
//! - Holiday table for one year: < 100μs mean
//! - Full-year classification sweep (365 days): < 20ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, NaiveDate};

use ob_engine::calculation::{compute_easter, holidays_for_year, is_within_storhelg, ob_category};
use ob_engine::config::HolidayVisibility;
use ob_engine::models::DateKey;

fn both_systems() -> HolidayVisibility {
    HolidayVisibility {
        show_swedish_holidays: true,
        show_norwegian_holidays: true,
    }
}

/// All days of a year as chrono dates.
fn days_of_year(year: i32) -> Vec<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap();
    let mut days = Vec::new();
    let mut day = start;
    while day < end {
        days.push(day);
        day = day + Duration::days(1);
    }
    days
}

fn bench_easter(c: &mut Criterion) {
    c.bench_function("compute_easter_single_year", |b| {
        b.iter(|| compute_easter(black_box(2025)))
    });

    c.bench_function("compute_easter_two_centuries", |b| {
        b.iter(|| {
            for year in 1900..=2100 {
                black_box(compute_easter(black_box(year)));
            }
        })
    });
}

fn bench_holiday_tables(c: &mut Criterion) {
    let settings = both_systems();

    c.bench_function("holidays_for_year_merged", |b| {
        b.iter(|| holidays_for_year(black_box(2025), &settings))
    });
}

fn bench_single_day(c: &mut Criterion) {
    let christmas_eve = DateKey::new(2025, 11, 24).to_date();
    let ordinary_wednesday = DateKey::new(2025, 7, 6).to_date();

    c.bench_function("ob_category_storhelg_day", |b| {
        b.iter(|| ob_category(black_box(Some("Julafton")), black_box(christmas_eve)))
    });

    c.bench_function("ob_category_ordinary_day", |b| {
        b.iter(|| ob_category(black_box(None), black_box(ordinary_wednesday)))
    });

    c.bench_function("is_within_storhelg_miss", |b| {
        b.iter(|| is_within_storhelg(black_box(ordinary_wednesday)))
    });
}

fn bench_full_year_sweep(c: &mut Criterion) {
    let settings = both_systems();
    let mut group = c.benchmark_group("full_year_sweep");

    for year in [2024i32, 2025] {
        let days = days_of_year(year);
        group.throughput(Throughput::Elements(days.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(year), &days, |b, days| {
            b.iter(|| {
                let holidays = holidays_for_year(year, &settings);
                for &day in days {
                    let holiday = holidays.get(&DateKey::from_date(day));
                    black_box(ob_category(holiday.map(String::as_str), day));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_easter,
    bench_holiday_tables,
    bench_single_day,
    bench_full_year_sweep
);
criterion_main!(benches);
