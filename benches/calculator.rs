//! Benchmarks for the deterministic metrics calculator.

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use solar_eval::prelude::*;

fn make_pair(n: usize) -> ProcessedPair {
    let forecast = Forecast {
        name: "Hour Ahead GHI".to_string(),
        forecast_id: "fx-1".to_string(),
        kind: ForecastKind::Deterministic,
        variable: "ghi".to_string(),
        units: "W/m^2".to_string(),
        interval_value_type: "interval_mean".to_string(),
        interval_length: Duration::hours(1),
        interval_label: "ending".to_string(),
    };
    let observation = Observation {
        name: "GHI Sensor".to_string(),
        observation_id: "obs-1".to_string(),
        variable: "ghi".to_string(),
        units: "W/m^2".to_string(),
        interval_length: Duration::hours(1),
        interval_label: "ending".to_string(),
    };
    let association =
        ForecastObservation::new(forecast, DataObject::Observation(observation)).unwrap();

    let start = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
    let fx: Vec<f64> = (0..n).map(|i| ((i % 24) as f64 * 0.3).sin() * 500.0 + 500.0).collect();
    let obs: Vec<f64> = (0..n)
        .map(|i| ((i % 24) as f64 * 0.3).sin() * 480.0 + 510.0)
        .collect();
    ProcessedPair::new(
        association,
        TimeSeries::regular(start, Duration::hours(1), fx).unwrap(),
        TimeSeries::regular(start, Duration::hours(1), obs).unwrap(),
    )
}

fn bench_single_category(c: &mut Criterion) {
    // one day, one month, one year of hourly data
    let sizes = [24, 720, 8760];
    let mut group = c.benchmark_group("total_mae_rmse");

    for size in sizes {
        let pair = make_pair(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pair, |b, p| {
            b.iter(|| {
                black_box(
                    calculate_deterministic_metrics(p, &["total"], &["mae", "rmse"], None, None)
                        .unwrap(),
                )
            })
        });
    }
    group.finish();
}

fn bench_full_stratification(c: &mut Criterion) {
    let sizes = [720, 8760];
    let mut group = c.benchmark_group("all_categories_all_plain_metrics");
    let categories = ["total", "year", "month", "hour", "date", "weekday"];
    let metrics = ["mae", "mbe", "rmse", "nrmse", "mape", "r", "r^2", "crmse"];

    for size in sizes {
        let pair = make_pair(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pair, |b, p| {
            b.iter(|| {
                black_box(
                    calculate_deterministic_metrics(p, &categories, &metrics, None, None)
                        .unwrap(),
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_category, bench_full_stratification);
criterion_main!(benches);
