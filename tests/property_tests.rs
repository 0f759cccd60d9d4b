//! Property-based tests for category partitioning and the calculator.
//!
//! These verify invariants that should hold for all valid inputs, using
//! randomly generated hourly series.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use solar_eval::metrics::Category;
use solar_eval::prelude::*;

fn hourly_timestamps(n: usize) -> Vec<DateTime<Utc>> {
    let start = Utc.with_ymd_and_hms(2019, 8, 1, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| start + Duration::hours(i as i64))
        .collect()
}

fn make_pair(fx: &[f64], obs: &[f64]) -> ProcessedPair {
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
    let start = Utc.with_ymd_and_hms(2019, 8, 1, 0, 0, 0).unwrap();
    ProcessedPair::new(
        association,
        TimeSeries::regular(start, Duration::hours(1), fx.to_vec()).unwrap(),
        TimeSeries::regular(start, Duration::hours(1), obs.to_vec()).unwrap(),
    )
}

/// Strategy for series values away from numerical extremes.
fn values_strategy(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..1000.0_f64, len)
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

proptest! {
    /// Every index position appears in exactly one group.
    #[test]
    fn partition_is_complete_and_disjoint(
        n in 1usize..500,
        category in category_strategy(),
    ) {
        let timestamps = hourly_timestamps(n);
        let groups = category.groups(&timestamps);

        let mut seen: Vec<usize> = groups
            .iter()
            .flat_map(|(_, positions)| positions.iter().copied())
            .collect();
        seen.sort_unstable();
        let expected: Vec<usize> = (0..n).collect();
        prop_assert_eq!(seen, expected);
    }

    /// Group keys are unique within a partition.
    #[test]
    fn partition_keys_are_unique(
        n in 1usize..500,
        category in category_strategy(),
    ) {
        let timestamps = hourly_timestamps(n);
        let groups = category.groups(&timestamps);

        let keys: std::collections::BTreeSet<&str> =
            groups.iter().map(|(k, _)| k.as_str()).collect();
        prop_assert_eq!(keys.len(), groups.len());
    }

    /// Partitioning the same index twice yields the same groups.
    #[test]
    fn partition_is_stable(
        n in 1usize..200,
        category in category_strategy(),
    ) {
        let timestamps = hourly_timestamps(n);
        prop_assert_eq!(category.groups(&timestamps), category.groups(&timestamps));
    }

    /// Identical inputs produce equal results, and the value count is a
    /// multiple of the number of requested metrics.
    #[test]
    fn calculator_is_deterministic_over_random_series(
        (fx, obs) in (1usize..100).prop_flat_map(|len| {
            (values_strategy(len), values_strategy(len))
        }),
    ) {
        let pair = make_pair(&fx, &obs);
        let metrics = ["mae", "rmse", "mbe"];

        let first = calculate_deterministic_metrics(
            &pair, &["total", "hour", "date"], &metrics, None, None,
        ).unwrap();
        let second = calculate_deterministic_metrics(
            &pair, &["total", "hour", "date"], &metrics, None, None,
        ).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.values.len() % metrics.len(), 0);
    }

    /// The total bucket scores the whole series: group count is 1 and the
    /// mae over the bucket matches a direct computation.
    #[test]
    fn total_bucket_matches_direct_mae(
        (fx, obs) in (1usize..100).prop_flat_map(|len| {
            (values_strategy(len), values_strategy(len))
        }),
    ) {
        let pair = make_pair(&fx, &obs);
        let result = calculate_deterministic_metrics(
            &pair, &["total"], &["mae"], None, None,
        ).unwrap();

        prop_assert_eq!(result.values.len(), 1);
        prop_assert_eq!(result.values[0].index.as_str(), "0");

        let direct = fx
            .iter()
            .zip(obs.iter())
            .map(|(f, o)| (f - o).abs())
            .sum::<f64>()
            / fx.len() as f64;
        prop_assert!((result.values[0].value - direct).abs() < 1e-9);
    }
}
