//! Metric calculation over processed forecast/observation pairs.
//!
//! [`calculate_metrics`] walks a collection of pairs and dispatches each on
//! its forecast kind; [`calculate_deterministic_metrics`] scores one pair
//! across every requested category and metric. Both validate the request
//! before touching any data, so a bad request never produces a partial
//! result.

use crate::core::TimeSeries;
use crate::datamodel::{
    ForecastKind, MetricResult, MetricValue, Normalizer, ProcessedPair,
};
use crate::error::{EvalError, Result};
use crate::metrics::categories::Category;
use crate::metrics::deterministic::{self, AuxInputs, DeterministicMetric};

/// Compute metrics for a collection of processed pairs.
///
/// Pairs are scored independently and results preserve input order, one
/// `MetricResult` per pair. Probabilistic and event forecasts are refused.
/// The first pair that fails aborts the batch; callers needing partial
/// success should score pairs individually with
/// [`calculate_deterministic_metrics`].
pub fn calculate_metrics(
    pairs: &[ProcessedPair],
    categories: &[&str],
    metric_ids: &[&str],
    ref_pair: Option<&ProcessedPair>,
) -> Result<Vec<MetricResult>> {
    let (categories, metrics) = parse_request(categories, metric_ids)?;
    let mut results = Vec::with_capacity(pairs.len());
    for pair in pairs {
        match pair.original().forecast().kind {
            ForecastKind::Deterministic => {
                results.push(calculate_deterministic(
                    pair, &categories, &metrics, ref_pair, None,
                )?);
            }
            kind @ (ForecastKind::Probabilistic | ForecastKind::Event) => {
                return Err(EvalError::Unsupported(kind));
            }
        }
    }
    Ok(results)
}

/// Compute deterministic metrics for a single processed pair.
///
/// For every requested category the pair's index is partitioned into
/// groups, and every requested metric is computed per group over the
/// forecast/observation values at that group's positions. Reference values
/// come from `ref_fx_obs` when given, else from the pair's own reference
/// series; the normalizer defaults to the pair's normalization factor.
///
/// # Example
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use solar_eval::core::TimeSeries;
/// use solar_eval::datamodel::{
///     DataObject, Forecast, ForecastKind, ForecastObservation, Observation, ProcessedPair,
/// };
/// use solar_eval::metrics::calculate_deterministic_metrics;
///
/// let forecast = Forecast {
///     name: "Hour Ahead GHI".to_string(),
///     forecast_id: "fx-1".to_string(),
///     kind: ForecastKind::Deterministic,
///     variable: "ghi".to_string(),
///     units: "W/m^2".to_string(),
///     interval_value_type: "interval_mean".to_string(),
///     interval_length: Duration::hours(1),
///     interval_label: "ending".to_string(),
/// };
/// let observation = Observation {
///     name: "GHI Sensor".to_string(),
///     observation_id: "obs-1".to_string(),
///     variable: "ghi".to_string(),
///     units: "W/m^2".to_string(),
///     interval_length: Duration::hours(1),
///     interval_label: "ending".to_string(),
/// };
/// let association =
///     ForecastObservation::new(forecast, DataObject::Observation(observation)).unwrap();
///
/// let start = Utc.with_ymd_and_hms(2019, 8, 1, 0, 0, 0).unwrap();
/// let fx = TimeSeries::regular(start, Duration::hours(1), vec![1.0, 1.0, 1.0]).unwrap();
/// let obs = TimeSeries::regular(start, Duration::hours(1), vec![0.0, 1.0, -1.0]).unwrap();
/// let pair = ProcessedPair::new(association, fx, obs);
///
/// let result =
///     calculate_deterministic_metrics(&pair, &["total"], &["mae"], None, None).unwrap();
/// assert_eq!(result.values.len(), 1);
/// assert_eq!(result.values[0].value, 1.0);
/// ```
pub fn calculate_deterministic_metrics(
    pair: &ProcessedPair,
    categories: &[&str],
    metric_ids: &[&str],
    ref_fx_obs: Option<&ProcessedPair>,
    normalizer: Option<&Normalizer>,
) -> Result<MetricResult> {
    let (categories, metrics) = parse_request(categories, metric_ids)?;
    calculate_deterministic(pair, &categories, &metrics, ref_fx_obs, normalizer)
}

/// Resolve and validate a metric/category request.
fn parse_request(
    categories: &[&str],
    metric_ids: &[&str],
) -> Result<(Vec<Category>, Vec<DeterministicMetric>)> {
    if metric_ids.is_empty() {
        return Err(EvalError::NoMetrics);
    }
    if categories.is_empty() {
        return Err(EvalError::NoCategories);
    }
    let categories = categories
        .iter()
        .map(|id| Category::from_id(id))
        .collect::<Result<Vec<_>>>()?;
    let metrics = metric_ids
        .iter()
        .map(|id| DeterministicMetric::from_id(id))
        .collect::<Result<Vec<_>>>()?;
    Ok((categories, metrics))
}

fn calculate_deterministic(
    pair: &ProcessedPair,
    categories: &[Category],
    metrics: &[DeterministicMetric],
    ref_fx_obs: Option<&ProcessedPair>,
    normalizer: Option<&Normalizer>,
) -> Result<MetricResult> {
    let fx = pair.forecast_values();
    let obs = pair.observation_values();
    if fx.is_empty() {
        return Err(EvalError::EmptyData("forecast"));
    }
    if obs.is_empty() {
        return Err(EvalError::EmptyData("observation"));
    }
    if fx.len() != obs.len() {
        return Err(EvalError::DimensionMismatch {
            expected: fx.len(),
            got: obs.len(),
        });
    }

    let reference = resolve_reference(pair, ref_fx_obs, fx, metrics)?;
    let norm = normalizer.unwrap_or_else(|| pair.normalization_factor());
    if let Some(len) = norm.series_len() {
        if len != fx.len() {
            return Err(EvalError::DimensionMismatch {
                expected: fx.len(),
                got: len,
            });
        }
    }

    let mut values = Vec::with_capacity(categories.len() * metrics.len());
    for category in categories {
        for (key, positions) in category.groups(fx.timestamps()) {
            let fx_group = fx.select(&positions);
            let obs_group = obs.select(&positions);
            let ref_group = reference.map(|r| r.select(&positions));
            let norm_group = norm.select(&positions);
            for metric in metrics {
                let aux = AuxInputs {
                    reference: ref_group.as_ref().map(|g| g.values()),
                    normalizer: Some(&norm_group),
                };
                let value =
                    deterministic::apply(*metric, fx_group.values(), obs_group.values(), aux)?;
                values.push(MetricValue {
                    category: category.id().to_string(),
                    metric: metric.id().to_string(),
                    index: key.clone(),
                    value,
                });
            }
        }
    }

    let original = pair.original();
    Ok(MetricResult {
        name: original.forecast().name.clone(),
        forecast_id: original.forecast().forecast_id.clone(),
        observation_id: original.data_object().id().to_string(),
        values,
    })
}

/// Pick the reference series and validate it when any metric needs one.
fn resolve_reference<'a>(
    pair: &'a ProcessedPair,
    ref_fx_obs: Option<&'a ProcessedPair>,
    fx: &TimeSeries,
    metrics: &[DeterministicMetric],
) -> Result<Option<&'a TimeSeries>> {
    let reference = match ref_fx_obs {
        Some(ref_pair) => Some(ref_pair.forecast_values()),
        None => pair.reference_forecast_values(),
    };
    if metrics.iter().any(|m| m.requires_reference()) {
        match reference {
            None => return Err(EvalError::MissingReferenceData),
            Some(series) if series.is_empty() => return Err(EvalError::MissingReferenceData),
            Some(series) if series.len() != fx.len() => {
                return Err(EvalError::DimensionMismatch {
                    expected: fx.len(),
                    got: series.len(),
                });
            }
            Some(_) => {}
        }
    }
    Ok(reference)
}
