//! Forecast/observation associations and processed evaluation pairs.

use chrono::Duration;

use crate::core::TimeSeries;
use crate::datamodel::{DataObject, Forecast};
use crate::error::{EvalError, Result};

/// Pairing of a forecast with the observation or aggregate it is scored
/// against.
///
/// Construction validates that the two sides can be evaluated together:
/// units must be identical, the ground truth cannot be coarser than the
/// forecast, and instantaneous forecasts cannot be compared to interval
/// averages.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastObservation {
    forecast: Forecast,
    data_object: DataObject,
    reference_forecast: Option<Forecast>,
    normalization: f64,
    cost_per_unit_error: f64,
}

impl ForecastObservation {
    /// Pair a forecast with its ground-truth object.
    pub fn new(forecast: Forecast, data_object: DataObject) -> Result<Self> {
        check_units(&forecast, &data_object)?;
        check_interval_compatibility(&forecast, &data_object)?;
        Ok(Self {
            forecast,
            data_object,
            reference_forecast: None,
            normalization: 1.0,
            cost_per_unit_error: 0.0,
        })
    }

    /// Attach a reference forecast used as a baseline for skill metrics.
    pub fn with_reference_forecast(mut self, reference: Forecast) -> Self {
        self.reference_forecast = Some(reference);
        self
    }

    /// Set the normalization magnitude for normalized metrics.
    pub fn with_normalization(mut self, normalization: f64) -> Self {
        self.normalization = normalization;
        self
    }

    /// Set the cost per unit of forecast error.
    pub fn with_cost_per_unit_error(mut self, cost: f64) -> Self {
        self.cost_per_unit_error = cost;
        self
    }

    pub fn forecast(&self) -> &Forecast {
        &self.forecast
    }

    pub fn data_object(&self) -> &DataObject {
        &self.data_object
    }

    pub fn reference_forecast(&self) -> Option<&Forecast> {
        self.reference_forecast.as_ref()
    }

    pub fn normalization(&self) -> f64 {
        self.normalization
    }

    pub fn cost_per_unit_error(&self) -> f64 {
        self.cost_per_unit_error
    }
}

fn check_units(forecast: &Forecast, data_object: &DataObject) -> Result<()> {
    if forecast.units != data_object.units() {
        return Err(EvalError::UnitsMismatch {
            expected: forecast.units.clone(),
            got: data_object.units().to_string(),
        });
    }
    Ok(())
}

fn check_interval_compatibility(forecast: &Forecast, data_object: &DataObject) -> Result<()> {
    if data_object.interval_length() > forecast.interval_length {
        return Err(EvalError::IncompatibleIntervals(
            "data object interval length cannot be greater than forecast interval length"
                .to_string(),
        ));
    }
    if forecast.interval_label.contains("instant")
        && !data_object.interval_label().contains("instant")
    {
        return Err(EvalError::IncompatibleIntervals(
            "instantaneous forecasts cannot be evaluated against interval averages".to_string(),
        ));
    }
    Ok(())
}

/// Divisor applied by normalized metrics.
///
/// Either a single magnitude for the whole pair or a per-point series
/// aligned with the pair's index.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalizer {
    Scalar(f64),
    Series(Vec<f64>),
}

impl Normalizer {
    /// Take the subset at the given positions; scalars pass through.
    pub fn select(&self, positions: &[usize]) -> Normalizer {
        match self {
            Normalizer::Scalar(v) => Normalizer::Scalar(*v),
            Normalizer::Series(series) => {
                Normalizer::Series(positions.iter().map(|&i| series[i]).collect())
            }
        }
    }

    /// Length of a series normalizer; `None` for scalars.
    pub fn series_len(&self) -> Option<usize> {
        match self {
            Normalizer::Scalar(_) => None,
            Normalizer::Series(series) => Some(series.len()),
        }
    }
}

impl From<f64> for Normalizer {
    fn from(value: f64) -> Self {
        Normalizer::Scalar(value)
    }
}

/// Count of points flagged by one upstream quality check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub flag: String,
    pub count: usize,
}

/// A forecast/observation association together with its resampled,
/// validated data.
///
/// Produced by the upstream resampling layer; the metrics engine reads it
/// without modification. Forecast and observation series are expected to
/// share an aligned index.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedPair {
    original: ForecastObservation,
    interval_value_type: String,
    interval_length: Duration,
    interval_label: String,
    valid_point_count: usize,
    validation_results: Vec<ValidationResult>,
    forecast_values: TimeSeries,
    observation_values: TimeSeries,
    reference_forecast_values: Option<TimeSeries>,
    normalization_factor: Normalizer,
    cost_per_unit_error: f64,
}

impl ProcessedPair {
    /// Build a processed pair from an association and its resampled data.
    ///
    /// Interval metadata, normalization, and cost default to the values
    /// carried on the original association.
    pub fn new(
        original: ForecastObservation,
        forecast_values: TimeSeries,
        observation_values: TimeSeries,
    ) -> Self {
        let interval_value_type = original.forecast().interval_value_type.clone();
        let interval_length = original.forecast().interval_length;
        let interval_label = original.forecast().interval_label.clone();
        let valid_point_count = forecast_values.len();
        let normalization_factor = Normalizer::Scalar(original.normalization());
        let cost_per_unit_error = original.cost_per_unit_error();
        Self {
            original,
            interval_value_type,
            interval_length,
            interval_label,
            valid_point_count,
            validation_results: Vec::new(),
            forecast_values,
            observation_values,
            reference_forecast_values: None,
            normalization_factor,
            cost_per_unit_error,
        }
    }

    /// Attach reference forecast values for skill metrics.
    pub fn with_reference_values(mut self, values: TimeSeries) -> Self {
        self.reference_forecast_values = Some(values);
        self
    }

    /// Override the normalization factor, e.g. with a per-point series.
    pub fn with_normalization_factor(mut self, normalizer: Normalizer) -> Self {
        self.normalization_factor = normalizer;
        self
    }

    /// Attach quality-flag tallies from upstream validation.
    pub fn with_validation_results(mut self, results: Vec<ValidationResult>) -> Self {
        self.validation_results = results;
        self
    }

    pub fn original(&self) -> &ForecastObservation {
        &self.original
    }

    pub fn interval_value_type(&self) -> &str {
        &self.interval_value_type
    }

    pub fn interval_length(&self) -> Duration {
        self.interval_length
    }

    pub fn interval_label(&self) -> &str {
        &self.interval_label
    }

    pub fn valid_point_count(&self) -> usize {
        self.valid_point_count
    }

    pub fn validation_results(&self) -> &[ValidationResult] {
        &self.validation_results
    }

    pub fn forecast_values(&self) -> &TimeSeries {
        &self.forecast_values
    }

    pub fn observation_values(&self) -> &TimeSeries {
        &self.observation_values
    }

    pub fn reference_forecast_values(&self) -> Option<&TimeSeries> {
        self.reference_forecast_values.as_ref()
    }

    pub fn normalization_factor(&self) -> &Normalizer {
        &self.normalization_factor
    }

    pub fn cost_per_unit_error(&self) -> f64 {
        self.cost_per_unit_error
    }
}
