//! Forecast, observation, and aggregate metadata.

use std::fmt;

use chrono::Duration;

/// The kind of quantity a forecast predicts.
///
/// Only deterministic forecasts can be scored by this crate; the other kinds
/// exist so dispatch over pairs is exhaustive rather than inspecting types at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForecastKind {
    /// Single-valued prediction per interval.
    Deterministic,
    /// Distribution (quantile/threshold) prediction per interval.
    Probabilistic,
    /// Binary event prediction per interval.
    Event,
}

impl fmt::Display for ForecastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ForecastKind::Deterministic => "deterministic",
            ForecastKind::Probabilistic => "probabilistic",
            ForecastKind::Event => "event",
        };
        f.write_str(s)
    }
}

/// Metadata for a forecast series.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    /// Display name of the forecast.
    pub name: String,
    /// Identifier of the forecast in the upstream system.
    pub forecast_id: String,
    /// What kind of quantity the forecast predicts.
    pub kind: ForecastKind,
    /// Physical variable being forecast, e.g. "ghi" or "ac_power".
    pub variable: String,
    /// Units of the forecast values.
    pub units: String,
    /// How values represent their interval, e.g. "interval_mean".
    pub interval_value_type: String,
    /// Time between consecutive data points.
    pub interval_length: Duration,
    /// Whether a timestamp labels the beginning or ending of its interval.
    pub interval_label: String,
}

/// Metadata for an observation series.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub name: String,
    pub observation_id: String,
    pub variable: String,
    pub units: String,
    pub interval_length: Duration,
    pub interval_label: String,
}

/// Metadata for an aggregate of observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub name: String,
    pub aggregate_id: String,
    pub variable: String,
    pub units: String,
    pub interval_length: Duration,
    pub interval_label: String,
}

/// The ground-truth object a forecast is evaluated against.
#[derive(Debug, Clone, PartialEq)]
pub enum DataObject {
    Observation(Observation),
    Aggregate(Aggregate),
}

impl DataObject {
    /// Identifier of the underlying observation or aggregate.
    pub fn id(&self) -> &str {
        match self {
            DataObject::Observation(obs) => &obs.observation_id,
            DataObject::Aggregate(agg) => &agg.aggregate_id,
        }
    }

    /// Display name of the underlying object.
    pub fn name(&self) -> &str {
        match self {
            DataObject::Observation(obs) => &obs.name,
            DataObject::Aggregate(agg) => &agg.name,
        }
    }

    /// Units of the ground-truth values.
    pub fn units(&self) -> &str {
        match self {
            DataObject::Observation(obs) => &obs.units,
            DataObject::Aggregate(agg) => &agg.units,
        }
    }

    /// Time between consecutive data points.
    pub fn interval_length(&self) -> Duration {
        match self {
            DataObject::Observation(obs) => obs.interval_length,
            DataObject::Aggregate(agg) => agg.interval_length,
        }
    }

    /// Interval labeling convention.
    pub fn interval_label(&self) -> &str {
        match self {
            DataObject::Observation(obs) => &obs.interval_label,
            DataObject::Aggregate(agg) => &agg.interval_label,
        }
    }
}
