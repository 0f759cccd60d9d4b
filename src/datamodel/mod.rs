//! Metadata records for forecasts, observations, and evaluation pairs.
//!
//! These records describe the data being scored; they are supplied by the
//! upstream resampling/validation layer and consumed read-only by the
//! metrics engine.

mod forecast;
mod pair;
mod result;

pub use forecast::{Aggregate, DataObject, Forecast, ForecastKind, Observation};
pub use pair::{ForecastObservation, Normalizer, ProcessedPair, ValidationResult};
pub use result::{MetricResult, MetricValue};
