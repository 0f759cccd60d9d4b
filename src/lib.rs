//! # solar-eval
//!
//! Deterministic accuracy metrics for solar forecast evaluation.
//!
//! Pairs of forecast and observation (or aggregate) series are scored with
//! error, correlation, and skill metrics, stratified by temporal category
//! (total, year, month, hour, date, weekday). The upstream resampling and
//! report layers live elsewhere; this crate is the pure computation core.
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use solar_eval::prelude::*;
//!
//! let forecast = Forecast {
//!     name: "Hour Ahead GHI".to_string(),
//!     forecast_id: "fx-1".to_string(),
//!     kind: ForecastKind::Deterministic,
//!     variable: "ghi".to_string(),
//!     units: "W/m^2".to_string(),
//!     interval_value_type: "interval_mean".to_string(),
//!     interval_length: Duration::hours(1),
//!     interval_label: "ending".to_string(),
//! };
//! let observation = Observation {
//!     name: "GHI Sensor".to_string(),
//!     observation_id: "obs-1".to_string(),
//!     variable: "ghi".to_string(),
//!     units: "W/m^2".to_string(),
//!     interval_length: Duration::hours(1),
//!     interval_label: "ending".to_string(),
//! };
//! let association =
//!     ForecastObservation::new(forecast, DataObject::Observation(observation)).unwrap();
//!
//! let start = Utc.with_ymd_and_hms(2019, 8, 1, 0, 0, 0).unwrap();
//! let fx = TimeSeries::regular(start, Duration::hours(1), vec![1.0, 0.0, 1.0]).unwrap();
//! let obs = TimeSeries::regular(start, Duration::hours(1), vec![0.0, -1.0, 2.0]).unwrap();
//! let pair = ProcessedPair::new(association, fx, obs);
//!
//! let results = calculate_metrics(&[pair], &["total"], &["rmse"], None).unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].values[0].value, 1.0);
//! ```

pub mod core;
pub mod datamodel;
pub mod error;
pub mod metrics;

pub use error::{EvalError, Result};

pub mod prelude {
    pub use crate::core::TimeSeries;
    pub use crate::datamodel::{
        Aggregate, DataObject, Forecast, ForecastKind, ForecastObservation, MetricResult,
        MetricValue, Normalizer, Observation, ProcessedPair, ValidationResult,
    };
    pub use crate::error::{EvalError, Result};
    pub use crate::metrics::{
        calculate_deterministic_metrics, calculate_metrics, Category, DeterministicMetric,
    };
}
