//! Error types for the solar-eval library.

use thiserror::Error;

use crate::datamodel::ForecastKind;

/// Result type alias for evaluation operations.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors that can occur while evaluating forecasts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An empty metric request.
    #[error("no metrics requested")]
    NoMetrics,

    /// An empty category request.
    #[error("no categories requested")]
    NoCategories,

    /// Metric identifier not present in the registry.
    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    /// Category identifier outside the closed category set.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A required series has no data points.
    #[error("empty {0} data")]
    EmptyData(&'static str),

    /// Paired series differ in length.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A requested metric needs a reference forecast but none was supplied.
    #[error("reference forecast data is missing or empty")]
    MissingReferenceData,

    /// Forecast and data object units differ.
    #[error("units mismatch: expected {expected}, got {got}")]
    UnitsMismatch { expected: String, got: String },

    /// Forecast and data object interval settings cannot be evaluated together.
    #[error("incompatible intervals: {0}")]
    IncompatibleIntervals(String),

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// A metric was invoked without an auxiliary input it declares required.
    #[error("metric '{metric}' requires a {argument}")]
    MissingArgument {
        metric: &'static str,
        argument: &'static str,
    },

    /// Metrics for this forecast kind are not implemented.
    #[error("metrics for {0} forecasts are not implemented")]
    Unsupported(ForecastKind),
}

impl EvalError {
    /// True for errors caused by an invalid metric/category request.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EvalError::NoMetrics
                | EvalError::NoCategories
                | EvalError::UnknownMetric(_)
                | EvalError::UnknownCategory(_)
        )
    }

    /// True for errors caused by missing or misaligned input data.
    pub fn is_data(&self) -> bool {
        matches!(
            self,
            EvalError::EmptyData(_)
                | EvalError::DimensionMismatch { .. }
                | EvalError::MissingReferenceData
        )
    }
}
