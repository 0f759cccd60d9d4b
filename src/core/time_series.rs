//! Time-indexed value series shared by forecasts and observations.

use chrono::{DateTime, Duration, Utc};

use crate::error::{EvalError, Result};

/// A univariate time series with a validated timestamp index.
///
/// Forecast, observation, and reference values are all carried in this form.
/// The index is strictly increasing, so positional group slices taken from
/// one series line up with the same positions in its paired series.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a time series, validating index and value alignment.
    pub fn new(timestamps: Vec<DateTime<Utc>>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(EvalError::DimensionMismatch {
                expected: timestamps.len(),
                got: values.len(),
            });
        }
        for i in 1..timestamps.len() {
            if timestamps[i] <= timestamps[i - 1] {
                return Err(EvalError::TimestampError(
                    "timestamps must be strictly increasing".to_string(),
                ));
            }
        }
        Ok(Self { timestamps, values })
    }

    /// Create an empty time series.
    pub fn empty() -> Self {
        Self {
            timestamps: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Create a series on a regular index starting at `start` with the given step.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{Duration, TimeZone, Utc};
    /// use solar_eval::core::TimeSeries;
    ///
    /// let start = Utc.with_ymd_and_hms(2019, 8, 1, 0, 0, 0).unwrap();
    /// let ts = TimeSeries::regular(start, Duration::hours(1), vec![1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(ts.len(), 3);
    /// ```
    pub fn regular(start: DateTime<Utc>, step: Duration, values: Vec<f64>) -> Result<Self> {
        let timestamps = (0..values.len() as i64).map(|i| start + step * i as i32).collect();
        Self::new(timestamps, values)
    }

    /// Number of data points.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if the series has no data points.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Get the timestamp index.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Get the values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Take the subset of points at the given positions, preserving order.
    ///
    /// Positions come from a category partition of this series' own index.
    ///
    /// # Panics
    ///
    /// Panics if any position is out of bounds.
    pub fn select(&self, positions: &[usize]) -> TimeSeries {
        TimeSeries {
            timestamps: positions.iter().map(|&i| self.timestamps[i]).collect(),
            values: positions.iter().map(|&i| self.values[i]).collect(),
        }
    }
}
