//! Core data structures for forecast evaluation.

mod time_series;

pub use time_series::TimeSeries;
