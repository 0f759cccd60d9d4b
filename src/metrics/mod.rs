//! Metric computation over paired forecast/observation series.

pub mod calculator;
pub mod categories;
pub mod deterministic;

pub use calculator::{calculate_deterministic_metrics, calculate_metrics};
pub use categories::Category;
pub use deterministic::{AuxInputs, DeterministicMetric};
