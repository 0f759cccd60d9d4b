//! Deterministic accuracy metrics and their registry.
//!
//! Metric functions operate on aligned forecast/observation slices and
//! return NaN for empty or numerically degenerate input instead of raising.
//! The [`DeterministicMetric`] registry declares which metrics need a
//! reference forecast or a normalizer; [`apply`] enforces those
//! requirements uniformly.

use crate::datamodel::Normalizer;
use crate::error::{EvalError, Result};

/// Registry of deterministic metrics.
///
/// Each entry maps a string identifier to a compute function plus the
/// auxiliary inputs it requires. The set is closed at compile time; adding
/// a metric means adding a variant and its `match` arms, never touching the
/// calculation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeterministicMetric {
    /// Mean absolute error.
    Mae,
    /// Mean bias error.
    Mbe,
    /// Root mean square error.
    Rmse,
    /// Normalized root mean square error; requires a normalizer.
    Nrmse,
    /// Mean absolute percentage error.
    Mape,
    /// Forecast skill against a reference; requires a reference forecast.
    Skill,
    /// Pearson correlation coefficient.
    CorrCoeff,
    /// Coefficient of determination.
    CoeffDetermination,
    /// Centered (bias-removed) root mean square error.
    Crmse,
}

impl DeterministicMetric {
    /// Every registered metric, in catalog order.
    pub const ALL: [DeterministicMetric; 9] = [
        DeterministicMetric::Mae,
        DeterministicMetric::Mbe,
        DeterministicMetric::Rmse,
        DeterministicMetric::Nrmse,
        DeterministicMetric::Mape,
        DeterministicMetric::Skill,
        DeterministicMetric::CorrCoeff,
        DeterministicMetric::CoeffDetermination,
        DeterministicMetric::Crmse,
    ];

    /// Resolve a metric identifier.
    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            "mae" => Ok(DeterministicMetric::Mae),
            "mbe" => Ok(DeterministicMetric::Mbe),
            "rmse" => Ok(DeterministicMetric::Rmse),
            "nrmse" => Ok(DeterministicMetric::Nrmse),
            "mape" => Ok(DeterministicMetric::Mape),
            "s" => Ok(DeterministicMetric::Skill),
            "r" => Ok(DeterministicMetric::CorrCoeff),
            "r^2" => Ok(DeterministicMetric::CoeffDetermination),
            "crmse" => Ok(DeterministicMetric::Crmse),
            other => Err(EvalError::UnknownMetric(other.to_string())),
        }
    }

    /// Identifier used in requests and results.
    pub fn id(&self) -> &'static str {
        match self {
            DeterministicMetric::Mae => "mae",
            DeterministicMetric::Mbe => "mbe",
            DeterministicMetric::Rmse => "rmse",
            DeterministicMetric::Nrmse => "nrmse",
            DeterministicMetric::Mape => "mape",
            DeterministicMetric::Skill => "s",
            DeterministicMetric::CorrCoeff => "r",
            DeterministicMetric::CoeffDetermination => "r^2",
            DeterministicMetric::Crmse => "crmse",
        }
    }

    /// Human-readable name for report forms and plots.
    pub fn display_name(&self) -> &'static str {
        match self {
            DeterministicMetric::Mae => "Mean Absolute Error",
            DeterministicMetric::Mbe => "Mean Bias Error",
            DeterministicMetric::Rmse => "Root Mean Square Error",
            DeterministicMetric::Nrmse => "Normalized Root Mean Square Error",
            DeterministicMetric::Mape => "Mean Absolute Percentage Error",
            DeterministicMetric::Skill => "Forecast Skill",
            DeterministicMetric::CorrCoeff => "Pearson Correlation Coefficient",
            DeterministicMetric::CoeffDetermination => "Coefficient of Determination",
            DeterministicMetric::Crmse => "Centered Root Mean Square Error",
        }
    }

    /// Whether this metric needs a reference forecast series.
    pub fn requires_reference(&self) -> bool {
        matches!(self, DeterministicMetric::Skill)
    }

    /// Whether this metric needs a normalizer.
    pub fn requires_normalizer(&self) -> bool {
        matches!(self, DeterministicMetric::Nrmse)
    }
}

/// Catalog of metric identifiers, for request validation by callers.
pub fn metric_ids() -> Vec<&'static str> {
    DeterministicMetric::ALL.iter().map(|m| m.id()).collect()
}

/// Auxiliary inputs resolved per group by the calculator.
///
/// One uniform record for all metrics; the registry's requirement flags say
/// which fields must be present for a given metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuxInputs<'a> {
    /// Reference forecast values sliced to the same group positions.
    pub reference: Option<&'a [f64]>,
    /// Normalizer, with series normalizers sliced to the group positions.
    pub normalizer: Option<&'a Normalizer>,
}

/// Dispatch a metric over aligned forecast/observation slices.
///
/// Numeric degeneracy (empty input, divide by zero, constant series) yields
/// NaN; a missing required auxiliary input is a caller error.
///
/// # Example
///
/// ```
/// use solar_eval::metrics::deterministic::{apply, AuxInputs, DeterministicMetric};
///
/// let value = apply(
///     DeterministicMetric::Mae,
///     &[1.0, 1.0, 1.0],
///     &[0.0, 1.0, -1.0],
///     AuxInputs::default(),
/// )
/// .unwrap();
/// assert_eq!(value, 1.0);
/// ```
pub fn apply(
    metric: DeterministicMetric,
    fx: &[f64],
    obs: &[f64],
    aux: AuxInputs<'_>,
) -> Result<f64> {
    let value = match metric {
        DeterministicMetric::Mae => mean_absolute(fx, obs),
        DeterministicMetric::Mbe => mean_bias(fx, obs),
        DeterministicMetric::Rmse => root_mean_square(fx, obs),
        DeterministicMetric::Nrmse => {
            let normalizer = aux.normalizer.ok_or(EvalError::MissingArgument {
                metric: "nrmse",
                argument: "normalizer",
            })?;
            normalized_root_mean_square(fx, obs, normalizer)
        }
        DeterministicMetric::Mape => mean_absolute_percentage(fx, obs),
        DeterministicMetric::Skill => {
            let reference = aux.reference.ok_or(EvalError::MissingArgument {
                metric: "s",
                argument: "reference forecast",
            })?;
            forecast_skill(fx, obs, reference)
        }
        DeterministicMetric::CorrCoeff => pearson_correlation(fx, obs),
        DeterministicMetric::CoeffDetermination => coeff_determination(fx, obs),
        DeterministicMetric::Crmse => centered_root_mean_square(fx, obs),
    };
    Ok(value)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean absolute error: mean(|fx - obs|).
pub fn mean_absolute(fx: &[f64], obs: &[f64]) -> f64 {
    if fx.is_empty() || fx.len() != obs.len() {
        return f64::NAN;
    }
    fx.iter()
        .zip(obs.iter())
        .map(|(f, o)| (f - o).abs())
        .sum::<f64>()
        / fx.len() as f64
}

/// Mean bias error: mean(fx - obs).
pub fn mean_bias(fx: &[f64], obs: &[f64]) -> f64 {
    if fx.is_empty() || fx.len() != obs.len() {
        return f64::NAN;
    }
    fx.iter().zip(obs.iter()).map(|(f, o)| f - o).sum::<f64>() / fx.len() as f64
}

/// Root mean square error: sqrt(mean((fx - obs)^2)).
pub fn root_mean_square(fx: &[f64], obs: &[f64]) -> f64 {
    if fx.is_empty() || fx.len() != obs.len() {
        return f64::NAN;
    }
    let mse = fx
        .iter()
        .zip(obs.iter())
        .map(|(f, o)| (f - o).powi(2))
        .sum::<f64>()
        / fx.len() as f64;
    mse.sqrt()
}

/// Normalized root mean square error, in percent.
///
/// A scalar normalizer divides the aggregate rmse; a series normalizer
/// divides each error before averaging.
pub fn normalized_root_mean_square(fx: &[f64], obs: &[f64], normalizer: &Normalizer) -> f64 {
    match normalizer {
        Normalizer::Scalar(norm) => root_mean_square(fx, obs) / norm * 100.0,
        Normalizer::Series(norms) => {
            if fx.is_empty() || fx.len() != obs.len() || fx.len() != norms.len() {
                return f64::NAN;
            }
            let mse = fx
                .iter()
                .zip(obs.iter())
                .zip(norms.iter())
                .map(|((f, o), n)| ((f - o) / n).powi(2))
                .sum::<f64>()
                / fx.len() as f64;
            mse.sqrt() * 100.0
        }
    }
}

/// Mean absolute percentage error: mean(|(obs - fx) / obs|) * 100.
pub fn mean_absolute_percentage(fx: &[f64], obs: &[f64]) -> f64 {
    if fx.is_empty() || fx.len() != obs.len() {
        return f64::NAN;
    }
    fx.iter()
        .zip(obs.iter())
        .map(|(f, o)| ((o - f) / o).abs())
        .sum::<f64>()
        / fx.len() as f64
        * 100.0
}

/// Forecast skill: 1 - rmse(fx) / rmse(reference).
pub fn forecast_skill(fx: &[f64], obs: &[f64], ref_fx: &[f64]) -> f64 {
    1.0 - root_mean_square(fx, obs) / root_mean_square(ref_fx, obs)
}

/// Pearson correlation coefficient between forecast and observation.
pub fn pearson_correlation(fx: &[f64], obs: &[f64]) -> f64 {
    if fx.is_empty() || fx.len() != obs.len() {
        return f64::NAN;
    }
    let fx_mean = mean(fx);
    let obs_mean = mean(obs);
    let mut covariance = 0.0;
    let mut fx_sq = 0.0;
    let mut obs_sq = 0.0;
    for (f, o) in fx.iter().zip(obs.iter()) {
        let df = f - fx_mean;
        let dobs = o - obs_mean;
        covariance += df * dobs;
        fx_sq += df * df;
        obs_sq += dobs * dobs;
    }
    covariance / (fx_sq.sqrt() * obs_sq.sqrt())
}

/// Coefficient of determination: 1 - SS_res / SS_tot.
pub fn coeff_determination(fx: &[f64], obs: &[f64]) -> f64 {
    if fx.is_empty() || fx.len() != obs.len() {
        return f64::NAN;
    }
    let obs_mean = mean(obs);
    let ss_res: f64 = fx.iter().zip(obs.iter()).map(|(f, o)| (o - f).powi(2)).sum();
    let ss_tot: f64 = obs.iter().map(|o| (o - obs_mean).powi(2)).sum();
    1.0 - ss_res / ss_tot
}

/// Centered root mean square error, with per-series bias removed.
pub fn centered_root_mean_square(fx: &[f64], obs: &[f64]) -> f64 {
    if fx.is_empty() || fx.len() != obs.len() {
        return f64::NAN;
    }
    let fx_mean = mean(fx);
    let obs_mean = mean(obs);
    let mse = fx
        .iter()
        .zip(obs.iter())
        .map(|(f, o)| ((f - fx_mean) - (o - obs_mean)).powi(2))
        .sum::<f64>()
        / fx.len() as f64;
    mse.sqrt()
}
