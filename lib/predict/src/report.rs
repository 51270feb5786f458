//! Relative-error aggregation
//!
//! Turns the (predicted, real) pairs into a dimensionless accuracy summary:
//! per-threshold success counts plus an optional histogram on the percentage
//! scale. Thresholds and bin count are explicit configuration, not process
//! state.

use serde::{Deserialize, Serialize};

use fareseer_core::Error as CoreError;

use crate::error::Result;
use crate::pipeline::PricePrediction;

/// Reporting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Threshold step in percent; buckets run from `step` to just below 100
    pub threshold_step_pct: u32,
    /// Number of histogram bins
    pub histogram_bins: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            threshold_step_pct: 5,
            histogram_bins: 128,
        }
    }
}

/// Success count at one relative-error threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBucket {
    pub threshold_pct: u32,
    /// Predictions with relative error at or below the threshold
    pub count: usize,
    /// `count` as a percentage of all predictions
    pub share_pct: f64,
}

/// Histogram of relative errors on the percentage scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub min_pct: f64,
    pub bin_width_pct: f64,
    pub counts: Vec<usize>,
}

/// Relative error of a prediction: |predicted - real| / real
pub fn relative_error(predicted: f64, real: f64) -> Result<f64> {
    if real == 0.0 {
        return Err(CoreError::DivisionByZero("real price").into());
    }
    Ok((predicted - real).abs() / real)
}

/// Relative error per prediction, in input order; aborts on the first
/// zero-priced query
pub fn relative_errors(predictions: &[PricePrediction]) -> Result<Vec<f64>> {
    predictions
        .iter()
        .map(|p| relative_error(p.predicted, p.real))
        .collect()
}

/// Number of errors at or below `threshold`
#[must_use]
pub fn success_count(errors: &[f64], threshold: f64) -> usize {
    errors.iter().filter(|e| **e <= threshold).count()
}

/// Success counts for every threshold step
#[must_use]
pub fn threshold_report(errors: &[f64], config: &ReportConfig) -> Vec<ThresholdBucket> {
    let step = config.threshold_step_pct.max(1);
    let total = errors.len();

    (step..100)
        .step_by(step as usize)
        .map(|pct| {
            let count = success_count(errors, f64::from(pct) / 100.0);
            let share_pct = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            };
            ThresholdBucket {
                threshold_pct: pct,
                count,
                share_pct,
            }
        })
        .collect()
}

/// Histogram of the errors (fractional scale in, percentage scale out)
#[must_use]
pub fn histogram(errors: &[f64], bins: usize) -> Histogram {
    if errors.is_empty() || bins == 0 {
        return Histogram {
            min_pct: 0.0,
            bin_width_pct: 0.0,
            counts: vec![0; bins],
        };
    }

    let pct: Vec<f64> = errors.iter().map(|e| e * 100.0).collect();
    let min = pct.iter().copied().fold(f64::INFINITY, f64::min);
    let max = pct.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = ((max - min) / bins as f64).max(f64::EPSILON);

    let mut counts = vec![0usize; bins];
    for value in pct {
        let bin = (((value - min) / width) as usize).min(bins - 1);
        counts[bin] += 1;
    }

    Histogram {
        min_pct: min,
        bin_width_pct: width,
        counts,
    }
}
