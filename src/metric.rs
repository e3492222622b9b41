use crate::alignment::Alignment;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricError {
    /// The denominator of the rate is zero.
    #[error("metric is undefined for an empty reference ({errors} errors)")]
    UndefinedMetric { errors: usize },
}

/// `count / total`, or `UndefinedMetric` when `total` is zero.
pub(crate) fn rate(count: usize, total: usize, errors: usize) -> Result<f64, MetricError> {
    if total == 0 {
        return Err(MetricError::UndefinedMetric { errors });
    }
    Ok(count as f64 / total as f64)
}

/// `(S + I + D) / reference_length`.
///
/// Not clamped: many insertions give a rate above 1.
pub fn word_error_rate(alignment: &Alignment) -> Result<f64, MetricError> {
    let errors = alignment.num_errors();
    rate(errors, alignment.reference_length, errors)
}
