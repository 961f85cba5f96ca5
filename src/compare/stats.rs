//! Aggregate statistics over score sequences.
//!
//! Undefined statistics stay explicit: an empty set has no mean, and a
//! correlation over degenerate data carries the reason it is undefined
//! instead of a placeholder number.

use crate::error::{Result, ScoringError, UndefinedReason};
use serde::{Deserialize, Serialize};

/// Arithmetic mean, `None` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divide by n), `None` for an empty slice.
///
/// The record set under comparison is the whole population of interest,
/// not a sample drawn from one.
#[must_use]
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Pearson correlation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Correlation {
    Defined { value: f64 },
    Undefined { reason: CorrelationGap },
}

impl Correlation {
    /// The coefficient, or an error carrying why it is undefined. For use
    /// by callers that cannot proceed without a defined value; the report
    /// itself keeps the undefined state as an explicit marker.
    pub fn value(&self) -> Result<f64> {
        match *self {
            Self::Defined { value } => Ok(value),
            Self::Undefined { reason } => Err(ScoringError::statistic("pearson", reason.into())),
        }
    }
}

/// Why a correlation could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationGap {
    /// Fewer than two pairs
    InsufficientData,
    /// One of the sequences is constant
    ZeroVariance,
}

impl From<CorrelationGap> for UndefinedReason {
    fn from(gap: CorrelationGap) -> Self {
        match gap {
            CorrelationGap::InsufficientData => Self::InsufficientData,
            CorrelationGap::ZeroVariance => Self::ZeroVariance,
        }
    }
}

/// Pearson correlation coefficient of two equal-length sequences.
///
/// Fewer than two pairs, or zero variance in either sequence, yields an
/// explicit [`Correlation::Undefined`] rather than NaN.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> Correlation {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len().min(ys.len());
    if n < 2 {
        return Correlation::Undefined {
            reason: CorrelationGap::InsufficientData,
        };
    }

    let mx = xs.iter().sum::<f64>() / n as f64;
    let my = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return Correlation::Undefined {
            reason: CorrelationGap::ZeroVariance,
        };
    }

    Correlation::Defined {
        value: cov / (var_x.sqrt() * var_y.sqrt()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_std_dev_of_empty_are_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(std_dev(&[]), None);
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    }

    #[test]
    fn population_std_dev() {
        // population form: sqrt(((1-2)^2 + (3-2)^2) / 2) = 1
        let sd = std_dev(&[1.0, 3.0]).expect("defined");
        assert!((sd - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_value_std_dev_is_zero() {
        assert_eq!(std_dev(&[4.2]), Some(0.0));
    }

    #[test]
    fn pearson_perfect_positive() {
        let c = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        match c {
            Correlation::Defined { value } => assert!((value - 1.0).abs() < 1e-12),
            Correlation::Undefined { .. } => panic!("expected defined correlation"),
        }
    }

    #[test]
    fn pearson_perfect_negative() {
        let c = pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]);
        match c {
            Correlation::Defined { value } => assert!((value + 1.0).abs() < 1e-12),
            Correlation::Undefined { .. } => panic!("expected defined correlation"),
        }
    }

    #[test]
    fn pearson_insufficient_data() {
        assert_eq!(
            pearson(&[1.0], &[2.0]),
            Correlation::Undefined {
                reason: CorrelationGap::InsufficientData
            }
        );
        assert_eq!(
            pearson(&[], &[]),
            Correlation::Undefined {
                reason: CorrelationGap::InsufficientData
            }
        );
    }

    #[test]
    fn pearson_zero_variance() {
        assert_eq!(
            pearson(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]),
            Correlation::Undefined {
                reason: CorrelationGap::ZeroVariance
            }
        );
    }

    #[test]
    fn demanding_an_undefined_value_is_an_error() {
        let c = pearson(&[5.0, 5.0], &[1.0, 2.0]);
        let err = c.value().expect_err("zero variance");
        assert!(err.to_string().contains("pearson"));

        let c = pearson(&[1.0, 2.0], &[2.0, 4.0]);
        assert!(c.value().is_ok());
    }

    #[test]
    fn correlation_serializes_tagged() {
        let json = serde_json::to_string(&Correlation::Undefined {
            reason: CorrelationGap::ZeroVariance,
        })
        .expect("serialize");
        assert!(json.contains("\"status\":\"undefined\""));
        assert!(json.contains("\"zero_variance\""));
    }
}
