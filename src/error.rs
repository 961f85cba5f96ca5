//! Unified error types for ivss-tools.
//!
//! Per-record scoring failures carry the offending record's identifier so a
//! batch run can report exactly which inputs were rejected.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ivss-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScoringError {
    /// Malformed or missing CVSS metric
    #[error("Invalid metric: {context}")]
    Metric {
        context: String,
        #[source]
        source: MetricErrorKind,
    },

    /// Malformed industrial impact profile
    #[error("Invalid industrial profile: {context}")]
    Profile {
        context: String,
        #[source]
        source: ProfileErrorKind,
    },

    /// A statistic was requested in a state where it is undefined
    #[error("Statistic '{statistic}' is undefined: {reason}")]
    Statistic {
        statistic: String,
        reason: UndefinedReason,
    },

    /// A per-record failure, tagged with the record's identifier
    #[error("Record '{id}' failed")]
    Record {
        id: String,
        #[source]
        source: Box<ScoringError>,
    },

    /// Errors during report rendering/export
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific metric error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MetricErrorKind {
    #[error("Missing required metric: {metric}")]
    MissingMetric { metric: String },

    #[error("Invalid value '{value}' for metric {metric}")]
    InvalidValue { metric: String, value: String },

    #[error("Unknown metric: {metric}")]
    UnknownMetric { metric: String },

    #[error("Metric {metric} specified more than once")]
    DuplicateMetric { metric: String },

    #[error("Malformed vector string: {0}")]
    MalformedVector(String),

    #[error("Macrovector {key} has no entry in the lookup table")]
    UnknownMacrovector { key: String },
}

/// Specific profile error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProfileErrorKind {
    #[error("Missing impact factor: {factor}")]
    MissingFactor { factor: String },

    #[error("Invalid value '{value}' for impact factor {factor}")]
    InvalidValue { factor: String, value: String },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),
}

/// Why an aggregate statistic has no defined value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum UndefinedReason {
    #[error("fewer than two samples")]
    InsufficientData,

    #[error("zero variance in at least one score sequence")]
    ZeroVariance,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for ivss-tools operations
pub type Result<T> = std::result::Result<T, ScoringError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ScoringError {
    /// Create a metric error with context
    pub fn metric(context: impl Into<String>, source: MetricErrorKind) -> Self {
        Self::Metric {
            context: context.into(),
            source,
        }
    }

    /// Create a metric error for a missing required metric
    pub fn missing_metric(metric: impl Into<String>) -> Self {
        Self::metric(
            "required metric not assigned",
            MetricErrorKind::MissingMetric {
                metric: metric.into(),
            },
        )
    }

    /// Create a profile error with context
    pub fn profile(context: impl Into<String>, source: ProfileErrorKind) -> Self {
        Self::Profile {
            context: context.into(),
            source,
        }
    }

    /// Create a profile error for a missing impact factor
    pub fn missing_factor(factor: impl Into<String>) -> Self {
        Self::profile(
            "impact factor not assigned",
            ProfileErrorKind::MissingFactor {
                factor: factor.into(),
            },
        )
    }

    /// Create an undefined-statistic error
    pub fn statistic(statistic: impl Into<String>, reason: UndefinedReason) -> Self {
        Self::Statistic {
            statistic: statistic.into(),
            reason,
        }
    }

    /// Tag an error with the identifier of the record it occurred in
    pub fn for_record(id: impl Into<String>, source: ScoringError) -> Self {
        Self::Record {
            id: id.into(),
            source: Box::new(source),
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The identifier of the offending record, if this is a per-record error.
    #[must_use]
    pub fn record_id(&self) -> Option<&str> {
        match self {
            Self::Record { id, .. } => Some(id),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for ScoringError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ScoringError {
    fn from(err: serde_json::Error) -> Self {
        Self::Validation(format!("JSON deserialization: {err}"))
    }
}
