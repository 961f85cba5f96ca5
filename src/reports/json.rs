//! JSON report generator.

use super::{ReportFormat, ReportRenderer};
use crate::compare::{AggregateStats, RecordComparison};
use crate::error::{ReportErrorKind, Result, ScoringError};
use crate::pipeline::{AssessmentOutcome, Failure};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter (pretty-printed by default)
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonReporter {
    fn render(&self, outcome: &AssessmentOutcome) -> Result<String> {
        let report = JsonReport {
            metadata: ReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                generated_at: Utc::now().to_rfc3339(),
            },
            summary: &outcome.report.aggregates,
            records: &outcome.report.records,
            failures: &outcome.failures,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .map_err(|e| {
            ScoringError::report(
                "rendering JSON report",
                ReportErrorKind::JsonSerializationError(e.to_string()),
            )
        })?;

        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON report structures

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: ReportMetadata,
    summary: &'a AggregateStats,
    records: &'a [RecordComparison],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    failures: &'a [Failure],
}

#[derive(Serialize)]
struct ReportMetadata {
    tool: ToolInfo,
    generated_at: String,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}
