//! Report generation for assessment outcomes.
//!
//! Two output formats:
//! - JSON: structured data for programmatic integration
//! - Summary: compact human-readable terminal output

mod json;
mod summary;

pub use json::JsonReporter;
pub use summary::SummaryReporter;

use crate::error::Result;
use crate::pipeline::AssessmentOutcome;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Supported report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Json,
    #[default]
    Summary,
}

/// Trait for report renderers.
pub trait ReportRenderer {
    /// Render an assessment outcome to a string.
    fn render(&self, outcome: &AssessmentOutcome) -> Result<String>;

    /// The format this renderer produces.
    fn format(&self) -> ReportFormat;

    /// Render and write to a writer.
    fn write_to(&self, outcome: &AssessmentOutcome, writer: &mut dyn Write) -> Result<()> {
        let report = self.render(outcome)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }
}

/// Create a renderer for the given format.
#[must_use]
pub fn create_renderer(format: ReportFormat) -> Box<dyn ReportRenderer> {
    match format {
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Summary => Box::new(SummaryReporter::new()),
    }
}
