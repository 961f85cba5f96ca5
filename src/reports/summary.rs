//! Compact human-readable summary report.

use super::{ReportFormat, ReportRenderer};
use crate::compare::{Correlation, CorrelationGap, SeverityShift};
use crate::error::Result;
use crate::pipeline::AssessmentOutcome;

/// Terminal-friendly summary reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryReporter;

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

const fn shift_label(shift: SeverityShift) -> &'static str {
    match shift {
        SeverityShift::Escalated => "escalated",
        SeverityShift::DeEscalated => "de-escalated",
        SeverityShift::Unchanged => "unchanged",
    }
}

fn correlation_label(correlation: &Correlation) -> String {
    match correlation {
        Correlation::Defined { value } => format!("{value:.3}"),
        Correlation::Undefined { reason } => match reason {
            CorrelationGap::InsufficientData => "undefined (fewer than two records)".to_string(),
            CorrelationGap::ZeroVariance => "undefined (constant scores)".to_string(),
        },
    }
}

impl ReportRenderer for SummaryReporter {
    fn render(&self, outcome: &AssessmentOutcome) -> Result<String> {
        let aggregates = &outcome.report.aggregates;
        let mut out = String::new();

        out.push_str("Vulnerability score comparison\n");
        out.push_str("==============================\n");
        out.push_str(&format!(
            "{} record(s) scored, {} failed\n\n",
            aggregates.record_count,
            outcome.failures.len()
        ));

        if aggregates.record_count > 0 {
            out.push_str(&format!(
                "{:<12} {:>5} {:>5} {:>6}  {:<12} {}\n",
                "ID", "CVSS", "IVSS", "Delta", "Shift", "Severity"
            ));
            for record in outcome.report.ranked_by_industrial() {
                out.push_str(&format!(
                    "{:<12} {:>5.1} {:>5.1} {:>+6.1}  {:<12} {} -> {}\n",
                    record.id,
                    record.cvss.score,
                    record.industrial.score,
                    record.delta,
                    shift_label(record.shift),
                    record.cvss.severity,
                    record.industrial.severity,
                ));
            }
            out.push('\n');

            out.push_str("Aggregates\n");
            if let Some(mean) = aggregates.mean_delta {
                out.push_str(&format!("  mean delta:    {mean:+.2}\n"));
            }
            if let Some(sd) = aggregates.std_dev_delta {
                out.push_str(&format!("  std deviation: {sd:.2}\n"));
            }
            out.push_str(&format!(
                "  correlation:   {}\n",
                correlation_label(&aggregates.correlation)
            ));
            out.push_str(&format!(
                "  escalated {}, de-escalated {}, unchanged {}, category changes {}\n",
                aggregates.escalated,
                aggregates.de_escalated,
                aggregates.unchanged,
                aggregates.category_changed,
            ));
        }

        if !outcome.failures.is_empty() {
            out.push_str("\nFailures\n");
            for failure in &outcome.failures {
                out.push_str(&format!("  {}: {}\n", failure.id, failure.message));
            }
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
