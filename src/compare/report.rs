//! Comparison report: per-record outcomes plus batch aggregates.

use crate::compare::stats::{mean, pearson, std_dev, Correlation};
use crate::compare::{RecordComparison, SeverityShift};
use serde::{Deserialize, Serialize};

/// Aggregate statistics over a batch of comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub record_count: usize,
    /// Mean of the per-record deltas; `None` for an empty batch
    pub mean_delta: Option<f64>,
    /// Population standard deviation of the deltas; `None` for an empty batch
    pub std_dev_delta: Option<f64>,
    /// Pearson correlation between the two score sequences
    pub correlation: Correlation,
    pub escalated: usize,
    pub de_escalated: usize,
    pub unchanged: usize,
    /// Records whose severity band differs between the two models
    pub category_changed: usize,
}

/// The full outcome of comparing a batch of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub records: Vec<RecordComparison>,
    pub aggregates: AggregateStats,
}

impl ComparisonReport {
    /// Build a report, deriving the aggregates from the comparisons.
    #[must_use]
    pub fn from_comparisons(records: Vec<RecordComparison>) -> Self {
        let deltas: Vec<f64> = records.iter().map(|r| r.delta).collect();
        let cvss: Vec<f64> = records.iter().map(|r| r.cvss.score).collect();
        let industrial: Vec<f64> = records.iter().map(|r| r.industrial.score).collect();

        let count_shift = |shift| records.iter().filter(|r| r.shift == shift).count();

        let aggregates = AggregateStats {
            record_count: records.len(),
            mean_delta: mean(&deltas),
            std_dev_delta: std_dev(&deltas),
            correlation: pearson(&cvss, &industrial),
            escalated: count_shift(SeverityShift::Escalated),
            de_escalated: count_shift(SeverityShift::DeEscalated),
            unchanged: count_shift(SeverityShift::Unchanged),
            category_changed: records.iter().filter(|r| r.category_changed).count(),
        };

        Self {
            records,
            aggregates,
        }
    }

    /// Records sorted by descending industrial score; ties keep input order.
    #[must_use]
    pub fn ranked_by_industrial(&self) -> Vec<&RecordComparison> {
        let mut ranked: Vec<&RecordComparison> = self.records.iter().collect();
        ranked.sort_by(|a, b| {
            b.industrial
                .score
                .partial_cmp(&a.industrial.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }
}
