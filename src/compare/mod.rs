//! Side-by-side comparison of CVSS base scores and industrial scores.

pub mod report;
pub mod stats;

pub use report::{AggregateStats, ComparisonReport};
pub use stats::{Correlation, CorrelationGap};

use crate::error::Result;
use crate::model::{ScoreResult, VulnRecord};
use crate::scoring::{CvssV4Calculator, ExtensionWeights, IndustrialExtension};
use serde::{Deserialize, Serialize};

/// Score delta beyond which a shift counts as an escalation.
pub const SHIFT_THRESHOLD: f64 = 0.5;

/// Direction of the industrial score relative to the CVSS base score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityShift {
    /// Industrial score exceeds the base score by more than the threshold
    Escalated,
    /// Industrial score falls short of the base score by more than the
    /// threshold. The extension is monotonic, so this cannot occur with the
    /// built-in blend; it stays representable for alternative extensions.
    DeEscalated,
    /// Scores within the threshold of each other
    Unchanged,
}

impl SeverityShift {
    /// Classify a delta (industrial minus base).
    #[must_use]
    pub fn from_delta(delta: f64) -> Self {
        if delta > SHIFT_THRESHOLD {
            Self::Escalated
        } else if delta < -SHIFT_THRESHOLD {
            Self::DeEscalated
        } else {
            Self::Unchanged
        }
    }
}

/// Both scores of one record, with the shift classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordComparison {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cvss: ScoreResult,
    pub industrial: ScoreResult,
    /// Industrial score minus CVSS base score
    pub delta: f64,
    pub shift: SeverityShift,
    /// True if the two scores fall in different severity bands
    pub category_changed: bool,
}

/// Scores records under both models and classifies the difference.
///
/// Stateless apart from the configured extension weights; records can be
/// assessed independently and in parallel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparator {
    calculator: CvssV4Calculator,
    extension: IndustrialExtension,
}

impl Comparator {
    /// Comparator with validated extension weights.
    pub fn new(weights: ExtensionWeights) -> Result<Self> {
        Ok(Self {
            calculator: CvssV4Calculator::new(),
            extension: IndustrialExtension::new(weights)?,
        })
    }

    /// Assess one record under both scoring models.
    pub fn assess(&self, record: &VulnRecord) -> Result<RecordComparison> {
        let cvss = self.calculator.score(&record.vector)?;
        let industrial = self.extension.extend(&cvss, &record.profile);

        // scores carry one decimal; keep the delta at one decimal too
        let delta = crate::model::round_score(industrial.score - cvss.score);
        let shift = SeverityShift::from_delta(delta);
        if shift == SeverityShift::DeEscalated {
            tracing::warn!(
                id = %record.id,
                cvss = cvss.score,
                industrial = industrial.score,
                "industrial score fell below the base score; the extension should be monotonic"
            );
        }

        Ok(RecordComparison {
            id: record.id.clone(),
            description: record.description.clone(),
            category_changed: cvss.severity != industrial.severity,
            delta,
            shift,
            cvss,
            industrial,
        })
    }

    /// Assess a batch, failing on the first bad record.
    pub fn assess_all(&self, records: &[VulnRecord]) -> Result<ComparisonReport> {
        let comparisons = records
            .iter()
            .map(|r| {
                self.assess(r)
                    .map_err(|e| crate::error::ScoringError::for_record(&r.id, e))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ComparisonReport::from_comparisons(comparisons))
    }
}
