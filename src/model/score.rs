//! Score values, severity bands, and the per-score computation trace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// CVSS v4.0 qualitative severity bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Band for a score already rounded to one decimal in `[0.0, 10.0]`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        // Comparing in tenths avoids float boundary artefacts at 3.9/4.0 etc.
        let tenths = (score * 10.0).round() as i64;
        match tenths {
            t if t <= 0 => Self::None,
            1..=39 => Self::Low,
            40..=69 => Self::Medium,
            70..=89 => Self::High,
            _ => Self::Critical,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to one decimal place, half-up. The epsilon keeps exact `.x5`
/// midpoints rounding up even when their nearest float representation
/// falls just below the midpoint (e.g. 8.6 - 0.55 is stored as
/// 8.049999...; it must still round to 8.1).
#[must_use]
pub fn round_score(value: f64) -> f64 {
    ((value + 1e-9) * 10.0).round() / 10.0
}

/// One step in the audit trail of a score computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum TraceEntry {
    /// No impact on any system; the score is 0.0 by definition
    ZeroImpact,
    /// Derived equivalence-class levels
    EquivalenceClasses {
        eq1: u8,
        eq2: u8,
        eq3: u8,
        eq4: u8,
        eq5: u8,
        eq6: u8,
    },
    /// Macrovector key and its table value
    Macrovector { key: String, lookup: f64 },
    /// Mean severity-distance adjustment subtracted from the lookup value
    Interpolated { adjustment: f64 },
    /// Final base score after clamping and rounding
    BaseScore { score: f64 },
    /// Industrial extension weight derived from the impact profile
    ExtensionWeight { weight: f64 },
    /// Amount the extension added on top of the base score
    ExtensionDelta { delta: f64 },
}

/// A computed score with its severity band and audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Score in `[0.0, 10.0]`, rounded to one decimal
    pub score: f64,
    pub severity: Severity,
    /// Ordered record of how the score was derived
    pub trace: Vec<TraceEntry>,
}

impl ScoreResult {
    #[must_use]
    pub fn new(score: f64, trace: Vec<TraceEntry>) -> Self {
        Self {
            score,
            severity: Severity::from_score(score),
            trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_band_boundaries() {
        assert_eq!(Severity::from_score(0.0), Severity::None);
        assert_eq!(Severity::from_score(0.1), Severity::Low);
        assert_eq!(Severity::from_score(3.9), Severity::Low);
        assert_eq!(Severity::from_score(4.0), Severity::Medium);
        assert_eq!(Severity::from_score(6.9), Severity::Medium);
        assert_eq!(Severity::from_score(7.0), Severity::High);
        assert_eq!(Severity::from_score(8.9), Severity::High);
        assert_eq!(Severity::from_score(9.0), Severity::Critical);
        assert_eq!(Severity::from_score(10.0), Severity::Critical);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_score(9.25), 9.3);
        assert_eq!(round_score(9.24), 9.2);
        assert_eq!(round_score(0.05), 0.1);
        assert_eq!(round_score(10.0), 10.0);
    }

    #[test]
    fn midpoints_below_their_float_representation_still_round_up() {
        // 8.6 - 0.55 is stored as 8.049999...; the midpoint must go up
        assert_eq!(round_score(8.6 - 0.55), 8.1);
        assert_eq!(round_score(5.8 - 0.15), 5.7);
    }

    #[test]
    fn trace_serializes_tagged() {
        let entry = TraceEntry::Macrovector {
            key: "000200".to_string(),
            lookup: 9.3,
        };
        let json = serde_json::to_string(&entry).expect("serialize");
        assert!(json.contains("\"step\":\"macrovector\""));
        assert!(json.contains("\"000200\""));
    }

    #[test]
    fn score_result_derives_severity() {
        let result = ScoreResult::new(7.4, vec![]);
        assert_eq!(result.severity, Severity::High);
    }
}
