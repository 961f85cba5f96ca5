//! Industrial extension: raises a CVSS base score towards 10.0 according to
//! the industrial impact profile. The extension is monotonic; it never
//! lowers a base score.

use crate::error::{Result, ScoringError};
use crate::model::profile::IndustrialImpactProfile;
use crate::model::score::{round_score, ScoreResult, TraceEntry};
use serde::{Deserialize, Serialize};

/// Highest ordinal rank of an impact factor; ranks are normalized by this.
const MAX_FACTOR_RANK: f64 = 3.0;

/// Per-factor weights of the industrial extension.
///
/// The weighted sum of normalized factor ranks gives the extension weight
/// `w`; the blended score is `min(10, base + w * (10 - base))`. The default
/// weights sum to more than 1.0 on purpose: a severe multi-factor profile
/// can push `w` past 1.0 and saturate the score at 10.0 through the cap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionWeights {
    pub safety: f64,
    pub process_availability: f64,
    pub physical_damage: f64,
    pub recovery: f64,
}

impl Default for ExtensionWeights {
    fn default() -> Self {
        Self {
            safety: 0.50,
            process_availability: 0.30,
            physical_damage: 0.25,
            recovery: 0.20,
        }
    }
}

impl ExtensionWeights {
    /// Check the weights are usable: finite and non-negative, not all zero,
    /// and safety weighted at least as heavily as every other factor.
    pub fn validate(&self) -> Result<()> {
        let all = [
            ("safety", self.safety),
            ("process_availability", self.process_availability),
            ("physical_damage", self.physical_damage),
            ("recovery", self.recovery),
        ];
        for (name, value) in all {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringError::config(format!(
                    "extension weight '{name}' must be a non-negative number, got {value}"
                )));
            }
        }
        let sum: f64 = all.iter().map(|(_, v)| v).sum();
        if sum <= 0.0 {
            return Err(ScoringError::config(
                "extension weights must not all be zero",
            ));
        }
        for (name, value) in &all[1..] {
            if *value > self.safety {
                return Err(ScoringError::config(format!(
                    "safety must carry the largest weight; '{name}' ({value}) exceeds it ({})",
                    self.safety
                )));
            }
        }
        Ok(())
    }

    /// Extension weight `w` for a profile: the weighted sum of normalized
    /// factor ranks. Zero for a benign profile.
    #[must_use]
    pub fn weight_for(&self, profile: &IndustrialImpactProfile) -> f64 {
        let norm = |rank: u8| f64::from(rank) / MAX_FACTOR_RANK;
        self.safety * norm(profile.safety.rank())
            + self.process_availability * norm(profile.process_availability.rank())
            + self.physical_damage * norm(profile.physical_damage.rank())
            + self.recovery * norm(profile.recovery.rank())
    }
}

/// Applies the industrial extension to CVSS base scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndustrialExtension {
    weights: ExtensionWeights,
}

impl IndustrialExtension {
    /// Build an extension with validated weights.
    pub fn new(weights: ExtensionWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    #[must_use]
    pub fn weights(&self) -> &ExtensionWeights {
        &self.weights
    }

    /// Blend the industrial profile into a base score.
    ///
    /// Total for all valid inputs: the base result and profile are both
    /// validated at construction, so no error path remains here.
    #[must_use]
    pub fn extend(&self, base: &ScoreResult, profile: &IndustrialImpactProfile) -> ScoreResult {
        let weight = self.weights.weight_for(profile);
        let raw = base.score + weight * (10.0 - base.score);
        let score = round_score(raw.min(10.0));

        let mut trace = base.trace.clone();
        trace.push(TraceEntry::ExtensionWeight { weight });
        trace.push(TraceEntry::ExtensionDelta {
            delta: round_score(score - base.score),
        });

        ScoreResult::new(score, trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::profile::{
        PhysicalDamagePotential, ProcessAvailabilityImpact, RecoveryComplexity, SafetyImpact,
    };

    fn base(score: f64) -> ScoreResult {
        ScoreResult::new(score, vec![TraceEntry::BaseScore { score }])
    }

    #[test]
    fn benign_profile_leaves_score_unchanged() {
        let ext = IndustrialExtension::default();
        let result = ext.extend(&base(7.4), &IndustrialImpactProfile::benign());
        assert_eq!(result.score, 7.4);
    }

    #[test]
    fn extension_never_lowers_the_score() {
        let ext = IndustrialExtension::default();
        let profiles = [
            IndustrialImpactProfile::benign(),
            IndustrialImpactProfile::worst_case(),
            IndustrialImpactProfile::new(
                SafetyImpact::Minor,
                ProcessAvailabilityImpact::None,
                PhysicalDamagePotential::Minor,
                RecoveryComplexity::Moderate,
            ),
        ];
        for profile in profiles {
            for tenths in 0..=100 {
                let b = f64::from(tenths) / 10.0;
                let result = ext.extend(&base(b), &profile);
                assert!(result.score >= b, "lowered {b} with {profile:?}");
                assert!(result.score <= 10.0);
            }
        }
    }

    #[test]
    fn severe_profile_saturates_at_ten() {
        let ext = IndustrialExtension::default();
        let profile = IndustrialImpactProfile::new(
            SafetyImpact::Catastrophic,
            ProcessAvailabilityImpact::Major,
            PhysicalDamagePotential::Major,
            RecoveryComplexity::Irrecoverable,
        );
        let result = ext.extend(&base(9.3), &profile);
        assert_eq!(result.score, 10.0);
    }

    #[test]
    fn zero_base_with_worst_profile_reaches_ten() {
        // w for the worst-case profile is 1.25, capped by min()
        let ext = IndustrialExtension::default();
        let result = ext.extend(&base(0.0), &IndustrialImpactProfile::worst_case());
        assert_eq!(result.score, 10.0);
    }

    #[test]
    fn trace_records_weight_and_delta() {
        let ext = IndustrialExtension::default();
        let result = ext.extend(&base(5.0), &IndustrialImpactProfile::worst_case());
        assert!(result
            .trace
            .iter()
            .any(|t| matches!(t, TraceEntry::ExtensionWeight { .. })));
        assert!(result
            .trace
            .iter()
            .any(|t| matches!(t, TraceEntry::ExtensionDelta { delta } if *delta > 0.0)));
    }

    #[test]
    fn default_weights_validate() {
        assert!(ExtensionWeights::default().validate().is_ok());
    }

    #[test]
    fn negative_weight_rejected() {
        let weights = ExtensionWeights {
            safety: -0.1,
            ..ExtensionWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn all_zero_weights_rejected() {
        let weights = ExtensionWeights {
            safety: 0.0,
            process_availability: 0.0,
            physical_damage: 0.0,
            recovery: 0.0,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn safety_must_dominate() {
        let weights = ExtensionWeights {
            safety: 0.1,
            process_availability: 0.5,
            ..ExtensionWeights::default()
        };
        assert!(weights.validate().is_err());
    }
}
