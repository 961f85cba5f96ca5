//! Industrial impact profile: the four ordinal factors that feed the
//! industrial extension on top of a CVSS base score.

use crate::error::{ProfileErrorKind, Result, ScoringError};
use serde::{Deserialize, Serialize};

/// Potential for harm to people if the vulnerability is exploited.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum SafetyImpact {
    None,
    Minor,
    Major,
    Catastrophic,
}

/// Disruption to the industrial process or production availability.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ProcessAvailabilityImpact {
    None,
    Minor,
    Major,
    Total,
}

/// Potential for damage to physical equipment or the environment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalDamagePotential {
    None,
    Minor,
    Major,
    Severe,
}

/// Effort required to restore the system after a successful attack.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryComplexity {
    None,
    Moderate,
    Extensive,
    Irrecoverable,
}

macro_rules! ordinal_factor {
    ($ty:ty, { $($variant:path => $rank:literal / $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Ordinal rank, 0 (no impact) through 3 (worst)
            #[must_use]
            pub const fn rank(&self) -> u8 {
                match self {
                    $($variant => $rank),+
                }
            }

            /// Human-readable factor level
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($variant => $name),+
                }
            }
        }
    };
}

ordinal_factor!(SafetyImpact, {
    SafetyImpact::None => 0 / "none",
    SafetyImpact::Minor => 1 / "minor",
    SafetyImpact::Major => 2 / "major",
    SafetyImpact::Catastrophic => 3 / "catastrophic",
});

ordinal_factor!(ProcessAvailabilityImpact, {
    ProcessAvailabilityImpact::None => 0 / "none",
    ProcessAvailabilityImpact::Minor => 1 / "minor",
    ProcessAvailabilityImpact::Major => 2 / "major",
    ProcessAvailabilityImpact::Total => 3 / "total",
});

ordinal_factor!(PhysicalDamagePotential, {
    PhysicalDamagePotential::None => 0 / "none",
    PhysicalDamagePotential::Minor => 1 / "minor",
    PhysicalDamagePotential::Major => 2 / "major",
    PhysicalDamagePotential::Severe => 3 / "severe",
});

ordinal_factor!(RecoveryComplexity, {
    RecoveryComplexity::None => 0 / "none",
    RecoveryComplexity::Moderate => 1 / "moderate",
    RecoveryComplexity::Extensive => 2 / "extensive",
    RecoveryComplexity::Irrecoverable => 3 / "irrecoverable",
});

/// The industrial impact context of one vulnerability.
///
/// All four factors are required; a record with no industrial relevance
/// uses the `None` level explicitly rather than omitting factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndustrialImpactProfile {
    pub safety: SafetyImpact,
    pub process_availability: ProcessAvailabilityImpact,
    pub physical_damage: PhysicalDamagePotential,
    pub recovery: RecoveryComplexity,
}

impl IndustrialImpactProfile {
    #[must_use]
    pub const fn new(
        safety: SafetyImpact,
        process_availability: ProcessAvailabilityImpact,
        physical_damage: PhysicalDamagePotential,
        recovery: RecoveryComplexity,
    ) -> Self {
        Self {
            safety,
            process_availability,
            physical_damage,
            recovery,
        }
    }

    /// Profile with every factor at its lowest level; the extension leaves
    /// the base score unchanged for it.
    #[must_use]
    pub const fn benign() -> Self {
        Self::new(
            SafetyImpact::None,
            ProcessAvailabilityImpact::None,
            PhysicalDamagePotential::None,
            RecoveryComplexity::None,
        )
    }

    /// Profile with every factor at its worst level.
    #[must_use]
    pub const fn worst_case() -> Self {
        Self::new(
            SafetyImpact::Catastrophic,
            ProcessAvailabilityImpact::Total,
            PhysicalDamagePotential::Severe,
            RecoveryComplexity::Irrecoverable,
        )
    }

    /// True if no factor is elevated above its None level.
    #[must_use]
    pub fn is_benign(&self) -> bool {
        self.safety.rank() == 0
            && self.process_availability.rank() == 0
            && self.physical_damage.rank() == 0
            && self.recovery.rank() == 0
    }

    #[must_use]
    pub fn builder() -> IndustrialImpactProfileBuilder {
        IndustrialImpactProfileBuilder::default()
    }
}

/// Builder for [`IndustrialImpactProfile`]; missing factors are an error,
/// never silently defaulted.
#[derive(Debug, Clone, Default)]
pub struct IndustrialImpactProfileBuilder {
    safety: Option<SafetyImpact>,
    process_availability: Option<ProcessAvailabilityImpact>,
    physical_damage: Option<PhysicalDamagePotential>,
    recovery: Option<RecoveryComplexity>,
}

impl IndustrialImpactProfileBuilder {
    #[must_use]
    pub fn safety(mut self, v: SafetyImpact) -> Self {
        self.safety = Some(v);
        self
    }

    #[must_use]
    pub fn process_availability(mut self, v: ProcessAvailabilityImpact) -> Self {
        self.process_availability = Some(v);
        self
    }

    #[must_use]
    pub fn physical_damage(mut self, v: PhysicalDamagePotential) -> Self {
        self.physical_damage = Some(v);
        self
    }

    #[must_use]
    pub fn recovery(mut self, v: RecoveryComplexity) -> Self {
        self.recovery = Some(v);
        self
    }

    pub fn build(self) -> Result<IndustrialImpactProfile> {
        Ok(IndustrialImpactProfile {
            safety: self
                .safety
                .ok_or_else(|| ScoringError::missing_factor("safety"))?,
            process_availability: self
                .process_availability
                .ok_or_else(|| ScoringError::missing_factor("process_availability"))?,
            physical_damage: self
                .physical_damage
                .ok_or_else(|| ScoringError::missing_factor("physical_damage"))?,
            recovery: self
                .recovery
                .ok_or_else(|| ScoringError::missing_factor("recovery"))?,
        })
    }
}
