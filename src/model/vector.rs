//! CVSS v4.0 metric vector and its constituent metric enums.
//!
//! A [`MetricVector`] is constructed once per vulnerability record, either
//! through [`MetricVectorBuilder`] or by parsing the canonical
//! `CVSS:4.0/AV:_/AC:_/...` vector string, and is immutable afterwards.
//! Required base metrics are enforced at construction; the optional threat
//! and supplemental metrics default to Not Defined.

use crate::error::{MetricErrorKind, Result, ScoringError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attack Vector (AV)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackVector {
    Network,
    Adjacent,
    Local,
    Physical,
}

/// Attack Complexity (AC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackComplexity {
    Low,
    High,
}

/// Attack Requirements (AT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackRequirements {
    None,
    Present,
}

/// Privileges Required (PR)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivilegesRequired {
    None,
    Low,
    High,
}

/// User Interaction (UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserInteraction {
    None,
    Passive,
    Active,
}

/// Impact level for a single confidentiality/integrity/availability metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    None,
    Low,
    High,
}

/// Exploit Maturity (E), optional threat metric.
///
/// Not Defined is scored as Attacked, the CVSS v4.0 worst-case default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExploitMaturity {
    #[default]
    NotDefined,
    Attacked,
    Poc,
    Unreported,
}

/// Safety (S), supplemental, non-scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyMetric {
    #[default]
    NotDefined,
    Negligible,
    Present,
}

/// Automatable (AU), supplemental, non-scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Automatable {
    #[default]
    NotDefined,
    No,
    Yes,
}

/// Recovery (R), supplemental, non-scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryMetric {
    #[default]
    NotDefined,
    Automatic,
    User,
    Irrecoverable,
}

/// Value Density (V), supplemental, non-scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueDensity {
    #[default]
    NotDefined,
    Diffuse,
    Concentrated,
}

/// Vulnerability Response Effort (RE), supplemental, non-scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseEffort {
    #[default]
    NotDefined,
    Low,
    Moderate,
    High,
}

/// Provider Urgency (U), supplemental, non-scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderUrgency {
    #[default]
    NotDefined,
    Clear,
    Green,
    Amber,
    Red,
}

// ============================================================================
// Short metric codes (vector-string form)
// ============================================================================

macro_rules! metric_codes {
    ($ty:ty, $metric:literal, { $($variant:path => $code:literal),+ $(,)? }) => {
        impl $ty {
            /// Short code used in the vector-string form
            #[must_use]
            pub const fn code(&self) -> &'static str {
                match self {
                    $($variant => $code),+
                }
            }

            /// Parse the short vector-string code
            pub fn from_code(code: &str) -> Result<Self> {
                match code {
                    $($code => Ok($variant),)+
                    other => Err(ScoringError::metric(
                        "parsing vector string",
                        MetricErrorKind::InvalidValue {
                            metric: $metric.to_string(),
                            value: other.to_string(),
                        },
                    )),
                }
            }
        }
    };
}

metric_codes!(AttackVector, "AV", {
    AttackVector::Network => "N",
    AttackVector::Adjacent => "A",
    AttackVector::Local => "L",
    AttackVector::Physical => "P",
});

metric_codes!(AttackComplexity, "AC", {
    AttackComplexity::Low => "L",
    AttackComplexity::High => "H",
});

metric_codes!(AttackRequirements, "AT", {
    AttackRequirements::None => "N",
    AttackRequirements::Present => "P",
});

metric_codes!(PrivilegesRequired, "PR", {
    PrivilegesRequired::None => "N",
    PrivilegesRequired::Low => "L",
    PrivilegesRequired::High => "H",
});

metric_codes!(UserInteraction, "UI", {
    UserInteraction::None => "N",
    UserInteraction::Passive => "P",
    UserInteraction::Active => "A",
});

metric_codes!(ImpactLevel, "impact", {
    ImpactLevel::None => "N",
    ImpactLevel::Low => "L",
    ImpactLevel::High => "H",
});

metric_codes!(ExploitMaturity, "E", {
    ExploitMaturity::NotDefined => "X",
    ExploitMaturity::Attacked => "A",
    ExploitMaturity::Poc => "P",
    ExploitMaturity::Unreported => "U",
});

metric_codes!(SafetyMetric, "S", {
    SafetyMetric::NotDefined => "X",
    SafetyMetric::Negligible => "N",
    SafetyMetric::Present => "P",
});

metric_codes!(Automatable, "AU", {
    Automatable::NotDefined => "X",
    Automatable::No => "N",
    Automatable::Yes => "Y",
});

metric_codes!(RecoveryMetric, "R", {
    RecoveryMetric::NotDefined => "X",
    RecoveryMetric::Automatic => "A",
    RecoveryMetric::User => "U",
    RecoveryMetric::Irrecoverable => "I",
});

metric_codes!(ValueDensity, "V", {
    ValueDensity::NotDefined => "X",
    ValueDensity::Diffuse => "D",
    ValueDensity::Concentrated => "C",
});

metric_codes!(ResponseEffort, "RE", {
    ResponseEffort::NotDefined => "X",
    ResponseEffort::Low => "L",
    ResponseEffort::Moderate => "M",
    ResponseEffort::High => "H",
});

metric_codes!(ProviderUrgency, "U", {
    ProviderUrgency::NotDefined => "X",
    ProviderUrgency::Clear => "Clear",
    ProviderUrgency::Green => "Green",
    ProviderUrgency::Amber => "Amber",
    ProviderUrgency::Red => "Red",
});

// ============================================================================
// Composite structures
// ============================================================================

/// Confidentiality/Integrity/Availability impact triple for one system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImpactTriple {
    pub confidentiality: ImpactLevel,
    pub integrity: ImpactLevel,
    pub availability: ImpactLevel,
}

impl ImpactTriple {
    #[must_use]
    pub const fn new(
        confidentiality: ImpactLevel,
        integrity: ImpactLevel,
        availability: ImpactLevel,
    ) -> Self {
        Self {
            confidentiality,
            integrity,
            availability,
        }
    }

    /// All three sub-metrics set to None
    #[must_use]
    pub const fn none() -> Self {
        Self::new(ImpactLevel::None, ImpactLevel::None, ImpactLevel::None)
    }

    /// All three sub-metrics set to High
    #[must_use]
    pub const fn high() -> Self {
        Self::new(ImpactLevel::High, ImpactLevel::High, ImpactLevel::High)
    }

    /// True if every sub-metric is None
    #[must_use]
    pub fn is_all_none(&self) -> bool {
        self.confidentiality == ImpactLevel::None
            && self.integrity == ImpactLevel::None
            && self.availability == ImpactLevel::None
    }

    /// True if any sub-metric is High
    #[must_use]
    pub fn any_high(&self) -> bool {
        self.confidentiality == ImpactLevel::High
            || self.integrity == ImpactLevel::High
            || self.availability == ImpactLevel::High
    }
}

/// Supplemental CVSS v4.0 metrics. Non-scoring; carried for round-tripping
/// and analyst context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SupplementalMetrics {
    #[serde(default)]
    pub safety: SafetyMetric,
    #[serde(default)]
    pub automatable: Automatable,
    #[serde(default)]
    pub recovery: RecoveryMetric,
    #[serde(default)]
    pub value_density: ValueDensity,
    #[serde(default)]
    pub response_effort: ResponseEffort,
    #[serde(default)]
    pub provider_urgency: ProviderUrgency,
}

/// A complete CVSS v4.0 metric assignment.
///
/// Immutable after construction. Required base metrics are guaranteed
/// present by the type; use [`MetricVector::builder`] or [`FromStr`] to
/// construct one with validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricVector {
    pub attack_vector: AttackVector,
    pub attack_complexity: AttackComplexity,
    pub attack_requirements: AttackRequirements,
    pub privileges_required: PrivilegesRequired,
    pub user_interaction: UserInteraction,
    /// Impact on the vulnerable system (VC/VI/VA)
    pub vulnerable_impact: ImpactTriple,
    /// Impact on subsequent systems (SC/SI/SA)
    pub subsequent_impact: ImpactTriple,
    /// Optional threat metric (E); Not Defined scores as Attacked
    #[serde(default)]
    pub exploit_maturity: ExploitMaturity,
    #[serde(default)]
    pub supplemental: SupplementalMetrics,
}

impl MetricVector {
    /// Start building a vector; required metrics are checked at `build()`.
    #[must_use]
    pub fn builder() -> MetricVectorBuilder {
        MetricVectorBuilder::default()
    }

    /// True if every impact sub-metric, vulnerable and subsequent, is None.
    ///
    /// CVSS v4.0 defines the score of such a vector as exactly 0.0.
    #[must_use]
    pub fn has_no_impact(&self) -> bool {
        self.vulnerable_impact.is_all_none() && self.subsequent_impact.is_all_none()
    }
}

impl fmt::Display for MetricVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CVSS:4.0/AV:{}/AC:{}/AT:{}/PR:{}/UI:{}/VC:{}/VI:{}/VA:{}/SC:{}/SI:{}/SA:{}",
            self.attack_vector.code(),
            self.attack_complexity.code(),
            self.attack_requirements.code(),
            self.privileges_required.code(),
            self.user_interaction.code(),
            self.vulnerable_impact.confidentiality.code(),
            self.vulnerable_impact.integrity.code(),
            self.vulnerable_impact.availability.code(),
            self.subsequent_impact.confidentiality.code(),
            self.subsequent_impact.integrity.code(),
            self.subsequent_impact.availability.code(),
        )?;
        if self.exploit_maturity != ExploitMaturity::NotDefined {
            write!(f, "/E:{}", self.exploit_maturity.code())?;
        }
        let s = &self.supplemental;
        if s.safety != SafetyMetric::NotDefined {
            write!(f, "/S:{}", s.safety.code())?;
        }
        if s.automatable != Automatable::NotDefined {
            write!(f, "/AU:{}", s.automatable.code())?;
        }
        if s.recovery != RecoveryMetric::NotDefined {
            write!(f, "/R:{}", s.recovery.code())?;
        }
        if s.value_density != ValueDensity::NotDefined {
            write!(f, "/V:{}", s.value_density.code())?;
        }
        if s.response_effort != ResponseEffort::NotDefined {
            write!(f, "/RE:{}", s.response_effort.code())?;
        }
        if s.provider_urgency != ProviderUrgency::NotDefined {
            write!(f, "/U:{}", s.provider_urgency.code())?;
        }
        Ok(())
    }
}

impl FromStr for MetricVector {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        const PREFIX: &str = "CVSS:4.0";

        let rest = s.strip_prefix(PREFIX).ok_or_else(|| {
            ScoringError::metric(
                "parsing vector string",
                MetricErrorKind::MalformedVector(format!("must start with {PREFIX}")),
            )
        })?;

        let mut builder = MetricVectorBuilder::default();
        let mut seen: Vec<String> = Vec::new();

        for part in rest.split('/').filter(|p| !p.is_empty()) {
            let (metric, value) = part.split_once(':').ok_or_else(|| {
                ScoringError::metric(
                    "parsing vector string",
                    MetricErrorKind::MalformedVector(format!(
                        "expected METRIC:VALUE, got '{part}'"
                    )),
                )
            })?;

            if seen.iter().any(|m| m == metric) {
                return Err(ScoringError::metric(
                    "parsing vector string",
                    MetricErrorKind::DuplicateMetric {
                        metric: metric.to_string(),
                    },
                ));
            }
            seen.push(metric.to_string());

            match metric {
                "AV" => builder.attack_vector = Some(AttackVector::from_code(value)?),
                "AC" => builder.attack_complexity = Some(AttackComplexity::from_code(value)?),
                "AT" => builder.attack_requirements = Some(AttackRequirements::from_code(value)?),
                "PR" => builder.privileges_required = Some(PrivilegesRequired::from_code(value)?),
                "UI" => builder.user_interaction = Some(UserInteraction::from_code(value)?),
                "VC" => builder.vc = Some(ImpactLevel::from_code(value)?),
                "VI" => builder.vi = Some(ImpactLevel::from_code(value)?),
                "VA" => builder.va = Some(ImpactLevel::from_code(value)?),
                "SC" => builder.sc = Some(ImpactLevel::from_code(value)?),
                "SI" => builder.si = Some(ImpactLevel::from_code(value)?),
                "SA" => builder.sa = Some(ImpactLevel::from_code(value)?),
                "E" => builder.exploit_maturity = ExploitMaturity::from_code(value)?,
                "S" => builder.supplemental.safety = SafetyMetric::from_code(value)?,
                "AU" => builder.supplemental.automatable = Automatable::from_code(value)?,
                "R" => builder.supplemental.recovery = RecoveryMetric::from_code(value)?,
                "V" => builder.supplemental.value_density = ValueDensity::from_code(value)?,
                "RE" => builder.supplemental.response_effort = ResponseEffort::from_code(value)?,
                "U" => builder.supplemental.provider_urgency = ProviderUrgency::from_code(value)?,
                other => {
                    return Err(ScoringError::metric(
                        "parsing vector string",
                        MetricErrorKind::UnknownMetric {
                            metric: other.to_string(),
                        },
                    ));
                }
            }
        }

        builder.build()
    }
}

/// Builder for [`MetricVector`]. Required metrics left unset cause `build()`
/// to fail with a missing-metric error, never a silent default.
#[derive(Debug, Clone, Default)]
pub struct MetricVectorBuilder {
    pub attack_vector: Option<AttackVector>,
    pub attack_complexity: Option<AttackComplexity>,
    pub attack_requirements: Option<AttackRequirements>,
    pub privileges_required: Option<PrivilegesRequired>,
    pub user_interaction: Option<UserInteraction>,
    pub vc: Option<ImpactLevel>,
    pub vi: Option<ImpactLevel>,
    pub va: Option<ImpactLevel>,
    pub sc: Option<ImpactLevel>,
    pub si: Option<ImpactLevel>,
    pub sa: Option<ImpactLevel>,
    pub exploit_maturity: ExploitMaturity,
    pub supplemental: SupplementalMetrics,
}

impl MetricVectorBuilder {
    #[must_use]
    pub fn attack_vector(mut self, v: AttackVector) -> Self {
        self.attack_vector = Some(v);
        self
    }

    #[must_use]
    pub fn attack_complexity(mut self, v: AttackComplexity) -> Self {
        self.attack_complexity = Some(v);
        self
    }

    #[must_use]
    pub fn attack_requirements(mut self, v: AttackRequirements) -> Self {
        self.attack_requirements = Some(v);
        self
    }

    #[must_use]
    pub fn privileges_required(mut self, v: PrivilegesRequired) -> Self {
        self.privileges_required = Some(v);
        self
    }

    #[must_use]
    pub fn user_interaction(mut self, v: UserInteraction) -> Self {
        self.user_interaction = Some(v);
        self
    }

    #[must_use]
    pub fn vulnerable_impact(mut self, impact: ImpactTriple) -> Self {
        self.vc = Some(impact.confidentiality);
        self.vi = Some(impact.integrity);
        self.va = Some(impact.availability);
        self
    }

    #[must_use]
    pub fn subsequent_impact(mut self, impact: ImpactTriple) -> Self {
        self.sc = Some(impact.confidentiality);
        self.si = Some(impact.integrity);
        self.sa = Some(impact.availability);
        self
    }

    #[must_use]
    pub fn exploit_maturity(mut self, v: ExploitMaturity) -> Self {
        self.exploit_maturity = v;
        self
    }

    #[must_use]
    pub fn supplemental(mut self, v: SupplementalMetrics) -> Self {
        self.supplemental = v;
        self
    }

    /// Validate and construct the vector.
    pub fn build(self) -> Result<MetricVector> {
        fn require<T>(value: Option<T>, metric: &str) -> Result<T> {
            value.ok_or_else(|| ScoringError::missing_metric(metric))
        }

        Ok(MetricVector {
            attack_vector: require(self.attack_vector, "AV")?,
            attack_complexity: require(self.attack_complexity, "AC")?,
            attack_requirements: require(self.attack_requirements, "AT")?,
            privileges_required: require(self.privileges_required, "PR")?,
            user_interaction: require(self.user_interaction, "UI")?,
            vulnerable_impact: ImpactTriple::new(
                require(self.vc, "VC")?,
                require(self.vi, "VI")?,
                require(self.va, "VA")?,
            ),
            subsequent_impact: ImpactTriple::new(
                require(self.sc, "SC")?,
                require(self.si, "SI")?,
                require(self.sa, "SA")?,
            ),
            exploit_maturity: self.exploit_maturity,
            supplemental: self.supplemental,
        })
    }
}
