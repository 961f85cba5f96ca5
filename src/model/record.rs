//! A vulnerability record: the unit of work for batch assessment.

use crate::model::{IndustrialImpactProfile, MetricVector};
use serde::{Deserialize, Serialize};

/// One vulnerability to be scored and compared.
///
/// Both the metric vector and the industrial profile are validated at
/// construction time, so scoring a record cannot fail on malformed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnRecord {
    /// Stable identifier, e.g. `ICS-001` or a CVE id
    pub id: String,
    /// Free-text description, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub vector: MetricVector,
    pub profile: IndustrialImpactProfile,
}

impl VulnRecord {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        vector: MetricVector,
        profile: IndustrialImpactProfile,
    ) -> Self {
        Self {
            id: id.into(),
            description: None,
            vector,
            profile,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::vector::{
        AttackComplexity, AttackRequirements, AttackVector, ImpactTriple, PrivilegesRequired,
        UserInteraction,
    };

    fn any_vector() -> MetricVector {
        MetricVector::builder()
            .attack_vector(AttackVector::Network)
            .attack_complexity(AttackComplexity::Low)
            .attack_requirements(AttackRequirements::None)
            .privileges_required(PrivilegesRequired::None)
            .user_interaction(UserInteraction::None)
            .vulnerable_impact(ImpactTriple::high())
            .subsequent_impact(ImpactTriple::none())
            .build()
            .expect("valid vector")
    }

    #[test]
    fn record_construction() {
        let record = VulnRecord::new("ICS-001", any_vector(), IndustrialImpactProfile::benign())
            .with_description("PLC buffer overflow");
        assert_eq!(record.id, "ICS-001");
        assert_eq!(record.description.as_deref(), Some("PLC buffer overflow"));
    }

    #[test]
    fn record_serde_roundtrip() {
        let record = VulnRecord::new("ICS-002", any_vector(), IndustrialImpactProfile::worst_case());
        let json = serde_json::to_string(&record).expect("serialize");
        let back: VulnRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, record);
    }
}
