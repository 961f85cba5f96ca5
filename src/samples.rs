//! Built-in sample vulnerabilities: a realistic set of industrial control
//! system findings plus one maximum-severity probe. Useful for demos and as
//! a smoke test of the whole pipeline.

use crate::model::profile::{
    PhysicalDamagePotential, ProcessAvailabilityImpact, RecoveryComplexity, SafetyImpact,
};
use crate::model::vector::{
    AttackComplexity, AttackRequirements, AttackVector, ExploitMaturity, ImpactLevel,
    ImpactTriple, MetricVector, PrivilegesRequired, SupplementalMetrics, UserInteraction,
};
use crate::model::{IndustrialImpactProfile, VulnRecord};

fn vector(
    av: AttackVector,
    ac: AttackComplexity,
    at: AttackRequirements,
    pr: PrivilegesRequired,
    ui: UserInteraction,
    vulnerable: ImpactTriple,
    subsequent: ImpactTriple,
) -> MetricVector {
    MetricVector {
        attack_vector: av,
        attack_complexity: ac,
        attack_requirements: at,
        privileges_required: pr,
        user_interaction: ui,
        vulnerable_impact: vulnerable,
        subsequent_impact: subsequent,
        exploit_maturity: ExploitMaturity::NotDefined,
        supplemental: SupplementalMetrics::default(),
    }
}

const fn profile(
    safety: SafetyImpact,
    process: ProcessAvailabilityImpact,
    physical: PhysicalDamagePotential,
    recovery: RecoveryComplexity,
) -> IndustrialImpactProfile {
    IndustrialImpactProfile::new(safety, process, physical, recovery)
}

/// The built-in sample record set.
#[must_use]
pub fn sample_records() -> Vec<VulnRecord> {
    use AttackComplexity as Ac;
    use AttackRequirements as At;
    use AttackVector as Av;
    use ImpactLevel::{High as H, Low as L, None as N};
    use PrivilegesRequired as Pr;
    use UserInteraction as Ui;

    vec![
        VulnRecord::new(
            "ICS-001",
            vector(
                Av::Network,
                Ac::Low,
                At::None,
                Pr::None,
                Ui::None,
                ImpactTriple::new(H, H, H),
                ImpactTriple::new(N, N, N),
            ),
            profile(
                SafetyImpact::Major,
                ProcessAvailabilityImpact::Total,
                PhysicalDamagePotential::Major,
                RecoveryComplexity::Extensive,
            ),
        )
        .with_description(
            "Buffer overflow in PLC firmware allowing remote code execution",
        ),
        VulnRecord::new(
            "ICS-002",
            vector(
                Av::Network,
                Ac::Low,
                At::None,
                Pr::None,
                Ui::None,
                ImpactTriple::new(H, H, L),
                ImpactTriple::new(N, N, N),
            ),
            profile(
                SafetyImpact::Minor,
                ProcessAvailabilityImpact::Major,
                PhysicalDamagePotential::Minor,
                RecoveryComplexity::Moderate,
            ),
        )
        .with_description("Authentication bypass in HMI software allowing unauthorised access"),
        VulnRecord::new(
            "ICS-003",
            vector(
                Av::Network,
                Ac::High,
                At::None,
                Pr::Low,
                Ui::None,
                ImpactTriple::new(H, N, N),
                ImpactTriple::new(N, N, N),
            ),
            profile(
                SafetyImpact::None,
                ProcessAvailabilityImpact::Minor,
                PhysicalDamagePotential::None,
                RecoveryComplexity::Moderate,
            ),
        )
        .with_description(
            "Information disclosure in historian database exposing sensitive process data",
        ),
        VulnRecord::new(
            "ICS-004",
            vector(
                Av::Adjacent,
                Ac::Low,
                At::None,
                Pr::None,
                Ui::None,
                ImpactTriple::new(N, N, H),
                ImpactTriple::new(N, N, L),
            ),
            profile(
                SafetyImpact::Minor,
                ProcessAvailabilityImpact::Total,
                PhysicalDamagePotential::Minor,
                RecoveryComplexity::Moderate,
            ),
        )
        .with_description(
            "Denial of service in RTU communication module causing system unavailability",
        ),
        VulnRecord::new(
            "ICS-005",
            vector(
                Av::Network,
                Ac::High,
                At::Present,
                Pr::None,
                Ui::None,
                ImpactTriple::new(L, H, L),
                ImpactTriple::new(N, L, N),
            ),
            profile(
                SafetyImpact::Major,
                ProcessAvailabilityImpact::Major,
                PhysicalDamagePotential::Major,
                RecoveryComplexity::Extensive,
            ),
        )
        .with_description(
            "Man in the middle over SCADA protocol allowing command injection",
        ),
        VulnRecord::new(
            "ICS-006",
            vector(
                Av::Local,
                Ac::High,
                At::None,
                Pr::High,
                Ui::None,
                ImpactTriple::new(N, H, H),
                ImpactTriple::new(N, N, N),
            ),
            profile(
                SafetyImpact::Catastrophic,
                ProcessAvailabilityImpact::Major,
                PhysicalDamagePotential::Severe,
                RecoveryComplexity::Extensive,
            ),
        )
        .with_description(
            "Vulnerability in safety instrumented system firmware affecting safety functions",
        ),
        VulnRecord::new(
            "ICS-007",
            vector(
                Av::Local,
                Ac::Low,
                At::None,
                Pr::Low,
                Ui::Passive,
                ImpactTriple::new(H, N, N),
                ImpactTriple::new(H, N, N),
            ),
            profile(
                SafetyImpact::None,
                ProcessAvailabilityImpact::Minor,
                PhysicalDamagePotential::None,
                RecoveryComplexity::Moderate,
            ),
        )
        .with_description("Credential theft in engineering workstation software"),
        VulnRecord::new(
            "MAX-TEST",
            MetricVector {
                exploit_maturity: ExploitMaturity::Attacked,
                ..vector(
                    Av::Network,
                    Ac::Low,
                    At::None,
                    Pr::None,
                    Ui::None,
                    ImpactTriple::new(H, H, H),
                    ImpactTriple::new(H, H, H),
                )
            },
            IndustrialImpactProfile::worst_case(),
        )
        .with_description("Probe exercising the maximum reachable score in both models"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;
    use crate::model::Severity;
    use crate::pipeline::assess_records;

    #[test]
    fn samples_have_unique_ids() {
        let records = sample_records();
        let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn samples_score_cleanly() {
        let records = sample_records();
        let outcome =
            assess_records(&records, &ScoringConfig::default()).expect("samples score");
        assert_eq!(outcome.report.aggregates.record_count, records.len());
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn max_test_probe_scores_ten_on_both_models() {
        let records = sample_records();
        let outcome =
            assess_records(&records, &ScoringConfig::default()).expect("samples score");
        let max = outcome
            .report
            .records
            .iter()
            .find(|r| r.id == "MAX-TEST")
            .expect("probe present");
        assert_eq!(max.cvss.score, 10.0);
        assert_eq!(max.industrial.score, 10.0);
        assert_eq!(max.cvss.severity, Severity::Critical);
    }

    #[test]
    fn industrial_scores_never_below_base() {
        let records = sample_records();
        let outcome =
            assess_records(&records, &ScoringConfig::default()).expect("samples score");
        for record in &outcome.report.records {
            assert!(
                record.industrial.score >= record.cvss.score,
                "{} de-escalated",
                record.id
            );
        }
    }
}
