//! Core data model: CVSS v4.0 metric vectors, industrial impact profiles,
//! scores, and vulnerability records.

pub mod profile;
pub mod record;
pub mod score;
pub mod vector;

pub use profile::{
    IndustrialImpactProfile, IndustrialImpactProfileBuilder, PhysicalDamagePotential,
    ProcessAvailabilityImpact, RecoveryComplexity, SafetyImpact,
};
pub use record::VulnRecord;
pub use score::{round_score, ScoreResult, Severity, TraceEntry};
pub use vector::{
    AttackComplexity, AttackRequirements, AttackVector, Automatable, ExploitMaturity, ImpactLevel,
    ImpactTriple, MetricVector, MetricVectorBuilder, PrivilegesRequired, ProviderUrgency,
    RecoveryMetric, ResponseEffort, SafetyMetric, SupplementalMetrics, UserInteraction,
    ValueDensity,
};
