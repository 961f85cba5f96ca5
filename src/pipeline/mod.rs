//! Batch assessment pipeline: load vulnerability records from JSON, score
//! them under both models in parallel, and collect the comparison report.

use crate::compare::{Comparator, ComparisonReport, RecordComparison};
use crate::config::{ErrorPolicy, ScoringConfig};
use crate::error::{Result, ScoringError};
use crate::model::{IndustrialImpactProfile, VulnRecord};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Raw JSON form of one record, as written in an input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordInput {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// CVSS v4.0 vector string, e.g. `CVSS:4.0/AV:N/AC:L/...`
    pub cvss_vector: String,
    pub profile: IndustrialImpactProfile,
}

impl RecordInput {
    /// Validate and convert into a scored-ready record. Failures are tagged
    /// with the record's id.
    pub fn into_record(self) -> Result<VulnRecord> {
        if self.id.trim().is_empty() {
            return Err(ScoringError::validation("record id must not be empty"));
        }
        let vector = self
            .cvss_vector
            .parse()
            .map_err(|e| ScoringError::for_record(&self.id, e))?;
        let mut record = VulnRecord::new(self.id, vector, self.profile);
        record.description = self.description;
        Ok(record)
    }
}

/// One rejected record of a lenient run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub id: String,
    pub message: String,
}

impl Failure {
    fn from_error(err: &ScoringError) -> Self {
        let id = err.record_id().unwrap_or("<unknown>").to_string();
        // include the cause chain, the top-level message alone is too terse
        let mut message = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(s) = source {
            message.push_str(": ");
            message.push_str(&s.to_string());
            source = s.source();
        }
        Self { id, message }
    }
}

/// Result of a batch run: the report over the records that scored, plus the
/// records that were rejected (empty under the strict policy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub report: ComparisonReport,
    pub failures: Vec<Failure>,
}

impl AssessmentOutcome {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Load raw record inputs from a JSON file (an array of records).
pub fn load_inputs(path: &Path) -> Result<Vec<RecordInput>> {
    let contents = std::fs::read_to_string(path).map_err(|e| ScoringError::io(path, e))?;
    let inputs: Vec<RecordInput> = serde_json::from_str(&contents).map_err(|e| {
        ScoringError::validation(format!("{}: {e}", path.display()))
    })?;
    tracing::debug!(path = %path.display(), records = inputs.len(), "loaded record inputs");
    Ok(inputs)
}

/// Convert raw inputs and assess them under the configured policy.
pub fn assess_inputs(
    inputs: Vec<RecordInput>,
    config: &ScoringConfig,
) -> Result<AssessmentOutcome> {
    let mut records = Vec::with_capacity(inputs.len());
    let mut failures = Vec::new();

    for input in inputs {
        match input.into_record() {
            Ok(record) => records.push(record),
            Err(err) if config.error_policy == ErrorPolicy::Lenient => {
                tracing::warn!(error = %err, "skipping malformed record");
                failures.push(Failure::from_error(&err));
            }
            Err(err) => return Err(err),
        }
    }

    let mut outcome = assess_records(&records, config)?;
    failures.extend(outcome.failures);
    outcome.failures = failures;
    Ok(outcome)
}

/// Score a batch of validated records in parallel and build the report.
///
/// Record ids must be unique; duplicates are a validation error under
/// either policy since the report is keyed by id.
pub fn assess_records(
    records: &[VulnRecord],
    config: &ScoringConfig,
) -> Result<AssessmentOutcome> {
    let mut seen: IndexMap<&str, usize> = IndexMap::with_capacity(records.len());
    for record in records {
        if seen.insert(record.id.as_str(), 1).is_some() {
            return Err(ScoringError::validation(format!(
                "duplicate record id '{}'",
                record.id
            )));
        }
    }

    let comparator = Comparator::new(config.weights)?;

    let results: Vec<Result<RecordComparison>> = records
        .par_iter()
        .map(|record| {
            comparator
                .assess(record)
                .map_err(|e| ScoringError::for_record(&record.id, e))
        })
        .collect();

    let mut comparisons = Vec::with_capacity(records.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(comparison) => comparisons.push(comparison),
            Err(err) if config.error_policy == ErrorPolicy::Lenient => {
                tracing::warn!(error = %err, "record failed to score");
                failures.push(Failure::from_error(&err));
            }
            Err(err) => return Err(err),
        }
    }

    tracing::info!(
        scored = comparisons.len(),
        failed = failures.len(),
        "batch assessment complete"
    );

    Ok(AssessmentOutcome {
        report: ComparisonReport::from_comparisons(comparisons),
        failures,
    })
}
