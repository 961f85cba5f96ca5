//! Command handlers for the binary. Each `run_*` function takes a plain
//! options struct assembled in `main` and returns a process exit code.

use crate::config::{ErrorPolicy, ScoringConfig};
use crate::error::Result;
use crate::model::{IndustrialImpactProfile, MetricVector, ScoreResult};
use crate::pipeline::{assess_inputs, assess_records, load_inputs, AssessmentOutcome};
use crate::reports::{create_renderer, JsonReporter, ReportFormat, ReportRenderer};
use crate::samples;
use crate::scoring::{CvssV4Calculator, IndustrialExtension};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Options for the `compare` command.
#[derive(Debug, Default)]
pub struct CompareOptions {
    /// JSON records file; the built-in sample set when absent
    pub records: Option<PathBuf>,
    /// YAML config file
    pub config: Option<PathBuf>,
    /// Fail the run on the first bad record
    pub strict: bool,
    pub output: ReportFormat,
    /// Output file; stdout when absent
    pub output_file: Option<PathBuf>,
    /// Compact (single-line) JSON
    pub compact: bool,
}

/// Run a batch comparison. Exit code 1 when any record was rejected under
/// the lenient policy, 0 otherwise.
pub fn run_compare(options: CompareOptions) -> Result<i32> {
    let mut config = match &options.config {
        Some(path) => ScoringConfig::from_yaml_file(path)?,
        None => ScoringConfig::default(),
    };
    if options.strict {
        config.error_policy = ErrorPolicy::Strict;
    }

    let outcome = match &options.records {
        Some(path) => {
            let inputs = load_inputs(path)?;
            assess_inputs(inputs, &config)?
        }
        None => {
            tracing::info!("no records file given, using the built-in sample set");
            assess_records(&samples::sample_records(), &config)?
        }
    };

    let renderer: Box<dyn ReportRenderer> = match options.output {
        ReportFormat::Json => Box::new(JsonReporter::new().pretty(!options.compact)),
        format => create_renderer(format),
    };
    write_output(
        &renderer.render(&outcome)?,
        options.output_file.as_deref(),
    )?;

    Ok(i32::from(outcome.has_failures()))
}

/// Options for the `score` command.
#[derive(Debug)]
pub struct ScoreOptions {
    /// CVSS v4.0 vector string
    pub vector: String,
    /// Industrial profile; base score only when absent
    pub profile: Option<IndustrialImpactProfile>,
    /// YAML config file (extension weights)
    pub config: Option<PathBuf>,
    pub output: ReportFormat,
}

#[derive(Serialize)]
struct ScoreOutput {
    vector: String,
    cvss: ScoreResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    industrial: Option<ScoreResult>,
}

/// Score a single vector, optionally blending in an industrial profile.
pub fn run_score(options: ScoreOptions) -> Result<i32> {
    let config = match &options.config {
        Some(path) => ScoringConfig::from_yaml_file(path)?,
        None => ScoringConfig::default(),
    };

    let vector: MetricVector = options.vector.parse()?;
    let cvss = CvssV4Calculator::new().score(&vector)?;
    let industrial = match &options.profile {
        Some(profile) => Some(IndustrialExtension::new(config.weights)?.extend(&cvss, profile)),
        None => None,
    };

    let text = match options.output {
        ReportFormat::Json => {
            let output = ScoreOutput {
                vector: vector.to_string(),
                cvss,
                industrial,
            };
            serde_json::to_string_pretty(&output)?
        }
        ReportFormat::Summary => {
            let mut text = format!(
                "CVSS base score:  {:.1} ({})\n",
                cvss.score, cvss.severity
            );
            if let Some(industrial) = &industrial {
                text.push_str(&format!(
                    "Industrial score: {:.1} ({})\n",
                    industrial.score, industrial.severity
                ));
            }
            text
        }
    };
    write_output(&text, None)?;

    Ok(0)
}

fn write_output(report: &str, path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, report).map_err(|e| crate::error::ScoringError::io(path, e))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(report.as_bytes())?;
            if !report.ends_with('\n') {
                handle.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

/// Assess the built-in sample set with defaults. Convenience entry point
/// for library users and doc examples.
pub fn assess_samples() -> Result<AssessmentOutcome> {
    assess_records(&samples::sample_records(), &ScoringConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::profile::{
        PhysicalDamagePotential, ProcessAvailabilityImpact, RecoveryComplexity, SafetyImpact,
    };

    #[test]
    fn compare_samples_to_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("report.json");
        let code = run_compare(CompareOptions {
            output: ReportFormat::Json,
            output_file: Some(out.clone()),
            ..CompareOptions::default()
        })
        .expect("compare runs");
        assert_eq!(code, 0);

        let contents = std::fs::read_to_string(&out).expect("report written");
        let value: serde_json::Value = serde_json::from_str(&contents).expect("valid JSON");
        assert_eq!(value["summary"]["record_count"], 8);
    }

    #[test]
    fn compare_lenient_exit_code_on_failures() {
        let dir = tempfile::tempdir().expect("temp dir");
        let records = dir.path().join("records.json");
        std::fs::write(
            &records,
            r#"[{
                "id": "BAD-1",
                "cvss_vector": "CVSS:4.0/AV:bogus",
                "profile": {
                    "safety": "none",
                    "process_availability": "none",
                    "physical_damage": "none",
                    "recovery": "none"
                }
            }]"#,
        )
        .expect("write records");

        let out = dir.path().join("report.json");
        let code = run_compare(CompareOptions {
            records: Some(records),
            output: ReportFormat::Json,
            output_file: Some(out),
            ..CompareOptions::default()
        })
        .expect("lenient run completes");
        assert_eq!(code, 1);
    }

    #[test]
    fn strict_compare_propagates_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let records = dir.path().join("records.json");
        std::fs::write(
            &records,
            r#"[{
                "id": "BAD-1",
                "cvss_vector": "nonsense",
                "profile": {
                    "safety": "none",
                    "process_availability": "none",
                    "physical_damage": "none",
                    "recovery": "none"
                }
            }]"#,
        )
        .expect("write records");

        let err = run_compare(CompareOptions {
            records: Some(records),
            strict: true,
            output: ReportFormat::Json,
            output_file: Some(dir.path().join("report.json")),
            ..CompareOptions::default()
        })
        .expect_err("strict run fails");
        assert_eq!(err.record_id(), Some("BAD-1"));
    }

    #[test]
    fn score_with_profile() {
        let code = run_score(ScoreOptions {
            vector: "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N"
                .to_string(),
            profile: Some(IndustrialImpactProfile::new(
                SafetyImpact::Catastrophic,
                ProcessAvailabilityImpact::Major,
                PhysicalDamagePotential::Major,
                RecoveryComplexity::Irrecoverable,
            )),
            config: None,
            output: ReportFormat::Summary,
        })
        .expect("score runs");
        assert_eq!(code, 0);
    }

    #[test]
    fn score_rejects_bad_vector() {
        let err = run_score(ScoreOptions {
            vector: "CVSS:3.1/AV:N".to_string(),
            profile: None,
            config: None,
            output: ReportFormat::Summary,
        })
        .expect_err("bad vector");
        assert!(err.to_string().contains("metric"));
    }

    #[test]
    fn assess_samples_smoke() {
        let outcome = assess_samples().expect("samples assess");
        assert_eq!(outcome.report.aggregates.record_count, 8);
        assert!(!outcome.has_failures());
    }
}
