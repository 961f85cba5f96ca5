//! End-to-end pipeline tests: load, score, compare, report.

use ivss_tools::compare::{Correlation, SeverityShift};
use ivss_tools::config::{ErrorPolicy, ScoringConfig};
use ivss_tools::model::round_score;
use ivss_tools::pipeline::{assess_inputs, assess_records, load_inputs};
use ivss_tools::reports::{JsonReporter, ReportRenderer, SummaryReporter};
use ivss_tools::samples::sample_records;
use std::io::Write;

#[test]
fn sample_set_end_to_end() {
    let outcome =
        assess_records(&sample_records(), &ScoringConfig::default()).expect("samples assess");
    let aggregates = &outcome.report.aggregates;

    assert_eq!(aggregates.record_count, 8);
    assert!(outcome.failures.is_empty());
    assert_eq!(aggregates.de_escalated, 0);
    assert_eq!(
        aggregates.escalated + aggregates.unchanged,
        aggregates.record_count
    );

    // the industrial profiles in the sample set push scores up on average
    let mean_delta = aggregates.mean_delta.expect("non-empty batch");
    assert!(mean_delta > 0.0);

    match aggregates.correlation {
        Correlation::Defined { value } => assert!((-1.0..=1.0).contains(&value)),
        Correlation::Undefined { .. } => panic!("eight varied records correlate"),
    }
}

#[test]
fn stored_pairs_reproduce_their_classification() {
    // every stored pair must re-derive to its own delta and shift
    let outcome =
        assess_records(&sample_records(), &ScoringConfig::default()).expect("samples assess");
    assert!(outcome.report.records.iter().any(|r| r.shift == SeverityShift::Escalated));
    assert!(outcome.report.records.iter().any(|r| r.shift == SeverityShift::Unchanged));

    for record in &outcome.report.records {
        let delta = round_score(record.industrial.score - record.cvss.score);
        assert_eq!(delta, record.delta, "{}", record.id);
        assert_eq!(SeverityShift::from_delta(delta), record.shift, "{}", record.id);
        assert_eq!(
            record.cvss.severity != record.industrial.severity,
            record.category_changed,
            "{}",
            record.id
        );
    }
}

#[test]
fn reports_render_for_the_sample_set() {
    let outcome =
        assess_records(&sample_records(), &ScoringConfig::default()).expect("samples assess");

    let json = JsonReporter::new().render(&outcome).expect("json renders");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["summary"]["record_count"], 8);
    assert_eq!(value["records"].as_array().map(Vec::len), Some(8));
    assert_eq!(value["metadata"]["tool"]["name"], "ivss-tools");

    let text = SummaryReporter::new().render(&outcome).expect("summary renders");
    for record in &outcome.report.records {
        assert!(text.contains(&record.id), "summary lists {}", record.id);
    }
}

#[test]
fn mixed_file_lenient_and_strict() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[
            {{
                "id": "GOOD-1",
                "cvss_vector": "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N",
                "profile": {{
                    "safety": "major",
                    "process_availability": "total",
                    "physical_damage": "major",
                    "recovery": "extensive"
                }}
            }},
            {{
                "id": "BAD-1",
                "cvss_vector": "CVSS:4.0/AV:N/AC:L",
                "profile": {{
                    "safety": "none",
                    "process_availability": "none",
                    "physical_damage": "none",
                    "recovery": "none"
                }}
            }}
        ]"#
    )
    .expect("write records");

    let inputs = load_inputs(file.path()).expect("file loads");
    assert_eq!(inputs.len(), 2);

    let lenient = assess_inputs(inputs.clone(), &ScoringConfig::default())
        .expect("lenient run completes");
    assert_eq!(lenient.report.aggregates.record_count, 1);
    assert_eq!(lenient.failures.len(), 1);
    assert_eq!(lenient.failures[0].id, "BAD-1");

    let strict_config = ScoringConfig {
        error_policy: ErrorPolicy::Strict,
        ..ScoringConfig::default()
    };
    let err = assess_inputs(inputs, &strict_config).expect_err("strict run fails");
    assert_eq!(err.record_id(), Some("BAD-1"));
}

#[test]
fn failures_appear_in_both_report_formats() {
    let bad = vec![ivss_tools::pipeline::RecordInput {
        id: "BROKEN".to_string(),
        description: None,
        cvss_vector: "not a vector".to_string(),
        profile: ivss_tools::model::IndustrialImpactProfile::benign(),
    }];
    let outcome = assess_inputs(bad, &ScoringConfig::default()).expect("lenient");
    assert!(outcome.has_failures());

    let json = JsonReporter::new().render(&outcome).expect("json renders");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["failures"][0]["id"], "BROKEN");

    let text = SummaryReporter::new().render(&outcome).expect("summary renders");
    assert!(text.contains("BROKEN"));
}

#[test]
fn custom_weights_change_the_blend() {
    let heavier_safety = ScoringConfig {
        weights: ivss_tools::scoring::ExtensionWeights {
            safety: 1.0,
            process_availability: 0.1,
            physical_damage: 0.1,
            recovery: 0.1,
        },
        ..ScoringConfig::default()
    };
    heavier_safety.validate().expect("weights valid");

    let default_outcome =
        assess_records(&sample_records(), &ScoringConfig::default()).expect("default");
    let heavy_outcome = assess_records(&sample_records(), &heavier_safety).expect("custom");

    // ICS-006 has a catastrophic safety factor; the heavier safety weight
    // must not score it lower than the defaults do
    let find = |outcome: &ivss_tools::AssessmentOutcome| {
        outcome
            .report
            .records
            .iter()
            .find(|r| r.id == "ICS-006")
            .expect("present")
            .industrial
            .score
    };
    assert!(find(&heavy_outcome) >= find(&default_outcome));
}
