//! End-to-end scoring tests over realistic industrial vectors.

use ivss_tools::model::{MetricVector, Severity};
use ivss_tools::scoring::{CvssV4Calculator, MacroVector};

fn score(vector: &str) -> (f64, Severity) {
    let vector: MetricVector = vector.parse().expect("valid vector");
    let result = CvssV4Calculator::new()
        .score(&vector)
        .expect("vector scores");
    (result.score, result.severity)
}

#[test]
fn plc_remote_code_execution() {
    let (score, severity) =
        score("CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N");
    assert_eq!(score, 9.3);
    assert_eq!(severity, Severity::Critical);
}

#[test]
fn hmi_authentication_bypass() {
    let (score, severity) =
        score("CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:L/SC:N/SI:N/SA:N");
    assert_eq!(score, 9.3);
    assert_eq!(severity, Severity::Critical);
}

#[test]
fn historian_information_disclosure() {
    let (score, severity) =
        score("CVSS:4.0/AV:N/AC:H/AT:N/PR:L/UI:N/VC:H/VI:N/VA:N/SC:N/SI:N/SA:N");
    assert_eq!(score, 6.0);
    assert_eq!(severity, Severity::Medium);
}

#[test]
fn rtu_denial_of_service() {
    let (score, severity) =
        score("CVSS:4.0/AV:A/AC:L/AT:N/PR:N/UI:N/VC:N/VI:N/VA:H/SC:N/SI:N/SA:L");
    assert_eq!(score, 7.1);
    assert_eq!(severity, Severity::High);
}

#[test]
fn scada_man_in_the_middle() {
    let (score, severity) =
        score("CVSS:4.0/AV:N/AC:H/AT:P/PR:N/UI:N/VC:L/VI:H/VA:L/SC:N/SI:L/SA:N");
    assert_eq!(score, 8.3);
    assert_eq!(severity, Severity::High);
}

#[test]
fn safety_system_firmware() {
    let (score, severity) =
        score("CVSS:4.0/AV:L/AC:H/AT:N/PR:H/UI:N/VC:N/VI:H/VA:H/SC:N/SI:N/SA:N");
    assert_eq!(score, 5.7);
    assert_eq!(severity, Severity::Medium);
}

#[test]
fn workstation_credential_theft() {
    let (score, severity) =
        score("CVSS:4.0/AV:L/AC:L/AT:N/PR:L/UI:P/VC:H/VI:N/VA:N/SC:H/SI:N/SA:N");
    assert_eq!(score, 6.7);
    assert_eq!(severity, Severity::Medium);
}

#[test]
fn maximum_severity_probe() {
    let (score, severity) =
        score("CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:H/SI:H/SA:H/E:A");
    assert_eq!(score, 10.0);
    assert_eq!(severity, Severity::Critical);
}

#[test]
fn midpoint_adjustment_rounds_up() {
    // macrovector 001120 (lookup 8.1); the only severity distance is one
    // EQ3/EQ6 step, giving a mean adjustment of exactly 0.05. The midpoint
    // 8.05 must round up to 8.1, not down to 8.0.
    let (score, severity) =
        score("CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:N/VA:H/SC:H/SI:H/SA:H/E:U");
    assert_eq!(score, 8.1);
    assert_eq!(severity, Severity::High);
}

#[test]
fn no_impact_anywhere_is_zero() {
    let (score, severity) =
        score("CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:N/VI:N/VA:N/SC:N/SI:N/SA:N");
    assert_eq!(score, 0.0);
    assert_eq!(severity, Severity::None);
}

#[test]
fn exploit_maturity_only_lowers() {
    for base in [
        "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N",
        "CVSS:4.0/AV:A/AC:H/AT:P/PR:L/UI:P/VC:L/VI:H/VA:N/SC:L/SI:N/SA:N",
        "CVSS:4.0/AV:L/AC:L/AT:N/PR:H/UI:A/VC:L/VI:L/VA:L/SC:N/SI:N/SA:N",
    ] {
        let (attacked, _) = score(base);
        let (poc, _) = score(&format!("{base}/E:P"));
        let (unreported, _) = score(&format!("{base}/E:U"));
        assert!(poc <= attacked, "{base}");
        assert!(unreported <= poc, "{base}");
    }
}

#[test]
fn every_sample_vector_has_a_defined_macrovector() {
    let vectors = [
        "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N",
        "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:L/SC:N/SI:N/SA:N",
        "CVSS:4.0/AV:N/AC:H/AT:N/PR:L/UI:N/VC:H/VI:N/VA:N/SC:N/SI:N/SA:N",
        "CVSS:4.0/AV:A/AC:L/AT:N/PR:N/UI:N/VC:N/VI:N/VA:H/SC:N/SI:N/SA:L",
        "CVSS:4.0/AV:N/AC:H/AT:P/PR:N/UI:N/VC:L/VI:H/VA:L/SC:N/SI:L/SA:N",
        "CVSS:4.0/AV:L/AC:H/AT:N/PR:H/UI:N/VC:N/VI:H/VA:H/SC:N/SI:N/SA:N",
        "CVSS:4.0/AV:L/AC:L/AT:N/PR:L/UI:P/VC:H/VI:N/VA:N/SC:H/SI:N/SA:N",
        "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:H/SI:H/SA:H/E:A",
    ];
    for v in vectors {
        let vector: MetricVector = v.parse().expect("valid vector");
        let mv = MacroVector::from_vector(&vector);
        assert!(mv.score().is_ok(), "{v} -> {}", mv.key());
    }
}
