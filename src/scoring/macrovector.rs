//! Equivalence-class derivation and the CVSS v4.0 macrovector lookup table.
//!
//! CVSS v4.0 partitions the metric space into equivalence classes EQ1..EQ6;
//! the tuple of class levels (the "macrovector") indexes a published table
//! of expert-assigned scores. Security requirements (CR/IR/AR) are not part
//! of this data model and take their Not Defined default of High, which is
//! folded into the EQ6 derivation below.

use crate::error::{MetricErrorKind, Result, ScoringError};
use crate::model::vector::{
    AttackComplexity, AttackRequirements, AttackVector, ExploitMaturity, ImpactLevel,
    MetricVector, PrivilegesRequired, UserInteraction,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The equivalence-class levels of one metric vector.
///
/// Digit order in the table key is EQ1 EQ2 EQ3 EQ4 EQ5 EQ6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacroVector {
    pub eq1: u8,
    pub eq2: u8,
    pub eq3: u8,
    pub eq4: u8,
    pub eq5: u8,
    pub eq6: u8,
}

impl MacroVector {
    /// Derive the macrovector of a metric vector.
    #[must_use]
    pub fn from_vector(vector: &MetricVector) -> Self {
        Self {
            eq1: eq1_level(vector),
            eq2: eq2_level(vector),
            eq3: eq3_level(vector),
            eq4: eq4_level(vector),
            eq5: eq5_level(vector),
            eq6: eq6_level(vector),
        }
    }

    /// Six-digit lookup key
    #[must_use]
    pub fn key(&self) -> String {
        format!(
            "{}{}{}{}{}{}",
            self.eq1, self.eq2, self.eq3, self.eq4, self.eq5, self.eq6
        )
    }

    /// Table score for this macrovector.
    ///
    /// Level combinations the derivation can never produce (e.g. EQ3=2 with
    /// EQ6=0) have no table entry; asking for one is an error, not a
    /// fallback value.
    pub fn score(&self) -> Result<f64> {
        let key = self.key();
        lookup_score(&key).ok_or_else(|| {
            ScoringError::metric(
                "macrovector lookup",
                MetricErrorKind::UnknownMacrovector { key },
            )
        })
    }
}

impl fmt::Display for MacroVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// EQ1: exploitability via reachability. Level 0 is the fully open case
/// (AV:N, PR:N, UI:N); level 1 relaxes exactly one of the three but rules
/// out physical access; level 2 is everything else.
#[must_use]
pub fn eq1_level(v: &MetricVector) -> u8 {
    let av_n = v.attack_vector == AttackVector::Network;
    let pr_n = v.privileges_required == PrivilegesRequired::None;
    let ui_n = v.user_interaction == UserInteraction::None;

    if av_n && pr_n && ui_n {
        0
    } else if (av_n || pr_n || ui_n) && v.attack_vector != AttackVector::Physical {
        1
    } else {
        2
    }
}

/// EQ2: attack complexity. Level 0 iff AC:L and AT:N.
#[must_use]
pub fn eq2_level(v: &MetricVector) -> u8 {
    if v.attack_complexity == AttackComplexity::Low
        && v.attack_requirements == AttackRequirements::None
    {
        0
    } else {
        1
    }
}

/// EQ3: vulnerable-system impact. Level 0 iff VC:H and VI:H; level 1 iff
/// any of VC/VI/VA is High; level 2 otherwise.
#[must_use]
pub fn eq3_level(v: &MetricVector) -> u8 {
    let i = &v.vulnerable_impact;
    if i.confidentiality == ImpactLevel::High && i.integrity == ImpactLevel::High {
        0
    } else if i.any_high() {
        1
    } else {
        2
    }
}

/// EQ4: subsequent-system impact. Level 0 requires the environmental
/// MSI:S/MSA:S metrics, which are outside this data model, so the derived
/// level is 1 iff any of SC/SI/SA is High and 2 otherwise.
#[must_use]
pub fn eq4_level(v: &MetricVector) -> u8 {
    if v.subsequent_impact.any_high() {
        1
    } else {
        2
    }
}

/// EQ5: exploit maturity. Not Defined scores as Attacked.
#[must_use]
pub fn eq5_level(v: &MetricVector) -> u8 {
    match v.exploit_maturity {
        ExploitMaturity::NotDefined | ExploitMaturity::Attacked => 0,
        ExploitMaturity::Poc => 1,
        ExploitMaturity::Unreported => 2,
    }
}

/// EQ6: security requirements crossed with impact. With CR/IR/AR pinned at
/// their High default, level 0 iff any of VC/VI/VA is High, else level 1.
#[must_use]
pub fn eq6_level(v: &MetricVector) -> u8 {
    if v.vulnerable_impact.any_high() {
        0
    } else {
        1
    }
}

/// Score for a six-digit macrovector key, if the table defines it.
#[must_use]
pub fn lookup_score(key: &str) -> Option<f64> {
    MACROVECTOR_SCORES
        .binary_search_by(|(k, _)| (*k).cmp(key))
        .ok()
        .map(|idx| MACROVECTOR_SCORES[idx].1)
}

/// The published CVSS v4.0 macrovector score table, all 270 defined keys in
/// ascending key order. Keys absent here (e.g. any `..20.` joint) are not
/// producible by the derivation.
pub const MACROVECTOR_SCORES: &[(&str, f64)] = &[
    ("000000", 10.0), ("000001", 9.9), ("000010", 9.8), ("000011", 9.5), ("000020", 9.5), ("000021", 9.2),
    ("000100", 10.0), ("000101", 9.6), ("000110", 9.3), ("000111", 8.7), ("000120", 9.1), ("000121", 8.1),
    ("000200", 9.3), ("000201", 9.0), ("000210", 8.9), ("000211", 8.0), ("000220", 8.1), ("000221", 6.8),
    ("001000", 9.8), ("001001", 9.5), ("001010", 9.5), ("001011", 9.2), ("001020", 9.0), ("001021", 8.4),
    ("001100", 9.3), ("001101", 9.2), ("001110", 8.9), ("001111", 8.1), ("001120", 8.1), ("001121", 6.5),
    ("001200", 8.8), ("001201", 8.0), ("001210", 7.8), ("001211", 7.0), ("001220", 6.9), ("001221", 4.8),
    ("002001", 9.2), ("002011", 8.2), ("002021", 7.2), ("002101", 7.9), ("002111", 6.9), ("002121", 5.0),
    ("002201", 6.9), ("002211", 5.5), ("002221", 2.7),
    ("010000", 9.9), ("010001", 9.7), ("010010", 9.5), ("010011", 9.2), ("010020", 9.2), ("010021", 8.5),
    ("010100", 9.5), ("010101", 9.1), ("010110", 9.0), ("010111", 8.3), ("010120", 8.4), ("010121", 7.1),
    ("010200", 9.2), ("010201", 8.1), ("010210", 8.2), ("010211", 7.1), ("010220", 7.2), ("010221", 5.3),
    ("011000", 9.5), ("011001", 9.3), ("011010", 9.2), ("011011", 8.5), ("011020", 8.5), ("011021", 7.3),
    ("011100", 9.2), ("011101", 8.2), ("011110", 8.0), ("011111", 7.2), ("011120", 7.0), ("011121", 5.9),
    ("011200", 8.4), ("011201", 7.0), ("011210", 7.1), ("011211", 5.2), ("011220", 5.0), ("011221", 3.0),
    ("012001", 8.6), ("012011", 7.5), ("012021", 5.2), ("012101", 7.1), ("012111", 5.2), ("012121", 2.9),
    ("012201", 6.3), ("012211", 2.9), ("012221", 1.7),
    ("100000", 9.8), ("100001", 9.5), ("100010", 9.4), ("100011", 8.7), ("100020", 9.1), ("100021", 8.1),
    ("100100", 9.4), ("100101", 8.9), ("100110", 8.6), ("100111", 7.4), ("100120", 7.7), ("100121", 6.4),
    ("100200", 8.7), ("100201", 7.5), ("100210", 7.4), ("100211", 6.3), ("100220", 6.3), ("100221", 4.9),
    ("101000", 9.4), ("101001", 8.9), ("101010", 8.8), ("101011", 7.7), ("101020", 7.6), ("101021", 6.7),
    ("101100", 8.6), ("101101", 7.6), ("101110", 7.4), ("101111", 5.8), ("101120", 5.9), ("101121", 5.0),
    ("101200", 7.2), ("101201", 5.7), ("101210", 5.7), ("101211", 5.2), ("101220", 5.2), ("101221", 2.5),
    ("102001", 8.3), ("102011", 7.0), ("102021", 5.4), ("102101", 6.5), ("102111", 5.8), ("102121", 2.6),
    ("102201", 5.3), ("102211", 2.1), ("102221", 1.3),
    ("110000", 9.5), ("110001", 9.0), ("110010", 8.8), ("110011", 7.6), ("110020", 7.6), ("110021", 7.0),
    ("110100", 9.0), ("110101", 7.7), ("110110", 7.5), ("110111", 6.2), ("110120", 6.1), ("110121", 5.3),
    ("110200", 7.7), ("110201", 6.6), ("110210", 6.8), ("110211", 5.9), ("110220", 5.2), ("110221", 3.0),
    ("111000", 8.9), ("111001", 7.8), ("111010", 7.6), ("111011", 6.7), ("111020", 6.2), ("111021", 5.8),
    ("111100", 7.4), ("111101", 5.9), ("111110", 5.7), ("111111", 5.7), ("111120", 4.7), ("111121", 2.3),
    ("111200", 6.1), ("111201", 5.2), ("111210", 5.7), ("111211", 2.9), ("111220", 2.4), ("111221", 1.6),
    ("112001", 7.1), ("112011", 5.9), ("112021", 3.0), ("112101", 5.8), ("112111", 2.6), ("112121", 1.5),
    ("112201", 2.3), ("112211", 1.3), ("112221", 0.6),
    ("200000", 9.3), ("200001", 8.7), ("200010", 8.6), ("200011", 7.2), ("200020", 7.5), ("200021", 5.8),
    ("200100", 8.6), ("200101", 7.4), ("200110", 7.4), ("200111", 6.1), ("200120", 5.6), ("200121", 3.4),
    ("200200", 7.0), ("200201", 5.4), ("200210", 5.2), ("200211", 4.0), ("200220", 4.0), ("200221", 2.2),
    ("201000", 8.5), ("201001", 7.5), ("201010", 7.4), ("201011", 5.5), ("201020", 6.2), ("201021", 5.1),
    ("201100", 7.2), ("201101", 5.7), ("201110", 5.5), ("201111", 4.1), ("201120", 4.6), ("201121", 1.9),
    ("201200", 5.3), ("201201", 3.6), ("201210", 3.4), ("201211", 1.9), ("201220", 1.9), ("201221", 0.8),
    ("202001", 6.4), ("202011", 5.1), ("202021", 2.0), ("202101", 4.7), ("202111", 2.1), ("202121", 1.1),
    ("202201", 2.4), ("202211", 0.9), ("202221", 0.4),
    ("210000", 8.8), ("210001", 7.5), ("210010", 7.3), ("210011", 5.3), ("210020", 6.0), ("210021", 5.0),
    ("210100", 7.3), ("210101", 5.5), ("210110", 5.9), ("210111", 4.0), ("210120", 4.1), ("210121", 2.0),
    ("210200", 5.4), ("210201", 4.3), ("210210", 4.5), ("210211", 2.2), ("210220", 2.0), ("210221", 1.1),
    ("211000", 7.5), ("211001", 5.5), ("211010", 5.8), ("211011", 4.5), ("211020", 4.0), ("211021", 2.1),
    ("211100", 6.1), ("211101", 5.1), ("211110", 4.8), ("211111", 1.8), ("211120", 2.0), ("211121", 0.9),
    ("211200", 4.6), ("211201", 1.8), ("211210", 1.7), ("211211", 0.7), ("211220", 0.8), ("211221", 0.2),
    ("212001", 5.3), ("212011", 2.4), ("212021", 1.4), ("212101", 2.4), ("212111", 1.2), ("212121", 0.5),
    ("212201", 1.0), ("212211", 0.3), ("212221", 0.1),
];
