//! CVSS v4.0 base score calculation.
//!
//! Scoring follows the published v4.0 procedure: derive the macrovector,
//! look up its table value, then interpolate downwards within the
//! macrovector cell by the vector's severity distance from the cell's
//! most severe member, proportionally to the drop to each next-lower
//! macrovector. Vectors with no impact anywhere score exactly 0.0.

use crate::error::Result;
use crate::model::score::{round_score, ScoreResult, TraceEntry};
use crate::model::vector::{
    AttackComplexity, AttackRequirements, AttackVector, ImpactLevel, MetricVector,
    PrivilegesRequired, UserInteraction,
};
use crate::scoring::macrovector::{lookup_score, MacroVector};

/// Stateless CVSS v4.0 base score calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CvssV4Calculator;

impl CvssV4Calculator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute the base score of a vector, with a full audit trail.
    pub fn score(&self, vector: &MetricVector) -> Result<ScoreResult> {
        if vector.has_no_impact() {
            return Ok(ScoreResult::new(
                0.0,
                vec![TraceEntry::ZeroImpact, TraceEntry::BaseScore { score: 0.0 }],
            ));
        }

        let mv = MacroVector::from_vector(vector);
        let lookup = mv.score()?;

        let mut trace = vec![
            TraceEntry::EquivalenceClasses {
                eq1: mv.eq1,
                eq2: mv.eq2,
                eq3: mv.eq3,
                eq4: mv.eq4,
                eq5: mv.eq5,
                eq6: mv.eq6,
            },
            TraceEntry::Macrovector {
                key: mv.key(),
                lookup,
            },
        ];

        let adjustment = interpolation_adjustment(vector, &mv, lookup);
        trace.push(TraceEntry::Interpolated { adjustment });

        let score = round_score((lookup - adjustment).clamp(0.0, 10.0));
        trace.push(TraceEntry::BaseScore { score });

        Ok(ScoreResult::new(score, trace))
    }
}

/// Mean proportional severity-distance adjustment over the equivalence
/// classes that have a lower macrovector to interpolate towards.
fn interpolation_adjustment(vector: &MetricVector, mv: &MacroVector, lookup: f64) -> f64 {
    let lowers = LowerMacroScores::for_macrovector(mv);
    let distances = SeverityDistances::for_vector(vector, mv);

    let mut sum = 0.0;
    let mut count = 0u32;

    let mut add = |lower: Option<f64>, steps: u32, depth: u32| {
        if let Some(lower_score) = lower {
            let available = lookup - lower_score;
            let percent = f64::from(steps) / f64::from(depth);
            sum += available * percent;
            count += 1;
        }
    };

    add(lowers.eq1, distances.eq1, eq1_depth(mv.eq1));
    add(lowers.eq2, distances.eq2, eq2_depth(mv.eq2));
    add(
        lowers.eq3eq6,
        distances.eq3eq6,
        eq3eq6_depth(mv.eq3, mv.eq6),
    );
    add(lowers.eq4, distances.eq4, eq4_depth(mv.eq4));
    // EQ5's most severe member always coincides with the vector's own E
    // value, so its severity distance is zero; it still counts towards the
    // mean when a lower macrovector exists.
    add(lowers.eq5, 0, 1);

    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

/// Table scores of the next-lower macrovector per equivalence class.
#[derive(Debug, Default)]
struct LowerMacroScores {
    eq1: Option<f64>,
    eq2: Option<f64>,
    eq3eq6: Option<f64>,
    eq4: Option<f64>,
    eq5: Option<f64>,
}

impl LowerMacroScores {
    fn for_macrovector(mv: &MacroVector) -> Self {
        let at = |eq1, eq2, eq3, eq4, eq5, eq6| {
            lookup_score(&format!("{eq1}{eq2}{eq3}{eq4}{eq5}{eq6}"))
        };
        let (e1, e2, e3, e4, e5, e6) = (mv.eq1, mv.eq2, mv.eq3, mv.eq4, mv.eq5, mv.eq6);

        // EQ3 and EQ6 step down jointly along the valid combinations
        // 00 -> max(01, 10), 01 -> 11, 10 -> 11, 11 -> 21, 21 -> none.
        let eq3eq6 = match (e3, e6) {
            (0, 0) => {
                let left = at(e1, e2, 0, e4, e5, 1);
                let right = at(e1, e2, 1, e4, e5, 0);
                match (left, right) {
                    (Some(a), Some(b)) => Some(a.max(b)),
                    (a, b) => a.or(b),
                }
            }
            (0, 1) | (1, 0) => at(e1, e2, 1, e4, e5, 1),
            (1, 1) => at(e1, e2, 2, e4, e5, 1),
            _ => None,
        };

        Self {
            eq1: (e1 < 2)
                .then(|| at(e1 + 1, e2, e3, e4, e5, e6))
                .flatten(),
            eq2: (e2 < 1)
                .then(|| at(e1, e2 + 1, e3, e4, e5, e6))
                .flatten(),
            eq3eq6,
            eq4: (e4 < 2)
                .then(|| at(e1, e2, e3, e4 + 1, e5, e6))
                .flatten(),
            eq5: (e5 < 2)
                .then(|| at(e1, e2, e3, e4, e5 + 1, e6))
                .flatten(),
        }
    }
}

/// Integer severity-step distances from the vector to the most severe
/// member of its macrovector cell, per equivalence class.
#[derive(Debug, Default)]
struct SeverityDistances {
    eq1: u32,
    eq2: u32,
    eq3eq6: u32,
    eq4: u32,
}

impl SeverityDistances {
    fn for_vector(vector: &MetricVector, mv: &MacroVector) -> Self {
        Self {
            eq1: eq1_distance(vector, mv.eq1),
            eq2: eq2_distance(vector, mv.eq2),
            eq3eq6: eq3eq6_distance(vector, mv.eq3, mv.eq6),
            eq4: eq4_distance(vector, mv.eq4),
        }
    }
}

// ---------------------------------------------------------------------------
// Metric severity steps (0 = most severe). Only differences within one
// metric matter, so each metric uses plain consecutive integers.
// ---------------------------------------------------------------------------

const fn av_step(v: AttackVector) -> i32 {
    match v {
        AttackVector::Network => 0,
        AttackVector::Adjacent => 1,
        AttackVector::Local => 2,
        AttackVector::Physical => 3,
    }
}

const fn pr_step(v: PrivilegesRequired) -> i32 {
    match v {
        PrivilegesRequired::None => 0,
        PrivilegesRequired::Low => 1,
        PrivilegesRequired::High => 2,
    }
}

const fn ui_step(v: UserInteraction) -> i32 {
    match v {
        UserInteraction::None => 0,
        UserInteraction::Passive => 1,
        UserInteraction::Active => 2,
    }
}

const fn ac_step(v: AttackComplexity) -> i32 {
    match v {
        AttackComplexity::Low => 0,
        AttackComplexity::High => 1,
    }
}

const fn at_step(v: AttackRequirements) -> i32 {
    match v {
        AttackRequirements::None => 0,
        AttackRequirements::Present => 1,
    }
}

const fn impact_step(v: ImpactLevel) -> i32 {
    match v {
        ImpactLevel::High => 0,
        ImpactLevel::Low => 1,
        ImpactLevel::None => 2,
    }
}

// Security requirement steps: High 0, Medium 1, Low 2. CR/IR/AR are pinned
// at their Not Defined default of High in this data model.
const REQUIREMENT_STEP: i32 = 0;

// ---------------------------------------------------------------------------
// Most severe cell members per equivalence-class level, in the published
// candidate order. The first candidate all of whose per-metric distances
// are non-negative is the one the vector interpolates against.
// ---------------------------------------------------------------------------

/// (AV, PR, UI) steps
fn eq1_candidates(level: u8) -> &'static [(i32, i32, i32)] {
    match level {
        0 => &[(0, 0, 0)],                     // AV:N/PR:N/UI:N
        1 => &[(1, 0, 0), (0, 1, 0), (0, 0, 1)], // AV:A|PR:L|UI:P relaxations
        _ => &[(3, 0, 0), (1, 1, 1)],          // AV:P/PR:N/UI:N, AV:A/PR:L/UI:P
    }
}

fn eq1_distance(v: &MetricVector, level: u8) -> u32 {
    let steps = (
        av_step(v.attack_vector),
        pr_step(v.privileges_required),
        ui_step(v.user_interaction),
    );
    first_fit(eq1_candidates(level), |(av, pr, ui)| {
        sum_non_negative(&[steps.0 - av, steps.1 - pr, steps.2 - ui])
    })
}

/// (AC, AT) steps
fn eq2_candidates(level: u8) -> &'static [(i32, i32)] {
    match level {
        0 => &[(0, 0)],         // AC:L/AT:N
        _ => &[(1, 0), (0, 1)], // AC:H/AT:N, AC:L/AT:P
    }
}

fn eq2_distance(v: &MetricVector, level: u8) -> u32 {
    let steps = (ac_step(v.attack_complexity), at_step(v.attack_requirements));
    first_fit(eq2_candidates(level), |(ac, at)| {
        sum_non_negative(&[steps.0 - ac, steps.1 - at])
    })
}

/// (VC, VI, VA, CR, IR, AR) steps
fn eq3eq6_candidates(eq3: u8, eq6: u8) -> &'static [(i32, i32, i32, i32, i32, i32)] {
    match (eq3, eq6) {
        (0, 0) => &[(0, 0, 0, 0, 0, 0)],
        (0, 1) => &[(0, 0, 1, 1, 1, 0), (0, 0, 0, 1, 1, 1)],
        (1, 0) => &[(1, 0, 0, 0, 0, 0), (0, 1, 0, 0, 0, 0)],
        (1, 1) => &[
            (1, 0, 1, 0, 1, 0),
            (1, 0, 0, 0, 1, 1),
            (0, 1, 0, 1, 0, 1),
            (0, 1, 1, 1, 0, 0),
            (1, 1, 0, 0, 0, 1),
        ],
        _ => &[(1, 1, 1, 0, 0, 0)],
    }
}

fn eq3eq6_distance(v: &MetricVector, eq3: u8, eq6: u8) -> u32 {
    let i = &v.vulnerable_impact;
    let steps = (
        impact_step(i.confidentiality),
        impact_step(i.integrity),
        impact_step(i.availability),
    );
    first_fit(eq3eq6_candidates(eq3, eq6), |(vc, vi, va, cr, ir, ar)| {
        sum_non_negative(&[
            steps.0 - vc,
            steps.1 - vi,
            steps.2 - va,
            REQUIREMENT_STEP - cr,
            REQUIREMENT_STEP - ir,
            REQUIREMENT_STEP - ar,
        ])
    })
}

/// (SC, SI, SA) steps. Level 0 requires environmental metrics outside this
/// model and is never derived; its candidate is kept at the High triple so
/// the function stays total.
fn eq4_candidates(level: u8) -> &'static [(i32, i32, i32)] {
    match level {
        0 | 1 => &[(0, 0, 0)], // SC:H/SI:H/SA:H
        _ => &[(1, 1, 1)],     // SC:L/SI:L/SA:L
    }
}

fn eq4_distance(v: &MetricVector, level: u8) -> u32 {
    let i = &v.subsequent_impact;
    let steps = (
        impact_step(i.confidentiality),
        impact_step(i.integrity),
        impact_step(i.availability),
    );
    first_fit(eq4_candidates(level), |(sc, si, sa)| {
        sum_non_negative(&[steps.0 - sc, steps.1 - si, steps.2 - sa])
    })
}

/// Sum of distances if every component is non-negative, else None.
fn sum_non_negative(diffs: &[i32]) -> Option<u32> {
    let mut total = 0u32;
    for &d in diffs {
        if d < 0 {
            return None;
        }
        total += d as u32;
    }
    Some(total)
}

/// First candidate the vector sits at or below, by the published order.
/// Candidate lists cover every vector in their cell, so a match exists.
fn first_fit<C: Copy>(candidates: &[C], distance: impl Fn(C) -> Option<u32>) -> u32 {
    candidates
        .iter()
        .find_map(|&c| distance(c))
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Interpolation depth of each macrovector cell (severity steps spanned by
// the cell along its equivalence class).
// ---------------------------------------------------------------------------

const fn eq1_depth(level: u8) -> u32 {
    match level {
        0 => 1,
        1 => 4,
        _ => 5,
    }
}

const fn eq2_depth(level: u8) -> u32 {
    match level {
        0 => 1,
        _ => 2,
    }
}

const fn eq3eq6_depth(eq3: u8, eq6: u8) -> u32 {
    match (eq3, eq6) {
        (0, 0) => 7,
        (0, 1) => 6,
        (1, 0) | (1, 1) => 8,
        _ => 10,
    }
}

const fn eq4_depth(level: u8) -> u32 {
    match level {
        0 => 6,
        1 => 5,
        _ => 4,
    }
}
