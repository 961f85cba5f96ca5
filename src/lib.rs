//! **CVSS v4.0 and industrial vulnerability score comparison.**
//!
//! `ivss-tools` scores vulnerabilities under two models and compares the
//! outcomes:
//!
//! - **CVSS v4.0 base scores**, computed with the published macrovector
//!   table and severity-distance interpolation ([`scoring::CvssV4Calculator`]).
//! - **Industrial scores**, which blend an industrial impact profile
//!   (safety, process availability, physical damage, recovery) into the
//!   base score ([`scoring::IndustrialExtension`]). The extension is
//!   monotonic: it raises a score towards 10.0 or leaves it unchanged.
//!
//! The [`compare`] module classifies each record's shift between the two
//! models and aggregates batch statistics; [`pipeline`] loads record files
//! and scores them in parallel; [`reports`] renders JSON and terminal
//! summaries.
//!
//! ## Scoring a single vector
//!
//! ```
//! use ivss_tools::model::MetricVector;
//! use ivss_tools::scoring::CvssV4Calculator;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let vector: MetricVector =
//!         "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N".parse()?;
//!     let result = CvssV4Calculator::new().score(&vector)?;
//!     assert_eq!(result.score, 9.3);
//!     Ok(())
//! }
//! ```
//!
//! ## Comparing a batch
//!
//! ```
//! use ivss_tools::config::ScoringConfig;
//! use ivss_tools::pipeline::assess_records;
//! use ivss_tools::samples::sample_records;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let outcome = assess_records(&sample_records(), &ScoringConfig::default())?;
//!     for record in &outcome.report.records {
//!         println!("{}: {} -> {}", record.id, record.cvss.score, record.industrial.score);
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // usize↔f64 casts in the statistics are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // # Errors sections are aspirational for the smaller helper fns
    clippy::missing_errors_doc
)]

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod samples;
pub mod scoring;

// Re-export main types for convenience
pub use compare::{Comparator, ComparisonReport, Correlation, RecordComparison, SeverityShift};
pub use config::{ErrorPolicy, ScoringConfig};
pub use error::{Result, ScoringError};
pub use model::{
    IndustrialImpactProfile, MetricVector, ScoreResult, Severity, TraceEntry, VulnRecord,
};
pub use pipeline::{assess_inputs, assess_records, load_inputs, AssessmentOutcome};
pub use reports::{JsonReporter, ReportFormat, ReportRenderer, SummaryReporter};
pub use scoring::{CvssV4Calculator, ExtensionWeights, IndustrialExtension, MacroVector};
