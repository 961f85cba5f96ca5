//! Scoring engines: CVSS v4.0 base scores and the industrial extension.

pub mod cvss;
pub mod industrial;
pub mod macrovector;

pub use cvss::CvssV4Calculator;
pub use industrial::{ExtensionWeights, IndustrialExtension};
pub use macrovector::MacroVector;
