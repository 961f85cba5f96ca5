//! Runtime configuration: extension weights and batch error policy, with
//! optional YAML config file loading.

use crate::error::{Result, ScoringError};
use crate::scoring::ExtensionWeights;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How a batch run treats records that fail to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Skip bad records, report them alongside the results
    #[default]
    Lenient,
    /// Any bad record fails the whole run
    Strict,
}

/// Top-level configuration for an assessment run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    pub weights: ExtensionWeights,
    pub error_policy: ErrorPolicy,
}

impl ScoringConfig {
    /// Validate the configuration; weights carry their own rules.
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()
    }

    /// Load and validate a YAML config file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ScoringError::io(path, e))?;
        let config: Self = serde_yaml::from_str(&contents)
            .map_err(|e| ScoringError::config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }
}
