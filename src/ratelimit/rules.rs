//! Rule configuration loading and construction.
//!
//! Rules are described in YAML and built into trait objects, so an embedding
//! process can select its policy from configuration without naming concrete
//! types.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::error::{PacerError, Result};

use super::limiter::MinIntervalRule;
use super::rule::RateLimitRule;

/// Top-level limiter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimiterConfig {
    /// The rule this limiter enforces.
    pub rule: RuleSpec,
}

/// Description of a single rate limiting rule.
///
/// Additional strategies extend this enum; each variant knows how to build
/// its concrete rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleSpec {
    /// Minimum elapsed time between observed calls per client.
    MinInterval {
        /// Minimum spacing in milliseconds.
        min_interval_ms: u64,
    },
}

impl RuleSpec {
    /// Build the configured rule.
    pub fn build(&self) -> Box<dyn RateLimitRule> {
        match self {
            RuleSpec::MinInterval { min_interval_ms } => Box::new(MinIntervalRule::new(
                Duration::from_millis(*min_interval_ms),
            )),
        }
    }
}

impl LimiterConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading limiter configuration");

        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| PacerError::Config(format!("Failed to parse limiter config: {}", e)))
    }

    /// Build the configured rule.
    pub fn build(&self) -> Box<dyn RateLimitRule> {
        self.rule.build()
    }
}
