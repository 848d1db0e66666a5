//! Configuration for the alignment engine

use serde::{Deserialize, Serialize};

/// Tolerances and limits for field comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum relative error for vote counts to still count as a match
    pub vote_count_tolerance: f64,

    /// Maximum absolute difference (percentage points) for percentages
    pub percentage_tolerance: f64,

    /// Advisory claim length (characters). The caller is expected to
    /// bound input; over-length text is processed as ordinary text and
    /// only logged.
    pub advisory_max_claim_length: usize,
}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..1.0).contains(&self.vote_count_tolerance) {
            return Err("vote_count_tolerance must be in [0, 1)".to_string());
        }
        if !(0.0..100.0).contains(&self.percentage_tolerance) {
            return Err("percentage_tolerance must be in [0, 100)".to_string());
        }
        if self.advisory_max_claim_length == 0 {
            return Err("advisory_max_claim_length must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Strict preset: no numeric slack at all
    pub fn strict() -> Self {
        Self {
            vote_count_tolerance: 0.0,
            percentage_tolerance: 0.0,
            advisory_max_claim_length: 1000,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for EngineConfig {
    /// Defaults: 1% relative slack on vote counts (rounding and typos in
    /// large numbers), 0.5 points on percentages (rounding).
    fn default() -> Self {
        Self {
            vote_count_tolerance: 0.01,
            percentage_tolerance: 0.5,
            advisory_max_claim_length: 1000,
        }
    }
}
