//! Configuration for the Extractor

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Deployment profile selecting the size ceiling and AI deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Hosts with hard payload and execution-time limits: 4 MiB, 9 second deadline
    #[default]
    Constrained,
    /// Local development: 10 MiB, no deadline
    Development,
}

/// Configuration for the Extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum document size (bytes)
    pub max_document_bytes: usize,

    /// Deadline for the AI call (seconds); `None` waits indefinitely
    #[serde(default)]
    pub ai_timeout_secs: Option<u64>,
}

/// 4 MiB
const CONSTRAINED_MAX_BYTES: usize = 4 * 1024 * 1024;
/// 10 MiB
const DEVELOPMENT_MAX_BYTES: usize = 10 * 1024 * 1024;
const CONSTRAINED_TIMEOUT_SECS: u64 = 9;

impl ExtractorConfig {
    /// Configuration for a deployment profile
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Constrained => Self::constrained(),
            Profile::Development => Self::development(),
        }
    }

    /// Constrained preset: small uploads, short deadline
    pub fn constrained() -> Self {
        Self {
            max_document_bytes: CONSTRAINED_MAX_BYTES,
            ai_timeout_secs: Some(CONSTRAINED_TIMEOUT_SECS),
        }
    }

    /// Development preset: larger uploads, no deadline
    pub fn development() -> Self {
        Self {
            max_document_bytes: DEVELOPMENT_MAX_BYTES,
            ai_timeout_secs: None,
        }
    }

    /// Set the AI deadline, rounded up to whole seconds
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.ai_timeout_secs = timeout.map(|d| (d.as_secs_f64().ceil() as u64).max(1));
        self
    }

    /// Get the AI deadline as a Duration
    pub fn ai_timeout(&self) -> Option<Duration> {
        self.ai_timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_document_bytes == 0 {
            return Err("max_document_bytes must be greater than 0".to_string());
        }
        if self.ai_timeout_secs == Some(0) {
            return Err("ai_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
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

impl Default for ExtractorConfig {
    /// Constrained profile
    fn default() -> Self {
        Self::constrained()
    }
}
