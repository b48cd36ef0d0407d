//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files: bind address, deployment profile, optional
//! upload/deadline overrides and Gemini endpoint settings. The API key is never
//! read from the file; it comes from `GEMINI_API_KEY`.

use serde::Deserialize;
use sheetsmith_extractor::{ExtractorConfig, Profile};
use sheetsmith_llm::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use std::path::Path;
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Invalid value
    #[error("Invalid configuration value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 3000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Deployment profile (default: constrained)
    #[serde(default)]
    pub profile: Profile,

    /// Override the profile's upload ceiling (bytes)
    #[serde(default)]
    pub max_upload_bytes: Option<usize>,

    /// Override the profile's AI deadline (seconds)
    #[serde(default)]
    pub ai_timeout_secs: Option<u64>,

    /// Gemini settings
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// Gemini provider settings
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    3000
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            profile: Profile::default(),
            max_upload_bytes: None,
            ai_timeout_secs: None,
            gemini: GeminiConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `SHEETSMITH_*` overrides from a variable lookup.
    ///
    /// Recognized: `SHEETSMITH_BIND_ADDRESS`, `SHEETSMITH_BIND_PORT`,
    /// `SHEETSMITH_PROFILE`, `SHEETSMITH_MODEL`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(address) = lookup("SHEETSMITH_BIND_ADDRESS") {
            self.bind_address = address;
        }
        if let Some(port) = lookup("SHEETSMITH_BIND_PORT") {
            self.bind_port = port.parse().map_err(|_| {
                ConfigError::InvalidValue("SHEETSMITH_BIND_PORT".to_string(), port.clone())
            })?;
        }
        if let Some(profile) = lookup("SHEETSMITH_PROFILE") {
            self.profile = match profile.to_ascii_lowercase().as_str() {
                "constrained" => Profile::Constrained,
                "development" => Profile::Development,
                _ => {
                    return Err(ConfigError::InvalidValue(
                        "SHEETSMITH_PROFILE".to_string(),
                        profile,
                    ))
                }
            };
        }
        if let Some(model) = lookup("SHEETSMITH_MODEL") {
            self.gemini.model = model;
        }
        self.validate()
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Extractor configuration for the selected profile and overrides
    pub fn extractor_config(&self) -> ExtractorConfig {
        let mut config = ExtractorConfig::for_profile(self.profile);
        if let Some(max) = self.max_upload_bytes {
            config.max_document_bytes = max;
        }
        if let Some(secs) = self.ai_timeout_secs {
            config.ai_timeout_secs = Some(secs);
        }
        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.extractor_config()
            .validate()
            .map_err(|e| ConfigError::InvalidValue("limits".to_string(), e))?;
        if self.gemini.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "gemini.model".to_string(),
                "must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
