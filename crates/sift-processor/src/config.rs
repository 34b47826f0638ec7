//! Configuration for the review processor

use crate::error::{ProcessorError, Result};
use serde::{Deserialize, Serialize};
use sift_domain::GenerateOptions;
use sift_llm::ollama::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use std::path::Path;
use std::time::Duration;

/// Configuration for the summarization and extraction pipeline
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Base URL of the Ollama endpoint
    pub endpoint: String,

    /// Model identifier used for both summarization and extraction
    pub model: String,

    /// Maximum lines kept from a summary
    pub summary_max_lines: usize,

    /// Wait ceiling for one summarization call (seconds)
    pub summarize_timeout_secs: u64,

    /// Wait ceiling for one extraction call (seconds)
    pub extraction_timeout_secs: u64,

    /// Sampling temperature for summaries
    pub summary_temperature: f32,

    /// Sampling temperature for structured extraction
    pub extraction_temperature: f32,

    /// Nucleus sampling cutoff for both calls
    pub top_p: f32,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            summary_max_lines: 2,
            summarize_timeout_secs: 60,
            extraction_timeout_secs: 90,
            summary_temperature: 0.3,
            extraction_temperature: 0.1,
            top_p: 0.9,
        }
    }
}

impl ProcessorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.summary_max_lines == 0 {
            return Err("summary_max_lines must be greater than 0".to_string());
        }
        if self.summarize_timeout_secs == 0 {
            return Err("summarize_timeout_secs must be greater than 0".to_string());
        }
        if self.extraction_timeout_secs == 0 {
            return Err("extraction_timeout_secs must be greater than 0".to_string());
        }
        for (name, value) in [
            ("summary_temperature", self.summary_temperature),
            ("extraction_temperature", self.extraction_temperature),
        ] {
            if !(0.0..=2.0).contains(&value) {
                return Err(format!("{} {} out of range [0.0, 2.0]", name, value));
            }
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(format!("top_p {} out of range [0.0, 1.0]", self.top_p));
        }
        Ok(())
    }

    /// Sampling and timeout settings for summarization calls
    pub fn summarization_options(&self) -> GenerateOptions {
        GenerateOptions {
            temperature: self.summary_temperature,
            top_p: self.top_p,
            timeout: Duration::from_secs(self.summarize_timeout_secs),
        }
    }

    /// Sampling and timeout settings for extraction calls
    pub fn extraction_options(&self) -> GenerateOptions {
        GenerateOptions {
            temperature: self.extraction_temperature,
            top_p: self.top_p,
            timeout: Duration::from_secs(self.extraction_timeout_secs),
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ProcessorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate().map_err(ProcessorError::Config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ProcessorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ProcessorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoint, "http://localhost:11434");
        assert_eq!(config.model, "llama2");
        assert_eq!(config.summary_max_lines, 2);
    }

    #[test]
    fn test_options_follow_config() {
        let config = ProcessorConfig::default();
        assert_eq!(config.summarization_options(), GenerateOptions::summarization());
        assert_eq!(config.extraction_options(), GenerateOptions::extraction());
    }

    #[test]
    fn test_invalid_values() {
        let mut config = ProcessorConfig::default();
        config.summary_max_lines = 0;
        assert!(config.validate().is_err());

        let mut config = ProcessorConfig::default();
        config.model = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = ProcessorConfig::default();
        config.top_p = 1.5;
        assert!(config.validate().is_err());

        let mut config = ProcessorConfig::default();
        config.extraction_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ProcessorConfig::from_toml("model = \"mistral\"\nsummary_max_lines = 3\n").unwrap();
        assert_eq!(config.model, "mistral");
        assert_eq!(config.summary_max_lines, 3);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.extraction_timeout_secs, 90);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(matches!(
            ProcessorConfig::from_toml("summary_max_lines = 0"),
            Err(ProcessorError::Config(_))
        ));
        assert!(matches!(
            ProcessorConfig::from_toml("model = ["),
            Err(ProcessorError::Config(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ProcessorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = ProcessorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
