//! Trait definitions for external interactions
//!
//! These traits define the boundary between the pipeline and the language-model
//! endpoint. Implementations live in `sift-llm`.

use std::time::Duration;

/// Sampling and wait settings for one generate call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// Sampling temperature
    pub temperature: f32,

    /// Nucleus sampling cutoff
    pub top_p: f32,

    /// Upper bound on the wait for a response
    pub timeout: Duration,
}

impl GenerateOptions {
    /// Settings for summarization: focused sampling, 60 second ceiling
    pub fn summarization() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.9,
            timeout: Duration::from_secs(60),
        }
    }

    /// Settings for structured extraction: near-deterministic, 90 second ceiling
    pub fn extraction() -> Self {
        Self {
            temperature: 0.1,
            top_p: 0.9,
            timeout: Duration::from_secs(90),
        }
    }
}

/// Classification of a provider failure
pub trait ProviderError: std::error::Error {
    /// True for transport, status and timeout failures talking to the endpoint
    fn is_api_error(&self) -> bool;
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (sift-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error: ProviderError;

    /// Generate a completion for `prompt` with one blocking call
    fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String, Self::Error>;

    /// Identifier of the model behind this provider
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_presets() {
        let summary = GenerateOptions::summarization();
        assert_eq!(summary.timeout, Duration::from_secs(60));
        assert_eq!(summary.temperature, 0.3);

        let extraction = GenerateOptions::extraction();
        assert_eq!(extraction.timeout, Duration::from_secs(90));
        assert_eq!(extraction.top_p, 0.9);
    }
}
