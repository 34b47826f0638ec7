//! Ollama Provider Implementation
//!
//! Provides integration with Ollama's local LLM API through its
//! `/api/generate` endpoint.
//!
//! # Features
//!
//! - Blocking HTTP communication, one attempt per call
//! - Configurable endpoint and model
//! - Per-call timeout taken from `GenerateOptions`
//!
//! # Examples
//!
//! ```no_run
//! use sift_llm::OllamaProvider;
//! use sift_domain::{GenerateOptions, LlmProvider};
//!
//! let provider = OllamaProvider::new("http://localhost:11434", "llama2")?;
//! let text = provider.generate("Say hello", &GenerateOptions::summarization())?;
//! # Ok::<(), sift_llm::LlmError>(())
//! ```

use crate::LlmError;
use serde::{Deserialize, Serialize};
use sift_domain::{GenerateOptions, LlmProvider};
use tracing::{debug, info};

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model name
pub const DEFAULT_MODEL: &str = "llama2";

/// Ollama API provider for local LLM inference
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    client: reqwest::blocking::Client,
}

/// Request body for Ollama generate API
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: SamplingOptions,
}

#[derive(Serialize)]
struct SamplingOptions {
    temperature: f32,
    top_p: f32,
}

/// Response from Ollama generate API
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API base URL (e.g., "http://localhost:11434"); a trailing `/` is ignored
    /// - `model`: Model to use (e.g., "llama2", "mistral")
    ///
    /// The endpoint is not contacted until the first `generate` call.
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client,
        })
    }

    /// Create a new Ollama provider against `http://localhost:11434`
    pub fn default_endpoint(model: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Base URL this provider talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.endpoint)
    }
}

impl LlmProvider for OllamaProvider {
    type Error = LlmError;

    /// Generate text using the Ollama API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Ollama is not running or the request times out
    /// - Model is not available (HTTP 404)
    /// - The endpoint answers with any other non-success status
    /// - Response body is not the expected JSON
    fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String, LlmError> {
        let url = self.generate_url();
        let request_body = OllamaGenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: SamplingOptions {
                temperature: options.temperature,
                top_p: options.top_p,
            },
        };

        info!("Calling Ollama API at {} with model {}", url, self.model);

        let response = self
            .client
            .post(&url)
            .timeout(options.timeout)
            .json(&request_body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout(options.timeout)
                } else {
                    LlmError::Communication(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!("HTTP {}: {}", status, error_text)));
        }

        // The timeout also covers reading the body after the headers arrive
        let body: OllamaGenerateResponse = response.json().map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout(options.timeout)
            } else if e.is_decode() {
                LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
            } else {
                LlmError::Communication(format!("Failed to read response: {}", e))
            }
        })?;

        debug!("Ollama response length: {} chars", body.response.len());
        Ok(body.response)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_provider_creation() {
        let provider = OllamaProvider::new("http://localhost:11434", "llama2").unwrap();
        assert_eq!(provider.endpoint(), "http://localhost:11434");
        assert_eq!(provider.model_name(), "llama2");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let provider = OllamaProvider::new("http://localhost:11434/", "llama2").unwrap();
        assert_eq!(provider.generate_url(), "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_ollama_provider_default_endpoint() {
        let provider = OllamaProvider::default_endpoint("mistral").unwrap();
        assert_eq!(provider.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(provider.model_name(), "mistral");
    }

    #[test]
    fn test_request_body_shape() {
        let body = OllamaGenerateRequest {
            model: "llama2",
            prompt: "hi",
            stream: false,
            options: SamplingOptions {
                temperature: 0.5,
                top_p: 0.9,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama2");
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["temperature"], 0.5);
    }

    #[test]
    fn test_ollama_error_handling() {
        // Nothing listens on port 9 (discard) in the test environment
        let provider = OllamaProvider::new("http://127.0.0.1:9", "llama2").unwrap();

        let result = provider.generate("test", &GenerateOptions::summarization());
        match result {
            Err(LlmError::Communication(_)) | Err(LlmError::Timeout(_)) => {} // Expected
            other => panic!("Expected Communication error, got {:?}", other),
        }
    }
}
