//! Sift LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `sift-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic, scriptable mock for testing
//! - `OllamaProvider`: Local Ollama API integration
//!
//! # Examples
//!
//! ```
//! use sift_llm::MockProvider;
//! use sift_domain::{GenerateOptions, LlmProvider};
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.generate("test prompt", &GenerateOptions::summarization()).unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod ollama;

use sift_domain::{GenerateOptions, LlmProvider, ProviderError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;

pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// Network or API communication error, including non-success statuses
    #[error("Communication error: {0}")]
    Communication(String),

    /// No response within the call's timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Model not available on the endpoint
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl ProviderError for LlmError {
    fn is_api_error(&self) -> bool {
        matches!(
            self,
            LlmError::Communication(_) | LlmError::Timeout(_) | LlmError::ModelNotAvailable(_)
        )
    }
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Fail(LlmError),
}

/// Mock LLM provider for deterministic testing
///
/// Replies are chosen by the first rule whose pattern occurs in the prompt,
/// falling back to the default response. No network calls are made.
///
/// # Examples
///
/// ```
/// use sift_llm::MockProvider;
/// use sift_domain::{GenerateOptions, LlmProvider};
///
/// let opts = GenerateOptions::summarization();
/// let mut provider = MockProvider::default();
/// provider.add_response("camera", "Great camera.");
/// provider.add_error("battery");
///
/// assert_eq!(provider.generate("about the camera", &opts).unwrap(), "Great camera.");
/// assert!(provider.generate("about the battery", &opts).is_err());
/// assert_eq!(provider.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    model: String,
    default_response: String,
    rules: Arc<Mutex<Vec<(String, MockReply)>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            model: "mock".to_string(),
            default_response: response.into(),
            rules: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the reported model name
    pub fn with_model_name(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Reply with `response` whenever the prompt contains `pattern`
    pub fn add_response(&mut self, pattern: impl Into<String>, response: impl Into<String>) {
        lock(&self.rules).push((pattern.into(), MockReply::Text(response.into())));
    }

    /// Fail with a communication error whenever the prompt contains `pattern`
    pub fn add_error(&mut self, pattern: impl Into<String>) {
        self.add_failure(pattern, LlmError::Communication("Mock error".to_string()));
    }

    /// Fail with `error` whenever the prompt contains `pattern`
    pub fn add_failure(&mut self, pattern: impl Into<String>, error: LlmError) {
        lock(&self.rules).push((pattern.into(), MockReply::Fail(error)));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    /// Forget recorded prompts
    pub fn reset_call_count(&self) {
        lock(&self.prompts).clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str, _options: &GenerateOptions) -> Result<String, Self::Error> {
        lock(&self.prompts).push(prompt.to_string());

        let rules = lock(&self.rules);
        match rules.iter().find(|(pattern, _)| prompt.contains(pattern.as_str())) {
            Some((_, MockReply::Text(response))) => Ok(response.clone()),
            Some((_, MockReply::Fail(error))) => Err(error.clone()),
            None => Ok(self.default_response.clone()),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
