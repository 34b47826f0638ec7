//! Structured extraction: summary text to a fixed-schema `StructuredReview`

use crate::error::ProcessorError;
use crate::parser::parse_model_json;
use crate::prompt::extraction_prompt;
use serde_json::Value;
use sift_domain::{GenerateOptions, LlmProvider, StructuredReview};
use std::sync::Arc;
use tracing::{debug, warn};

/// Extracts structured review information from a summary via an LLM
///
/// `extract` never fails: endpoint errors and unparseable replies both yield
/// the default-shaped record with `extraction_error` set.
pub struct StructuredExtractor<L> {
    provider: Arc<L>,
    options: GenerateOptions,
}

impl<L: LlmProvider> StructuredExtractor<L> {
    /// Create a new StructuredExtractor
    pub fn new(provider: L, options: GenerateOptions) -> Self {
        Self::from_shared(Arc::new(provider), options)
    }

    /// Create a StructuredExtractor over a provider shared with other components
    pub fn from_shared(provider: Arc<L>, options: GenerateOptions) -> Self {
        Self { provider, options }
    }

    /// Extractor with the default extraction settings
    pub fn with_defaults(provider: L) -> Self {
        Self::new(provider, GenerateOptions::extraction())
    }

    /// Model identifier of the underlying provider
    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    /// Extract a `StructuredReview` from `summary`
    pub fn extract(&self, summary: &str) -> StructuredReview {
        if summary.trim().is_empty() {
            return StructuredReview::default();
        }

        let prompt = extraction_prompt(summary);
        debug!("Extraction prompt length: {} chars", prompt.len());

        let response = match self.provider.generate(&prompt, &self.options) {
            Ok(response) => response,
            Err(e) => {
                let err = ProcessorError::from_provider(e);
                warn!("Structured extraction call failed: {}", err);
                return StructuredReview::with_error(err.to_string());
            }
        };

        match parse_model_json(&response) {
            Ok(Value::Object(map)) => StructuredReview::from_json_map(&map),
            Ok(_) => {
                warn!("Model returned JSON that is not an object");
                StructuredReview::with_error(
                    ProcessorError::JsonParse("expected a JSON object".to_string()).to_string(),
                )
            }
            Err(err) => {
                warn!("{}", err);
                StructuredReview::with_error(err.to_string())
            }
        }
    }
}

/// Blend parsed model output into the fixed schema.
///
/// Objects go through `StructuredReview::from_json_map`; any other JSON value
/// carries no recognised keys and yields the defaults.
pub fn validate(value: &Value) -> StructuredReview {
    match value {
        Value::Object(map) => StructuredReview::from_json_map(map),
        _ => StructuredReview::default(),
    }
}
