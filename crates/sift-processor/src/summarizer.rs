//! LLM-backed summarization of cleaned review text

use crate::error::{ProcessorError, Result};
use crate::prompt::summary_prompt;
use sift_domain::{GenerateOptions, LlmProvider};
use std::sync::Arc;
use tracing::{debug, error};

/// Default number of summary lines
pub const DEFAULT_MAX_LINES: usize = 2;

/// Compresses review text into a few lines via an LLM
pub struct Summarizer<L> {
    provider: Arc<L>,
    options: GenerateOptions,
    max_lines: usize,
}

impl<L: LlmProvider> Summarizer<L> {
    /// Create a new Summarizer
    pub fn new(provider: L, options: GenerateOptions, max_lines: usize) -> Self {
        Self::from_shared(Arc::new(provider), options, max_lines)
    }

    /// Create a Summarizer over a provider shared with other components
    pub fn from_shared(provider: Arc<L>, options: GenerateOptions, max_lines: usize) -> Self {
        Self {
            provider,
            options,
            max_lines,
        }
    }

    /// Summarizer with the default 2-line limit and summarization settings
    pub fn with_defaults(provider: L) -> Self {
        Self::new(provider, GenerateOptions::summarization(), DEFAULT_MAX_LINES)
    }

    /// Model identifier of the underlying provider
    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    /// Summarize `text` into at most the configured number of lines
    pub fn summarize(&self, text: &str) -> Result<String> {
        self.summarize_lines(text, self.max_lines)
    }

    /// Summarize `text` into at most `max_lines` lines.
    ///
    /// Blank input returns `""` without calling the model. Otherwise the first
    /// `max_lines` non-blank lines of the reply are kept, each trimmed.
    ///
    /// # Errors
    ///
    /// Any failure of the model call is returned, classified as
    /// `ProcessorError::Api` or `ProcessorError::Unexpected`.
    pub fn summarize_lines(&self, text: &str, max_lines: usize) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let prompt = summary_prompt(text, max_lines);
        debug!("Summary prompt length: {} chars", prompt.len());

        let response = self
            .provider
            .generate(&prompt, &self.options)
            .map_err(|e| {
                let err = ProcessorError::from_provider(e);
                error!("Summarization failed: {}", err);
                err
            })?;

        Ok(clamp_lines(&response, max_lines))
    }
}

/// Keep the first `max_lines` non-blank lines, trimmed, joined by newlines
fn clamp_lines(response: &str, max_lines: usize) -> String {
    response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(max_lines)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_llm::{LlmError, MockProvider};

    #[test]
    fn test_blank_text_skips_model() {
        let llm = MockProvider::new("should not be used");
        let summarizer = Summarizer::with_defaults(llm.clone());

        assert_eq!(summarizer.summarize("").unwrap(), "");
        assert_eq!(summarizer.summarize("  \n\t ").unwrap(), "");
        assert_eq!(llm.call_count(), 0);
    }

    #[test]
    fn test_summary_is_clamped_to_max_lines() {
        let llm = MockProvider::new("\n  First line.  \n\n Second line.\nThird line.\n");
        let summarizer = Summarizer::with_defaults(llm);

        let summary = summarizer.summarize("A long review").unwrap();
        assert_eq!(summary, "First line.\nSecond line.");
    }

    #[test]
    fn test_custom_line_count() {
        let llm = MockProvider::new("a\nb\nc\nd");
        let summarizer = Summarizer::with_defaults(llm.clone());

        assert_eq!(summarizer.summarize_lines("text", 3).unwrap(), "a\nb\nc");
        assert!(llm.prompts()[0].contains("exactly 3 lines"));
    }

    #[test]
    fn test_prompt_carries_text() {
        let llm = MockProvider::new("ok");
        let summarizer = Summarizer::with_defaults(llm.clone());

        summarizer.summarize("Battery lasts all day").unwrap();
        assert!(llm.prompts()[0].contains("Battery lasts all day"));
    }

    #[test]
    fn test_api_failure_propagates() {
        let mut llm = MockProvider::default();
        llm.add_error("review");
        let summarizer = Summarizer::with_defaults(llm);

        let err = summarizer.summarize("my review").unwrap_err();
        assert!(matches!(err, ProcessorError::Api(_)));
        assert!(err.to_string().starts_with("API error"));
    }

    #[test]
    fn test_unexpected_failure_propagates() {
        let mut llm = MockProvider::default();
        llm.add_failure("review", LlmError::InvalidResponse("garbled".to_string()));
        let summarizer = Summarizer::with_defaults(llm);

        let err = summarizer.summarize("my review").unwrap_err();
        assert!(matches!(err, ProcessorError::Unexpected(_)));
    }

    #[test]
    fn test_clamp_lines_empty_response() {
        assert_eq!(clamp_lines("", 2), "");
        assert_eq!(clamp_lines("\n \n", 2), "");
    }
}
