//! Batch orchestration: normalize, summarize and extract each record in turn

use crate::config::ProcessorConfig;
use crate::error::Result;
use crate::extractor::StructuredExtractor;
use crate::normalize::normalize;
use crate::summarizer::Summarizer;
use crate::types::{BatchOptions, FailedRecord, ProcessedRecord, ReviewEntry};
use sift_domain::{body_field, record_id, text_field, LlmProvider, RawRecord};
use tracing::{error, info, warn};

/// Runs the review pipeline over single records and batches
///
/// Records are processed sequentially and independently. Per-record failures
/// are recorded on the record itself; a batch always yields one entry per input.
pub struct ReviewProcessor<L> {
    summarizer: Summarizer<L>,
    extractor: StructuredExtractor<L>,
}

impl<L: LlmProvider> ReviewProcessor<L> {
    /// Create a new ReviewProcessor
    pub fn new(summarizer: Summarizer<L>, extractor: StructuredExtractor<L>) -> Self {
        Self {
            summarizer,
            extractor,
        }
    }

    /// Build both stages from a validated configuration
    pub fn from_config(config: &ProcessorConfig, summarize_provider: L, extract_provider: L) -> Self {
        Self::new(
            Summarizer::new(
                summarize_provider,
                config.summarization_options(),
                config.summary_max_lines,
            ),
            StructuredExtractor::new(extract_provider, config.extraction_options()),
        )
    }

    /// Model identifier reported in output metadata
    pub fn model_name(&self) -> &str {
        self.summarizer.model_name()
    }

    /// Normalize a record and, if asked, summarize it.
    ///
    /// A summarization failure is recorded as `summary_error`; it is not
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `ProcessorError::InvalidRecord` when `title`, `selftext` or
    /// `body` holds something other than a string.
    pub fn process_one(&self, raw: &RawRecord, summarize: bool) -> Result<ProcessedRecord> {
        let title = text_field(raw, "title")?;
        let body = body_field(raw)?;
        let text = normalize(title, body);

        let mut record = ProcessedRecord {
            raw: raw.clone(),
            concatenated_text: text.concatenated,
            cleaned_text: text.cleaned,
            summary: None,
            summary_error: None,
            structured: None,
        };

        if summarize && !record.cleaned_text.is_empty() {
            match self.summarizer.summarize(&record.cleaned_text) {
                Ok(summary) => record.summary = Some(summary),
                Err(e) => {
                    warn!("Failed to summarize review {}: {}", record_id(raw), e);
                    record.summary_error = Some(e.to_string());
                }
            }
        }

        Ok(record)
    }

    /// Attach a structured extraction of the record's summary
    ///
    /// A record without a summary gets the default-shaped structure.
    pub fn extract_one(&self, record: &mut ProcessedRecord) {
        let summary = record.summary.as_deref().unwrap_or_default();
        record.structured = Some(self.extractor.extract(summary));
    }

    /// Process every record in input order, summarizing when `summarize` is set
    pub fn process_batch(&self, raws: &[RawRecord], summarize: bool) -> Vec<ReviewEntry> {
        self.process_batch_with(
            raws,
            BatchOptions {
                summarize,
                extract: false,
            },
        )
    }

    /// Process every record in input order with the given stages
    pub fn process_batch_with(&self, raws: &[RawRecord], options: BatchOptions) -> Vec<ReviewEntry> {
        let total = raws.len();
        let mut entries = Vec::with_capacity(total);

        for (idx, raw) in raws.iter().enumerate() {
            info!("Processing review {}/{}: {}", idx + 1, total, record_id(raw));

            match self.process_one(raw, options.summarize) {
                Ok(mut record) => {
                    if options.extract {
                        self.extract_one(&mut record);
                    }
                    entries.push(ReviewEntry::Processed(record));
                }
                Err(e) => {
                    error!("Error processing review {}: {}", record_id(raw), e);
                    entries.push(ReviewEntry::Failed(FailedRecord {
                        raw: raw.clone(),
                        processing_error: e.to_string(),
                    }));
                }
            }
        }

        let failed = entries.iter().filter(|e| e.is_failed()).count();
        info!(
            "Batch complete: {} processed, {} failed",
            total - failed,
            failed
        );

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessorError;
    use serde_json::{json, Value};
    use sift_llm::MockProvider;

    fn raw(value: Value) -> RawRecord {
        value.as_object().cloned().unwrap()
    }

    fn processor(llm: &MockProvider) -> ReviewProcessor<MockProvider> {
        ReviewProcessor::new(
            Summarizer::with_defaults(llm.clone()),
            StructuredExtractor::with_defaults(llm.clone()),
        )
    }

    #[test]
    fn test_process_one_without_summarization() {
        let llm = MockProvider::new("unused");
        let processor = processor(&llm);

        let record = processor
            .process_one(
                &raw(json!({
                    "id": "test123",
                    "title": "Great Product! 😊",
                    "selftext": "I   loved this!!!  #awesome",
                    "score": 150
                })),
                false,
            )
            .unwrap();

        assert_eq!(record.id(), "test123");
        assert_eq!(record.raw["score"], 150);
        assert_eq!(record.cleaned_text, "Great Product! I loved this!!! awesome");
        assert!(record.summary.is_none());
        assert!(record.summary_error.is_none());
        assert_eq!(llm.call_count(), 0);
    }

    #[test]
    fn test_process_one_with_empty_body() {
        let llm = MockProvider::new("unused");
        let record = processor(&llm)
            .process_one(&raw(json!({"id": "t", "title": "Just a title", "selftext": ""})), false)
            .unwrap();
        assert_eq!(record.concatenated_text, "Just a title");
        assert_eq!(record.cleaned_text, "Just a title");
    }

    #[test]
    fn test_process_one_uses_body_field() {
        let llm = MockProvider::new("unused");
        let record = processor(&llm)
            .process_one(&raw(json!({"id": "c1", "body": "A comment body"})), false)
            .unwrap();
        assert_eq!(record.cleaned_text, "A comment body");
    }

    #[test]
    fn test_process_one_summarizes() {
        let llm = MockProvider::new("Line one.\nLine two.\nLine three.");
        let record = processor(&llm)
            .process_one(&raw(json!({"id": "s", "title": "Title", "selftext": "Body"})), true)
            .unwrap();
        assert_eq!(record.summary.as_deref(), Some("Line one.\nLine two."));
        assert!(record.summary_error.is_none());
    }

    #[test]
    fn test_process_one_skips_summary_for_empty_text() {
        let llm = MockProvider::new("should not be called");
        let record = processor(&llm)
            .process_one(&raw(json!({"id": "e", "title": "😊😊"})), true)
            .unwrap();
        assert_eq!(record.cleaned_text, "");
        assert!(record.summary.is_none());
        assert_eq!(llm.call_count(), 0);
    }

    #[test]
    fn test_process_one_records_summary_error() {
        let mut llm = MockProvider::default();
        llm.add_error("Broken");
        let record = processor(&llm)
            .process_one(&raw(json!({"id": "b", "title": "Broken"})), true)
            .unwrap();
        assert!(record.summary.is_none());
        assert!(record.summary_error.unwrap().starts_with("API error"));
    }

    #[test]
    fn test_process_one_rejects_non_string_title() {
        let llm = MockProvider::default();
        let err = processor(&llm)
            .process_one(&raw(json!({"id": "n", "title": 42})), false)
            .unwrap_err();
        assert!(matches!(err, ProcessorError::InvalidRecord(_)));
    }

    #[test]
    fn test_extract_one_without_summary_is_default() {
        let llm = MockProvider::new(r#"{"sentiment": "Positive"}"#);
        let processor = processor(&llm);
        let mut record = processor
            .process_one(&raw(json!({"id": "x", "title": "T"})), false)
            .unwrap();

        processor.extract_one(&mut record);
        assert_eq!(record.structured.unwrap().sentiment, "Unknown");
        assert_eq!(llm.call_count(), 0);
    }

    #[test]
    fn test_model_name() {
        let llm = MockProvider::default().with_model_name("llama2");
        assert_eq!(processor(&llm).model_name(), "llama2");
    }

    #[test]
    fn test_from_config() {
        let config = ProcessorConfig {
            summary_max_lines: 1,
            ..ProcessorConfig::default()
        };
        let llm = MockProvider::new("one\ntwo");
        let processor = ReviewProcessor::from_config(&config, llm.clone(), llm.clone());

        let record = processor
            .process_one(&raw(json!({"id": "c", "title": "T"})), true)
            .unwrap();
        assert_eq!(record.summary.as_deref(), Some("one"));
    }
}
