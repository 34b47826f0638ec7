//! Sift Processor
//!
//! Turns raw retrieved reviews into cleaned, summarized and structured records.
//!
//! # Overview
//!
//! Each record passes through a fixed pipeline. The title and body are joined
//! and cleaned, the cleaned text is compressed into a short summary by a
//! language model, and the summary is optionally turned into a fixed-schema
//! `StructuredReview`. A batch is processed sequentially, and a failure on one
//! record is recorded on that record instead of aborting the run.
//!
//! # Architecture
//!
//! ```text
//! RawRecord → normalize → Summarizer → StructuredExtractor → persist
//!                              ↓                ↓
//!                          LlmProvider      LlmProvider
//! ```
//!
//! # Example Usage
//!
//! ```
//! use sift_llm::MockProvider;
//! use sift_processor::{ReviewProcessor, Summarizer, StructuredExtractor, BatchOptions};
//! use serde_json::json;
//!
//! let llm = MockProvider::new("Battery lasts two days.\nCharging is slow.");
//! let processor = ReviewProcessor::new(
//!     Summarizer::with_defaults(llm.clone()),
//!     StructuredExtractor::with_defaults(llm),
//! );
//!
//! let raw = json!({"id": "abc", "title": "Phone 🔋", "selftext": "Battery is great"});
//! let records = vec![raw.as_object().cloned().unwrap_or_default()];
//!
//! let entries = processor.process_batch_with(&records, BatchOptions::default());
//! let record = entries[0].as_processed().unwrap();
//! assert_eq!(record.cleaned_text, "Phone Battery is great");
//! assert_eq!(record.summary.as_deref(), Some("Battery lasts two days.\nCharging is slow."));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod extractor;
pub mod normalize;
mod output;
mod parser;
mod processor;
mod prompt;
mod summarizer;
mod types;


pub use config::ProcessorConfig;
pub use error::{ProcessorError, Result};
pub use extractor::{validate, StructuredExtractor};
pub use normalize::{clean, concatenate, normalize, NormalizedText};
pub use output::{load_records, persist};
pub use parser::parse_model_json;
pub use processor::ReviewProcessor;
pub use prompt::{extraction_prompt, summary_prompt};
pub use summarizer::{Summarizer, DEFAULT_MAX_LINES};
pub use types::{
    BatchOptions, DocumentMetadata, FailedRecord, OutputDocument, ProcessedRecord, ReviewEntry,
};
