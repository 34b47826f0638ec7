//! Processed record types and the persisted output document

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use sift_domain::{record_id, RawRecord, StructuredReview};

/// A raw record after normalization, summarization and (optionally) extraction
///
/// Serializes as the raw record's fields with the pipeline fields laid over
/// them; raw fields are never dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedRecord {
    /// The record as retrieved
    pub raw: RawRecord,

    /// Title and body joined
    pub concatenated_text: String,

    /// `concatenated_text` after cleaning
    pub cleaned_text: String,

    /// Model summary, when summarization ran and succeeded
    pub summary: Option<String>,

    /// Why summarization failed, when it did
    pub summary_error: Option<String>,

    /// Structured extraction result, when extraction ran
    pub structured: Option<StructuredReview>,
}

impl ProcessedRecord {
    /// Record identifier, or `"unknown"`
    pub fn id(&self) -> &str {
        record_id(&self.raw)
    }

    /// Flatten into a single JSON object
    pub fn to_json_map(&self) -> Map<String, Value> {
        let mut map = self.raw.clone();
        map.insert("concatenated_text".into(), Value::String(self.concatenated_text.clone()));
        map.insert("cleaned_text".into(), Value::String(self.cleaned_text.clone()));
        if let Some(summary) = &self.summary {
            map.insert("summary".into(), Value::String(summary.clone()));
        }
        if let Some(error) = &self.summary_error {
            map.insert("summary_error".into(), Value::String(error.clone()));
        }
        if let Some(structured) = &self.structured {
            if let Ok(Value::Object(fields)) = serde_json::to_value(structured) {
                map.extend(fields);
            }
        }
        map
    }
}

/// A raw record whose processing failed unexpectedly
#[derive(Debug, Clone, PartialEq)]
pub struct FailedRecord {
    /// The record as retrieved
    pub raw: RawRecord,

    /// What went wrong
    pub processing_error: String,
}

impl FailedRecord {
    /// Flatten into a single JSON object
    pub fn to_json_map(&self) -> Map<String, Value> {
        let mut map = self.raw.clone();
        map.insert("processing_error".into(), Value::String(self.processing_error.clone()));
        map
    }
}

/// One entry of a processed batch
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewEntry {
    /// Processing completed (possibly with a recorded summary/extraction error)
    Processed(ProcessedRecord),

    /// Processing failed; the raw record is kept with the error
    Failed(FailedRecord),
}

impl ReviewEntry {
    /// Record identifier, or `"unknown"`
    pub fn id(&self) -> &str {
        match self {
            ReviewEntry::Processed(record) => record.id(),
            ReviewEntry::Failed(record) => record_id(&record.raw),
        }
    }

    /// The processed record, if processing completed
    pub fn as_processed(&self) -> Option<&ProcessedRecord> {
        match self {
            ReviewEntry::Processed(record) => Some(record),
            ReviewEntry::Failed(_) => None,
        }
    }

    /// Whether processing failed outright
    pub fn is_failed(&self) -> bool {
        matches!(self, ReviewEntry::Failed(_))
    }

    /// Flatten into a single JSON object
    pub fn to_json_map(&self) -> Map<String, Value> {
        match self {
            ReviewEntry::Processed(record) => record.to_json_map(),
            ReviewEntry::Failed(record) => record.to_json_map(),
        }
    }
}

impl Serialize for ProcessedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_map().serialize(serializer)
    }
}

impl Serialize for FailedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_map().serialize(serializer)
    }
}

impl Serialize for ReviewEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_map().serialize(serializer)
    }
}

/// Which optional pipeline stages to run over a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Summarize cleaned text
    pub summarize: bool,

    /// Extract structured fields from each summary
    pub extract: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            summarize: true,
            extract: false,
        }
    }
}

/// Metadata block of the output document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentMetadata {
    /// When the document was generated (UTC)
    pub generated_at: DateTime<Utc>,

    /// Number of entries in `reviews`
    pub total_reviews: usize,

    /// Model identifier used for summarization/extraction
    pub model_used: String,
}

/// The persisted JSON document
#[derive(Debug, Clone, Serialize)]
pub struct OutputDocument<'a> {
    /// Generation metadata
    pub metadata: DocumentMetadata,

    /// Entries in input order
    pub reviews: &'a [ReviewEntry],
}

impl<'a> OutputDocument<'a> {
    /// Wrap `reviews` with freshly stamped metadata
    pub fn new(reviews: &'a [ReviewEntry], model_used: impl Into<String>) -> Self {
        Self {
            metadata: DocumentMetadata {
                generated_at: Utc::now(),
                total_reviews: reviews.len(),
                model_used: model_used.into(),
            },
            reviews,
        }
    }
}
