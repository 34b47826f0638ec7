//! Sift Domain Layer
//!
//! This crate contains the data model for Sift and the trait interfaces the
//! pipeline crates depend upon. It carries no I/O of its own.
//!
//! ## Key Concepts
//!
//! - **RawRecord**: A retrieved post with arbitrary passthrough fields
//! - **StructuredReview**: The fixed-schema extraction result, always fully populated
//! - **Sentinel defaults**: `"Not specified"` / `"Unknown"` for undetermined fields
//! - **LlmProvider**: The single blocking "generate text from prompt" seam
//!
//! ## Architecture
//!
//! - Pure data and validation logic only
//! - Infrastructure implementations (HTTP clients) live in `sift-llm`
//! - The processing pipeline lives in `sift-processor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod review;
pub mod traits;

// Re-exports for convenience
pub use record::{body_field, record_id, text_field, FieldError, RawRecord, UNKNOWN_ID};
pub use review::{Sentiment, StructuredReview, TestEnvironment, NOT_SPECIFIED, UNKNOWN_SENTIMENT};
pub use traits::{GenerateOptions, LlmProvider, ProviderError};
