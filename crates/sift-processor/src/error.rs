//! Error types for the review processor

use sift_domain::{FieldError, ProviderError};
use thiserror::Error;

/// Errors that can occur while processing reviews
#[derive(Error, Debug)]
pub enum ProcessorError {
    /// Transport, status or timeout failure talking to the model endpoint
    #[error("API error: {0}")]
    Api(String),

    /// Any other failure during a model call
    #[error("Unexpected error: {0}")]
    Unexpected(String),

    /// Model output contained no parseable JSON
    #[error("Failed to parse JSON from model response: {0}")]
    JsonParse(String),

    /// A raw record field has the wrong type
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] FieldError),

    /// Input document is not in the expected shape
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error while reading input or writing the output document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while writing the output document
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProcessorError {
    /// Wrap a provider failure, keeping the API vs unexpected distinction
    pub fn from_provider<E: ProviderError>(error: E) -> Self {
        if error.is_api_error() {
            ProcessorError::Api(error.to_string())
        } else {
            ProcessorError::Unexpected(error.to_string())
        }
    }
}

/// Result type alias for processor operations
pub type Result<T> = std::result::Result<T, ProcessorError>;
