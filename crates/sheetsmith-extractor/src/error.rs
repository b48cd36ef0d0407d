//! Error types for the Extractor

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during conversion
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The provider has no API key
    #[error("AI provider API key is not configured")]
    MissingCredential,

    /// Document is empty
    #[error("Document is empty")]
    EmptyDocument,

    /// Document exceeds the size ceiling
    #[error("Document too large: {0} bytes (max: {1})")]
    DocumentTooLarge(usize, usize),

    /// Provider did not answer within the deadline
    #[error("AI request timed out after {0:?}")]
    Timeout(Duration),

    /// Provider call failed
    #[error("LLM error: {0}")]
    Llm(String),

    /// Reply did not match the response schema
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// Workbook could not be encoded
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::InvalidFormat(format!("JSON parse error: {}", e))
    }
}

impl From<rust_xlsxwriter::XlsxError> for ExtractorError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        ExtractorError::Workbook(e.to_string())
    }
}
