//! Trait definitions for external interactions
//!
//! These traits define the boundary between the conversion pipeline and the
//! AI provider. Implementations live in `sheetsmith-llm`.

use std::future::Future;

/// A single multimodal generation call: one document plus one instruction,
/// with the reply constrained to a JSON schema.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Natural-language instruction
    pub prompt: String,
    /// Document bytes sent inline with the prompt
    pub document: Vec<u8>,
    /// Media type of `document`
    pub media_type: String,
    /// Response schema as JSON text
    pub response_schema: String,
}

/// Trait for AI provider operations
///
/// Implemented by the infrastructure layer (sheetsmith-llm)
pub trait LlmProvider {
    /// Error type for provider operations
    type Error: std::fmt::Display;

    /// Whether the provider holds the credential it needs.
    ///
    /// Checked before any request is built so that a missing key never
    /// results in network I/O.
    fn is_configured(&self) -> bool;

    /// Model identifier, for logging
    fn model_name(&self) -> &str;

    /// Generate schema-constrained JSON text for a document.
    ///
    /// Dropping the returned future abandons the call.
    fn generate_structured(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
