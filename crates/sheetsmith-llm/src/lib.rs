//! Sheetsmith LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `sheetsmith-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing, counts calls
//! - `GeminiProvider`: Google Gemini `generateContent` integration
//!
//! # Examples
//!
//! ```
//! use sheetsmith_domain::{GenerationRequest, LlmProvider};
//! use sheetsmith_llm::MockProvider;
//!
//! # async fn example() {
//! let provider = MockProvider::new(r#"{"best_effort": []}"#);
//! let request = GenerationRequest {
//!     prompt: "extract".to_string(),
//!     document: vec![],
//!     media_type: "application/pdf".to_string(),
//!     response_schema: "{}".to_string(),
//! };
//! let reply = provider.generate_structured(&request).await.unwrap();
//! assert_eq!(reply, r#"{"best_effort": []}"#);
//! assert_eq!(provider.call_count(), 1);
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;

use sheetsmith_domain::{GenerationRequest, LlmProvider as LlmProviderTrait};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

pub use gemini::GeminiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the provider
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// No API key configured
    #[error("API key not configured")]
    MissingApiKey,

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns a pre-configured reply without making any network calls. The call
/// counter and the last request are shared between clones so a test can keep
/// a handle while the pipeline owns the provider.
#[derive(Debug, Clone)]
pub struct MockProvider {
    reply: MockReply,
    delay: Option<Duration>,
    configured: bool,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<GenerationRequest>>>,
}

impl MockProvider {
    /// Create a new MockProvider that always replies with `response`
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            reply: MockReply::Text(response.into()),
            delay: None,
            configured: true,
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a MockProvider whose every call fails
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: MockReply::Error(message.into()),
            ..Self::default()
        }
    }

    /// Create a MockProvider that reports a missing credential
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::default()
        }
    }

    /// Delay every reply by `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn model_name(&self) -> &str {
        "mock"
    }

    async fn generate_structured(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_request.lock().unwrap() = Some(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Error(message) => Err(LlmError::Other(message.clone())),
        }
    }
}
