//! Request-boundary error mapping.
//!
//! Every failure becomes one JSON body `{"error": "..."}` with a status from
//! {400, 413, 500, 504}. Upstream details are logged, not returned.

use crate::upload::UploadError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use sheetsmith_extractor::ExtractorError;
use tracing::{error, warn};

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Upload rejected by the gate
    Upload(UploadError),
    /// Conversion failed
    Extraction(ExtractorError),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Status code and client-facing message
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Upload(e) => (e.status(), e.to_string()),
            AppError::Extraction(e) => match e {
                ExtractorError::EmptyDocument => {
                    (StatusCode::BAD_REQUEST, UploadError::NoFile.to_string())
                }
                ExtractorError::DocumentTooLarge(_, max) => (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    UploadError::TooLarge(*max).to_string(),
                ),
                ExtractorError::MissingCredential => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error: AI provider API key is not set".to_string(),
                ),
                ExtractorError::Timeout(_) => (
                    StatusCode::GATEWAY_TIMEOUT,
                    "The AI service did not respond in time. Try a smaller document.".to_string(),
                ),
                ExtractorError::Llm(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The AI service failed to process the document".to_string(),
                ),
                ExtractorError::InvalidFormat(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The AI service returned a response that could not be read".to_string(),
                ),
                ExtractorError::Workbook(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to build the spreadsheet".to_string(),
                ),
                ExtractorError::Config(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                ),
            },
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        match &self {
            AppError::Upload(e) => warn!("Upload rejected ({}): {}", status, e),
            AppError::Extraction(e) if status.is_server_error() => {
                error!("Conversion failed ({}): {}", status, e)
            }
            AppError::Extraction(e) => warn!("Conversion rejected ({}): {}", status, e),
            AppError::Internal(msg) => error!("Internal error: {}", msg),
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<UploadError> for AppError {
    fn from(e: UploadError) -> Self {
        AppError::Upload(e)
    }
}

impl From<ExtractorError> for AppError {
    fn from(e: ExtractorError) -> Self {
        AppError::Extraction(e)
    }
}
