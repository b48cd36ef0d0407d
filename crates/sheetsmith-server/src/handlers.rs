//! HTTP request handlers.
//!
//! Implements the conversion and health check endpoints using axum.

use crate::error::AppError;
use crate::upload::{read_upload, MULTIPART_OVERHEAD_BYTES};
use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use serde::{Deserialize, Serialize};
use sheetsmith_domain::LlmProvider;
use sheetsmith_extractor::{ExtractorConfig, TableExtractor, XLSX_CONTENT_TYPE};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared application state
pub struct AppState<L: LlmProvider> {
    /// Conversion pipeline
    pub extractor: TableExtractor<L>,
}

impl<L: LlmProvider> Clone for AppState<L> {
    fn clone(&self) -> Self {
        Self {
            extractor: self.extractor.clone(),
        }
    }
}

impl<L> AppState<L>
where
    L: LlmProvider + Send + Sync + 'static,
{
    /// Create state around a provider
    pub fn new(provider: L, config: ExtractorConfig) -> Self {
        Self {
            extractor: TableExtractor::new(provider, config),
        }
    }

    /// Upload ceiling in bytes
    pub fn max_upload_bytes(&self) -> usize {
        self.extractor.config().max_document_bytes
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "ok" when the process answers
    pub status: String,
    /// Whether the AI provider key is set
    pub credential_configured: bool,
    /// Model in use
    pub model: String,
    /// Upload ceiling in bytes
    pub max_upload_bytes: usize,
    /// AI deadline, `null` when unbounded
    pub ai_timeout_secs: Option<u64>,
}

/// POST /api/convert - Convert an uploaded PDF into an XLSX workbook
async fn convert<L>(
    State(state): State<AppState<L>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError>
where
    L: LlmProvider + Send + Sync + 'static,
{
    let mut multipart = multipart.map_err(crate::upload::UploadError::from)?;
    let document = read_upload(&mut multipart, state.max_upload_bytes()).await?;

    info!(
        "Received upload {:?} ({} bytes)",
        document.file_name().unwrap_or("<unnamed>"),
        document.size()
    );

    let conversion = state.extractor.convert(&document).await?;

    let disposition = format!("attachment; filename=\"{}\"", conversion.file_name);
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|e| AppError::Internal(format!("Invalid disposition header: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(XLSX_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        conversion.bytes,
    )
        .into_response())
}

/// GET /health - Liveness and configuration summary
async fn health_check<L>(State(state): State<AppState<L>>) -> Json<HealthCheckResponse>
where
    L: LlmProvider + Send + Sync + 'static,
{
    let provider = state.extractor.provider();
    let config = state.extractor.config();

    Json(HealthCheckResponse {
        status: "ok".to_string(),
        credential_configured: provider.is_configured(),
        model: provider.model_name().to_string(),
        max_upload_bytes: config.max_document_bytes,
        ai_timeout_secs: config.ai_timeout_secs,
    })
}

/// Create the axum router with all routes
pub fn create_router<L>(state: AppState<L>) -> AxumRouter
where
    L: LlmProvider + Send + Sync + 'static,
{
    let body_limit = state.max_upload_bytes() + MULTIPART_OVERHEAD_BYTES;

    AxumRouter::new()
        .route("/api/convert", post(convert::<L>))
        .route("/health", get(health_check::<L>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
