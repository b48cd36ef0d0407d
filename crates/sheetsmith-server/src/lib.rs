//! Sheetsmith Server
//!
//! HTTP front end for PDF-to-spreadsheet conversion. Accepts a PDF upload on
//! `POST /api/convert`, runs it through the extractor, and streams back an
//! XLSX workbook or a JSON error.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod upload;

use config::ServerConfig;
use handlers::{create_router, AppState};
use sheetsmith_domain::LlmProvider;
use sheetsmith_llm::GeminiProvider;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed by an embedding binary
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Start the HTTP server
///
/// Builds the Gemini provider from the environment, wires the router and
/// serves until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    let extractor_config = config.extractor_config();

    info!("Starting Sheetsmith server");
    info!("Bind address: {}", config.bind_addr());
    info!("Profile: {:?}", config.profile);
    info!("Upload limit: {} bytes", extractor_config.max_document_bytes);
    match extractor_config.ai_timeout_secs {
        Some(secs) => info!("AI deadline: {} seconds", secs),
        None => info!("AI deadline: none"),
    }

    let provider = GeminiProvider::from_env()
        .with_endpoint(config.gemini.endpoint.clone())
        .with_model(config.gemini.model.clone());

    if !provider.is_configured() {
        warn!(
            "{} is not set; conversions will fail until it is configured",
            sheetsmith_llm::gemini::API_KEY_ENV
        );
    }
    info!("Model: {}", provider.model_name());

    let state = AppState::new(provider, extractor_config);
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let err = ServerError::Server("boom".to_string());
        assert_eq!(err.to_string(), "Server error: boom");

        let err = ServerError::from(config::ConfigError::InvalidValue(
            "bind_port".to_string(),
            "x".to_string(),
        ));
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
