//! Core conversion pipeline

use crate::config::ExtractorConfig;
use crate::encode::encode_workbook;
use crate::error::ExtractorError;
use crate::parser::parse_model_response;
use crate::prompt::build_request;
use crate::types::{Conversion, ConversionMetadata};
use sheetsmith_domain::{ExtractionResult, LlmProvider, UploadedDocument, Workbook};
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Converts PDF documents into workbooks through an AI provider.
///
/// Stateless between calls; one instance is shared by every request.
pub struct TableExtractor<L>
where
    L: LlmProvider,
{
    provider: Arc<L>,
    config: ExtractorConfig,
}

impl<L> Clone for TableExtractor<L>
where
    L: LlmProvider,
{
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            config: self.config.clone(),
        }
    }
}

impl<L> TableExtractor<L>
where
    L: LlmProvider + Send + Sync + 'static,
{
    /// Create a new extractor
    pub fn new(provider: L, config: ExtractorConfig) -> Self {
        Self::from_shared(Arc::new(provider), config)
    }

    /// Create an extractor around an already shared provider
    pub fn from_shared(provider: Arc<L>, config: ExtractorConfig) -> Self {
        Self { provider, config }
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Underlying provider
    pub fn provider(&self) -> &L {
        &self.provider
    }

    /// Ask the provider for the document's tables.
    ///
    /// Checks run in order: configuration, document size, credential, then
    /// the single provider call under the configured deadline. No retries.
    pub async fn extract(
        &self,
        document: &UploadedDocument,
    ) -> Result<ExtractionResult, ExtractorError> {
        self.config.validate().map_err(ExtractorError::Config)?;

        if document.size() == 0 {
            return Err(ExtractorError::EmptyDocument);
        }
        if document.size() > self.config.max_document_bytes {
            return Err(ExtractorError::DocumentTooLarge(
                document.size(),
                self.config.max_document_bytes,
            ));
        }

        // Must happen before the request is built
        if !self.provider.is_configured() {
            warn!("Rejecting conversion: AI provider credential is not configured");
            return Err(ExtractorError::MissingCredential);
        }

        let request = build_request(document);
        debug!(
            "Built request: prompt {} chars, schema {} chars",
            request.prompt.len(),
            request.response_schema.len()
        );

        info!(
            "Calling model '{}' for {} byte document",
            self.provider.model_name(),
            document.size()
        );

        let call = self.provider.generate_structured(&request);
        let reply = match self.config.ai_timeout() {
            Some(deadline) => timeout(deadline, call).await.map_err(|_| {
                warn!("AI call abandoned after {:?}", deadline);
                ExtractorError::Timeout(deadline)
            })?,
            None => call.await,
        }
        .map_err(|e| {
            warn!("AI call failed: {}", e);
            ExtractorError::Llm(e.to_string())
        })?;

        debug!("Model reply length: {} chars", reply.len());

        let result = parse_model_response(&reply)?;

        info!(
            "Parsed tables: best_effort={}, structured_view={}, raw_data={}",
            result.best_effort.len(),
            result.structured_view.len(),
            result.raw_data.len()
        );

        Ok(result)
    }

    /// Convert a document into an encoded workbook
    pub async fn convert(&self, document: &UploadedDocument) -> Result<Conversion, ExtractorError> {
        let start = Instant::now();

        let result = self.extract(document).await?;
        let workbook = Workbook::from_extraction(&result);
        let bytes = encode_workbook(&workbook)?;

        let metadata = ConversionMetadata {
            model_name: self.provider.model_name().to_string(),
            document_bytes: document.size(),
            table_count: result.table_count(),
            sheet_count: workbook.sheets().len(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "Conversion complete: {} tables, {} sheets, {} bytes in {} ms",
            metadata.table_count,
            metadata.sheet_count,
            bytes.len(),
            metadata.processing_time_ms
        );

        Ok(Conversion {
            workbook,
            bytes,
            file_name: document.workbook_file_name(),
            metadata,
        })
    }
}
