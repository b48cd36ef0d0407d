//! Sheetsmith Extractor
//!
//! Turns a PDF into a spreadsheet workbook by asking a multimodal model for
//! its tables.
//!
//! # Overview
//!
//! The model is asked once per document for three variants of every table
//! (best effort, raw data, structured view) as nested string arrays. The reply
//! is parsed, each non-empty variant becomes one worksheet, and the workbook is
//! encoded as XLSX in memory.
//!
//! # Architecture
//!
//! ```text
//! PDF → TableExtractor → LlmProvider → JSON → ExtractionResult → Workbook → XLSX bytes
//! ```
//!
//! # Key Features
//!
//! - **Credential check first**: a missing API key fails before any request is built
//! - **Deadline**: the provider call is dropped once the configured timeout elapses
//! - **Single shot**: no retries, no partial output
//! - **Tolerant parsing**: absent or empty variants simply produce no sheet
//!
//! # Example Usage
//!
//! ```no_run
//! use sheetsmith_domain::UploadedDocument;
//! use sheetsmith_extractor::{ExtractorConfig, TableExtractor};
//! use sheetsmith_llm::GeminiProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = TableExtractor::new(GeminiProvider::from_env(), ExtractorConfig::default());
//!
//! let document = UploadedDocument::pdf(std::fs::read("statement.pdf")?);
//! let conversion = extractor.convert(&document).await?;
//!
//! std::fs::write(&conversion.file_name, &conversion.bytes)?;
//! println!("{} sheets", conversion.metadata.sheet_count);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod encode;
mod error;
mod extractor;
mod parser;
mod prompt;
mod schema;
mod types;

#[cfg(test)]
mod tests;

pub use config::{ExtractorConfig, Profile};
pub use encode::{encode_workbook, EMPTY_SHEET_NAME};
pub use error::ExtractorError;
pub use extractor::TableExtractor;
pub use parser::parse_model_response;
pub use prompt::{build_request, EXTRACTION_INSTRUCTIONS};
pub use schema::{response_schema, response_schema_text};
pub use types::{Conversion, ConversionMetadata, XLSX_CONTENT_TYPE};
