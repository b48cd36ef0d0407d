//! Sheetsmith Domain Layer
//!
//! Core data model for converting PDF tables into spreadsheet workbooks.
//! This crate has no external dependencies and defines the value types and
//! trait seams that the provider, extractor and server crates build upon.
//!
//! ## Key Concepts
//!
//! - **UploadedDocument**: the PDF bytes received from a client, never persisted
//! - **Variant**: one of the three extraction strategies requested from the model
//! - **ExtractionResult**: tables per variant, each table a list of string rows
//! - **Workbook**: ordered named sheets assembled from an extraction result
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and assembly logic only
//! - The AI provider is reached through the [`traits::LlmProvider`] trait

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod table;
pub mod traits;
pub mod workbook;

// Re-exports for convenience
pub use document::{UploadedDocument, PDF_MEDIA_TYPE};
pub use table::{ExtractionResult, Row, Table, Variant};
pub use traits::{GenerationRequest, LlmProvider};
pub use workbook::{Sheet, Workbook};
