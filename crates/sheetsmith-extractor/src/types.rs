//! Conversion output types

use sheetsmith_domain::Workbook;

/// MIME type of an XLSX workbook
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Result of a successful conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Assembled workbook
    pub workbook: Workbook,

    /// Encoded XLSX bytes
    pub bytes: Vec<u8>,

    /// Suggested download file name
    pub file_name: String,

    /// Metadata about the conversion
    pub metadata: ConversionMetadata,
}

/// Metadata about a conversion
#[derive(Debug, Clone)]
pub struct ConversionMetadata {
    /// Model that produced the tables
    pub model_name: String,

    /// Size of the input document
    pub document_bytes: usize,

    /// Tables returned across all variants
    pub table_count: usize,

    /// Sheets in the workbook
    pub sheet_count: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
