//! Instruction sent with every document

use crate::schema::response_schema_text;
use sheetsmith_domain::{GenerationRequest, UploadedDocument};

/// Fixed instruction for table extraction
pub const EXTRACTION_INSTRUCTIONS: &str = r#"Extract every table from the attached PDF document.

Return the tables three times, as three separate variants:

- "best_effort": your best interpretation of each table. Merge cells that were split across lines, repair headers that wrap, and keep one logical record per row.
- "raw_data": the cell text exactly as printed, row by row, without correcting or merging anything.
- "structured_view": a clean, analysis-ready version of each table with a single header row, consistent column counts and normalized values.

Format:
- Each variant is an array of tables.
- Each table is an array of rows, the header row first when there is one.
- Each row is an array of cell strings. Use "" for empty cells.
- Keep tables in the order they appear in the document.
- If the document contains no tables, return empty arrays.

Return ONLY the JSON object with the keys "best_effort", "raw_data" and "structured_view"."#;

/// Build the single generation request for a document
pub fn build_request(document: &UploadedDocument) -> GenerationRequest {
    GenerationRequest {
        prompt: EXTRACTION_INSTRUCTIONS.to_string(),
        document: document.bytes().to_vec(),
        media_type: document.media_type().to_string(),
        response_schema: response_schema_text(),
    }
}
