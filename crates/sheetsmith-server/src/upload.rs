//! Upload gate: reads the single PDF field from a multipart request.
//!
//! Bytes are buffered in memory only. The declared content type is checked
//! when present; the file body itself is not sniffed.

use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::http::StatusCode;
use sheetsmith_domain::{UploadedDocument, PDF_MEDIA_TYPE};
use thiserror::Error;
use tracing::debug;

/// Multipart field carrying the document
pub const FILE_FIELD: &str = "pdf";

/// Allowance for multipart boundaries and part headers on top of the file
/// ceiling when sizing the request body limit
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Upload rejected before conversion
#[derive(Debug, Error)]
pub enum UploadError {
    /// No `pdf` field, or the field was empty
    #[error("No file supplied")]
    NoFile,

    /// More than one `pdf` field
    #[error("Only one file may be uploaded per request")]
    MultipleFiles,

    /// File exceeds the ceiling
    #[error("File too large (max {})", format_size(.0))]
    TooLarge(usize),

    /// Declared content type is not PDF
    #[error("Unsupported file type '{0}', expected a PDF")]
    UnsupportedType(String),

    /// Request is not a multipart upload
    #[error("Invalid upload request: {0}")]
    Malformed(String),

    /// Multipart stream failed while reading
    #[error("Upload failed: {message}")]
    Transport {
        /// Status reported by the multipart layer
        status: StatusCode,
        /// Error text
        message: String,
    },
}

impl UploadError {
    /// HTTP status for this rejection
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            UploadError::Transport { status, .. } => *status,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<MultipartError> for UploadError {
    fn from(e: MultipartError) -> Self {
        UploadError::Transport {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl From<MultipartRejection> for UploadError {
    fn from(e: MultipartRejection) -> Self {
        UploadError::Malformed(e.body_text())
    }
}

fn format_size(bytes: &usize) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;

    let bytes = *bytes as f64;
    let (value, unit) = if bytes >= MIB {
        (bytes / MIB, "MB")
    } else if bytes >= KIB {
        (bytes / KIB, "KB")
    } else {
        (bytes, "bytes")
    };

    if value.fract() == 0.0 {
        format!("{} {}", value as u64, unit)
    } else {
        format!("{:.2} {}", value, unit)
    }
}

/// True when a declared content type names a PDF
fn is_pdf_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case(PDF_MEDIA_TYPE))
        .unwrap_or(false)
}

/// Read the `pdf` field from a multipart request.
///
/// Other fields are skipped. Reading stops as soon as the ceiling is passed.
pub async fn read_upload(
    multipart: &mut Multipart,
    max_bytes: usize,
) -> Result<UploadedDocument, UploadError> {
    let mut document: Option<UploadedDocument> = None;

    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }
        if document.is_some() {
            return Err(UploadError::MultipleFiles);
        }

        let media_type = match field.content_type() {
            Some(content_type) if is_pdf_content_type(content_type) => PDF_MEDIA_TYPE.to_string(),
            Some(content_type) => return Err(UploadError::UnsupportedType(content_type.to_string())),
            None => PDF_MEDIA_TYPE.to_string(),
        };
        let file_name = field.file_name().map(str::to_string);

        let mut bytes = Vec::new();
        while let Some(chunk) = field.chunk().await? {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(UploadError::TooLarge(max_bytes));
            }
            bytes.extend_from_slice(&chunk);
        }

        let mut uploaded = UploadedDocument::new(bytes, media_type);
        if let Some(name) = file_name {
            uploaded = uploaded.with_file_name(name);
        }
        document = Some(uploaded);
    }

    match document {
        Some(doc) if doc.size() > 0 => Ok(doc),
        _ => Err(UploadError::NoFile),
    }
}
