//! Uploaded document value type.

/// Media type for PDF documents
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// A document received from a client for conversion.
///
/// Lives only for the duration of one request. The bytes are held in memory;
/// nothing is written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    bytes: Vec<u8>,
    media_type: String,
    file_name: Option<String>,
}

impl UploadedDocument {
    /// Create a document with an explicit media type
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type: media_type.into(),
            file_name: None,
        }
    }

    /// Create a PDF document
    pub fn pdf(bytes: Vec<u8>) -> Self {
        Self::new(bytes, PDF_MEDIA_TYPE)
    }

    /// Attach the client-supplied file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Raw document bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Declared media type
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Size in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Client-supplied file name, if any
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Suggested file name for the generated workbook.
    ///
    /// Uses the stem of the uploaded file name, keeping only characters that
    /// are safe inside a `Content-Disposition` header. Falls back to `tables`.
    pub fn workbook_file_name(&self) -> String {
        let stem = self
            .file_name
            .as_deref()
            .map(|name| {
                // Strip any client-side path
                let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
                match base.rfind('.') {
                    Some(idx) if idx > 0 => &base[..idx],
                    _ => base,
                }
            })
            .map(|stem| {
                stem.chars()
                    .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' ' | '.'))
                    .collect::<String>()
                    .trim()
                    .to_string()
            })
            .filter(|stem| !stem.is_empty())
            .unwrap_or_else(|| "tables".to_string());

        format!("{}.xlsx", stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_document() {
        let doc = UploadedDocument::pdf(vec![1, 2, 3]);
        assert_eq!(doc.media_type(), PDF_MEDIA_TYPE);
        assert_eq!(doc.size(), 3);
        assert_eq!(doc.file_name(), None);
    }

    #[test]
    fn test_workbook_file_name_from_upload() {
        let doc = UploadedDocument::pdf(vec![]).with_file_name("report-2024.pdf");
        assert_eq!(doc.workbook_file_name(), "report-2024.xlsx");
    }

    #[test]
    fn test_workbook_file_name_default() {
        let doc = UploadedDocument::pdf(vec![]);
        assert_eq!(doc.workbook_file_name(), "tables.xlsx");
    }

    #[test]
    fn test_workbook_file_name_strips_path_and_quotes() {
        let doc = UploadedDocument::pdf(vec![]).with_file_name("C:\\docs\\q3 \"final\".pdf");
        assert_eq!(doc.workbook_file_name(), "q3 final.xlsx");

        let doc = UploadedDocument::pdf(vec![]).with_file_name("../../etc/passwd");
        assert_eq!(doc.workbook_file_name(), "passwd.xlsx");
    }

    #[test]
    fn test_workbook_file_name_unusable_stem() {
        let doc = UploadedDocument::pdf(vec![]).with_file_name("\"\".pdf");
        assert_eq!(doc.workbook_file_name(), "tables.xlsx");
    }
}
