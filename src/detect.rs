//! Document format detection and validation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported resume document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Portable Document Format
    Pdf,
    /// Office Open XML word processing document
    Docx,
    /// Legacy Word 97-2003 binary document
    Doc,
    /// Plain text
    Text,
}

impl DocumentFormat {
    /// Resolve a format from a file extension (with or without the leading dot).
    ///
    /// # Example
    /// ```
    /// use resparse::detect::DocumentFormat;
    ///
    /// assert_eq!(DocumentFormat::from_extension(".PDF").unwrap(), DocumentFormat::Pdf);
    /// assert!(DocumentFormat::from_extension("xyz").is_err());
    /// ```
    pub fn from_extension(ext: &str) -> Result<Self> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "doc" => Ok(DocumentFormat::Doc),
            "txt" | "text" => Ok(DocumentFormat::Text),
            _ => Err(Error::UnsupportedFormat(ext)),
        }
    }

    /// Canonical extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Doc => "doc",
            DocumentFormat::Text => "txt",
        }
    }

    /// Whether documents of this format record a page count.
    pub fn has_pages(&self) -> bool {
        matches!(self, DocumentFormat::Pdf | DocumentFormat::Docx)
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
/// ZIP local file header, the container of DOCX.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
/// OLE2 compound document header, the container of DOC.
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Detect the document format of a path from its extension.
///
/// Fails with [`Error::UnsupportedFormat`] when the path has no extension
/// or the extension is not one of `pdf`, `docx`, `doc`, `txt`.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocumentFormat> {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| Error::UnsupportedFormat("<none>".to_string()))?;
    DocumentFormat::from_extension(ext)
}

/// Sniff the container format from the leading bytes.
///
/// Plain text has no signature, so `None` means "not a binary container
/// we recognize" rather than "invalid".
pub fn sniff_format(data: &[u8]) -> Option<DocumentFormat> {
    if data.starts_with(PDF_MAGIC) {
        Some(DocumentFormat::Pdf)
    } else if data.starts_with(ZIP_MAGIC) {
        Some(DocumentFormat::Docx)
    } else if data.starts_with(OLE_MAGIC) {
        Some(DocumentFormat::Doc)
    } else {
        None
    }
}

/// Check if bytes start with a PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    sniff_format(data) == Some(DocumentFormat::Pdf)
}

/// Check that the leading bytes agree with the declared format.
pub(crate) fn ensure_signature(data: &[u8], expected: DocumentFormat) -> Result<()> {
    if expected == DocumentFormat::Text {
        return Ok(());
    }
    match sniff_format(data) {
        Some(found) if found == expected => Ok(()),
        _ => Err(Error::TextExtraction(format!(
            "content is not a valid {} document",
            expected
        ))),
    }
}
