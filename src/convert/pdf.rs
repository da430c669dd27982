//! PDF text extraction.
//!
//! Page count comes from the page tree via `lopdf`; the text itself is
//! decoded by `pdf-extract`, which handles font encodings and ToUnicode maps.

use super::{ExtractedText, TextExtractor};
use crate::detect::{ensure_signature, DocumentFormat};
use crate::error::{Error, Result};
use std::panic::{self, AssertUnwindSafe};

/// PDF extractor backed by lopdf and pdf-extract.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }

    /// Count the pages of a PDF held in memory.
    pub fn page_count(data: &[u8]) -> Result<u32> {
        let doc = lopdf::Document::load_mem(data)?;
        if doc.is_encrypted() {
            log::warn!("PDF is encrypted; text recovery may be incomplete");
        }
        Ok(doc.get_pages().len() as u32)
    }

    fn decode_text(data: &[u8]) -> Result<String> {
        // pdf-extract panics on some malformed content streams.
        match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(data))) {
            Ok(result) => Ok(result?),
            Err(_) => Err(Error::TextExtraction(
                "PDF content stream could not be decoded".to_string(),
            )),
        }
    }
}

impl TextExtractor for PdfExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText> {
        ensure_signature(bytes, DocumentFormat::Pdf)?;

        let pages = Self::page_count(bytes)?;
        let text = Self::decode_text(bytes)?;
        log::debug!("pdf: {} pages, {} chars", pages, text.len());

        Ok(ExtractedText::new(text, DocumentFormat::Pdf).with_page_count(pages))
    }
}
