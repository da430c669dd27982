//! Text extraction: turning a document blob into raw text.
//!
//! Each format has a [`TextExtractor`]; the [`ExtractorRegistry`] dispatches
//! on file extension. Custom extractors can be registered for new formats.
//!
//! # Example
//!
//! ```no_run
//! use resparse::convert::ExtractorRegistry;
//! use std::path::Path;
//!
//! fn main() -> resparse::Result<()> {
//!     let registry = ExtractorRegistry::with_defaults();
//!     let extracted = registry.extract_file(Path::new("resume.pdf"))?;
//!     println!("{} pages", extracted.page_count.unwrap_or(0));
//!     Ok(())
//! }
//! ```

mod doc;
mod docx;
mod pdf;
mod plain;

pub use doc::DocExtractor;
pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use plain::PlainTextExtractor;

use crate::detect::DocumentFormat;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Raw text recovered from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Extracted text, line structure preserved where the format has one
    pub text: String,

    /// Number of pages, for formats that have pages
    pub page_count: Option<u32>,

    /// Source format
    pub format: DocumentFormat,
}

impl ExtractedText {
    /// Create a new extraction result without page information.
    pub fn new(text: String, format: DocumentFormat) -> Self {
        Self {
            text,
            page_count: None,
            format,
        }
    }

    /// Set the page count.
    pub fn with_page_count(mut self, pages: u32) -> Self {
        self.page_count = Some(pages);
        self
    }

    /// Whether no text was recovered.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Trait for text extractors.
///
/// Implement this trait to add support for a new document format.
pub trait TextExtractor: Send + Sync {
    /// Get the supported file extensions for this extractor.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["pdf"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Extract text from in-memory document bytes.
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText>;

    /// Extract text from a file.
    fn extract_file(&self, path: &Path) -> Result<ExtractedText> {
        let data = std::fs::read(path)?;
        self.extract(&data)
    }

    /// Check if this extractor supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.trim_start_matches('.').to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for text extractors.
///
/// The registry maps file extensions to extractors.
#[derive(Clone)]
pub struct ExtractorRegistry {
    extractors: HashMap<String, Arc<dyn TextExtractor>>,
    by_name: HashMap<String, Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the default extractors (pdf, docx, doc, txt).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PdfExtractor::new()));
        registry.register(Arc::new(DocxExtractor::new()));
        registry.register(Arc::new(DocExtractor::new()));
        registry.register(Arc::new(PlainTextExtractor::new()));
        registry
    }

    /// Register an extractor for all its supported extensions.
    pub fn register(&mut self, extractor: Arc<dyn TextExtractor>) {
        for ext in extractor.supported_extensions() {
            self.extractors
                .insert(ext.to_lowercase(), extractor.clone());
        }
        self.by_name
            .insert(extractor.name().to_lowercase(), extractor);
    }

    /// Get an extractor by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn TextExtractor>> {
        self.extractors
            .get(&ext.trim_start_matches('.').to_lowercase())
            .cloned()
    }

    /// Get an extractor by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn TextExtractor>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.get_by_extension(ext).is_some()
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.extractors.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Resolve the extractor for a path, failing with
    /// [`Error::UnsupportedFormat`] before the file is touched.
    pub fn resolve(&self, path: &Path) -> Result<Arc<dyn TextExtractor>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat("<none>".to_string()))?;

        self.get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_lowercase()))
    }

    /// Extract text from a file using the extractor for its extension.
    pub fn extract_file(&self, path: &Path) -> Result<ExtractedText> {
        let extractor = self.resolve(path)?;
        log::debug!("extracting {} with {}", path.display(), extractor.name());
        extractor.extract_file(path)
    }

    /// Extract text from bytes, using `ext` to pick the extractor.
    pub fn extract_bytes(&self, bytes: &[u8], ext: &str) -> Result<ExtractedText> {
        let extractor = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.trim_start_matches('.').to_lowercase()))?;
        extractor.extract(bytes)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorRegistry")
            .field("extensions", &self.supported_extensions())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_with_defaults() {
        let registry = ExtractorRegistry::with_defaults();
        assert_eq!(
            registry.supported_extensions(),
            vec!["doc", "docx", "pdf", "text", "txt"]
        );
        assert!(registry.supports("PDF"));
        assert!(registry.supports(".docx"));
        assert!(!registry.supports("xyz"));
    }

    #[test]
    fn test_registry_get_by_extension() {
        let registry = ExtractorRegistry::with_defaults();
        let extractor = registry.get_by_extension("pdf");
        assert!(extractor.is_some());
        assert_eq!(extractor.unwrap().name(), "pdf");
    }

    #[test]
    fn test_registry_get_by_name() {
        let registry = ExtractorRegistry::with_defaults();
        assert!(registry.get_by_name("docx").is_some());
        assert!(registry.get_by_name("unknown").is_none());
    }

    #[test]
    fn test_unsupported_before_read() {
        let registry = ExtractorRegistry::with_defaults();
        // The file does not exist: an I/O error would mean it was opened.
        let result = registry.extract_file(Path::new("/nonexistent/resume.xyz"));
        assert!(matches!(result, Err(Error::UnsupportedFormat(ref e)) if e == "xyz"));

        let result = registry.extract_file(Path::new("/nonexistent/resume"));
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_extract_bytes_text() {
        let registry = ExtractorRegistry::with_defaults();
        let extracted = registry.extract_bytes(b"Jane Doe\nEngineer", "TXT").unwrap();
        assert_eq!(extracted.text, "Jane Doe\nEngineer");
        assert_eq!(extracted.format, DocumentFormat::Text);
        assert_eq!(extracted.page_count, None);
    }
}
