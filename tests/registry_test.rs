//! Integration tests for the text extractor registry.

use std::path::Path;
use std::sync::Arc;
use resparse::convert::{ExtractedText, ExtractorRegistry, PdfExtractor, TextExtractor};
use resparse::error::{Error, Result};
use resparse::{DocumentFormat, ParseOptions, ResumeParser};

/// Mock extractor for testing.
struct MockExtractor {
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl MockExtractor {
    fn new(extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self { extensions, name }
    }
}

impl TextExtractor for MockExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn name(&self) -> &str {
        self.name
    }

    fn extract(&self, _bytes: &[u8]) -> Result<ExtractedText> {
        Ok(ExtractedText::new(
            "Jane Doe\njane.doe@example.com\nSkills: Rust".to_string(),
            DocumentFormat::Text,
        )
        .with_page_count(3))
    }
}

#[test]
fn test_registry_new() {
    let registry = ExtractorRegistry::new();

    // Empty registry should support nothing
    assert!(!registry.supports("pdf"));
    assert!(!registry.supports("txt"));
}

#[test]
fn test_registry_with_defaults() {
    let registry = ExtractorRegistry::with_defaults();

    assert!(registry.supports("pdf"));
    assert!(registry.supports("DOCX")); // Case insensitive
    assert!(registry.supports("doc"));
    assert!(registry.supports("txt"));
    assert!(!registry.supports("rtf"));
}

#[test]
fn test_registry_register() {
    let mut registry = ExtractorRegistry::new();
    let extractor = Arc::new(MockExtractor::new(vec!["rtf", "odt"], "office"));

    registry.register(extractor);

    assert!(registry.supports("rtf"));
    assert!(registry.supports("odt"));
    assert!(!registry.supports("pdf"));
    assert_eq!(registry.get_by_name("office").unwrap().name(), "office");
}

#[test]
fn test_registry_override() {
    let mut registry = ExtractorRegistry::with_defaults();
    registry.register(Arc::new(MockExtractor::new(vec!["pdf"], "mock-pdf")));

    let extractor = registry.get_by_extension("pdf").unwrap();
    assert_eq!(extractor.name(), "mock-pdf");
}

#[test]
fn test_pdf_extractor_supports() {
    let extractor = PdfExtractor::new();

    assert!(extractor.supports_extension("pdf"));
    assert!(extractor.supports_extension("PDF"));
    assert!(extractor.supports_extension(".pdf"));
    assert!(!extractor.supports_extension("docx"));
}

#[test]
fn test_unsupported_extension_checked_first() {
    let registry = ExtractorRegistry::with_defaults();
    let result = registry.extract_file(Path::new("/does/not/exist/resume.xyz"));
    assert!(matches!(result, Err(Error::UnsupportedFormat(ref e)) if e == "xyz"));
}

#[test]
fn test_parser_with_custom_registry() {
    let mut registry = ExtractorRegistry::new();
    registry.register(Arc::new(MockExtractor::new(vec!["rtf"], "rtf")));

    let parser = ResumeParser::with_options(ParseOptions::default())
        .unwrap()
        .with_registry(registry);

    let record = parser.parse_bytes(b"ignored", "rtf").unwrap();
    assert_eq!(record.email.as_deref(), Some("jane.doe@example.com"));
    assert_eq!(record.skills, vec!["Rust"]);
    assert_eq!(record.no_of_pages, Some(3));

    // Defaults are gone once the registry is replaced.
    assert!(matches!(
        parser.parse_bytes(b"Jane", "txt"),
        Err(Error::UnsupportedFormat(_))
    ));
}
