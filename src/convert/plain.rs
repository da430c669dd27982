//! Plain text input.

use super::{ExtractedText, TextExtractor};
use crate::detect::DocumentFormat;
use crate::error::{Error, Result};

/// Plain text extractor.
///
/// Accepts UTF-8 (with or without BOM) and UTF-16 with a BOM; anything else
/// is decoded as Latin-1. Embedded NUL bytes mean the file is binary.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Create a new plain text extractor.
    pub fn new() -> Self {
        Self
    }
}

fn decode_utf16(bytes: &[u8], big_endian: bool) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|c| {
            if big_endian {
                u16::from_be_bytes([c[0], c[1]])
            } else {
                u16::from_le_bytes([c[0], c[1]])
            }
        })
        .collect();
    String::from_utf16_lossy(&units)
}

/// Decode text bytes, returning `None` for binary content.
fn decode_text(bytes: &[u8]) -> Option<String> {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        return Some(decode_utf16(rest, true));
    }
    if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        return Some(decode_utf16(rest, false));
    }

    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    if bytes.contains(&0) {
        return None;
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => Some(s.to_string()),
        // Latin-1
        Err(_) => Some(bytes.iter().map(|&b| b as char).collect()),
    }
}

impl TextExtractor for PlainTextExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn name(&self) -> &str {
        "txt"
    }

    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText> {
        let text = decode_text(bytes)
            .ok_or_else(|| Error::TextExtraction("text file contains binary data".to_string()))?;
        Ok(ExtractedText::new(text, DocumentFormat::Text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_with_bom() {
        let extracted = PlainTextExtractor::new()
            .extract(b"\xEF\xBB\xBFJos\xC3\xA9 Garc\xC3\xADa")
            .unwrap();
        assert_eq!(extracted.text, "José García");
    }

    #[test]
    fn test_utf16le_with_bom() {
        let mut data = vec![0xFF, 0xFE];
        data.extend("Jane".encode_utf16().flat_map(|u| u.to_le_bytes()));
        let extracted = PlainTextExtractor::new().extract(&data).unwrap();
        assert_eq!(extracted.text, "Jane");
    }

    #[test]
    fn test_latin1_fallback() {
        let extracted = PlainTextExtractor::new().extract(b"Ren\xE9").unwrap();
        assert_eq!(extracted.text, "René");
    }

    #[test]
    fn test_binary_rejected() {
        let result = PlainTextExtractor::new().extract(b"abc\x00\x01\x02");
        assert!(matches!(result, Err(Error::TextExtraction(_))));
    }
}
