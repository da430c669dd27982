//! Legacy Word (.doc) text recovery.
//!
//! The binary format stores body text as runs of either UTF-16LE or
//! single-byte characters inside an OLE2 container. Without a full piece
//! table parser, the text is recovered by scanning for long printable runs
//! in both encodings and keeping whichever yields more.

use super::{ExtractedText, TextExtractor};
use crate::detect::{ensure_signature, DocumentFormat};
use crate::error::{Error, Result};

/// Minimum characters in a printable run before it counts as text.
const MIN_RUN: usize = 4;

/// Best-effort extractor for Word 97-2003 documents.
#[derive(Debug, Clone, Default)]
pub struct DocExtractor;

impl DocExtractor {
    /// Create a new DOC extractor.
    pub fn new() -> Self {
        Self
    }
}

/// Latin scripts plus general punctuation (dashes, quotes, bullets).
///
/// Restricting the range keeps byte pairs of single-byte text from being
/// read as CJK ideographs.
fn is_text_unit(unit: u16) -> bool {
    matches!(unit, 0x20..=0x7E | 0xA0..=0x024F | 0x2010..=0x2027) || unit == 0x09
}

fn flush(run: &mut String, out: &mut Vec<String>) {
    if run.trim().chars().count() >= MIN_RUN {
        out.push(run.trim().to_string());
    }
    run.clear();
}

fn scan_utf16(data: &[u8]) -> Vec<String> {
    let mut out = Vec::new();
    let mut run = String::new();
    for pair in data.chunks_exact(2) {
        let unit = u16::from_le_bytes([pair[0], pair[1]]);
        match char::from_u32(unit as u32) {
            Some(c) if is_text_unit(unit) => run.push(c),
            _ => flush(&mut run, &mut out),
        }
    }
    flush(&mut run, &mut out);
    out
}

fn scan_ascii(data: &[u8]) -> Vec<String> {
    let mut out = Vec::new();
    let mut run = String::new();
    for &b in data {
        if (0x20..0x7F).contains(&b) || b == b'\t' {
            run.push(b as char);
        } else {
            flush(&mut run, &mut out);
        }
    }
    flush(&mut run, &mut out);
    out
}

/// Keep runs that look like prose rather than binary noise.
fn plausible(run: &str) -> bool {
    let letters = run.chars().filter(|c| c.is_alphabetic()).count();
    let total = run.chars().count();
    letters * 2 >= total && run.contains(|c: char| c.is_alphabetic())
}

impl TextExtractor for DocExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["doc"]
    }

    fn name(&self) -> &str {
        "doc"
    }

    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText> {
        ensure_signature(bytes, DocumentFormat::Doc)?;

        let wide: Vec<String> = scan_utf16(bytes).into_iter().filter(|r| plausible(r)).collect();
        let narrow: Vec<String> = scan_ascii(bytes).into_iter().filter(|r| plausible(r)).collect();

        let wide_len: usize = wide.iter().map(|r| r.chars().count()).sum();
        let narrow_len: usize = narrow.iter().map(|r| r.chars().count()).sum();
        let lines = if wide_len >= narrow_len { wide } else { narrow };

        if lines.is_empty() {
            return Err(Error::TextExtraction(
                "no recoverable text in DOC file".to_string(),
            ));
        }

        log::debug!("doc: recovered {} text runs", lines.len());
        Ok(ExtractedText::new(lines.join("\n"), DocumentFormat::Doc))
    }
}
