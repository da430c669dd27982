//! DOCX text extraction using docx-rs.
//!
//! Paragraphs become lines; table rows become lines with cells joined by
//! ` | `. Runs inside hyperlinks are kept, since profile URLs often live there.
//! The page count comes from `<Pages>` in `docProps/app.xml`, which Word
//! writes on save; documents without it report no page count.

use super::{ExtractedText, TextExtractor};
use crate::detect::{ensure_signature, DocumentFormat};
use crate::error::{Error, Result};
use docx_rs::{DocumentChild, ParagraphChild, RunChild, TableCellContent, TableChild, TableRowChild};
use std::io::{Cursor, Read};

const APP_PROPS: &str = "docProps/app.xml";

/// DOCX extractor.
#[derive(Debug, Clone)]
pub struct DocxExtractor {
    preserve_tables: bool,
}

impl DocxExtractor {
    /// Create a new DOCX extractor that keeps table rows together.
    pub fn new() -> Self {
        Self {
            preserve_tables: true,
        }
    }

    /// Configure whether table cells are joined per row or emitted one per line.
    pub fn with_tables(mut self, preserve: bool) -> Self {
        self.preserve_tables = preserve;
        self
    }

    /// Page count recorded in the extended properties part, if any.
    pub fn page_count(bytes: &[u8]) -> Option<u32> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).ok()?;
        let mut part = archive.by_name(APP_PROPS).ok()?;
        let mut xml = String::new();
        part.read_to_string(&mut xml).ok()?;

        let caps = regex!(r"<Pages>\s*(\d+)\s*</Pages>").captures(&xml)?;
        let pages = caps[1].parse::<u32>().ok()?;
        (pages > 0).then_some(pages)
    }

    fn paragraph_text(p: &docx_rs::Paragraph) -> String {
        let mut text = String::new();
        for child in &p.children {
            match child {
                ParagraphChild::Run(r) => Self::push_run(&mut text, r),
                ParagraphChild::Hyperlink(h) => {
                    for child in &h.children {
                        if let ParagraphChild::Run(r) = child {
                            Self::push_run(&mut text, r);
                        }
                    }
                }
                _ => {}
            }
        }
        text
    }

    fn push_run(text: &mut String, run: &docx_rs::Run) {
        for child in &run.children {
            match child {
                RunChild::Text(t) => text.push_str(&t.text),
                RunChild::Tab(_) => text.push('\t'),
                RunChild::Break(_) => text.push('\n'),
                _ => {}
            }
        }
    }

    fn table_lines(&self, t: &docx_rs::Table, lines: &mut Vec<String>) {
        for row in &t.rows {
            let TableChild::TableRow(r) = row;
            let mut cells = Vec::new();
            for cell in &r.cells {
                let TableRowChild::TableCell(c) = cell;
                let cell_text = c
                    .children
                    .iter()
                    .filter_map(|child| match child {
                        TableCellContent::Paragraph(p) => Some(Self::paragraph_text(p)),
                        _ => None,
                    })
                    .filter(|s| !s.trim().is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                if !cell_text.trim().is_empty() {
                    cells.push(cell_text.trim().to_string());
                }
            }

            if self.preserve_tables {
                if !cells.is_empty() {
                    lines.push(cells.join(" | "));
                }
            } else {
                lines.extend(cells);
            }
        }
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for DocxExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText> {
        ensure_signature(bytes, DocumentFormat::Docx)?;

        let docx = docx_rs::read_docx(bytes)
            .map_err(|e| Error::TextExtraction(format!("failed to read DOCX: {}", e)))?;

        let mut lines: Vec<String> = Vec::new();
        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(p) => {
                    let text = Self::paragraph_text(p);
                    if !text.trim().is_empty() {
                        lines.push(text);
                    }
                }
                DocumentChild::Table(t) => self.table_lines(t, &mut lines),
                _ => {}
            }
        }

        let extracted = ExtractedText::new(lines.join("\n"), DocumentFormat::Docx);
        match Self::page_count(bytes) {
            Some(pages) => {
                log::debug!("docx: {} lines, {} pages", lines.len(), pages);
                Ok(extracted.with_page_count(pages))
            }
            None => {
                log::debug!("docx: {} lines, no page count", lines.len());
                Ok(extracted)
            }
        }
    }
}
