//! # resparse
//!
//! Resume field extraction library for Rust.
//!
//! This library reads resumes (PDF, DOCX, DOC, plain text) and pulls out
//! structured fields: name, email, phone number, skills, degrees, education,
//! experience, LinkedIn and GitHub profiles, and page count.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resparse::{parse_file, JsonFormat};
//!
//! fn main() -> resparse::Result<()> {
//!     let record = parse_file("resume.pdf")?;
//!     println!("{}", record.to_json(JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Multiple input formats**: PDF, DOCX, legacy DOC, plain text
//! - **Pluggable language pipeline**: bring your own tokenizer, tagger and
//!   entity model through [`nlp::LanguagePipeline`]
//! - **Custom skills taxonomy**: load skills from a CSV file
//! - **Batch mode**: parse whole directories in parallel with Rayon

macro_rules! regex {
    ($re:expr $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).expect("static regex pattern"))
    }};
}

pub mod batch;
pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod nlp;
pub mod parser;
pub mod record;
pub mod text;

// Re-export commonly used types
pub use batch::{BatchEvent, BatchOptions, BatchOutcome, BatchReport};
pub use convert::{ExtractedText, ExtractorRegistry, TextExtractor};
pub use detect::{detect_format_from_path, sniff_format, DocumentFormat};
pub use error::{Error, Result};
pub use extract::SkillsTaxonomy;
pub use nlp::{HeuristicPipeline, LanguagePipeline, ParsedDocument};
pub use parser::{EntityLabels, ParseOptions, ResumeParser};
pub use record::{JsonFormat, ResumeRecord, FIELD_NAMES};
pub use text::{CleanupOptions, CleanupPreset};

use std::path::Path;

/// Parse a resume file with default options.
///
/// # Arguments
///
/// * `path` - Path to a `.pdf`, `.docx`, `.doc` or `.txt` file
///
/// # Example
///
/// ```no_run
/// use resparse::parse_file;
///
/// let record = parse_file("resume.pdf").unwrap();
/// println!("Email: {:?}", record.email);
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ResumeRecord> {
    ResumeParser::with_defaults()?.parse_file(path)
}

/// Parse a resume file with custom options.
///
/// # Example
///
/// ```no_run
/// use resparse::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new()
///     .with_skills_file("skills.csv")
///     .with_custom_regex(r"\+44 \d{4} \d{6}");
/// let record = parse_file_with_options("cv.docx", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<ResumeRecord> {
    ResumeParser::with_options(options)?.parse_file(path)
}

/// Parse a resume from bytes; `ext` names the format (`"pdf"`, `"docx"`, ...).
///
/// # Example
///
/// ```no_run
/// use resparse::parse_bytes;
///
/// let data = std::fs::read("resume.docx").unwrap();
/// let record = parse_bytes(&data, "docx").unwrap();
/// ```
pub fn parse_bytes(data: &[u8], ext: &str) -> Result<ResumeRecord> {
    ResumeParser::with_defaults()?.parse_bytes(data, ext)
}

/// Extract the cleaned text of a resume file.
///
/// # Example
///
/// ```no_run
/// use resparse::extract_text;
///
/// let text = extract_text("resume.pdf").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    ResumeParser::with_defaults()?.extract_text(path)
}

/// Parse a resume file and render the record as JSON.
///
/// # Example
///
/// ```no_run
/// use resparse::{to_json, JsonFormat};
///
/// let json = to_json("resume.pdf", JsonFormat::Pretty).unwrap();
/// std::fs::write("resume.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    parse_file(path)?.to_json(format)
}

/// Parse every supported file in a directory with default options.
///
/// # Example
///
/// ```no_run
/// use resparse::parse_directory;
///
/// let report = parse_directory("./resumes").unwrap();
/// for (path, err) in report.failures() {
///     eprintln!("{}: {}", path.display(), err);
/// }
/// ```
pub fn parse_directory<P: AsRef<Path>>(dir: P) -> Result<BatchReport> {
    let parser = ResumeParser::with_defaults()?;
    batch::parse_directory(&parser, dir, &BatchOptions::default())
}

/// Parse a resume file without blocking the async runtime.
///
/// The file is read with `tokio::fs` and parsing runs on the blocking pool.
#[cfg(feature = "async")]
pub async fn parse_file_async<P: AsRef<Path>>(
    parser: std::sync::Arc<ResumeParser>,
    path: P,
) -> Result<ResumeRecord> {
    let path = path.as_ref();
    parser.registry().resolve(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_string();

    let data = tokio::fs::read(path).await?;
    tokio::task::spawn_blocking(move || parser.parse_bytes(&data, &ext))
        .await
        .map_err(|e| Error::Other(format!("parse task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bytes_text() {
        let record = parse_bytes(b"Jane Doe\njane.doe@example.com", "txt").unwrap();
        assert_eq!(record.email.as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = parse_file("resume.xyz");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = parse_file("/nonexistent/resume.pdf");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
