//! The resume parser.

use super::options::{EntityLabels, ParseOptions};
use crate::convert::{ExtractedText, ExtractorRegistry};
use crate::error::Result;
use crate::extract::{
    extract_degree, extract_education, extract_email, extract_experience, extract_github,
    extract_linkedin, extract_mobile_number, extract_name, extract_skills, SkillsTaxonomy,
};
use crate::nlp::{Entity, HeuristicPipeline, LanguagePipeline};
use crate::record::ResumeRecord;
use crate::text::{collapse_whitespace, CleanupPipeline};
use regex::Regex;
use std::path::Path;
use std::sync::Arc;

/// Turns resume documents into [`ResumeRecord`]s.
///
/// The parser holds everything that is loaded once: the language pipeline,
/// the skills taxonomy and the compiled phone pattern. It is `Send + Sync`
/// and meant to be shared across threads by reference or behind an `Arc`.
///
/// # Example
///
/// ```
/// use resparse::ResumeParser;
///
/// let parser = ResumeParser::with_defaults().unwrap();
/// let record = parser.parse_text("Jane Doe\njane.doe@example.com\nSkills: Python, SQL");
/// assert_eq!(record.email.as_deref(), Some("jane.doe@example.com"));
/// ```
pub struct ResumeParser {
    pipeline: Arc<dyn LanguagePipeline>,
    custom_pipeline: Option<Arc<dyn LanguagePipeline>>,
    registry: ExtractorRegistry,
    cleanup: CleanupPipeline,
    taxonomy: SkillsTaxonomy,
    phone_pattern: Option<Regex>,
    labels: EntityLabels,
    name_window: usize,
}

impl ResumeParser {
    /// Create a parser around a language pipeline.
    ///
    /// Fails when the skills file cannot be loaded or the custom phone
    /// pattern does not compile.
    pub fn new(pipeline: Arc<dyn LanguagePipeline>, options: ParseOptions) -> Result<Self> {
        let taxonomy = match &options.skills_file {
            Some(path) => SkillsTaxonomy::from_path(path)?,
            None => SkillsTaxonomy::bundled(),
        };

        let phone_pattern = options
            .custom_regex
            .as_deref()
            .map(Regex::new)
            .transpose()?;

        log::debug!(
            "resume parser ready: pipeline={}, {} skills, custom phone pattern: {}",
            pipeline.name(),
            taxonomy.len(),
            phone_pattern.is_some()
        );

        Ok(Self {
            pipeline,
            custom_pipeline: None,
            registry: ExtractorRegistry::with_defaults(),
            cleanup: CleanupPipeline::from_preset(options.cleanup),
            taxonomy,
            phone_pattern,
            labels: options.entity_labels,
            name_window: options.name_window,
        })
    }

    /// Create a parser with the built-in heuristic pipeline and default options.
    pub fn with_defaults() -> Result<Self> {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with the built-in heuristic pipeline.
    pub fn with_options(options: ParseOptions) -> Result<Self> {
        Self::new(Arc::new(HeuristicPipeline::new()), options)
    }

    /// Attach a pipeline whose entities serve as name and degree hints.
    ///
    /// It runs over the cleaned text with line breaks intact.
    pub fn with_custom_pipeline(mut self, pipeline: Arc<dyn LanguagePipeline>) -> Self {
        self.custom_pipeline = Some(pipeline);
        self
    }

    /// Replace the text extractor registry.
    pub fn with_registry(mut self, registry: ExtractorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The extractor registry in use.
    pub fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    /// The skills taxonomy in use.
    pub fn taxonomy(&self) -> &SkillsTaxonomy {
        &self.taxonomy
    }

    /// Parse a resume file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ResumeRecord> {
        let path = path.as_ref();
        let extracted = self.registry.extract_file(path)?;
        log::debug!(
            "{}: extracted {} chars ({})",
            path.display(),
            extracted.text.len(),
            extracted.format
        );
        Ok(self.assemble(&extracted))
    }

    /// Parse resume bytes; `ext` selects the format.
    pub fn parse_bytes(&self, bytes: &[u8], ext: &str) -> Result<ResumeRecord> {
        let extracted = self.registry.extract_bytes(bytes, ext)?;
        Ok(self.assemble(&extracted))
    }

    /// Parse resume text that has already been extracted.
    pub fn parse_text(&self, text: &str) -> ResumeRecord {
        self.assemble(&ExtractedText::new(text.to_string(), crate::DocumentFormat::Text))
    }

    /// Extract and clean the text of a file without running the extractors.
    pub fn extract_text<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let extracted = self.registry.extract_file(path.as_ref())?;
        Ok(self.cleanup.process(&extracted.text))
    }

    fn assemble(&self, extracted: &ExtractedText) -> ResumeRecord {
        let raw = self.cleanup.process(&extracted.text);
        let text = collapse_whitespace(&raw);

        let doc = self.pipeline.process(&text);
        log::debug!(
            "pipeline {}: {} tokens, {} sentences, {} noun chunks",
            self.pipeline.name(),
            doc.tokens.len(),
            doc.sentences.len(),
            doc.noun_chunks.len()
        );

        let custom = self.custom_pipeline.as_ref().map(|p| p.process(&raw));
        let name_hint = custom
            .as_ref()
            .and_then(|d| d.entities_with_label(&self.labels.name).next());
        let degree_hints: Vec<&Entity> = custom
            .as_ref()
            .map(|d| d.entities_with_label(&self.labels.degree).collect())
            .unwrap_or_default();

        if extracted.page_count.is_none() && extracted.format.has_pages() {
            log::debug!("{} document carries no page count", extracted.format);
        }

        let record = ResumeRecord {
            name: extract_name(&doc, name_hint, self.name_window),
            email: extract_email(&text),
            mobile_number: extract_mobile_number(&text, self.phone_pattern.as_ref()),
            skills: extract_skills(&doc, &self.taxonomy),
            degree: extract_degree(&doc, &degree_hints),
            experience: extract_experience(&doc),
            education: extract_education(&doc),
            linkedin: extract_linkedin(&text),
            github: extract_github(&text),
            no_of_pages: extracted.page_count,
        };

        log::debug!("assembled record with {} fields", record.populated_fields());
        record
    }
}

impl std::fmt::Debug for ResumeParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResumeParser")
            .field("pipeline", &self.pipeline.name())
            .field(
                "custom_pipeline",
                &self.custom_pipeline.as_ref().map(|p| p.name()),
            )
            .field("registry", &self.registry)
            .field("skills", &self.taxonomy.len())
            .field("labels", &self.labels)
            .field("name_window", &self.name_window)
            .finish()
    }
}
