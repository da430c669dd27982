//! Language pipeline abstraction and the built-in heuristic implementation.

use super::chunker::noun_chunks;
use super::document::ParsedDocument;
use super::entities::EntityRuler;
use super::tagger::{split_sentences, tag};
use super::tokenizer::tokenize;

/// Abstract interface for a natural-language pipeline.
///
/// Implementations turn text into tokens, sentences, noun chunks and named
/// entities. A pipeline is loaded once and shared read-only across
/// documents and worker threads.
pub trait LanguagePipeline: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Run the pipeline over `text`.
    fn process(&self, text: &str) -> ParsedDocument;
}

/// Rule-based English pipeline.
///
/// Tokenizes with a regex, tags with closed-class word lists plus
/// capitalization and suffix rules, and chunks adjective/noun runs. Entities
/// come from an optional [`EntityRuler`].
#[derive(Debug, Clone, Default)]
pub struct HeuristicPipeline {
    ruler: Option<EntityRuler>,
}

impl HeuristicPipeline {
    /// Create a pipeline without entity recognition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an entity ruler.
    pub fn with_entity_ruler(mut self, ruler: EntityRuler) -> Self {
        self.ruler = Some(ruler);
        self
    }

    /// The attached entity ruler, if any.
    pub fn entity_ruler(&self) -> Option<&EntityRuler> {
        self.ruler.as_ref()
    }
}

impl LanguagePipeline for HeuristicPipeline {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn process(&self, text: &str) -> ParsedDocument {
        let mut tokens = tokenize(text);
        let sentences = split_sentences(text, &tokens);
        tag(&mut tokens, &sentences);
        let noun_chunks = noun_chunks(&tokens, &sentences);
        let entities = self
            .ruler
            .as_ref()
            .map(|ruler| ruler.recognize(text))
            .unwrap_or_default();

        ParsedDocument {
            text: text.to_string(),
            tokens,
            sentences,
            noun_chunks,
            entities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::PosTag;

    #[test]
    fn test_process() {
        let pipeline = HeuristicPipeline::new();
        let doc = pipeline.process("Jane Doe. Designed data pipelines in Rust.");

        assert_eq!(doc.tokens.len(), 9);
        assert_eq!(doc.sentences.len(), 2);
        assert_eq!(doc.tokens[0].pos, PosTag::Propn);
        assert!(doc.noun_chunk_texts().contains(&"data pipelines"));
        assert!(doc.entities.is_empty());
    }

    #[test]
    fn test_entities_from_ruler() {
        let ruler = EntityRuler::new().with_pattern("Name", r"^\s*(\S+ \S+)").unwrap();
        let pipeline = HeuristicPipeline::new().with_entity_ruler(ruler);
        let doc = pipeline.process("Jane Doe\nSoftware Engineer");
        assert_eq!(doc.entities_with_label("Name").next().unwrap().text, "Jane Doe");
    }

    #[test]
    fn test_pipeline_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HeuristicPipeline>();
    }
}
