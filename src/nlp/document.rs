//! Parsed-document types produced by a language pipeline.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tag (universal tag set subset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    /// Proper noun
    Propn,
    /// Common noun
    Noun,
    /// Adjective
    Adj,
    /// Verb or auxiliary
    Verb,
    /// Adverb
    Adv,
    /// Determiner
    Det,
    /// Adposition
    Adp,
    /// Pronoun
    Pron,
    /// Coordinating conjunction
    Cconj,
    /// Number
    Num,
    /// Punctuation
    Punct,
    /// Symbol
    Sym,
    /// Other (emails, URLs, unclassifiable tokens)
    X,
}

impl PosTag {
    /// Whether the tag can sit inside a noun phrase.
    pub fn is_nominal(&self) -> bool {
        matches!(self, PosTag::Propn | PosTag::Noun | PosTag::Adj)
    }
}

/// A single token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token text as it appears in the source
    pub text: String,
    /// Lowercased text
    pub lower: String,
    /// Byte offset of the token in the document text
    pub offset: usize,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Whether the token is a stop word
    pub is_stop: bool,
}

impl Token {
    /// Create an untagged token at the given offset.
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        let text = text.into();
        let lower = text.to_lowercase();
        Self {
            text,
            lower,
            offset,
            pos: PosTag::X,
            is_stop: false,
        }
    }

    /// Byte offset just past the token.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Whether every character is alphabetic (allowing inner `.`, `-`, `'`).
    pub fn is_alpha(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_alphabetic)
            && self
                .text
                .chars()
                .all(|c| c.is_alphabetic() || matches!(c, '.' | '-' | '\''))
    }

    /// Whether the token starts with an uppercase letter.
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }
}

/// Half-open range of token indices `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A labelled entity found in the document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity label, e.g. "Name" or "Degree"
    pub label: String,
    /// Matched text
    pub text: String,
    /// Byte offset of the entity start
    pub start: usize,
    /// Byte offset just past the entity
    pub end: usize,
}

/// Output of a [`LanguagePipeline`](super::LanguagePipeline) run over one text.
///
/// Lives for a single extraction; nothing here is shared between documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// The text the pipeline ran over
    pub text: String,
    /// Tokens in document order
    pub tokens: Vec<Token>,
    /// Sentence spans over `tokens`
    pub sentences: Vec<Span>,
    /// Noun-chunk spans over `tokens`
    pub noun_chunks: Vec<Span>,
    /// Named entities
    pub entities: Vec<Entity>,
}

impl ParsedDocument {
    /// Create an empty document over `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Source text covered by a token span.
    pub fn span_text(&self, span: Span) -> &str {
        if span.is_empty() || span.end > self.tokens.len() {
            return "";
        }
        let start = self.tokens[span.start].offset;
        let end = self.tokens[span.end - 1].end();
        self.text.get(start..end).unwrap_or("")
    }

    /// Tokens covered by a span.
    pub fn span_tokens(&self, span: Span) -> &[Token] {
        let end = span.end.min(self.tokens.len());
        let start = span.start.min(end);
        &self.tokens[start..end]
    }

    /// Text of every sentence, in order.
    pub fn sentence_texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| self.span_text(*s)).collect()
    }

    /// Text of every noun chunk, in order.
    pub fn noun_chunk_texts(&self) -> Vec<&str> {
        self.noun_chunks.iter().map(|s| self.span_text(*s)).collect()
    }

    /// Entities carrying the given label, compared case-sensitively.
    pub fn entities_with_label<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Entity> {
        self.entities.iter().filter(move |e| e.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> ParsedDocument {
        let mut doc = ParsedDocument::new("Jane Doe, Rust");
        doc.tokens = vec![
            Token::new("Jane", 0),
            Token::new("Doe", 5),
            Token::new(",", 8),
            Token::new("Rust", 10),
        ];
        doc
    }

    #[test]
    fn test_span_text() {
        let doc = doc();
        assert_eq!(doc.span_text(Span::new(0, 2)), "Jane Doe");
        assert_eq!(doc.span_text(Span::new(1, 4)), "Doe, Rust");
        assert_eq!(doc.span_text(Span::new(2, 2)), "");
        assert_eq!(doc.span_text(Span::new(3, 9)), "");
    }

    #[test]
    fn test_token_shape() {
        let token = Token::new("O'Neil", 0);
        assert!(token.is_alpha());
        assert!(token.is_capitalized());
        assert_eq!(token.lower, "o'neil");
        assert_eq!(token.end(), 6);

        assert!(!Token::new("c++", 0).is_alpha());
        assert!(!Token::new("2019", 0).is_capitalized());
    }

    #[test]
    fn test_entities_with_label() {
        let mut doc = doc();
        doc.entities.push(Entity {
            label: "Name".into(),
            text: "Jane Doe".into(),
            start: 0,
            end: 8,
        });
        assert_eq!(doc.entities_with_label("Name").count(), 1);
        assert_eq!(doc.entities_with_label("name").count(), 0);
    }
}
