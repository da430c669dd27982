//! Natural-language processing: the pipeline interface the field extractors
//! consume, and a built-in rule-based implementation.

mod chunker;
mod document;
mod entities;
mod lexicon;
mod pipeline;
mod tagger;
mod tokenizer;

pub use chunker::noun_chunks;
pub use document::{Entity, ParsedDocument, PosTag, Span, Token};
pub use entities::{EntityPattern, EntityRuler};
pub use pipeline::{HeuristicPipeline, LanguagePipeline};
pub use tagger::{split_sentences, tag};
pub use tokenizer::tokenize;
