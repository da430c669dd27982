//! Resume parsing: text extraction, the language pipeline and the field
//! extractors tied together.

mod options;
mod resume_parser;

pub use options::{EntityLabels, ParseOptions};
pub use resume_parser::ResumeParser;
