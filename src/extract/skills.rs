//! Skills taxonomy and the skills extractor.

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::nlp::{ParsedDocument, PosTag};

/// Skills list shipped with the crate.
const BUNDLED_SKILLS: &str = include_str!("../../data/skills.csv");

/// Read-only vocabulary of known skills.
///
/// Most skills are stored lowercase and match in any case. Short
/// alphabetic names (`R`, `C`, `Go`) keep the spelling they were listed
/// with and only match that exact spelling, since lowercase `r` or `go`
/// is ordinary text.
#[derive(Debug, Clone, Default)]
pub struct SkillsTaxonomy {
    skills: HashSet<String>,
    exact: HashSet<String>,
    max_words: usize,
}

impl SkillsTaxonomy {
    /// The bundled default taxonomy.
    pub fn bundled() -> Self {
        match Self::from_reader(BUNDLED_SKILLS.as_bytes()) {
            Ok(taxonomy) => taxonomy,
            Err(e) => {
                log::error!("bundled skills list is malformed: {}", e);
                Self::default()
            }
        }
    }

    /// Load a taxonomy from a CSV file. Every non-empty cell of every row is
    /// a skill; there is no header row.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::Taxonomy(format!("{}: {}", path.display(), e)))?;
        let taxonomy = Self::from_reader(file)?;
        log::debug!(
            "loaded {} skills from {}",
            taxonomy.len(),
            path.display()
        );
        Ok(taxonomy)
    }

    /// Load a taxonomy from CSV data.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut cells = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            cells.extend(record.iter().map(str::to_string));
        }

        let taxonomy = Self::from_skills(cells);
        if taxonomy.is_empty() {
            return Err(Error::Taxonomy("taxonomy contains no skills".to_string()));
        }
        Ok(taxonomy)
    }

    /// Build a taxonomy from an iterator of skill names.
    pub fn from_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut folded = HashSet::new();
        let mut exact = HashSet::new();
        for skill in skills {
            let skill = skill.as_ref().trim();
            if skill.is_empty() {
                continue;
            }
            if is_short(skill) {
                exact.insert(skill.to_string());
            } else {
                folded.insert(normalize(skill));
            }
        }

        let max_words = folded
            .iter()
            .map(|s| s.split(' ').count())
            .max()
            .unwrap_or(0)
            .max(usize::from(!exact.is_empty()));
        Self {
            skills: folded,
            exact,
            max_words,
        }
    }

    /// Membership test. Case-insensitive except for short names, which
    /// must match their listed spelling.
    pub fn contains(&self, skill: &str) -> bool {
        self.contains_exact(skill.trim()) || self.contains_folded(skill)
    }

    fn contains_folded(&self, skill: &str) -> bool {
        self.skills.contains(&normalize(skill))
    }

    fn contains_exact(&self, skill: &str) -> bool {
        self.exact.contains(skill)
    }

    /// Number of skills.
    pub fn len(&self) -> usize {
        self.skills.len() + self.exact.len()
    }

    /// Whether the taxonomy is empty.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.exact.is_empty()
    }

    /// Word count of the longest skill.
    pub fn max_words(&self) -> usize {
        self.max_words
    }
}

/// One or two letters, such as `R` or `Go`.
fn is_short(skill: &str) -> bool {
    skill.chars().count() <= 2 && skill.chars().all(char::is_alphabetic)
}

/// A short name read as a word rather than a language: an initial such as
/// `R.` in `Jane R. Doe`, or a verb followed by a function word as in
/// `Go to market`.
fn reads_as_prose(doc: &ParsedDocument, i: usize) -> bool {
    let Some(next) = doc.tokens.get(i + 1) else {
        return false;
    };
    let initial = doc.tokens[i].text.chars().count() == 1 && next.text == ".";
    initial || matches!(next.pos, PosTag::Adp | PosTag::Det | PosTag::Pron)
}

fn normalize(skill: &str) -> String {
    skill
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Extract skills mentioned in the document.
///
/// Single-word skills match non-stop-word tokens; multi-word skills match
/// noun chunks and their contiguous sub-spans. The result is deduplicated,
/// capitalized and sorted, so identical input always yields identical output.
pub fn extract_skills(doc: &ParsedDocument, taxonomy: &SkillsTaxonomy) -> Vec<String> {
    let mut found: BTreeSet<String> = BTreeSet::new();

    for (i, token) in doc.tokens.iter().enumerate() {
        if token.is_stop || token.pos == PosTag::Punct {
            continue;
        }
        if taxonomy.contains_folded(&token.lower)
            || (taxonomy.contains_exact(&token.text) && !reads_as_prose(doc, i))
        {
            found.insert(token.lower.clone());
        }
    }

    let max_words = taxonomy.max_words();
    if max_words >= 2 {
        for chunk in &doc.noun_chunks {
            let words: Vec<&str> = doc
                .span_tokens(*chunk)
                .iter()
                .map(|t| t.lower.as_str())
                .collect();
            for len in 2..=max_words.min(words.len()) {
                for window in words.windows(len) {
                    let candidate = window.join(" ");
                    if taxonomy.contains_folded(&candidate) {
                        found.insert(candidate);
                    }
                }
            }
        }
    }

    let mut skills: Vec<String> = found.iter().map(|s| capitalize(s)).collect();
    skills.sort();
    skills.dedup();
    skills
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{HeuristicPipeline, LanguagePipeline};

    fn taxonomy() -> SkillsTaxonomy {
        SkillsTaxonomy::from_skills(["Python", "rust", "SQL", "machine learning", "c++"])
    }

    #[test]
    fn test_bundled_taxonomy() {
        let taxonomy = SkillsTaxonomy::bundled();
        assert!(taxonomy.len() > 100);
        assert!(taxonomy.contains("Python"));
        assert!(taxonomy.contains("natural language processing"));
        assert_eq!(taxonomy.max_words(), 3);
    }

    #[test]
    fn test_from_reader() {
        let data = "Python, Rust ,\nMachine   Learning,,\n";
        let taxonomy = SkillsTaxonomy::from_reader(data.as_bytes()).unwrap();
        assert_eq!(taxonomy.len(), 3);
        assert!(taxonomy.contains("machine learning"));
        assert_eq!(taxonomy.max_words(), 2);
    }

    #[test]
    fn test_empty_taxonomy_rejected() {
        let result = SkillsTaxonomy::from_reader(",,\n".as_bytes());
        assert!(matches!(result, Err(Error::Taxonomy(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = SkillsTaxonomy::from_path("/nonexistent/skills.csv");
        assert!(matches!(result, Err(Error::Taxonomy(_))));
    }

    #[test]
    fn test_extract_skills() {
        let doc = HeuristicPipeline::new()
            .process("Built Machine Learning models in Python and C++. Wrote SQL with the team.");
        let skills = extract_skills(&doc, &taxonomy());
        assert_eq!(skills, vec!["C++", "Machine learning", "Python", "Sql"]);
    }

    #[test]
    fn test_multi_word_skill_needs_chunk() {
        // "learning" and "machine" are split across sentences.
        let doc = HeuristicPipeline::new().process("Machine. Learning.");
        assert!(extract_skills(&doc, &taxonomy()).is_empty());
    }

    #[test]
    fn test_idempotent_and_order_independent() {
        let pipeline = HeuristicPipeline::new();
        let a = pipeline.process("Rust, Python, SQL");
        let b = pipeline.process("SQL, Rust, Python, rust");
        let taxonomy = taxonomy();
        assert_eq!(extract_skills(&a, &taxonomy), extract_skills(&a, &taxonomy));
        assert_eq!(extract_skills(&a, &taxonomy), extract_skills(&b, &taxonomy));
    }

    #[test]
    fn test_short_skills_match_case() {
        let taxonomy = SkillsTaxonomy::bundled();
        assert!(taxonomy.contains("R"));
        assert!(!taxonomy.contains("r"));
        assert!(!taxonomy.contains("go"));

        let doc = HeuristicPipeline::new()
            .process("Jane R. Doe. Helped the team go to market. Go to market with Python.");
        assert_eq!(extract_skills(&doc, &taxonomy), vec!["Python"]);

        let doc = HeuristicPipeline::new().process("Languages: Go, R, C and Rust");
        assert_eq!(extract_skills(&doc, &taxonomy), vec!["C", "Go", "R", "Rust"]);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("node.js"), "Node.js");
        assert_eq!(capitalize(""), "");
    }
}
