//! Pattern-based entity recognition.
//!
//! An [`EntityRuler`] stands in for a custom-trained entity model: each
//! pattern carries the label it emits, so the label set is whatever the
//! caller configures.

use regex::Regex;

use super::document::Entity;
use crate::error::Result;
use crate::extract::education::DEGREE_PATTERN;

/// A labelled regular expression.
#[derive(Debug, Clone)]
pub struct EntityPattern {
    label: String,
    regex: Regex,
}

impl EntityPattern {
    /// Compile a pattern for `label`.
    ///
    /// When the pattern has capture groups, the first participating group is
    /// the entity text; otherwise the whole match is.
    pub fn new(label: impl Into<String>, pattern: &str) -> Result<Self> {
        Ok(Self {
            label: label.into(),
            regex: Regex::new(pattern)?,
        })
    }

    /// The label this pattern emits.
    pub fn label(&self) -> &str {
        &self.label
    }

    fn find_all(&self, text: &str, out: &mut Vec<Entity>) {
        for caps in self.regex.captures_iter(text) {
            let m = caps
                .iter()
                .skip(1)
                .flatten()
                .next()
                .or_else(|| caps.get(0));
            if let Some(m) = m {
                let trimmed = m.as_str().trim();
                if trimmed.is_empty() {
                    continue;
                }
                let lead = m.as_str().len() - m.as_str().trim_start().len();
                out.push(Entity {
                    label: self.label.clone(),
                    text: trimmed.to_string(),
                    start: m.start() + lead,
                    end: m.start() + lead + trimmed.len(),
                });
            }
        }
    }
}

/// Ordered collection of entity patterns.
#[derive(Debug, Clone, Default)]
pub struct EntityRuler {
    patterns: Vec<EntityPattern>,
}

impl EntityRuler {
    /// Create an empty ruler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ruler that tags academic degrees with `label`.
    pub fn degrees(label: impl Into<String>) -> Self {
        let mut ruler = Self::new();
        if let Ok(pattern) = EntityPattern::new(label, DEGREE_PATTERN) {
            ruler.patterns.push(pattern);
        }
        ruler
    }

    /// Add a pattern, builder style.
    pub fn with_pattern(mut self, label: impl Into<String>, pattern: &str) -> Result<Self> {
        self.add_pattern(label, pattern)?;
        Ok(self)
    }

    /// Add a pattern.
    pub fn add_pattern(&mut self, label: impl Into<String>, pattern: &str) -> Result<()> {
        self.patterns.push(EntityPattern::new(label, pattern)?);
        Ok(())
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the ruler has no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Labels this ruler can emit, in registration order.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for pattern in &self.patterns {
            if !labels.contains(&pattern.label()) {
                labels.push(pattern.label());
            }
        }
        labels
    }

    /// Run every pattern over `text`.
    ///
    /// Entities come back sorted by position; where two overlap, the one that
    /// starts first (then the longer one) wins.
    pub fn recognize(&self, text: &str) -> Vec<Entity> {
        let mut found = Vec::new();
        for pattern in &self.patterns {
            pattern.find_all(text, &mut found);
        }

        found.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut entities: Vec<Entity> = Vec::with_capacity(found.len());
        for entity in found {
            if entities.last().map_or(true, |last| entity.start >= last.end) {
                entities.push(entity);
            }
        }
        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_group_is_entity_text() {
        let ruler = EntityRuler::new()
            .with_pattern("Name", r"Name:\s*([A-Z][a-z]+ [A-Z][a-z]+)")
            .unwrap();
        let entities = ruler.recognize("Name: Jane Doe\nEmail: jane@example.com");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, "Name");
        assert_eq!(entities[0].text, "Jane Doe");
        assert_eq!(entities[0].start, 6);
        assert_eq!(entities[0].end, 14);
    }

    #[test]
    fn test_overlaps_resolved() {
        let ruler = EntityRuler::new()
            .with_pattern("Short", "Rust")
            .unwrap()
            .with_pattern("Long", "Rust Belt")
            .unwrap();
        let entities = ruler.recognize("Rust Belt and Rust");
        let labels: Vec<&str> = entities.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Long", "Short"]);
    }

    #[test]
    fn test_degree_preset() {
        let ruler = EntityRuler::degrees("Degree");
        assert_eq!(ruler.labels(), vec!["Degree"]);
        let entities = ruler.recognize("B.Tech in Computer Science, 2016. MBA, 2020.");
        let texts: Vec<&str> = entities.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["B.Tech", "MBA"]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(EntityRuler::new().with_pattern("Name", "([A-Z]").is_err());
    }
}
