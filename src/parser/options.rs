//! Parsing options and configuration.

use crate::extract::DEFAULT_NAME_WINDOW;
use crate::text::CleanupPreset;
use std::path::PathBuf;

/// Entity labels consulted on the custom pipeline's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityLabels {
    /// Label carrying the candidate name
    pub name: String,
    /// Label carrying degree names
    pub degree: String,
}

impl Default for EntityLabels {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            degree: "Degree".to_string(),
        }
    }
}

/// Options for parsing resumes.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// CSV file with the skills taxonomy (bundled list when `None`)
    pub skills_file: Option<PathBuf>,

    /// Phone number pattern overriding the built-in one
    pub custom_regex: Option<String>,

    /// Entity labels for name and degree hints
    pub entity_labels: EntityLabels,

    /// Number of leading tokens searched for a name
    pub name_window: usize,

    /// Text cleanup applied after extraction
    pub cleanup: CleanupPreset,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load skills from a CSV file.
    pub fn with_skills_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.skills_file = Some(path.into());
        self
    }

    /// Override the phone number pattern.
    ///
    /// When the pattern has capture groups, the matched groups are joined
    /// to form the number.
    pub fn with_custom_regex(mut self, pattern: impl Into<String>) -> Self {
        self.custom_regex = Some(pattern.into());
        self
    }

    /// Set the entity labels.
    pub fn with_entity_labels(mut self, labels: EntityLabels) -> Self {
        self.entity_labels = labels;
        self
    }

    /// Set the label read for the candidate name.
    pub fn with_name_label(mut self, label: impl Into<String>) -> Self {
        self.entity_labels.name = label.into();
        self
    }

    /// Set the label read for degrees.
    pub fn with_degree_label(mut self, label: impl Into<String>) -> Self {
        self.entity_labels.degree = label.into();
        self
    }

    /// Set the name search window in tokens.
    pub fn with_name_window(mut self, tokens: usize) -> Self {
        self.name_window = tokens;
        self
    }

    /// Set the cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.cleanup = preset;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            skills_file: None,
            custom_regex: None,
            entity_labels: EntityLabels::default(),
            name_window: DEFAULT_NAME_WINDOW,
            cleanup: CleanupPreset::Standard,
        }
    }
}
