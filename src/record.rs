//! The assembled résumé record and its JSON rendering.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Keys of a [`ResumeRecord`], in serialization order.
pub const FIELD_NAMES: [&str; 10] = [
    "name",
    "email",
    "mobile_number",
    "skills",
    "degree",
    "experience",
    "education",
    "linkedin",
    "github",
    "no_of_pages",
];

/// Fields extracted from one résumé.
///
/// Every key is always present when serialized; fields that could not be
/// extracted are `null` (`skills` is an empty list instead).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Candidate name
    pub name: Option<String>,
    /// First email address found
    pub email: Option<String>,
    /// First phone number found
    pub mobile_number: Option<String>,
    /// Skills matched against the taxonomy, capitalized and sorted
    #[serde(default)]
    pub skills: Vec<String>,
    /// Degree names
    pub degree: Option<Vec<String>>,
    /// Experience entries in document order
    pub experience: Option<Vec<String>>,
    /// Education keys with their year when known
    pub education: Option<Vec<String>>,
    /// LinkedIn profile URL
    pub linkedin: Option<String>,
    /// GitHub profile URL
    pub github: Option<String>,
    /// Page count, for formats with pages
    pub no_of_pages: Option<u32>,
}

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize any value with the given format.
pub(crate) fn render_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

impl ResumeRecord {
    /// Render the record as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render_json(self, format)
    }

    /// Parse a record back from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Render(format!("invalid record JSON: {}", e)))
    }

    /// Number of fields that hold a value.
    pub fn populated_fields(&self) -> usize {
        [
            self.name.is_some(),
            self.email.is_some(),
            self.mobile_number.is_some(),
            !self.skills.is_empty(),
            self.degree.is_some(),
            self.experience.is_some(),
            self.education.is_some(),
            self.linkedin.is_some(),
            self.github.is_some(),
            self.no_of_pages.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}
