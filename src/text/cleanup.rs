//! Normalization of extracted resume text.
//!
//! Resume templates put icon-font glyphs in front of phone numbers and
//! email addresses, and two-column layouts break words at the margin. The
//! pipeline here undoes those artifacts and keeps line breaks,
//! because section headings and the contact block are line-oriented and a
//! custom entity pipeline matches against them. The extractors themselves
//! run on the single-line form from [`collapse_whitespace`].

use unicode_normalization::UnicodeNormalization;

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// NFC normalization and line-ending repair only
    Minimal,
    /// Everything in [`CleanupOptions::standard`]
    #[default]
    Standard,
}

/// Options for text cleanup.
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Compose accents (NFC) so `José` matches as one word
    pub normalize_unicode: bool,

    /// Expand typographic ligatures and map bullet glyphs to `•`
    pub fold_glyphs: bool,

    /// Drop icon-font (private use) glyphs and U+FFFD left by bad encodings
    pub strip_icon_glyphs: bool,

    /// Drop lines holding only a page marker such as `2` or `Page 2 of 3`
    pub drop_page_markers: bool,

    /// Rejoin words split across a line break with a hyphen
    pub rejoin_hyphenated: bool,

    /// Blank lines kept between blocks (`None` = keep all)
    pub max_blank_lines: Option<usize>,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
        }
    }

    /// NFC only; the text otherwise stays as extracted.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            fold_glyphs: false,
            strip_icon_glyphs: false,
            drop_page_markers: false,
            rejoin_hyphenated: false,
            max_blank_lines: None,
        }
    }

    /// Every repair enabled, with at most one blank line between blocks.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            fold_glyphs: true,
            strip_icon_glyphs: true,
            drop_page_markers: true,
            rejoin_hyphenated: true,
            max_blank_lines: Some(1),
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// What a single character becomes after glyph folding.
enum Fold {
    Keep,
    Drop,
    Replace(&'static str),
}

fn fold_char(c: char, options: &CleanupOptions) -> Fold {
    if options.fold_glyphs {
        let expanded = match c {
            '\u{FB00}' => Some("ff"),
            '\u{FB01}' => Some("fi"),
            '\u{FB02}' => Some("fl"),
            '\u{FB03}' => Some("ffi"),
            '\u{FB04}' => Some("ffl"),
            '\u{FB05}' | '\u{FB06}' => Some("st"),
            '●' | '○' | '■' | '□' | '◆' | '◇' | '▪' | '▫' | '►' | '▻' | '➢' | '❖' | '✓' | '✔' => {
                Some("•")
            }
            _ => None,
        };
        if let Some(s) = expanded {
            return Fold::Replace(s);
        }
    }

    if options.strip_icon_glyphs && (is_private_use(c) || c == '\u{FFFD}') {
        return Fold::Drop;
    }

    Fold::Keep
}

fn is_private_use(c: char) -> bool {
    matches!(c as u32, 0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD)
}

/// Text cleanup pipeline.
#[derive(Debug, Clone, Default)]
pub struct CleanupPipeline {
    options: CleanupOptions,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self { options }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Get the options this pipeline runs with.
    pub fn options(&self) -> &CleanupOptions {
        &self.options
    }

    /// Clean `text`, keeping its line structure.
    pub fn process(&self, text: &str) -> String {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");

        let mut result: String = if self.options.normalize_unicode {
            text.nfc().collect()
        } else {
            text
        };

        if self.options.fold_glyphs || self.options.strip_icon_glyphs {
            result = self.fold_glyphs(&result);
        }

        if self.options.drop_page_markers {
            result = regex!(r"(?m)^[ \t]*(?:[Pp]age[ \t]+)?[-–—]?[ \t]*\d{1,3}[ \t]*(?:of[ \t]+\d{1,3})?[ \t]*[-–—]?[ \t]*$")
                .replace_all(&result, "")
                .into_owned();
        }

        if self.options.rejoin_hyphenated {
            result = rejoin_hyphenated(&result);
        }

        if let Some(max) = self.options.max_blank_lines {
            result = limit_blank_lines(&result, max);
        }

        result.trim().to_string()
    }

    fn fold_glyphs(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match fold_char(c, &self.options) {
                Fold::Keep => out.push(c),
                Fold::Drop => {}
                Fold::Replace(s) => out.push_str(s),
            }
        }
        out
    }
}

/// `infor-\nmation` becomes `information`.
///
/// A hyphen that ends a URL, handle or email fragment is part of the
/// identifier, so `linkedin.com/in/jane-\ndoe` keeps it: `jane-doe`.
fn rejoin_hyphenated(text: &str) -> String {
    regex!(r"(\S*[A-Za-z])-[ \t]*\n[ \t]*([a-z])")
        .replace_all(text, |caps: &regex::Captures| {
            let head = &caps[1];
            if head.contains(&['/', '@'][..]) || head.starts_with("www.") {
                format!("{}-{}", head, &caps[2])
            } else {
                format!("{}{}", head, &caps[2])
            }
        })
        .into_owned()
}

fn limit_blank_lines(text: &str, max: usize) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut blanks = 0usize;
    for line in text.split('\n') {
        if line.trim().is_empty() {
            blanks += 1;
            if blanks > max {
                continue;
            }
        } else {
            blanks = 0;
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Join all whitespace-separated words with a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(text: &str) -> String {
        CleanupPipeline::from_preset(CleanupPreset::Standard).process(text)
    }

    #[test]
    fn test_unicode_normalization() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Minimal);
        let result = pipeline.process("Jose\u{0301} Garci\u{0301}a\r\nEngineer");
        assert_eq!(result, "José García\nEngineer");
    }

    #[test]
    fn test_minimal_keeps_glyphs() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Minimal);
        assert_eq!(pipeline.process("● ﬁ"), "● ﬁ");
    }

    #[test]
    fn test_glyph_folding() {
        assert_eq!(standard("Certiﬁed ﬂuent"), "Certified fluent");
        assert_eq!(standard("● Rust\n○ Python\n✔ SQL"), "• Rust\n• Python\n• SQL");
    }

    #[test]
    fn test_icon_glyphs_stripped() {
        assert_eq!(standard("\u{F0E0} jane@example.com\u{FFFD}"), "jane@example.com");
    }

    #[test]
    fn test_hyphenation_rejoined() {
        let result = standard("Built a data infor-\nmation system");
        assert_eq!(result, "Built a data information system");
    }

    #[test]
    fn test_hyphenated_url_keeps_hyphen() {
        let result = standard("linkedin.com/in/jane-\ndoe\njane.doe@exam-\nple.com");
        assert_eq!(result, "linkedin.com/in/jane-doe\njane.doe@exam-ple.com");
    }

    #[test]
    fn test_hyphenated_words_survive() {
        assert_eq!(standard("e-commerce and full-stack"), "e-commerce and full-stack");
    }

    #[test]
    fn test_page_markers_dropped() {
        let result = standard("Experience\n- 2 -\nPage 3 of 4\nSkills");
        assert!(!result.contains('2'));
        assert!(!result.contains("Page 3"));
        assert!(result.contains("Experience"));
        assert!(result.contains("Skills"));
    }

    #[test]
    fn test_blank_lines_limited() {
        assert_eq!(standard("Education\n\n\n\n\nSkills"), "Education\n\nSkills");
        assert_eq!(limit_blank_lines("a\n\n\nb", 0), "a\nb");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("  Jane\tDoe \n\n Engineer  "),
            "Jane Doe Engineer"
        );
        assert_eq!(collapse_whitespace(""), "");
    }
}
